pub mod display;
pub mod draft;
pub mod post;

pub use crate::types::identifiers::PostId;
pub use display::{author_initials, format_long_date};
pub use draft::{parse_tags, PostDraft};
pub use post::{DraftError, Post};
