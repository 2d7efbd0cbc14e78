pub mod identifiers;

pub use identifiers::{Clock, IdGenerator, PostId, SystemClock};
