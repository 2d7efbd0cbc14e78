pub mod dataset;
pub mod repository;
pub mod versioning;

pub use dataset::bundled_posts;
pub use repository::{ContentRepository, LoadSource, RepositoryError, Saved};
pub use versioning::{checksum, PayloadError, PostsPayload, PAYLOAD_VERSION};
