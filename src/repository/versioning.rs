use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::post::Post;

pub const PAYLOAD_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported payload version: {0}")]
    UnsupportedVersion(u32),
    #[error("Checksum mismatch: payload says {expected}, posts hash to {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

// Field order is the on-disk order: version, checksum, posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsPayload {
    pub version: u32,
    pub checksum: String,
    pub posts: Vec<Post>,
}

#[derive(Serialize)]
struct PayloadRef<'a> {
    version: u32,
    checksum: String,
    posts: &'a [Post],
}

/// `sha256:<hex>` over the compact JSON encoding of `posts`.
pub fn checksum(posts: &[Post]) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(posts)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}

impl PostsPayload {
    /// Serialize the whole list. Every mutation rewrites the full payload.
    pub fn encode(posts: &[Post]) -> Result<String, serde_json::Error> {
        let payload = PayloadRef {
            version: PAYLOAD_VERSION,
            checksum: checksum(posts)?,
            posts,
        };
        serde_json::to_string(&payload)
    }

    /// Accepts the current envelope and the legacy shape, a bare JSON array
    /// of posts written before the payload was versioned.
    pub fn decode(raw: &str) -> Result<Vec<Post>, PayloadError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;

        if value.is_array() {
            return Ok(serde_json::from_value(value)?);
        }

        let payload: PostsPayload = serde_json::from_value(value)?;
        if payload.version != PAYLOAD_VERSION {
            return Err(PayloadError::UnsupportedVersion(payload.version));
        }

        let actual = checksum(&payload.posts)?;
        if actual != payload.checksum {
            return Err(PayloadError::ChecksumMismatch {
                expected: payload.checksum,
                actual,
            });
        }

        Ok(payload.posts)
    }
}
