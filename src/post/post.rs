use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::StoreConfig;
use crate::types::identifiers::PostId;
use super::draft::PostDraft;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title is required")]
    MissingTitle,
}

/// A blog article.
///
/// `tags` is never null on the wire: a missing field decodes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl Post {
    /// Build a new record from editor fields.
    ///
    /// Blank author, read time and image take the configured defaults; a
    /// missing date becomes `today`. Only creation applies defaults.
    pub fn from_draft(
        id: PostId,
        draft: PostDraft,
        config: &StoreConfig,
        today: NaiveDate,
    ) -> Result<Self, DraftError> {
        draft.validate()?;

        Ok(Post {
            id,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            author: or_default(draft.author, &config.default_author),
            date: draft.date.unwrap_or(today),
            read_time: or_default(draft.read_time, &config.default_read_time),
            tags: draft.tags,
            image: or_default(draft.image, &config.placeholder_image),
        })
    }

    /// Full replacement for an edit: every field comes from `draft` as given,
    /// except a missing date, which keeps this post's date.
    pub fn replaced_by(&self, draft: PostDraft) -> Result<Self, DraftError> {
        draft.validate()?;

        Ok(Post {
            id: self.id,
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            date: draft.date.unwrap_or(self.date),
            read_time: draft.read_time,
            tags: draft.tags,
            image: draft.image,
        })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Image URL for display; records persisted before the placeholder
    /// existed may carry an empty string.
    pub fn image_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.image.trim().is_empty() {
            placeholder
        } else {
            &self.image
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}
