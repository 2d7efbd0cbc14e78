use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::post::{DraftError, Post};

/// The editable fields of a post, as submitted by the admin editor.
///
/// Create and update both take a full draft: update replaces every field of
/// the stored record, it never merges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: Option<NaiveDate>,
    pub read_time: String,
    pub tags: Vec<String>,
    pub image: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The only required field is a non-blank title.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        Ok(())
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = read_time.into();
        self
    }

    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

// Prefills the edit form.
impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            date: Some(post.date),
            read_time: post.read_time.clone(),
            tags: post.tags.clone(),
            image: post.image.clone(),
        }
    }
}

/// Split the editor's comma-separated tag field.
/// Order is kept; blank entries are dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
