use serde::{Deserialize, Serialize};

/// Name of the synthetic category that matches everything.
pub const ALL_CATEGORY: &str = "All";

/// Free-text search input.
/// Normalization rules:
/// - Lowercase
/// - No trimming or splitting: the whole input is one substring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub raw: String,
    pub needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

/// Category selector. `"All"` maps to the wildcard, anything else is an
/// exact, case-sensitive label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn as_str(&self) -> &str {
        match self {
            TagFilter::All => ALL_CATEGORY,
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl From<&str> for TagFilter {
    fn from(raw: &str) -> Self {
        if raw == ALL_CATEGORY {
            TagFilter::All
        } else {
            TagFilter::Tag(raw.to_string())
        }
    }
}

impl From<String> for TagFilter {
    fn from(raw: String) -> Self {
        if raw == ALL_CATEGORY {
            TagFilter::All
        } else {
            TagFilter::Tag(raw)
        }
    }
}

impl From<TagFilter> for String {
    fn from(filter: TagFilter) -> Self {
        match filter {
            TagFilter::All => ALL_CATEGORY.to_string(),
            TagFilter::Tag(tag) => tag,
        }
    }
}
