use crate::post::Post;
use crate::projects::Project;
use super::query::{SearchQuery, TagFilter};

/// Anything the list views filter: labels for the category buttons, text
/// for the search box.
pub trait Searchable {
    fn labels(&self) -> Vec<&str>;

    /// `needle` is already lowercased.
    fn matches_text(&self, needle: &str) -> bool;

    fn has_label(&self, label: &str) -> bool {
        self.labels().iter().any(|l| *l == label)
    }

    fn matches(&self, tag: &TagFilter, query: &SearchQuery) -> bool {
        let tag_ok = match tag {
            TagFilter::All => true,
            TagFilter::Tag(t) => self.has_label(t),
        };
        tag_ok && self.matches_text(&query.needle)
    }
}

impl Searchable for Post {
    fn labels(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn has_label(&self, label: &str) -> bool {
        self.has_tag(label)
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.excerpt.to_lowercase().contains(needle)
    }
}

impl Searchable for Project {
    fn labels(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
