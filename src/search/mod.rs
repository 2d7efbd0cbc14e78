//! Pure filtering over post and project lists. Nothing here mutates its
//! input or touches storage; output order always follows input order.

pub mod matching;
pub mod query;

use std::collections::BTreeSet;

use crate::post::Post;
use crate::types::identifiers::PostId;
pub use matching::Searchable;
pub use query::{SearchQuery, TagFilter, ALL_CATEGORY};

/// Items passing both the category and the text filter, in input order.
pub fn filter<'a, T, I>(items: I, tag: &TagFilter, query: &SearchQuery) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| item.matches(tag, query))
        .collect()
}

/// `"All"` followed by every distinct label in first-seen order.
pub fn categories<'a, T, I>(items: I) -> Vec<String>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = BTreeSet::new();
    let mut out = vec![ALL_CATEGORY.to_string()];
    for item in items {
        for label in item.labels() {
            if seen.insert(label) {
                out.push(label.to_string());
            }
        }
    }
    out
}

/// Newest first. Stable, so posts sharing a date keep their stored order.
pub fn sort_most_recent<'a, I>(posts: I) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut sorted: Vec<&Post> = posts.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Up to `limit` other posts sharing at least one tag with post `id`.
pub fn related_posts(posts: &[Post], id: PostId, limit: usize) -> Vec<&Post> {
    let Some(current) = posts.iter().find(|p| p.id == id) else {
        return Vec::new();
    };

    posts
        .iter()
        .filter(|p| p.id != id && p.tags.iter().any(|t| current.has_tag(t)))
        .take(limit)
        .collect()
}
