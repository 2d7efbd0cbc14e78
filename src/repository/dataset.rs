use crate::post::Post;

const BUNDLED_POSTS: &str = include_str!("../../data/blog.json");

/// Posts shipped with the site, used until the first local edit.
pub fn bundled_posts() -> Vec<Post> {
    match serde_json::from_str(BUNDLED_POSTS) {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("bundled blog dataset is malformed: {e}");
            Vec::new()
        }
    }
}
