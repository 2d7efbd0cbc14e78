use chrono::NaiveDate;
use folio_core::post::{Post, PostId};
use folio_core::search::{
    categories, filter, related_posts, sort_most_recent, SearchQuery, TagFilter,
};

fn make_post(id: i64, title: &str, excerpt: &str, tags: &[&str], date: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: String::new(),
        author: "Sahil".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        read_time: "5 min read".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: String::new(),
    }
}

fn sample() -> Vec<Post> {
    vec![
        make_post(1, "Hooks in depth", "State and effects", &["react", "css"], "2024-01-10"),
        make_post(2, "Node streams", "Backpressure explained", &["node"], "2024-03-02"),
        make_post(3, "Styling forms", "Accessible inputs with CSS", &["css"], "2023-11-20"),
        make_post(4, "Server components", "React on the server", &["react", "node"], "2024-03-02"),
    ]
}

fn ids(posts: &[&Post]) -> Vec<i64> {
    posts.iter().map(|p| p.id.get()).collect()
}

#[test]
fn invariant_all_with_empty_query_is_identity() {
    let posts = sample();
    let visible = filter(&posts, &TagFilter::All, &SearchQuery::new(""));

    assert_eq!(visible.len(), posts.len());
    assert!(visible.iter().zip(&posts).all(|(a, b)| *a == b));
}

#[test]
fn invariant_filter_is_idempotent() {
    let posts = sample();
    let tag = TagFilter::from("react");
    let query = SearchQuery::new("server");

    let once = filter(&posts, &tag, &query);
    let twice = filter(once.iter().copied(), &tag, &query);

    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn invariant_filter_preserves_input_order() {
    let posts = sample();
    let visible = filter(&posts, &TagFilter::from("node"), &SearchQuery::new(""));
    assert_eq!(ids(&visible), vec![2, 4]);
}

#[test]
fn scenario_tag_and_title_search() {
    let posts = vec![
        make_post(1, "Hooks in depth", "", &["react", "css"], "2024-01-01"),
        make_post(2, "Getting started with Node", "", &["node"], "2024-01-02"),
    ];

    let by_tag = filter(&posts, &TagFilter::from("react"), &SearchQuery::new(""));
    assert_eq!(ids(&by_tag), vec![1]);

    let by_query = filter(&posts, &TagFilter::All, &SearchQuery::new("NODE"));
    assert_eq!(ids(&by_query), vec![2]);
}

#[test]
fn tag_match_is_case_sensitive() {
    let posts = sample();
    let visible = filter(&posts, &TagFilter::from("React"), &SearchQuery::new(""));
    assert!(visible.is_empty());
}

#[test]
fn query_matches_excerpt_but_not_content() {
    let mut posts = sample();
    posts[0].content = "only in the body: backpressure".to_string();

    let visible = filter(&posts, &TagFilter::All, &SearchQuery::new("BACKPRESSURE"));
    assert_eq!(ids(&visible), vec![2]);
}

#[test]
fn tag_and_query_combine_with_and() {
    let posts = sample();
    let visible = filter(&posts, &TagFilter::from("css"), &SearchQuery::new("hooks"));
    assert_eq!(ids(&visible), vec![1]);

    let none = filter(&posts, &TagFilter::from("node"), &SearchQuery::new("hooks"));
    assert!(none.is_empty());
}

#[test]
fn categories_start_with_all_in_first_seen_order() {
    let posts = sample();
    assert_eq!(categories(&posts), vec!["All", "react", "css", "node"]);
    assert_eq!(categories(&Vec::<Post>::new()), vec!["All"]);
}

#[test]
fn tag_filter_round_trips_through_strings() {
    assert_eq!(TagFilter::from("All"), TagFilter::All);
    assert_eq!(TagFilter::from("css"), TagFilter::Tag("css".into()));
    assert_eq!(TagFilter::All.as_str(), "All");

    let json = serde_json::to_string(&TagFilter::Tag("node".into())).unwrap();
    assert_eq!(json, "\"node\"");
    let back: TagFilter = serde_json::from_str("\"All\"").unwrap();
    assert_eq!(back, TagFilter::All);
}

#[test]
fn sort_most_recent_is_stable_and_descending() {
    let posts = sample();
    let sorted = sort_most_recent(&posts);
    // 2 and 4 share a date and keep stored order.
    assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
}

#[test]
fn related_posts_share_a_tag_and_exclude_self() {
    let posts = sample();

    assert_eq!(ids(&related_posts(&posts, PostId::new(1), 3)), vec![3, 4]);
    assert_eq!(ids(&related_posts(&posts, PostId::new(4), 3)), vec![1, 2]);
    assert_eq!(ids(&related_posts(&posts, PostId::new(4), 1)), vec![1]);
    assert!(related_posts(&posts, PostId::new(99), 3).is_empty());
}
