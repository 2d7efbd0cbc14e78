use chrono::NaiveDate;
use folio_core::config::StoreConfig;
use folio_core::post::{
    author_initials, format_long_date, parse_tags, DraftError, Post, PostDraft, PostId,
};
use folio_core::repository::bundled_posts;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[test]
fn draft_keeps_supplied_fields() {
    let draft = PostDraft::new("Title")
        .excerpt("Ex")
        .content("Body")
        .author("Guest")
        .date(NaiveDate::from_ymd_opt(2022, 2, 2).unwrap())
        .read_time("2 min read")
        .tags(["a", "b"])
        .image("https://example.com/i.png");

    let post = Post::from_draft(PostId::new(9), draft.clone(), &StoreConfig::default(), today())
        .unwrap();

    assert_eq!(post.id, PostId::new(9));
    assert_eq!(PostDraft::from(&post), draft);
}

#[test]
fn blank_optional_fields_take_defaults() {
    let config = StoreConfig::default();
    let draft = PostDraft::new("Title").author("  ").image("");

    let post = Post::from_draft(PostId::new(1), draft, &config, today()).unwrap();

    assert_eq!(post.author, "Admin");
    assert_eq!(post.image, config.placeholder_image);
    assert_eq!(post.date, today());
}

#[test]
fn missing_title_is_the_only_required_field() {
    let err = Post::from_draft(PostId::new(1), PostDraft::default(), &StoreConfig::default(), today())
        .unwrap_err();
    assert_eq!(err, DraftError::MissingTitle);
}

#[test]
fn tags_field_parsing() {
    assert_eq!(parse_tags("react, css ,, node "), vec!["react", "css", "node"]);
    assert!(parse_tags("  ").is_empty());
}

#[test]
fn display_helpers() {
    assert_eq!(format_long_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "January 5, 2024");
    assert_eq!(format_long_date(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()), "December 31, 2023");
    assert_eq!(author_initials("Sahil Khatiwada"), "SK");
    assert_eq!(author_initials("  "), "");
}

#[test]
fn route_ids_parse_as_integers() {
    assert_eq!(PostId::parse_route("12"), Some(PostId::new(12)));
    assert_eq!(PostId::parse_route("12abc"), None);
    assert_eq!(PostId::new(12).to_string(), "12");
}

#[test]
fn bundled_posts_have_unique_ids_and_tags() {
    let posts = bundled_posts();
    assert!(!posts.is_empty());

    let mut ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), posts.len());
    assert!(posts.iter().all(|p| !p.title.is_empty()));
}
