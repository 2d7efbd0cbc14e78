use std::fs;

use folio_core::config::{ConfigError, StoreConfig};
use tempfile::tempdir;

#[test]
fn empty_config_is_all_defaults() {
    let config = StoreConfig::from_toml_str("").unwrap();
    assert_eq!(config, StoreConfig::default());
}

#[test]
fn partial_config_overrides_only_given_fields() {
    let config = StoreConfig::from_toml_str(
        r#"
admin_password = "letmein"
related_limit = 5
"#,
    )
    .unwrap();

    assert_eq!(config.admin_password, "letmein");
    assert_eq!(config.related_limit, 5);
    assert_eq!(config.posts_key, "blogPosts");
    assert_eq!(config.admin_key, "isAdmin");
}

#[test]
fn config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    fs::write(&path, "posts_key = \"posts_v2\"\n").unwrap();

    let config = StoreConfig::from_path(&path).unwrap();
    assert_eq!(config.posts_key, "posts_v2");
}

#[test]
fn bad_config_reports_errors() {
    assert!(matches!(
        StoreConfig::from_toml_str("related_limit = \"three\""),
        Err(ConfigError::Toml(_))
    ));

    let dir = tempdir().unwrap();
    assert!(matches!(
        StoreConfig::from_path(&dir.path().join("missing.toml")),
        Err(ConfigError::Io(_))
    ));
}
