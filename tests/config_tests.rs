//! Integration tests for configuration management

use edu_portal::config::{Config, ConfigOverrides, MAX_REDIRECT_DELAY_MS};
use std::time::Duration;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("eduportal").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty());
    assert_eq!(config.site.courses_resource, "../assets/data/courses.json");
    assert_eq!(config.site.checkout_path, "/razorpay/checkout.html");
    assert_eq!(config.site.redirect_delay_ms, 1000);
    assert!(!config.paths.storage_file.is_empty());
    assert!(!config.paths.storage_file.contains("$EDU_PORTAL"));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[site]
page_dir = "./public/student/pages"
courses_resource = "../data/courses.json"
checkout_path = "/pay.html"
login_path = "/login.html"
redirect_delay_ms = 250

[paths]
storage_file = "/tmp/session.json"
pages_dir = "./out"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.site.page_dir, "./public/student/pages");
    assert_eq!(config.site.checkout_path, "/pay.html");
    assert_eq!(config.site.login_path, "/login.html");
    assert_eq!(config.site.redirect_delay_ms, 250);
    assert_eq!(config.paths.storage_file, "/tmp/session.json");
    assert_eq!(config.paths.pages_dir, "./out");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.site.checkout_path, "");
    assert_eq!(config.site.redirect_delay_ms, 1000);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$EDU_PORTAL/test.log"

[paths]
storage_file = "$EDU_PORTAL/local_storage.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("eduportal"));
    assert!(!config.logging.file.contains("$EDU_PORTAL"));
    assert!(config.paths.storage_file.ends_with("local_storage.json"));
    assert!(!config.paths.storage_file.contains("$EDU_PORTAL"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("checkout-path", "/pay/here.html")
        .expect("Failed to set checkout path");
    assert_eq!(config.get("checkout_path").unwrap(), "/pay/here.html");

    config
        .set("redirect_delay_ms", "0")
        .expect("Failed to set redirect delay");
    assert_eq!(config.site.redirect_delay_ms, 0);
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("redirect_delay_ms", "soon").is_err());
    assert!(config.set("redirect_delay_ms", "60001").is_err());
    assert!(config.set("redirect_delay_ms", &u64::MAX.to_string()).is_err());
    assert_eq!(config.site.redirect_delay_ms, 1000);
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("no_such_key", "x").is_err());
    assert!(config.get("no_such_key").is_none());
}

#[test]
fn test_config_unset_restores_default() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("login_path", "/elsewhere.html").unwrap();
    config.set("redirect_delay_ms", "5").unwrap();
    config.unset("login_path", &defaults).unwrap();
    config.unset("redirect-delay-ms", &defaults).unwrap();

    assert_eq!(config.site.login_path, defaults.site.login_path);
    assert_eq!(config.site.redirect_delay_ms, defaults.site.redirect_delay_ms);
    assert!(config.unset("bogus", &defaults).is_err());
}

#[test]
fn test_apply_overrides_only_touches_given_fields() {
    let mut config = Config::from_defaults();
    let original_checkout = config.site.checkout_path.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("error".to_string()),
        storage_file: Some("/tmp/other.json".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.paths.storage_file, "/tmp/other.json");
    assert_eq!(config.site.checkout_path, original_checkout);
}

#[test]
fn test_merge_defaults_fills_only_empty_fields() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"

[site]
login_path = "/custom-login.html"
"#,
    )
    .unwrap();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.site.login_path, "/custom-login.html");
    assert_eq!(config.site.checkout_path, defaults.site.checkout_path);
    assert_eq!(config.paths.pages_dir, defaults.paths.pages_dir);

    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_load_from_creates_missing_file() {
    let (_temp, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(config.site.checkout_path, Config::from_defaults().site.checkout_path);
}

#[test]
fn test_save_then_load_keeps_user_settings() {
    let (_temp, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("checkout_path", "/pay.html").unwrap();
    config.set("redirect_delay_ms", "42").unwrap();
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.site.checkout_path, "/pay.html");
    assert_eq!(loaded.site.redirect_delay_ms, 42);
}

#[test]
fn test_load_from_falls_back_on_garbage() {
    let (_temp, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "this is [not toml").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.site.login_path, Config::from_defaults().site.login_path);
}

#[test]
fn test_display_lists_every_section() {
    let shown = Config::from_defaults().to_string();
    assert!(shown.contains("[logging]"));
    assert!(shown.contains("[site]"));
    assert!(shown.contains("redirect_delay_ms = 1000"));
    assert!(shown.contains("[paths]"));
}

#[test]
fn test_redirect_delay_is_capped() {
    let mut config = Config::from_toml(
        r#"
[logging]

[site]
redirect_delay_ms = 9000000000
"#,
    )
    .unwrap();
    assert_eq!(
        config.site.redirect_delay(),
        Duration::from_millis(MAX_REDIRECT_DELAY_MS)
    );

    config.set("redirect_delay_ms", "60000").unwrap();
    assert_eq!(config.site.redirect_delay(), Duration::from_secs(60));
}
