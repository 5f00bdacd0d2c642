use family_hub::config::Config;
use family_hub::icons::IconTheme;
use family_hub::utils::date;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.gallery.photos_per_page, 12);
    assert_eq!(config.events.events_per_page, 10);
    assert_eq!(config.events.upcoming_days, 7);
    assert_eq!(config.events.default_reminder_minutes, 60);
    assert_eq!(config.family.members_per_page, 6);
    assert_eq!(config.display.icon_theme, IconTheme::Emoji);
    assert!(config.display.use_colors);
    assert!(!config.logging.enabled);
    assert!(!config.database.in_memory);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.gallery.photos_per_page = 0;
    assert!(config.validate().is_err());

    config.gallery.photos_per_page = 12;
    config.events.default_reminder_minutes = 20_000;
    assert!(config.validate().is_err());

    config.events.default_reminder_minutes = 60;
    config.events.upcoming_days = 400;
    assert!(config.validate().is_err());

    config.events.upcoming_days = 7;
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    config.display.date_format = "%Y-%Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_upload_limits_in_bytes() {
    let config = Config::default();
    assert_eq!(config.gallery.max_photo_size_bytes(), 10 * 1024 * 1024);
    assert_eq!(config.gallery.max_member_photo_size_bytes(), 5 * 1024 * 1024);
}

#[test]
fn test_oversized_upload_limit_is_rejected() {
    let mut config = Config::default();
    config.gallery.max_photo_size_mb = u64::MAX;
    assert!(config.validate().is_err());
    assert_eq!(config.gallery.max_photo_size_bytes(), u64::MAX);

    config.gallery.max_photo_size_mb = 1024;
    assert!(config.validate().is_ok());

    config.gallery.max_member_photo_size_mb = 1025;
    assert!(config.validate().is_err());
}

#[test]
fn test_in_memory_database_has_no_path() {
    let mut config = Config::default();
    config.database.in_memory = true;
    assert!(config.database_path().unwrap().is_none());

    config.database.in_memory = false;
    config.database.path = Some(PathBuf::from("/tmp/family.db"));
    assert_eq!(config.database_path().unwrap(), Some(PathBuf::from("/tmp/family.db")));
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("photos_per_page = 12"));
    assert!(toml_str.contains("icon_theme = \"emoji\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[events]
upcoming_days = 14

[display]
icon_theme = "ascii"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.events.upcoming_days, 14);
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);
    assert!(config.logging.enabled);

    assert_eq!(config.events.events_per_page, 10);
    assert_eq!(config.display.date_format, date::ISO_DATE_FORMAT);
    assert_eq!(config.family.app_name, "Family Hub");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.gallery.photos_per_page, default_config.gallery.photos_per_page);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("family_hub_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Family Hub Configuration File"));
    assert!(content.contains("photos_per_page = 12"));

    // The generated file loads back
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.events.upcoming_days, 7);

    let _ = fs::remove_dir_all(&temp_dir);
}
