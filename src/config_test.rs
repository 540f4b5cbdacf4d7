use super::*;

#[test]
fn defaults_use_xavier_theme_key() {
    let config = UiConfig::default();
    assert_eq!(config.storage_key, "xavier-theme");
    assert_eq!(config.log_level, "info");
    assert!(config.throttle_scroll);
}

#[test]
fn empty_block_gives_defaults() {
    assert_eq!(UiConfig::from_json("  \n ").unwrap(), UiConfig::default());
}

#[test]
fn partial_block_keeps_other_defaults() {
    let config = UiConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.storage_key, "xavier-theme");
    assert!(config.throttle_scroll);
}

#[test]
fn full_block_overrides_everything() {
    let config =
        UiConfig::from_json(r#"{ "storage_key": "shop-theme", "log_level": "warn", "throttle_scroll": false }"#)
            .unwrap();
    assert_eq!(config.storage_key, "shop-theme");
    assert_eq!(config.level(), log::Level::Warn);
    assert!(!config.throttle_scroll);
}

#[test]
fn malformed_block_is_config_error() {
    let err = UiConfig::from_json("{ storage_key: ").unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = UiConfig::from_json(r#"{ "throttle_scroll": "yes" }"#).unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn unknown_level_falls_back_to_info() {
    let config = UiConfig { log_level: "chatty".to_owned(), ..UiConfig::default() };
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn level_names_are_case_insensitive() {
    let config = UiConfig { log_level: "DEBUG".to_owned(), ..UiConfig::default() };
    assert_eq!(config.level(), log::Level::Debug);
}
