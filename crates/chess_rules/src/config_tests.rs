use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.notation, NotationStyle::Figurine);
}

#[test]
fn test_letter_notation() {
    let cfg = EngineConfig::from_toml_str("notation = \"letter\"").unwrap();
    assert_eq!(cfg.notation, NotationStyle::Letter);
}

#[test]
fn test_unknown_style_is_rejected() {
    let err = EngineConfig::from_toml_str("notation = \"braille\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("chess_rules_missing_config_7f3a.toml");
    let err = EngineConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
