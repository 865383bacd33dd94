use heritage_domain::GuideLanguage;
use heritage_domain::config::AppConfig;
use serde_json::json;

#[test]
fn empty_document_yields_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({})).expect("empty config");

    assert_eq!(cfg.window.title, "Sikkim Monasteries");
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.logging.directory.is_none());
    assert_eq!(cfg.ui.language, GuideLanguage::English);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({
        "window": { "width": 1024.0 },
        "logging": { "json": true, "directory": "logs" },
        "ui": { "language": "ne" }
    }))
    .expect("partial config");

    assert!((cfg.window.width - 1024.0).abs() < f64::EPSILON);
    assert_eq!(cfg.window.title, "Sikkim Monasteries");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.logging.directory.as_deref(), Some(std::path::Path::new("logs")));
    assert_eq!(cfg.ui.language, GuideLanguage::Nepali);
}

#[test]
fn unknown_language_is_rejected() {
    let result = serde_json::from_value::<AppConfig>(json!({ "ui": { "language": "xx" } }));
    assert!(result.is_err());
}

#[test]
fn deref_mut_detaches_clones() {
    let original = AppConfig::default();
    let mut edited = original.clone();
    edited.logging.level = "debug".to_owned();

    assert_eq!(original.logging.level, "info");
    assert_eq!(edited.logging.level, "debug");
}
