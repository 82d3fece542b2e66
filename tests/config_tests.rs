//! Configuration loading, layering and validation through the public API.

use janmitra::cli::{resolve_config, run_app, RunOverrides};
use janmitra::config::{
    generate_example_config, generate_json_schema, load_config, load_config_file, TuiPreferences,
};
use janmitra::{AppConfig, JanmitraError, ThemeKind, Validatable};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        ".janmitra.yaml",
        "session:\n  user_name: Ravi Kumar\n\
         tui:\n  theme: janmitra\n  dark: true\n  mouse_enabled: false\n  tick_rate_ms: 100\n",
    );

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.session.user_name, "Ravi Kumar");
    assert_eq!(config.tui.theme, ThemeKind::JanMitra);
    assert!(config.tui.dark);
    assert!(!config.tui.mouse_enabled);
    assert_eq!(config.tui.tick_rate_ms, 100);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "janmitra.yml", "tui:\n  theme: health\n");

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.tui.theme, ThemeKind::Health);
    assert_eq!(config.session, AppConfig::default().session);
    assert_eq!(config.tui.tick_rate_ms, 250);
}

#[test]
fn test_theme_alias_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "janmitra.yaml", "tui:\n  theme: jan-mitra\n");
    assert_eq!(load_config_file(&path).unwrap().tui.theme, ThemeKind::JanMitra);
}

#[test]
fn test_theme_names_ignore_case() {
    let dir = TempDir::new().unwrap();
    for (name, expected) in [
        ("JanMitra", ThemeKind::JanMitra),
        ("JAN_MITRA", ThemeKind::JanMitra),
        ("Soft", ThemeKind::Soft),
        ("HEALTH", ThemeKind::Health),
    ] {
        let path = write_config(
            &dir,
            "janmitra.yaml",
            &format!("session:\n  user_name: Asha\ntui:\n  theme: {name}\n"),
        );
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.tui.theme, expected, "{name}");
        assert_eq!(config.session.user_name, "Asha");
    }
}

#[test]
fn test_mixed_case_theme_keeps_the_rest_of_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        ".janmitra.yaml",
        "session:\n  user_name: Ravi Kumar\ntui:\n  theme: JanMitra\n",
    );
    let (config, source) = load_config(Some(&path)).unwrap();
    assert_eq!(source.as_deref(), Some(path.as_path()));
    assert_eq!(config.tui.theme, ThemeKind::JanMitra);
    assert_eq!(config.session.user_name, "Ravi Kumar");
}

#[test]
fn test_unknown_theme_names_the_value() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "janmitra.yaml", "tui:\n  theme: Neon\n");
    let err = load_config_file(&path).unwrap_err();
    assert!(err.to_string().contains("unknown theme 'Neon'"), "{err}");
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");
    let err = load_config(Some(&missing)).unwrap_err();
    assert!(matches!(err, JanmitraError::Config { ref path, .. } if path == &missing));
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "janmitra.yaml", "tui:\n  theme: [not, a, theme]\n");
    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, JanmitraError::Config { .. }));
    assert!(err.to_string().contains("janmitra.yaml"));
}

#[test]
fn test_explicit_path_is_reported_as_source() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "custom.yaml", "session:\n  user_name: Asha\n");
    let (config, source) = load_config(Some(&path)).unwrap();
    assert_eq!(config.session.user_name, "Asha");
    assert_eq!(source.as_deref(), Some(path.as_path()));
}

#[test]
fn test_example_config_parses_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "example.yaml", &generate_example_config());
    let config = load_config_file(&path).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(config.is_valid());
}

#[test]
fn test_json_schema_names_fields() {
    let schema = generate_json_schema().unwrap();
    assert!(schema.contains("user_name"));
    assert!(schema.contains("tick_rate_ms"));
    assert!(schema.contains("janmitra"));
}

#[test]
fn test_invalid_config_is_rejected_before_terminal_setup() {
    let config = AppConfig::builder().user_name("  ").tick_rate_ms(5).build();
    let err = run_app(config).unwrap_err();
    let err = err.downcast::<JanmitraError>().unwrap();
    match err {
        JanmitraError::InvalidConfig(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.iter().any(|e| e.field == "session.user_name"));
            assert!(errors.iter().any(|e| e.field == "tui.tick_rate_ms"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_layering_with_saved_preferences() {
    let dir = TempDir::new().unwrap();
    let prefs_path = dir.path().join("janmitra").join("preferences.json");
    TuiPreferences {
        theme: Some(ThemeKind::Soft),
    }
    .save_to(&prefs_path)
    .unwrap();
    let prefs = TuiPreferences::load_from(&prefs_path);

    let file = AppConfig::builder().theme(ThemeKind::Health).build();
    let config = resolve_config(file.clone(), &prefs, &RunOverrides::default());
    assert_eq!(config.tui.theme, ThemeKind::Soft);

    let overrides = RunOverrides {
        theme: Some(ThemeKind::JanMitra),
        user_name: Some("Ravi Kumar".to_string()),
        dark: true,
        no_mouse: true,
    };
    let config = resolve_config(file, &prefs, &overrides);
    assert_eq!(config.tui.theme, ThemeKind::JanMitra);
    assert_eq!(config.session.user_name, "Ravi Kumar");
    assert!(config.tui.dark);
    assert!(!config.tui.mouse_enabled);
}
