use super::*;
use tempfile::tempdir;

#[test]
fn parse_modifier_combinations() {
    assert_eq!(
        parse_keybinding("ctrl+s"),
        Some(Key::ctrl(KeyCode::Char('s')))
    );
    assert_eq!(
        parse_keybinding("Cmd+K"),
        Some(Key::new(
            KeyCode::Char('k'),
            KeyModifiers::SUPER | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(
        parse_keybinding("ctrl + enter"),
        Some(Key::ctrl(KeyCode::Enter))
    );
    assert_eq!(parse_keybinding("esc"), Some(Key::simple(KeyCode::Esc)));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn parse_rejects_malformed_keys() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+banana"), None);
}

#[test]
fn parse_command_by_name() {
    assert_eq!(parse_command("save"), Command::Save);
    assert_eq!(parse_command("nope"), Command::Custom("nope".to_string()));
}

#[test]
fn default_settings_file_is_created_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".nexus").join("settings.json");

    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path);
    assert_eq!(settings.default_file, crate::models::DEFAULT_FILE);

    std::fs::write(&path, r#"{ "default_file": "README.md" }"#).unwrap();
    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path).default_file, "README.md");
}

#[test]
fn malformed_or_missing_settings_fall_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(
        load_settings_from(&path).default_file,
        crate::models::DEFAULT_FILE
    );

    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(
        load_settings_from(&path).latency,
        crate::kernel::services::ports::LatencySettings::default()
    );
}
