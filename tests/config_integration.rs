//! Startup configuration: missing files, resets and key bindings.

use flappydisk::resources::gameconfig::{DEFAULT_CONFIG_TEMPLATE, GameConfig};
use flappydisk::resources::input::InputState;
use raylib::prelude::KeyboardKey;

#[test]
fn missing_config_is_generated_with_default_window() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flappy-disk").join("app.conf");
    assert!(!path.exists());

    let config = GameConfig::load_or_create(&path, false).unwrap();

    assert!(path.exists());
    assert_eq!(config.window_size(), (640, 480));
    assert_eq!(config.config_path, path);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        DEFAULT_CONFIG_TEMPLATE
    );
}

#[test]
fn configured_keys_reach_the_input_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.conf");
    std::fs::write(&path, "[input]\njump = up\nquit = q\ndebug = nonsense\n").unwrap();

    let config = GameConfig::load_or_create(&path, false).unwrap();
    let input = InputState::from_bindings(&config.keys);

    assert_eq!(input.jump.key_binding, KeyboardKey::KEY_UP);
    assert_eq!(input.quit.key_binding, KeyboardKey::KEY_Q);
    // unknown names keep the default
    assert_eq!(input.debug.key_binding, KeyboardKey::KEY_F11);
}
