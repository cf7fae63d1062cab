//! Per-frame keyboard input resource.
//!
//! Captures the three keys the game cares about (jump, quit, debug toggle)
//! and exposes them to systems via the [`InputState`] resource. Bindings come
//! from the `[input]` section of the config file and are parsed with
//! [`parse_key`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::gameconfig::KeyBindings;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    pub fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub jump: BoolState,
    pub quit: BoolState,
    pub debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            jump: BoolState::bound(KeyboardKey::KEY_SPACE),
            quit: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Build the input state from configured key names.
    ///
    /// Unknown names keep the default binding for that action and are logged.
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let mut input = Self::default();
        let bind = |state: &mut BoolState, action: &str, name: &str| match parse_key(name) {
            Some(key) => state.key_binding = key,
            None => log::warn!(
                "Unknown key '{}' for {}, keeping {:?}",
                name,
                action,
                state.key_binding
            ),
        };
        bind(&mut input.jump, "jump", &bindings.jump);
        bind(&mut input.quit, "quit", &bindings.quit);
        bind(&mut input.debug, "debug", &bindings.debug);
        input
    }
}

/// Parse a key name as written in the config file (case-insensitive).
pub fn parse_key(name: &str) -> Option<KeyboardKey> {
    use KeyboardKey::*;
    let key = match name.trim().to_ascii_lowercase().as_str() {
        "space" => KEY_SPACE,
        "escape" | "esc" => KEY_ESCAPE,
        "enter" | "return" => KEY_ENTER,
        "backspace" => KEY_BACKSPACE,
        "tab" => KEY_TAB,
        "up" => KEY_UP,
        "down" => KEY_DOWN,
        "left" => KEY_LEFT,
        "right" => KEY_RIGHT,
        "a" => KEY_A,
        "b" => KEY_B,
        "c" => KEY_C,
        "d" => KEY_D,
        "e" => KEY_E,
        "f" => KEY_F,
        "g" => KEY_G,
        "h" => KEY_H,
        "i" => KEY_I,
        "j" => KEY_J,
        "k" => KEY_K,
        "l" => KEY_L,
        "m" => KEY_M,
        "n" => KEY_N,
        "o" => KEY_O,
        "p" => KEY_P,
        "q" => KEY_Q,
        "r" => KEY_R,
        "s" => KEY_S,
        "t" => KEY_T,
        "u" => KEY_U,
        "v" => KEY_V,
        "w" => KEY_W,
        "x" => KEY_X,
        "y" => KEY_Y,
        "z" => KEY_Z,
        "f1" => KEY_F1,
        "f2" => KEY_F2,
        "f3" => KEY_F3,
        "f4" => KEY_F4,
        "f5" => KEY_F5,
        "f6" => KEY_F6,
        "f7" => KEY_F7,
        "f8" => KEY_F8,
        "f9" => KEY_F9,
        "f10" => KEY_F10,
        "f11" => KEY_F11,
        "f12" => KEY_F12,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.quit.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.debug.key_binding, KeyboardKey::KEY_F11);
        assert!(!input.jump.active);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("space"), Some(KeyboardKey::KEY_SPACE));
        assert_eq!(parse_key(" Escape "), Some(KeyboardKey::KEY_ESCAPE));
        assert_eq!(parse_key("W"), Some(KeyboardKey::KEY_W));
        assert_eq!(parse_key("f12"), Some(KeyboardKey::KEY_F12));
        assert_eq!(parse_key("hyperspace"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_from_bindings_keeps_default_for_unknown() {
        let bindings = KeyBindings {
            jump: "up".into(),
            quit: "nonsense".into(),
            debug: "f1".into(),
        };
        let input = InputState::from_bindings(&bindings);
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.quit.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.debug.key_binding, KeyboardKey::KEY_F1);
    }
}
