//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - [`input_observer`] turns the resulting [`InputEvent`]s into game
//!   actions: jump requests, quitting and the debug toggle.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::{BoolState, InputState};

/// Refresh one key from Raylib and emit press/release events for it.
fn poll_key(
    state: &mut BoolState,
    action: InputAction,
    rl: &raylib::RaylibHandle,
    commands: &mut Commands,
) {
    let key = state.key_binding;
    state.active = rl.is_key_down(key);
    state.just_pressed = rl.is_key_pressed(key);
    state.just_released = rl.is_key_released(key);

    if state.just_pressed {
        commands.trigger(InputEvent {
            action,
            pressed: true,
        });
    }
    if state.just_released {
        commands.trigger(InputEvent {
            action,
            pressed: false,
        });
    }
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let input = &mut *input;
    poll_key(&mut input.jump, InputAction::Jump, &rl, &mut commands);
    poll_key(&mut input.quit, InputAction::Quit, &rl, &mut commands);
    poll_key(&mut input.debug, InputAction::Debug, &rl, &mut commands);
}

/// React to logical input actions.
///
/// Jump is level-triggered: the request stays set from press to release.
pub fn input_observer(
    trigger: On<InputEvent>,
    mut players: Query<&mut Player>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    let event = trigger.event();
    match (event.action, event.pressed) {
        (InputAction::Jump, pressed) => {
            for mut player in players.iter_mut() {
                player.jump_requested = pressed;
            }
        }
        (InputAction::Quit, true) => next_state.set(GameStates::Quitting),
        (InputAction::Debug, true) => commands.trigger(SwitchDebugEvent {}),
        _ => {}
    }
}
