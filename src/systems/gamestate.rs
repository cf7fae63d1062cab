use crate::components::player::Player;
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::debugmode::CheatMode;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::input::InputState;
use crate::resources::splash::SplashTimer;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::info;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    // Check if there is a pending state change
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        // If there is, trigger the GameStateChangedEvent
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_running(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Running)
}

pub fn state_is_splash(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Splash)
}

/// Request `GameOver` once a player is dead, unless cheat mode is on.
pub fn check_game_over(
    players: Query<&Player>,
    cheat: Option<Res<CheatMode>>,
    time: Res<WorldTime>,
    mut next_state: ResMut<NextGameState>,
) {
    if cheat.is_some() {
        return;
    }
    if players.iter().any(|player| !player.is_alive()) {
        info!(
            "Game over after {:.1}s ({} ticks)",
            time.elapsed, time.frame_count
        );
        next_state.set(GameStates::GameOver);
    }
}

/// Count down the title screen; the jump key skips it.
pub fn splash_system(
    time: Res<WorldTime>,
    mut timer: ResMut<SplashTimer>,
    input: Option<Res<InputState>>,
    mut next_state: ResMut<NextGameState>,
) {
    timer.remaining -= time.delta;
    let skipped = input.is_some_and(|input| input.jump.just_pressed);
    if timer.remaining <= 0.0 || skipped {
        next_state.set(GameStates::Running);
    }
}
