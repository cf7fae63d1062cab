use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::debugmode::{DebugMode, DebugOverlay};

/// Refresh the developer overlay text from the player's state.
///
/// The text is cleared while debug mode is off.
pub fn debug_overlay_system(
    players: Query<(&Player, &MapPosition)>,
    debug: Option<Res<DebugMode>>,
    mut overlay: ResMut<DebugOverlay>,
) {
    overlay.text.clear();
    if debug.is_none() {
        return;
    }
    if let Ok((player, position)) = players.single() {
        overlay.text = format!(
            "Dev Mode!\nPos: {:.0}, {:.0}\nStatus: {}\n",
            position.pos.x,
            position.pos.y,
            player.is_alive()
        );
    }
}
