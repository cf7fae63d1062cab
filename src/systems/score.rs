use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::wall::Wall;
use crate::resources::score::Score;

/// Count each wall once when its right edge passes the living player's left edge.
pub fn score_system(
    players: Query<(&Player, &MapPosition, &BoxCollider)>,
    mut walls: Query<(&mut Wall, &MapPosition)>,
    mut score: ResMut<Score>,
) {
    let Ok((player, position, collider)) = players.single() else {
        return;
    };
    if !player.is_alive() {
        return;
    }
    let player_left = collider.aabb(position.pos).left();

    for (mut wall, wall_position) in walls.iter_mut() {
        if !wall.scored && wall_position.pos.x + wall.width() < player_left {
            wall.scored = true;
            score.0 += 1;
            info!("Score: {}", score.0);
        }
    }
}
