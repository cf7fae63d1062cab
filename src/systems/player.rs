//! Player movement system.
//!
//! Applies the jump impulse or gravity, integrates the position over the
//! tick, and enforces the vertical field edges. Overlaps with other actors are
//! handled separately by [`collision_detector`](super::collision::collision_detector).
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::{FieldBounds, Player};
use crate::resources::deathrules::DeathRules;
use crate::resources::input::InputState;
use crate::resources::playfield::Playfield;
use crate::resources::worldtime::WorldTime;

/// Advance every player by one tick.
///
/// While the jump key is held the request is re-asserted, so the impulse is
/// applied on every tick the key reads down.
pub fn player_update(
    mut query: Query<(&mut Player, &mut MapPosition, &BoxCollider)>,
    time: Res<WorldTime>,
    field: Res<Playfield>,
    rules: Res<DeathRules>,
    input: Option<Res<InputState>>,
) {
    let jump_held = input.is_some_and(|input| input.jump.active);

    for (mut player, mut position, collider) in query.iter_mut() {
        if jump_held {
            player.jump_requested = true;
        }
        player.step_velocity();
        position.pos.y += player.velocity_y * time.delta;

        match Player::check_field_bounds(&mut position.pos, collider, field.h) {
            FieldBounds::FellOut if rules.out_of_field_kills => {
                if player.kill() {
                    info!(
                        "Player fell out of the field at ({:.0}, {:.0})",
                        position.pos.x, position.pos.y
                    );
                }
            }
            FieldBounds::HitCeiling => debug!("Player bumped the ceiling"),
            _ => {}
        }
    }
}
