//! Collision sweep and response.
//!
//! Every tick the player's collider is tested against the bounds of every
//! other actor. This is a linear scan: the field never holds more than a
//! handful of actors.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rect::{Rect, rect_hits_any};
use crate::components::wall::Wall;
use crate::events::collision::CollisionEvent;
use crate::resources::deathrules::DeathRules;

/// Trigger a [`CollisionEvent`] for each actor the player overlaps.
///
/// At most one event is emitted per (player, actor) pair per tick, even when
/// several rectangles of the same actor are hit.
pub fn collision_detector(
    players: Query<(Entity, &MapPosition, &BoxCollider), With<Player>>,
    walls: Query<(Entity, &Wall, &MapPosition)>,
    colliders: Query<(Entity, &MapPosition, &BoxCollider), Without<Player>>,
    mut commands: Commands,
) {
    // Gather bounds once; every player is tested against the same set.
    let mut obstacles: SmallVec<[(Entity, SmallVec<[Rect; 2]>); 8]> = SmallVec::new();
    for (entity, wall, position) in walls.iter() {
        obstacles.push((entity, SmallVec::from(wall.bounds(position.pos))));
    }
    for (entity, position, collider) in colliders.iter() {
        obstacles.push((entity, smallvec::smallvec![collider.aabb(position.pos)]));
    }

    for (player, position, collider) in players.iter() {
        let aabb = collider.aabb(position.pos);
        for (other, bounds) in obstacles.iter() {
            if rect_hits_any(&aabb, bounds.iter()) {
                commands.trigger(CollisionEvent {
                    player,
                    other: *other,
                });
            }
        }
    }
}

/// Mark the player dead on collision, unless collision deaths are disabled.
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut players: Query<(&mut Player, &MapPosition)>,
    groups: Query<&Group>,
    rules: Option<Res<DeathRules>>,
) {
    let event = trigger.event();
    if !rules.is_none_or(|rules| rules.collision_kills) {
        debug!("Collision with {:?} ignored", event.other);
        return;
    }
    if let Ok((mut player, position)) = players.get_mut(event.player) {
        if player.kill() {
            let what = groups.get(event.other).map_or("an obstacle", |g| g.name());
            info!(
                "Player hit {} at ({:.0}, {:.0})",
                what, position.pos.x, position.pos.y
            );
        }
    }
}
