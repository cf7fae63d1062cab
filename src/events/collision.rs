//! Collision event emitted by the collision sweep.
//!
//! [`collision_detector`](crate::systems::collision::collision_detector)
//! triggers a [`CollisionEvent`] for every non-player actor whose bounds the
//! player overlaps this tick. The response lives in
//! [`collision_observer`](crate::systems::collision::collision_observer).
use bevy_ecs::prelude::*;

/// Event fired when the player's collider overlaps another actor's bounds.
///
/// `player` always carries the [`Player`](crate::components::player::Player)
/// component; `other` is the wall or collider it touched.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub player: Entity,
    pub other: Entity,
}
