//! Player-controlled actor.
//!
//! The [`Player`] component stores the vertical velocity, the alive flag and
//! the pending jump request. Position lives in
//! [`MapPosition`](super::mapposition::MapPosition) and collision size in
//! [`BoxCollider`]; the movement itself is driven by
//! [`player_update`](crate::systems::player::player_update).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;

/// Upward velocity applied while a jump is requested, in units per second.
pub const JUMP_IMPULSE: f32 = 500.0;
/// Velocity removed every tick when no jump is requested.
pub const GRAVITY_STEP: f32 = 40.0;
/// Lowest vertical velocity the player can reach.
pub const TERMINAL_VELOCITY: f32 = -400.0;

/// Side length of the player's sprite and collider.
pub const PLAYER_SIZE: f32 = 32.0;

/// Outcome of checking the player against the vertical edges of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBounds {
    Inside,
    /// Fell below the bottom edge. Position was clamped; this edge kills.
    FellOut,
    /// Rose above the top edge. Position was clamped; this edge is safe.
    HitCeiling,
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Vertical velocity in world units per second (positive is up).
    pub velocity_y: f32,
    /// Goes from `true` to `false` once and never back.
    alive: bool,
    /// Level-triggered: stays set for as long as the jump key is held.
    pub jump_requested: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            velocity_y: 0.0,
            alive: true,
            jump_requested: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the player dead. Returns `true` only on the call that actually
    /// changed the state, so game-over side effects fire once.
    pub fn kill(&mut self) -> bool {
        let was_alive = self.alive;
        self.alive = false;
        was_alive
    }

    /// Advance the vertical velocity by one tick.
    ///
    /// A pending jump sets the velocity to [`JUMP_IMPULSE`]; otherwise gravity
    /// removes [`GRAVITY_STEP`] down to [`TERMINAL_VELOCITY`].
    pub fn step_velocity(&mut self) {
        if self.jump_requested {
            self.velocity_y = JUMP_IMPULSE;
        } else {
            self.velocity_y = (self.velocity_y - GRAVITY_STEP).max(TERMINAL_VELOCITY);
        }
    }

    /// Clamp `position` so the collider stays attached to the field edges.
    ///
    /// Leaving through the bottom (top edge below 0) clamps the player just
    /// under the field and reports [`FieldBounds::FellOut`]. Leaving through
    /// the top clamps the player against the ceiling.
    pub fn check_field_bounds(
        position: &mut Vector2,
        collider: &BoxCollider,
        field_height: f32,
    ) -> FieldBounds {
        let rect = collider.aabb(*position);
        if rect.top() < 0.0 {
            position.y = -collider.height() - collider.offset.y;
            FieldBounds::FellOut
        } else if rect.top() > field_height {
            position.y = field_height - collider.height() - collider.offset.y;
            FieldBounds::HitCeiling
        } else {
            FieldBounds::Inside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_alive_and_still() {
        let p = Player::new();
        assert!(p.is_alive());
        assert_eq!(p.velocity_y, 0.0);
        assert!(!p.jump_requested);
    }

    #[test]
    fn test_kill_reports_first_transition_only() {
        let mut p = Player::new();
        assert!(p.kill());
        assert!(!p.kill());
        assert!(!p.is_alive());
    }

    #[test]
    fn test_gravity_reaches_terminal_velocity_and_holds() {
        let mut p = Player::new();
        let mut last = p.velocity_y;
        for _ in 0..20 {
            p.step_velocity();
            assert!(p.velocity_y <= last);
            last = p.velocity_y;
        }
        assert_eq!(p.velocity_y, TERMINAL_VELOCITY);
        p.step_velocity();
        assert_eq!(p.velocity_y, TERMINAL_VELOCITY);
    }

    #[test]
    fn test_jump_sets_impulse_regardless_of_velocity() {
        for start in [-400.0, -12.5, 0.0, 250.0, 500.0] {
            let mut p = Player::new();
            p.velocity_y = start;
            p.jump_requested = true;
            p.step_velocity();
            assert_eq!(p.velocity_y, JUMP_IMPULSE);
            // still held: same result
            p.step_velocity();
            assert_eq!(p.velocity_y, JUMP_IMPULSE);
        }
    }

    #[test]
    fn test_field_bounds_bottom_kills_and_clamps() {
        let c = BoxCollider::new(PLAYER_SIZE, PLAYER_SIZE).unwrap();
        let mut pos = Vector2::new(320.0, -40.0);
        assert_eq!(
            Player::check_field_bounds(&mut pos, &c, 480.0),
            FieldBounds::FellOut
        );
        assert_eq!(pos.y, -PLAYER_SIZE);
    }

    #[test]
    fn test_field_bounds_ceiling_clamps() {
        let c = BoxCollider::new(PLAYER_SIZE, PLAYER_SIZE).unwrap();
        let mut pos = Vector2::new(320.0, 470.0);
        assert_eq!(
            Player::check_field_bounds(&mut pos, &c, 480.0),
            FieldBounds::HitCeiling
        );
        assert_eq!(pos.y, 480.0 - PLAYER_SIZE);
    }

    #[test]
    fn test_field_bounds_inside() {
        let c = BoxCollider::new(PLAYER_SIZE, PLAYER_SIZE).unwrap();
        let mut pos = Vector2::new(320.0, 240.0);
        assert_eq!(
            Player::check_field_bounds(&mut pos, &c, 480.0),
            FieldBounds::Inside
        );
        assert_eq!(pos.y, 240.0);
    }
}
