//! ECS components for entities.
//!
//! This module groups all component types that can be attached to actors in
//! the game world, plus the [`rect`] shape they share.
//!
//! Submodules overview:
//! - [`background`] – marker for static scenery drawn first
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position for an entity
//! - [`player`] – vertical velocity, jump request and alive flag of the player
//! - [`rect`] – Y-up rectangle with edge accessors and overlap test
//! - [`sprite`] – sheet key and frame to draw for an entity
//! - [`wall`] – scrolling, recycled obstacle with a gap
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod background;
pub mod boxcollider;
pub mod group;
pub mod mapposition;
pub mod player;
pub mod rect;
pub mod sprite;
pub mod wall;
pub mod zindex;
