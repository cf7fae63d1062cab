//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies on each other.
//!
//! Submodules:
//! - [`collision`] – player overlaps reported by the collision sweep
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – logical key presses and releases
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
