use bevy_ecs::prelude::Resource;

/// How long the title screen stays up before play starts, in seconds.
pub const SPLASH_SECONDS: f32 = 2.0;

/// Remaining time on the splash screen.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SplashTimer {
    pub remaining: f32,
}

impl Default for SplashTimer {
    fn default() -> Self {
        Self {
            remaining: SPLASH_SECONDS,
        }
    }
}
