use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// Random source for wall gap offsets. Seed it to make a run reproducible.
#[derive(Resource, Clone, Debug)]
pub struct WallRng(pub Rng);

impl Default for WallRng {
    fn default() -> Self {
        Self(Rng::new())
    }
}

impl WallRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }
}
