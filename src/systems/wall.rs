use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::wall::Wall;
use crate::resources::playfield::Playfield;
use crate::resources::wallrng::WallRng;
use crate::resources::worldtime::WorldTime;

/// Scroll walls left and recycle the ones that left the field.
pub fn wall_update(
    mut walls: Query<(&mut Wall, &mut MapPosition)>,
    time: Res<WorldTime>,
    field: Res<Playfield>,
    mut rng: ResMut<WallRng>,
) {
    for (mut wall, mut position) in walls.iter_mut() {
        position.pos.x += wall.velocity_x * time.delta;
        if wall.is_off_screen(position.pos) {
            wall.recycle(&mut position.pos, field.w, field.h, &mut rng.0);
            debug!(
                "Wall recycled to x={:.0} with gap at {:.0}",
                position.pos.x, position.pos.y
            );
        }
    }
}
