use bevy_ecs::prelude::*;
use log::info;

use crate::components::blink::Blink;
use crate::resources::session::GameSession;
use crate::resources::worldtime::WorldTime;

/// Advance blink windows; when one ends, drop it and lift invincibility.
pub fn blink_system(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut session: ResMut<GameSession>,
    mut query: Query<(Entity, &mut Blink)>,
) {
    for (entity, mut blink) in query.iter_mut() {
        blink.elapsed += time.delta;
        if blink.finished() {
            commands.entity(entity).try_remove::<Blink>();
            session.invincible = false;
            info!("Invincibility over");
        }
    }
}
