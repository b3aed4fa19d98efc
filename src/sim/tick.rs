//! Simulation tick
//!
//! Advances the duel by one frame. The elapsed time comes from the frame
//! clock and is taken as given.

use std::time::Duration;

use super::projectile::Projectile;
use super::rect::Rect;
use super::state::{GameEvent, GameState};

/// Held state of the four movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub keys: DirectionKeys,
    /// Fire key went down since the last tick
    pub fire: bool,
}

/// Advance the game state by one frame of `dt`
pub fn tick(state: &mut GameState, input: &TickInput, dt: Duration) {
    state.events.clear();

    if input.fire && state.player.handle_fire_input() {
        state.events.push(GameEvent::PlayerFired);
    }

    state.elapsed += dt;
    state.frame += 1;
    let dt = dt.as_secs_f32();
    let now_ms = state.time_ms();
    let bounds = *state.bounds();

    state.player.update(&input.keys, dt, now_ms, &bounds);
    state
        .enemy
        .update(dt, now_ms, &mut state.player, &mut state.events);

    if state.cull_offscreen {
        let culled = cull_offscreen(&mut state.player.lasers, &bounds)
            + cull_offscreen(&mut state.enemy.bullets, &bounds);
        for _ in 0..culled {
            state.events.push(GameEvent::ProjectileCulled);
        }
    }

    for event in &state.events {
        log::trace!("frame {} @ {}ms: {:?}", state.frame, now_ms, event);
    }
}

/// Drop projectiles that no longer overlap the play field; returns how many
fn cull_offscreen(projectiles: &mut Vec<Projectile>, bounds: &Rect) -> usize {
    let before = projectiles.len();
    projectiles.retain(|p| p.rect.intersects(bounds));
    before - projectiles.len()
}
