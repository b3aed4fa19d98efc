//! Simulation context and shared types
//!
//! `GameState` owns everything the tick mutates: the play field, the two
//! ships and their projectiles, and the simulated clock. It is built once
//! and passed by reference to `tick` and the renderer.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::mask::CollisionMask;
use super::player::Player;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Opaque handle to a drawable image owned by the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualId(pub u32);

/// A drawable image paired with the collision mask derived from it
#[derive(Debug, Clone)]
pub struct Sprite {
    visual: VisualId,
    mask: Arc<CollisionMask>,
}

impl Sprite {
    pub fn new(visual: VisualId, mask: CollisionMask) -> Self {
        Self {
            visual,
            mask: Arc::new(mask),
        }
    }

    #[inline]
    pub fn visual(&self) -> VisualId {
        self.visual
    }

    #[inline]
    pub fn mask(&self) -> &CollisionMask {
        &self.mask
    }

    /// Size in pixels (the mask's size)
    pub fn size(&self) -> Vec2 {
        self.mask.size().as_vec2()
    }
}

/// The sprites a duel needs
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub player: Sprite,
    pub enemy: Sprite,
    pub laser: Sprite,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player spawned a laser
    PlayerFired,
    /// Enemy spawned a laser
    EnemyFired,
    /// An enemy laser hit the player; carries health after the hit
    PlayerHit { health: i32 },
    /// A projectile left the play field and was dropped
    ProjectileCulled,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Play field; read-only after construction
    bounds: Rect,
    pub player: Player,
    pub enemy: Enemy,
    /// Simulated time since start, the sum of every tick's `dt`
    pub elapsed: Duration,
    /// Ticks run so far
    pub frame: u64,
    /// Drop projectiles that leave the play field
    pub cull_offscreen: bool,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: &Tuning, sprites: SpriteSet) -> Self {
        let bounds = Rect::new(
            0.0,
            0.0,
            tuning.screen_width as f32,
            tuning.screen_height as f32,
        );
        let player = Player::new(sprites.player, sprites.laser.clone(), &bounds, tuning);
        let enemy = Enemy::new(sprites.enemy, sprites.laser, &bounds, tuning);

        Self {
            bounds,
            player,
            enemy,
            elapsed: Duration::ZERO,
            frame: 0,
            cull_offscreen: tuning.cull_offscreen_projectiles,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Whole milliseconds of simulated time; what the cooldowns run on
    #[inline]
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}
