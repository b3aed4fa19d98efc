//! The player's ship
//!
//! Moves with the arrow keys, fires straight up, and takes damage from
//! enemy lasers. Firing is gated by a latch that re-arms every
//! `fire_delay_ms`; one fire event consumes it.

use glam::Vec2;

use super::collision::Collidable;
use super::mask::CollisionMask;
use super::projectile::{Projectile, VerticalDirection};
use super::rect::Rect;
use super::state::Sprite;
use super::tick::DirectionKeys;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    sprite: Sprite,
    laser: Sprite,
    /// Pixels per second along each held axis
    pub speed: f32,
    /// May go negative; nothing ends the run
    pub health: i32,
    fire_delay_ms: u64,
    /// Time the latch was last armed
    fire_timer_ms: u64,
    ready_to_fire: bool,
    laser_speed: f32,
    pub lasers: Vec<Projectile>,
}

impl Player {
    pub fn new(sprite: Sprite, laser: Sprite, bounds: &Rect, tuning: &Tuning) -> Self {
        let center = bounds.center() + Vec2::new(0.0, tuning.player_start_offset);
        Self {
            rect: Rect::from_center(center, sprite.size()),
            sprite,
            laser,
            speed: tuning.player_speed,
            health: tuning.player_health,
            fire_delay_ms: tuning.player_fire_delay_ms,
            fire_timer_ms: 0,
            ready_to_fire: false,
            laser_speed: tuning.laser_speed,
            lasers: Vec::new(),
        }
    }

    /// Fire key pressed. Spawns a laser only if the latch is armed.
    ///
    /// Returns whether a laser was spawned.
    pub fn handle_fire_input(&mut self) -> bool {
        if !self.ready_to_fire {
            return false;
        }

        self.lasers.push(Projectile::new(
            &self.laser,
            self.rect.center(),
            VerticalDirection::Up,
            self.laser_speed,
        ));
        self.ready_to_fire = false;
        true
    }

    /// Per-frame update: clamp, move, advance lasers, re-arm the latch
    pub fn update(&mut self, keys: &DirectionKeys, dt: f32, now_ms: u64, bounds: &Rect) {
        self.rect.clamp_within(bounds);

        let step = self.speed * dt;
        let mut delta = Vec2::ZERO;
        if keys.left {
            delta.x -= step;
        }
        if keys.right {
            delta.x += step;
        }
        if keys.up {
            delta.y -= step;
        }
        if keys.down {
            delta.y += step;
        }
        self.rect.translate(delta);

        for laser in &mut self.lasers {
            laser.advance();
        }

        if now_ms.saturating_sub(self.fire_timer_ms) > self.fire_delay_ms {
            self.fire_timer_ms = now_ms;
            self.ready_to_fire = true;
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    #[inline]
    pub fn is_ready_to_fire(&self) -> bool {
        self.ready_to_fire
    }

    /// Health has run out. Informational only.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Collidable for Player {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn mask(&self) -> &CollisionMask {
        self.sprite.mask()
    }
}
