//! Lasers fired by the player and the enemy
//!
//! A projectile travels straight up or down at a constant number of pixels
//! per tick. It never changes column.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::mask::CollisionMask;
use super::rect::Rect;
use super::state::Sprite;

/// Vertical travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalDirection {
    /// Toward decreasing y
    Up,
    /// Toward increasing y
    Down,
}

impl VerticalDirection {
    /// Sign applied to the y-axis
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            VerticalDirection::Up => -1.0,
            VerticalDirection::Down => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
    sprite: Sprite,
    pub direction: VerticalDirection,
    /// Pixels moved per `advance`
    pub speed: f32,
}

impl Projectile {
    /// Spawn a projectile centred on `origin`
    pub fn new(sprite: &Sprite, origin: Vec2, direction: VerticalDirection, speed: f32) -> Self {
        Self {
            rect: Rect::from_center(origin, sprite.size()),
            sprite: sprite.clone(),
            direction,
            speed,
        }
    }

    /// Move one step along the travel direction
    pub fn advance(&mut self) {
        self.rect.y += self.speed * self.direction.sign();
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Collidable for Projectile {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn mask(&self) -> &CollisionMask {
        self.sprite.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::VisualId;

    fn laser_sprite() -> Sprite {
        Sprite::new(VisualId(0), CollisionMask::solid(5, 40))
    }

    #[test]
    fn test_spawn_centred_on_origin() {
        let laser = Projectile::new(&laser_sprite(), Vec2::new(100.0, 200.0), VerticalDirection::Up, 5.0);
        assert_eq!(laser.rect, Rect::new(97.5, 180.0, 5.0, 40.0));
    }

    #[test]
    fn test_advance_up() {
        let mut laser = Projectile::new(&laser_sprite(), Vec2::new(100.0, 200.0), VerticalDirection::Up, 5.0);
        let start = laser.rect;
        laser.advance();
        assert_eq!(laser.rect.y, start.y - 5.0);
        assert_eq!(laser.rect.x, start.x);
    }

    #[test]
    fn test_advance_down_n_times() {
        let mut laser = Projectile::new(&laser_sprite(), Vec2::new(40.0, 0.0), VerticalDirection::Down, 5.0);
        let start = laser.rect;
        for _ in 0..12 {
            laser.advance();
        }
        assert_eq!(laser.rect.y, start.y + 60.0);
        assert_eq!(laser.rect.x, start.x);
        assert_eq!(laser.rect.size(), start.size());
    }
}
