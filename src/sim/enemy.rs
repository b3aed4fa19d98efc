//! The enemy ship
//!
//! Each update the enemy:
//! 1. Homes toward a point `standoff` pixels above the player
//! 2. Re-evaluates whether the player is inside its firing cone
//! 3. Fires a laser downward if so and its cooldown has elapsed
//! 4. Advances its lasers and resolves hits against the player

use glam::Vec2;

use super::aim::{bearing_angle_degrees, direction_towards, within_cone};
use super::collision::{Collidable, check_collision};
use super::mask::CollisionMask;
use super::player::Player;
use super::projectile::{Projectile, VerticalDirection};
use super::rect::Rect;
use super::state::{GameEvent, Sprite};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    sprite: Sprite,
    laser: Sprite,
    /// Homing speed (pixels/second)
    pub speed: f32,
    /// Vertical gap kept above the player
    pub standoff: f32,
    /// Half-angle of the firing cone (degrees)
    pub firing_cone_degrees: f32,
    fire_delay_ms: u64,
    /// Time of the last shot
    shot_timer_ms: u64,
    in_firing_cone: bool,
    laser_speed: f32,
    laser_damage: i32,
    pub bullets: Vec<Projectile>,
}

impl Enemy {
    pub fn new(sprite: Sprite, laser: Sprite, bounds: &Rect, tuning: &Tuning) -> Self {
        let center = bounds.center() + Vec2::new(0.0, tuning.enemy_start_offset);
        Self {
            rect: Rect::from_center(center, sprite.size()),
            sprite,
            laser,
            speed: tuning.enemy_speed,
            standoff: tuning.enemy_standoff,
            firing_cone_degrees: tuning.firing_cone_degrees,
            fire_delay_ms: tuning.enemy_fire_delay_ms,
            shot_timer_ms: 0,
            in_firing_cone: false,
            laser_speed: tuning.laser_speed,
            laser_damage: tuning.laser_damage,
            bullets: Vec::new(),
        }
    }

    /// Per-frame update. Hits on the player are pushed to `events`.
    pub fn update(&mut self, dt: f32, now_ms: u64, player: &mut Player, events: &mut Vec<GameEvent>) {
        if let Some(direction) =
            direction_towards(self.rect.position(), player.rect.position(), self.standoff)
        {
            self.rect.translate(direction * self.speed * dt);
        }

        self.update_firing_readiness(&player.rect);

        if self.in_firing_cone && now_ms.saturating_sub(self.shot_timer_ms) > self.fire_delay_ms {
            self.shot_timer_ms = now_ms;
            self.bullets.push(Projectile::new(
                &self.laser,
                self.rect.center(),
                VerticalDirection::Down,
                self.laser_speed,
            ));
            events.push(GameEvent::EnemyFired);
        }

        self.update_bullets(player, events);
    }

    /// Recompute whether `target` is inside the firing cone.
    ///
    /// Only a target at or below the enemy is evaluated. A target above the
    /// enemy, or exactly level with it (no defined bearing), leaves the flag
    /// as it was.
    pub fn update_firing_readiness(&mut self, target: &Rect) {
        if target.y < self.rect.y {
            return;
        }

        if let Some(angle) = bearing_angle_degrees(self.rect.position(), target.position()) {
            self.in_firing_cone = within_cone(angle, self.firing_cone_degrees);
        }
    }

    /// Advance every bullet and remove the ones that hit the player
    fn update_bullets(&mut self, player: &mut Player, events: &mut Vec<GameEvent>) {
        let damage = self.laser_damage;
        self.bullets.retain_mut(|bullet| {
            bullet.advance();

            if check_collision(&*player, &*bullet).is_none() {
                return true;
            }

            player.take_damage(damage);
            log::debug!("Player hit, health now {}", player.health);
            events.push(GameEvent::PlayerHit {
                health: player.health,
            });
            false
        });
    }

    #[inline]
    pub fn is_in_firing_cone(&self) -> bool {
        self.in_firing_cone
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Collidable for Enemy {
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

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn laser() -> Sprite {
        Sprite::new(VisualId(3), CollisionMask::solid(5, 40))
    }

    fn enemy_at(position: Vec2) -> Enemy {
        let sprite = Sprite::new(VisualId(2), CollisionMask::solid(40, 80));
        let mut enemy = Enemy::new(sprite, laser(), &bounds(), &Tuning::default());
        enemy.rect.set_position(position);
        enemy
    }

    fn player_at(position: Vec2, mask: CollisionMask) -> Player {
        let sprite = Sprite::new(VisualId(1), mask);
        let mut player = Player::new(sprite, laser(), &bounds(), &Tuning::default());
        player.rect.set_position(position);
        player
    }

    #[test]
    fn test_cone_exactly_fifteen_degrees() {
        let mut enemy = enemy_at(Vec2::ZERO);
        // Largest f32 offset whose bearing does not pass 15°
        let exact = 100.0f64 * 15.0f64.to_radians().tan();
        let mut dx = exact as f32;
        if dx as f64 > exact {
            dx = f32::from_bits(dx.to_bits() - 1);
        }
        enemy.update_firing_readiness(&Rect::new(dx, 100.0, 10.0, 10.0));
        assert!(enemy.is_in_firing_cone());
    }

    #[test]
    fn test_cone_rejects_fraction_past_edge() {
        let mut enemy = enemy_at(Vec2::ZERO);
        enemy.update_firing_readiness(&Rect::new(0.0, 100.0, 10.0, 10.0));
        assert!(enemy.is_in_firing_cone());

        let dx = (100.0f64 * 15.0005f64.to_radians().tan()) as f32;
        enemy.update_firing_readiness(&Rect::new(dx, 100.0, 10.0, 10.0));
        assert!(!enemy.is_in_firing_cone());
    }

    #[test]
    fn test_cone_just_outside() {
        let mut enemy = enemy_at(Vec2::ZERO);
        let dy = 100.0f32;
        let dx = dy * 15.01f32.to_radians().tan();
        enemy.update_firing_readiness(&Rect::new(-dx, dy, 10.0, 10.0));
        assert!(!enemy.is_in_firing_cone());
    }

    #[test]
    fn test_cone_kept_when_target_above() {
        let mut enemy = enemy_at(Vec2::new(100.0, 100.0));
        enemy.update_firing_readiness(&Rect::new(100.0, 300.0, 10.0, 10.0));
        assert!(enemy.is_in_firing_cone());

        // Ducking above the enemy does not clear readiness
        enemy.update_firing_readiness(&Rect::new(100.0, 20.0, 10.0, 10.0));
        assert!(enemy.is_in_firing_cone());

        // Nor does it set it
        let mut enemy = enemy_at(Vec2::new(100.0, 100.0));
        enemy.update_firing_readiness(&Rect::new(100.0, 20.0, 10.0, 10.0));
        assert!(!enemy.is_in_firing_cone());
    }

    #[test]
    fn test_keeps_firing_at_target_above() {
        let mut enemy = enemy_at(Vec2::new(200.0, 150.0));
        let mut player = player_at(Vec2::new(200.0, 250.0), CollisionMask::empty(10, 10));
        let mut events = Vec::new();
        enemy.update(0.0, 0, &mut player, &mut events);
        assert!(enemy.is_in_firing_cone());

        player.rect.set_position(Vec2::new(200.0, 20.0));
        enemy.update(0.0, 1501, &mut player, &mut events);
        assert_eq!(enemy.bullets.len(), 1);
        assert_eq!(events, vec![GameEvent::EnemyFired]);
    }

    #[test]
    fn test_cone_unchanged_when_level() {
        let mut enemy = enemy_at(Vec2::new(100.0, 100.0));
        enemy.update_firing_readiness(&Rect::new(100.0, 300.0, 10.0, 10.0));
        assert!(enemy.is_in_firing_cone());

        // Same y: bearing undefined, flag kept
        enemy.update_firing_readiness(&Rect::new(400.0, 100.0, 10.0, 10.0));
        assert!(enemy.is_in_firing_cone());
    }

    #[test]
    fn test_homes_toward_standoff_point() {
        let mut enemy = enemy_at(Vec2::new(100.0, 100.0));
        // Standoff point is (400, 600 - 100): offset (300, 400) from the enemy
        let mut player = player_at(Vec2::new(400.0, 600.0), CollisionMask::solid(10, 10));
        let mut events = Vec::new();
        enemy.update(0.5, 0, &mut player, &mut events);
        // 120 px/s * 0.5 s along the unit direction (0.6, 0.8)
        assert!((enemy.rect.x - 136.0).abs() < 1e-3);
        assert!((enemy.rect.y - 148.0).abs() < 1e-3);
    }

    #[test]
    fn test_holds_position_at_standoff() {
        let mut enemy = enemy_at(Vec2::new(200.0, 150.0));
        let mut player = player_at(Vec2::new(200.0, 250.0), CollisionMask::solid(10, 10));
        let mut events = Vec::new();
        enemy.update(0.016, 0, &mut player, &mut events);
        assert_eq!(enemy.rect.position(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_fires_after_cooldown_while_in_cone() {
        let mut enemy = enemy_at(Vec2::new(200.0, 150.0));
        let mut player = player_at(Vec2::new(200.0, 250.0), CollisionMask::empty(10, 10));
        let mut events = Vec::new();

        enemy.update(0.1, 1500, &mut player, &mut events);
        assert!(enemy.is_in_firing_cone());
        assert!(enemy.bullets.is_empty());

        enemy.update(0.1, 1501, &mut player, &mut events);
        assert_eq!(enemy.bullets.len(), 1);
        assert_eq!(enemy.bullets[0].direction, VerticalDirection::Down);
        assert_eq!(events, vec![GameEvent::EnemyFired]);
    }

    #[test]
    fn test_hit_removes_bullet_exactly_once() {
        let mut enemy = enemy_at(Vec2::new(200.0, 150.0));
        let mut player = player_at(Vec2::new(200.0, 250.0), CollisionMask::solid(40, 40));
        let mut events = Vec::new();

        // Bullet already overlapping the player's opaque pixels
        enemy.bullets.push(Projectile::new(
            &laser(),
            Vec2::new(220.0, 260.0),
            VerticalDirection::Down,
            5.0,
        ));
        let health = player.health;

        enemy.update(0.016, 0, &mut player, &mut events);
        assert!(enemy.bullets.is_empty());
        assert_eq!(player.health, health - 1);
        assert_eq!(events, vec![GameEvent::PlayerHit { health: health - 1 }]);

        enemy.update(0.016, 10, &mut player, &mut events);
        assert_eq!(player.health, health - 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_rect_overlap_without_pixel_overlap_is_not_a_hit() {
        let mut enemy = enemy_at(Vec2::new(200.0, 150.0));
        // Opaque only in the left half of the ship
        let half = CollisionMask::from_fn(40, 40, |x, _| x < 20);
        let mut player = player_at(Vec2::new(200.0, 250.0), half);
        let mut events = Vec::new();

        // Laser running down the transparent right half
        enemy.bullets.push(Projectile::new(
            &laser(),
            Vec2::new(230.0, 260.0),
            VerticalDirection::Down,
            5.0,
        ));
        let health = player.health;

        enemy.update(0.016, 0, &mut player, &mut events);
        assert_eq!(enemy.bullets.len(), 1);
        assert!(player.rect.intersects(&enemy.bullets[0].rect));
        assert_eq!(player.health, health);
        assert!(events.is_empty());
    }

    #[test]
    fn test_only_overlapping_bullet_is_removed() {
        let mut enemy = enemy_at(Vec2::new(200.0, 150.0));
        let mut player = player_at(Vec2::new(200.0, 250.0), CollisionMask::solid(40, 40));
        let mut events = Vec::new();

        enemy.bullets.push(Projectile::new(&laser(), Vec2::new(500.0, 100.0), VerticalDirection::Down, 5.0));
        enemy.bullets.push(Projectile::new(&laser(), Vec2::new(220.0, 260.0), VerticalDirection::Down, 5.0));
        enemy.bullets.push(Projectile::new(&laser(), Vec2::new(600.0, 100.0), VerticalDirection::Down, 5.0));

        enemy.update(0.016, 0, &mut player, &mut events);
        assert_eq!(enemy.bullets.len(), 2);
        assert_eq!(enemy.bullets[0].rect.center().x, 500.0);
        assert_eq!(enemy.bullets[1].rect.center().x, 600.0);
        assert_eq!(events.len(), 1);
    }
}
