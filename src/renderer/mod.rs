//! Frame drawing
//!
//! Walks the game state and issues one blit per drawable through a
//! `RenderSurface`. Layering: player lasers, player ship, enemy lasers,
//! enemy ship.

use crate::assets::Rgba;
use crate::platform::RenderSurface;
use crate::sim::GameState;

/// Background fill
pub const BACKGROUND: Rgba = [0, 0, 0, 255];

/// Draw a complete frame and present it
pub fn draw_frame(state: &GameState, surface: &mut impl RenderSurface) {
    surface.clear(BACKGROUND);

    let player = &state.player;
    for laser in &player.lasers {
        surface.blit(laser.sprite().visual(), &laser.rect);
    }
    surface.blit(player.sprite().visual(), &player.rect);

    let enemy = &state.enemy;
    for bullet in &enemy.bullets {
        surface.blit(bullet.sprite().visual(), &bullet.rect);
    }
    surface.blit(enemy.sprite().visual(), &enemy.rect);

    surface.present();
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::platform::RecordingSurface;
    use crate::sim::{CollisionMask, Projectile, Sprite, SpriteSet, VerticalDirection, VisualId};
    use crate::tuning::Tuning;

    const PLAYER: VisualId = VisualId(1);
    const ENEMY: VisualId = VisualId(2);
    const PLAYER_LASER: VisualId = VisualId(3);
    const ENEMY_LASER: VisualId = VisualId(4);

    #[test]
    fn test_draw_order() {
        let sprites = SpriteSet {
            player: Sprite::new(PLAYER, CollisionMask::solid(50, 40)),
            enemy: Sprite::new(ENEMY, CollisionMask::solid(40, 80)),
            laser: Sprite::new(PLAYER_LASER, CollisionMask::solid(5, 40)),
        };
        let mut state = GameState::new(&Tuning::default(), sprites);

        let player_laser = Sprite::new(PLAYER_LASER, CollisionMask::solid(5, 40));
        let enemy_laser = Sprite::new(ENEMY_LASER, CollisionMask::solid(5, 40));
        for x in [100.0, 200.0] {
            state
                .player
                .lasers
                .push(Projectile::new(&player_laser, Vec2::new(x, 300.0), VerticalDirection::Up, 5.0));
        }
        state
            .enemy
            .bullets
            .push(Projectile::new(&enemy_laser, Vec2::new(400.0, 400.0), VerticalDirection::Down, 5.0));

        let mut surface = RecordingSurface::new();
        draw_frame(&state, &mut surface);

        let order: Vec<VisualId> = surface.last_frame().iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![PLAYER_LASER, PLAYER_LASER, PLAYER, ENEMY_LASER, ENEMY]);
        assert_eq!(surface.last_frame()[2].1, state.player.rect);
        assert_eq!(surface.last_frame()[4].1, state.enemy.rect);
        assert_eq!(surface.clear_color(), Some(BACKGROUND));
        assert_eq!(surface.frames_presented(), 1);
    }
}
