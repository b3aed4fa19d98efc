//! Frame loop
//!
//! One frame: poll input, take the elapsed time from the clock, tick the
//! simulation, draw. A quit request still lets the current frame finish.

use serde::Serialize;

use crate::assets::{COLORKEY, Rgba, Rotation, SpriteTransform};
use crate::platform::{AssetError, AssetService, FrameClock, InputService, RenderSurface};
use crate::renderer::draw_frame;
use crate::sim::{GameEvent, GameState, SpriteSet, tick};
use crate::tuning::Tuning;

/// Laser colour
pub const LASER_COLOR: Rgba = [255, 255, 0, 255];

/// Totals reported when the loop ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed_ms: u64,
    pub player_health: i32,
    pub player_shots: u32,
    pub enemy_shots: u32,
    pub hits_taken: u32,
}

/// Load every sprite the duel needs. Ship images are stored upside down
/// and turned upright here.
pub fn load_sprites(assets: &mut impl AssetService, tuning: &Tuning) -> Result<SpriteSet, AssetError> {
    let upright = SpriteTransform::default()
        .rotate(Rotation::Half)
        .colorkey(COLORKEY);

    let player = assets.load_sprite("spaceship", &upright)?;
    let enemy = assets.load_sprite(
        "enemy",
        &upright.scale(tuning.enemy_width, tuning.enemy_height),
    )?;
    let laser = assets.solid_sprite(tuning.laser_width, tuning.laser_height, LASER_COLOR);

    Ok(SpriteSet {
        player,
        enemy,
        laser,
    })
}

/// Game instance holding the simulation and run statistics
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    tuning: Tuning,
    summary: RunSummary,
    depletion_reported: bool,
}

impl Game {
    pub fn new(tuning: Tuning, assets: &mut impl AssetService) -> Result<Self, AssetError> {
        let sprites = load_sprites(assets, &tuning)?;
        let state = GameState::new(&tuning, sprites);
        log::info!(
            "Game initialized: {}x{} field, player health {}",
            tuning.screen_width,
            tuning.screen_height,
            state.player.health
        );

        Ok(Self {
            state,
            tuning,
            summary: RunSummary::default(),
            depletion_reported: false,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Run one frame. Returns `false` once quit has been requested.
    pub fn frame(
        &mut self,
        input: &mut impl InputService,
        surface: &mut impl RenderSurface,
        clock: &mut impl FrameClock,
    ) -> bool {
        let polled = input.poll();
        let dt = clock.tick(self.tuning.target_fps);

        tick(&mut self.state, &polled.input, dt);
        self.record_events();
        draw_frame(&self.state, surface);

        if polled.quit {
            log::info!("Quit requested at frame {}", self.state.frame);
        }
        !polled.quit
    }

    /// Run frames until quit
    pub fn run(
        &mut self,
        input: &mut impl InputService,
        surface: &mut impl RenderSurface,
        clock: &mut impl FrameClock,
    ) -> RunSummary {
        log::info!("Laser Duel running at {} fps", self.tuning.target_fps);
        while self.frame(input, surface, clock) {}
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.state.frame,
            elapsed_ms: self.state.time_ms(),
            player_health: self.state.player.health,
            ..self.summary
        }
    }

    fn record_events(&mut self) {
        for event in &self.state.events {
            match *event {
                GameEvent::PlayerFired => self.summary.player_shots += 1,
                GameEvent::EnemyFired => self.summary.enemy_shots += 1,
                GameEvent::PlayerHit { health } => {
                    self.summary.hits_taken += 1;
                    if health <= 0 && !self.depletion_reported {
                        self.depletion_reported = true;
                        log::warn!("Player health depleted ({}); the duel continues", health);
                    }
                }
                GameEvent::ProjectileCulled => {}
            }
        }
    }
}
