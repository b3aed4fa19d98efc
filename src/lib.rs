//! Laser Duel - a single-enemy arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, projectiles, aiming, mask collisions)
//! - `game`: Frame loop tying the simulation to its collaborators
//! - `renderer`: Draw-call ordering
//! - `platform`: Asset, render, input and clock abstractions
//! - `assets`: Pixel buffers and collision-mask derivation
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, RunSummary};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    /// Frame rate the clock throttles to
    pub const TARGET_FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 300.0; // pixels/second
    pub const PLAYER_HEALTH: i32 = 10;
    pub const PLAYER_START_OFFSET: f32 = 300.0; // below centre
    pub const PLAYER_FIRE_DELAY_MS: u64 = 500;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 120.0; // 2 px/frame at 60 Hz
    pub const ENEMY_STANDOFF: f32 = 100.0;
    pub const ENEMY_START_OFFSET: f32 = 0.0;
    pub const ENEMY_FIRE_DELAY_MS: u64 = 1500;
    pub const ENEMY_SIZE: (u32, u32) = (40, 80);
    /// Half-angle of the enemy's firing cone (degrees)
    pub const FIRING_CONE_DEGREES: f32 = 15.0;

    /// Laser defaults
    pub const LASER_SIZE: (u32, u32) = (5, 40);
    pub const LASER_SPEED: f32 = 5.0; // pixels/tick
    pub const LASER_DAMAGE: i32 = 1;
}
