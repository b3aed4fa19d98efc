//! Gameplay tuning
//!
//! Every number the duel depends on lives here. Defaults reproduce the
//! classic feel; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Largest sprite or play-field side accepted from a tuning file (pixels)
pub const MAX_DIMENSION: u32 = 8192;

/// Errors raised while loading a tuning file
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value: {0}")]
    Invalid(String),
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Frame rate the clock throttles to
    pub target_fps: u32,

    // === Player ===
    /// Movement speed (pixels/second)
    pub player_speed: f32,
    pub player_health: i32,
    /// Spawn distance below the play-field centre
    pub player_start_offset: f32,
    /// Cooldown between shots (ms)
    pub player_fire_delay_ms: u64,

    // === Enemy ===
    /// Homing speed (pixels/second)
    pub enemy_speed: f32,
    /// How far above the player the enemy tries to hover
    pub enemy_standoff: f32,
    /// Spawn distance below the play-field centre
    pub enemy_start_offset: f32,
    /// Cooldown between shots (ms)
    pub enemy_fire_delay_ms: u64,
    /// Half-angle of the firing cone (degrees)
    pub firing_cone_degrees: f32,
    pub enemy_width: u32,
    pub enemy_height: u32,

    // === Lasers ===
    pub laser_width: u32,
    pub laser_height: u32,
    /// Pixels travelled per tick
    pub laser_speed: f32,
    /// Health removed from the player per enemy hit
    pub laser_damage: i32,
    /// Drop lasers once they leave the play field
    pub cull_offscreen_projectiles: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,

            player_speed: PLAYER_SPEED,
            player_health: PLAYER_HEALTH,
            player_start_offset: PLAYER_START_OFFSET,
            player_fire_delay_ms: PLAYER_FIRE_DELAY_MS,

            enemy_speed: ENEMY_SPEED,
            enemy_standoff: ENEMY_STANDOFF,
            enemy_start_offset: ENEMY_START_OFFSET,
            enemy_fire_delay_ms: ENEMY_FIRE_DELAY_MS,
            firing_cone_degrees: FIRING_CONE_DEGREES,
            enemy_width: ENEMY_SIZE.0,
            enemy_height: ENEMY_SIZE.1,

            laser_width: LASER_SIZE.0,
            laser_height: LASER_SIZE.1,
            laser_speed: LASER_SPEED,
            laser_damage: LASER_DAMAGE,
            cull_offscreen_projectiles: true,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(TuningError::Invalid("play field must have a non-zero size".into()));
        }
        if self.target_fps == 0 {
            return Err(TuningError::Invalid("target_fps must be positive".into()));
        }
        if self.enemy_width == 0 || self.enemy_height == 0 {
            return Err(TuningError::Invalid("enemy sprite must have a non-zero size".into()));
        }
        if self.laser_width == 0 || self.laser_height == 0 {
            return Err(TuningError::Invalid("laser must have a non-zero size".into()));
        }
        for (name, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("laser_width", self.laser_width),
            ("laser_height", self.laser_height),
        ] {
            if value > MAX_DIMENSION {
                return Err(TuningError::Invalid(format!("{name} must not exceed {MAX_DIMENSION}")));
            }
        }
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("laser_speed", self.laser_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid(format!("{name} must be a non-negative number")));
            }
        }
        if !(0.0..=90.0).contains(&self.firing_cone_degrees) {
            return Err(TuningError::Invalid("firing_cone_degrees must lie in 0..=90".into()));
        }
        Ok(())
    }

    /// Duration of one frame at the target rate (ms)
    pub fn frame_budget_ms(&self) -> u64 {
        1000 / self.target_fps.max(1) as u64
    }
}
