//! Platform abstraction layer
//!
//! The simulation only talks to the outside world through these traits:
//! - Assets: sprite images and their collision masks
//! - Rendering: blitting visuals at rectangles
//! - Input: movement keys, fire and quit
//! - Time: per-frame elapsed duration, throttled to a target rate

pub mod headless;
pub mod native;

use std::time::Duration;

use thiserror::Error;

use crate::assets::{Rgba, SpriteTransform};
use crate::sim::{Rect, Sprite, TickInput, VisualId};

pub use headless::{FixedClock, RecordingSurface, ScriptedInput};
pub use native::ThrottledClock;

/// Errors raised by an asset service
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("unknown sprite: {0}")]
    NotFound(String),

    #[error("sprite {name} cannot be scaled to {width}x{height}")]
    InvalidScale { name: String, width: u32, height: u32 },
}

/// Loads images and derives their collision masks
pub trait AssetService {
    /// Load a named sprite, apply `transform`, then derive its mask
    fn load_sprite(&mut self, name: &str, transform: &SpriteTransform) -> Result<Sprite, AssetError>;

    /// A solid rectangle of one colour
    fn solid_sprite(&mut self, width: u32, height: u32, color: Rgba) -> Sprite;
}

/// Drawing target
pub trait RenderSurface {
    fn clear(&mut self, color: Rgba);
    fn blit(&mut self, visual: VisualId, rect: &Rect);
    /// Show the finished frame
    fn present(&mut self);
}

/// Input sampled once per frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub input: TickInput,
    /// Window closed / quit requested
    pub quit: bool,
}

pub trait InputService {
    fn poll(&mut self) -> InputFrame;
}

/// Frame timing source
pub trait FrameClock {
    /// Wait out the rest of the frame budget and return the time since the
    /// previous call
    fn tick(&mut self, target_fps: u32) -> Duration;
}
