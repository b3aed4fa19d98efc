//! Axis-aligned rectangles
//!
//! Positions are stored as floats (top-left corner). Pixel-level work such
//! as mask offsets snaps the corner down to whole pixels.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move the top-left corner to `position`
    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Move by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Top-left corner snapped down to whole pixels
    pub fn pixel_origin(&self) -> IVec2 {
        self.position().floor().as_ivec2()
    }

    /// Strict overlap test: shared edges do not count, and a rectangle with
    /// zero width or height never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }

        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Move this rectangle so it lies inside `bounds`.
    ///
    /// An axis on which this rectangle is larger than `bounds` is centred on
    /// the bounds instead.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = clamp_axis(self.x, self.width, bounds.x, bounds.width);
        self.y = clamp_axis(self.y, self.height, bounds.y, bounds.height);
    }
}

fn clamp_axis(start: f32, extent: f32, bounds_start: f32, bounds_extent: f32) -> f32 {
    if extent >= bounds_extent {
        bounds_start + bounds_extent / 2.0 - extent / 2.0
    } else if start < bounds_start {
        bounds_start
    } else if start + extent > bounds_start + bounds_extent {
        bounds_start + bounds_extent - extent
    } else {
        start
    }
}
