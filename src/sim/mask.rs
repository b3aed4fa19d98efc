//! Per-pixel collision masks
//!
//! A mask records which pixels of a sprite are opaque. Two sprites touch
//! only when their masks have an opaque pixel at the same screen location.

use glam::{IVec2, UVec2};

/// Opacity bitmap, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl CollisionMask {
    /// Fully transparent mask
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// Fully opaque mask
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width as usize * height as usize],
        }
    }

    /// Build a mask by asking `opaque(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, mut opaque: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(opaque(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Opacity at `(x, y)`; anything outside the mask is transparent
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, opaque: bool) {
        if x < self.width && y < self.height {
            self.bits[y as usize * self.width as usize + x as usize] = opaque;
        }
    }

    /// Number of opaque pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// First point where both masks are opaque.
    ///
    /// `offset` is the position of `other`'s top-left corner relative to
    /// this mask's. The returned point is in this mask's coordinates.
    pub fn overlap(&self, other: &CollisionMask, offset: IVec2) -> Option<IVec2> {
        let (x_start, x_end) = overlap_span(self.width, other.width, offset.x);
        let (y_start, y_end) = overlap_span(self.height, other.height, offset.y);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }

        None
    }
}

/// Range along one axis (in the first mask's coordinates) covered by both
/// masks; empty when they do not overlap on that axis
fn overlap_span(extent: u32, other_extent: u32, offset: i32) -> (i32, i32) {
    let start = offset.max(0);
    let end = (offset + other_extent as i32).min(extent as i32);
    (start, end.max(start))
}
