//! Sprite images and mask derivation
//!
//! Images are plain RGBA pixel buffers. Before a mask is derived an image
//! can be rotated by quarter turns, scaled (nearest neighbour) and given a
//! colorkey; colorkeyed or mostly transparent pixels are left out of the
//! mask.
//!
//! `ProceduralAssets` is an in-memory `AssetService` that draws the ship
//! images itself, so the game runs without image files.

use std::collections::HashMap;

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::platform::{AssetError, AssetService};
use crate::sim::{CollisionMask, Sprite, VisualId};

/// 8-bit RGBA colour
pub type Rgba = [u8; 4];

/// Pixels with alpha at or below this count as transparent
pub const ALPHA_THRESHOLD: u8 = 127;

/// Background colour the bundled ship images are drawn on
pub const COLORKEY: Rgba = [255, 0, 255, 255];

/// Counter-clockwise rotation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

/// Transforms applied to a loaded image before its mask is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteTransform {
    pub rotation: Rotation,
    /// Target size after rotation
    pub scale: Option<UVec2>,
    /// Colour treated as transparent
    pub colorkey: Option<Rgba>,
}

impl SpriteTransform {
    pub fn rotate(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scale(mut self, width: u32, height: u32) -> Self {
        self.scale = Some(UVec2::new(width, height));
        self
    }

    pub fn colorkey(mut self, color: Rgba) -> Self {
        self.colorkey = Some(color);
        self
    }
}

/// Row-major RGBA image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, mut pixel: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
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
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Rotate counter-clockwise by the given number of quarter turns
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let (w, h) = (self.width, self.height);
        match rotation {
            Rotation::None => self.clone(),
            Rotation::Quarter => Self::from_fn(h, w, |x, y| self.get(w - 1 - y, x)),
            Rotation::Half => Self::from_fn(w, h, |x, y| self.get(w - 1 - x, h - 1 - y)),
            Rotation::ThreeQuarter => Self::from_fn(h, w, |x, y| self.get(y, h - 1 - x)),
        }
    }

    /// Nearest-neighbour resize
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |x, y| {
            let sx = (x as u64 * self.width as u64 / width as u64) as u32;
            let sy = (y as u64 * self.height as u64 / height as u64) as u32;
            self.get(sx, sy)
        })
    }

    /// Derive a collision mask: a pixel is opaque unless it matches the
    /// colorkey (RGB only) or its alpha is at or below `ALPHA_THRESHOLD`
    pub fn to_mask(&self, colorkey: Option<Rgba>) -> CollisionMask {
        CollisionMask::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, a] = self.get(x, y);
            let keyed = colorkey.is_some_and(|[kr, kg, kb, _]| (r, g, b) == (kr, kg, kb));
            !keyed && a > ALPHA_THRESHOLD
        })
    }
}

/// In-memory asset service with procedurally drawn ships
#[derive(Debug, Clone)]
pub struct ProceduralAssets {
    sources: HashMap<String, PixelBuffer>,
    /// Final images, indexed by `VisualId`
    images: Vec<PixelBuffer>,
}

impl Default for ProceduralAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl ProceduralAssets {
    /// Service preloaded with the `spaceship` and `enemy` images
    pub fn new() -> Self {
        let mut assets = Self {
            sources: HashMap::new(),
            images: Vec::new(),
        };
        assets.register("spaceship", draw_spaceship());
        assets.register("enemy", draw_enemy());
        assets
    }

    /// Add or replace a named source image
    pub fn register(&mut self, name: &str, image: PixelBuffer) {
        self.sources.insert(name.to_string(), image);
    }

    /// Final image behind a visual handle
    pub fn image(&self, visual: VisualId) -> Option<&PixelBuffer> {
        self.images.get(visual.0 as usize)
    }

    fn store(&mut self, image: PixelBuffer, mask: CollisionMask) -> Sprite {
        let visual = VisualId(self.images.len() as u32);
        self.images.push(image);
        Sprite::new(visual, mask)
    }
}

impl AssetService for ProceduralAssets {
    fn load_sprite(&mut self, name: &str, transform: &SpriteTransform) -> Result<Sprite, AssetError> {
        let source = self
            .sources
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;

        let mut image = source.rotated(transform.rotation);
        if let Some(size) = transform.scale {
            if size.x == 0 || size.y == 0 {
                return Err(AssetError::InvalidScale {
                    name: name.to_string(),
                    width: size.x,
                    height: size.y,
                });
            }
            image = image.scaled(size.x, size.y);
        }

        let mask = image.to_mask(transform.colorkey);
        log::debug!(
            "Loaded sprite '{}' ({}x{}, {} opaque pixels)",
            name,
            image.width(),
            image.height(),
            mask.count()
        );
        Ok(self.store(image, mask))
    }

    fn solid_sprite(&mut self, width: u32, height: u32, color: Rgba) -> Sprite {
        self.store(PixelBuffer::new(width, height, color), CollisionMask::solid(width, height))
    }
}

/// 50x40 arrowhead, nose at the bottom (the game turns it upright)
fn draw_spaceship() -> PixelBuffer {
    const HULL: Rgba = [90, 200, 255, 255];
    PixelBuffer::from_fn(50, 40, |x, y| {
        let half_width = (40 - y) as f32 * 25.0 / 40.0;
        if (x as f32 + 0.5 - 25.0).abs() <= half_width {
            HULL
        } else {
            COLORKEY
        }
    })
}

/// 60x120 saucer with a hollow cockpit, drawn upside down
fn draw_enemy() -> PixelBuffer {
    const HULL: Rgba = [220, 40, 40, 255];
    PixelBuffer::from_fn(60, 120, |x, y| {
        let dx = (x as f32 + 0.5 - 30.0) / 30.0;
        let dy = (y as f32 + 0.5 - 60.0) / 60.0;
        let d = dx * dx + dy * dy;
        if (0.15..=1.0).contains(&d) {
            HULL
        } else {
            COLORKEY
        }
    })
}
