//! Pixel-accurate collision detection
//!
//! A cheap rectangle test first, then a mask overlap at the pixel offset
//! between the two rectangles.

use glam::IVec2;

use super::mask::CollisionMask;
use super::rect::Rect;

/// Anything that occupies a rectangle and carries a collision mask
pub trait Collidable {
    fn rect(&self) -> &Rect;
    fn mask(&self) -> &CollisionMask;
}

/// Pixel offset of `other`'s top-left corner relative to `target`'s
#[inline]
pub fn mask_offset(target: &Rect, other: &Rect) -> IVec2 {
    other.pixel_origin() - target.pixel_origin()
}

/// Check whether `other` touches `target`
///
/// Returns the first contact point in `target`'s mask coordinates.
pub fn check_collision<A, B>(target: &A, other: &B) -> Option<IVec2>
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    if !target.rect().intersects(other.rect()) {
        return None;
    }

    let offset = mask_offset(target.rect(), other.rect());
    target.mask().overlap(other.mask(), offset)
}
