#![forbid(unsafe_code)]

//! Geometric primitives for panel placement.

use serde::{Deserialize, Serialize};

/// Absolute pixel coordinates of a panel's top-left corner.
///
/// Origin is the viewport's top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset from `other` (`self - other`).
    #[inline]
    #[must_use]
    pub fn offset_from(self, other: Point) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }

    /// Translate by a component-wise delta.
    #[inline]
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Clamp so a box of `size` placed at this point stays inside `viewport`.
    ///
    /// When the box is larger than the viewport on an axis, the origin pins
    /// to 0 on that axis.
    #[must_use]
    pub fn clamped_within(self, size: Extent, viewport: Extent) -> Self {
        Self {
            x: clamp_span(self.x, 0.0, (viewport.width - size.width).max(0.0)),
            y: clamp_span(self.y, 0.0, (viewport.height - size.height).max(0.0)),
        }
    }
}

/// Absolute pixel dimensions of a content box. Also used for viewport extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Element-wise minimum with another extent.
    #[inline]
    #[must_use]
    pub fn min(self, other: Extent) -> Extent {
        Extent::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Clamp element-wise into `bounds`.
    ///
    /// The lower bound wins on degenerate ranges, see [`clamp_span`].
    #[must_use]
    pub fn clamped(self, bounds: SizeBounds) -> Extent {
        Extent::new(
            clamp_span(self.width, bounds.min.width, bounds.max.width),
            clamp_span(self.height, bounds.min.height, bounds.max.height),
        )
    }
}

/// Permitted size range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: Extent,
    pub max: Extent,
}

impl SizeBounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(min: Extent, max: Extent) -> Self {
        Self { min, max }
    }

    /// Restrict the upper bound element-wise, e.g. to the viewport.
    #[inline]
    #[must_use]
    pub fn capped(self, cap: Extent) -> SizeBounds {
        SizeBounds::new(self.min, self.max.min(cap))
    }
}

/// Scalar clamp where the lower bound wins over a smaller upper bound.
///
/// Degenerate ranges (`min > max`) come from caller-supplied bounds and are
/// recovered by clamping rather than treated as errors.
#[inline]
#[must_use]
pub fn clamp_span(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
