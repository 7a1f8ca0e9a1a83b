#![forbid(unsafe_code)]

//! Unit-flexible magnitudes and their resolution to pixels.
//!
//! Hosts supply panel geometry either as absolute pixels (`420`, `"420px"`)
//! or relative to the viewport (`"50%"`, `"75vw"`, `"60vh"`). [`UnitValue`]
//! tags a magnitude with its unit; [`UnitValue::resolve`] is the single
//! conversion point to absolute pixels. Once resolved, internal state is
//! plain pixels — only viewport-relative size bounds are resolved again when
//! the viewport changes.
//!
//! # Invariants
//!
//! 1. Parsing is total: every input string produces a value.
//! 2. A bare `%` is relative to the axis the value belongs to; `vw`/`vh`
//!    name their axis explicitly.
//! 3. Resolution of a `Px` value is the identity on its magnitude.
//!
//! # Failure Modes
//!
//! None. Unknown suffixes fall back to pixels using the numeric prefix, and
//! a missing numeric prefix yields a magnitude of zero.

use serde::{Deserialize, Serialize};

use crate::geometry::{Extent, Point};

/// The viewport axis a value is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Measurement unit for a [`UnitValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Absolute pixels.
    Px,
    /// Percentage of the viewport width.
    PercentOfWidth,
    /// Percentage of the viewport height.
    PercentOfHeight,
}

/// A numeric magnitude tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    pub magnitude: f32,
    pub unit: Unit,
}

impl UnitValue {
    /// An absolute pixel value.
    #[inline]
    pub const fn px(magnitude: f32) -> Self {
        Self {
            magnitude,
            unit: Unit::Px,
        }
    }

    /// A percentage of the viewport width.
    #[inline]
    pub const fn percent_of_width(magnitude: f32) -> Self {
        Self {
            magnitude,
            unit: Unit::PercentOfWidth,
        }
    }

    /// A percentage of the viewport height.
    #[inline]
    pub const fn percent_of_height(magnitude: f32) -> Self {
        Self {
            magnitude,
            unit: Unit::PercentOfHeight,
        }
    }

    /// Parse a magnitude with an optional unit suffix for the given axis.
    ///
    /// Accepted suffixes: `px` (or none), `%` (relative to the axis
    /// dimension), `vw`, `vh`. Anything else is treated as pixels using the
    /// numeric prefix; input without a numeric prefix parses as zero.
    #[must_use]
    pub fn parse(input: &str, axis: Axis) -> Self {
        let trimmed = input.trim();
        let split = trimmed
            .char_indices()
            .find(|&(i, c)| {
                !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+')))
            })
            .map_or(trimmed.len(), |(i, _)| i);

        let magnitude = trimmed[..split].parse::<f32>().unwrap_or(0.0);
        let unit = match trimmed[split..].trim() {
            "%" => match axis {
                Axis::Horizontal => Unit::PercentOfWidth,
                Axis::Vertical => Unit::PercentOfHeight,
            },
            "vw" => Unit::PercentOfWidth,
            "vh" => Unit::PercentOfHeight,
            _ => Unit::Px,
        };

        Self { magnitude, unit }
    }

    /// Resolve to absolute pixels against the given viewport.
    #[must_use]
    pub fn resolve(self, viewport: Extent) -> f32 {
        match self.unit {
            Unit::Px => self.magnitude,
            Unit::PercentOfWidth => self.magnitude / 100.0 * viewport.width,
            Unit::PercentOfHeight => self.magnitude / 100.0 * viewport.height,
        }
    }
}

impl From<f32> for UnitValue {
    fn from(magnitude: f32) -> Self {
        Self::px(magnitude)
    }
}

/// A position whose components may carry different units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: UnitValue,
    pub y: UnitValue,
}

impl UnitPoint {
    /// Create a new unit point.
    #[inline]
    pub const fn new(x: UnitValue, y: UnitValue) -> Self {
        Self { x, y }
    }

    /// Parse both components, applying the matching axis to each.
    #[must_use]
    pub fn parse(x: &str, y: &str) -> Self {
        Self {
            x: UnitValue::parse(x, Axis::Horizontal),
            y: UnitValue::parse(y, Axis::Vertical),
        }
    }

    /// Resolve both components against the given viewport.
    #[must_use]
    pub fn resolve(self, viewport: Extent) -> Point {
        Point::new(self.x.resolve(viewport), self.y.resolve(viewport))
    }
}

impl From<(f32, f32)> for UnitPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(UnitValue::px(x), UnitValue::px(y))
    }
}

/// A size whose components may carry different units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitExtent {
    pub width: UnitValue,
    pub height: UnitValue,
}

impl UnitExtent {
    /// Create a new unit extent.
    #[inline]
    pub const fn new(width: UnitValue, height: UnitValue) -> Self {
        Self { width, height }
    }

    /// Parse both components, applying the matching axis to each.
    #[must_use]
    pub fn parse(width: &str, height: &str) -> Self {
        Self {
            width: UnitValue::parse(width, Axis::Horizontal),
            height: UnitValue::parse(height, Axis::Vertical),
        }
    }

    /// Resolve both components against the given viewport.
    #[must_use]
    pub fn resolve(self, viewport: Extent) -> Extent {
        Extent::new(self.width.resolve(viewport), self.height.resolve(viewport))
    }
}

impl From<(f32, f32)> for UnitExtent {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(UnitValue::px(width), UnitValue::px(height))
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Unit, UnitExtent, UnitPoint, UnitValue};
    use crate::geometry::{Extent, Point};

    const VIEWPORT: Extent = Extent::new(1200.0, 800.0);

    #[test]
    fn bare_number_is_pixels() {
        let v = UnitValue::parse("420", Axis::Horizontal);
        assert_eq!(v, UnitValue::px(420.0));
        assert_eq!(v.resolve(VIEWPORT), 420.0);
    }

    #[test]
    fn px_suffix_is_pixels() {
        assert_eq!(
            UnitValue::parse("320px", Axis::Vertical),
            UnitValue::px(320.0)
        );
    }

    #[test]
    fn percent_follows_axis() {
        let x = UnitValue::parse("50%", Axis::Horizontal);
        let y = UnitValue::parse("50%", Axis::Vertical);
        assert_eq!(x.unit, Unit::PercentOfWidth);
        assert_eq!(y.unit, Unit::PercentOfHeight);
        assert_eq!(x.resolve(VIEWPORT), 600.0);
        assert_eq!(y.resolve(VIEWPORT), 400.0);
    }

    #[test]
    fn viewport_units_name_their_axis() {
        let vw = UnitValue::parse("75vw", Axis::Vertical);
        let vh = UnitValue::parse("60vh", Axis::Horizontal);
        assert_eq!(vw.unit, Unit::PercentOfWidth);
        assert_eq!(vh.unit, Unit::PercentOfHeight);
        assert_eq!(vw.resolve(VIEWPORT), 900.0);
        assert_eq!(vh.resolve(VIEWPORT), 480.0);
    }

    #[test]
    fn unknown_suffix_falls_back_to_pixels() {
        assert_eq!(
            UnitValue::parse("12pt", Axis::Horizontal),
            UnitValue::px(12.0)
        );
    }

    #[test]
    fn missing_prefix_parses_as_zero() {
        assert_eq!(UnitValue::parse("em", Axis::Horizontal), UnitValue::px(0.0));
        assert_eq!(UnitValue::parse("", Axis::Vertical), UnitValue::px(0.0));
    }

    #[test]
    fn negative_and_fractional_magnitudes() {
        assert_eq!(
            UnitValue::parse("-12.5px", Axis::Horizontal),
            UnitValue::px(-12.5)
        );
        let v = UnitValue::parse("33.25%", Axis::Vertical);
        assert_eq!(v.unit, Unit::PercentOfHeight);
        assert!((v.magnitude - 33.25).abs() < f32::EPSILON);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let v = UnitValue::parse("  50 %  ", Axis::Horizontal);
        assert_eq!(v.unit, Unit::PercentOfWidth);
        assert_eq!(v.magnitude, 50.0);
    }

    #[test]
    fn unit_point_resolves_per_axis() {
        let p = UnitPoint::parse("50%", "50%");
        assert_eq!(p.resolve(VIEWPORT), Point::new(600.0, 400.0));
    }

    #[test]
    fn unit_extent_resolves_per_axis() {
        let e = UnitExtent::parse("75%", "60%");
        assert_eq!(e.resolve(VIEWPORT), Extent::new(900.0, 480.0));
    }

    #[test]
    fn from_pixels_tuple() {
        let e = UnitExtent::from((400.0, 500.0));
        assert_eq!(e.resolve(VIEWPORT), Extent::new(400.0, 500.0));
    }

    #[test]
    fn serde_round_trip() {
        let v = UnitValue::percent_of_width(75.0);
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("percent_of_width"));
        let back: UnitValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
