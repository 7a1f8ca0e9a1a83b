#![forbid(unsafe_code)]

//! Panel configuration supplied by the host at open time.

use glasspane_core::geometry::{Extent, SizeBounds};
use glasspane_core::unit::{UnitExtent, UnitPoint};
use serde::{Deserialize, Serialize};

/// Height in pixels of the titlebar strip a minimized panel collapses to.
///
/// Fixed by design: the collapsed bar shows only the titlebar, regardless of
/// panel content.
pub const COLLAPSED_HEIGHT: f32 = 40.0;

/// Caller-supplied panel geometry and capability flags.
///
/// Position and size components may be absolute pixels or viewport-relative
/// percentages; they are resolved against the viewport when the panel opens.
/// Size bounds are re-resolved whenever the viewport changes, so
/// percentage-based bounds track the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Top-left corner of the panel at open time.
    pub initial_position: UnitPoint,

    /// Content-box size at open time.
    pub initial_size: UnitExtent,

    /// Smallest permitted size.
    pub min_size: UnitExtent,

    /// Largest permitted size.
    pub max_size: UnitExtent,

    /// Whether edge/corner resize gestures are accepted.
    #[serde(default = "default_flag")]
    pub resizable: bool,

    /// Whether the rendering surface should draw titlebar controls.
    ///
    /// Purely advisory to the renderer; the controller does not gate any
    /// transition on it.
    #[serde(default = "default_flag")]
    pub show_controls: bool,
}

fn default_flag() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            initial_position: UnitPoint::from((100.0, 100.0)),
            initial_size: UnitExtent::from((320.0, 400.0)),
            min_size: UnitExtent::from((250.0, 200.0)),
            max_size: UnitExtent::from((800.0, 600.0)),
            resizable: true,
            show_controls: true,
        }
    }
}

impl WindowConfig {
    /// Set the initial position.
    #[must_use]
    pub fn initial_position(mut self, position: impl Into<UnitPoint>) -> Self {
        self.initial_position = position.into();
        self
    }

    /// Set the initial size.
    #[must_use]
    pub fn initial_size(mut self, size: impl Into<UnitExtent>) -> Self {
        self.initial_size = size.into();
        self
    }

    /// Set the minimum size.
    #[must_use]
    pub fn min_size(mut self, size: impl Into<UnitExtent>) -> Self {
        self.min_size = size.into();
        self
    }

    /// Set the maximum size.
    #[must_use]
    pub fn max_size(mut self, size: impl Into<UnitExtent>) -> Self {
        self.max_size = size.into();
        self
    }

    /// Enable or disable resize gestures.
    #[must_use]
    pub const fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Show or hide titlebar controls.
    #[must_use]
    pub const fn show_controls(mut self, show_controls: bool) -> Self {
        self.show_controls = show_controls;
        self
    }

    /// Resolve the size bounds against a viewport.
    #[must_use]
    pub fn resolve_bounds(&self, viewport: Extent) -> SizeBounds {
        SizeBounds::new(
            self.min_size.resolve(viewport),
            self.max_size.resolve(viewport),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{COLLAPSED_HEIGHT, WindowConfig};
    use glasspane_core::geometry::Extent;
    use glasspane_core::unit::UnitExtent;

    #[test]
    fn defaults_mirror_the_stock_panel() {
        let config = WindowConfig::default();
        let viewport = Extent::new(1920.0, 1080.0);
        assert_eq!(
            config.initial_size.resolve(viewport),
            Extent::new(320.0, 400.0)
        );
        assert_eq!(config.min_size.resolve(viewport), Extent::new(250.0, 200.0));
        assert_eq!(config.max_size.resolve(viewport), Extent::new(800.0, 600.0));
        assert!(config.resizable);
        assert!(config.show_controls);
    }

    #[test]
    fn percentage_bounds_track_the_viewport() {
        let config = WindowConfig::default().max_size(UnitExtent::parse("75%", "60%"));
        let bounds = config.resolve_bounds(Extent::new(1200.0, 800.0));
        assert_eq!(bounds.max, Extent::new(900.0, 480.0));
        let bounds = config.resolve_bounds(Extent::new(800.0, 600.0));
        assert_eq!(bounds.max, Extent::new(600.0, 360.0));
    }

    #[test]
    fn collapsed_height_is_a_fixed_constant() {
        assert_eq!(COLLAPSED_HEIGHT, 40.0);
    }

    #[test]
    fn serde_round_trip_with_flag_defaults() {
        let config = WindowConfig::default().resizable(false);
        let json = serde_json::to_string(&config).unwrap();
        let back: WindowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        // Flags omitted from the payload default to true.
        let sparse: WindowConfig = serde_json::from_str(
            r#"{
                "initial_position": {
                    "x": {"magnitude": 100.0, "unit": "px"},
                    "y": {"magnitude": 100.0, "unit": "px"}
                },
                "initial_size": {
                    "width": {"magnitude": 320.0, "unit": "px"},
                    "height": {"magnitude": 400.0, "unit": "px"}
                },
                "min_size": {
                    "width": {"magnitude": 250.0, "unit": "px"},
                    "height": {"magnitude": 200.0, "unit": "px"}
                },
                "max_size": {
                    "width": {"magnitude": 75.0, "unit": "percent_of_width"},
                    "height": {"magnitude": 60.0, "unit": "percent_of_height"}
                }
            }"#,
        )
        .unwrap();
        assert!(sparse.resizable);
        assert!(sparse.show_controls);
    }
}
