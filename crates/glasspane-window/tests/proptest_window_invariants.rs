//! Property-based invariant tests for the window controller.
//!
//! These verify the geometric contracts that must hold for any valid inputs:
//!
//! 1. open() lands the size inside the bounds and the viewport, and the
//!    position inside the viewport.
//! 2. Arbitrary drag sequences keep a Normal-mode panel inside the viewport.
//! 3. Arbitrary resize sequences keep size within bounds and the panel
//!    inside the viewport.
//! 4. Leading-edge resizes keep the opposite edge fixed.
//! 5. Maximize followed by restore round-trips geometry exactly when the
//!    viewport is unchanged.
//! 6. Viewport changes pull the panel back inside the new viewport.
//! 7. Minimize/restore never changes the stored size.

use glasspane_core::geometry::{Extent, Point};
use glasspane_core::unit::{UnitExtent, UnitPoint};
use glasspane_window::{COLLAPSED_HEIGHT, Mode, ResizeGrip, WindowConfig, WindowController};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const EPS: f32 = 1e-3;

// ── Strategies ──────────────────────────────────────────────────────────

/// Viewports large enough to hold the minimum sizes generated below, so the
/// containment invariant is meaningful.
fn viewport() -> impl Strategy<Value = Extent> {
    (600.0f32..=3840.0, 500.0f32..=2160.0).prop_map(|(w, h)| Extent::new(w, h))
}

fn config() -> impl Strategy<Value = WindowConfig> {
    (
        (0.0f32..=4000.0, 0.0f32..=4000.0),
        (50.0f32..=2000.0, 50.0f32..=2000.0),
        (100.0f32..=400.0, 100.0f32..=400.0),
        (400.0f32..=2500.0, 400.0f32..=2500.0),
    )
        .prop_map(|(pos, size, min, max)| {
            WindowConfig::default()
                .initial_position(UnitPoint::from(pos))
                .initial_size(UnitExtent::from(size))
                .min_size(UnitExtent::from(min))
                .max_size(UnitExtent::from(max))
        })
}

fn pointer() -> impl Strategy<Value = Point> {
    (-500.0f32..=4500.0, -500.0f32..=4500.0).prop_map(|(x, y)| Point::new(x, y))
}

fn grip() -> impl Strategy<Value = ResizeGrip> {
    prop_oneof![
        Just(ResizeGrip::Left),
        Just(ResizeGrip::Right),
        Just(ResizeGrip::Top),
        Just(ResizeGrip::Bottom),
        Just(ResizeGrip::TopLeft),
        Just(ResizeGrip::TopRight),
        Just(ResizeGrip::BottomLeft),
        Just(ResizeGrip::BottomRight),
    ]
}

fn assert_contained(panel: &WindowController, viewport: Extent) -> Result<(), TestCaseError> {
    let frame = panel.frame();
    prop_assert!(frame.position.x >= -EPS);
    prop_assert!(frame.position.y >= -EPS);
    prop_assert!(frame.position.x + frame.size.width <= viewport.width + EPS);
    prop_assert!(frame.position.y + frame.size.height <= viewport.height + EPS);
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. open() clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn open_lands_inside_bounds_and_viewport(config in config(), vp in viewport()) {
        let panel = WindowController::open(config, vp);
        let bounds = config.resolve_bounds(vp);
        let size = panel.size();

        prop_assert!(size.width <= bounds.max.width.max(bounds.min.width) + EPS);
        prop_assert!(size.height <= bounds.max.height.max(bounds.min.height) + EPS);
        prop_assert!(size.width <= vp.width + EPS);
        prop_assert!(size.height <= vp.height + EPS);
        // The generated viewports always hold the minimum, so the lower
        // bound is honored too.
        prop_assert!(size.width >= bounds.min.width.min(vp.width) - EPS);
        prop_assert!(size.height >= bounds.min.height.min(vp.height) - EPS);
        assert_contained(&panel, vp)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Containment under drags
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drags_never_escape_the_viewport(
        config in config(),
        vp in viewport(),
        start in pointer(),
        moves in proptest::collection::vec(pointer(), 1..16),
    ) {
        let mut panel = WindowController::open(config, vp);
        panel.begin_drag(start);
        for sample in moves {
            panel.update_drag(sample);
            assert_contained(&panel, vp)?;
        }
        panel.end_drag();
        assert_contained(&panel, vp)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Containment and bounds under resizes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resizes_respect_bounds_and_viewport(
        config in config(),
        vp in viewport(),
        grip in grip(),
        start in pointer(),
        moves in proptest::collection::vec(pointer(), 1..16),
    ) {
        let mut panel = WindowController::open(config, vp);
        let bounds = config.resolve_bounds(vp);
        panel.begin_resize(start, grip);
        for sample in moves {
            panel.update_resize(sample);
            let size = panel.size();
            prop_assert!(size.width >= bounds.min.width - EPS);
            prop_assert!(size.height >= bounds.min.height - EPS);
            prop_assert!(size.width <= bounds.max.width + EPS);
            prop_assert!(size.height <= bounds.max.height + EPS);
            assert_contained(&panel, vp)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Opposite-edge fixity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn leading_edge_resize_keeps_opposite_edge_fixed(
        config in config(),
        vp in viewport(),
        start in pointer(),
        sample in pointer(),
    ) {
        let mut panel = WindowController::open(config, vp);
        let right_edge = panel.position().x + panel.size().width;
        let bottom_edge = panel.position().y + panel.size().height;

        panel.begin_resize(start, ResizeGrip::TopLeft);
        panel.update_resize(sample);
        prop_assert!((panel.position().x + panel.size().width - right_edge).abs() < EPS);
        prop_assert!((panel.position().y + panel.size().height - bottom_edge).abs() < EPS);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Maximize/restore round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn maximize_restore_round_trips(config in config(), vp in viewport()) {
        let mut panel = WindowController::open(config, vp);
        let position = panel.position();
        let size = panel.size();

        panel.maximize();
        prop_assert_eq!(panel.mode(), Mode::Maximized);
        prop_assert_eq!(panel.position(), Point::new(0.0, 0.0));
        prop_assert_eq!(panel.size(), vp);

        panel.restore_from_maximize();
        prop_assert_eq!(panel.mode(), Mode::Normal);
        prop_assert_eq!(panel.position(), position);
        prop_assert_eq!(panel.size(), size);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Viewport reclamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn viewport_changes_pull_the_panel_back_inside(
        config in config(),
        vp in viewport(),
        next_vp in viewport(),
    ) {
        let mut panel = WindowController::open(config, vp);
        panel.on_viewport_resize(next_vp);
        assert_contained(&panel, next_vp)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Minimize preserves stored size
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn minimize_preserves_stored_size(
        config in config(),
        vp in viewport(),
        moves in proptest::collection::vec(pointer(), 0..8),
    ) {
        let mut panel = WindowController::open(config, vp);
        let size = panel.size();

        panel.minimize();
        prop_assert_eq!(panel.size(), size);
        prop_assert_eq!(panel.frame().size.height, COLLAPSED_HEIGHT);

        panel.begin_drag(Point::new(0.0, 0.0));
        for sample in moves {
            panel.update_drag(sample);
        }
        panel.end_drag();
        prop_assert_eq!(panel.size(), size);

        panel.restore_from_minimize();
        prop_assert_eq!(panel.size(), size);
        assert_contained(&panel, vp)?;
    }
}
