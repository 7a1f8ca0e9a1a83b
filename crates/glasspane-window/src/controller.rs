#![forbid(unsafe_code)]

//! Floating panel geometry state machine.
//!
//! [`WindowController`] owns the position, size, and lifecycle mode of one
//! floating panel. The hosting event loop calls the documented methods in
//! response to discrete pointer and viewport events; a rendering surface
//! reads [`WindowController::frame`] whenever state may have changed. The
//! controller never subscribes to input itself — the host routes
//! pointer-move/up delivery while [`WindowController::is_gesture_active`]
//! reports true.
//!
//! # State Machine
//!
//! Three mutually exclusive modes:
//!
//! - **Normal**: geometry is user-adjustable via drag and resize gestures.
//! - **Minimized**: the panel renders as a collapsed titlebar strip of
//!   [`COLLAPSED_HEIGHT`]; the stored height is preserved for restore.
//!   Dragging the collapsed bar is allowed.
//! - **Maximized**: the panel fills the viewport at (0,0); geometry is not
//!   user-adjustable until restored.
//!
//! A transient gesture (drag or resize) may be live on top of the mode. A
//! gesture is cancelled by discarding its state; geometry stays at whatever
//! the last update produced.
//!
//! # Invariants
//!
//! 1. Outside a live gesture, the panel's box lies inside the viewport
//!    whenever the viewport can hold the minimum size.
//! 2. During a live gesture, position and size are clamped independently:
//!    position against the viewport, size against the resolved bounds.
//! 3. The stored size never changes while minimized; only the rendered
//!    height collapses.
//! 4. Minimize is a no-op while maximized.
//! 5. The close hook fires at most once; `close` consumes the controller.
//!
//! # Failure Modes
//!
//! None. Every operation is a total, synchronous state transform. Gesture
//! updates without a matching live gesture are no-ops, as are mode
//! transitions from the wrong mode.

use std::fmt;

use glasspane_core::geometry::{Extent, Point, SizeBounds, clamp_span};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{COLLAPSED_HEIGHT, WindowConfig};

/// Panel lifecycle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Free-floating, user-adjustable.
    #[default]
    Normal,
    /// Collapsed to the titlebar strip.
    Minimized,
    /// Filling the viewport.
    Maximized,
}

/// Resize grip classification for any-edge / any-corner interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeGrip {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeGrip {
    /// Which horizontal edge this grip moves: `Some(false)` for the leading
    /// (left) edge, `Some(true)` for the trailing (right) edge, `None` when
    /// the grip does not touch the horizontal axis.
    #[must_use]
    const fn horizontal_edge(self) -> Option<bool> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(false),
            Self::Right | Self::TopRight | Self::BottomRight => Some(true),
            Self::Top | Self::Bottom => None,
        }
    }

    /// Which vertical edge this grip moves: `Some(false)` for the leading
    /// (top) edge, `Some(true)` for the trailing (bottom) edge.
    #[must_use]
    const fn vertical_edge(self) -> Option<bool> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(false),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(true),
            Self::Left | Self::Right => None,
        }
    }
}

/// Render-relevant snapshot of the panel.
///
/// While minimized, `size.height` is [`COLLAPSED_HEIGHT`] rather than the
/// stored content height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowFrame {
    pub position: Point,
    pub size: Extent,
    pub mode: Mode,
}

/// Geometry recorded before entering Minimized or Maximized.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SavedGeometry {
    position: Point,
    size: Extent,
}

/// Transient state of a live pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Drag {
        /// Pointer offset from the panel origin at gesture start.
        anchor: Point,
    },
    Resize {
        grip: ResizeGrip,
        /// Pointer position at gesture start.
        anchor: Point,
        start_position: Point,
        start_size: Extent,
    },
}

/// Geometry and lifecycle controller for one floating panel.
///
/// Created by [`open`](WindowController::open) when the panel is requested,
/// destroyed by [`close`](WindowController::close). Reopening builds fresh
/// state from the same config, re-resolved against the current viewport.
pub struct WindowController {
    config: WindowConfig,
    viewport: Extent,
    bounds: SizeBounds,
    position: Point,
    size: Extent,
    mode: Mode,
    saved: Option<SavedGeometry>,
    gesture: Option<Gesture>,
    on_close: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for WindowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowController")
            .field("position", &self.position)
            .field("size", &self.size)
            .field("mode", &self.mode)
            .field("gesture_active", &self.is_gesture_active())
            .finish_non_exhaustive()
    }
}

impl WindowController {
    /// Open a panel, resolving the config against the current viewport.
    ///
    /// The initial size is clamped into the resolved bounds and then capped
    /// to the viewport; the initial position is clamped so the panel fits
    /// fully on screen given that size.
    #[must_use]
    pub fn open(config: WindowConfig, viewport: Extent) -> Self {
        let bounds = config.resolve_bounds(viewport);
        let size = config
            .initial_size
            .resolve(viewport)
            .clamped(bounds)
            .min(viewport);
        let position = config
            .initial_position
            .resolve(viewport)
            .clamped_within(size, viewport);
        debug!(
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            "panel opened"
        );
        Self {
            config,
            viewport,
            bounds,
            position,
            size,
            mode: Mode::Normal,
            saved: None,
            gesture: None,
            on_close: None,
        }
    }

    /// Register the hook fired exactly once when the panel closes.
    pub fn set_on_close(&mut self, hook: impl FnOnce() + 'static) {
        self.on_close = Some(Box::new(hook));
    }

    /// Close the panel, firing the close hook and discarding all state.
    pub fn close(mut self) {
        debug!("panel closed");
        if let Some(hook) = self.on_close.take() {
            hook();
        }
    }

    // -----------------------------------------------------------------------
    // Snapshot queries
    // -----------------------------------------------------------------------

    /// Render snapshot: position, rendered size, and mode.
    #[must_use]
    pub fn frame(&self) -> WindowFrame {
        WindowFrame {
            position: self.position,
            size: Extent::new(self.size.width, self.effective_height()),
            mode: self.mode,
        }
    }

    /// Current top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current stored size (the content size, even while minimized).
    #[must_use]
    pub fn size(&self) -> Extent {
        self.size
    }

    /// Current lifecycle mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The viewport this controller last resolved against.
    #[must_use]
    pub fn viewport(&self) -> Extent {
        self.viewport
    }

    /// The config this panel was opened with.
    #[must_use]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Whether a drag or resize gesture is live.
    ///
    /// The host should deliver pointer-move/up events only while this is
    /// true, and may drop its subscription as soon as it turns false.
    #[inline]
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Discard any live gesture without touching geometry.
    ///
    /// Used for pointer-leave/window-blur cancellation: there is no rollback,
    /// geometry stays at whatever the last update produced.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    // -----------------------------------------------------------------------
    // Drag
    // -----------------------------------------------------------------------

    /// Start a drag from the given pointer position.
    ///
    /// Valid in Normal and Minimized modes (the collapsed bar can be
    /// dragged); a no-op while maximized.
    pub fn begin_drag(&mut self, pointer: Point) {
        if self.mode == Mode::Maximized {
            return;
        }
        let (dx, dy) = pointer.offset_from(self.position);
        self.gesture = Some(Gesture::Drag {
            anchor: Point::new(dx, dy),
        });
    }

    /// Move the panel to follow the pointer, clamped to the viewport.
    pub fn update_drag(&mut self, pointer: Point) {
        let Some(Gesture::Drag { anchor }) = self.gesture else {
            return;
        };
        if self.mode == Mode::Maximized {
            return;
        }
        let proposed = Point::new(pointer.x - anchor.x, pointer.y - anchor.y);
        let rendered = Extent::new(self.size.width, self.effective_height());
        self.position = proposed.clamped_within(rendered, self.viewport);
    }

    /// Finish a drag; geometry keeps its last updated value.
    pub fn end_drag(&mut self) {
        if matches!(self.gesture, Some(Gesture::Drag { .. })) {
            self.gesture = None;
        }
    }

    // -----------------------------------------------------------------------
    // Resize
    // -----------------------------------------------------------------------

    /// Start a resize from the given grip.
    ///
    /// Valid only when the panel is resizable and in Normal mode.
    pub fn begin_resize(&mut self, pointer: Point, grip: ResizeGrip) {
        if !self.config.resizable || self.mode != Mode::Normal {
            return;
        }
        self.gesture = Some(Gesture::Resize {
            grip,
            anchor: pointer,
            start_position: self.position,
            start_size: self.size,
        });
    }

    /// Apply the pointer delta to the gripped edges.
    ///
    /// Trailing edges (right/bottom) grow in place; leading edges (left/top)
    /// keep the opposite edge fixed by shifting the origin. Corner grips
    /// combine both axis rules independently.
    pub fn update_resize(&mut self, pointer: Point) {
        let Some(Gesture::Resize {
            grip,
            anchor,
            start_position,
            start_size,
        }) = self.gesture
        else {
            return;
        };
        if self.mode != Mode::Normal {
            return;
        }
        let (dx, dy) = pointer.offset_from(anchor);

        if let Some(trailing) = grip.horizontal_edge() {
            let (x, width) = resize_axis(
                trailing,
                start_position.x,
                start_size.width,
                dx,
                self.bounds.min.width,
                self.bounds.max.width,
                self.viewport.width,
            );
            self.position.x = x;
            self.size.width = width;
        }
        if let Some(trailing) = grip.vertical_edge() {
            let (y, height) = resize_axis(
                trailing,
                start_position.y,
                start_size.height,
                dy,
                self.bounds.min.height,
                self.bounds.max.height,
                self.viewport.height,
            );
            self.position.y = y;
            self.size.height = height;
        }
    }

    /// Finish a resize; geometry keeps its last updated value.
    pub fn end_resize(&mut self) {
        if matches!(self.gesture, Some(Gesture::Resize { .. })) {
            self.gesture = None;
        }
    }

    // -----------------------------------------------------------------------
    // Mode transitions
    // -----------------------------------------------------------------------

    /// Collapse to the titlebar strip. No-op while maximized (or already
    /// minimized); records the restore geometry on entry.
    pub fn minimize(&mut self) {
        if self.mode != Mode::Normal {
            return;
        }
        self.saved = Some(SavedGeometry {
            position: self.position,
            size: self.size,
        });
        self.mode = Mode::Minimized;
        self.reclamp_y();
        debug!("panel minimized");
    }

    /// Expand back from the titlebar strip; re-clamps y for the restored
    /// height.
    pub fn restore_from_minimize(&mut self) {
        if self.mode != Mode::Minimized {
            return;
        }
        self.mode = Mode::Normal;
        self.reclamp_y();
        debug!("panel restored from minimize");
    }

    /// Fill the viewport, recording the restore geometry.
    pub fn maximize(&mut self) {
        if self.mode != Mode::Normal {
            return;
        }
        self.saved = Some(SavedGeometry {
            position: self.position,
            size: self.size,
        });
        self.position = Point::default();
        self.size = self.viewport;
        self.mode = Mode::Maximized;
        debug!("panel maximized");
    }

    /// Return to the recorded geometry, clamped against the current viewport
    /// (which may have changed size while maximized).
    pub fn restore_from_maximize(&mut self) {
        if self.mode != Mode::Maximized {
            return;
        }
        self.mode = Mode::Normal;
        if let Some(saved) = self.saved.take() {
            self.size = saved.size.min(self.viewport);
            self.position = saved.position.clamped_within(self.size, self.viewport);
        }
        debug!("panel restored from maximize");
    }

    // -----------------------------------------------------------------------
    // Viewport
    // -----------------------------------------------------------------------

    /// React to a viewport size change.
    ///
    /// Percentage-based bounds are re-resolved, the stored size is clamped
    /// into the new bounds and viewport, and the position is re-clamped for
    /// the resulting box. A maximized panel keeps tracking the viewport at
    /// (0,0).
    pub fn on_viewport_resize(&mut self, viewport: Extent) {
        self.viewport = viewport;
        self.bounds = self.config.resolve_bounds(viewport);

        if self.mode == Mode::Maximized {
            self.position = Point::default();
            self.size = viewport;
            return;
        }

        self.size = self.size.clamped(self.bounds.capped(viewport));
        let rendered = Extent::new(self.size.width, self.effective_height());
        self.position = self.position.clamped_within(rendered, viewport);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "panel reclamped for viewport"
        );
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Height used for rendering and vertical clamping in the current mode.
    fn effective_height(&self) -> f32 {
        if self.mode == Mode::Minimized {
            COLLAPSED_HEIGHT
        } else {
            self.size.height
        }
    }

    /// Pull y back inside the viewport for the current effective height.
    fn reclamp_y(&mut self) {
        let max_y = (self.viewport.height - self.effective_height()).max(0.0);
        self.position.y = clamp_span(self.position.y, 0.0, max_y);
    }
}

/// One-axis resize rule.
///
/// Trailing edges grow in place, limited by the viewport space beyond the
/// fixed origin; leading edges keep the opposite edge fixed by shifting the
/// origin, limited by the space between the viewport edge and the opposite
/// edge. The minimum span wins when the allowance is smaller than it.
fn resize_axis(
    trailing: bool,
    start_origin: f32,
    start_span: f32,
    delta: f32,
    min_span: f32,
    max_span: f32,
    viewport_span: f32,
) -> (f32, f32) {
    if trailing {
        let limit = max_span.min(viewport_span - start_origin);
        (start_origin, clamp_span(start_span + delta, min_span, limit))
    } else {
        let limit = max_span.min(start_origin + start_span);
        let span = clamp_span(start_span - delta, min_span, limit);
        (start_origin + (start_span - span), span)
    }
}
