#![forbid(unsafe_code)]

//! Floating panel window management.
//!
//! # Role in glasspane
//! `glasspane-window` owns the geometry and lifecycle of one floating panel:
//! where it sits, how big it is, and whether it is normal, minimized, or
//! maximized. The hosting event loop feeds it pointer samples and viewport
//! changes; a rendering surface reads the current [`WindowFrame`] snapshot.
//!
//! # Primary responsibilities
//! - **WindowConfig**: caller-supplied geometry in unit-flexible values,
//!   resolved against the viewport at open time.
//! - **WindowController**: the drag/resize/minimize/maximize state machine
//!   with viewport clamping.
//!
//! # How it fits in the system
//! The controller is deliberately free of any rendering or input-subscription
//! concerns: the host asks [`WindowController::is_gesture_active`] to decide
//! when to route pointer-move/up events, and paints whatever
//! [`WindowController::frame`] reports.

pub mod config;
pub mod controller;

pub use config::{COLLAPSED_HEIGHT, WindowConfig};
pub use controller::{Mode, ResizeGrip, WindowController, WindowFrame};
