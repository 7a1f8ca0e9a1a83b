#![forbid(unsafe_code)]

//! Shared primitives for the glasspane floating-panel system.
//!
//! # Role in glasspane
//! `glasspane-core` is the vocabulary layer. It owns the geometric types panel
//! placement is expressed in, the unit-flexible values hosts hand us, and the
//! canonical input event types the hosting event loop speaks.
//!
//! # Primary responsibilities
//! - **Geometry**: absolute pixel points, extents, and size bounds with the
//!   clamping helpers panel placement is built on.
//! - **Units**: magnitudes tagged as pixels or viewport-relative percentages,
//!   with a single pure resolution function to absolute pixels.
//! - **Events**: normalized key and pointer event types delivered by the host.
//! - **Sequences**: detection of fixed key sequences in the press stream.
//!
//! # How it fits in the system
//! `glasspane-window` consumes these types to run the panel geometry state
//! machine; the hosting application translates its native input into the
//! event types defined here.

pub mod event;
pub mod geometry;
pub mod sequence;
pub mod unit;
