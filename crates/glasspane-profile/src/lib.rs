#![forbid(unsafe_code)]

//! Profile data for the glasspane panel system.
//!
//! # Role in glasspane
//! `glasspane-profile` is the plain-data side of the profile view: the
//! shapes the hosting fetch layer decodes provider payloads into, the stats
//! derived from them, a freshness cache so hosts can avoid refetching, and
//! the theme flag the renderer consumes. Network I/O stays with the host —
//! this crate only decodes and derives.
//!
//! # Primary responsibilities
//! - **Model**: profile and repository records matching the provider's JSON
//!   field names, with an offline fallback fixture.
//! - **Stats**: star/fork/language aggregation over a repository list.
//! - **Cache**: a TTL'd single-slot cache keyed by caller-supplied instants.
//! - **Theme**: the light/dark flag derived from the host's preference.

pub mod cache;
pub mod error;
pub mod model;
pub mod stats;
pub mod theme;

pub use cache::TtlCache;
pub use error::{ProfileError, Result};
pub use model::{Profile, Repository};
pub use stats::ProfileStats;
pub use theme::Theme;
