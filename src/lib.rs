//! trajectory-rs: deterministic layout engine for life-history trajectory timelines.
//!
//! This crate maps timestamped moves between places onto two spatial
//! encodings: a circular timeline (time as angle, distance as radius) and a
//! linear timeline (time as x, distance as y). Every pass is a pure function
//! of its inputs and produces backend-agnostic scene primitives, so hosts can
//! draw the result on SVG or any 2D vector surface without further geometric
//! computation.

pub mod core;
pub mod error;
pub mod layout;
pub mod telemetry;

pub use error::{TimelineError, TimelineResult};
pub use layout::{CircularLayout, LinearLayout, Scene, TimelineConfig};
