//! # lexivid-core
//!
//! Core types and primitives for the lexivid composition generator.
//! This crate contains foundational types shared across all lexivid crates:
//! durations and timestamps, colors, 2D transforms, easing, configuration,
//! and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod hash;
pub mod math;
pub mod time;
pub mod types;

pub use color::Color;
pub use config::GeneratorConfig;
pub use error::{LexividError, LexividResult};
pub use hash::ContentHash;
pub use math::{Point2D, Size2D, Transform2D};
pub use time::{Duration, Timestamp};
pub use types::{Easing, LayerKind};
