//! Deterministic Koch curve and snowflake geometry.
//!
//! The generator is a pure function of its input spec: for a fixed
//! [`CurveSpec`] or [`SnowflakeSpec`] it always produces the same ordered
//! segment list. Rendering, input handling, and persistence live in the GUI
//! crate; nothing here touches I/O.

pub mod curve;
pub mod error;
pub mod geometry;
pub mod snowflake;

pub use curve::{generate, CurveSpec, MAX_DEPTH};
pub use error::ConfigError;
pub use geometry::{Point2D, Rgb, Segment};
pub use snowflake::{Snowflake, SnowflakeSpec, MIN_FACES};
