//! # SkillStar Core
//!
//! Input model and validation for skill star (radar) charts, plus the
//! geometry they are drawn from: evenly spaced samples, radial point layout,
//! the orbit grid of concentric rings, and the person's highlight polygon.
//!
//! Everything here is a pure function of its inputs; drawing lives in
//! `skillstar-renderer`.

pub mod color;
pub mod config;
pub mod geometry;
pub mod highlight;
pub mod layout;
pub mod orbit;

pub use color::{Hsl, ParseColorError, Rgba};
pub use config::{validate, ConfigError, Person, RenderConfig, SkillSetConfig};
pub use geometry::{BBox, Point, Polygon, Segment};
pub use highlight::resolve_highlight;
pub use layout::{circle_points, linspace};
pub use orbit::OrbitGrid;
