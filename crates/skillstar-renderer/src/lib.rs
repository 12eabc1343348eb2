//! # SkillStar Renderer
//!
//! Rasterizes skill star charts with `tiny-skia`: background, orbit rings,
//! spokes, and the person's highlight polygon blended in two masked passes.
//!
//! The same validated geometry can also be exported as a serializable
//! [`SceneDescription`] for consumers that draw it themselves.

pub mod canvas;
pub mod compositor;
pub mod render_data;
pub mod scene;

pub use canvas::{Canvas, PaintMode, PathStyle, RenderError};
pub use compositor::{composite_highlight, highlight_passes, masked_composite, CompositePass};
pub use render_data::{describe_scene, SceneDescription};
pub use scene::render_skill_star;

pub use tiny_skia::Pixmap;
