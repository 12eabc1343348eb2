//! # SkillStar I/O
//!
//! JSON chart documents bundling a skill set, a person, and render settings,
//! and PNG export of rendered rasters. Rendering itself never touches the
//! filesystem; persisting its output is done here.

pub mod document;
pub mod png;

pub use document::{ChartDocument, DocumentError};
pub use png::{encode_png, write_png, write_png_to, ExportError};
