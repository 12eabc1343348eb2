//! Layered alpha compositing of the highlight polygon.
//!
//! Each pass paints the polygon into its own transparent layer and then draws
//! that layer over the accumulated image through a uniform mask of
//! `255 - transparency`. Two passes at different transparencies give the
//! highlight a solid core with a softer tint on top.

use serde::Serialize;
use tiny_skia::{Mask, Pixmap, PixmapPaint, Transform};

use skillstar_core::{Polygon, Rgba};

use crate::canvas::{Canvas, PaintMode, PathStyle, RenderError};

/// Lightness added to the person color for highlight fills.
pub const HIGHLIGHT_LIGHTEN: f64 = 0.02;

/// One masked composite step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositePass {
    pub name: &'static str,
    pub fill: Rgba,
    pub stroke: Rgba,
    /// 0 keeps the layer fully opaque, 255 makes it invisible.
    pub transparency: u8,
    pub line_width: f32,
    pub mode: PaintMode,
}

impl CompositePass {
    /// Solid core: lightened fill, person-colored outline, nearly opaque.
    pub fn shape(person_color: Rgba) -> Self {
        Self {
            name: "shape",
            fill: person_color.lighten(HIGHLIGHT_LIGHTEN),
            stroke: person_color,
            transparency: 10,
            line_width: 4.0,
            mode: PaintMode::FillAndStroke,
        }
    }

    /// Soft tint laid over the core.
    pub fn glow(person_color: Rgba) -> Self {
        let light = person_color.lighten(HIGHLIGHT_LIGHTEN);
        Self {
            name: "glow",
            fill: light,
            stroke: light,
            transparency: 120,
            line_width: 1.0,
            mode: PaintMode::FillAndStroke,
        }
    }

    /// Coverage applied to every pixel of the layer.
    pub fn mask_alpha(&self) -> u8 {
        255 - self.transparency
    }

    pub fn style(&self) -> PathStyle {
        match self.mode {
            PaintMode::FillAndStroke => {
                PathStyle::fill_and_stroke(self.fill, self.stroke, self.line_width)
            }
            PaintMode::StrokeOnly => PathStyle::stroke(self.stroke, self.line_width),
        }
    }
}

/// The highlight passes in draw order.
pub fn highlight_passes(person_color: Rgba) -> [CompositePass; 2] {
    [CompositePass::shape(person_color), CompositePass::glow(person_color)]
}

/// A mask covering the whole canvas with the same alpha everywhere.
pub fn uniform_mask(width: u32, height: u32, alpha: u8) -> Result<Mask, RenderError> {
    let mut mask = Mask::new(width, height).ok_or(RenderError::Allocation { width, height })?;
    mask.data_mut().fill(alpha);
    Ok(mask)
}

/// Paints `polygon` into a fresh layer and draws it over a copy of `accumulated`.
///
/// Pixels the layer leaves transparent come back unchanged.
pub fn masked_composite(
    accumulated: &Pixmap,
    polygon: &Polygon,
    pass: &CompositePass,
) -> Result<Pixmap, RenderError> {
    let (width, height) = (accumulated.width(), accumulated.height());

    let mut layer = Canvas::transparent(width, height)?;
    layer.draw_polygon(polygon, &pass.style());

    let mask = uniform_mask(width, height, pass.mask_alpha())?;

    let mut output = accumulated.clone();
    output.draw_pixmap(
        0,
        0,
        layer.pixmap().as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        Some(&mask),
    );

    log::debug!(
        "Composited '{}' pass: fill {}, stroke {}, mask alpha {}",
        pass.name,
        pass.fill,
        pass.stroke,
        pass.mask_alpha()
    );
    Ok(output)
}

/// Runs every highlight pass in order, each over the previous result.
pub fn composite_highlight(
    base: Pixmap,
    polygon: &Polygon,
    person_color: Rgba,
) -> Result<Pixmap, RenderError> {
    highlight_passes(person_color)
        .iter()
        .try_fold(base, |acc, pass| masked_composite(&acc, polygon, pass))
}
