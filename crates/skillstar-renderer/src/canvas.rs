use serde::Serialize;
use thiserror::Error;
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use skillstar_core::{ConfigError, Point, Polygon, Rgba, Segment};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid chart configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot allocate a {width}x{height} raster")]
    Allocation { width: u32, height: u32 },
}

// ── Canvas ────────────────────────────────────────────────────────────

/// How a polygon is painted onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintMode {
    StrokeOnly,
    FillAndStroke,
}

/// Stroke/fill colors and line width for one drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub stroke: Rgba,
    pub fill: Rgba,
    pub line_width: f32,
    pub mode: PaintMode,
}

impl PathStyle {
    pub fn stroke(color: Rgba, line_width: f32) -> Self {
        Self {
            stroke: color,
            fill: color,
            line_width,
            mode: PaintMode::StrokeOnly,
        }
    }

    pub fn fill_and_stroke(fill: Rgba, stroke: Rgba, line_width: f32) -> Self {
        Self {
            stroke,
            fill,
            line_width,
            mode: PaintMode::FillAndStroke,
        }
    }
}

/// An owned RGBA8 raster with the path operations the chart needs.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// A fresh, fully transparent canvas.
    pub fn transparent(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
        Ok(Self { pixmap })
    }

    /// A canvas filled edge to edge with `background`.
    pub fn filled(width: u32, height: u32, background: Rgba) -> Result<Self, RenderError> {
        let mut canvas = Self::transparent(width, height)?;
        canvas.pixmap.fill(to_color(background));
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Draws `polygon` as a closed path: move to the first vertex, line through the rest, close.
    pub fn draw_polygon(&mut self, polygon: &Polygon, style: &PathStyle) {
        let Some(path) = polygon_path(&polygon.vertices) else {
            log::debug!("Skipping polygon with {} vertices: empty path", polygon.vertex_count());
            return;
        };
        if style.mode == PaintMode::FillAndStroke {
            self.pixmap.fill_path(
                &path,
                &paint(style.fill),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        self.stroke_path(&path, style.stroke, style.line_width);
    }

    pub fn draw_segment(&mut self, segment: &Segment, color: Rgba, line_width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(segment.start.x as f32, segment.start.y as f32);
        pb.line_to(segment.end.x as f32, segment.end.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color, line_width);
        }
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, line_width: f32) {
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// The demultiplied color at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        pixel_at(&self.pixmap, x, y)
    }
}

pub fn pixel_at(pixmap: &Pixmap, x: u32, y: u32) -> Option<Rgba> {
    let c = pixmap.pixel(x, y)?.demultiply();
    Some(Rgba::new(c.red(), c.green(), c.blue(), c.alpha()))
}

pub fn to_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_color(color));
    paint.anti_alias = true;
    paint
}

fn polygon_path(vertices: &[Point]) -> Option<Path> {
    let (first, rest) = vertices.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for v in rest {
        pb.line_to(v.x as f32, v.y as f32);
    }
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_canvas() {
        let canvas = Canvas::filled(40, 20, Rgba::rgb(10, 20, 30)).unwrap();
        assert_eq!(canvas.width(), 40);
        assert_eq!(canvas.height(), 20);
        assert_eq!(canvas.pixel(0, 0), Some(Rgba::rgb(10, 20, 30)));
        assert_eq!(canvas.pixel(39, 19), Some(Rgba::rgb(10, 20, 30)));
        assert_eq!(canvas.pixel(40, 0), None);
    }

    #[test]
    fn test_zero_size_canvas_rejected() {
        assert_eq!(
            Canvas::transparent(0, 10).err(),
            Some(RenderError::Allocation { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_fill_and_stroke_square() {
        let mut canvas = Canvas::transparent(50, 50).unwrap();
        let square = Polygon::new(vec![
            Point::new(10.0, 10.0),
            Point::new(40.0, 10.0),
            Point::new(40.0, 40.0),
            Point::new(10.0, 40.0),
        ]);
        let style = PathStyle::fill_and_stroke(Rgba::rgb(255, 0, 0), Rgba::rgb(0, 0, 255), 2.0);
        canvas.draw_polygon(&square, &style);

        assert_eq!(canvas.pixel(25, 25), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(canvas.pixel(2, 2).map(|c| c.a), Some(0));
        let edge = canvas.pixel(25, 10).unwrap();
        assert!(edge.b > 128 && edge.r < 128);
    }

    #[test]
    fn test_stroke_only_leaves_interior_empty() {
        let mut canvas = Canvas::transparent(50, 50).unwrap();
        let tri = Polygon::new(vec![
            Point::new(5.0, 5.0),
            Point::new(45.0, 5.0),
            Point::new(25.0, 45.0),
        ]);
        canvas.draw_polygon(&tri, &PathStyle::stroke(Rgba::BLACK, 1.0));
        assert_eq!(canvas.pixel(25, 15).map(|c| c.a), Some(0));
    }

    #[test]
    fn test_degenerate_polygon_does_not_panic() {
        let mut canvas = Canvas::filled(20, 20, Rgba::WHITE).unwrap();
        let dot = Polygon::new(vec![Point::new(10.0, 10.0)]);
        let style = PathStyle::fill_and_stroke(Rgba::BLACK, Rgba::BLACK, 4.0);
        canvas.draw_polygon(&dot, &style);
        canvas.draw_polygon(&Polygon::default(), &style);
        canvas.draw_segment(
            &Segment::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0)),
            Rgba::BLACK,
            2.0,
        );
        assert_eq!(canvas.pixel(0, 0), Some(Rgba::WHITE));
    }
}
