use tiny_skia::Pixmap;

use skillstar_core::{
    resolve_highlight, validate, OrbitGrid, Person, Polygon, RenderConfig, SkillSetConfig,
};

use crate::canvas::{Canvas, PathStyle, RenderError};
use crate::compositor::composite_highlight;

/// Line width of rings and spokes.
pub const GRID_LINE_WIDTH: f32 = 2.0;

/// Validated geometry for one chart, shared by the raster and description paths.
pub(crate) struct ChartGeometry {
    pub grid: OrbitGrid,
    pub highlight: Polygon,
}

impl ChartGeometry {
    pub fn build(
        skills: &SkillSetConfig,
        render: &RenderConfig,
        person: &Person,
    ) -> Result<Self, RenderError> {
        validate(skills, render, person)?;
        let grid = OrbitGrid::for_chart(skills, render)?;
        let highlight = resolve_highlight(&grid, skills, person)?;
        Ok(Self { grid, highlight })
    }
}

/// Renders a skill star for `person`.
///
/// Draw order: background, rings from outermost to innermost, spokes, then the
/// two highlight passes. Inputs are validated before anything is allocated.
pub fn render_skill_star(
    skills: &SkillSetConfig,
    render: &RenderConfig,
    person: &Person,
) -> Result<Pixmap, RenderError> {
    let geometry = ChartGeometry::build(skills, render, person)?;

    let mut canvas = Canvas::filled(render.width, render.height, render.background_color)?;
    draw_grid(&mut canvas, &geometry.grid, render);

    if geometry.highlight.area() < f64::EPSILON {
        log::debug!("Highlight for '{}' has no area", person.name);
    }

    let output = composite_highlight(
        canvas.into_pixmap(),
        &geometry.highlight,
        render.person_color,
    )?;

    log::info!(
        "Rendered skill star for '{}': {} skills, depth {}, {}x{}",
        person.name,
        skills.skill_count(),
        skills.depth,
        render.width,
        render.height
    );
    Ok(output)
}

fn draw_grid(canvas: &mut Canvas, grid: &OrbitGrid, render: &RenderConfig) {
    let ring_style = PathStyle::stroke(render.stroke_color, GRID_LINE_WIDTH);
    for (_, ring) in grid.drawable_rings() {
        canvas.draw_polygon(ring, &ring_style);
    }
    for spoke in grid.spokes() {
        canvas.draw_segment(&spoke, render.stroke_color, GRID_LINE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::pixel_at;
    use crate::compositor::HIGHLIGHT_LIGHTEN;
    use skillstar_core::{ConfigError, Rgba};

    fn four_skills() -> SkillSetConfig {
        SkillSetConfig::new(["N", "E", "S", "W"], 2)
    }

    fn close(a: u8, b: u8, tolerance: u8) -> bool {
        a.abs_diff(b) <= tolerance
    }

    #[test]
    fn test_output_size_and_background() {
        let render = RenderConfig::new(320, 200, 80).with_background(Rgba::rgb(10, 20, 30));
        let skills = SkillSetConfig::new(["A", "B", "C"], 2);
        let person = Person::new("Beaver", vec![1, 1, 2]);
        let image = render_skill_star(&skills, &render, &person).unwrap();
        assert_eq!((image.width(), image.height()), (320, 200));
        assert_eq!(pixel_at(&image, 0, 0), Some(Rgba::rgb(10, 20, 30)));
        assert_eq!(pixel_at(&image, 319, 199), Some(Rgba::rgb(10, 20, 30)));
    }

    #[test]
    fn test_highlight_interior_takes_person_tint() {
        let render = RenderConfig::default();
        let person = Person::new("Full", vec![2, 2, 2, 2]);
        let image = render_skill_star(&four_skills(), &render, &person).unwrap();

        // Inside the outer diamond, clear of the inner ring and both spokes.
        let target = render.person_color.lighten(HIGHLIGHT_LIGHTEN);
        let px = pixel_at(&image, 400, 340).unwrap();
        assert!(close(px.r, target.r, 5), "{px:?} vs {target:?}");
        assert!(close(px.g, target.g, 5), "{px:?} vs {target:?}");
        assert!(close(px.b, target.b, 5), "{px:?} vs {target:?}");
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_grid_visible_outside_highlight() {
        let render = RenderConfig::default();
        let person = Person::new("Inner", vec![1, 1, 1, 1]);
        let image = render_skill_star(&four_skills(), &render, &person).unwrap();

        // On the outer ring's lower-right edge (x + y = 850), outside the highlight.
        let ring = pixel_at(&image, 424, 425).unwrap();
        assert!(ring.r < 64, "{ring:?}");
        // Between the rings and away from spokes: untouched background.
        assert_eq!(pixel_at(&image, 400, 360), Some(Rgba::WHITE));
    }

    #[test]
    fn test_render_is_deterministic() {
        let skills = SkillSetConfig::new(["Strength", "Speed", "Health", "Regeneration", "Hydration"], 5);
        let person = Person::new("Vladimir", vec![3, 2, 1, 4, 3]);
        let render = RenderConfig::default();
        let first = render_skill_star(&skills, &render, &person).unwrap();
        let second = render_skill_star(&skills, &render, &person).unwrap();
        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_invalid_input_produces_no_raster() {
        let render = RenderConfig::default();
        let flat = SkillSetConfig::new(["A", "B"], 0);
        assert_eq!(
            render_skill_star(&flat, &render, &Person::new("P", vec![0, 0])).err(),
            Some(RenderError::Config(ConfigError::InvalidDepth(0)))
        );

        let skills = SkillSetConfig::new(["A", "B", "C"], 2);
        assert!(matches!(
            render_skill_star(&skills, &render, &Person::new("P", vec![1, 1])),
            Err(RenderError::Config(ConfigError::LengthMismatch { .. }))
        ));
        assert!(matches!(
            render_skill_star(&skills, &RenderConfig::new(600, 0, 100), &Person::new("P", vec![1, 1, 1])),
            Err(RenderError::Config(ConfigError::InvalidCanvas { .. }))
        ));
    }

    #[test]
    fn test_single_skill_renders() {
        let skills = SkillSetConfig::new(["Solo"], 3);
        let person = Person::new("One", vec![2]);
        let image = render_skill_star(&skills, &RenderConfig::default(), &person).unwrap();
        assert_eq!(image.width(), 600);
        assert_eq!(pixel_at(&image, 0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_all_zero_values_render() {
        let person = Person::new("Nobody", vec![0, 0, 0, 0]);
        let image = render_skill_star(&four_skills(), &RenderConfig::default(), &person).unwrap();
        assert_eq!(pixel_at(&image, 400, 340), Some(Rgba::WHITE));
    }
}
