use serde::Serialize;

use skillstar_core::{BBox, Person, Point, Polygon, RenderConfig, Rgba, Segment, SkillSetConfig};

use crate::canvas::RenderError;
use crate::compositor::{highlight_passes, CompositePass};
use crate::scene::{ChartGeometry, GRID_LINE_WIDTH};

/// One ring of the grid as it is stroked.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRing {
    pub level: usize,
    pub radius: f64,
    /// Closed vertex list; the last vertex repeats the first.
    pub vertices: Vec<Point>,
}

/// A labelled spoke.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSpoke {
    pub skill: String,
    pub segment: Segment,
}

/// Everything the raster renderer draws, in draw order, as plain data.
#[derive(Debug, Clone, Serialize)]
pub struct SceneDescription {
    pub width: u32,
    pub height: u32,
    pub center: Point,
    pub person: String,
    pub background: Rgba,
    pub grid_color: Rgba,
    pub grid_line_width: f32,
    /// Outermost first.
    pub rings: Vec<RenderRing>,
    pub spokes: Vec<RenderSpoke>,
    pub highlight: Polygon,
    pub highlight_bbox: Option<BBox>,
    pub passes: Vec<CompositePass>,
}

impl SceneDescription {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the scene description from the same validated geometry as [`crate::render_skill_star`].
pub fn describe_scene(
    skills: &SkillSetConfig,
    render: &RenderConfig,
    person: &Person,
) -> Result<SceneDescription, RenderError> {
    let ChartGeometry { grid, highlight } = ChartGeometry::build(skills, render, person)?;

    let rings = grid
        .drawable_rings()
        .filter_map(|(level, ring)| {
            Some(RenderRing {
                level,
                radius: grid.ring_radius(level)?,
                vertices: ring.vertices.clone(),
            })
        })
        .collect();

    let spokes = skills
        .skills
        .iter()
        .zip(grid.spokes())
        .map(|(skill, segment)| RenderSpoke {
            skill: skill.clone(),
            segment,
        })
        .collect();

    Ok(SceneDescription {
        width: render.width,
        height: render.height,
        center: grid.center(),
        person: person.name.clone(),
        background: render.background_color,
        grid_color: render.stroke_color,
        grid_line_width: GRID_LINE_WIDTH,
        rings,
        spokes,
        highlight_bbox: highlight.bbox(),
        highlight,
        passes: highlight_passes(render.person_color).to_vec(),
    })
}
