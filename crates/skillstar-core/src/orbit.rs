//! Concentric rings ("orbits") and spokes of a skill star.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::{ConfigError, RenderConfig, SkillSetConfig};
use crate::geometry::{Point, Polygon, Segment};
use crate::layout::{circle_points, linspace};

/// One closed polygon per depth level, ring 0 collapsed onto the center.
///
/// Every ring holds `skill_count + 1` vertices; the last repeats the first.
/// Only [`OrbitGrid::build`] creates one, so `rings.len() == depth + 1` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitGrid {
    center: Point,
    radius: f64,
    skill_count: usize,
    depth: usize,
    rings: Vec<Polygon>,
}

impl OrbitGrid {
    pub fn build(
        skill_count: usize,
        depth: usize,
        radius: f64,
        center: Point,
    ) -> Result<Self, ConfigError> {
        if skill_count == 0 {
            return Err(ConfigError::NoSkills);
        }
        if depth == 0 {
            return Err(ConfigError::InvalidDepth(0));
        }

        let rings: Vec<Polygon> = linspace(0.0, radius, depth + 1)
            .into_iter()
            .map(|ring_radius| Polygon::new(circle_points(ring_radius, skill_count + 1, center)))
            .collect();

        log::debug!(
            "Built orbit grid: {} rings x {} vertices, outer radius {}",
            rings.len(),
            skill_count + 1,
            radius
        );

        Ok(Self {
            center,
            radius,
            skill_count,
            depth,
            rings,
        })
    }

    /// Builds the grid for a skill set drawn on the given canvas.
    pub fn for_chart(skills: &SkillSetConfig, render: &RenderConfig) -> Result<Self, ConfigError> {
        skills.validate()?;
        Self::build(
            skills.skill_count(),
            skills.depth as usize,
            render.radius as f64,
            render.center(),
        )
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn skill_count(&self) -> usize {
        self.skill_count
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn ring(&self, level: usize) -> Option<&Polygon> {
        self.rings.get(level)
    }

    pub fn rings(&self) -> &[Polygon] {
        &self.rings
    }

    pub fn outer_ring(&self) -> &Polygon {
        &self.rings[self.depth]
    }

    /// Distance of ring `level` from the center, `None` past the outer ring.
    pub fn ring_radius(&self, level: usize) -> Option<f64> {
        match level.cmp(&self.depth) {
            Ordering::Less => Some(level as f64 * self.radius / self.depth as f64),
            Ordering::Equal => Some(self.radius),
            Ordering::Greater => None,
        }
    }

    /// Rings in stroke order: outermost first, ring 0 skipped.
    pub fn drawable_rings(&self) -> impl Iterator<Item = (usize, &Polygon)> {
        self.rings.iter().enumerate().skip(1).rev()
    }

    /// Vertex `index` on ring `level`.
    pub fn vertex(&self, level: usize, index: usize) -> Option<Point> {
        self.rings.get(level)?.vertices.get(index).copied()
    }

    /// One segment per skill from the center to that skill's outer vertex.
    pub fn spokes(&self) -> Vec<Segment> {
        self.outer_ring()
            .vertices
            .iter()
            .take(self.skill_count)
            .map(|v| Segment::new(self.center, *v))
            .collect()
    }
}
