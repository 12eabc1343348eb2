use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgba;
use crate::geometry::Point;

// ── Errors ────────────────────────────────────────────────────────────

/// Rejected chart input. Nothing is drawn when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Skill set is empty: at least one skill is required")]
    NoSkills,

    #[error("Depth must be at least 1, got {0}")]
    InvalidDepth(i32),

    #[error("Canvas size must be positive, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Radius must be positive, got {0}")]
    InvalidRadius(u32),

    #[error("Person '{person}' has {values} skill values for {skills} skills")]
    LengthMismatch {
        person: String,
        skills: usize,
        values: usize,
    },

    #[error(
        "Orbit grid has {grid_skills} skills at depth {grid_depth}, \
         skill set has {skills} skills at depth {depth}"
    )]
    GridMismatch {
        grid_skills: usize,
        grid_depth: usize,
        skills: usize,
        depth: i32,
    },

    #[error("Value {value} for skill '{skill}' is outside [0, {depth}]")]
    ValueOutOfRange {
        skill: String,
        value: i32,
        depth: i32,
    },
}

// ── Inputs ────────────────────────────────────────────────────────────

/// The chart's axes: skill names in angular order and the maximum skill value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSetConfig {
    pub skills: Vec<String>,
    pub depth: i32,
}

impl SkillSetConfig {
    pub fn new<S: Into<String>>(skills: impl IntoIterator<Item = S>, depth: i32) -> Self {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            depth,
        }
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.skills.is_empty() {
            return Err(ConfigError::NoSkills);
        }
        if self.depth < 1 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }
}

/// A person's scores, one per skill in the skill set's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub skill_values: Vec<i32>,
}

impl Person {
    pub fn new(name: &str, skill_values: Vec<i32>) -> Self {
        Self {
            name: name.to_string(),
            skill_values,
        }
    }

    /// Checks the values against `skills`; assumes `skills` itself is valid.
    pub fn validate_against(&self, skills: &SkillSetConfig) -> Result<(), ConfigError> {
        if self.skill_values.len() != skills.skill_count() {
            return Err(ConfigError::LengthMismatch {
                person: self.name.clone(),
                skills: skills.skill_count(),
                values: self.skill_values.len(),
            });
        }
        for (skill, &value) in skills.skills.iter().zip(&self.skill_values) {
            if !(0..=skills.depth).contains(&value) {
                return Err(ConfigError::ValueOutOfRange {
                    skill: skill.clone(),
                    value,
                    depth: skills.depth,
                });
            }
        }
        Ok(())
    }
}

/// Output raster settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Whether a caller-side layer should print the person's name. Not drawn by the renderer.
    pub need_name: bool,
    pub background_color: Rgba,
    pub text_color: Rgba,
    pub person_color: Rgba,
    pub stroke_color: Rgba,
    /// Outer ring radius in pixels.
    pub radius: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            need_name: false,
            background_color: Rgba::WHITE,
            text_color: Rgba::BLACK,
            person_color: Rgba::PINK,
            stroke_color: Rgba::BLACK,
            radius: 250,
        }
    }
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, radius: u32) -> Self {
        Self {
            width,
            height,
            radius,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_person_color(mut self, color: Rgba) -> Self {
        self.person_color = color;
        self
    }

    pub fn with_stroke_color(mut self, color: Rgba) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Whether the outer ring fits inside the canvas.
    pub fn radius_fits(&self) -> bool {
        self.radius <= self.width.min(self.height) / 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.radius == 0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.radius_fits() {
            log::warn!(
                "Radius {} exceeds half the canvas ({}x{}); the chart will be clipped",
                self.radius,
                self.width,
                self.height
            );
        }
        Ok(())
    }
}

/// Validates all three inputs, canvas first, then skills, then the person.
pub fn validate(
    skills: &SkillSetConfig,
    render: &RenderConfig,
    person: &Person,
) -> Result<(), ConfigError> {
    render.validate()?;
    skills.validate()?;
    person.validate_against(skills)
}
