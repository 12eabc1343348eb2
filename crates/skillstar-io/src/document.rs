use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skillstar_core::{validate, ConfigError, Person, RenderConfig, SkillSetConfig};

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed chart document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid chart document: {0}")]
    Invalid(#[from] ConfigError),
}

/// A chart on disk: the skill set, the person, and optional render settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub skills: SkillSetConfig,
    pub person: Person,
    #[serde(default)]
    pub render: RenderConfig,
}

impl ChartDocument {
    pub fn new(skills: SkillSetConfig, person: Person, render: RenderConfig) -> Self {
        Self {
            skills,
            person,
            render,
        }
    }

    /// The five-skill chart used when no document is given.
    pub fn demo() -> Self {
        Self::new(
            SkillSetConfig::new(
                ["Strength", "Speed", "Health", "Regeneration", "Hydration"],
                5,
            ),
            Person::new("Vladimir", vec![3, 2, 1, 4, 3]),
            RenderConfig::default(),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(&self.skills, &self.render, &self.person)
    }

    /// Parses and validates a document.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path)?;
        let doc = Self::from_json(&json)?;
        log::info!(
            "Loaded chart '{}' from {} ({} skills)",
            doc.person.name,
            path.display(),
            doc.skills.skill_count()
        );
        Ok(doc)
    }

    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillstar_core::Rgba;

    #[test]
    fn test_minimal_document_uses_render_defaults() {
        let json = r#"{
            "skills": { "skills": ["Fish", "Human", "Cow"], "depth": 2 },
            "person": { "name": "Beaver", "skill_values": [1, 1, 2] }
        }"#;
        let doc = ChartDocument::from_json(json).unwrap();
        assert_eq!(doc.render, RenderConfig::default());
        assert_eq!(doc.person.skill_values, vec![1, 1, 2]);
    }

    #[test]
    fn test_render_overrides_and_colors() {
        let json = r##"{
            "skills": { "skills": ["A", "B"], "depth": 1 },
            "person": { "name": "P", "skill_values": [1, 0] },
            "render": { "width": 300, "height": 200, "radius": 90,
                        "person_color": { "r": 10, "g": 20, "b": 30 },
                        "stroke_color": "#333333" }
        }"##;
        let doc = ChartDocument::from_json(json).unwrap();
        assert_eq!((doc.render.width, doc.render.height, doc.render.radius), (300, 200, 90));
        assert_eq!(doc.render.person_color, Rgba::rgb(10, 20, 30));
        assert_eq!(doc.render.stroke_color, Rgba::rgb(0x33, 0x33, 0x33));
        assert_eq!(doc.render.background_color, Rgba::WHITE);
    }

    #[test]
    fn test_invalid_documents_rejected() {
        let mismatch = r#"{
            "skills": { "skills": ["A", "B"], "depth": 2 },
            "person": { "name": "P", "skill_values": [1] }
        }"#;
        assert!(matches!(
            ChartDocument::from_json(mismatch),
            Err(DocumentError::Invalid(ConfigError::LengthMismatch { .. }))
        ));
        assert!(matches!(
            ChartDocument::from_json("{ not json"),
            Err(DocumentError::Json(_))
        ));
    }

    #[test]
    fn test_demo_document_is_valid() {
        let doc = ChartDocument::demo();
        doc.validate().unwrap();
        assert_eq!(doc.person.name, "Vladimir");
        assert_eq!(doc.skills.depth, 5);
        assert_eq!(doc.render, RenderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        let doc = ChartDocument::demo();
        doc.save(&path).unwrap();
        assert_eq!(ChartDocument::load(&path).unwrap(), doc);
        assert!(matches!(
            ChartDocument::load(&dir.path().join("missing.json")),
            Err(DocumentError::Io(_))
        ));
    }
}
