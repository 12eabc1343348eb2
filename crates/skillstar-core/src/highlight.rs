use crate::config::{ConfigError, Person, SkillSetConfig};
use crate::geometry::Polygon;
use crate::orbit::OrbitGrid;

/// Maps each of the person's values onto its ring: vertex `i` comes from
/// ring `skill_values[i]` at skill index `i`.
///
/// A value of 0 resolves to the grid center. Values outside `[0, depth]`
/// are rejected, never clamped.
pub fn resolve_highlight(
    grid: &OrbitGrid,
    skills: &SkillSetConfig,
    person: &Person,
) -> Result<Polygon, ConfigError> {
    person.validate_against(skills)?;
    if grid.skill_count() != skills.skill_count() || grid.depth() != skills.depth as usize {
        return Err(ConfigError::GridMismatch {
            grid_skills: grid.skill_count(),
            grid_depth: grid.depth(),
            skills: skills.skill_count(),
            depth: skills.depth,
        });
    }

    let vertices = skills
        .skills
        .iter()
        .zip(&person.skill_values)
        .enumerate()
        .map(|(i, (skill, &value))| {
            grid.vertex(value as usize, i)
                .ok_or_else(|| ConfigError::ValueOutOfRange {
                    skill: skill.clone(),
                    value,
                    depth: skills.depth,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(vertices))
}
