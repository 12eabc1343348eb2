use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use skillstar_core::Rgba;
use skillstar_io::ChartDocument;

#[derive(Parser, Debug)]
#[command(about = "Render a skill star chart to PNG", version)]
pub struct Args {
    /// Chart document (JSON with `skills`, `person`, optional `render`)
    pub document: Option<PathBuf>,

    /// Render the built-in five-skill demo chart instead of a document
    #[arg(long, conflicts_with = "document")]
    pub demo: bool,

    /// Where to write the PNG
    #[arg(short, long, default_value = "image.png")]
    pub output: PathBuf,

    /// Also write the chart geometry and composite passes as JSON
    #[arg(long)]
    pub dump_scene: Option<PathBuf>,

    /// Override the highlight color (#RRGGBB or #RRGGBBAA)
    #[arg(long)]
    pub person_color: Option<Rgba>,

    /// Override the outer ring radius in pixels
    #[arg(long)]
    pub radius: Option<u32>,
}

impl Args {
    /// Loads the chart named on the command line and applies overrides.
    pub fn chart(&self) -> Result<ChartDocument> {
        let mut doc = match (&self.document, self.demo) {
            (Some(path), _) => ChartDocument::load(path)?,
            (None, true) => ChartDocument::demo(),
            (None, false) => bail!("no chart document given (pass a JSON file or --demo)"),
        };
        if let Some(color) = self.person_color {
            doc.render = doc.render.with_person_color(color);
        }
        if let Some(radius) = self.radius {
            doc.render = doc.render.with_radius(radius);
        }
        doc.validate()?;
        Ok(doc)
    }
}
