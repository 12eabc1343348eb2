mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use skillstar_renderer::{describe_scene, render_skill_star};

use crate::cli::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let doc = args.chart()?;

    let image = render_skill_star(&doc.skills, &doc.render, &doc.person)
        .context("rendering skill star")?;
    skillstar_io::write_png(&image, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(path) = &args.dump_scene {
        let scene = describe_scene(&doc.skills, &doc.render, &doc.person)?;
        std::fs::write(path, scene.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote scene description to {}", path.display());
    }

    Ok(())
}
