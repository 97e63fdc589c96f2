use anyhow::{Context, Result};
use clap::Parser;
use rm_core::SceneDescription;
use rm_renderer::{render, render_sequential, save_ppm, Camera, Scene};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.debug_level.into())
        .init();

    let mut description = match &args.scene {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the built-in scene");
            SceneDescription::default()
        }
    };
    args.apply_overrides(&mut description);

    let camera = Camera::from_description(&description).context("Invalid camera settings")?;
    let scene = Scene::from_description(&description).context("Invalid scene objects")?;

    let config = args.render_config();
    let image = if args.sequential {
        render_sequential(&camera, &scene, &config)
    } else {
        render(&camera, &scene, &config)
    };

    save_ppm(&args.output, &image, args.channel_policy())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
