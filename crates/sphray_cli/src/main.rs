use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sphray_core::{load_scene, load_scene_text, SceneDescription};
use sphray_renderer::{
    render, save_png, to_symbol_grid, write_ppm, write_ppm_binary, Camera, PixelGrid,
    RenderConfig, SphereList,
};

mod cli;
mod logger;

use cli::{Args, Format, Preset, SceneFormat};
use logger::init_logger;

fn load_description(args: &Args) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => {
            let scene = match args.scene_format() {
                SceneFormat::Json => load_scene(path),
                SceneFormat::Text => load_scene_text(path),
            };
            scene.with_context(|| format!("Failed to load scene {}", path.display()))
        }
        None => Ok(match args.preset {
            Preset::Demo => SceneDescription::demo(),
            Preset::Axes => SceneDescription::axes(),
        }),
    }
}

fn open_output(args: &Args) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(writer)
}

fn write_output(args: &Args, grid: &PixelGrid) -> Result<()> {
    match args.output_format() {
        Format::Symbols => {
            let mut out = open_output(args)?;
            out.write_all(to_symbol_grid(grid, args.threshold).as_bytes())?;
            out.flush()?;
        }
        Format::Ppm => {
            let mut out = open_output(args)?;
            write_ppm(grid, &mut out, args.ppm_max)?;
        }
        Format::PpmBinary => {
            let mut out = open_output(args)?;
            write_ppm_binary(grid, &mut out, args.ppm_max)?;
        }
        Format::Png => {
            let Some(path) = &args.output else {
                bail!("PNG output requires --output");
            };
            save_png(grid, path)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    log::info!("Starting SPHRAY");

    let description = load_description(&args)?;
    let camera = Camera::from_description(&description.camera).context("Invalid camera")?;
    let scene = SphereList::from_description(&description).context("Invalid scene")?;

    let (viewport_width, viewport_height) = args.viewport();
    let config = RenderConfig::new(args.width, args.height)
        .with_viewport(viewport_width, viewport_height)
        .with_tangent_tolerance(args.tangent_tolerance);

    let start = Instant::now();
    let grid = render(&camera, &scene, &config).context("Render failed")?;
    log::info!("Rendered in {:?}", start.elapsed());

    write_output(&args, &grid)?;

    if let Some(path) = &args.output {
        log::info!("Saved to {}", path.display());
    }

    Ok(())
}
