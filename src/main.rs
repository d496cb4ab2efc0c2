mod algebra;
mod camera;
mod light;
mod material;
mod optics;
mod ray;
mod scene;
mod sphere;
mod tonemap;
mod tracer;

use std::fs;
use std::path::Path;

use clap::{Parser, ValueEnum};
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use rand::Rng;
use rayon::prelude::*;

use crate::camera::Camera;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "spheretracer")]
#[command(about = "A recursive sphere ray tracer")]
struct Args {
    /// Scene description file (JSON); renders the built-in scene if omitted
    #[arg(short, long)]
    scene: Option<String>,

    /// Output image path; a name under renders/ is generated if omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Suppress the progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn render_image_name(w: u32, h: u32) -> String {
    let suf: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("renders/render_{w}x{h}_{suf}.png")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let loaded = match &args.scene {
        Some(path) => scene::load(path)?,
        None => {
            info!("no scene file given, rendering the built-in scene");
            scene::default_scene()
        }
    };

    let width = loaded.render.width;
    let height = loaded.render.height;
    let world = loaded.scene;
    let camera = Camera::new(&loaded.camera, width, height);

    info!(
        "rendering {}x{}: {} spheres, {} lights",
        width,
        height,
        world.spheres.len(),
        world.lights.len()
    );

    let bar = if !args.quiet {
        let pb = ProgressBar::new(height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")?,
        );
        Some(pb)
    } else {
        None
    };

    // ── row-parallel render loop ──────────────────────────────────────────
    let rows: Vec<_> = (0..height)
        .into_par_iter()
        .flat_map(|y| {
            let mut row = Vec::with_capacity(width as usize);
            for x in 0..width {
                let ray = camera.primary_ray(x, y);
                let color = tracer::trace(ray, &world, 0);
                row.push(((x, y), tonemap::to_srgb(color)));
            }
            if let Some(b) = &bar {
                b.inc(1);
            }
            row
        })
        .collect();

    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }

    let mut img = RgbImage::new(width, height);
    for ((x, y), rgb) in rows {
        img.put_pixel(x, y, Rgb(rgb));
    }

    let name = args.output.unwrap_or_else(|| render_image_name(width, height));
    if let Some(dir) = Path::new(&name).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    img.save(&name)?;

    info!("saved → {name}");
    Ok(())
}
