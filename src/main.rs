mod error;
mod pixel_buffer;
mod raytracer;

use anyhow::Context;
use clap::Parser;
use raytracer::config::{SceneContext, SceneReader, DEFAULT_MAX_OBJECTS};
use raytracer::{load_scene_file, RayTracer, RenderConfig};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "raycast")]
#[command(version = "0.1.0")]
#[command(about = "Renders the spheres and planes of a scene file, one ray per pixel")]
struct Cli {
    /// Scene description to render, or `-` to read it from stdin
    scene: PathBuf,

    /// Output image; `.ppm` is written as binary P6, other extensions use the matching encoder
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Maximum number of spheres and planes accepted from the scene
    #[arg(long, default_value_t = DEFAULT_MAX_OBJECTS)]
    max_objects: usize,

    /// Colour of pixels that hit nothing, as `R,G,B`
    #[arg(long, value_parser = parse_rgb, value_name = "R,G,B")]
    background: Option<[u8; 3]>,

    /// Horizontal and vertical offset of the eye from the origin
    #[arg(long, num_args = 2, value_names = ["CX", "CY"], allow_negative_numbers = true)]
    eye: Option<Vec<f64>>,

    /// Render on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Print the parsed scene in canonical form and exit without rendering
    #[arg(long)]
    dump_scene: bool,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        let mut config = RenderConfig::new()
            .size(
                self.width.unwrap_or(defaults.width),
                self.height.unwrap_or(defaults.height),
            )
            .max_objects(self.max_objects)
            .parallel(!self.sequential);
        if let Some(color) = self.background {
            config = config.background(color);
        }
        if let Some(&[cx, cy]) = self.eye.as_deref() {
            config = config.eye(cx, cy);
        }
        config
    }
}

fn parse_rgb(value: &str) -> Result<[u8; 3], String> {
    let channels = value
        .split(',')
        .map(|channel| channel.trim().parse::<u8>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<u8>, String>>()?;
    <[u8; 3]>::try_from(channels).map_err(|_| "expected three channels, e.g. 255,255,255".to_string())
}

/// Log records go to stdout so that stderr carries only the failure line.
fn logger(env: env_logger::Env<'_>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env.default_filter_or("warn"));
    builder.target(env_logger::Target::Stdout);
    builder
}

fn main() -> ExitCode {
    logger(env_logger::Env::default()).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.render_config();
    let scene = read_scene(cli, config.max_objects)?;
    scene.log_summary();

    if cli.dump_scene {
        print!("{scene}");
        return Ok(());
    }

    let ray_tracer = RayTracer::new(scene, config).context("invalid render settings")?;
    let image = ray_tracer.render();
    image.save(&cli.output)?;
    Ok(())
}

fn read_scene(cli: &Cli, capacity: usize) -> anyhow::Result<SceneContext> {
    if cli.scene.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read scene from stdin")?;
        return Ok(SceneReader::new(&input).with_capacity(capacity).read()?);
    }
    Ok(load_scene_file(&cli.scene, capacity)?)
}
