//! glb-enclosure - add enclosure walls around a building GLB

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use glb_enclosure::{EnclosureConfig, Overrides, config, pipeline};

#[derive(Parser)]
#[command(name = "glb-enclosure")]
#[command(about = "Add textured enclosure walls around a building GLB")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a building, add four walls and export a GLB
    Build {
        /// Optional TOML config (walls.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input building (GLB/glTF)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output GLB (default: <input>_with_wall.glb)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Brick texture (PNG/JPEG)
        #[arg(short, long)]
        texture: Option<PathBuf>,

        /// Wall height in metres
        #[arg(long)]
        height: Option<f32>,

        /// Wall thickness in metres
        #[arg(long)]
        thickness: Option<f32>,

        /// Gap between building and walls in metres
        #[arg(long)]
        margin: Option<f32>,

        /// Metres of wall covered by one texture repeat
        #[arg(long)]
        tile_size: Option<f32>,
    },

    /// Print the building dimensions without writing anything
    Bounds {
        /// Input building (GLB/glTF)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Build {
            config: config_path,
            input,
            output,
            texture,
            height,
            thickness,
            margin,
            tile_size,
        } => {
            let mut config = match &config_path {
                Some(path) => config::load_config(path)?,
                None => EnclosureConfig::default(),
            };
            config.apply_overrides(Overrides {
                input,
                output,
                texture,
                height,
                thickness,
                margin,
                tile_size,
            });

            tracing::info!("Adding enclosure walls");
            let report = pipeline::run(&config)?;
            tracing::debug!(
                "Report: {} walls, textured={}, {} bytes",
                report.walls.len(),
                report.textured,
                report.bytes_written
            );
        }

        Commands::Bounds { input } => {
            pipeline::inspect_bounds(&input)?;
        }
    }

    Ok(())
}
