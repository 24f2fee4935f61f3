use std::path::PathBuf;

use clap::Parser;
use tilegen::Algorithm;

use crate::config::{LayerConfig, LevelConfig, SeedSource};
use crate::error::AppError;

/// Command-line arguments for the level generator.
///
/// CLI values override settings loaded from the level file.
#[derive(Parser, Debug, Default)]
#[command(name = "tilegen", about = "Procedural 2D tile level generator")]
pub struct CliArgs {
    /// Level file (RON). Without one the built-in two-layer level is used.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in tiles.
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in tiles.
    #[arg(long)]
    pub height: Option<usize>,

    /// Replace the layer stack with one layer of this algorithm (default parameters).
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Seed text, applied to every layer.
    #[arg(long, conflicts_with = "random_seed")]
    pub seed: Option<String>,

    /// Seed every layer from the clock.
    #[arg(long)]
    pub random_seed: bool,

    /// Write a PNG of the level here.
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Pixels per tile in the PNG.
    #[arg(long)]
    pub scale: Option<u32>,

    /// Don't print the level to stdout.
    #[arg(long)]
    pub no_ascii: bool,

    /// Step ceiling for cave walks.
    #[arg(long)]
    pub max_walk_steps: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Save the effective level file here.
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// List the algorithm names and exit.
    #[arg(long)]
    pub list: bool,
}

impl LevelConfig {
    /// Apply CLI overrides to a loaded level.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) -> Result<(), AppError> {
        if let Some(w) = args.width {
            self.width = w;
        }
        if let Some(h) = args.height {
            self.height = h;
        }
        if let Some(ref name) = args.algorithm {
            let algorithm = Algorithm::default_for(name)
                .ok_or_else(|| AppError::UnknownAlgorithm(name.clone()))?;
            self.layers = vec![LayerConfig {
                name: name.clone(),
                algorithm,
                ..LayerConfig::default()
            }];
        }
        if let Some(ref text) = args.seed {
            for layer in &mut self.layers {
                layer.seed = SeedSource::Text(text.clone());
            }
        }
        if args.random_seed {
            for layer in &mut self.layers {
                layer.seed = SeedSource::Clock;
            }
        }
        if let Some(ref path) = args.png {
            self.output.png = Some(path.clone());
        }
        if let Some(scale) = args.scale {
            self.output.scale = scale;
        }
        if args.no_ascii {
            self.output.ascii = false;
        }
        if let Some(steps) = args.max_walk_steps {
            self.max_walk_steps = Some(steps);
        }
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
        Ok(())
    }
}
