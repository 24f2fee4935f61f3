use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tilegen::{Algorithm, CancelToken};

mod cli;
mod config;
mod error;
mod level;
mod logging;
mod render;

use cli::CliArgs;
use config::LevelConfig;
use error::AppError;

fn run(args: &CliArgs) -> Result<(), AppError> {
    let mut config = LevelConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(args)?;
    logging::init_logging(&config.log_level);

    if let Some(ref path) = args.save_config {
        config.save(path)?;
        tracing::info!(path = %path.display(), "level file saved");
    }

    let start = Instant::now();
    let layers = level::generate_level(&config, &CancelToken::new())?;
    tracing::info!(
        layers = layers.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "level generated"
    );

    if config.output.ascii {
        print!("{}", render::render_ascii(&layers));
    }
    if let Some(ref path) = config.output.png {
        render::save_png(&layers, config.output.scale, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.list {
        for name in Algorithm::NAMES {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "level generation failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
