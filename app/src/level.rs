use tilegen::{CancelToken, GenOptions, Generator, Grid, Seed};

use crate::config::LevelConfig;
use crate::error::AppError;

// One generated layer, in stacking order
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub algorithm: &'static str,
    pub seed: Seed,
    pub grid: Grid,
}

// Runs every configured layer at the level's size.
// The first failing layer aborts the whole level.
pub fn generate_level(config: &LevelConfig, cancel: &CancelToken) -> Result<Vec<Layer>, AppError> {
    if config.layers.is_empty() {
        return Err(AppError::NoLayers);
    }

    let mut opts = GenOptions::default().with_cancel(cancel.clone());
    if let Some(steps) = config.max_walk_steps {
        opts = opts.with_max_walk_steps(steps);
    }

    let mut layers = Vec::with_capacity(config.layers.len());
    for layer in &config.layers {
        let seed = layer.seed.resolve();
        let grid = layer
            .algorithm
            .generate(config.width, config.height, seed, &opts)
            .map_err(|source| AppError::Generate {
                layer: layer.name.clone(),
                source,
            })?;
        tracing::info!(
            layer = %layer.name,
            algorithm = layer.algorithm.name(),
            %seed,
            open = grid.count(tilegen::Cell::Open),
            "layer generated"
        );
        layers.push(Layer {
            name: layer.name.clone(),
            algorithm: layer.algorithm.name(),
            seed,
            grid,
        });
    }
    Ok(layers)
}
