use crate::error::{GenError, Result};
use crate::grid::{Cell, Grid};
use crate::noise::{NoiseSource, Perlin2D};
use crate::seed::Seed;

// Noise sample 0.5 maps to mid-height
const SURFACE_REDUCTION: f64 = 0.5;

// Surface row for column x: the noise sample re-centred on zero, scaled to the grid height,
// then lifted by half the height so the terrain oscillates around the middle.
fn surface_height(noise: &impl NoiseSource, x: usize, offset: f64, height: usize) -> i64 {
    let n = noise.unit(x as f64, offset);
    ((n - SURFACE_REDUCTION) * height as f64).floor() as i64 + (height / 2) as i64
}

// Plain noise surface: every column filled Solid from its sampled height down to row 0.
// Heights above the grid are clamped to the top row.
pub fn perlin_surface(grid: &mut Grid, seed: Seed) {
    let noise = Perlin2D::single(seed);
    let offset = seed.noise_offset();
    for x in 0..grid.width() {
        let top = surface_height(&noise, x, offset, grid.height());
        grid.fill_column_to(x, top);
    }
}

// Noise surface sampled every `interval` columns with straight slopes in between.
// The last column is always a control point so the slope reaches the right edge.
pub fn perlin_surface_smooth(grid: &mut Grid, seed: Seed, interval: usize) -> Result<()> {
    if interval == 0 {
        return Err(GenError::InvalidParameter {
            name: "interval",
            reason: "must be at least 1".into(),
        });
    }
    if interval == 1 {
        perlin_surface(grid, seed);
        return Ok(());
    }

    let noise = Perlin2D::single(seed);
    let offset = seed.noise_offset();
    let (width, height) = (grid.width(), grid.height());

    let mut points: Vec<(usize, i64)> = (0..width)
        .step_by(interval)
        .map(|x| (x, surface_height(&noise, x, offset, height)))
        .collect();
    if points.last().is_some_and(|&(x, _)| x != width - 1) {
        points.push((width - 1, surface_height(&noise, width - 1, offset, height)));
    }

    for pair in points.windows(2) {
        let (x0, h0) = pair[0];
        let (x1, h1) = pair[1];
        let slope = (h1 - h0) as f64 / (x1 - x0) as f64;
        let mut current = h0 as f64;
        for x in x0..x1 {
            grid.fill_column_to(x, current.floor() as i64);
            current += slope;
        }
    }
    if let Some(&(x, h)) = points.last() {
        grid.fill_column_to(x, h);
    }
    Ok(())
}

// Cave from thresholded 2D noise: each cell samples (x * modifier, y * modifier), shifted by the
// seed's noise offset, and rounds to Open or Solid. Smaller modifiers stretch the field into
// larger, smoother caverns. The offset keeps whole-number modifiers off the lattice points.
pub fn perlin_cave(
    grid: &mut Grid,
    seed: Seed,
    modifier: f64,
    edges_are_walls: bool,
) -> Result<()> {
    if !modifier.is_finite() || modifier <= 0.0 {
        return Err(GenError::InvalidParameter {
            name: "modifier",
            reason: format!("{modifier} must be a positive finite number"),
        });
    }

    let noise = Perlin2D::single(seed);
    let offset = seed.noise_offset();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let (nx, ny) = (x as f64 * modifier + offset, y as f64 * modifier + offset);
            let cell = if edges_are_walls && grid.is_boundary(x, y) {
                Cell::Solid
            } else if noise.unit(nx, ny) >= 0.5 {
                Cell::Solid
            } else {
                Cell::Open
            };
            grid.set(x, y, cell);
        }
    }
    Ok(())
}
