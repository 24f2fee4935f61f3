use rand::Rng;

use crate::error::{Result, check_percent};
use crate::grid::{Cell, Grid};
use crate::neighbourhood::{moore_count, von_neumann_count};
use crate::seed::Seed;

// Random initial state: each cell Solid with probability fill_percent / 100.
// With edges_are_walls the outer ring is forced Solid and consumes no randomness.
// Scan order is x-major (column by column) so a seed always lands the same draws on the same cells.
pub fn seed_automata<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    fill_percent: u32,
    edges_are_walls: bool,
) -> Result<()> {
    check_percent("fill_percent", fill_percent)?;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let cell = if edges_are_walls && grid.is_boundary(x, y) {
                Cell::Solid
            } else if rng.gen_range(0..100) < fill_percent {
                Cell::Solid
            } else {
                Cell::Open
            };
            grid.set(x, y, cell);
        }
    }
    Ok(())
}

pub fn generate_automata(
    width: usize,
    height: usize,
    seed: Seed,
    fill_percent: u32,
    edges_are_walls: bool,
) -> Result<Grid> {
    let mut grid = Grid::new(width, height, Cell::Open)?;
    seed_automata(&mut grid, &mut seed.rng(), fill_percent, edges_are_walls)?;
    Ok(grid)
}

// One smoothing rule: neighbour count above the threshold turns Solid,
// below it turns Open, exactly at it keeps the cell.
//
// Passes update the grid in place while scanning, so cells later in a pass
// already see neighbours changed earlier in the same pass.
fn smooth_with<F>(
    grid: &mut Grid,
    edges_are_walls: bool,
    smooth_count: usize,
    threshold: u8,
    count: F,
) where
    F: Fn(&Grid, usize, usize) -> u8,
{
    for pass in 0..smooth_count {
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let neighbours = count(&*grid, x, y);
                if edges_are_walls && grid.is_boundary(x, y) {
                    grid.set(x, y, Cell::Solid);
                } else if neighbours > threshold {
                    grid.set(x, y, Cell::Solid);
                } else if neighbours < threshold {
                    grid.set(x, y, Cell::Open);
                }
            }
        }
        tracing::trace!(pass, solid = grid.count(Cell::Solid), "smoothing pass done");
    }
}

// von Neumann rule: > 2 solid neighbours => Solid, < 2 => Open
pub fn smooth_von_neumann(grid: &mut Grid, edges_are_walls: bool, smooth_count: usize) {
    smooth_with(grid, edges_are_walls, smooth_count, 2, |g, x, y| {
        von_neumann_count(g, x, y, edges_are_walls)
    });
}

// Moore rule: > 4 solid neighbours => Solid, < 4 => Open
pub fn smooth_moore(grid: &mut Grid, edges_are_walls: bool, smooth_count: usize) {
    smooth_with(grid, edges_are_walls, smooth_count, 4, moore_count);
}
