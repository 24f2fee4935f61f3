use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result, check_percent};
use crate::grid::{Cell, Grid};
use crate::options::GenOptions;

// Up, Down, Right, Left
const FOUR_WAY: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

// NW, N, NE, E, SE, S, SW, W
const EIGHT_WAY: [(i64, i64); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
];

// Step set for the cave walkers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directions {
    Four,
    Eight,
}

impl Directions {
    fn steps(self) -> &'static [(i64, i64)] {
        match self {
            Directions::Four => &FOUR_WAY,
            Directions::Eight => &EIGHT_WAY,
        }
    }
}

// Surface random walk. The height starts on a random row and each column flips a coin:
// heads steps down (if above row 2), tails steps up (if below height - 2).
// Each column is then filled Solid from that height down to 0.
pub fn random_walk_top<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let height = grid.height() as i64;
    let mut last_height = rng.gen_range(0..height);
    for x in 0..grid.width() {
        let heads = rng.gen_range(0..2) == 0;
        if heads && last_height > 2 {
            last_height -= 1;
        } else if !heads && last_height < height - 2 {
            last_height += 1;
        }
        grid.fill_column_to(x, last_height);
    }
}

// Like `random_walk_top`, but the height may only change once it has been held
// for more than `min_section_width` columns. Produces flat plateaus with single steps;
// a width of 0 lets the height change on every column.
pub fn random_walk_top_smoothed<R: Rng>(grid: &mut Grid, rng: &mut R, min_section_width: usize) {
    let height = grid.height() as i64;
    let mut last_height = rng.gen_range(0..height);
    let mut section_width = 0;
    for x in 0..grid.width() {
        let heads = rng.gen_range(0..2) == 0;
        let may_change = section_width > min_section_width;
        if may_change && heads && last_height > 2 {
            last_height -= 1;
            section_width = 0;
        } else if may_change && !heads && last_height < height - 2 {
            last_height += 1;
            section_width = 0;
        }
        // The column just filled belongs to the current section
        section_width += 1;
        grid.fill_column_to(x, last_height);
    }
}

// Cave random walk. Starts on a random interior cell and steps in a uniformly chosen direction,
// opening every Solid cell it enters, until `required_floor_percent` of the whole grid has been
// opened. Steps that would enter the one-cell outer ring are rejected but still count toward the
// step ceiling. Returns the number of cells opened.
pub fn random_walk_cave<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    required_floor_percent: u32,
    directions: Directions,
    opts: &GenOptions,
) -> Result<usize> {
    check_percent("required_floor_percent", required_floor_percent)?;
    let (width, height) = (grid.width(), grid.height());
    if width < 3 || height < 3 {
        return Err(GenError::InvalidDimension {
            width,
            height,
            reason: "cave walks need at least a 3x3 grid",
        });
    }

    let interior = (width - 2) * (height - 2);
    let required = grid.len() * required_floor_percent as usize / 100;
    if required > interior {
        return Err(GenError::InvalidParameter {
            name: "required_floor_percent",
            reason: format!(
                "{required_floor_percent}% needs {required} open cells but only {interior} can be carved"
            ),
        });
    }

    let limit = opts.walk_step_limit(grid.len());
    let steps = directions.steps();
    let (max_x, max_y) = (width as i64 - 2, height as i64 - 2);

    let mut x = rng.gen_range(1..=max_x);
    let mut y = rng.gen_range(1..=max_y);
    let mut opened = 0;
    if grid.is_solid(x as usize, y as usize) {
        grid.set(x as usize, y as usize, Cell::Open);
        opened += 1;
    }

    let mut attempted = 0u64;
    while opened < required {
        opts.cancel.check()?;
        if attempted >= limit {
            tracing::warn!(attempted, opened, required, "cave walk hit its step ceiling");
            return Err(GenError::GenerationTimeout {
                steps: attempted,
                opened,
                required,
            });
        }
        attempted += 1;

        let (dx, dy) = steps[rng.gen_range(0..steps.len())];
        let (nx, ny) = (x + dx, y + dy);
        if !(1..=max_x).contains(&nx) || !(1..=max_y).contains(&ny) {
            continue;
        }
        x = nx;
        y = ny;
        if grid.is_solid(x as usize, y as usize) {
            grid.set(x as usize, y as usize, Cell::Open);
            opened += 1;
        }
    }

    tracing::debug!(attempted, opened, "cave walk finished");
    Ok(opened)
}
