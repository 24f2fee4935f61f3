use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result, check_percent};
use crate::grid::{Cell, Grid};
use crate::options::CancelToken;

// Tuning for the directional tunnel.
// Widths are half-widths: a width of 1 carves 3 cells (-1, 0, +1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelParams {
    pub min_path_width: u32,
    pub max_path_width: u32,
    // Largest sideways shift of the centre in one row
    pub max_path_change: u32,
    // A width change happens when a 0..100 draw is at least this value
    pub roughness: u32,
    // A centre shift happens when a 0..100 draw is at least this value
    pub windyness: u32,
}

impl Default for TunnelParams {
    fn default() -> Self {
        Self {
            min_path_width: 1,
            max_path_width: 3,
            max_path_change: 2,
            roughness: 75,
            windyness: 75,
        }
    }
}

impl TunnelParams {
    pub fn validate(&self, width: usize) -> Result<()> {
        check_percent("roughness", self.roughness)?;
        check_percent("windyness", self.windyness)?;
        if self.min_path_width > self.max_path_width {
            return Err(GenError::InvalidParameter {
                name: "min_path_width",
                reason: format!(
                    "{} is larger than max_path_width {}",
                    self.min_path_width, self.max_path_width
                ),
            });
        }
        let needed = 2 * self.max_path_width.max(1) as usize + 1;
        if width < needed {
            return Err(GenError::InvalidParameter {
                name: "max_path_width",
                reason: format!("a {width}-wide grid cannot hold a tunnel {needed} cells wide"),
            });
        }
        Ok(())
    }
}

// Carve [centre - half_width, centre + half_width] on row y, clipped to the grid
fn carve_row(grid: &mut Grid, y: usize, centre: i64, half_width: i64) {
    let last = grid.width() as i64 - 1;
    for x in (centre - half_width).max(0)..=(centre + half_width).min(last) {
        grid.set(x as usize, y, Cell::Open);
    }
}

// One continuous corridor from the bottom row to the top row, starting at the horizontal centre.
// Per row the half-width may resample (roughness gate) and the centre may drift (windyness gate).
// Both gates change things when the draw is *at least* the knob, so higher values mean
// fewer changes.
pub fn directional_tunnel<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    params: &TunnelParams,
    cancel: &CancelToken,
) -> Result<()> {
    params.validate(grid.width())?;

    let max_width = params.max_path_width as i64;
    let min_width = params.min_path_width as i64;
    let max_change = params.max_path_change as i64;
    // centre stays max_width away from both side walls
    let (left, right) = (max_width, grid.width() as i64 - 1 - max_width);

    let mut half_width = 1i64;
    let mut centre = (grid.width() / 2) as i64;
    carve_row(grid, 0, centre, half_width);

    for y in 1..grid.height() {
        cancel.check()?;

        if rng.gen_range(0..100) >= params.roughness {
            half_width += rng.gen_range(-max_width..=max_width);
            half_width = half_width.clamp(min_width, max_width);
        }
        if rng.gen_range(0..100) >= params.windyness {
            centre += rng.gen_range(-max_change..=max_change);
            centre = centre.clamp(left, right);
        }
        carve_row(grid, y, centre, half_width);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn open_run(row: &[Cell]) -> Option<(usize, usize)> {
        let first = row.iter().position(|&c| c == Cell::Open)?;
        let last = row.iter().rposition(|&c| c == Cell::Open)?;
        Some((first, last))
    }

    #[test]
    fn every_row_is_carved_contiguously() {
        let mut g = Grid::new(40, 60, Cell::Solid).unwrap();
        let params = TunnelParams {
            roughness: 20,
            windyness: 10,
            ..TunnelParams::default()
        };
        directional_tunnel(&mut g, &mut ChaCha8Rng::seed_from_u64(1), &params, &CancelToken::new())
            .unwrap();
        for y in 0..60 {
            let (first, last) = open_run(g.row(y)).expect("row without tunnel");
            assert!(g.row(y)[first..=last].iter().all(|&c| c == Cell::Open));
            assert!(last - first + 1 <= 2 * 3 + 1);
        }
    }

    #[test]
    fn max_knobs_freeze_the_tunnel() {
        let mut g = Grid::new(21, 10, Cell::Solid).unwrap();
        let params = TunnelParams {
            roughness: 100,
            windyness: 100,
            ..TunnelParams::default()
        };
        directional_tunnel(&mut g, &mut ChaCha8Rng::seed_from_u64(2), &params, &CancelToken::new())
            .unwrap();
        for y in 0..10 {
            assert_eq!(open_run(g.row(y)), Some((9, 11)));
        }
    }

    #[test]
    fn invalid_widths_rejected() {
        let mut g = Grid::new(21, 10, Cell::Solid).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let inverted = TunnelParams {
            min_path_width: 4,
            max_path_width: 2,
            ..TunnelParams::default()
        };
        assert!(directional_tunnel(&mut g, &mut rng, &inverted, &CancelToken::new()).is_err());
        let too_wide = TunnelParams {
            max_path_width: 11,
            ..TunnelParams::default()
        };
        assert!(directional_tunnel(&mut g, &mut rng, &too_wide, &CancelToken::new()).is_err());
    }

    #[test]
    fn cancelled_before_first_row() {
        let mut g = Grid::new(21, 10, Cell::Solid).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let res = directional_tunnel(
            &mut g,
            &mut ChaCha8Rng::seed_from_u64(4),
            &TunnelParams::default(),
            &token,
        );
        assert_eq!(res, Err(GenError::Cancelled));
    }
}
