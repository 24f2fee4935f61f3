use serde::{Deserialize, Serialize};

use crate::cellular::{seed_automata, smooth_moore, smooth_von_neumann};
use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::options::GenOptions;
use crate::seed::Seed;
use crate::surface::{perlin_cave, perlin_surface, perlin_surface_smooth};
use crate::tunnel::{TunnelParams, directional_tunnel};
use crate::walk::{Directions, random_walk_cave, random_walk_top, random_walk_top_smoothed};

// A level generation algorithm.
// `carve` works on an existing grid, `generate` creates the grid the algorithm expects first.
pub trait Generator {
    fn name(&self) -> &'static str;

    // Cell every position holds before carving starts
    fn initial_fill(&self) -> Cell;

    fn carve(&self, grid: &mut Grid, seed: Seed, opts: &GenOptions) -> Result<()>;

    fn generate(&self, width: usize, height: usize, seed: Seed, opts: &GenOptions) -> Result<Grid> {
        let _span =
            tracing::debug_span!("generate", algorithm = self.name(), width, height, %seed).entered();
        let mut grid = Grid::new(width, height, self.initial_fill())?;
        if let Err(err) = self.carve(&mut grid, seed, opts) {
            tracing::warn!(%err, "generation failed");
            return Err(err);
        }
        tracing::debug!(solid = grid.count(Cell::Solid), "grid generated");
        Ok(grid)
    }
}

// Jagged noise terrain, one sample per column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerlinSurface;

impl Generator for PerlinSurface {
    fn name(&self) -> &'static str {
        "perlin"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Open
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, _opts: &GenOptions) -> Result<()> {
        perlin_surface(grid, seed);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinSurfaceSmooth {
    // Columns between noise samples
    pub interval: usize,
}

impl Default for PerlinSurfaceSmooth {
    fn default() -> Self {
        Self { interval: 4 }
    }
}

impl Generator for PerlinSurfaceSmooth {
    fn name(&self) -> &'static str {
        "perlin-smooth"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Open
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, _opts: &GenOptions) -> Result<()> {
        perlin_surface_smooth(grid, seed, self.interval)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinCave {
    pub modifier: f64,
    pub edges_are_walls: bool,
}

impl Default for PerlinCave {
    fn default() -> Self {
        Self {
            modifier: 0.1,
            edges_are_walls: true,
        }
    }
}

impl Generator for PerlinCave {
    fn name(&self) -> &'static str {
        "perlin-cave"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Open
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, _opts: &GenOptions) -> Result<()> {
        perlin_cave(grid, seed, self.modifier, self.edges_are_walls)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSurface;

impl Generator for WalkSurface {
    fn name(&self) -> &'static str {
        "walk-top"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Open
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, _opts: &GenOptions) -> Result<()> {
        random_walk_top(grid, &mut seed.rng());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkSurfaceSmooth {
    pub min_section_width: usize,
}

impl Default for WalkSurfaceSmooth {
    fn default() -> Self {
        Self {
            min_section_width: 2,
        }
    }
}

impl Generator for WalkSurfaceSmooth {
    fn name(&self) -> &'static str {
        "walk-top-smooth"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Open
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, _opts: &GenOptions) -> Result<()> {
        random_walk_top_smoothed(grid, &mut seed.rng(), self.min_section_width);
        Ok(())
    }
}

// 4-directional cave walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkCave {
    pub required_floor_percent: u32,
}

impl Default for WalkCave {
    fn default() -> Self {
        Self {
            required_floor_percent: 40,
        }
    }
}

impl Generator for WalkCave {
    fn name(&self) -> &'static str {
        "walk-cave"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Solid
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, opts: &GenOptions) -> Result<()> {
        let rng = &mut seed.rng();
        random_walk_cave(grid, rng, self.required_floor_percent, Directions::Four, opts)?;
        Ok(())
    }
}

// 8-directional cave walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkCaveCustom {
    pub required_floor_percent: u32,
}

impl Default for WalkCaveCustom {
    fn default() -> Self {
        Self {
            required_floor_percent: 40,
        }
    }
}

impl Generator for WalkCaveCustom {
    fn name(&self) -> &'static str {
        "walk-cave-custom"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Solid
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, opts: &GenOptions) -> Result<()> {
        let rng = &mut seed.rng();
        random_walk_cave(grid, rng, self.required_floor_percent, Directions::Eight, opts)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellularVonNeumann {
    pub fill_percent: u32,
    pub smooth_count: usize,
    pub edges_are_walls: bool,
}

impl Default for CellularVonNeumann {
    fn default() -> Self {
        Self {
            fill_percent: 45,
            smooth_count: 3,
            edges_are_walls: true,
        }
    }
}

impl Generator for CellularVonNeumann {
    fn name(&self) -> &'static str {
        "cellular-von-neumann"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Open
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, _opts: &GenOptions) -> Result<()> {
        seed_automata(grid, &mut seed.rng(), self.fill_percent, self.edges_are_walls)?;
        smooth_von_neumann(grid, self.edges_are_walls, self.smooth_count);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellularMoore {
    pub fill_percent: u32,
    pub smooth_count: usize,
    pub edges_are_walls: bool,
}

impl Default for CellularMoore {
    fn default() -> Self {
        Self {
            fill_percent: 45,
            smooth_count: 3,
            edges_are_walls: true,
        }
    }
}

impl Generator for CellularMoore {
    fn name(&self) -> &'static str {
        "cellular-moore"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Open
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, _opts: &GenOptions) -> Result<()> {
        seed_automata(grid, &mut seed.rng(), self.fill_percent, self.edges_are_walls)?;
        smooth_moore(grid, self.edges_are_walls, self.smooth_count);
        Ok(())
    }
}

impl Generator for TunnelParams {
    fn name(&self) -> &'static str {
        "directional-tunnel"
    }

    fn initial_fill(&self) -> Cell {
        Cell::Solid
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, opts: &GenOptions) -> Result<()> {
        directional_tunnel(grid, &mut seed.rng(), self, &opts.cancel)
    }
}

// One variant per algorithm, each carrying only its own parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Algorithm {
    PerlinSurface(PerlinSurface),
    PerlinSurfaceSmooth(PerlinSurfaceSmooth),
    PerlinCave(PerlinCave),
    WalkSurface(WalkSurface),
    WalkSurfaceSmooth(WalkSurfaceSmooth),
    WalkCave(WalkCave),
    WalkCaveCustom(WalkCaveCustom),
    CellularVonNeumann(CellularVonNeumann),
    CellularMoore(CellularMoore),
    DirectionalTunnel(TunnelParams),
}

impl Algorithm {
    pub const NAMES: [&'static str; 10] = [
        "perlin",
        "perlin-smooth",
        "perlin-cave",
        "walk-top",
        "walk-top-smooth",
        "walk-cave",
        "walk-cave-custom",
        "cellular-von-neumann",
        "cellular-moore",
        "directional-tunnel",
    ];

    // Algorithm with default parameters, looked up by its `name()`
    pub fn default_for(name: &str) -> Option<Self> {
        let algorithm = match name {
            "perlin" => Self::PerlinSurface(PerlinSurface),
            "perlin-smooth" => Self::PerlinSurfaceSmooth(PerlinSurfaceSmooth::default()),
            "perlin-cave" => Self::PerlinCave(PerlinCave::default()),
            "walk-top" => Self::WalkSurface(WalkSurface),
            "walk-top-smooth" => Self::WalkSurfaceSmooth(WalkSurfaceSmooth::default()),
            "walk-cave" => Self::WalkCave(WalkCave::default()),
            "walk-cave-custom" => Self::WalkCaveCustom(WalkCaveCustom::default()),
            "cellular-von-neumann" => Self::CellularVonNeumann(CellularVonNeumann::default()),
            "cellular-moore" => Self::CellularMoore(CellularMoore::default()),
            "directional-tunnel" => Self::DirectionalTunnel(TunnelParams::default()),
            _ => return None,
        };
        Some(algorithm)
    }

    fn inner(&self) -> &dyn Generator {
        match self {
            Self::PerlinSurface(g) => g,
            Self::PerlinSurfaceSmooth(g) => g,
            Self::PerlinCave(g) => g,
            Self::WalkSurface(g) => g,
            Self::WalkSurfaceSmooth(g) => g,
            Self::WalkCave(g) => g,
            Self::WalkCaveCustom(g) => g,
            Self::CellularVonNeumann(g) => g,
            Self::CellularMoore(g) => g,
            Self::DirectionalTunnel(g) => g,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::CellularMoore(CellularMoore::default())
    }
}

impl Generator for Algorithm {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn initial_fill(&self) -> Cell {
        self.inner().initial_fill()
    }

    fn carve(&self, grid: &mut Grid, seed: Seed, opts: &GenOptions) -> Result<()> {
        self.inner().carve(grid, seed, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in Algorithm::NAMES {
            let algorithm = Algorithm::default_for(name).expect("known name");
            assert_eq!(algorithm.name(), name);
        }
        assert!(Algorithm::default_for("diamond-square").is_none());
    }

    #[test]
    fn initial_fill_follows_algorithm_family() {
        let solid_start = ["walk-cave", "walk-cave-custom", "directional-tunnel"];
        for name in Algorithm::NAMES {
            let fill = Algorithm::default_for(name).unwrap().initial_fill();
            let expected = if solid_start.contains(&name) {
                Cell::Solid
            } else {
                Cell::Open
            };
            assert_eq!(fill, expected, "{name}");
        }
    }

    #[test]
    fn every_default_generates() {
        for name in Algorithm::NAMES {
            let algorithm = Algorithm::default_for(name).unwrap();
            let grid = algorithm
                .generate(48, 32, Seed::new(2025), &GenOptions::default())
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!((grid.width(), grid.height()), (48, 32));
        }
    }
}
