// tilegen is the level generation engine: 2D tile grids from cellular automata,
// noise surfaces, random walks and directional tunnels.
// Every entry point is a pure function of (grid, parameters, seed).
pub mod cellular;
pub mod error;
pub mod generator;
pub mod grid;
pub mod neighbourhood;
pub mod noise;
pub mod options;
pub mod seed;
pub mod surface;
pub mod tunnel;
pub mod walk;

pub use cellular::{generate_automata, seed_automata, smooth_moore, smooth_von_neumann};
pub use error::{GenError, Result};
pub use generator::{
    Algorithm, CellularMoore, CellularVonNeumann, Generator, PerlinCave, PerlinSurface,
    PerlinSurfaceSmooth, WalkCave, WalkCaveCustom, WalkSurface, WalkSurfaceSmooth,
};
pub use grid::{Cell, Grid};
pub use neighbourhood::{moore_count, von_neumann_count};
pub use noise::{NoiseSource, Perlin2D};
pub use options::{CancelToken, GenOptions};
pub use seed::Seed;
pub use surface::{perlin_cave, perlin_surface, perlin_surface_smooth};
pub use tunnel::{TunnelParams, directional_tunnel};
pub use walk::{Directions, random_walk_cave, random_walk_top, random_walk_top_smoothed};
