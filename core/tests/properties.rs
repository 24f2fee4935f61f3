use tilegen::{
    Algorithm, CancelToken, Cell, CellularMoore, CellularVonNeumann, GenError, GenOptions,
    Generator, Grid, PerlinSurface, PerlinSurfaceSmooth, Seed, TunnelParams, WalkCave,
    generate_automata, moore_count, smooth_moore, von_neumann_count,
};

fn outer_ring_is_solid(grid: &Grid) -> bool {
    (0..grid.width()).all(|x| grid.is_solid(x, 0) && grid.is_solid(x, grid.height() - 1))
        && (0..grid.height()).all(|y| grid.is_solid(0, y) && grid.is_solid(grid.width() - 1, y))
}

#[test]
fn same_seed_same_grid_for_every_algorithm() {
    let opts = GenOptions::default();
    for name in Algorithm::NAMES {
        let algorithm = Algorithm::default_for(name).unwrap();
        let a = algorithm.generate(64, 40, Seed::from_text("level-1"), &opts).unwrap();
        let b = algorithm.generate(64, 40, Seed::from_text("level-1"), &opts).unwrap();
        assert_eq!(a, b, "{name} is not deterministic");
    }
}

#[test]
fn different_seeds_give_different_caves() {
    let algorithm = Algorithm::CellularMoore(CellularMoore::default());
    let opts = GenOptions::default();
    let a = algorithm.generate(64, 64, Seed::new(1), &opts).unwrap();
    let b = algorithm.generate(64, 64, Seed::new(2), &opts).unwrap();
    assert_ne!(a, b);
}

#[test]
fn automata_keep_their_walls() {
    let opts = GenOptions::default();
    for smooth_count in 0..4 {
        let moore = CellularMoore {
            fill_percent: 45,
            smooth_count,
            edges_are_walls: true,
        };
        let von_neumann = CellularVonNeumann {
            fill_percent: 45,
            smooth_count,
            edges_are_walls: true,
        };
        let grid = moore.generate(37, 23, Seed::new(smooth_count as u64), &opts).unwrap();
        assert!(outer_ring_is_solid(&grid), "moore, {smooth_count} passes");
        let grid = von_neumann.generate(37, 23, Seed::new(smooth_count as u64), &opts).unwrap();
        assert!(outer_ring_is_solid(&grid), "von neumann, {smooth_count} passes");
    }
}

#[test]
fn neighbour_counts_around_a_single_wall() {
    let mut grid = Grid::new(5, 5, Cell::Open).unwrap();
    grid.set(2, 2, Cell::Solid);
    for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
        assert_eq!(moore_count(&grid, x, y), 1);
    }
    for (x, y) in [(2, 1), (2, 3), (1, 2), (3, 2)] {
        assert_eq!(von_neumann_count(&grid, x, y, false), 1);
    }
    for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
        assert_eq!(von_neumann_count(&grid, x, y, false), 0);
    }
}

#[test]
fn cave_walk_reaches_floor_target() {
    let walk = WalkCave {
        required_floor_percent: 30,
    };
    let grid = walk.generate(50, 50, Seed::new(42), &GenOptions::default()).unwrap();
    assert!(grid.count(Cell::Open) >= 50 * 50 * 30 / 100);
    assert!(outer_ring_is_solid(&grid));
}

#[test]
fn cave_walk_timeout_is_reported() {
    let walk = WalkCave {
        required_floor_percent: 60,
    };
    let opts = GenOptions::default().with_max_walk_steps(100);
    let err = walk.generate(50, 50, Seed::new(42), &opts).unwrap_err();
    assert!(matches!(err, GenError::GenerationTimeout { steps: 100, .. }));
}

#[test]
fn cancelled_tunnel_returns_no_grid() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let opts = GenOptions::default().with_cancel(cancel);
    let res = TunnelParams::default().generate(30, 30, Seed::new(1), &opts);
    assert_eq!(res, Err(GenError::Cancelled));
}

#[test]
fn tunnel_never_breaks() {
    let params = TunnelParams {
        min_path_width: 1,
        max_path_width: 4,
        max_path_change: 3,
        roughness: 10,
        windyness: 5,
    };
    for seed in 0..8 {
        let grid = params.generate(60, 90, Seed::new(seed), &GenOptions::default()).unwrap();
        for y in 0..grid.height() {
            assert!(
                grid.row(y).contains(&Cell::Open),
                "seed {seed}: row {y} has no tunnel"
            );
        }
    }
}

#[test]
fn zero_smoothing_is_identity() {
    let original = generate_automata(40, 30, Seed::new(12), 48, true).unwrap();
    let mut smoothed = original.clone();
    smooth_moore(&mut smoothed, true, 0);
    assert_eq!(smoothed, original);
}

#[test]
fn smoothing_passes_compose() {
    let original = generate_automata(40, 30, Seed::new(13), 48, false).unwrap();
    let mut twice = original.clone();
    smooth_moore(&mut twice, false, 3);
    smooth_moore(&mut twice, false, 3);
    let mut once = original;
    smooth_moore(&mut once, false, 6);
    assert_eq!(twice, once);
}

#[test]
fn smooth_noise_with_unit_interval_is_plain_noise() {
    let opts = GenOptions::default();
    let seed = Seed::from_f64(3.25);
    let plain = PerlinSurface.generate(80, 30, seed, &opts).unwrap();
    let smooth = PerlinSurfaceSmooth { interval: 1 }
        .generate(80, 30, seed, &opts)
        .unwrap();
    assert_eq!(plain, smooth);
}

#[test]
fn zero_sized_grids_are_rejected() {
    for name in Algorithm::NAMES {
        let algorithm = Algorithm::default_for(name).unwrap();
        let err = algorithm.generate(0, 10, Seed::new(0), &GenOptions::default()).unwrap_err();
        assert!(matches!(err, GenError::InvalidDimension { .. }), "{name}");
    }
}

#[test]
fn algorithm_survives_ron() {
    let layers = vec![
        Algorithm::CellularMoore(CellularMoore::default()),
        Algorithm::DirectionalTunnel(TunnelParams::default()),
        Algorithm::PerlinSurface(PerlinSurface),
    ];
    let text = ron::to_string(&layers).unwrap();
    let back: Vec<Algorithm> = ron::from_str(&text).unwrap();
    assert_eq!(back, layers);
}
