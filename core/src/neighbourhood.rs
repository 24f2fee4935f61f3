use crate::grid::Grid;

// Orthogonal offsets: N, S, E, W
const VON_NEUMANN: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

// Number of Solid cells among the 4 orthogonal neighbours of (x, y).
// A neighbour off the grid counts as Solid when `edges_are_walls`, otherwise as nothing.
//
//     N
//   W T E
//     S
pub fn von_neumann_count(grid: &Grid, x: usize, y: usize, edges_are_walls: bool) -> u8 {
    let (x, y) = (x as i64, y as i64);
    VON_NEUMANN
        .iter()
        .map(|&(dx, dy)| match grid.get_signed(x + dx, y + dy) {
            Some(cell) => cell as u8,
            None => edges_are_walls as u8,
        })
        .sum()
}

// Number of Solid cells in the 3x3 block around (x, y), centre excluded.
// Neighbours off the grid are skipped; there is no edge-as-wall padding here.
//
//   N N N
//   N T N
//   N N N
pub fn moore_count(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as i64, y as i64);
    let mut count = 0;
    for nx in x - 1..=x + 1 {
        for ny in y - 1..=y + 1 {
            if nx == x && ny == y {
                continue;
            }
            if let Some(cell) = grid.get_signed(nx, ny) {
                count += cell as u8;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn single_centre() -> Grid {
        let mut g = Grid::new(5, 5, Cell::Open).unwrap();
        g.set(2, 2, Cell::Solid);
        g
    }

    #[test]
    fn moore_sees_diagonals() {
        let g = single_centre();
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            assert_eq!(moore_count(&g, x, y), 1, "at ({x}, {y})");
        }
        assert_eq!(moore_count(&g, 2, 2), 0);
    }

    #[test]
    fn von_neumann_is_orthogonal_only() {
        let g = single_centre();
        for (x, y) in [(2, 1), (2, 3), (1, 2), (3, 2)] {
            assert_eq!(von_neumann_count(&g, x, y, false), 1);
        }
        for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
            assert_eq!(von_neumann_count(&g, x, y, false), 0);
        }
    }

    #[test]
    fn edge_padding_only_for_von_neumann() {
        let g = Grid::new(3, 3, Cell::Open).unwrap();
        // corner has two off-grid orthogonal neighbours
        assert_eq!(von_neumann_count(&g, 0, 0, true), 2);
        assert_eq!(von_neumann_count(&g, 0, 0, false), 0);
        assert_eq!(von_neumann_count(&g, 1, 0, true), 1);

        let full = Grid::new(3, 3, Cell::Solid).unwrap();
        assert_eq!(moore_count(&full, 0, 0), 3);
        assert_eq!(moore_count(&full, 1, 1), 8);
    }
}
