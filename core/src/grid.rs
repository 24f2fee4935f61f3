use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

// State of a single tile. Solid is the drawn tile (wall / ground), Open is empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    Open = 0,
    Solid = 1,
}

impl Cell {
    #[inline]
    pub fn is_solid(self) -> bool {
        self == Cell::Solid
    }
}

// 2D tile grid indexed as [x, y] with y = 0 at the bottom.
// Stored row-major (y * width + x). Dimensions never change after creation.
// Deserialized grids go through `RawGrid` so they meet the same checks as `Grid::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GenError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let len = cell_count(raw.width, raw.height)?;
        if raw.cells.len() != len {
            return Err(GenError::InvalidDimension {
                width: raw.width,
                height: raw.height,
                reason: "cell count does not match width * height",
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

// Number of cells in a width x height grid, rejecting empty and overflowing sizes
fn cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(GenError::InvalidDimension {
            width,
            height,
            reason: "width and height must be positive",
        });
    }
    width.checked_mul(height).ok_or(GenError::InvalidDimension {
        width,
        height,
        reason: "cell count overflows",
    })
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: Cell) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
        })
    }

    // `empty = true` gives an all-Open grid, otherwise all-Solid
    pub fn create(width: usize, height: usize, empty: bool) -> Result<Self> {
        let fill = if empty { Cell::Open } else { Cell::Solid };
        Self::new(width, height, fill)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    // Never true: zero-sized grids are rejected in `new`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    // Signed lookup for neighbour scans; anything off the grid is None
    pub fn get_signed(&self, x: i64, y: i64) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    // Panics on out-of-range coordinates, like slice indexing
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    #[inline]
    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_solid)
    }

    // True for cells on the outer ring
    #[inline]
    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    // Set column x to Solid from `top` down to row 0.
    // A top above the grid is clamped to the last row, a negative top fills nothing.
    pub fn fill_column_to(&mut self, x: usize, top: i64) {
        if top < 0 || x >= self.width {
            return;
        }
        let top = (top as usize).min(self.height - 1);
        for y in 0..=top {
            self.set(x, y, Cell::Solid);
        }
    }

    // Row y from left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

// ASCII view, top row first so the picture reads the right way up.
// '#' is Solid, '.' is Open.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for &cell in self.row(y) {
                let ch = match cell {
                    Cell::Solid => '#',
                    Cell::Open => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_fill_semantics() {
        let empty = Grid::create(4, 3, true).unwrap();
        assert_eq!(empty.count(Cell::Open), 12);
        let full = Grid::create(4, 3, false).unwrap();
        assert_eq!(full.count(Cell::Solid), 12);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Grid::new(0, 5, Cell::Open),
            Err(GenError::InvalidDimension { .. })
        ));
        assert!(Grid::new(5, 0, Cell::Open).is_err());
    }

    #[test]
    fn bounds_safe_access() {
        let mut g = Grid::new(3, 2, Cell::Open).unwrap();
        g.set(2, 1, Cell::Solid);
        assert_eq!(g.get(2, 1), Some(Cell::Solid));
        assert_eq!(g.get(3, 1), None);
        assert_eq!(g.get_signed(-1, 0), None);
        assert_eq!(g.get_signed(2, 1), Some(Cell::Solid));
        assert!(g.is_boundary(0, 0));
        assert!(g.is_boundary(2, 0));
        assert!(!Grid::new(3, 3, Cell::Open).unwrap().is_boundary(1, 1));
    }

    #[test]
    fn column_fill_is_clamped() {
        let mut g = Grid::new(2, 4, Cell::Open).unwrap();
        g.fill_column_to(0, 10);
        assert_eq!(g.count(Cell::Solid), 4);
        g.fill_column_to(1, -1);
        assert_eq!(g.count(Cell::Solid), 4);
        g.fill_column_to(1, 1);
        assert!(g.is_solid(1, 0) && g.is_solid(1, 1) && !g.is_solid(1, 2));
    }

    #[test]
    fn deserialized_grid_is_checked() {
        let mut g = Grid::new(3, 2, Cell::Open).unwrap();
        g.set(1, 1, Cell::Solid);
        let text = ron::to_string(&g).unwrap();
        assert_eq!(ron::from_str::<Grid>(&text).unwrap(), g);

        let short = ron::from_str::<Grid>("(width: 4, height: 4, cells: [Open])");
        assert!(short.is_err());
        let empty = ron::from_str::<Grid>("(width: 0, height: 3, cells: [])");
        assert!(empty.is_err());
        let huge = format!("(width: {}, height: 2, cells: [])", usize::MAX);
        assert!(ron::from_str::<Grid>(&huge).is_err());
    }

    #[test]
    fn ascii_is_top_down() {
        let mut g = Grid::new(2, 2, Cell::Open).unwrap();
        g.set(0, 0, Cell::Solid);
        assert_eq!(g.to_string(), "..\n#.\n");
    }
}
