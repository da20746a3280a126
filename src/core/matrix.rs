//! Matrix module - the rectangular cell grid underlying boards and pieces
//!
//! A matrix is a row-major sequence of cells; index `i` maps to
//! `(x = i % width, y = i / width)`. The game board is a 10x20 matrix and
//! every piece shape is a small matrix, so rotation and merging are the
//! same operations for both.

use arrayvec::ArrayVec;

use crate::types::{Cell, Rotation, BOARD_HEIGHT};

/// Rectangular grid of cells, row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Create a matrix filled with the empty sentinel
    ///
    /// Dimensions must be positive; callers are responsible for that.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Build a matrix from raw cells (length must equal width * height)
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat cell slice, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Get cell at (x, y); None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Rotate clockwise by the given number of quarter turns
    ///
    /// Turns 1 and 3 transpose the dimensions; turn 2 keeps them. The
    /// per-cell mapping is the canonical clockwise rotation for row-major
    /// grids:
    ///   turn 1: (x, y) -> (height-1-y, x)
    ///   turn 2: (x, y) -> (width-1-x, height-1-y)
    ///   turn 3: (x, y) -> (y, width-1-x)
    pub fn rotate_cw(&self, rotation: Rotation) -> Matrix {
        let turns = rotation.turns();
        if turns == 0 {
            return self.clone();
        }

        let mut out = if turns % 2 == 0 {
            Matrix::new(self.width, self.height)
        } else {
            Matrix::new(self.height, self.width)
        };

        for (i, &cell) in self.cells.iter().enumerate() {
            let x = i % self.width;
            let y = i / self.width;

            let (nx, ny) = match turns {
                1 => (self.height - 1 - y, x),
                2 => (self.width - 1 - x, self.height - 1 - y),
                3 => (y, self.width - 1 - x),
                _ => unreachable!("rotation is always 0..=3"),
            };

            out.cells[ny * out.width + nx] = cell;
        }

        out
    }

    /// Overlay `patch` onto a copy of `self` at the given offset
    ///
    /// Non-empty patch cells overwrite; empty patch cells never do. There is
    /// no bounds checking of the patch footprint - the placement validator
    /// guarantees it upstream. Cells that would land outside `self` are
    /// silently dropped so clipped, already-validated previews never panic.
    pub fn overlay(&self, patch: &Matrix, offset_x: i32, offset_y: i32) -> Matrix {
        let mut out = self.clone();

        for (i, &cell) in patch.cells.iter().enumerate() {
            if cell.is_none() {
                continue;
            }

            let x = (i % patch.width) as i32 + offset_x;
            let y = (i / patch.width) as i32 + offset_y;
            out.set(x, y, cell);
        }

        out
    }

    /// Check whether every cell in row `y` is occupied
    pub fn row_is_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Row indices that are fully occupied, top to bottom
    pub fn full_rows(&self) -> ArrayVec<usize, BOARD_HEIGHT> {
        let mut rows = ArrayVec::new();
        for y in 0..self.height {
            if self.row_is_full(y) {
                rows.push(y);
            }
        }
        rows
    }

    /// Remove the given rows with gravity collapse
    ///
    /// The result is one fully-empty row per removed row, followed by all
    /// remaining rows in their original relative order.
    pub fn clear_rows(&self, rows: &[usize]) -> Matrix {
        let mut cells = Vec::with_capacity(self.cells.len());
        cells.resize(rows.len() * self.width, None);

        for y in 0..self.height {
            if rows.contains(&y) {
                continue;
            }
            let start = y * self.width;
            cells.extend_from_slice(&self.cells[start..start + self.width]);
        }

        Matrix::from_cells(self.width, self.height, cells)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellColor;

    fn marked(width: usize, height: usize, filled: &[(i32, i32)]) -> Matrix {
        let mut m = Matrix::new(width, height);
        for &(x, y) in filled {
            assert!(m.set(x, y, Some(CellColor::Purple)));
        }
        m
    }

    #[test]
    fn test_new_matrix_is_empty() {
        let m = Matrix::new(3, 2);
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert_eq!(m.cells().len(), 6);
        assert!(m.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_index_row_major() {
        let mut m = Matrix::new(4, 3);
        m.set(1, 2, Some(CellColor::Red));
        assert_eq!(m.cells()[2 * 4 + 1], Some(CellColor::Red));
        assert_eq!(m.get(1, 2), Some(Some(CellColor::Red)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::new(2, 2);
        assert_eq!(m.get(-1, 0), None);
        assert_eq!(m.get(0, -1), None);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_rotate_zero_turns_is_same_content() {
        let m = marked(2, 3, &[(0, 0), (1, 2)]);
        assert_eq!(m.rotate_cw(Rotation::R0), m);
    }

    #[test]
    fn test_rotate_one_turn_transposes_and_maps() {
        // 2x3 matrix with a single mark at (0, 2) maps to (height-1-2, 0) = (0, 0)
        let m = marked(2, 3, &[(0, 2)]);
        let r = m.rotate_cw(Rotation::R1);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.get(0, 0), Some(Some(CellColor::Purple)));
        assert_eq!(r.occupied_count(), 1);
    }

    #[test]
    fn test_rotate_two_turns_point_reflects() {
        let m = marked(3, 2, &[(0, 0)]);
        let r = m.rotate_cw(Rotation::R2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.get(2, 1), Some(Some(CellColor::Purple)));
    }

    #[test]
    fn test_rotate_three_turns_maps() {
        // (x, y) -> (y, width-1-x): mark at (2, 0) in 3x2 maps to (0, 0)
        let m = marked(3, 2, &[(2, 0)]);
        let r = m.rotate_cw(Rotation::R3);
        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 3);
        assert_eq!(r.get(0, 0), Some(Some(CellColor::Purple)));
    }

    #[test]
    fn test_overlay_copies_base_and_patches_non_empty() {
        let base = marked(4, 4, &[(0, 0)]);
        let mut patch = Matrix::new(2, 1);
        patch.set(1, 0, Some(CellColor::Green));

        let merged = base.overlay(&patch, 1, 2);
        assert_eq!(merged.get(0, 0), Some(Some(CellColor::Purple)));
        assert_eq!(merged.get(2, 2), Some(Some(CellColor::Green)));
        // Empty patch cell at (1, 2) must not overwrite anything
        assert_eq!(merged.get(1, 2), Some(None));
    }

    #[test]
    fn test_overlay_empty_patch_cell_never_clears_base() {
        let base = marked(2, 2, &[(0, 0), (1, 1)]);
        let patch = Matrix::new(2, 2);
        assert_eq!(base.overlay(&patch, 0, 0), base);
    }

    #[test]
    fn test_overlay_clipped_offset_does_not_panic() {
        let base = Matrix::new(3, 3);
        let mut patch = Matrix::new(2, 2);
        patch.set(0, 0, Some(CellColor::Cyan));
        patch.set(1, 1, Some(CellColor::Cyan));

        let merged = base.overlay(&patch, 2, 2);
        assert_eq!(merged.get(2, 2), Some(Some(CellColor::Cyan)));
        assert_eq!(merged.occupied_count(), 1);
    }

    #[test]
    fn test_row_is_full() {
        let mut m = Matrix::new(3, 2);
        for x in 0..3 {
            m.set(x, 1, Some(CellColor::Blue));
        }
        assert!(!m.row_is_full(0));
        assert!(m.row_is_full(1));
        assert!(!m.row_is_full(5));
    }

    #[test]
    fn test_clear_rows_collapses_down() {
        // Rows (top to bottom): [A..], full, [B..], full
        let mut m = Matrix::new(2, 4);
        m.set(0, 0, Some(CellColor::Cyan));
        m.set(0, 1, Some(CellColor::Red));
        m.set(1, 1, Some(CellColor::Red));
        m.set(1, 2, Some(CellColor::Blue));
        m.set(0, 3, Some(CellColor::Red));
        m.set(1, 3, Some(CellColor::Red));

        let before = m.occupied_count();
        let cleared = m.clear_rows(&[1, 3]);

        assert_eq!(cleared.occupied_count(), before - 2 * m.width());
        // Remaining rows keep their relative order, shifted to the bottom
        assert_eq!(cleared.get(0, 2), Some(Some(CellColor::Cyan)));
        assert_eq!(cleared.get(1, 3), Some(Some(CellColor::Blue)));
        assert!(!cleared.row_is_full(0));
        assert!(!cleared.row_is_full(1));
    }

    #[test]
    fn test_full_rows_scan_is_idempotent() {
        let mut m = Matrix::new(3, 3);
        for x in 0..3 {
            m.set(x, 2, Some(CellColor::Orange));
        }
        let first: Vec<usize> = m.full_rows().into_iter().collect();
        let second: Vec<usize> = m.full_rows().into_iter().collect();
        assert_eq!(first, vec![2]);
        assert_eq!(first, second);
    }
}
