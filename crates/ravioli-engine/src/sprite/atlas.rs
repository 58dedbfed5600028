use crate::coords::UvRect;

/// Equal-cell grid laid over a texture atlas.
///
/// Cells are numbered row-major from the top-left: on a 2×2 grid, 0 and 1 are
/// the top row, 2 and 3 the bottom row.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AtlasGrid {
    columns: u32,
    rows: u32,
}

impl AtlasGrid {
    /// Creates a grid; zero dimensions are bumped to 1.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// UV rectangle of cell `index`; indices past the end wrap around.
    pub fn cell(&self, index: u32) -> UvRect {
        let index = index % self.cell_count();
        let col = index % self.columns;
        let row = index / self.columns;
        let w = 1.0 / self.columns as f32;
        let h = 1.0 / self.rows as f32;
        UvRect::new(col as f32 * w, row as f32 * h, w, h)
    }
}

impl Default for AtlasGrid {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_cells_are_row_major() {
        let grid = AtlasGrid::default();
        assert_eq!(grid.cell_count(), 4);
        assert_eq!(grid.cell(0), UvRect::new(0.0, 0.0, 0.5, 0.5));
        assert_eq!(grid.cell(1), UvRect::new(0.5, 0.0, 0.5, 0.5));
        assert_eq!(grid.cell(2), UvRect::new(0.0, 0.5, 0.5, 0.5));
        assert_eq!(grid.cell(3), UvRect::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn cells_tile_the_atlas() {
        let grid = AtlasGrid::new(4, 3);
        for i in 0..grid.cell_count() {
            assert!(grid.cell(i).is_normalized(), "cell {i} leaves the atlas");
        }
        let last = grid.cell(grid.cell_count() - 1);
        assert!((last.u + last.w - 1.0).abs() < 1e-6);
        assert!((last.v + last.h - 1.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_index_wraps() {
        let grid = AtlasGrid::default();
        assert_eq!(grid.cell(5), grid.cell(1));
    }

    #[test]
    fn zero_dimensions_become_single_cell() {
        let grid = AtlasGrid::new(0, 0);
        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.cell(0), UvRect::FULL);
    }
}
