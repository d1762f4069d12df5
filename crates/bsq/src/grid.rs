use crate::error::MapError;

/// Rectangular obstacle map. `true` marks an obstacle, `false` a free cell.
///
/// Cells are stored row-major in a single vector, so lookups are one
/// multiplication and one add. The grid is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid from already decoded rows.
    ///
    /// # Errors
    /// `EmptyMap` if there is no row or no column, `RaggedRow` if the rows
    /// differ in length (line numbers count the header as line 1).
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, MapError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MapError::EmptyMap);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MapError::RaggedRow {
                    line: i + 2,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Panics when `(r, c)` is out of bounds; callers own the bounds check.
    #[inline]
    pub fn is_obstacle(&self, r: usize, c: usize) -> bool {
        assert!(
            r < self.rows && c < self.cols,
            "cell ({r}, {c}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[r * self.cols + c]
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn free_count(&self) -> usize {
        self.cells.len() - self.obstacle_count()
    }
}
