use crate::grid::Grid;
use log::{debug, trace};

/// Biggest free square found in a grid, anchored at its top-left cell.
///
/// `row` and `col` are meaningful only when `size > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solution {
    pub size: usize,
    pub row: usize,
    pub col: usize,
}

impl Solution {
    /// Returns true if `(r, c)` lies inside the marked square.
    pub fn contains(&self, r: usize, c: usize) -> bool {
        self.size > 0
            && r >= self.row
            && c >= self.col
            && r < self.row + self.size
            && c < self.col + self.size
    }
}

/// Largest-free-square search.
///
/// Anchors are visited row-major. For each free anchor only sizes that beat
/// the current best are tried, and the square grows one frontier ring at a
/// time so cells already validated at a smaller size are never re-read.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareFinder;

impl SquareFinder {
    pub fn new() -> Self {
        Self
    }

    pub fn find(&self, grid: &Grid) -> Solution {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut best = Solution::default();

        // No anchor past these bounds can hold a square larger than `best`.
        let mut i = 0;
        while i + best.size < rows {
            let mut j = 0;
            while j + best.size < cols {
                if !grid.is_obstacle(i, j) {
                    let size = self.biggest_square_at(grid, i, j, best.size + 1);
                    if size > best.size {
                        trace!("new best {size} at ({i}, {j})");
                        best = Solution {
                            size,
                            row: i,
                            col: j,
                        };
                    }
                }
                j += 1;
            }
            i += 1;
        }

        debug!(
            "largest square in {rows}x{cols} grid: size {} at ({}, {})",
            best.size, best.row, best.col
        );
        best
    }

    /// Size of the biggest free square anchored at `(i, j)`, searching from
    /// `start_size` upward. A result below `start_size` means no square of
    /// that size fits here.
    fn biggest_square_at(&self, grid: &Grid, i: usize, j: usize, start_size: usize) -> usize {
        let mut size = start_size;
        // Rings below `resume` were already checked clear at a smaller size.
        let mut resume = 0;

        while i + size <= grid.rows() && j + size <= grid.cols() {
            for ring in resume..size {
                if Self::ring_blocked(grid, i, j, ring) {
                    return ring;
                }
            }
            resume = size;
            size += 1;
        }
        size - 1
    }

    /// Checks the right column and bottom row of the square of side `ring + 1`.
    #[inline]
    fn ring_blocked(grid: &Grid, i: usize, j: usize, ring: usize) -> bool {
        (i..=i + ring).any(|r| grid.is_obstacle(r, j + ring))
            || (j..=j + ring).any(|c| grid.is_obstacle(i + ring, c))
    }
}

/// Convenience wrapper around [`SquareFinder::find`].
pub fn find_largest_square(grid: &Grid) -> Solution {
    SquareFinder::new().find(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(lines: &[&str]) -> Grid {
        Grid::from_rows(
            lines
                .iter()
                .map(|line| line.chars().map(|ch| ch == '#').collect())
                .collect(),
        )
        .unwrap()
    }

    fn solution(size: usize, row: usize, col: usize) -> Solution {
        Solution { size, row, col }
    }

    #[test]
    fn test_single_obstacle_in_center() {
        let grid = grid_from(&[".....", ".....", "..#..", ".....", "....."]);
        assert_eq!(find_largest_square(&grid), solution(2, 0, 0));
    }

    #[test]
    fn test_single_free_cell() {
        let grid = grid_from(&["."]);
        assert_eq!(find_largest_square(&grid), solution(1, 0, 0));
    }

    #[test]
    fn test_free_corner_region() {
        let grid = grid_from(&["####", "#...", "#...", "#..."]);
        assert_eq!(find_largest_square(&grid), solution(3, 1, 1));
    }

    #[test]
    fn test_all_free_rectangles() {
        for (rows, cols) in [(1, 7), (7, 1), (3, 5), (6, 4), (5, 5)] {
            let grid = Grid::from_rows(vec![vec![false; cols]; rows]).unwrap();
            assert_eq!(
                find_largest_square(&grid),
                solution(rows.min(cols), 0, 0),
                "{rows}x{cols}"
            );
        }
    }

    #[test]
    fn test_all_obstacles() {
        let grid = grid_from(&["###", "###"]);
        assert_eq!(find_largest_square(&grid).size, 0);
    }

    #[test]
    fn test_tie_break_prefers_first_in_row_major_order() {
        let grid = grid_from(&["..#..", "..#..", "#####", "..#..", "..#.."]);
        assert_eq!(find_largest_square(&grid), solution(2, 0, 0));

        let grid = grid_from(&["#.#..", "##...", "#####", "..###", "..###"]);
        assert_eq!(find_largest_square(&grid), solution(2, 0, 3));
    }

    #[test]
    fn test_obstacle_on_bottom_row_of_frontier() {
        let grid = grid_from(&["....", "....", "#...", "...."]);
        assert_eq!(find_largest_square(&grid), solution(3, 0, 1));
    }

    #[test]
    fn test_obstacle_on_right_column_of_frontier() {
        let grid = grid_from(&["..#.", "....", "....", "...."]);
        assert_eq!(find_largest_square(&grid), solution(3, 1, 0));
    }

    #[test]
    fn test_later_anchor_beats_earlier_best() {
        let grid = grid_from(&[
            ".#.....", "##.....", ".......", ".......", ".......", "#......",
        ]);
        assert_eq!(find_largest_square(&grid), solution(5, 0, 2));
    }

    #[test]
    fn test_find_is_idempotent() {
        let grid = grid_from(&["..#.", "....", ".#..", "...."]);
        let finder = SquareFinder::new();
        assert_eq!(finder.find(&grid), finder.find(&grid));
    }

    #[test]
    fn test_solution_contains() {
        let sol = solution(2, 1, 1);
        assert!(sol.contains(1, 1));
        assert!(sol.contains(2, 2));
        assert!(!sol.contains(0, 1));
        assert!(!sol.contains(3, 2));
        assert!(!Solution::default().contains(0, 0));
    }
}
