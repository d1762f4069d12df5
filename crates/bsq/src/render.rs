use crate::finder::Solution;
use crate::grid::Grid;
use crate::map_reader::MapMarkers;

use std::io::{self, Write};

fn cell_char(grid: &Grid, solution: &Solution, markers: &MapMarkers, r: usize, c: usize) -> char {
    if solution.contains(r, c) {
        markers.full
    } else if grid.is_obstacle(r, c) {
        markers.obstacle
    } else {
        markers.empty
    }
}

/// Renders the grid with the solution square filled in, one
/// newline-terminated line per row.
pub fn render(grid: &Grid, solution: &Solution, markers: &MapMarkers) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for r in 0..grid.rows() {
        out.extend((0..grid.cols()).map(|c| cell_char(grid, solution, markers, r, c)));
        out.push('\n');
    }
    out
}

/// Streams the same output as [`render`] into `writer`, one row at a time.
pub fn write_rendered<W: Write>(
    writer: &mut W,
    grid: &Grid,
    solution: &Solution,
    markers: &MapMarkers,
) -> io::Result<()> {
    let mut line = String::with_capacity(grid.cols() + 1);
    for r in 0..grid.rows() {
        line.clear();
        line.extend((0..grid.cols()).map(|c| cell_char(grid, solution, markers, r, c)));
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}
