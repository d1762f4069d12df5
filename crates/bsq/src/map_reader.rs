use crate::error::{BsqError, MapError, Result};
use crate::grid::Grid;

use log::debug;
use std::path::Path;

/// The three characters a map header declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapMarkers {
    pub empty: char,
    pub obstacle: char,
    /// Only used when rendering; never valid inside the map body.
    pub full: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMap {
    /// Number written at the start of the header.
    pub declared_size: usize,
    pub markers: MapMarkers,
    pub grid: Grid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject maps whose header size differs from the decoded width.
    pub strict_header: bool,
}

/// Reads and validates a map file.
///
/// # Errors
/// `ReadFile` if the file cannot be read, `Map` if its content is malformed
/// or not UTF-8.
pub fn read_map<P: AsRef<Path>>(path: P, opt: &ParseOptions) -> Result<ParsedMap> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| BsqError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let map = String::from_utf8(bytes)
        .map_err(|_| MapError::InvalidEncoding)
        .and_then(|text| parse_map(&text, opt))
        .map_err(|e| BsqError::Map {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!(
        "{}: {}x{} map, {} obstacles, {} free",
        path.display(),
        map.grid.rows(),
        map.grid.cols(),
        map.grid.obstacle_count(),
        map.grid.free_count()
    );
    Ok(map)
}

/// Parses map text: a `<size><empty><obstacle><full>` header followed by
/// newline-terminated rows of equal width.
pub fn parse_map(text: &str, opt: &ParseOptions) -> std::result::Result<ParsedMap, MapError> {
    let mut lines = text.split_inclusive('\n');

    let header = lines.next().ok_or(MapError::MissingHeader)?;
    let header = header
        .strip_suffix('\n')
        .ok_or(MapError::MissingNewline { line: 1 })?;
    let (declared_size, markers) = parse_header(header)?;

    let mut rows: Vec<Vec<bool>> = Vec::new();
    let mut width: Option<usize> = None;

    for (i, line) in lines.enumerate() {
        let line_no = i + 2; // header is line 1
        let body = line
            .strip_suffix('\n')
            .ok_or(MapError::MissingNewline { line: line_no })?;

        let found = body.chars().count();
        match width {
            None if found == 0 => return Err(MapError::EmptyMap),
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(MapError::RaggedRow {
                    line: line_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        rows.push(parse_row(body, line_no, &markers)?);
    }

    let grid = Grid::from_rows(rows)?;

    if opt.strict_header && declared_size != grid.cols() {
        return Err(MapError::SizeMismatch {
            declared: declared_size,
            actual: grid.cols(),
        });
    }

    Ok(ParsedMap {
        declared_size,
        markers,
        grid,
    })
}

fn parse_header(header: &str) -> std::result::Result<(usize, MapMarkers), MapError> {
    let chars: Vec<char> = header.chars().collect();
    if chars.len() < 4 {
        return Err(MapError::InvalidHeader(header.to_string()));
    }

    let (size_chars, marker_chars) = chars.split_at(chars.len() - 3);
    let size_str: String = size_chars.iter().collect();
    if !size_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MapError::InvalidSize(size_str));
    }
    let declared_size = size_str
        .parse::<usize>()
        .map_err(|_| MapError::InvalidSize(size_str.clone()))?;

    let markers = MapMarkers {
        empty: marker_chars[0],
        obstacle: marker_chars[1],
        full: marker_chars[2],
    };
    if markers.empty == markers.obstacle
        || markers.empty == markers.full
        || markers.obstacle == markers.full
    {
        return Err(MapError::DuplicateMarker {
            empty: markers.empty,
            obstacle: markers.obstacle,
            full: markers.full,
        });
    }

    Ok((declared_size, markers))
}

fn parse_row(
    body: &str,
    line_no: usize,
    markers: &MapMarkers,
) -> std::result::Result<Vec<bool>, MapError> {
    body.chars()
        .enumerate()
        .map(|(col, ch)| match ch {
            c if c == markers.empty => Ok(false),
            c if c == markers.obstacle => Ok(true),
            found => Err(MapError::InvalidCharacter {
                line: line_no,
                column: col + 1,
                found,
            }),
        })
        .collect()
}
