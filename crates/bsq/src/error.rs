use std::{io, path::PathBuf};
use thiserror::Error;

/// Reasons a map file is rejected before any search takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Missing header line")]
    MissingHeader,

    #[error("Invalid header: {0:?}")]
    InvalidHeader(String),

    #[error("Invalid map size in header: {0:?}")]
    InvalidSize(String),

    #[error("Markers must be distinct, got empty={empty:?} obstacle={obstacle:?} full={full:?}")]
    DuplicateMarker {
        empty: char,
        obstacle: char,
        full: char,
    },

    #[error("Map has no cells")]
    EmptyMap,

    #[error("Line {line} is not terminated by a newline")]
    MissingNewline { line: usize },

    #[error("Line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("Header declares size {declared}, but map is {actual} cells wide")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("Map is not valid UTF-8")]
    InvalidEncoding,
}

#[derive(Error, Debug)]
pub enum BsqError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read map file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed map in {path}")]
    Map {
        path: PathBuf,
        #[source]
        source: MapError,
    },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BsqError {
    /// True when the input itself was malformed, as opposed to unreadable.
    pub fn is_map_error(&self) -> bool {
        matches!(self, BsqError::Map { .. })
    }
}

pub type Result<T> = std::result::Result<T, BsqError>;
