pub mod config;
pub mod error;
pub mod export;
pub mod finder;
pub mod grid;
pub mod map_reader;
pub mod render;

pub use config::Config;
pub use error::{BsqError, MapError, Result};
pub use export::export_to_file;
pub use finder::{Solution, SquareFinder, find_largest_square};
pub use grid::Grid;
pub use map_reader::{MapMarkers, ParseOptions, ParsedMap, parse_map, read_map};
pub use render::{render, write_rendered};
