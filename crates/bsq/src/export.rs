use crate::error::{BsqError, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Writes a rendered map to `<output_dir>/<stem>_solved_<timestamp>.txt`,
/// creating the directory if needed, and returns the written path.
pub fn export_to_file(rendered: &str, source: &Path, output_dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "map".to_string());
    let filename = format!("{stem}_solved_{timestamp}.txt");

    std::fs::create_dir_all(output_dir).map_err(|e| BsqError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let file_path = output_dir.join(filename);

    let file = File::create(&file_path).map_err(|e| BsqError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(rendered.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| BsqError::WriteFile {
            path: file_path.clone(),
            source: e,
        })?;

    Ok(file_path)
}
