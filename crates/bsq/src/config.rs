use crate::error::{BsqError, Result};
use std::{env, path::PathBuf};

const ENV_OUTPUT_DIR: &str = "BSQ_OUTPUT_DIR";
const ENV_STRICT_HEADER: &str = "BSQ_STRICT_HEADER";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Write solved maps here instead of stdout.
    pub output_dir: Option<PathBuf>,
    /// Require the header size to match the map width.
    pub strict_header: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any variable source, `from_env` being the usual one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(output_dir) = lookup(ENV_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            let path = PathBuf::from(output_dir);

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(BsqError::InvalidConfiguration(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            config.output_dir = Some(path);
        }

        if let Some(value) = lookup(ENV_STRICT_HEADER) {
            config.strict_header = parse_flag(ENV_STRICT_HEADER, &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(BsqError::InvalidConfiguration(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}
