use anyhow::{Context, Result};
use bsq::{
    BsqError, Config, ParseOptions, SquareFinder, export_to_file, read_map, render, write_rendered,
};
use clap::Parser;
use log::{debug, info, warn};
use std::{
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser)]
#[command(author, version, about = "Find and mark the biggest free square in obstacle maps", long_about = None)]
struct Args {
    /// Map files to solve, processed in order
    #[arg(value_name = "MAP")]
    maps: Vec<PathBuf>,

    /// Write solved maps into this directory instead of stdout (overrides BSQ_OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Reject maps whose header size differs from the map width (overrides BSQ_STRICT_HEADER)
    #[arg(long)]
    strict_header: bool,
}

fn main() -> ExitCode {
    // Initialize logger - defaults to RUST_LOG if set, otherwise WARN so stderr stays quiet
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
    let args = Args::parse();

    if args.maps.is_empty() {
        eprintln!("missing parameters");
        return ExitCode::FAILURE;
    }

    let mut config = Config::from_env().unwrap_or_else(|e| {
        warn!("{e}; falling back to defaults");
        Config::default()
    });
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }
    config.strict_header |= args.strict_header;
    debug!("{config:?}");

    let finder = SquareFinder::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = 0usize;

    for path in &args.maps {
        if let Err(e) = solve_map(path, &config, &finder, &mut out) {
            failed += 1;
            report_failure(path, &e);
        }
    }

    info!(
        "Processed {} map(s), {} failed",
        args.maps.len(),
        failed
    );
    ExitCode::SUCCESS
}

fn solve_map<W: Write>(
    path: &Path,
    config: &Config,
    finder: &SquareFinder,
    out: &mut W,
) -> Result<()> {
    let opt = ParseOptions {
        strict_header: config.strict_header,
    };
    let map = read_map(path, &opt)?;
    let solution = finder.find(&map.grid);
    info!(
        "{}: square of size {} at ({}, {})",
        path.display(),
        solution.size,
        solution.row,
        solution.col
    );

    match &config.output_dir {
        Some(dir) => {
            let rendered = render(&map.grid, &solution, &map.markers);
            let written = export_to_file(&rendered, path, dir)?;
            info!("Solved map saved to: {}", written.display());
        }
        None => {
            write_rendered(out, &map.grid, &solution, &map.markers)
                .and_then(|()| out.flush())
                .context("failed to write solved map to stdout")?;
        }
    }

    Ok(())
}

/// Prints the one-line per-file verdict; details go through the logger.
fn report_failure(path: &Path, e: &anyhow::Error) {
    let is_map_error = e
        .chain()
        .filter_map(|cause| cause.downcast_ref::<BsqError>())
        .any(BsqError::is_map_error);

    info!("{}: {e:#}", path.display());
    eprintln!("{}", if is_map_error { "map error" } else { "file error" });
}
