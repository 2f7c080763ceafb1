mod atlas;
mod config;
mod data;
mod error;
mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;

use atlas::{AtlasCache, AtlasResolver};
use config::SlicerConfig;
use error::SkipReason;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing sprite descriptor JSON files
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory containing the packed atlas sheets
    #[arg(long)]
    atlas_dir: Option<PathBuf>,

    /// Directory the cropped sprites are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON config overriding the built-in atlas table and invert limits
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SlicerConfig::load(path)?,
        None => SlicerConfig::default(),
    };
    if let Some(dir) = args.input_dir {
        config.input_dir = dir;
    }
    if let Some(dir) = args.atlas_dir {
        config.atlas_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    log::info!(
        "Slicing sprites described in {:?} out of the sheets in {:?}",
        config.input_dir,
        config.atlas_dir
    );

    // Every .json file in the input directory, in listing order
    let descriptors: Vec<PathBuf> = fs::read_dir(&config.input_dir)
        .context(format!(
            "Failed to read input directory {:?}",
            config.input_dir
        ))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.is_file() && path.to_string_lossy().ends_with(".json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    log::info!("Processing {} descriptor files...", descriptors.len());

    fs::create_dir_all(&config.output_dir).context(format!(
        "Failed to create output directory {:?}",
        config.output_dir
    ))?;

    let resolver = AtlasResolver::new(config.atlas_table.clone(), &config.atlas_dir);
    let mut cache = AtlasCache::new(&config.atlas_dir);

    let mut extracted: u64 = 0;
    let mut skipped: u64 = 0;
    let mut failed: u64 = 0;

    let progress_bar = ProgressBar::new(descriptors.len() as u64);

    for path in &descriptors {
        match process_descriptor(path, &config, &resolver, &mut cache) {
            Ok(file_name) => {
                extracted += 1;
                log::debug!("Extracted {} from {:?}", file_name, path);
            }
            Err(reason) if reason.is_logged() => {
                failed += 1;
                log::warn!("Error {:?}: {}", path, reason);
            }
            Err(_) => {
                skipped += 1;
            }
        }
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    log::info!(
        "Done. extracted: {} skipped: {} failed: {}",
        extracted,
        skipped,
        failed
    );
    Ok(())
}

/// Run one descriptor through the whole pipeline: parse, resolve, decode,
/// crop, save. Any failure is contained to this record.
fn process_descriptor(
    path: &Path,
    config: &SlicerConfig,
    resolver: &AtlasResolver,
    cache: &mut AtlasCache,
) -> Result<String, SkipReason> {
    let record = data::load_record(path)?;
    let atlas_file = resolver.resolve(&record)?;
    let sheet = cache.get_or_decode(&atlas_file)?;

    let sprite = extract::extract_sprite(&record, sheet, &config.invert_limits)?;

    let out_path = config.output_dir.join(&sprite.file_name);
    sprite
        .image
        .save(&out_path)
        .map_err(|source| SkipReason::Save {
            path: out_path,
            source,
        })?;

    Ok(sprite.file_name)
}
