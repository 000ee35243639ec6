//! Batch processing of a directory tree.
//!
//! Every supported image under the source directory is run through one
//! shared [`Pipeline`] and written to the same relative path under the
//! output directory. Images are processed in parallel with
//! [rayon](https://docs.rs/rayon); the pipeline is immutable, so all workers
//! use the same instance.
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── imagefit-report.json     # Per-image sizes, operations, and failures
//! ├── 001-dawn.png             # Processed images are always PNG
//! └── travel/
//!     └── rome.png
//! ```
//!
//! When the settings produce an empty pipeline the sources are copied
//! unchanged under their original names.
//!
//! Sources that would land on the same output (`photo.jpg` and `photo.png`)
//! are told apart by keeping the source extension: the PNG source keeps
//! `photo.png` and the other becomes `photo.jpg.png`. The output directory
//! may not lie inside the source tree, or the next run would pick up its own
//! outputs.
//!
//! A failing image does not stop the batch: it is logged, reported through
//! the progress channel, and listed under `failed` in the report.

use crate::config::{ConfigError, ProcessSettings};
use crate::imaging::rust_backend::{OUTPUT_EXTENSION, is_supported_image};
use crate::imaging::{ImageBackend, ImageState, OperationError};
use crate::pipeline::{Pipeline, build};
use crate::types::Size;
use log::warn;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

/// Name of the JSON report written into the output directory.
pub const REPORT_FILENAME: &str = "imagefit-report.json";

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),
    #[error("Output directory must not be inside the source directory: {0}")]
    OutputInsideSource(PathBuf),
}

/// Failure of a single image; never aborts the batch.
#[derive(Error, Debug)]
enum ItemError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Operation(#[from] OperationError),
    #[error("output {0} is already taken by another source")]
    OutputTaken(PathBuf),
}

/// A successfully processed image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedImage {
    /// Source path relative to the source directory.
    pub source: String,
    /// Output path relative to the output directory.
    pub output: String,
    pub original: Size,
    pub result: Size,
    pub operations: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedImage {
    pub source: String,
    pub error: String,
}

/// Progress event, sent as soon as each image finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Processed(ProcessedImage),
    Failed(FailedImage),
}

/// Outcome of a whole batch, in source order.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub processed: Vec<ProcessedImage>,
    pub failed: Vec<FailedImage>,
}

/// All supported images under `source_dir`, sorted by path.
pub fn collect_images(source_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut images = Vec::new();
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_supported_image(entry.path()) {
            images.push(entry.into_path());
        }
    }
    Ok(images)
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root)
        .unwrap_or_else(|_| Path::new(path.file_name().unwrap_or_default()))
}

/// Where `source` is written: same relative path, PNG extension unless the
/// pipeline is empty.
pub fn output_path(
    source_dir: &Path,
    output_dir: &Path,
    source: &Path,
    pipeline: &Pipeline,
) -> PathBuf {
    let target = output_dir.join(relative_to(source, source_dir));
    if pipeline.is_empty() {
        target
    } else {
        target.with_extension(OUTPUT_EXTENSION)
    }
}

/// Output paths for `images`, in the same order.
///
/// A source whose default output is shared with another source keeps its
/// own extension in front of the output one, unless it already has the
/// output extension. Anything still clashing after that is `Err` with the
/// contested path.
fn assign_outputs(
    source_dir: &Path,
    output_dir: &Path,
    images: &[PathBuf],
    pipeline: &Pipeline,
) -> Vec<Result<PathBuf, PathBuf>> {
    let defaults: Vec<PathBuf> = images
        .iter()
        .map(|source| output_path(source_dir, output_dir, source, pipeline))
        .collect();
    let mut counts: HashMap<&Path, usize> = HashMap::new();
    for default in &defaults {
        *counts.entry(default.as_path()).or_default() += 1;
    }

    let mut claimed = HashSet::new();
    images
        .iter()
        .zip(&defaults)
        .map(|(source, default)| {
            let shared = counts.get(default.as_path()).is_some_and(|n| *n > 1);
            let candidate = if shared && source.extension() != default.extension() {
                let mut name = output_dir
                    .join(relative_to(source, source_dir))
                    .into_os_string();
                name.push(".");
                name.push(OUTPUT_EXTENSION);
                PathBuf::from(name)
            } else {
                default.clone()
            };
            if claimed.insert(candidate.clone()) {
                Ok(candidate)
            } else {
                Err(candidate)
            }
        })
        .collect()
}

/// Absolute, symlink-free form of `path`, which need not exist yet.
fn resolve_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.exists() {
        return path.canonicalize();
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            Ok(resolve_path(parent)?.join(name))
        }
        _ => Ok(std::env::current_dir()?.canonicalize()?.join(path)),
    }
}

fn run_one(
    backend: &impl ImageBackend,
    pipeline: &Pipeline,
    source: &Path,
    output: &Path,
) -> Result<(Size, Size), ItemError> {
    let bytes = std::fs::read(source)?;
    let image = ImageState::from_bytes(backend, bytes)?;
    let original = image.size;
    let result = pipeline.run(backend, image)?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, &result.bytes)?;
    Ok((original, result.size))
}

/// Process every supported image under `source_dir` into `output_dir`.
///
/// Writes [`REPORT_FILENAME`] into `output_dir` and returns the same report.
pub fn process_batch(
    backend: &impl ImageBackend,
    source_dir: &Path,
    output_dir: &Path,
    settings: &ProcessSettings,
    progress: Option<Sender<BatchEvent>>,
) -> Result<BatchReport, BatchError> {
    settings.validate()?;
    if resolve_path(output_dir)?.starts_with(source_dir.canonicalize()?) {
        return Err(BatchError::OutputInsideSource(output_dir.to_path_buf()));
    }

    let pipeline = build(settings);
    let images = collect_images(source_dir)?;
    let outputs = assign_outputs(source_dir, output_dir, &images, &pipeline);
    std::fs::create_dir_all(output_dir)?;

    let outcomes: Vec<Result<ProcessedImage, FailedImage>> = images
        .par_iter()
        .zip(&outputs)
        .map(|(source, output)| {
            let name = relative_to(source, source_dir).display().to_string();
            let run = match output {
                Ok(output) => {
                    run_one(backend, &pipeline, source, output).map(|sizes| (output, sizes))
                }
                Err(taken) => Err(ItemError::OutputTaken(taken.clone())),
            };
            let outcome = match run {
                Ok((output, (original, result))) => Ok(ProcessedImage {
                    source: name,
                    output: relative_to(output, output_dir).display().to_string(),
                    original,
                    result,
                    operations: pipeline.names(),
                }),
                Err(e) => {
                    warn!("Skipping {name}: {e}");
                    Err(FailedImage {
                        source: name,
                        error: e.to_string(),
                    })
                }
            };
            if let Some(tx) = &progress {
                let event = match &outcome {
                    Ok(done) => BatchEvent::Processed(done.clone()),
                    Err(failed) => BatchEvent::Failed(failed.clone()),
                };
                // Receiver may have hung up; the report still has everything.
                tx.send(event).ok();
            }
            outcome
        })
        .collect();

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(done) => report.processed.push(done),
            Err(failed) => report.failed.push(failed),
        }
    }

    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output_dir.join(REPORT_FILENAME), json)?;
    Ok(report)
}
