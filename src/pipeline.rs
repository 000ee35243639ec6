//! Pipeline builder and runner.
//!
//! [`build`] inspects a [`ProcessSettings`] bundle and returns an immutable
//! [`Pipeline`]: crop first (if any edge is non-zero), then resize (if the
//! target is not `0x0`). Running it folds an [`ImageState`] through the
//! operations in order.
//!
//! A `Pipeline` holds no per-run state, so a single instance can be shared
//! by any number of concurrent runs (see [`batch`](crate::batch)).

use crate::config::{ConfigError, ProcessSettings};
use crate::imaging::{self, ImageBackend, ImageState, OperationError};
use crate::types::{CropSpec, FitSpec, Size};
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// One step of a pipeline, bound to its sub-settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Crop(CropSpec),
    Resize { target: Size, fit: FitSpec },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Crop(_) => "crop",
            Operation::Resize { .. } => "resize",
        }
    }

    pub fn apply(
        &self,
        backend: &impl ImageBackend,
        image: ImageState,
    ) -> Result<ImageState, OperationError> {
        match self {
            Operation::Crop(spec) => imaging::crop(backend, image, spec),
            Operation::Resize { target, fit } => imaging::resize(backend, image, *target, fit),
        }
    }
}

/// An ordered, immutable list of operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    operations: Vec<Operation>,
}

impl Pipeline {
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Names of the operations in order, e.g. `["crop", "resize"]`.
    pub fn names(&self) -> Vec<&'static str> {
        self.operations.iter().map(Operation::name).collect()
    }

    /// Fold `image` through every operation.
    pub fn run(
        &self,
        backend: &impl ImageBackend,
        image: ImageState,
    ) -> Result<ImageState, OperationError> {
        self.operations.iter().try_fold(image, |image, op| {
            let from = image.size;
            let out = op.apply(backend, image)?;
            debug!("{}: {from} → {}", op.name(), out.size);
            Ok(out)
        })
    }
}

/// Assemble the operations whose settings are non-trivial, crop before resize.
pub fn build(settings: &ProcessSettings) -> Pipeline {
    let mut operations = Vec::with_capacity(2);
    if settings.needs_crop() {
        operations.push(Operation::Crop(settings.crop));
    }
    if settings.needs_resize() {
        operations.push(Operation::Resize {
            target: settings.resize,
            fit: settings.fit,
        });
    }
    Pipeline { operations }
}

/// Validate settings, then run the pipeline over one encoded image.
///
/// Returns the final image state. With no active operations the source
/// bytes come back untouched.
pub fn process(
    backend: &impl ImageBackend,
    bytes: Vec<u8>,
    settings: &ProcessSettings,
) -> Result<ImageState, ProcessError> {
    settings.validate()?;
    let pipeline = build(settings);
    let source = ImageState::from_bytes(backend, bytes)?;
    let source_size = source.size;
    let result = pipeline.run(backend, source)?;
    info!(
        "Processed {source_size} → {} ({})",
        result.size,
        if pipeline.is_empty() {
            "unchanged".to_string()
        } else {
            pipeline.names().join(", ")
        }
    );
    Ok(result)
}

/// Run the pipeline over one encoded image and return the final bytes.
pub fn process_image(
    backend: &impl ImageBackend,
    bytes: &[u8],
    settings: &ProcessSettings,
) -> Result<Vec<u8>, ProcessError> {
    Ok(process(backend, bytes.to_vec(), settings)?.bytes)
}

/// Measure an encoded image's pixel size.
pub fn measure_size(backend: &impl ImageBackend, bytes: &[u8]) -> Result<Size, ProcessError> {
    Ok(imaging::measure_size(backend, bytes)?)
}
