//! High-level image operations.
//!
//! These functions combine calculations with backend execution. Each takes
//! an [`ImageState`] by value and returns a new one; sizes are always
//! re-measured from the backend's output rather than predicted.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{
    FitError, FitStage, aspect_ratios_match, crop_to_rect, plan_stage, resolve_target,
    sizes_match,
};
use super::params::GeometryOp;
use crate::types::{CropSpec, FitSpec, Size};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Resize unreachable: {0}")]
    ResizeUnreachable(#[from] FitError),
    #[error("Fit ended at {reached} instead of {target}")]
    FitDiverged { reached: Size, target: Size },
    #[error("Image backend failed: {0}")]
    Backend(#[from] BackendError),
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, OperationError>;

/// An encoded image and its measured size, threaded through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageState {
    pub bytes: Vec<u8>,
    pub size: Size,
}

impl ImageState {
    /// Wrap source bytes, measuring their size with the backend.
    pub fn from_bytes(backend: &impl ImageBackend, bytes: Vec<u8>) -> Result<Self> {
        let size = measure_size(backend, &bytes)?;
        Ok(Self { bytes, size })
    }
}

fn require_bytes(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(OperationError::InvalidInput("empty image buffer".to_string()));
    }
    Ok(())
}

/// Measure an encoded image's pixel size.
pub fn measure_size(backend: &impl ImageBackend, bytes: &[u8]) -> Result<Size> {
    require_bytes(bytes)?;
    Ok(backend.identify(bytes)?)
}

/// Apply a single geometry op and re-measure.
pub fn apply(backend: &impl ImageBackend, image: ImageState, op: &GeometryOp) -> Result<ImageState> {
    let bytes = match op {
        GeometryOp::Resize(size) => backend.resize(&image.bytes, *size)?,
        GeometryOp::Crop(spec) => backend.crop(&image.bytes, crop_to_rect(spec, image.size))?,
    };
    let size = backend.identify(&bytes)?;
    debug!("{op}: {} → {size}", image.size);
    Ok(ImageState { bytes, size })
}

/// Crop a percentage of each edge.
pub fn crop(backend: &impl ImageBackend, image: ImageState, spec: &CropSpec) -> Result<ImageState> {
    require_bytes(&image.bytes)?;
    apply(backend, image, &GeometryOp::Crop(*spec))
}

/// Resize to `target`, reconciling aspect ratios within `fit` tolerances.
///
/// When the aspect ratios match (or the target leaves one dimension at zero
/// to be derived) this is a single direct resize. Otherwise the fit stages
/// run in order until the image matches the target exactly; a stage whose
/// plan would not change the image is skipped.
pub fn resize(
    backend: &impl ImageBackend,
    image: ImageState,
    target: Size,
    fit: &FitSpec,
) -> Result<ImageState> {
    require_bytes(&image.bytes)?;
    let current = backend.identify(&image.bytes)?;
    if current.has_zero_dimension() {
        return Err(OperationError::InvalidInput(format!(
            "cannot resize a {current} image"
        )));
    }
    let mut image = ImageState {
        bytes: image.bytes,
        size: current,
    };

    let derived = target.has_zero_dimension();
    let target = resolve_target(current, target);
    if target.has_zero_dimension() {
        return Err(OperationError::InvalidInput(format!(
            "cannot resize to {target}"
        )));
    }

    if derived || aspect_ratios_match(current, target) {
        return apply(backend, image, &GeometryOp::Resize(target));
    }

    for stage in FitStage::SEQUENCE {
        if sizes_match(image.size, target) {
            break;
        }
        let op = plan_stage(stage, image.size, target, fit)?;
        if op.is_noop(image.size) {
            debug!("{stage}: nothing to do at {}", image.size);
            continue;
        }
        debug!("{stage}: {op}");
        image = apply(backend, image, &op)?;
    }

    if !sizes_match(image.size, target) {
        return Err(OperationError::FitDiverged {
            reached: image.size,
            target,
        });
    }
    Ok(image)
}

/// Direct resize to a fixed thumbnail size, ignoring aspect ratio.
pub fn make_thumbnail(backend: &impl ImageBackend, bytes: Vec<u8>, size: Size) -> Result<ImageState> {
    let image = ImageState::from_bytes(backend, bytes)?;
    if size.has_zero_dimension() {
        return Err(OperationError::InvalidInput(format!(
            "thumbnail size {size} has a zero dimension"
        )));
    }
    apply(backend, image, &GeometryOp::Resize(size))
}
