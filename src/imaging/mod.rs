//! Image geometry and raster operations.
//!
//! | Operation | Where |
//! |---|---|
//! | **Measure** | [`ImageBackend::identify`] |
//! | **Percentage → pixel rect** | [`crop_to_rect`] |
//! | **Crop** | [`operations::crop`] |
//! | **Resize / fit** | [`operations::resize`] (direct, or accommodate → stretch → crop) |
//! | **Thumbnail** | [`operations::make_thumbnail`] |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for geometry and fit planning (unit testable)
//! - **Parameters**: [`GeometryOp`], the description of one pixel change
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{
    FitError, FitPlan, FitStage, FitStep, ResizePlan, aspect_ratios_match, crop_to_rect, fit,
    plan_resize, sizes_match,
};
pub use operations::{
    ImageState, OperationError, crop, make_thumbnail, measure_size, resize,
};
pub use params::GeometryOp;
pub use rust_backend::RustBackend;
