//! Parameter types for image operations.
//!
//! These describe *what* to do to an image, not *how*. The
//! [`calculations`](super::calculations) module produces them and the
//! [`operations`](super::operations) module hands them to a
//! [`backend`](super::backend) for the pixel work.

use crate::types::{CropSpec, Size};
use std::fmt;

/// A single geometric correction applied to an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryOp {
    /// Scale to exactly this size (aspect ratio not preserved).
    Resize(Size),
    /// Remove a percentage of each edge.
    Crop(CropSpec),
}

impl GeometryOp {
    /// True when applying the op to an image of `current` size changes nothing.
    pub fn is_noop(&self, current: Size) -> bool {
        match self {
            GeometryOp::Resize(size) => *size == current,
            GeometryOp::Crop(spec) => spec.is_trivial(),
        }
    }
}

impl fmt::Display for GeometryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryOp::Resize(size) => write!(f, "resize to {size}"),
            GeometryOp::Crop(c) => write!(
                f,
                "crop top {:.2}% bottom {:.2}% left {:.2}% right {:.2}%",
                c.top, c.bottom, c.left, c.right
            ),
        }
    }
}
