//! Geometry types shared by the configuration, the fit calculations, the
//! pipeline, and the CLI.
//!
//! All percentages are `f64` in `[0, 100]`. Pixel quantities are `u32`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pixel size: source, current, or target dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `0x0` means "no resize requested".
    pub fn is_zero(self) -> bool {
        self.width == 0 && self.height == 0
    }

    pub fn has_zero_dimension(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn get(self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy of `self` with the dimension on `axis` replaced.
    pub fn with(self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(value, self.height),
            Axis::Vertical => Self::new(self.width, value),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `800x600`.
impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let width = w
            .trim()
            .parse()
            .map_err(|e| format!("invalid width '{w}': {e}"))?;
        let height = h
            .trim()
            .parse()
            .map_err(|e| format!("invalid height '{h}': {e}"))?;
        Ok(Self { width, height })
    }
}

/// An image axis. The fit algorithm works on one "free" axis at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// Percentage of each edge to remove.
///
/// Valid when every field is in `[0, 100]`, `top + bottom < 100` and
/// `left + right < 100`. See [`ProcessSettings::validate`](crate::config::ProcessSettings::validate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropSpec {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl CropSpec {
    /// All four edges zero: cropping is a no-op.
    pub fn is_trivial(&self) -> bool {
        self.top == 0.0 && self.bottom == 0.0 && self.left == 0.0 && self.right == 0.0
    }

    /// A single-axis crop. `first` is the top edge (vertical) or the right
    /// edge (horizontal); `second` is the opposite edge.
    pub fn along(axis: Axis, first: f64, second: f64) -> Self {
        match axis {
            Axis::Vertical => Self {
                top: first,
                bottom: second,
                ..Self::default()
            },
            Axis::Horizontal => Self {
                right: first,
                left: second,
                ..Self::default()
            },
        }
    }
}

/// Tolerances used only when source and target aspect ratios differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FitSpec {
    /// Maximum percentage by which the free dimension may be shrunk by stretching.
    #[serde(rename = "stretch")]
    pub stretch_tolerance: f64,
    /// Maximum percentage that may be cropped from a single edge of the free axis.
    #[serde(rename = "crop")]
    pub crop_tolerance: f64,
}

/// Absolute pixel rectangle, always within the image it is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
