//! Pure geometry for cropping and fitting.
//!
//! All functions here are pure and testable without any I/O or images. The
//! [`operations`](super::operations) module calls them between backend steps,
//! always feeding in the size re-measured from the backend's output.
//!
//! # Fitting
//!
//! When an image and its target box disagree on aspect ratio, the image is
//! corrected in up to three stages, stopping as soon as it matches exactly:
//!
//! ```text
//! Accommodate  scale uniformly until one axis equals the target and the
//!              other ("free") axis overflows
//! Stretch      squeeze the free axis by at most `fit.stretch` percent
//! Crop         cut the rest of the free axis, at most `fit.crop` percent
//!              per edge, or fail with ResizeUnreachable
//! ```

use super::params::GeometryOp;
use crate::types::{Axis, CropSpec, FitSpec, PixelRect, Size};
use std::fmt;
use thiserror::Error;

const HUNDRED_PERCENT: f64 = 100.0;

/// Aspect ratios closer than this are treated as equal.
pub const ASPECT_EPSILON: f64 = 1e-6;

/// Added before truncating to whole pixels, so a percentage derived from an
/// exact pixel count converts back to that count.
const TRUNCATION_EPSILON: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    #[error(
        "cannot fit {axis} {free_dimension}px into {target_dimension}px: \
         cropping {crop_tolerance}% from each edge still leaves too much"
    )]
    ResizeUnreachable {
        axis: Axis,
        free_dimension: u32,
        target_dimension: u32,
        crop_tolerance: f64,
    },
    #[error("cannot plan a fit from {current} to {target}: zero-sized dimension")]
    ZeroDimension { current: Size, target: Size },
}

// =============================================================================
// Comparison primitives
// =============================================================================

/// Size equality by field values. Every "has the image reached its target"
/// check goes through here.
pub fn sizes_match(a: Size, b: Size) -> bool {
    a.width == b.width && a.height == b.height
}

/// Aspect-ratio equality within [`ASPECT_EPSILON`].
///
/// Sizes with a zero height have no ratio and only match an identical size.
pub fn aspect_ratios_match(a: Size, b: Size) -> bool {
    if a.height == 0 || b.height == 0 {
        return sizes_match(a, b);
    }
    (a.aspect_ratio() - b.aspect_ratio()).abs() < ASPECT_EPSILON
}

// =============================================================================
// Geometry utility
// =============================================================================

fn truncate(value: f64) -> u32 {
    // `as` saturates: negatives and NaN become 0
    (value + TRUNCATION_EPSILON).floor() as u32
}

/// Convert a percentage crop into an absolute pixel rectangle within `size`.
///
/// Each coordinate is truncated to whole pixels:
///
/// ```text
/// x      = floor(width  * left / 100)
/// y      = floor(height * top  / 100)
/// width  = floor(width  * (100 - right  - left) / 100)
/// height = floor(height * (100 - bottom - top)  / 100)
/// ```
///
/// The result always satisfies `x + width <= size.width` and
/// `y + height <= size.height`. A zero crop yields the full image.
pub fn crop_to_rect(crop: &CropSpec, size: Size) -> PixelRect {
    let w = size.width as f64;
    let h = size.height as f64;

    let x = truncate(w * crop.left / HUNDRED_PERCENT).min(size.width);
    let y = truncate(h * crop.top / HUNDRED_PERCENT).min(size.height);
    let width = truncate(w * (HUNDRED_PERCENT - crop.right - crop.left) / HUNDRED_PERCENT)
        .min(size.width - x);
    let height = truncate(h * (HUNDRED_PERCENT - crop.bottom - crop.top) / HUNDRED_PERCENT)
        .min(size.height - y);

    PixelRect {
        x,
        y,
        width,
        height,
    }
}

/// Fill in a zero target dimension from the current aspect ratio.
///
/// `current` must have non-zero dimensions. Targets with both or neither
/// dimension set are returned unchanged.
pub fn resolve_target(current: Size, target: Size) -> Size {
    let ratio = current.aspect_ratio();
    match (target.width, target.height) {
        (0, 0) => target,
        (0, h) => Size::new(((h as f64 * ratio).round() as u32).max(1), h),
        (w, 0) => Size::new(w, ((w as f64 / ratio).round() as u32).max(1)),
        _ => target,
    }
}

// =============================================================================
// Fit stages
// =============================================================================

/// One stage of the fit algorithm, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStage {
    Accommodate,
    Stretch,
    Crop,
}

impl FitStage {
    pub const SEQUENCE: [FitStage; 3] = [FitStage::Accommodate, FitStage::Stretch, FitStage::Crop];

    pub fn name(self) -> &'static str {
        match self {
            FitStage::Accommodate => "accommodate",
            FitStage::Stretch => "stretch",
            FitStage::Crop => "crop",
        }
    }
}

impl fmt::Display for FitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The axis still needing correction: height if the width already matches,
/// otherwise width.
pub fn free_axis(current: Size, target: Size) -> Axis {
    if current.width == target.width {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Uniform scale that covers the target on at least one axis.
///
/// Uses the larger of the two scale ratios so neither resulting dimension is
/// smaller than its target.
pub fn accommodate_size(current: Size, target: Size) -> Size {
    let war = target.width as f64 / current.width as f64;
    let har = target.height as f64 / current.height as f64;

    if war > har {
        Size::new(target.width, (war * current.height as f64).round() as u32)
    } else {
        Size::new((har * current.width as f64).round() as u32, target.height)
    }
}

/// Squeeze the free axis by at most `stretch_tolerance` percent, never past
/// the target.
///
/// When the fully squeezed dimension would undershoot, the target itself is
/// chosen, so a larger tolerance does not change the outcome past that point.
pub fn stretch_size(current: Size, target: Size, stretch_tolerance: f64) -> Size {
    let axis = free_axis(current, target);
    let max_shrink = (HUNDRED_PERCENT - stretch_tolerance) / HUNDRED_PERCENT;
    let candidate = (current.get(axis) as f64 * max_shrink).round() as u32;
    let wanted = target.get(axis);

    current.with(axis, if candidate < wanted { wanted } else { candidate })
}

/// Plan the crop that removes the remaining overflow on the free axis.
///
/// If a single edge can absorb the whole overflow within `crop_tolerance`,
/// only that edge (top, or right) is cropped. Otherwise that edge takes the
/// full tolerance and the opposite edge the remainder. Fails when even the
/// maximal two-edge crop leaves the free axis larger than the target.
pub fn minimize_crop(
    current: Size,
    target: Size,
    crop_tolerance: f64,
) -> Result<CropSpec, FitError> {
    let axis = free_axis(current, target);
    let free = current.get(axis) as f64;
    let wanted = target.get(axis) as f64;

    let one_side_remaining = free * (HUNDRED_PERCENT - crop_tolerance) / HUNDRED_PERCENT;
    let two_side_remaining = free * (HUNDRED_PERCENT - 2.0 * crop_tolerance) / HUNDRED_PERCENT;

    if two_side_remaining > wanted {
        return Err(FitError::ResizeUnreachable {
            axis,
            free_dimension: current.get(axis),
            target_dimension: target.get(axis),
            crop_tolerance,
        });
    }

    let overflow = (free - wanted) * HUNDRED_PERCENT / free;
    if one_side_remaining <= wanted {
        Ok(CropSpec::along(axis, overflow, 0.0))
    } else {
        Ok(CropSpec::along(axis, crop_tolerance, overflow - crop_tolerance))
    }
}

/// Plan the geometry change for `stage` given the current (measured) size.
pub fn plan_stage(
    stage: FitStage,
    current: Size,
    target: Size,
    tolerances: &FitSpec,
) -> Result<GeometryOp, FitError> {
    match stage {
        FitStage::Accommodate => Ok(GeometryOp::Resize(accommodate_size(current, target))),
        FitStage::Stretch => Ok(GeometryOp::Resize(stretch_size(
            current,
            target,
            tolerances.stretch_tolerance,
        ))),
        FitStage::Crop => {
            minimize_crop(current, target, tolerances.crop_tolerance).map(GeometryOp::Crop)
        }
    }
}

/// Size of an image of `current` size after applying `op`.
pub fn predict_size(op: &GeometryOp, current: Size) -> Size {
    match op {
        GeometryOp::Resize(size) => *size,
        GeometryOp::Crop(spec) => crop_to_rect(spec, current).size(),
    }
}

/// A planned stage and the size it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct FitStep {
    pub stage: FitStage,
    pub op: GeometryOp,
    pub result: Size,
}

/// The full plan for fitting one size into another.
#[derive(Debug, Clone, PartialEq)]
pub struct FitPlan {
    pub steps: Vec<FitStep>,
    pub final_size: Size,
}

/// Plan the whole fit arithmetically, without touching pixels.
///
/// Stages whose op would not change the image are left out of the plan.
pub fn fit(current: Size, target: Size, tolerances: &FitSpec) -> Result<FitPlan, FitError> {
    if current.has_zero_dimension() || target.has_zero_dimension() {
        return Err(FitError::ZeroDimension { current, target });
    }
    let mut size = current;
    let mut steps = Vec::new();

    for stage in FitStage::SEQUENCE {
        if sizes_match(size, target) {
            break;
        }
        let op = plan_stage(stage, size, target, tolerances)?;
        if op.is_noop(size) {
            continue;
        }
        size = predict_size(&op, size);
        steps.push(FitStep {
            stage,
            op,
            result: size,
        });
    }

    Ok(FitPlan {
        steps,
        final_size: size,
    })
}

/// How a resize request will be carried out.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizePlan {
    /// Aspect ratios already agree, or one dimension is derived: one resize.
    Direct(Size),
    /// Aspect ratios differ: run the fit stages.
    Fit(FitPlan),
}

impl ResizePlan {
    pub fn final_size(&self) -> Size {
        match self {
            ResizePlan::Direct(size) => *size,
            ResizePlan::Fit(plan) => plan.final_size,
        }
    }
}

/// Plan a resize of `current` to `target` the same way
/// [`operations::resize`](super::operations::resize) executes it.
///
/// `current` must have both dimensions; `target` may leave one at zero to be
/// derived, but not both.
pub fn plan_resize(
    current: Size,
    target: Size,
    tolerances: &FitSpec,
) -> Result<ResizePlan, FitError> {
    if current.has_zero_dimension() || target.is_zero() {
        return Err(FitError::ZeroDimension { current, target });
    }
    let resolved = resolve_target(current, target);
    if target.has_zero_dimension() || aspect_ratios_match(current, resolved) {
        return Ok(ResizePlan::Direct(resolved));
    }
    Ok(ResizePlan::Fit(fit(current, resolved, tolerances)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tolerances(stretch: f64, crop: f64) -> FitSpec {
        FitSpec {
            stretch_tolerance: stretch,
            crop_tolerance: crop,
        }
    }

    // =========================================================================
    // comparison primitives
    // =========================================================================

    #[test]
    fn aspect_match_same_ratio_different_scale() {
        assert!(aspect_ratios_match(Size::new(800, 600), Size::new(400, 300)));
        assert!(aspect_ratios_match(Size::new(1920, 1080), Size::new(1280, 720)));
    }

    #[test]
    fn aspect_match_rejects_different_ratio() {
        assert!(!aspect_ratios_match(Size::new(800, 600), Size::new(400, 301)));
        assert!(!aspect_ratios_match(Size::new(1000, 800), Size::new(1000, 400)));
    }

    #[test]
    fn aspect_match_tolerates_float_noise() {
        // ratios differ by ~1.1e-7
        assert!(aspect_ratios_match(
            Size::new(1, 3),
            Size::new(1_000_000, 3_000_001)
        ));
        assert!(!aspect_ratios_match(Size::new(1, 3), Size::new(1000, 3001)));
    }

    #[test]
    fn aspect_match_zero_height_only_matches_itself() {
        assert!(aspect_ratios_match(Size::new(5, 0), Size::new(5, 0)));
        assert!(!aspect_ratios_match(Size::new(5, 0), Size::new(10, 0)));
        assert!(!aspect_ratios_match(Size::new(5, 0), Size::new(5, 1)));
    }

    #[test]
    fn sizes_match_by_fields() {
        assert!(sizes_match(Size::new(3, 4), Size::new(3, 4)));
        assert!(!sizes_match(Size::new(3, 4), Size::new(4, 3)));
    }

    // =========================================================================
    // crop_to_rect
    // =========================================================================

    #[test]
    fn crop_to_rect_zero_crop_is_full_image() {
        let rect = crop_to_rect(&CropSpec::default(), Size::new(1234, 567));
        assert_eq!(
            rect,
            PixelRect {
                x: 0,
                y: 0,
                width: 1234,
                height: 567
            }
        );
    }

    #[test]
    fn crop_to_rect_truncates() {
        // 10% of 333 = 33.3 → 33; 80% of 333 = 266.4 → 266
        let crop = CropSpec {
            left: 10.0,
            right: 10.0,
            top: 25.0,
            bottom: 0.0,
        };
        let rect = crop_to_rect(&crop, Size::new(333, 101));
        assert_eq!(rect.x, 33);
        assert_eq!(rect.width, 266);
        // 25% of 101 = 25.25 → 25; 75% of 101 = 75.75 → 75
        assert_eq!(rect.y, 25);
        assert_eq!(rect.height, 75);
    }

    #[test]
    fn crop_to_rect_split_crop_hits_exact_height() {
        let crop = CropSpec::along(Axis::Vertical, 30.0, 20.0);
        let rect = crop_to_rect(&crop, Size::new(1000, 800));
        assert_eq!(
            rect,
            PixelRect {
                x: 0,
                y: 240,
                width: 1000,
                height: 400
            }
        );
    }

    #[test]
    fn crop_to_rect_stays_in_bounds_near_limit() {
        let crop = CropSpec {
            top: 49.99,
            bottom: 49.99,
            left: 99.0,
            right: 0.99,
        };
        let size = Size::new(7, 9);
        let rect = crop_to_rect(&crop, size);
        assert!(rect.x + rect.width <= size.width);
        assert!(rect.y + rect.height <= size.height);
    }

    #[test]
    fn crop_to_rect_is_deterministic() {
        let crop = CropSpec {
            top: 12.5,
            bottom: 3.3,
            left: 7.7,
            right: 1.1,
        };
        let size = Size::new(641, 479);
        assert_eq!(crop_to_rect(&crop, size), crop_to_rect(&crop, size));
    }

    // =========================================================================
    // resolve_target
    // =========================================================================

    #[test]
    fn resolve_target_derives_height() {
        assert_eq!(
            resolve_target(Size::new(2000, 1500), Size::new(800, 0)),
            Size::new(800, 600)
        );
    }

    #[test]
    fn resolve_target_derives_width() {
        assert_eq!(
            resolve_target(Size::new(1500, 2000), Size::new(0, 800)),
            Size::new(600, 800)
        );
    }

    #[test]
    fn resolve_target_never_derives_zero() {
        assert_eq!(
            resolve_target(Size::new(10_000, 1), Size::new(10, 0)),
            Size::new(10, 1)
        );
    }

    #[test]
    fn resolve_target_full_target_unchanged() {
        assert_eq!(
            resolve_target(Size::new(10, 10), Size::new(3, 7)),
            Size::new(3, 7)
        );
    }

    // =========================================================================
    // stages
    // =========================================================================

    #[test]
    fn accommodate_wider_target_fixes_width() {
        // WAR = 1.0 > HAR = 0.5 → width matches, height overflows
        assert_eq!(
            accommodate_size(Size::new(1000, 800), Size::new(1000, 400)),
            Size::new(1000, 800)
        );
    }

    #[test]
    fn accommodate_taller_target_fixes_height() {
        // WAR = 0.3125 < HAR = 0.5556 → height matches, width = round(888.9)
        assert_eq!(
            accommodate_size(Size::new(1600, 900), Size::new(500, 500)),
            Size::new(889, 500)
        );
    }

    #[test]
    fn accommodate_upscales_small_source() {
        assert_eq!(
            accommodate_size(Size::new(100, 50), Size::new(400, 400)),
            Size::new(800, 400)
        );
    }

    #[test]
    fn free_axis_follows_matching_width() {
        assert_eq!(
            free_axis(Size::new(1000, 800), Size::new(1000, 400)),
            Axis::Vertical
        );
        assert_eq!(
            free_axis(Size::new(889, 500), Size::new(500, 500)),
            Axis::Horizontal
        );
    }

    #[test]
    fn stretch_bounded_by_tolerance() {
        // 800 * 0.9 = 720, still above 400
        assert_eq!(
            stretch_size(Size::new(1000, 800), Size::new(1000, 400), 10.0),
            Size::new(1000, 720)
        );
    }

    #[test]
    fn stretch_zero_tolerance_changes_nothing() {
        assert_eq!(
            stretch_size(Size::new(1000, 800), Size::new(1000, 400), 0.0),
            Size::new(1000, 800)
        );
    }

    #[test]
    fn stretch_never_overshoots_target() {
        // 800 * 0.8 = 640 < 700 → clamp to 700
        assert_eq!(
            stretch_size(Size::new(1000, 800), Size::new(1000, 700), 20.0),
            Size::new(1000, 700)
        );
    }

    /// Characterization: once the tolerance-limited squeeze would undershoot,
    /// the target is chosen outright, so tolerances of 20% and 90% give the
    /// same result even though only 12.5% of squeezing is needed.
    #[test]
    fn stretch_tolerance_has_no_effect_past_clamp() {
        let current = Size::new(1000, 800);
        let target = Size::new(1000, 700);
        assert_eq!(
            stretch_size(current, target, 20.0),
            stretch_size(current, target, 90.0)
        );
        assert_eq!(stretch_size(current, target, 12.5), Size::new(1000, 700));
    }

    #[test]
    fn stretch_horizontal_free_axis() {
        // height fixed at 500; width 889 * 0.9 = 800.1 → 800
        assert_eq!(
            stretch_size(Size::new(889, 500), Size::new(500, 500), 10.0),
            Size::new(800, 500)
        );
    }

    #[test]
    fn minimize_crop_unreachable() {
        // 800 * (100 - 20) / 100 = 640 > 100
        let err = minimize_crop(Size::new(1000, 800), Size::new(1000, 100), 10.0).unwrap_err();
        assert_eq!(
            err,
            FitError::ResizeUnreachable {
                axis: Axis::Vertical,
                free_dimension: 800,
                target_dimension: 100,
                crop_tolerance: 10.0,
            }
        );
    }

    #[test]
    fn minimize_crop_split_between_edges() {
        // one side: 560 > 400 (insufficient); two sides: 320 <= 400
        let crop = minimize_crop(Size::new(1000, 800), Size::new(1000, 400), 30.0).unwrap();
        assert_eq!(crop.top, 30.0);
        assert!((crop.bottom - 20.0).abs() < 1e-9);
        assert_eq!((crop.left, crop.right), (0.0, 0.0));
    }

    #[test]
    fn minimize_crop_single_edge() {
        // one side: 800 * 0.5 = 400 <= 600 → top absorbs 25%
        let crop = minimize_crop(Size::new(1000, 800), Size::new(1000, 600), 50.0).unwrap();
        assert!((crop.top - 25.0).abs() < 1e-9);
        assert_eq!(crop.bottom, 0.0);
    }

    #[test]
    fn minimize_crop_horizontal_uses_right_then_left() {
        let crop = minimize_crop(Size::new(800, 500), Size::new(500, 500), 20.0).unwrap();
        assert_eq!(crop.right, 20.0);
        assert!((crop.left - 17.5).abs() < 1e-9);
        assert_eq!((crop.top, crop.bottom), (0.0, 0.0));
    }

    #[test]
    fn minimize_crop_exact_two_side_limit_is_reachable() {
        // 800 * (100 - 50) / 100 = 400 == target
        let crop = minimize_crop(Size::new(1000, 800), Size::new(1000, 400), 25.0).unwrap();
        assert_eq!(crop.top, 25.0);
        assert!((crop.bottom - 25.0).abs() < 1e-9);
    }

    // =========================================================================
    // fit
    // =========================================================================

    #[test]
    fn fit_unreachable_with_small_crop_tolerance() {
        let result = fit(
            Size::new(1000, 800),
            Size::new(1000, 100),
            &tolerances(0.0, 10.0),
        );
        assert!(matches!(result, Err(FitError::ResizeUnreachable { .. })));
    }

    #[test]
    fn fit_split_crop_scenario() {
        let plan = fit(
            Size::new(1000, 800),
            Size::new(1000, 400),
            &tolerances(0.0, 30.0),
        )
        .unwrap();

        // Accommodate and Stretch are no-ops here; only the crop remains.
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].stage, FitStage::Crop);
        assert_eq!(plan.final_size, Size::new(1000, 400));
    }

    #[test]
    fn fit_all_three_stages() {
        let plan = fit(
            Size::new(1600, 900),
            Size::new(500, 500),
            &tolerances(10.0, 20.0),
        )
        .unwrap();

        let stages: Vec<FitStage> = plan.steps.iter().map(|s| s.stage).collect();
        assert_eq!(
            stages,
            vec![FitStage::Accommodate, FitStage::Stretch, FitStage::Crop]
        );
        assert_eq!(plan.steps[0].result, Size::new(889, 500));
        assert_eq!(plan.steps[1].result, Size::new(800, 500));
        assert_eq!(plan.final_size, Size::new(500, 500));
    }

    #[test]
    fn fit_stops_after_stretch_when_exact() {
        let plan = fit(
            Size::new(1000, 800),
            Size::new(1000, 700),
            &tolerances(20.0, 0.0),
        )
        .unwrap();
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].stage, FitStage::Stretch);
        assert_eq!(plan.final_size, Size::new(1000, 700));
    }

    #[test]
    fn fit_stops_after_accommodate_when_exact() {
        // Same aspect, different scale: accommodate alone lands on target.
        let plan = fit(
            Size::new(800, 600),
            Size::new(400, 300),
            &tolerances(0.0, 0.0),
        )
        .unwrap();
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].stage, FitStage::Accommodate);
        assert_eq!(plan.final_size, Size::new(400, 300));
    }

    #[test]
    fn fit_already_at_target_plans_nothing() {
        let plan = fit(Size::new(10, 10), Size::new(10, 10), &FitSpec::default()).unwrap();
        assert!(plan.steps.is_empty());
        assert_eq!(plan.final_size, Size::new(10, 10));
    }

    #[test]
    fn fit_upscale_then_crop() {
        let plan = fit(
            Size::new(100, 50),
            Size::new(300, 300),
            &tolerances(0.0, 50.0),
        )
        .unwrap();
        assert_eq!(plan.steps[0].result, Size::new(600, 300));
        assert_eq!(plan.final_size, Size::new(300, 300));
    }

    #[test]
    fn plan_resize_same_aspect_is_direct() {
        let plan = plan_resize(
            Size::new(1920, 1080),
            Size::new(1280, 720),
            &FitSpec::default(),
        )
        .unwrap();
        assert_eq!(plan, ResizePlan::Direct(Size::new(1280, 720)));
    }

    #[test]
    fn plan_resize_derived_dimension_is_direct() {
        let plan = plan_resize(Size::new(1000, 333), Size::new(0, 100), &FitSpec::default())
            .unwrap();
        assert_eq!(plan, ResizePlan::Direct(Size::new(300, 100)));
    }

    #[test]
    fn plan_resize_mismatched_aspect_runs_stages() {
        let plan = plan_resize(
            Size::new(1600, 900),
            Size::new(500, 500),
            &tolerances(10.0, 20.0),
        )
        .unwrap();
        match &plan {
            ResizePlan::Fit(fit_plan) => assert_eq!(fit_plan.steps.len(), 3),
            other => panic!("expected staged plan, got {other:?}"),
        }
        assert_eq!(plan.final_size(), Size::new(500, 500));
    }

    #[test]
    fn plan_resize_rejects_zero_sized_source() {
        for current in [Size::new(0, 900), Size::new(1600, 0), Size::new(0, 0)] {
            assert_eq!(
                plan_resize(current, Size::new(500, 500), &tolerances(10.0, 20.0)),
                Err(FitError::ZeroDimension {
                    current,
                    target: Size::new(500, 500)
                })
            );
        }
    }

    #[test]
    fn plan_resize_rejects_empty_target() {
        assert!(matches!(
            plan_resize(Size::new(10, 10), Size::new(0, 0), &FitSpec::default()),
            Err(FitError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn fit_rejects_zero_sizes() {
        assert!(matches!(
            fit(Size::new(0, 10), Size::new(5, 5), &FitSpec::default()),
            Err(FitError::ZeroDimension { .. })
        ));
        assert!(matches!(
            fit(Size::new(10, 10), Size::new(5, 0), &FitSpec::default()),
            Err(FitError::ZeroDimension { .. })
        ));
    }
}
