//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Process
//!
//! ```text
//! photos/dawn.jpg → out/dawn.png
//!     1600x900 → 500x500
//!     Operations: crop, resize
//! ```
//!
//! ## Batch
//!
//! ```text
//! dawn.jpg → dawn.png
//!     1600x900 → 500x500
//! broken.png: FAILED
//!     Image backend failed: decode failed: ...
//!
//! Processed 1 image, 1 failed → out/
//! Report: out/imagefit-report.json
//! ```
//!
//! ## Plan
//!
//! ```text
//! Fit 1600x900 → 500x500
//!     1. accommodate: resize to 889x500 → 889x500
//!     2. stretch: resize to 800x500 → 800x500
//!     3. crop: crop top 0.00% bottom 0.00% left 17.50% right 20.00% → 500x500
//!     Result: 500x500
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::batch::{BatchEvent, BatchReport, REPORT_FILENAME};
use crate::imaging::{FitError, ResizePlan};
use crate::types::Size;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn operations_line(operations: &[&str]) -> String {
    if operations.is_empty() {
        format!("{}Operations: none (copied unchanged)", indent(1))
    } else {
        format!("{}Operations: {}", indent(1), operations.join(", "))
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Single image
// ============================================================================

/// Format the result of processing one file.
pub fn format_process_result(
    source: &Path,
    output: &Path,
    original: Size,
    result: Size,
    operations: &[&str],
) -> Vec<String> {
    vec![
        format!("{} → {}", source.display(), output.display()),
        format!("{}{original} → {result}", indent(1)),
        operations_line(operations),
    ]
}

pub fn print_process_result(
    source: &Path,
    output: &Path,
    original: Size,
    result: Size,
    operations: &[&str],
) {
    print_lines(format_process_result(
        source, output, original, result, operations,
    ));
}

/// Format a measured image size with its aspect ratio.
pub fn format_measure(source: &Path, size: Size) -> Vec<String> {
    let mut lines = vec![format!("{}: {size}", source.display())];
    if size.height > 0 {
        lines.push(format!(
            "{}Aspect ratio: {:.4}",
            indent(1),
            size.aspect_ratio()
        ));
    }
    lines
}

pub fn print_measure(source: &Path, size: Size) {
    print_lines(format_measure(source, size));
}

// ============================================================================
// Batch
// ============================================================================

/// Format one batch progress event.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Processed(done) => vec![
            format!("{} → {}", done.source, done.output),
            format!("{}{} → {}", indent(1), done.original, done.result),
        ],
        BatchEvent::Failed(failed) => vec![
            format!("{}: FAILED", failed.source),
            format!("{}{}", indent(1), failed.error),
        ],
    }
}

/// Format the closing summary of a batch run.
pub fn format_batch_summary(report: &BatchReport, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![String::new()];
    let processed = plural(report.processed.len(), "image");
    if report.failed.is_empty() {
        lines.push(format!("Processed {processed} → {}", output_dir.display()));
    } else {
        lines.push(format!(
            "Processed {processed}, {} failed → {}",
            report.failed.len(),
            output_dir.display()
        ));
    }
    lines.push(format!(
        "Report: {}",
        output_dir.join(REPORT_FILENAME).display()
    ));
    lines
}

pub fn print_batch_summary(report: &BatchReport, output_dir: &Path) {
    print_lines(format_batch_summary(report, output_dir));
}

// ============================================================================
// Fit plan preview
// ============================================================================

/// Format a planned resize, or the reason it cannot be done.
pub fn format_fit_plan(from: Size, to: Size, plan: &Result<ResizePlan, FitError>) -> Vec<String> {
    let mut lines = vec![format!("Fit {from} → {to}")];
    match plan {
        Ok(ResizePlan::Direct(size)) => {
            lines.push(format!("{}direct resize → {size}", indent(1)));
        }
        Ok(ResizePlan::Fit(fit)) => {
            if fit.steps.is_empty() {
                lines.push(format!("{}already at target", indent(1)));
            }
            for (i, step) in fit.steps.iter().enumerate() {
                lines.push(format!(
                    "{}{}. {}: {} → {}",
                    indent(1),
                    i + 1,
                    step.stage,
                    step.op,
                    step.result
                ));
            }
            lines.push(format!("{}Result: {}", indent(1), fit.final_size));
        }
        Err(e @ FitError::ResizeUnreachable { .. }) => {
            lines.push(format!("{}Unreachable: {e}", indent(1)));
        }
        Err(e) => {
            lines.push(format!("{}Invalid: {e}", indent(1)));
        }
    }
    lines
}

pub fn print_fit_plan(from: Size, to: Size, plan: &Result<ResizePlan, FitError>) {
    print_lines(format_fit_plan(from, to, plan));
}
