use clap::{Parser, Subcommand};
use imagefit::imaging::{self, RustBackend};
use imagefit::types::Size;
use imagefit::{batch, config, output, pipeline};
use log::warn;
use std::path::{Path, PathBuf};

/// Fit tolerance flags, shared by every command that resizes.
#[derive(clap::Args, Clone, Default)]
struct FitArgs {
    /// Max percent the free dimension may be stretched or squeezed
    #[arg(long)]
    stretch: Option<f64>,
    /// Max percent cropped from each edge of the free axis
    #[arg(long)]
    crop_tolerance: Option<f64>,
}

/// Flags overriding the `[resize]`, `[crop]`, and `[fit]` config sections.
#[derive(clap::Args, Clone, Default)]
struct SettingsArgs {
    /// Target width in pixels (0 = derive from height)
    #[arg(long)]
    width: Option<u32>,
    /// Target height in pixels (0 = derive from width)
    #[arg(long)]
    height: Option<u32>,
    /// Percent removed from the top edge before resizing
    #[arg(long)]
    crop_top: Option<f64>,
    /// Percent removed from the bottom edge before resizing
    #[arg(long)]
    crop_bottom: Option<f64>,
    /// Percent removed from the left edge before resizing
    #[arg(long)]
    crop_left: Option<f64>,
    /// Percent removed from the right edge before resizing
    #[arg(long)]
    crop_right: Option<f64>,
    #[command(flatten)]
    fit: FitArgs,
}

#[derive(Parser)]
#[command(name = "imagefit")]
#[command(about = "Crop and resize images to an exact size")]
#[command(long_about = "\
Crop and resize images to an exact size

When the source and target aspect ratios differ, imagefit scales the image
until it covers the target, stretches the overhang within --stretch percent,
then crops what is left within --crop-tolerance percent per edge. If that
is not enough the image is rejected instead of distorted.

Settings are layered, each overriding the previous:

  stock defaults  →  imagefit.toml  →  command-line flags

Output is always PNG.

Run 'imagefit gen-config' to generate a documented imagefit.toml.")]
#[command(version)]
struct Cli {
    /// Config file (optional; stock defaults when missing)
    #[arg(long, default_value = "imagefit.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Crop and resize a single image
    Process {
        input: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Resize an image to a fixed thumbnail size, ignoring aspect ratio
    Thumb {
        input: PathBuf,
        output: PathBuf,
        /// Thumbnail size as WIDTHxHEIGHT
        #[arg(long, default_value = "200x200")]
        size: Size,
    },
    /// Process every image under a directory in parallel
    Batch {
        source: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        settings: SettingsArgs,
        /// Max parallel workers (defaults to all cores)
        #[arg(long)]
        max_processes: Option<usize>,
    },
    /// Print an image's pixel size
    Measure { input: PathBuf },
    /// Show how one size would be fitted into another, without any image
    Plan {
        /// Source size as WIDTHxHEIGHT
        #[arg(long)]
        from: Size,
        /// Target size as WIDTHxHEIGHT
        #[arg(long)]
        to: Size,
        #[command(flatten)]
        fit: FitArgs,
    },
    /// Print a stock imagefit.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let backend = RustBackend::new();

    match cli.command {
        Command::Process {
            input,
            output: output_path,
            settings,
        } => {
            let cfg = config::load_config(&cli.config, settings.overrides())?;
            let settings = cfg.settings();
            let bytes = std::fs::read(&input)?;
            let original = pipeline::measure_size(&backend, &bytes)?;
            let names = pipeline::build(&settings).names();
            if !names.is_empty() {
                warn_unless_png(&output_path);
            }
            let result = pipeline::process(&backend, bytes, &settings)?;
            std::fs::write(&output_path, &result.bytes)?;
            output::print_process_result(&input, &output_path, original, result.size, &names);
        }
        Command::Thumb {
            input,
            output: output_path,
            size,
        } => {
            let bytes = std::fs::read(&input)?;
            let original = pipeline::measure_size(&backend, &bytes)?;
            warn_unless_png(&output_path);
            let result = imaging::make_thumbnail(&backend, bytes, size)?;
            std::fs::write(&output_path, &result.bytes)?;
            output::print_process_result(
                &input,
                &output_path,
                original,
                result.size,
                &["thumbnail"],
            );
        }
        Command::Batch {
            source,
            output: output_dir,
            settings,
            max_processes,
        } => {
            let mut overrides = settings.overrides();
            if let Some(n) = max_processes {
                set_override(&mut overrides, "processing", "max_processes", n as i64);
            }
            let cfg = config::load_config(&cli.config, overrides)?;
            init_thread_pool(&cfg.processing);

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_batch_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let report =
                batch::process_batch(&backend, &source, &output_dir, &cfg.settings(), Some(tx))?;
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;
            output::print_batch_summary(&report, &output_dir);
            if !report.failed.is_empty() {
                return Err(format!("{} of the images failed", report.failed.len()).into());
            }
        }
        Command::Measure { input } => {
            let bytes = std::fs::read(&input)?;
            let size = pipeline::measure_size(&backend, &bytes)?;
            output::print_measure(&input, size);
        }
        Command::Plan { from, to, fit } => {
            let cfg = config::load_config(&cli.config, fit.overrides())?;
            let plan = imaging::plan_resize(from, to, &cfg.fit);
            if let Err(e @ imaging::FitError::ZeroDimension { .. }) = &plan {
                return Err(e.clone().into());
            }
            output::print_fit_plan(from, to, &plan);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

impl FitArgs {
    fn apply(&self, overrides: &mut Option<toml::Value>) {
        if let Some(v) = self.stretch {
            set_override(overrides, "fit", "stretch", v);
        }
        if let Some(v) = self.crop_tolerance {
            set_override(overrides, "fit", "crop", v);
        }
    }

    fn overrides(&self) -> Option<toml::Value> {
        let mut overrides = None;
        self.apply(&mut overrides);
        overrides
    }
}

impl SettingsArgs {
    /// The flags that were given, as a TOML layer over the config file.
    fn overrides(&self) -> Option<toml::Value> {
        let mut overrides = None;
        if let Some(v) = self.width {
            set_override(&mut overrides, "resize", "width", i64::from(v));
        }
        if let Some(v) = self.height {
            set_override(&mut overrides, "resize", "height", i64::from(v));
        }
        let edges = [
            ("top", self.crop_top),
            ("bottom", self.crop_bottom),
            ("left", self.crop_left),
            ("right", self.crop_right),
        ];
        for (edge, value) in edges {
            if let Some(v) = value {
                set_override(&mut overrides, "crop", edge, v);
            }
        }
        self.fit.apply(&mut overrides);
        overrides
    }
}

/// Set `section.key` in an override layer, creating the layer on first use.
fn set_override(
    overrides: &mut Option<toml::Value>,
    section: &str,
    key: &str,
    value: impl Into<toml::Value>,
) {
    let root = overrides.get_or_insert_with(|| toml::Value::Table(toml::Table::new()));
    if let toml::Value::Table(root) = root {
        let section = root
            .entry(section)
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        if let toml::Value::Table(section) = section {
            section.insert(key.to_string(), value.into());
        }
    }
}

/// Processed images are always PNG, whatever the output path says.
fn warn_unless_png(path: &Path) {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(imaging::rust_backend::OUTPUT_EXTENSION));
    if !is_png {
        warn!(
            "{} will contain PNG data regardless of its extension",
            path.display()
        );
    }
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
