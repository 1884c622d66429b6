//! Generate command implementation.
//!
//! Builds the scenes, writes their SVGs and rasterizes them.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::convert::{save_and_convert, Converter, ImageMagick, Report};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::scenes::{build_scenes, SceneKind};

/// Write the mockup SVGs and convert them to PNG
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Output directory (default: config `output`, else current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Converter program used for PNG output
    #[arg(long)]
    pub converter: Option<String>,

    /// Only write SVGs
    #[arg(long)]
    pub no_raster: bool,

    /// Generate only these scenes (repeatable)
    #[arg(long, value_enum)]
    pub only: Vec<SceneKind>,

    /// Config file (default: ./tetris-weather.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only print warnings
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new().quiet(args.quiet);
    let config = Config::discover(args.config.as_deref(), Path::new("."))?;
    generate(&args, &config, &printer).map(|_| ())
}

/// Resolve CLI flags over the config and run the batch.
pub fn generate(args: &GenerateArgs, config: &Config, printer: &Printer) -> Result<Report> {
    let palette = config.palette()?;
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    let kinds: &[SceneKind] = if args.only.is_empty() {
        &SceneKind::ALL
    } else {
        &args.only
    };
    let scenes = build_scenes(kinds, &palette)?;

    let converter = ImageMagick::new(
        args.converter
            .clone()
            .unwrap_or_else(|| config.converter.clone()),
    );
    let converter: Option<&dyn Converter> = if args.no_raster || !config.raster {
        None
    } else {
        Some(&converter)
    };

    let report = save_and_convert(&scenes, &output, converter, printer)?;

    let mut summary = format!(
        "{} to {}",
        plural(report.outcomes().len(), "scene", "scenes"),
        display_path(&output)
    );
    if report.warnings() > 0 {
        summary.push_str(&format!(
            " ({})",
            plural(report.warnings(), "conversion warning", "conversion warnings")
        ));
    }
    printer.status("Finished", &summary);

    Ok(report)
}
