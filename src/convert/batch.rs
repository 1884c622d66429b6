//! Batch driver: write each scene's SVG, then try to rasterize it.
//!
//! Conversion failures, including a stale raster that cannot be removed,
//! are isolated per scene and reported as warnings. Only file system errors
//! while writing documents stop the batch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, WeatherError};
use crate::output::{display_path, Printer};
use crate::scenes::{Scene, SceneKind};

use super::{raster_path, ConversionError, Converter};

/// What happened to one scene's raster output.
#[derive(Debug)]
pub enum RasterStatus {
    /// The converter produced a raster file. `dimensions` is `None` when the
    /// file could not be read back as an image.
    Converted {
        path: PathBuf,
        dimensions: Option<(u32, u32)>,
    },
    /// Raster conversion was disabled.
    Skipped,
    /// The conversion stage failed; no fresh raster file exists.
    Failed(ConversionError),
}

/// The result of saving one scene.
#[derive(Debug)]
pub struct Outcome {
    pub kind: SceneKind,
    pub vector: PathBuf,
    pub raster: RasterStatus,
}

/// Per-scene outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of scenes whose conversion failed.
    pub fn warnings(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.raster, RasterStatus::Failed(_)))
            .count()
    }

    /// Number of scenes with a raster file.
    pub fn converted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.raster, RasterStatus::Converted { .. }))
            .count()
    }
}

/// Write every scene to `<out_dir>/<name>.svg` and convert it with
/// `converter`, or skip rasterizing when `converter` is `None`.
///
/// Scenes are processed one at a time, in order. A stale raster file from
/// an earlier run is removed before converting, so a failed conversion
/// never leaves an outdated image behind.
pub fn save_and_convert(
    scenes: &[Scene],
    out_dir: &Path,
    converter: Option<&dyn Converter>,
    printer: &Printer,
) -> Result<Report> {
    fs::create_dir_all(out_dir).map_err(|e| WeatherError::Io {
        path: out_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut report = Report::default();

    for scene in scenes {
        let vector = out_dir.join(scene.kind.vector_file());
        fs::write(&vector, scene.svg()).map_err(|e| WeatherError::Io {
            path: vector.clone(),
            message: format!("Failed to write SVG: {}", e),
        })?;
        printer.status("Writing", &display_path(&vector));

        let raster = match converter {
            Some(converter) => rasterize(scene, &vector, converter, printer),
            None => RasterStatus::Skipped,
        };

        report.outcomes.push(Outcome {
            kind: scene.kind,
            vector,
            raster,
        });
    }

    Ok(report)
}

fn rasterize(
    scene: &Scene,
    vector: &Path,
    converter: &dyn Converter,
    printer: &Printer,
) -> RasterStatus {
    let converted = remove_stale(&raster_path(vector)).and_then(|()| converter.convert(vector));

    match converted {
        Ok(path) => {
            let dimensions = image::image_dimensions(&path).ok();
            let size = match dimensions {
                Some((w, h)) => format!("{}x{}", w, h),
                None => "unreadable".to_string(),
            };
            printer.status(
                "Converted",
                &format!(
                    "{} {}",
                    display_path(&path),
                    printer.dim(&format!("({}, {})", size, converter.program()))
                ),
            );
            RasterStatus::Converted { path, dimensions }
        }
        Err(err) => {
            printer.warning(&format!("{}: {}", scene.name(), err));
            RasterStatus::Failed(err)
        }
    }
}

fn remove_stale(path: &Path) -> std::result::Result<(), ConversionError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ConversionError::Stale {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ImageMagick;
    use crate::scenes::all_scenes;
    use crate::types::Palette;
    use image::RgbaImage;
    use tempfile::tempdir;

    /// Fails every conversion as if the program exited with status 1.
    struct AlwaysFails;

    impl Converter for AlwaysFails {
        fn program(&self) -> &str {
            "always-fails"
        }

        fn convert(&self, _input: &Path) -> std::result::Result<PathBuf, ConversionError> {
            Err(ConversionError::Failed {
                program: self.program().to_string(),
                code: Some(1),
            })
        }
    }

    /// Writes a blank PNG of a fixed size next to the input.
    struct BlankPng(u32, u32);

    impl Converter for BlankPng {
        fn program(&self) -> &str {
            "blank-png"
        }

        fn convert(&self, input: &Path) -> std::result::Result<PathBuf, ConversionError> {
            let output = raster_path(input);
            RgbaImage::new(self.0, self.1)
                .save(&output)
                .map_err(|e| ConversionError::Spawn {
                    program: self.program().to_string(),
                    source: io::Error::new(io::ErrorKind::Other, e.to_string()),
                })?;
            Ok(output)
        }
    }

    fn scenes() -> Vec<Scene> {
        all_scenes(&Palette::weather()).unwrap()
    }

    fn assert_files(dir: &Path, ext: &str, present: bool) {
        for kind in SceneKind::ALL {
            let path = dir.join(format!("{}.{}", kind.name(), ext));
            assert_eq!(path.exists(), present, "{}", path.display());
        }
    }

    #[test]
    fn test_failing_converter_keeps_going() {
        let dir = tempdir().unwrap();
        let printer = Printer::default().quiet(true);

        let report = save_and_convert(&scenes(), dir.path(), Some(&AlwaysFails), &printer).unwrap();

        assert_files(dir.path(), "svg", true);
        assert_files(dir.path(), "png", false);
        assert_eq!(report.warnings(), 4);
        assert_eq!(report.converted_count(), 0);

        let warnings = printer.warnings();
        assert_eq!(warnings.len(), 4);
        assert_eq!(warnings[0], "app_main: `always-fails` failed with exit status 1");
        assert!(warnings[3].starts_with("widget_large: "));
    }

    #[test]
    fn test_missing_converter_keeps_going() {
        let dir = tempdir().unwrap();
        let printer = Printer::default().quiet(true);
        let converter = ImageMagick::new("tetris-weather-no-such-converter");

        let report = save_and_convert(&scenes(), dir.path(), Some(&converter), &printer).unwrap();

        assert_files(dir.path(), "svg", true);
        assert_files(dir.path(), "png", false);
        assert_eq!(report.warnings(), 4);

        let warnings = printer.warnings();
        assert_eq!(warnings.len(), 4);
        assert_eq!(
            warnings[1],
            "widget_small: `tetris-weather-no-such-converter` command not found; SVG only created"
        );
        assert!(report
            .outcomes()
            .iter()
            .all(|o| matches!(o.raster, RasterStatus::Failed(ConversionError::NotFound { .. }))));
    }

    #[test]
    fn test_successful_conversion_reads_back_size() {
        let dir = tempdir().unwrap();
        let printer = Printer::default().quiet(true);

        let report =
            save_and_convert(&scenes(), dir.path(), Some(&BlankPng(32, 24)), &printer).unwrap();

        assert_files(dir.path(), "png", true);
        assert_eq!(report.converted_count(), 4);
        assert!(printer.warnings().is_empty());
        match &report.outcomes()[0].raster {
            RasterStatus::Converted { path, dimensions } => {
                assert_eq!(path, &dir.path().join("app_main.png"));
                assert_eq!(*dimensions, Some((32, 24)));
            }
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn test_stale_raster_removed_on_failure() {
        let dir = tempdir().unwrap();
        let stale = dir.path().join("widget_small.png");
        fs::write(&stale, b"old").unwrap();

        let printer = Printer::default().quiet(true);
        save_and_convert(&scenes(), dir.path(), Some(&AlwaysFails), &printer).unwrap();

        assert!(!stale.exists());
    }

    #[test]
    fn test_unremovable_stale_raster_is_a_warning() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("widget_small.png")).unwrap();
        let printer = Printer::default().quiet(true);

        let report = save_and_convert(&scenes(), dir.path(), Some(&AlwaysFails), &printer).unwrap();

        assert_files(dir.path(), "svg", true);
        assert_eq!(report.outcomes().len(), 4);
        assert!(matches!(
            report.outcomes()[1].raster,
            RasterStatus::Failed(ConversionError::Stale { .. })
        ));

        let warnings = printer.warnings();
        assert_eq!(warnings.len(), 4);
        assert!(warnings[1].starts_with("widget_small: could not remove stale `"));
        assert!(warnings[2].starts_with("widget_medium: `always-fails` failed"));
    }

    #[test]
    fn test_no_converter_skips_raster() {
        let dir = tempdir().unwrap();
        let printer = Printer::default().quiet(true);

        let report = save_and_convert(&scenes(), dir.path(), None, &printer).unwrap();

        assert_files(dir.path(), "svg", true);
        assert_files(dir.path(), "png", false);
        assert_eq!(report.warnings(), 0);
        assert!(report
            .outcomes()
            .iter()
            .all(|o| matches!(o.raster, RasterStatus::Skipped)));
    }

    #[test]
    fn test_written_svg_matches_scene() {
        let dir = tempdir().unwrap();
        let scenes = scenes();
        let printer = Printer::default().quiet(true);
        save_and_convert(&scenes, dir.path(), None, &printer).unwrap();

        let written = fs::read_to_string(dir.path().join("widget_medium.svg")).unwrap();
        assert_eq!(written, scenes[2].svg());
    }

    #[test]
    fn test_creates_nested_output_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let printer = Printer::default().quiet(true);

        save_and_convert(&scenes(), &nested, None, &printer).unwrap();
        assert!(nested.join("app_main.svg").exists());
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"").unwrap();
        let printer = Printer::default().quiet(true);

        let err = save_and_convert(&scenes(), &blocker.join("out"), None, &printer).unwrap_err();
        assert!(matches!(err, WeatherError::Io { .. }));
    }
}
