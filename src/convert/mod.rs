//! Raster conversion through an external program.
//!
//! Drawing code never touches processes; the batch driver talks to a
//! [`Converter`], which tests can replace with an in-process double.

mod batch;

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::scenes::RASTER_EXT;

pub use batch::{save_and_convert, Outcome, RasterStatus, Report};

/// Default converter program (ImageMagick).
pub const DEFAULT_PROGRAM: &str = "convert";

/// Why a single conversion did not produce a raster file.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("`{program}` command not found; SVG only created")]
    NotFound { program: String },

    #[error("`{program}` failed with {}", exit_label(.code))]
    Failed { program: String, code: Option<i32> },

    #[error("could not run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("could not remove stale `{}`: {source}", .path.display())]
    Stale {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (killed by signal)".to_string(),
    }
}

/// Turns a vector file into a raster sibling.
pub trait Converter {
    /// Program name, for messages.
    fn program(&self) -> &str;

    /// Convert `input`, returning the path of the raster file written.
    fn convert(&self, input: &Path) -> Result<PathBuf, ConversionError>;
}

/// Raster path for a vector file: same stem, raster extension.
pub fn raster_path(input: &Path) -> PathBuf {
    input.with_extension(RASTER_EXT)
}

/// Runs `<program> <input> <output>` and waits for it to finish.
#[derive(Debug, Clone)]
pub struct ImageMagick {
    program: String,
}

impl ImageMagick {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ImageMagick {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Converter for ImageMagick {
    fn program(&self) -> &str {
        &self.program
    }

    fn convert(&self, input: &Path) -> Result<PathBuf, ConversionError> {
        let output = raster_path(input);

        let status = Command::new(&self.program)
            .arg(input)
            .arg(&output)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ConversionError::NotFound {
                    program: self.program.clone(),
                },
                _ => ConversionError::Spawn {
                    program: self.program.clone(),
                    source,
                },
            })?;

        if !status.success() {
            return Err(ConversionError::Failed {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        Ok(output)
    }
}
