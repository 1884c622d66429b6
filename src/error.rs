use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tetris-weather operations
#[derive(Error, Diagnostic, Debug)]
pub enum WeatherError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tetris_weather::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tetris_weather::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Layout error: {message}")]
    #[diagnostic(code(tetris_weather::layout))]
    Layout {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tetris_weather::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(tetris_weather::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, WeatherError>;
