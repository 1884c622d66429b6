//! tetris-weather - Falling-blocks weather mockup generator
//!
//! Draws one app screen and three widget sizes for a weather app themed
//! as a falling-blocks puzzle, writes them as SVG and rasterizes them with
//! an external converter.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod render;
pub mod scenes;
pub mod svg;
pub mod types;

pub use config::Config;
pub use convert::{save_and_convert, ConversionError, Converter, ImageMagick, Outcome, RasterStatus, Report};
pub use error::{Result, WeatherError};
pub use render::{draw_grid, draw_piece};
pub use scenes::{
    all_scenes, app_main, build_scenes, widget_large, widget_medium, widget_small, Scene,
    SceneKind,
};
pub use svg::{assemble, rect, text, Document, Fragment, LinearGradient, Paint};
pub use types::{Colour, Grid, Palette, Piece, Swatch};
