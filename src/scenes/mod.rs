//! The fixed set of mockup scenes.
//!
//! Each builder hard-codes its own layout, captions and overlays and
//! composes them with the shared grid and piece renderers.

mod app;
mod widgets;

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::svg::Document;
use crate::types::Palette;

pub use app::app_main;
pub use widgets::{widget_large, widget_medium, widget_small};

/// File extension of vector documents.
pub const VECTOR_EXT: &str = "svg";
/// File extension of raster conversions.
pub const RASTER_EXT: &str = "png";

/// The named scenes this tool generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SceneKind {
    AppMain,
    WidgetSmall,
    WidgetMedium,
    WidgetLarge,
}

impl SceneKind {
    /// All scenes in generation order.
    pub const ALL: [SceneKind; 4] = [
        SceneKind::AppMain,
        SceneKind::WidgetSmall,
        SceneKind::WidgetMedium,
        SceneKind::WidgetLarge,
    ];

    /// The scene name, also used as the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::AppMain => "app_main",
            SceneKind::WidgetSmall => "widget_small",
            SceneKind::WidgetMedium => "widget_medium",
            SceneKind::WidgetLarge => "widget_large",
        }
    }

    /// Build this scene.
    pub fn build(self, palette: &Palette) -> Result<Scene> {
        match self {
            SceneKind::AppMain => app_main(palette),
            SceneKind::WidgetSmall => widget_small(palette),
            SceneKind::WidgetMedium => widget_medium(palette),
            SceneKind::WidgetLarge => widget_large(palette),
        }
    }

    pub fn vector_file(self) -> String {
        format!("{}.{}", self.name(), VECTOR_EXT)
    }

    pub fn raster_file(self) -> String {
        format!("{}.{}", self.name(), RASTER_EXT)
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built scene: its name and document.
#[derive(Debug, Clone)]
pub struct Scene {
    pub kind: SceneKind,
    pub document: Document,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Render the scene's SVG text.
    pub fn svg(&self) -> String {
        self.document.render()
    }
}

/// Build every scene in generation order.
pub fn all_scenes(palette: &Palette) -> Result<Vec<Scene>> {
    build_scenes(&SceneKind::ALL, palette)
}

/// Build the selected scenes, keeping the order given.
pub fn build_scenes(kinds: &[SceneKind], palette: &Palette) -> Result<Vec<Scene>> {
    kinds.iter().map(|kind| kind.build(palette)).collect()
}
