//! List command implementation.
//!
//! Prints the scene inventory, as status lines or as JSON on stdout.

use clap::Args;
use serde::Serialize;

use crate::error::{Result, WeatherError};
use crate::output::Printer;
use crate::scenes::{all_scenes, SceneKind};
use crate::types::Palette;

/// List the scenes and the files they produce
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print machine-readable JSON to stdout
    #[arg(long)]
    pub json: bool,
}

/// One row of the inventory.
#[derive(Debug, Serialize)]
pub struct SceneEntry {
    pub name: SceneKind,
    pub width: u32,
    pub height: u32,
    pub vector: String,
    pub raster: String,
}

pub fn run(args: ListArgs) -> Result<()> {
    let entries = inventory(&Palette::weather())?;

    if args.json {
        let json = serde_json::to_string_pretty(&entries).map_err(|e| WeatherError::Parse {
            message: format!("Failed to serialize scene list: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    let printer = Printer::new();
    for entry in &entries {
        printer.info(
            entry.name.name(),
            &format!(
                "{}x{} {}",
                entry.width,
                entry.height,
                printer.dim(&format!("{}, {}", entry.vector, entry.raster))
            ),
        );
    }

    Ok(())
}

/// Build every scene and describe it.
pub fn inventory(palette: &Palette) -> Result<Vec<SceneEntry>> {
    Ok(all_scenes(palette)?
        .into_iter()
        .map(|scene| SceneEntry {
            name: scene.kind,
            width: scene.document.width(),
            height: scene.document.height(),
            vector: scene.kind.vector_file(),
            raster: scene.kind.raster_file(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_json() {
        let entries = inventory(&Palette::weather()).unwrap();
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[0]["name"], "app_main");
        assert_eq!(json[0]["height"], 1920);
        assert_eq!(json[2]["width"], 460);
        assert_eq!(json[3]["raster"], "widget_large.png");
    }
}
