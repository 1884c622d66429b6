//! Home-screen widgets in three sizes.

use crate::error::Result;
use crate::render::{draw_grid, DEFAULT_INSET};
use crate::svg::{rect, text, Document, LinearGradient, Paint};
use crate::types::{Colour, Grid, Palette};

use super::{Scene, SceneKind};

const FRAME_STROKE: Colour = Colour::hex(0x1B233A);
const TITLE_FILL: Colour = Colour::hex(0xD8E3FF);
const SUBTITLE_FILL: Colour = Colour::hex(0x8AA0C2);

/// The shared frame of every widget: a rounded gradient card with a title
/// and subtitle.
struct Frame {
    width: u32,
    height: u32,
    radius: f64,
    gradient: LinearGradient,
    title: (f64, f64, u32, &'static str),
    subtitle: (f64, f64, &'static str),
}

impl Frame {
    fn document(self) -> Document {
        let (tx, ty, title_size, title) = self.title;
        let (sx, sy, subtitle) = self.subtitle;
        let background = Paint::url(self.gradient.id.clone());

        let mut doc = Document::new(self.width, self.height);
        doc.define(self.gradient);
        doc.push(
            rect(0.0, 0.0, f64::from(self.width), f64::from(self.height), background)
                .rounded(self.radius)
                .stroke(FRAME_STROKE, 2.0),
        )
        .push(
            text(tx, ty, title)
                .size(title_size)
                .fill(TITLE_FILL)
                .weight(700),
        )
        .push(
            text(sx, sy, subtitle)
                .size(18)
                .fill(SUBTITLE_FILL)
                .weight(500),
        );
        doc
    }
}

/// Current conditions as a 4x4 stack.
pub fn widget_small(palette: &Palette) -> Result<Scene> {
    let grid = Grid::parse(&["BBG.", "BBOO", ".GRO", "..RO"])?;

    let mut doc = Frame {
        width: 320,
        height: 320,
        radius: 26.0,
        gradient: LinearGradient::diagonal("bgSmall", Colour::hex(0x0F1628), Colour::hex(0x0C1020)),
        title: (24.0, 46.0, 26, "Now · -5°C"),
        subtitle: (24.0, 72.0, "Snowy, calm"),
    }
    .document();
    doc.extend(draw_grid(&grid, palette, (40, 70), 60, DEFAULT_INSET));

    Ok(Scene {
        kind: SceneKind::WidgetSmall,
        document: doc,
    })
}

/// The next six hours, one column per hour.
pub fn widget_medium(palette: &Palette) -> Result<Scene> {
    let grid = Grid::parse(&[
        ".B..", "BB..", "BG..", "BG..", "BGG.", "BGOO", "RGOR", "RGOR",
    ])?;

    let mut doc = Frame {
        width: 460,
        height: 340,
        radius: 26.0,
        gradient: LinearGradient::diagonal("bgMedium", Colour::hex(0x10182C), Colour::hex(0x0C1324)),
        title: (24.0, 40.0, 26, "Next 6h"),
        subtitle: (24.0, 68.0, "Each column = 1h"),
    }
    .document();
    doc.extend(draw_grid(&grid, palette, (154, 44), 36, DEFAULT_INSET));

    Ok(Scene {
        kind: SceneKind::WidgetMedium,
        document: doc,
    })
}

/// The day's trend, with a cleared line marking a sunny break.
pub fn widget_large(palette: &Palette) -> Result<Scene> {
    const CELL: i32 = 54;
    const ORIGIN: (i32, i32) = (54, 90);
    const CLEARED_ROW: i32 = 4;

    let grid = Grid::parse(&[
        "..CCGG..", "..CCGG..", ".BBGGGO.", ".BBGGOO.", ".BBGROO.", "BBGGRROO", "BBGGRROO",
        "BBGGRROO",
    ])?;

    let mut doc = Frame {
        width: 560,
        height: 560,
        radius: 30.0,
        gradient: LinearGradient::diagonal("bgLarge", Colour::hex(0x0F182C), Colour::hex(0x0C1020)),
        title: (24.0, 56.0, 28, "Today trend"),
        subtitle: (24.0, 84.0, "Line clear = sunny break"),
    }
    .document();
    doc.extend(draw_grid(&grid, palette, ORIGIN, CELL, DEFAULT_INSET));

    let bar_y = ORIGIN.1 + CELL * CLEARED_ROW - 6;
    let bar_width = CELL * grid.width() as i32;
    doc.push(
        rect(
            f64::from(ORIGIN.0),
            f64::from(bar_y),
            f64::from(bar_width),
            8.0,
            Colour::hex(0x7CF2C7),
        )
        .opacity(0.5),
    );

    Ok(Scene {
        kind: SceneKind::WidgetLarge,
        document: doc,
    })
}
