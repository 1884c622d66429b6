//! Main app screen.

use crate::error::Result;
use crate::render::{draw_grid, draw_piece, DEFAULT_INSET};
use crate::svg::{rect, text, Document, LinearGradient, Paint};
use crate::types::{Colour, Grid, Palette, Piece};

use super::{Scene, SceneKind};

const WIDTH: u32 = 1080;
const HEIGHT: u32 = 1920;
const CELL: i32 = 60;
const ORIGIN: (i32, i32) = (220, 280);

const STACK: [&str; 14] = [
    "..........",
    "..........",
    ".....C....",
    "....CC....",
    "...BCG....",
    "...BCGG...",
    "..BBGGG...",
    "..BBGGGO..",
    ".BBGGGRO..",
    ".BBGGRRO..",
    "BBGGRROO..",
    "BBGGRROOR.",
    "BBGGRROORR",
    "BBGGRROORR",
];

const FALLING: [(i32, i32); 4] = [(5, 0), (4, 1), (5, 1), (6, 1)];

const CHIPS: [(f64, f64, &str); 3] = [
    (80.0, 1380.0, "Precip 70%"),
    (300.0, 1380.0, "Wind 22 km/h"),
    (560.0, 1380.0, "Pressure ↓"),
];

const TIPS: [(f64, f64, &str); 2] = [
    (80.0, 1455.0, "Swipe down for details"),
    (80.0, 1500.0, "Widgets mirror the stack hourly"),
];

/// Build the full-screen app mockup: header, stacked forecast, chips and tips.
pub fn app_main(palette: &Palette) -> Result<Scene> {
    let grid = Grid::parse(&STACK)?;
    let piece = Piece::new(FALLING);

    let mut doc = Document::new(WIDTH, HEIGHT);
    doc.define(LinearGradient::diagonal(
        "bgMain",
        Colour::hex(0x0B1220),
        Colour::hex(0x0F1C3A),
    ))
    .define(LinearGradient::vertical(
        "card",
        Colour::hex(0x101A2F),
        Colour::hex(0x0C1324),
    ));

    doc.push(rect(0.0, 0.0, f64::from(WIDTH), f64::from(HEIGHT), Paint::url("bgMain")))
        .push(
            rect(200.0, 230.0, 680.0, 970.0, Paint::url("card"))
                .rounded(28.0)
                .stroke(Colour::hex(0x1C2740), 2.0),
        )
        .push(
            text(80.0, 130.0, "Tetris Weather")
                .size(30)
                .fill(Colour::hex(0x7CF2C7)),
        )
        .push(
            text(80.0, 180.0, "St. Petersburg · 09:30")
                .size(48)
                .weight(700),
        )
        .push(
            text(80.0, 230.0, "Light Snow · Feels -6°C")
                .size(26)
                .fill(Colour::hex(0xA6C8FF))
                .weight(500),
        );

    doc.extend(draw_grid(&grid, palette, ORIGIN, CELL, DEFAULT_INSET))
        .extend(draw_piece(&piece, palette, ORIGIN, CELL));

    doc.push(text(80.0, 1260.0, "Today is messy").size(40).weight(700))
        .push(
            text(80.0, 1310.0, "Chaotic stacking, expect flurries and gusts")
                .size(24)
                .fill(Colour::hex(0x8AA0C2))
                .weight(500),
        );

    for (x, y, label) in CHIPS {
        doc.push(
            rect(x, y - 32.0, 180.0, 54.0, Colour::hex(0x142038))
                .rounded(18.0)
                .stroke(Colour::hex(0x1F2D4B), 1.5),
        )
        .push(
            text(x + 18.0, y, label)
                .size(22)
                .fill(Colour::hex(0xD8E3FF)),
        );
    }

    for (x, y, label) in TIPS {
        doc.push(
            text(x, y, label)
                .size(22)
                .fill(Colour::hex(0x7384A9))
                .weight(500),
        );
    }

    Ok(Scene {
        kind: SceneKind::AppMain,
        document: doc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EMPTY;

    #[test]
    fn test_app_counts() {
        let scene = app_main(&Palette::weather()).unwrap();
        let svg = scene.svg();
        let grid = Grid::parse(&STACK).unwrap();

        assert_eq!(svg.matches(r##"fill="#121C33""##).count(), 140);
        assert_eq!(
            svg.matches(r##"stroke="#0C182C""##).count(),
            140 - grid.count(EMPTY)
        );
        assert_eq!(svg.matches(r##"stroke="#9CF6FF""##).count(), 4);
    }

    #[test]
    fn test_app_overlays() {
        let svg = app_main(&Palette::weather()).unwrap().svg();
        assert!(svg.contains(r#"id="bgMain""#));
        assert!(svg.contains(r#"id="card""#));
        assert!(svg.contains(">Pressure ↓</text>"));
        assert!(svg.contains(">Widgets mirror the stack hourly</text>"));
        assert_eq!(svg.matches(r##"stroke="#1F2D4B""##).count(), 3);
    }

    #[test]
    fn test_piece_paints_over_grid() {
        let svg = app_main(&Palette::weather()).unwrap().svg();
        let last_block = svg.rfind(r##"stroke="#0C182C""##).unwrap();
        let first_piece = svg.find(r##"stroke="#9CF6FF""##).unwrap();
        assert!(first_piece > last_block);
    }
}
