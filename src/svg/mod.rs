//! SVG markup generation.
//!
//! Markup is produced as ordered lists of [`Fragment`]s which a
//! [`Document`] joins into a complete file. Fragment order is paint order.

mod document;
mod element;

pub use document::{assemble, Document, LinearGradient, FRAGMENT_SEPARATOR};
pub use element::{escape_xml, rect, text, Fragment, Paint, Rect, Text, TEXT_FILL};
