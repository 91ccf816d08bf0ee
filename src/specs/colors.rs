// src/specs/colors.rs
//! Scraping spec for the color guide (`catalogColors.asp`).
//!
//! The page holds one table per color group. Each group starts with a
//! 9-cell header row ending in "Color Timeline"; every other 9-cell row is
//! a color: ID in the first cell, name in the fourth. Rows of any other
//! width (spacers, group titles) are ignored.
//!
//! Anything that does not fit that shape fails the whole parse.

use scraper::Html;

use crate::config::consts::{
    COLOR_ID_COLUMN, COLOR_NAME_COLUMN, COLOR_TABLE_COLUMNS, COLOR_TABLE_LAST_HEADER,
};
use crate::core::html::{cell_texts, selector};
use crate::error::{ExportError, Result};
use crate::model::{ColorCatalog, ColorEntry};

const UNEXPECTED: &str = "Unexpected color guide format.";

pub fn parse(doc: &str) -> Result<ColorCatalog> {
    let doc = Html::parse_document(doc);
    let all_rows = selector("tr")?;

    let mut headers = 0usize;
    let mut colors = Vec::new();

    for row in doc.select(&all_rows) {
        let cells = cell_texts(row);
        if cells.len() != COLOR_TABLE_COLUMNS {
            continue;
        }
        if cells[COLOR_TABLE_COLUMNS - 1] == COLOR_TABLE_LAST_HEADER {
            headers += 1;
            continue;
        }

        let id = &cells[COLOR_ID_COLUMN];
        let name = &cells[COLOR_NAME_COLUMN];
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) || name.is_empty() {
            tracing::debug!("Rejected color row: {cells:?}");
            return Err(ExportError::format(UNEXPECTED));
        }
        let id = id.parse().map_err(|_| ExportError::format(UNEXPECTED))?;
        colors.push(ColorEntry { id, name: name.clone() });
    }

    if headers == 0 || colors.is_empty() {
        return Err(ExportError::format(UNEXPECTED));
    }
    Ok(ColorCatalog::new(colors))
}
