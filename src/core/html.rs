// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::{ExportError, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExportError::format(format!("Bad selector {css:?}: {e}")))
}

/// Visible text of an element, whitespace-collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn is_section(name: &str) -> bool {
    matches!(name, "tbody" | "thead" | "tfoot")
}

/// Rows belonging to `table` itself (looking through tbody/thead/tfoot),
/// not rows of nested tables.
pub fn rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut out = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => out.push(child),
            name if is_section(name) => out.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|r| r.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    out
}

/// The row's own `<td>`/`<th>` cells.
pub fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .collect()
}

pub fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    cells(row).into_iter().map(text).collect()
}

/// First table whose first row's cell texts satisfy `is_header`.
pub fn find_table<'a>(doc: &'a Html, is_header: impl Fn(&[String]) -> bool) -> Result<Option<ElementRef<'a>>> {
    let tables = selector("table")?;
    Ok(doc.select(&tables).find(|t| {
        rows(*t)
            .first()
            .is_some_and(|first| is_header(&cell_texts(*first)))
    }))
}

/// `(href, text)` of every anchor under `el`.
pub fn links<'a>(el: ElementRef<'a>) -> Result<Vec<(&'a str, String)>> {
    let anchors = selector("a[href]")?;
    Ok(el
        .select(&anchors)
        .filter_map(|a| a.value().attr("href").map(|href| (href, text(a))))
        .collect())
}
