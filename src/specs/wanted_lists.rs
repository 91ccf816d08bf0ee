// src/specs/wanted_lists.rs
//! Scraping spec for the wanted-list overview.
//!
//! - Modern (`/v2/wanted/list.page`): `var wlJson = {"wantedLists": [{id, num, name}, …]};`
//! - Legacy (`wantedView.asp`): a table headed `Wanted List | Items | Remarks`,
//!   one row per list, the name linking to `…wantedMoreID=<id>…`.

use regex::Regex;
use scraper::Html;
use serde::Deserialize;

use crate::config::consts::{LIST_TABLE_HEADER, PAYLOAD_MARKER};
use crate::core::html::{cell_texts, find_table, links, rows};
use crate::core::payload;
use crate::error::{ExportError, Result};
use crate::model::WantedListSummary;

const WHAT: &str = "wanted list page";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListsPayload {
    wanted_lists: Vec<ListEntry>,
}

#[derive(Deserialize)]
struct ListEntry {
    id: u32,
    num: u32,
    name: String,
}

pub fn parse_modern(doc: &str) -> Result<Vec<WantedListSummary>> {
    let payload: ListsPayload = payload::embedded(doc, PAYLOAD_MARKER, WHAT)?;
    Ok(payload
        .wanted_lists
        .into_iter()
        .map(|l| WantedListSummary { id: l.id, name: l.name, items: l.num })
        .collect())
}

pub fn parse_legacy(doc: &str) -> Result<Vec<WantedListSummary>> {
    let unexpected = || ExportError::format(format!("Unexpected {WHAT} format."));

    let doc = Html::parse_document(doc);
    let table = find_table(&doc, |h| h == LIST_TABLE_HEADER)?.ok_or_else(unexpected)?;
    let id_re = Regex::new(r"wantedMoreID=(\d+)").map_err(|e| ExportError::format(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows(table).into_iter().skip(1) {
        let cells = cell_texts(row);
        if cells.iter().all(|c| c.is_empty()) {
            continue; // spacer
        }

        let (id, name) = links(row)?
            .into_iter()
            .find_map(|(href, text)| {
                let id = id_re.captures(href)?.get(1)?.as_str().parse::<u32>().ok()?;
                Some((id, text))
            })
            .ok_or_else(unexpected)?;

        let items = cells
            .get(1)
            .and_then(|c| c.parse::<u32>().ok())
            .ok_or_else(unexpected)?;

        out.push(WantedListSummary { id, name, items });
    }
    Ok(out)
}
