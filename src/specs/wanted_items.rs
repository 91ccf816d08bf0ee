// src/specs/wanted_items.rs
//! Scraping spec for one page of wanted-list items.
//!
//! Modern (`/v2/wanted/search.page`): `var wlJson = {"wantedItems": […], "totalResults": N};`
//!
//! Legacy (`wantedDetail.asp`, one item type per request): a table whose
//! header row starts with an `Image` cell, followed by four rows per item:
//!
//! ```text
//! <tr> image | <a href="catalogItem.asp?P=3001">Red Brick 2 x 4</a> </tr>
//! <tr> New | 4 | US $0.25 | Y </tr>          condition, min qty, max price, notify
//! <tr> Remarks: for the castle </tr>
//! <tr> (separator) </tr>
//! ```
//!
//! A page without that table has no items. A page without a `Next` link
//! is the last one.

use regex::Regex;
use scraper::{ElementRef, Html};
use serde::Deserialize;

use crate::config::consts::{ITEM_TABLE_MARKER, PAYLOAD_MARKER, ROWS_PER_ITEM};
use crate::core::html::{cell_texts, find_table, links, rows, selector, text};
use crate::core::payload;
use crate::core::sanitize::leading_number;
use crate::error::{ExportError, Result};
use crate::model::{Condition, ItemType};
use crate::normalize::RawItem;
use crate::scrape::Page;

const WHAT: &str = "wanted page";

/* ---------------- Modern ---------------- */

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchPayload {
    wanted_items: Vec<WantedItem>,
    #[serde(default)]
    total_results: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WantedItem {
    item_type: String,
    item_no: String,
    #[serde(rename = "colorID", default)]
    color_id: Option<i64>,
    item_name: String,
    wanted_new: String,
    #[serde(default)]
    wanted_qty: Option<i64>,
    #[serde(default)]
    wanted_price: Option<f64>,
    #[serde(default)]
    wanted_remark: Option<String>,
    wanted_notify: Flag,
}

/// `wantedNotify` shows up both as `"Y"`/`"N"` and as a boolean.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn is_set(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Text(t) => yes(t),
        }
    }
}

fn yes(s: &str) -> bool {
    matches!(s.trim().to_ascii_uppercase().as_str(), "Y" | "YES")
}

pub fn parse_modern_page(doc: &str) -> Result<Page<RawItem>> {
    let payload: SearchPayload = payload::embedded(doc, PAYLOAD_MARKER, WHAT)?;

    let items = payload
        .wanted_items
        .into_iter()
        .map(|w| {
            Ok(RawItem {
                item_type: ItemType::from_code(&w.item_type)?,
                item_id: w.item_no,
                color_id: w.color_id,
                name: w.item_name,
                condition: Condition::from_code(&w.wanted_new)?,
                min_qty: w.wanted_qty,
                max_price: w.wanted_price,
                remarks: w.wanted_remark,
                notify: w.wanted_notify.is_set(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Page { items, total: payload.total_results, has_next: true })
}

/* ---------------- Legacy ---------------- */

fn unexpected(detail: &str) -> ExportError {
    ExportError::format(format!("Unexpected {WHAT} format: {detail}."))
}

pub fn parse_legacy_page(doc: &str, item_type: ItemType) -> Result<Page<RawItem>> {
    let doc = Html::parse_document(doc);

    let Some(table) = find_table(&doc, |h| h.first().is_some_and(|c| c == ITEM_TABLE_MARKER))? else {
        return Ok(Page::empty());
    };

    let body: Vec<ElementRef<'_>> = rows(table).into_iter().skip(1).collect();
    if body.len() % ROWS_PER_ITEM != 0 {
        return Err(unexpected(&format!("{} item rows", body.len())));
    }

    let link_re = Regex::new(r"catalogItem\.asp\?[A-Za-z]=([^&]+)")
        .map_err(|e| ExportError::format(e.to_string()))?;

    let items = body
        .chunks(ROWS_PER_ITEM)
        .map(|cluster| parse_cluster(cluster, item_type, &link_re))
        .collect::<Result<Vec<_>>>()?;

    Ok(Page { items, total: None, has_next: has_next_link(&doc)? })
}

fn parse_cluster(cluster: &[ElementRef<'_>], item_type: ItemType, link_re: &Regex) -> Result<RawItem> {
    let [identity, terms, remarks, _separator] = cluster else {
        return Err(unexpected("short item block"));
    };

    let (item_id, name) = links(*identity)?
        .into_iter()
        .find_map(|(href, name)| Some((link_re.captures(href)?.get(1)?.as_str().to_string(), name)))
        .ok_or_else(|| unexpected("item link not found"))?;

    let terms = cell_texts(*terms);
    let [condition, qty, price, notify, ..] = terms.as_slice() else {
        return Err(unexpected("item terms row"));
    };

    let remarks = text(*remarks);
    let remarks = remarks.strip_prefix("Remarks:").unwrap_or(&remarks).trim();

    Ok(RawItem {
        item_type,
        item_id,
        color_id: None,
        name,
        condition: Condition::from_label(condition),
        min_qty: qty.parse::<i64>().ok(),
        max_price: leading_number(price),
        remarks: (!remarks.is_empty()).then(|| s!(remarks)),
        notify: yes(notify),
    })
}

fn has_next_link(doc: &Html) -> Result<bool> {
    let anchors = selector("a")?;
    Ok(doc.select(&anchors).any(|a| text(a).starts_with("Next")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_page_fields() {
        let doc = concat!(
            "var wlJson = {\"totalResults\":2,\"wantedItems\":[",
            "{\"itemType\":\"P\",\"itemNo\":\"3001\",\"colorID\":5,\"itemName\":\"Brick 2 x 4\",",
            "\"wantedNew\":\"N\",\"wantedQty\":4,\"wantedPrice\":0.25,\"wantedRemark\":null,\"wantedNotify\":\"Y\"},",
            "{\"itemType\":\"S\",\"itemNo\":\"6080-1\",\"colorID\":0,\"itemName\":\"King's Castle\",",
            "\"wantedNew\":\"U\",\"wantedQty\":-1,\"wantedPrice\":-1.0,\"wantedRemark\":\"boxed\",\"wantedNotify\":false}",
            "]};\n"
        );
        let page = parse_modern_page(doc).unwrap();
        assert_eq!(page.total, Some(2));
        assert_eq!(page.items.len(), 2);

        let a = &page.items[0];
        assert_eq!(a.item_type, ItemType::Part);
        assert_eq!(a.color_id, Some(5));
        assert_eq!(a.min_qty, Some(4));
        assert!(a.notify);
        assert_eq!(a.remarks, None);

        let b = &page.items[1];
        assert_eq!(b.condition, Condition::Used);
        assert_eq!(b.remarks.as_deref(), Some("boxed"));
        assert!(!b.notify);
    }

    #[test]
    fn modern_unknown_type_is_format_error() {
        let doc = concat!(
            "var wlJson = {\"totalResults\":1,\"wantedItems\":[",
            "{\"itemType\":\"Q\",\"itemNo\":\"1\",\"colorID\":0,\"itemName\":\"x\",",
            "\"wantedNew\":\"N\",\"wantedQty\":1,\"wantedPrice\":1,\"wantedRemark\":null,\"wantedNotify\":\"N\"}",
            "]};\n"
        );
        assert!(matches!(parse_modern_page(doc), Err(ExportError::Format(_))));
    }

    #[test]
    fn modern_page_missing_items_field() {
        let doc = "var wlJson = {\"totalResults\":3};\n";
        assert!(matches!(parse_modern_page(doc), Err(ExportError::Format(_))));
    }

    fn legacy_item(code: char, id: &str, name: &str, terms: [&str; 4], remarks: &str) -> String {
        format!(
            "<tr><td><img src=\"x.gif\"></td><td><a href=\"catalogItem.asp?{code}={id}\">{name}</a></td></tr>\
             <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\
             <tr><td>{remarks}</td></tr>\
             <tr><td colspan=4><hr></td></tr>",
            terms[0], terms[1], terms[2], terms[3]
        )
    }

    fn legacy_page(items: &[String], next: bool) -> String {
        format!(
            "<html><body><table><tr><td>Image</td><td>Description</td></tr>{}</table>{}</body></html>",
            items.concat(),
            if next { "<a href=\"wantedDetail.asp?pg=2\">Next</a>" } else { "" }
        )
    }

    #[test]
    fn legacy_clusters() {
        let doc = legacy_page(
            &[
                legacy_item('P', "3001", "Red Brick 2 x 4", ["New", "4", "US $0.25", "Y"], "Remarks: for the wall"),
                legacy_item('P', "3023", "Black Plate 1 x 2", ["Any", "-", "-", "N"], ""),
            ],
            true,
        );
        let page = parse_legacy_page(&doc, ItemType::Part).unwrap();
        assert!(page.has_next);
        assert_eq!(page.total, None);

        let a = &page.items[0];
        assert_eq!(a.item_id, "3001");
        assert_eq!(a.name, "Red Brick 2 x 4");
        assert_eq!(a.condition, Condition::New);
        assert_eq!(a.min_qty, Some(4));
        assert_eq!(a.max_price, Some(0.25));
        assert_eq!(a.remarks.as_deref(), Some("for the wall"));
        assert!(a.notify);

        let b = &page.items[1];
        assert_eq!(b.condition, Condition::Any);
        assert_eq!(b.min_qty, None);
        assert_eq!(b.max_price, None);
        assert_eq!(b.remarks, None);
        assert!(!b.notify);
    }

    #[test]
    fn legacy_missing_table_is_empty_page() {
        let page = parse_legacy_page("<html><body>No items.</body></html>", ItemType::Set).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next);
    }

    #[test]
    fn legacy_row_count_not_multiple_of_four() {
        let mut doc = legacy_page(&[legacy_item('S', "6080-1", "King's Castle", ["New", "1", "-", "N"], "")], false);
        doc = doc.replace("</table>", "<tr><td>stray</td></tr></table>");
        assert!(matches!(parse_legacy_page(&doc, ItemType::Set), Err(ExportError::Format(_))));
    }

    #[test]
    fn legacy_unmatched_link_fails() {
        let doc = legacy_page(&[legacy_item('P', "3001", "Brick", ["New", "1", "-", "N"], "")], false)
            .replace("catalogItem.asp", "catalogList.asp");
        assert!(matches!(parse_legacy_page(&doc, ItemType::Part), Err(ExportError::Format(_))));
    }
}
