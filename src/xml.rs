// src/xml.rs
//! BrickLink inventory XML (the bulk-upload format).
//!
//! Fixed element order per item; optional elements are left out rather
//! than written empty, except `REMARKS` which is always present. No
//! declaration, no attributes, one tab per nesting level.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::model::ItemRecord;

fn element(out: &mut String, tag: &str, value: impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "\t\t<{tag}>{value}</{tag}>");
}

/// The whole document as a string. `wanted_list` is written into every
/// item as `WANTEDLISTID` when given.
pub fn render(items: &[ItemRecord], wanted_list: Option<u32>) -> String {
    let mut out = String::with_capacity(64 + items.len() * 256);
    out.push_str("<INVENTORY>\n");

    for item in items {
        out.push_str("\t<ITEM>\n");
        element(&mut out, "ITEMTYPE", item.item_type);
        element(&mut out, "ITEMID", &item.item_id);
        if let Some(color) = item.color {
            element(&mut out, "COLOR", color);
        }
        element(&mut out, "CONDITION", item.condition.code());
        if let Some(price) = item.max_price.filter(|&p| p > 0.0) {
            element(&mut out, "MAXPRICE", price);
        }
        if let Some(qty) = item.min_qty.filter(|&q| q > 0) {
            element(&mut out, "MINQTY", qty);
        }
        element(&mut out, "REMARKS", &item.remarks);
        element(&mut out, "NOTIFY", if item.notify { 'Y' } else { 'N' });
        if let Some(id) = wanted_list {
            element(&mut out, "WANTEDLISTID", id);
        }
        out.push_str("\t</ITEM>\n");
    }

    out.push_str("</INVENTORY>\n");
    out
}

pub fn write_inventory<W: Write>(mut w: W, items: &[ItemRecord], wanted_list: Option<u32>) -> io::Result<()> {
    w.write_all(render(items, wanted_list).as_bytes())?;
    w.flush()
}
