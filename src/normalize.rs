// src/normalize.rs
//! Raw rows → `ItemRecord`.
//!
//! Both page parsers produce a `RawItem` with the site's values as found.
//! `normalize` is the single place that applies the output rules:
//! escaping, "absent" quantities and prices, and color resolution.

use crate::core::sanitize::escape_html;
use crate::model::{ColorCatalog, Condition, ItemRecord, ItemType};

/// Provisional field set for one source row.
#[derive(Clone, Debug, PartialEq)]
pub struct RawItem {
    pub item_type: ItemType,
    pub item_id: String,
    /// Explicit color from the modern payload; legacy rows have none.
    pub color_id: Option<i64>,
    /// Display name as shown on the site, unescaped.
    pub name: String,
    pub condition: Condition,
    pub min_qty: Option<i64>,
    pub max_price: Option<f64>,
    pub remarks: Option<String>,
    pub notify: bool,
}

/// Map one raw row. `colors` is only consulted for rows without an
/// explicit color ID (legacy pages).
pub fn normalize(raw: RawItem, colors: Option<&ColorCatalog>) -> ItemRecord {
    let color = resolve_color(&raw, colors);

    ItemRecord {
        item_type: raw.item_type,
        item_id: raw.item_id,
        color,
        name: escape_html(&raw.name),
        condition: raw.condition,
        min_qty: raw.min_qty.filter(|&q| q > 0).and_then(|q| u32::try_from(q).ok()),
        max_price: raw.max_price.filter(|&p| p > 0.0),
        remarks: escape_html(raw.remarks.as_deref().unwrap_or_default()),
        notify: raw.notify,
    }
}

fn resolve_color(raw: &RawItem, colors: Option<&ColorCatalog>) -> Option<u32> {
    if raw.item_type != ItemType::Part {
        return None;
    }
    match raw.color_id {
        Some(id) => u32::try_from(id).ok().filter(|&id| id != 0),
        None => colors?.match_prefix(&raw.name).map(|c| c.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorEntry;

    fn raw(item_type: ItemType, name: &str) -> RawItem {
        RawItem {
            item_type,
            item_id: s!("3001"),
            color_id: None,
            name: s!(name),
            condition: Condition::New,
            min_qty: None,
            max_price: None,
            remarks: None,
            notify: false,
        }
    }

    fn colors() -> ColorCatalog {
        ColorCatalog::new(vec![
            ColorEntry { id: 5, name: s!("Red") },
            ColorEntry { id: 120, name: s!("Red Brick") },
            ColorEntry { id: 11, name: s!("Black") },
        ])
    }

    #[test]
    fn color_only_for_matched_parts() {
        let c = colors();
        let cases = [
            (ItemType::Part, "Red Brick 2x4", Some(120)),
            (ItemType::Part, "Black Plate 1 x 2", Some(11)),
            (ItemType::Part, "Technic Pin", None),
            (ItemType::Set, "Red Brick Bucket", None),
            (ItemType::Gear, "Black Key Chain", None),
            (ItemType::Minifig, "Red Ninja", None),
        ];
        for (t, name, want) in cases {
            let rec = normalize(raw(t, name), Some(&c));
            assert_eq!(rec.color, want, "{t} {name}");
            assert_eq!(rec.color.is_some(), t == ItemType::Part && want.is_some());
        }
    }

    #[test]
    fn explicit_color_id_passes_through_for_parts() {
        let mut r = raw(ItemType::Part, "Brick 2 x 4");
        r.color_id = Some(86);
        assert_eq!(normalize(r.clone(), None).color, Some(86));

        r.color_id = Some(0);
        assert_eq!(normalize(r.clone(), Some(&colors())).color, None);

        r.item_type = ItemType::Set;
        r.color_id = Some(86);
        assert_eq!(normalize(r, None).color, None);
    }

    #[test]
    fn escapes_name_and_remarks() {
        let mut r = raw(ItemType::Book, "Tom & Jerry's <Book>");
        r.remarks = Some(s!("\"first\" edition"));
        let rec = normalize(r, None);
        assert_eq!(rec.name, "Tom &amp; Jerry&#39;s &lt;Book&gt;");
        assert_eq!(rec.remarks, "&quot;first&quot; edition");
    }

    #[test]
    fn color_match_uses_unescaped_name() {
        let c = ColorCatalog::new(vec![ColorEntry { id: 9, name: s!("Light Pink") }]);
        let rec = normalize(raw(ItemType::Part, "Light Pink Tile 'Heart'"), Some(&c));
        assert_eq!(rec.color, Some(9));
    }

    #[test]
    fn non_positive_quantities_and_prices_are_absent() {
        let mut r = raw(ItemType::Part, "x");
        r.min_qty = Some(0);
        r.max_price = Some(-1.0);
        let rec = normalize(r.clone(), None);
        assert_eq!(rec.min_qty, None);
        assert_eq!(rec.max_price, None);
        assert_eq!(rec.remarks, "");

        r.min_qty = Some(-1);
        r.max_price = Some(0.25);
        let rec = normalize(r, None);
        assert_eq!(rec.min_qty, None);
        assert_eq!(rec.max_price, Some(0.25));
    }
}
