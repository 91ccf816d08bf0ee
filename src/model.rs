// src/model.rs
use std::fmt;

use crate::error::{ExportError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemType {
    Set,
    Part,
    Minifig,
    Book,
    Gear,
    Catalog,
    Instructions,
    OriginalBox,
    Unsorted,
}

impl ItemType {
    /// One-letter code used by the site and the XML format.
    pub fn code(self) -> char {
        match self {
            ItemType::Set => 'S',
            ItemType::Part => 'P',
            ItemType::Minifig => 'M',
            ItemType::Book => 'B',
            ItemType::Gear => 'G',
            ItemType::Catalog => 'C',
            ItemType::Instructions => 'I',
            ItemType::OriginalBox => 'O',
            ItemType::Unsorted => 'U',
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Ok(match code.trim() {
            "S" => ItemType::Set,
            "P" => ItemType::Part,
            "M" => ItemType::Minifig,
            "B" => ItemType::Book,
            "G" => ItemType::Gear,
            "C" => ItemType::Catalog,
            "I" => ItemType::Instructions,
            "O" => ItemType::OriginalBox,
            "U" => ItemType::Unsorted,
            other => return Err(ExportError::format(format!("Unknown item type: {other:?}"))),
        })
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    New,
    Used,
    Any,
}

impl Condition {
    pub fn code(self) -> char {
        match self {
            Condition::New => 'N',
            Condition::Used => 'U',
            Condition::Any => 'X',
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim() {
            "N" => Ok(Condition::New),
            "U" => Ok(Condition::Used),
            "X" => Ok(Condition::Any),
            other => Err(ExportError::format(format!("Unknown condition: {other:?}"))),
        }
    }

    /// Legacy pages spell it out; anything but New/Used means "any".
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "new" => Condition::New,
            "used" => Condition::Used,
            _ => Condition::Any,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorEntry {
    pub id: u32,
    pub name: String,
}

/// The color guide in table order, plus a longest-name-first index for
/// prefix matching.
#[derive(Clone, Debug, Default)]
pub struct ColorCatalog {
    entries: Vec<ColorEntry>,
    by_len: Vec<usize>,
}

impl ColorCatalog {
    pub fn new(entries: Vec<ColorEntry>) -> Self {
        let mut by_len: Vec<usize> = (0..entries.len()).collect();
        // stable: equal lengths keep table order
        by_len.sort_by(|&a, &b| entries[b].name.len().cmp(&entries[a].name.len()));
        Self { entries, by_len }
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The longest color whose name followed by a space starts `item_name`.
    /// "Red Brick 2 x 4" picks "Red Brick" over "Red".
    pub fn match_prefix(&self, item_name: &str) -> Option<&ColorEntry> {
        self.by_len
            .iter()
            .map(|&i| &self.entries[i])
            .find(|c| {
                item_name
                    .strip_prefix(c.name.as_str())
                    .is_some_and(|rest| rest.starts_with(' '))
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WantedListSummary {
    pub id: u32,
    pub name: String,
    pub items: u32,
}

/// One wanted-list line, ready for the XML writer.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRecord {
    pub item_type: ItemType,
    pub item_id: String,
    pub color: Option<u32>,
    pub name: String,    // HTML-escaped
    pub condition: Condition,
    pub min_qty: Option<u32>,
    pub max_price: Option<f64>,
    pub remarks: String, // HTML-escaped, may be empty
    pub notify: bool,
}
