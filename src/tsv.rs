// src/tsv.rs
use std::io::{self, Write};

use crate::model::{ColorEntry, WantedListSummary};

const SEP: char = '\t';

/// Tabs or line breaks inside a cell would shift columns; flatten them.
fn clean(cell: &str) -> String {
    cell.replace(['\t', '\r', '\n'], " ")
}

/// Write a single tab-separated row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        write!(w, "{}", clean(cell.as_ref()))?;
    }
    writeln!(w)
}

/// `ID<TAB>Name`, one row per color.
pub fn write_colors<W: Write>(mut w: W, colors: &[ColorEntry]) -> io::Result<()> {
    write_row(&mut w, &["ID", "Name"])?;
    for c in colors {
        write_row(&mut w, &[c.id.to_string(), c.name.clone()])?;
    }
    w.flush()
}

/// `ID<TAB>Items<TAB>Name`, one row per wanted list.
pub fn write_lists<W: Write>(mut w: W, lists: &[WantedListSummary]) -> io::Result<()> {
    write_row(&mut w, &["ID", "Items", "Name"])?;
    for l in lists {
        write_row(&mut w, &[l.id.to_string(), l.items.to_string(), l.name.clone()])?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_table() {
        let mut buf = Vec::new();
        write_colors(&mut buf, &[
            ColorEntry { id: 11, name: s!("Black") },
            ColorEntry { id: 5, name: s!("Red") },
        ]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ID\tName\n11\tBlack\n5\tRed\n");
    }

    #[test]
    fn lists_table() {
        let mut buf = Vec::new();
        write_lists(&mut buf, &[WantedListSummary { id: 0, name: s!("Main"), items: 12 }]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ID\tItems\tName\n0\t12\tMain\n");
    }

    #[test]
    fn embedded_tabs_are_flattened() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a\tb", "c\nd"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a b\tc d\n");
    }
}
