// src/scrape/paginate.rs
use tracing::info;

use crate::error::Result;

/// One fetched page of entries.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Server-reported total across all pages, when the site gives one.
    pub total: Option<usize>,
    /// Whether the page links to a following page.
    pub has_next: bool,
}

impl<T> Page<T> {
    /// A page with nothing on it; ends pagination.
    pub fn empty() -> Self {
        Self { items: Vec::new(), total: None, has_next: false }
    }
}

/// Request pages 1, 2, … through `fetch` and collect their entries in
/// order. Stops after the first of:
/// - a page with no entries (contributes nothing),
/// - the collected count reaching the page's `total`,
/// - a page without a next page.
///
/// The first error aborts and discards everything collected so far.
pub fn paginate<T, F>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Result<Page<T>>,
{
    let mut acc: Vec<T> = Vec::new();

    for page in 1u32.. {
        info!("Retrieving page {page}...");
        let Page { items, total, has_next } = fetch(page)?;

        if items.is_empty() {
            break;
        }
        acc.extend(items);

        if total.is_some_and(|t| acc.len() >= t) || !has_next {
            break;
        }
    }

    Ok(acc)
}
