// src/protocol/mod.rs
//! The two generations of the site behind one interface.
//!
//! Each implementation knows its endpoints, how a login succeeds, how to
//! walk the item pages and which parser reads them. Everything above this
//! (the runner) is protocol-agnostic.

mod legacy;
mod modern;

pub use legacy::{Legacy, detail_url};
pub use modern::{Modern, search_url};

use tracing::info;

use crate::config::consts::{COLORS_PATH, url};
use crate::config::credentials::Credentials;
use crate::config::options::ProtocolKind;
use crate::core::net::{Transport, fetch_page};
use crate::error::Result;
use crate::model::{ColorCatalog, ItemRecord, WantedListSummary};
use crate::specs;

pub trait Protocol {
    fn kind(&self) -> ProtocolKind;

    /// Log in; the session keeps the cookies. Any failure is an
    /// `Authentication` error.
    fn authenticate(&self, net: &mut dyn Transport, creds: &Credentials) -> Result<()>;

    fn wanted_lists(&self, net: &mut dyn Transport) -> Result<Vec<WantedListSummary>>;

    /// Whether item colors must be inferred from the color guide.
    fn needs_colors(&self) -> bool;

    /// Every item of `list_id`, in page order, normalized.
    fn wanted_items(
        &self,
        net: &mut dyn Transport,
        list_id: u32,
        colors: Option<&ColorCatalog>,
    ) -> Result<Vec<ItemRecord>>;

    /// Whether the export names its target list even without an override.
    fn writes_list_id(&self) -> bool;
}

pub fn for_kind(kind: ProtocolKind) -> Box<dyn Protocol> {
    match kind {
        ProtocolKind::Modern => Box::new(Modern),
        ProtocolKind::Legacy => Box::new(Legacy),
    }
}

/// The color guide is the same page on both generations and needs no login.
pub fn fetch_colors(net: &mut dyn Transport) -> Result<ColorCatalog> {
    info!("Retrieving color guide.");
    let doc = fetch_page(net, &url(COLORS_PATH), "Could not retrieve color guide.")?;
    info!("Parsing.");
    let colors = specs::colors::parse(&doc)?;
    info!("Found {} colors.", colors.len());
    Ok(colors)
}
