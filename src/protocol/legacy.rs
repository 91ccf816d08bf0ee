// src/protocol/legacy.rs
use tracing::info;

use super::Protocol;
use crate::config::consts::{
    LEGACY_TYPE_ORDER, LOGIN_ASP_PATH, PAGE_SIZE, WANTED_DETAIL_PATH, WANTED_VIEW_PATH, url,
};
use crate::config::credentials::Credentials;
use crate::config::options::ProtocolKind;
use crate::core::net::{Transport, fetch_page};
use crate::error::{ExportError, Result};
use crate::model::{ColorCatalog, ItemRecord, ItemType, WantedListSummary};
use crate::normalize::normalize;
use crate::scrape::paginate;
use crate::specs::{login, wanted_items, wanted_lists};

/// `.asp` pages scraped from HTML; one item type per request.
pub struct Legacy;

pub fn detail_url(list_id: u32, item_type: ItemType, page: u32) -> String {
    format!(
        "{}?viewFrom=wantedSearch&wantedSize={PAGE_SIZE}&wantedMoreID={list_id}&wantedType={item_type}&pg={page}",
        url(WANTED_DETAIL_PATH)
    )
}

impl Protocol for Legacy {
    fn kind(&self) -> ProtocolKind {
        ProtocolKind::Legacy
    }

    fn authenticate(&self, net: &mut dyn Transport, creds: &Credentials) -> Result<()> {
        info!("Authenticating.");
        let form = [
            ("a", "a"),
            ("logFrmFlag", "Y"),
            ("frmUsername", creds.username.as_str()),
            ("frmPassword", creds.password.as_str()),
        ];
        let resp = net
            .post_form(&url(LOGIN_ASP_PATH), &form)
            .map_err(|_| ExportError::auth(login::COULD_NOT_LOG_IN))?;
        login::check_redirect(&resp)?;
        info!("Authenticated as {}.", creds.username);
        Ok(())
    }

    fn wanted_lists(&self, net: &mut dyn Transport) -> Result<Vec<WantedListSummary>> {
        info!("Retrieving list of wanted lists.");
        let doc = fetch_page(net, &url(WANTED_VIEW_PATH), "Could not retrieve wanted lists.")?;
        info!("Parsing.");
        wanted_lists::parse_legacy(&doc)
    }

    fn needs_colors(&self) -> bool {
        true
    }

    fn wanted_items(
        &self,
        net: &mut dyn Transport,
        list_id: u32,
        colors: Option<&ColorCatalog>,
    ) -> Result<Vec<ItemRecord>> {
        let mut items = Vec::new();

        for item_type in LEGACY_TYPE_ORDER {
            info!("Retrieving item type {item_type}.");
            let raw = paginate(|page| {
                let failure = format!("Could not retrieve page {page} of part list.");
                let doc = fetch_page(net, &detail_url(list_id, item_type, page), &failure)?;
                info!("Parsing.");
                wanted_items::parse_legacy_page(&doc, item_type)
            })?;
            items.extend(raw.into_iter().map(|r| normalize(r, colors)));
        }

        Ok(items)
    }

    fn writes_list_id(&self) -> bool {
        false
    }
}
