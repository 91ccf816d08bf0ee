// src/protocol/modern.rs
use tracing::info;

use super::Protocol;
use crate::config::consts::{
    LOGIN_AJAX_PATH, PAGE_SIZE, WANTED_LIST_PAGE_PATH, WANTED_SEARCH_PAGE_PATH, url,
};
use crate::config::credentials::Credentials;
use crate::config::options::ProtocolKind;
use crate::core::net::{Transport, fetch_page};
use crate::error::{ExportError, Result};
use crate::model::{ColorCatalog, ItemRecord, WantedListSummary};
use crate::normalize::normalize;
use crate::scrape::paginate;
use crate::specs::{login, wanted_items, wanted_lists};

/// `/v2/` pages with embedded `wlJson` payloads.
pub struct Modern;

pub fn search_url(list_id: u32, page: u32) -> String {
    format!(
        "{}?type=A&wantedMoreID={list_id}&sort=1&pageSize={PAGE_SIZE}&page={page}",
        url(WANTED_SEARCH_PAGE_PATH)
    )
}

impl Protocol for Modern {
    fn kind(&self) -> ProtocolKind {
        ProtocolKind::Modern
    }

    fn authenticate(&self, net: &mut dyn Transport, creds: &Credentials) -> Result<()> {
        info!("Authenticating.");
        let form = [
            ("pageId", "LOGIN"),
            ("userid", creds.username.as_str()),
            ("password", creds.password.as_str()),
        ];
        let resp = net
            .post_form(&url(LOGIN_AJAX_PATH), &form)
            .map_err(|_| ExportError::auth(login::COULD_NOT_LOG_IN))?;
        login::check_ajax_reply(&resp)?;
        info!("Authenticated as {}.", creds.username);
        Ok(())
    }

    fn wanted_lists(&self, net: &mut dyn Transport) -> Result<Vec<WantedListSummary>> {
        info!("Retrieving list of wanted lists.");
        let doc = fetch_page(net, &url(WANTED_LIST_PAGE_PATH), "Could not retrieve wanted lists.")?;
        info!("Parsing.");
        wanted_lists::parse_modern(&doc)
    }

    fn needs_colors(&self) -> bool {
        false
    }

    fn wanted_items(
        &self,
        net: &mut dyn Transport,
        list_id: u32,
        colors: Option<&ColorCatalog>,
    ) -> Result<Vec<ItemRecord>> {
        let raw = paginate(|page| {
            let failure = format!("Could not retrieve page {page} of part list.");
            let doc = fetch_page(net, &search_url(list_id, page), &failure)?;
            info!("Parsing.");
            wanted_items::parse_modern_page(&doc)
        })?;

        Ok(raw.into_iter().map(|r| normalize(r, colors)).collect())
    }

    fn writes_list_id(&self) -> bool {
        true
    }
}
