// src/config/consts.rs
use crate::model::ItemType;

// Net config
pub const BASE_URL: &str = "https://www.bricklink.com";
pub const USER_AGENT: &str = concat!("bricklink-export/", env!("CARGO_PKG_VERSION"));

// Shared pages
pub const COLORS_PATH: &str = "/catalogColors.asp";

// Modern site (embedded JSON)
pub const LOGIN_AJAX_PATH: &str = "/ajax/renovate/login.ajax";
pub const WANTED_LIST_PAGE_PATH: &str = "/v2/wanted/list.page";
pub const WANTED_SEARCH_PAGE_PATH: &str = "/v2/wanted/search.page";
pub const PAYLOAD_MARKER: &str = "var wlJson";
pub const PAGE_SIZE: usize = 100;

// Legacy site (HTML tables)
pub const LOGIN_ASP_PATH: &str = "/login.asp";
pub const LOGIN_REDIRECT_SUFFIX: &str = "pageRedirect.asp?p=my.asp";
pub const WANTED_VIEW_PATH: &str = "/wantedView.asp";
pub const WANTED_DETAIL_PATH: &str = "/wantedDetail.asp";
pub const ITEM_TABLE_MARKER: &str = "Image";
pub const LIST_TABLE_HEADER: [&str; 3] = ["Wanted List", "Items", "Remarks"];
pub const ROWS_PER_ITEM: usize = 4;

/// Order in which the legacy site's per-type pages are walked.
pub const LEGACY_TYPE_ORDER: [ItemType; 9] = [
    ItemType::Set,
    ItemType::Part,
    ItemType::Minifig,
    ItemType::Book,
    ItemType::Gear,
    ItemType::Catalog,
    ItemType::Instructions,
    ItemType::OriginalBox,
    ItemType::Unsorted,
];

// Color guide layout
pub const COLOR_TABLE_COLUMNS: usize = 9;
pub const COLOR_TABLE_LAST_HEADER: &str = "Color Timeline";
pub const COLOR_ID_COLUMN: usize = 0;
pub const COLOR_NAME_COLUMN: usize = 3;

// Credentials files, read in order; later files override earlier ones.
pub const CONFIG_FILES: [&str; 2] = [".bricklink-export.conf", "bricklink-export.ini"];
pub const CONFIG_USER_SECTION: &str = "user";
pub const CONFIG_SITE_SECTION: &str = "site";

pub fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}
