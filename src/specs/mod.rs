//! # Page "specs"
//!
//! One module per kind of page on the site. Each spec encodes *where the
//! data lives* in that page and turns the body into typed values.
//!
//! ## What lives here
//! - **Pure parsing** of response bodies: embedded `wlJson` payloads
//!   (`core::payload`) and HTML tables (`core::html`).
//! - **Layout checks**: a page that no longer has the expected shape is a
//!   `Format` error, never a silently shorter result.
//!
//! ## What does **not** live here
//! - **Networking**, pagination and protocol choice: `protocol::*` and
//!   `scrape::paginate` decide which pages to fetch and when to stop.
//! - **Field normalization** (escaping, color inference): `normalize`.
//!
//! ## Typical call chain
//! ```text
//! runner → protocol::<kind>::wanted_items → scrape::paginate
//!                                          ↘ specs::wanted_items::parse_*_page
//!        → normalize::normalize → xml::render
//! ```
//!
//! Specs are testable offline against literal page snippets.
pub mod colors;
pub mod login;
pub mod wanted_items;
pub mod wanted_lists;
