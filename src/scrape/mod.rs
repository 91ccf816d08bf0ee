// src/scrape/mod.rs
mod paginate;

pub use paginate::{Page, paginate};
