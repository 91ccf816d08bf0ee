// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interrupt;
pub mod log;
pub mod model;
pub mod normalize;
pub mod protocol;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod tsv;
pub mod xml;

pub use error::{ExportError, Result};
