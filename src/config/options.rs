// src/config/options.rs
use std::str::FromStr;

/// What a single invocation does. Exactly one per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print the color guide as `ID<TAB>Name`.
    Colors,
    /// Print the account's wanted lists as `ID<TAB>Items<TAB>Name`.
    Lists,
    /// Export one wanted list as XML. `wanted` overrides the list ID
    /// written into each item.
    Export { list_id: u32, wanted: Option<u32> },
}

impl Mode {
    pub fn needs_login(&self) -> bool {
        !matches!(self, Mode::Colors)
    }
}

/// Which generation of the site we talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ProtocolKind {
    /// `/v2/` pages with an embedded `wlJson` payload.
    #[default]
    Modern,
    /// `.asp` pages scraped from HTML tables.
    Legacy,
}

impl FromStr for ProtocolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(ProtocolKind::Modern),
            "legacy" => Ok(ProtocolKind::Legacy),
            other => Err(format!("Unknown protocol: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub verbose: bool,
    pub username: Option<String>,     // explicit -u
    pub password: Option<String>,     // explicit -p
    pub protocol: Option<ProtocolKind>, // explicit --protocol
}

impl Options {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            verbose: false,
            username: None,
            password: None,
            protocol: None,
        }
    }
}
