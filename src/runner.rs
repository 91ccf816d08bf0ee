// src/runner.rs
//! One invocation, top to bottom:
//! `Idle → Authenticated → ColorsLoaded (legacy only) → Paginating → Done`.
//!
//! The first error ends the run. Output is produced only once every page
//! has been fetched and parsed, so a failed run prints nothing to stdout.

use std::io::Write;

use tracing::{debug, info};

use crate::config::credentials::{self, ConfigFile, Prompt};
use crate::config::options::{Mode, Options, ProtocolKind};
use crate::core::net::Transport;
use crate::error::Result;
use crate::model::ItemRecord;
use crate::protocol::{self, Protocol};
use crate::{tsv, xml};

/// `--protocol` beats the config file beats the default (modern).
pub fn pick_protocol(opts: &Options, config: &ConfigFile) -> ProtocolKind {
    opts.protocol.or_else(|| config.protocol()).unwrap_or_default()
}

pub fn run(
    opts: &Options,
    net: &mut dyn Transport,
    config: &ConfigFile,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
) -> Result<()> {
    let protocol = protocol::for_kind(pick_protocol(opts, config));
    debug!("Using the {:?} protocol.", protocol.kind());

    if opts.mode.needs_login() {
        let creds = credentials::resolve(
            opts.username.as_deref(),
            opts.password.as_deref(),
            config,
            prompt,
        )?;
        protocol.authenticate(net, &creds)?;
    }

    match &opts.mode {
        Mode::Colors => {
            let colors = protocol::fetch_colors(net)?;
            tsv::write_colors(out, colors.entries())?;
        }
        Mode::Lists => {
            let lists = protocol.wanted_lists(net)?;
            tsv::write_lists(out, &lists)?;
        }
        Mode::Export { list_id, wanted } => {
            let items = export(protocol.as_ref(), net, *list_id)?;
            let target = wanted.or(protocol.writes_list_id().then_some(*list_id));
            xml::write_inventory(out, &items, target)?;
        }
    }

    Ok(())
}

/// Colors (when the protocol needs them) then every item page.
pub fn export(protocol: &dyn Protocol, net: &mut dyn Transport, list_id: u32) -> Result<Vec<ItemRecord>> {
    let colors = if protocol.needs_colors() {
        Some(protocol::fetch_colors(net)?)
    } else {
        None
    };

    info!("Exporting wanted list {list_id}.");
    let items = protocol.wanted_items(net, list_id, colors.as_ref())?;
    info!("Collected {} items.", items.len());
    Ok(items)
}
