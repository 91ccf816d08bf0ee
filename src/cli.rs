// src/cli.rs
use std::io;

use clap::{ArgGroup, CommandFactory, Parser};

use crate::config::credentials::{ConfigFile, TerminalPrompt};
use crate::config::options::{Mode, Options, ProtocolKind};
use crate::core::net::HttpSession;
use crate::error::Result;
use crate::{log, runner};

/// Export a BrickLink wanted list.
#[derive(Parser, Debug)]
#[command(name = "bricklink-export", version)]
#[command(group(ArgGroup::new("mode").args(["colors", "list", "export"])))]
pub struct Args {
    /// Be verbose (diagnostics on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Username on BrickLink
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password on BrickLink (omit for prompt)
    #[arg(short, long)]
    pub password: Option<String>,

    /// List of wanted lists
    #[arg(short, long)]
    pub list: bool,

    /// List of colors
    #[arg(short, long)]
    pub colors: bool,

    /// Wanted list to export
    #[arg(short, long, value_name = "ID")]
    pub export: Option<u32>,

    /// Override wanted list id in export
    #[arg(short, long, value_name = "ID", requires = "export", conflicts_with_all = ["list", "colors"])]
    pub wanted: Option<u32>,

    /// Site generation to talk to (default: modern, or `[site] protocol`
    /// in the config file)
    #[arg(long, value_enum)]
    pub protocol: Option<ProtocolKind>,
}

impl Args {
    /// `None` when no mode flag was given.
    pub fn into_options(self) -> Option<Options> {
        let mode = if self.colors {
            Mode::Colors
        } else if self.list {
            Mode::Lists
        } else if let Some(list_id) = self.export {
            Mode::Export { list_id, wanted: self.wanted }
        } else {
            return None;
        };

        Some(Options {
            mode,
            verbose: self.verbose,
            username: self.username,
            password: self.password,
            protocol: self.protocol,
        })
    }
}

pub fn run() -> Result<()> {
    let Some(opts) = Args::parse().into_options() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    log::init(opts.verbose);

    let mut net = HttpSession::new()?;
    let config = ConfigFile::load_default();
    let stdout = io::stdout();

    runner::run(&opts, &mut net, &config, &mut TerminalPrompt, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bricklink-export").chain(args.iter().copied()))
    }

    #[test]
    fn export_with_override() {
        let opts = parse(&["-v", "-e", "42", "-w", "7", "-u", "alice"]).unwrap().into_options().unwrap();
        assert_eq!(opts.mode, Mode::Export { list_id: 42, wanted: Some(7) });
        assert!(opts.verbose);
        assert_eq!(opts.username.as_deref(), Some("alice"));
        assert_eq!(opts.password, None);
    }

    #[test]
    fn no_mode_means_usage() {
        assert!(parse(&[]).unwrap().into_options().is_none());
        assert!(parse(&["-v"]).unwrap().into_options().is_none());
    }

    #[test]
    fn modes_are_exclusive() {
        assert!(parse(&["-l", "-c"]).is_err());
        assert!(parse(&["-l", "-e", "1"]).is_err());
    }

    #[test]
    fn wanted_needs_export() {
        assert!(parse(&["-w", "3"]).is_err());
        assert!(parse(&["-l", "-w", "3"]).is_err());
        assert!(parse(&["-c", "-w", "3"]).is_err());
        assert!(parse(&["-e", "1", "-w", "3"]).is_ok());
    }

    #[test]
    fn protocol_flag() {
        let opts = parse(&["-c", "--protocol", "legacy"]).unwrap().into_options().unwrap();
        assert_eq!(opts.mode, Mode::Colors);
        assert_eq!(opts.protocol, Some(ProtocolKind::Legacy));
    }
}
