// src/config/credentials.rs
//! Where the username and password come from.
//!
//! Precedence per field: explicit flag → config file → interactive prompt.
//! Config files use INI syntax:
//!
//! ```text
//! [user]
//! username = alice
//! password = hunter2
//!
//! [site]
//! protocol = legacy
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dialoguer::{Input, Password};
use tracing::{debug, info, warn};

use super::consts::{CONFIG_FILES, CONFIG_SITE_SECTION, CONFIG_USER_SECTION};
use super::options::ProtocolKind;
use crate::error::{ExportError, Result};
use crate::interrupt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/* ---------------- Config file ---------------- */

/// Parsed INI sections. Keys are lower-cased; section names are kept as is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigFile {
    sections: HashMap<String, HashMap<String, String>>,
}

impl ConfigFile {
    /// Minimal INI reader: `[section]`, `key = value` or `key: value`,
    /// `;`/`#` comment lines. Lines outside a section are ignored.
    pub fn parse(text: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = s!(name.trim());
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }
            let Some(section) = &current else { continue };
            let Some(split) = line.find(['=', ':']) else { continue };

            let key = line[..split].trim().to_ascii_lowercase();
            let value = s!(line[split + 1..].trim());
            if let Some(map) = sections.get_mut(section) {
                map.insert(key, value);
            }
        }

        Self { sections }
    }

    /// Later values win, key by key.
    pub fn merge(&mut self, other: ConfigFile) {
        for (name, keys) in other.sections {
            self.sections.entry(name).or_default().extend(keys);
        }
    }

    /// Read every path that exists; missing files are skipped silently,
    /// unreadable ones with a warning.
    pub fn load(paths: &[PathBuf]) -> Self {
        let mut cfg = ConfigFile::default();
        for path in paths {
            match fs::read_to_string(path) {
                Ok(text) => {
                    debug!("Read config file {}", path.display());
                    cfg.merge(ConfigFile::parse(&text));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!("Skipping config file {}: {e}", path.display()),
            }
        }
        cfg
    }

    /// `~/.bricklink-export.conf` then `~/bricklink-export.ini`.
    pub fn load_default() -> Self {
        match dirs::home_dir() {
            Some(home) => Self::load(&default_paths(&home)),
            None => {
                debug!("No home directory; skipping config files");
                ConfigFile::default()
            }
        }
    }

    /// Non-empty value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.get(CONFIG_USER_SECTION, "username")
    }

    pub fn password(&self) -> Option<&str> {
        self.get(CONFIG_USER_SECTION, "password")
    }

    /// `[site] protocol`; an unknown value is ignored with a warning.
    pub fn protocol(&self) -> Option<ProtocolKind> {
        let raw = self.get(CONFIG_SITE_SECTION, "protocol")?;
        match raw.parse() {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!("{e} in config file; using the default");
                None
            }
        }
    }
}

pub fn default_paths(home: &Path) -> Vec<PathBuf> {
    CONFIG_FILES.iter().map(|name| home.join(name)).collect()
}

/* ---------------- Prompting ---------------- */

/// Interactive fallback for missing credentials.
pub trait Prompt {
    fn username(&mut self) -> Result<String>;
    /// Must not echo.
    fn password(&mut self) -> Result<String>;
}

/// Terminal prompts on stderr. Any prompt failure (closed stdin, no
/// terminal) counts as an interrupt; Ctrl-C is caught by
/// `interrupt::install` and exits with the same status.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn username(&mut self) -> Result<String> {
        interrupt::install();
        Input::<String>::new()
            .with_prompt("Enter username")
            .interact_text()
            .map_err(interrupted)
    }

    fn password(&mut self) -> Result<String> {
        interrupt::install();
        Password::new()
            .with_prompt("Enter password")
            .interact()
            .map_err(interrupted)
    }
}

fn interrupted(e: dialoguer::Error) -> ExportError {
    debug!("Prompt failed: {e}");
    ExportError::Interrupted
}

/* ---------------- Resolution ---------------- */

pub fn resolve(
    username: Option<&str>,
    password: Option<&str>,
    file: &ConfigFile,
    prompt: &mut dyn Prompt,
) -> Result<Credentials> {
    let username = match non_empty(username) {
        Some(u) => s!(u),
        None => match file.username() {
            Some(u) => {
                info!("Read username from config file: {u}");
                s!(u)
            }
            None => {
                info!("No username specified.");
                prompt.username()?
            }
        },
    };

    let password = match non_empty(password) {
        Some(p) => s!(p),
        None => match file.password() {
            Some(p) => {
                info!("Read password from config file.");
                s!(p)
            }
            None => {
                info!("No password specified.");
                prompt.password()?
            }
        },
    };

    Ok(Credentials { username, password })
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}
