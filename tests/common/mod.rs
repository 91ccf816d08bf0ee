// tests/common/mod.rs
//
// Scripted transport + helpers shared by the integration tests.
//
#![allow(dead_code)]

use std::collections::HashMap;

use bricklink_export::config::credentials::{ConfigFile, Prompt};
use bricklink_export::config::options::Options;
use bricklink_export::core::net::{Response, Transport};
use bricklink_export::{ExportError, Result, runner};

/// Canned responses keyed by URL. Anything unscripted answers 404.
#[derive(Default)]
pub struct Scripted {
    responses: HashMap<String, Response>,
    pub requests: Vec<String>,
    pub forms: Vec<Vec<(String, String)>>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.respond(url, 200, None, body)
    }

    pub fn respond(mut self, url: impl Into<String>, status: u16, location: Option<&str>, body: impl Into<String>) -> Self {
        self.responses.insert(
            url.into(),
            Response { status, location: location.map(String::from), body: body.into() },
        );
        self
    }

    /// How many requests went to URLs starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.requests.iter().filter(|u| u.starts_with(prefix)).count()
    }

    fn answer(&mut self, url: &str) -> Response {
        self.requests.push(url.to_string());
        self.responses.get(url).cloned().unwrap_or(Response {
            status: 404,
            location: None,
            body: String::new(),
        })
    }
}

impl Transport for Scripted {
    fn get(&mut self, url: &str) -> Result<Response> {
        Ok(self.answer(url))
    }

    fn post_form(&mut self, url: &str, form: &[(&str, &str)]) -> Result<Response> {
        self.forms.push(form.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect());
        Ok(self.answer(url))
    }
}

/// Fails the test if anything tries to prompt.
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn username(&mut self) -> Result<String> {
        Err(ExportError::Interrupted)
    }
    fn password(&mut self) -> Result<String> {
        Err(ExportError::Interrupted)
    }
}

pub fn with_credentials(mut opts: Options) -> Options {
    opts.username = Some("alice".into());
    opts.password = Some("hunter2".into());
    opts
}

/// Run the pipeline; returns the result and whatever reached stdout.
pub fn run(opts: &Options, net: &mut Scripted) -> (Result<()>, String) {
    let mut out: Vec<u8> = Vec::new();
    let res = runner::run(opts, net, &ConfigFile::default(), &mut NoPrompt, &mut out);
    (res, String::from_utf8(out).unwrap())
}

pub fn modern_doc(payload: &serde_json::Value) -> String {
    format!("<html><head><script type=\"text/javascript\">\r\n  var wlJson = {payload};\r\n</script></head><body></body></html>")
}

pub fn color_guide(colors: &[(u32, &str)]) -> String {
    let mut rows = String::from(
        "<tr><td>ID</td><td>Color</td><td></td><td>Name</td><td>Parts</td>\
         <td>In Sets</td><td>Wanted</td><td>For Sale</td><td>Color Timeline</td></tr>",
    );
    for (id, name) in colors {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>&nbsp;</td><td></td><td>{name}</td><td>1</td>\
             <td>1</td><td>1</td><td>1</td><td>2001 - 2024</td></tr>"
        ));
    }
    format!("<html><body><table>{rows}</table></body></html>")
}
