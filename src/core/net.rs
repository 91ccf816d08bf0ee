// src/core/net.rs

// Blocking HTTP session: one cookie jar, two clients.

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{ExportError, Result};

/// What the pipeline needs from a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

/// The network seam. `HttpSession` talks to the site; tests script pages.
pub trait Transport {
    /// GET, following redirects.
    fn get(&mut self, url: &str) -> Result<Response>;

    /// Form POST, redirects left for the caller to inspect.
    fn post_form(&mut self, url: &str, form: &[(&str, &str)]) -> Result<Response>;
}

pub struct HttpSession {
    pages: Client,
    forms: Client,
}

impl HttpSession {
    pub fn new() -> Result<Self> {
        let jar = Arc::new(Jar::default());

        let pages = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| ExportError::fetch(format!("Could not create HTTP client: {e}")))?;

        let forms = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(jar)
            .redirect(Policy::none())
            .build()
            .map_err(|e| ExportError::fetch(format!("Could not create HTTP client: {e}")))?;

        Ok(Self { pages, forms })
    }
}

fn read(resp: reqwest::blocking::Response) -> reqwest::Result<Response> {
    let status = resp.status().as_u16();
    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body = resp.text()?;
    Ok(Response { status, location, body })
}

impl Transport for HttpSession {
    fn get(&mut self, url: &str) -> Result<Response> {
        debug!("GET {url}");
        self.pages
            .get(url)
            .send()
            .and_then(read)
            .map_err(|e| ExportError::fetch(format!("GET {url} failed: {e}")))
    }

    fn post_form(&mut self, url: &str, form: &[(&str, &str)]) -> Result<Response> {
        debug!("POST {url}");
        self.forms
            .post(url)
            .form(form)
            .send()
            .and_then(read)
            .map_err(|e| ExportError::fetch(format!("POST {url} failed: {e}")))
    }
}

/// GET a page body; no response or a non-success status becomes a
/// `Fetch` error carrying `failure` as its message.
pub fn fetch_page(net: &mut dyn Transport, url: &str, failure: &str) -> Result<String> {
    match net.get(url) {
        Ok(r) if r.is_success() => Ok(r.body),
        Ok(r) => {
            debug!("HTTP {} for {url}", r.status);
            Err(ExportError::fetch(failure))
        }
        Err(e) => {
            debug!("{e}");
            Err(ExportError::fetch(failure))
        }
    }
}
