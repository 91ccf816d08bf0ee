// src/core/payload.rs
//
// Pages on the modern site carry their data as a script assignment:
//   var wlJson = {...};
// on a single line. Pull that object out and hand it to serde.

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::{ExportError, Result};

/// JSON object text assigned to `marker` (e.g. `var wlJson`).
/// `what` names the page in error messages.
pub fn extract_payload<'a>(doc: &'a str, marker: &str, what: &str) -> Result<&'a str> {
    let pattern = format!(r"{}\s*=\s*(\{{.+?\}});\r?\n", regex::escape(marker));
    let re = Regex::new(&pattern).map_err(|e| ExportError::format(format!("Bad payload pattern: {e}")))?;

    re.captures(doc)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ExportError::format(format!("Unexpected {what} format.")))
}

/// Parse JSON text into `T`. Anything serde rejects, including missing or
/// ill-typed fields, is a format error.
pub fn decode<T: DeserializeOwned>(text: &str, what: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        tracing::debug!("{what}: {e}");
        ExportError::format(format!("Invalid JSON found in {what}."))
    })
}

/// `extract_payload` then `decode`.
pub fn embedded<T: DeserializeOwned>(doc: &str, marker: &str, what: &str) -> Result<T> {
    decode(extract_payload(doc, marker, what)?, what)
}
