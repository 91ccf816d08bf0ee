// src/specs/login.rs
//! Reading the login response, for both site generations.

use serde_json::Value;

use crate::config::consts::LOGIN_REDIRECT_SUFFIX;
use crate::core::net::Response;
use crate::error::{ExportError, Result};

pub const COULD_NOT_LOG_IN: &str = "Could not log in to BrickLink.";
const BAD_CREDENTIALS: &str = "Invalid username or password specified.";

/// `login.ajax` answers with JSON; `returnCode` 0 means logged in.
pub fn check_ajax_reply(resp: &Response) -> Result<()> {
    if !resp.is_success() {
        return Err(ExportError::auth(COULD_NOT_LOG_IN));
    }

    let reply: Value = serde_json::from_str(&resp.body)
        .map_err(|_| ExportError::auth("Invalid JSON in authentication response."))?;

    match reply.get("returnCode").and_then(Value::as_i64) {
        Some(0) => Ok(()),
        _ => Err(ExportError::auth(BAD_CREDENTIALS)),
    }
}

/// `login.asp` redirects to `pageRedirect.asp?p=my.asp` on success and
/// re-renders the form otherwise.
pub fn check_redirect(resp: &Response) -> Result<()> {
    if resp.is_redirect() {
        let target = resp.location.as_deref().unwrap_or_default();
        return if target.ends_with(LOGIN_REDIRECT_SUFFIX) {
            Ok(())
        } else {
            Err(ExportError::auth(BAD_CREDENTIALS))
        };
    }
    if resp.is_success() {
        return Err(ExportError::auth(BAD_CREDENTIALS));
    }
    Err(ExportError::auth(COULD_NOT_LOG_IN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(status: u16, location: Option<&str>, body: &str) -> Response {
        Response { status, location: location.map(String::from), body: s!(body) }
    }

    #[test]
    fn ajax_return_code_zero_is_success() {
        assert!(check_ajax_reply(&resp(200, None, r#"{"returnCode":0,"returnMessage":"OK"}"#)).is_ok());
    }

    #[test]
    fn ajax_failures() {
        let e = check_ajax_reply(&resp(200, None, r#"{"returnCode":-1}"#)).unwrap_err();
        assert_eq!(e.to_string(), BAD_CREDENTIALS);

        let e = check_ajax_reply(&resp(200, None, "<html>")).unwrap_err();
        assert!(matches!(e, ExportError::Authentication(_)));

        let e = check_ajax_reply(&resp(500, None, "")).unwrap_err();
        assert_eq!(e.to_string(), COULD_NOT_LOG_IN);

        // missing code is not success
        assert!(check_ajax_reply(&resp(200, None, "{}")).is_err());
    }

    #[test]
    fn legacy_redirect_target_decides() {
        assert!(check_redirect(&resp(302, Some("pageRedirect.asp?p=my.asp"), "")).is_ok());
        assert!(check_redirect(&resp(302, Some("/login.asp?err=1"), "")).is_err());
        assert!(check_redirect(&resp(200, None, "<form>")).is_err());
        assert_eq!(
            check_redirect(&resp(503, None, "")).unwrap_err().to_string(),
            COULD_NOT_LOG_IN
        );
    }
}
