//! Network fetching utilities.
//!
//! - [`fetch_text`] raw text with a timeout (preview bodies)
//! - [`fetch_json`] / [`post_json`] JSON exchange with the file server

use gloo_net::http::Request as HttpRequest;
use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch text from a same-origin URL, giving up after `FETCH_TIMEOUT_MS`.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            text.as_string().ok_or(FetchError::InvalidContent)
        }
    }
}

/// GET and parse JSON.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = HttpRequest::get(url)
        .send()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// POST a JSON body and parse the JSON answer.
///
/// Admin endpoints answer refusals with a 4xx status *and* a JSON body
/// carrying the reason, so the body is parsed regardless of status. Only an
/// unparsable error response becomes [`FetchError::HttpError`].
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = HttpRequest::post(url)
        .json(body)
        .map_err(|_| FetchError::RequestCreationFailed)?
        .send()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    parse_json_body(&text, ok, status)
}

/// Parse an answer body, falling back to the HTTP status for error bodies
/// that are not JSON.
pub fn parse_json_body<T: DeserializeOwned>(
    text: &str,
    ok: bool,
    status: u16,
) -> Result<T, FetchError> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(FetchError::HttpError(status)),
        Err(e) => Err(FetchError::JsonParseError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::AdminResponse;

    #[test]
    fn test_parse_error_body_with_json() {
        let parsed: AdminResponse = parse_json_body(r#"{"error": "新名称已存在"}"#, false, 400).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("新名称已存在"));
    }

    #[test]
    fn test_parse_error_body_without_json() {
        let parsed: Result<AdminResponse, _> = parse_json_body("<html>502</html>", false, 502);
        assert_eq!(parsed, Err(FetchError::HttpError(502)));
    }

    #[test]
    fn test_parse_ok_body_without_json() {
        let parsed: Result<AdminResponse, _> = parse_json_body("oops", true, 200);
        assert!(matches!(parsed, Err(FetchError::JsonParseError(_))));
    }
}
