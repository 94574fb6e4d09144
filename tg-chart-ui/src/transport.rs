//! Browser `fetch` transport for the query client.

use tg_core::error::{QueryError, Result};
use tg_core::query::HttpGet;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Message shown when the request never produced a response.
const NETWORK_ERROR: &str = "Network Error";

/// GETs through `window.fetch`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebTransport;

impl HttpGet for WebTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let window =
            web_sys::window().ok_or_else(|| QueryError::Transport("No window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| QueryError::Transport(js_error(&e)))?;

        // fetch only rejects when no response arrived at all
        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                log::warn!("fetch {} failed: {}", url, js_error(&e));
                QueryError::Transport(NETWORK_ERROR.to_string())
            })?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| QueryError::Transport("fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(QueryError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        let text_promise = response
            .text()
            .map_err(|e| QueryError::Transport(js_error(&e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| QueryError::Transport(js_error(&e)))?;
        text.as_string()
            .ok_or_else(|| QueryError::Decode("response body is not text".to_string()))
    }
}

/// Best-effort description of a thrown JS value.
fn js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
