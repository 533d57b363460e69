//! Backend Client
//!
//! JSON-over-HTTP client for a future server-backed mode. No live workflow
//! calls this yet; local storage is the only persistence in use. Kept as the
//! seam where pantry and waste sync would plug in.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Server address a real deployment would point at
pub const API_URL: &str = "http://localhost/ecopantry/api";

pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub async fn get(&self, path: &str) -> Result<serde_json::Value, String> {
        self.request(path, "GET", None).await
    }

    pub async fn post(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value, String> {
        self.request(path, "POST", Some(body)).await
    }

    async fn request(
        &self,
        path: &str,
        method: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, String> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = body {
            let raw = serde_json::to_string(body).map_err(|e| e.to_string())?;
            opts.set_body(&JsValue::from_str(&raw));
        }

        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| "unexpected fetch response".to_string())?;

        if !response.ok() {
            return Err(format!("HTTP error! Status: {}", response.status()));
        }

        let json = JsFuture::from(response.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(value: JsValue) -> String {
    format!("{:?}", value)
}
