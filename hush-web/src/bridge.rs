use hush_content::{ContactReceipt, ContactRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("browser API unavailable: {0}")]
    Browser(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Rejected(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn json_body<T: DeserializeOwned>(response: &Response) -> Result<T, BridgeError> {
    let promise = response.json().map_err(|e| BridgeError::Decode(js_error(e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| BridgeError::Decode(js_error(e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Decode(e.to_string()))
}

async fn post_json<B, R>(path: &str, body: &B) -> Result<R, BridgeError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let payload = serde_json::to_string(body).map_err(|e| BridgeError::Decode(e.to_string()))?;

    let headers = Headers::new().map_err(|e| BridgeError::Browser(js_error(e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| BridgeError::Browser(js_error(e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(path, &opts).map_err(|e| BridgeError::Browser(js_error(e)))?;
    let window = web_sys::window().ok_or_else(|| BridgeError::Browser("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| BridgeError::Network(js_error(e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| BridgeError::Decode("fetch did not yield a Response".into()))?;

    if response.ok() {
        return json_body(&response).await;
    }
    match json_body::<ErrorBody>(&response).await {
        Ok(body) => Err(BridgeError::Rejected(body.error)),
        Err(_) => Err(BridgeError::Status(response.status())),
    }
}

/// Sends a custom-requirements request to the site backend.
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactReceipt, BridgeError> {
    let receipt: ContactReceipt = post_json(CONTACT_ENDPOINT, request).await?;
    tracing::info!(id = receipt.id, "contact request accepted");
    Ok(receipt)
}
