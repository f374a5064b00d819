use contracts::shared::view::ApiError;
use contracts::usecases::u601_irpv::IrpvResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, classify_status, read_json, ApiCallError};

const API_PATH: &str = "/api/u601/irpv";
const SESSION_HEADER: &str = "x-session-id";

fn unreachable_backend(e: impl std::fmt::Display) -> ApiCallError {
    ApiCallError::Unavailable(format!("Request failed: {}", e))
}

/// Table cached for this session, if any
pub async fn get_table(session_id: &str) -> Result<IrpvResponse, ApiCallError> {
    let response = Request::get(&api_url(API_PATH))
        .header(SESSION_HEADER, session_id)
        .send()
        .await
        .map_err(unreachable_backend)?;
    read_json(response).await
}

pub async fn clear_table(session_id: &str) -> Result<IrpvResponse, ApiCallError> {
    let response = Request::delete(&api_url(API_PATH))
        .header(SESSION_HEADER, session_id)
        .send()
        .await
        .map_err(unreachable_backend)?;
    read_json(response).await
}

/// Upload both files as multipart (`sales`, `workshop`) and get the computed table
pub async fn upload(
    session_id: &str,
    sales: web_sys::File,
    workshop: web_sys::File,
) -> Result<IrpvResponse, ApiCallError> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let js_err = |e: wasm_bindgen::JsValue| ApiCallError::Rejected(format!("{e:?}"));

    let form_data = FormData::new().map_err(js_err)?;
    form_data
        .append_with_blob_and_filename("sales", &sales, &sales.name())
        .map_err(js_err)?;
    form_data
        .append_with_blob_and_filename("workshop", &workshop, &workshop.name())
        .map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(&api_url(API_PATH), &opts).map_err(js_err)?;
    request
        .headers()
        .set(SESSION_HEADER, session_id)
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| ApiCallError::Unavailable("no window".into()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| unreachable_backend(format!("{e:?}")))?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text: String = text
        .as_string()
        .ok_or_else(|| ApiCallError::Unavailable("bad text".to_string()))?;

    if !resp.ok() {
        let status = resp.status();
        let message = serde_json::from_str::<ApiError>(&text)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP error: {}", status));
        return Err(classify_status(status, message));
    }

    serde_json::from_str(&text)
        .map_err(|e| ApiCallError::Unavailable(format!("Failed to parse response: {}", e)))
}
