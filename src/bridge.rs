use crate::dto::{
    ApiEnvelope, LoginData, MissingReportDto, ProfileData, SightingReportDto, UserRecord,
};
use crate::role::Role;
use js_sys::Reflect;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Base URL of the CivicIQ backend. A deployment can override it by setting
/// `window.CIVICIQ_API_BASE` before the bundle loads.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return DEFAULT_API_BASE.to_string();
    };
    Reflect::get(&window, &JsValue::from_str("CIVICIQ_API_BASE"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

fn build_request(
    method: &str,
    path: &str,
    body: Option<&JsValue>,
    bearer: Option<&str>,
    json_body: bool,
) -> Result<Request, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }
    let request = Request::new_with_str_and_init(&endpoint(path), &opts)
        .map_err(|e| format!("invalid request: {e:?}"))?;
    let headers = request.headers();
    if json_body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("header rejected: {e:?}"))?;
    }
    if let Some(token) = bearer {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| format!("header rejected: {e:?}"))?;
    }
    Ok(request)
}

async fn send<R>(request: Request) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("request failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;
    let body = response
        .json()
        .map_err(|e| format!("response body unavailable: {e:?}"))?;
    let value = JsFuture::from(body)
        .await
        .map_err(|e| format!("invalid response body: {e:?}"))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

pub async fn get_json<R>(path: &str, bearer: Option<&str>) -> Result<R, String>
where
    R: DeserializeOwned,
{
    send(build_request("GET", path, None, bearer, false)?).await
}

pub async fn post_json<A, R>(path: &str, body: &A, bearer: Option<&str>) -> Result<R, String>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let payload = JsValue::from_str(&payload);
    send(build_request("POST", path, Some(&payload), bearer, true)?).await
}

pub async fn post_form<R>(path: &str, form: &FormData) -> Result<R, String>
where
    R: DeserializeOwned,
{
    // The browser supplies the multipart content type and boundary.
    send(build_request("POST", path, Some(form.as_ref()), None, false)?).await
}

pub async fn login(email: &str, password: &str, role: Role) -> Result<LoginData, String> {
    let env: ApiEnvelope<LoginData> = post_json(
        "/auth/login",
        &serde_json::json!({
            "email": email,
            "password": password,
            "role": role.as_str(),
        }),
        None,
    )
    .await?;
    env.into_result()
}

pub async fn signup(role: Role, payload: &serde_json::Value) -> Result<String, String> {
    let env: ApiEnvelope<serde_json::Value> =
        post_json(&format!("/auth/signup/{}", role.as_str()), payload, None).await?;
    env.into_message()
}

pub async fn fetch_profile(token: &str) -> Result<UserRecord, String> {
    let env: ApiEnvelope<ProfileData> = get_json("/auth/profile", Some(token)).await?;
    env.into_result().map(|data| data.user)
}

pub async fn submit_missing_report(form: &FormData) -> Result<String, String> {
    let env: ApiEnvelope<serde_json::Value> = post_form("/report_missing", form).await?;
    env.into_message()
}

pub async fn submit_sighting(
    token: &str,
    photo_url: &str,
    location: &str,
    date_time: &str,
    description: &str,
) -> Result<String, String> {
    let env: ApiEnvelope<serde_json::Value> = post_json(
        "/report/unknown-person",
        &serde_json::json!({
            "photoURL": photo_url,
            "location": location,
            "dateTime": date_time,
            "description": description,
        }),
        Some(token),
    )
    .await?;
    env.into_message()
}

pub async fn missing_reports(
    token: &str,
    user_id: &str,
) -> Result<Vec<MissingReportDto>, String> {
    let env: ApiEnvelope<Vec<MissingReportDto>> = get_json(
        &format!("/user_missing_reports?user_id={user_id}"),
        Some(token),
    )
    .await?;
    env.into_result()
}

pub async fn spotted_reports(
    token: &str,
    user_id: &str,
) -> Result<Vec<SightingReportDto>, String> {
    let env: ApiEnvelope<Vec<SightingReportDto>> = get_json(
        &format!("/user_spotted_reports?user_id={user_id}"),
        Some(token),
    )
    .await?;
    env.into_result()
}
