//! HTTP client wrapper - issues requests against the configured backend and
//! decodes responses by their declared content type

use anyhow::anyhow;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::models::{MaintenanceRecord, NewMaintenance, Vehicle};

/// Fallback shown when the create endpoint returns no `message` field
pub const DEFAULT_CREATE_MESSAGE: &str = "Record inserted successfully";

/// Decoded response body, split by the response's content-type header
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Json(serde_json::Value),
    Text(String),
}

/// Thin client over the maintenance backend's REST endpoints
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        ApiClient {
            base: base.trim_end_matches('/').to_string(),
            http: create_client(),
        }
    }

    #[allow(dead_code)]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Issue a request to `<base>/<path>` with a JSON content type. Non-success
    /// statuses fail with the response body text as the error message.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> anyhow::Result<ApiPayload> {
        let url = format!("{}/{}", self.base, path.trim_start_matches('/'));

        let mut builder = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(describe_send_error)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        let text = response
            .text()
            .await
            .map_err(|e| anyhow!("Error reading body: {}", e))?;

        interpret_response(status, &content_type, text)
    }

    pub async fn vehicles(&self) -> anyhow::Result<Vec<Vehicle>> {
        let payload = self.request(Method::GET, "vehicles", None).await?;
        decode_list(payload)
    }

    pub async fn vehicle(&self, id: &str) -> anyhow::Result<Vehicle> {
        let path = format!("vehicle/{}", encode_segment(id));
        let payload = self.request(Method::GET, &path, None).await?;
        decode_value(payload)
    }

    pub async fn maintenance(&self, id: &str) -> anyhow::Result<Vec<MaintenanceRecord>> {
        let path = format!("vehicle/{}/viewmaintenance", encode_segment(id));
        let payload = self.request(Method::GET, &path, None).await?;
        decode_list(payload)
    }

    pub async fn maintenance_by_pair(
        &self,
        vid: &str,
        sid: &str,
    ) -> anyhow::Result<Vec<MaintenanceRecord>> {
        let path = format!(
            "vehicle/{}/{}/viewmaintenancebyvidsid",
            encode_segment(vid),
            encode_segment(sid)
        );
        let payload = self.request(Method::GET, &path, None).await?;
        decode_list(payload)
    }

    /// Returns the backend's confirmation message
    pub async fn add_maintenance(
        &self,
        vid: &str,
        sid: &str,
        record: &NewMaintenance,
    ) -> anyhow::Result<String> {
        let path = format!(
            "vehicle/{}/{}/addmaintenance",
            encode_segment(vid),
            encode_segment(sid)
        );
        let body = serde_json::to_value(record)?;
        let payload = self.request(Method::POST, &path, Some(&body)).await?;
        Ok(success_message(payload))
    }
}

/// Create an HTTP client with default configuration. No request timeout: the
/// user can re-trigger any action manually.
fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Percent-encode a path segment built from user input
fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw.trim()).into_owned()
}

/// Map a transport-level failure to a display message
fn describe_send_error(e: reqwest::Error) -> anyhow::Error {
    if e.is_connect() {
        anyhow!("Connection failed: {}", e)
    } else {
        anyhow!("Request failed: {}", e)
    }
}

/// Apply the wrapper contract: non-success statuses fail with the body text
/// (or a generic status message when empty), success bodies decode as JSON
/// only when the content type says so.
fn interpret_response(
    status: u16,
    content_type: &str,
    body: String,
) -> anyhow::Result<ApiPayload> {
    if !(200..300).contains(&status) {
        // Go's http.Error terminates the message with a newline
        let message = body.trim();
        if message.is_empty() {
            return Err(anyhow!("Request failed: {}", status));
        }
        return Err(anyhow!("{}", message));
    }

    if content_type.contains("application/json") {
        let value = serde_json::from_str(&body)
            .map_err(|e| anyhow!("Invalid JSON response: {}", e))?;
        Ok(ApiPayload::Json(value))
    } else {
        Ok(ApiPayload::Text(body))
    }
}

/// A payload that is not a JSON sequence yields an empty list, never an error
fn decode_list<T: DeserializeOwned>(payload: ApiPayload) -> anyhow::Result<Vec<T>> {
    match payload {
        ApiPayload::Json(value @ serde_json::Value::Array(_)) => {
            serde_json::from_value(value).map_err(|e| anyhow!("Invalid record in response: {}", e))
        }
        _ => Ok(Vec::new()),
    }
}

fn decode_value<T: DeserializeOwned>(payload: ApiPayload) -> anyhow::Result<T> {
    match payload {
        ApiPayload::Json(value) => {
            serde_json::from_value(value).map_err(|e| anyhow!("Invalid response: {}", e))
        }
        ApiPayload::Text(text) => Err(anyhow!("Unexpected response: {}", text)),
    }
}

fn success_message(payload: ApiPayload) -> String {
    match payload {
        ApiPayload::Json(value) => value
            .get("message")
            .and_then(|message| message.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_CREATE_MESSAGE.to_string()),
        ApiPayload::Text(_) => DEFAULT_CREATE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_surfaces_body_text() {
        let err = interpret_response(500, "text/plain", "db error\n".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "db error");
    }

    #[test]
    fn test_failure_with_empty_body_uses_status() {
        let err = interpret_response(500, "", String::new()).unwrap_err();
        assert_eq!(err.to_string(), "Request failed: 500");
    }

    #[test]
    fn test_plain_text_is_not_parsed_as_json() {
        let payload =
            interpret_response(200, "text/plain", r#"{"looks":"like json"}"#.to_string()).unwrap();
        assert_eq!(payload, ApiPayload::Text(r#"{"looks":"like json"}"#.to_string()));
    }

    #[test]
    fn test_json_content_type_is_decoded() {
        let payload =
            interpret_response(200, "application/json; charset=utf-8", "[1,2]".to_string())
                .unwrap();
        assert_eq!(payload, ApiPayload::Json(serde_json::json!([1, 2])));
    }

    #[test]
    fn test_non_sequence_payload_becomes_empty_list() {
        // The backend encodes an empty result set as JSON null
        let null = ApiPayload::Json(serde_json::Value::Null);
        let list: Vec<Vehicle> = decode_list(null).unwrap();
        assert!(list.is_empty());

        let object = ApiPayload::Json(serde_json::json!({"message": "ok"}));
        let list: Vec<Vehicle> = decode_list(object).unwrap();
        assert!(list.is_empty());

        let text = ApiPayload::Text("not json".to_string());
        let list: Vec<Vehicle> = decode_list(text).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_sequence_payload_decodes_records() {
        let payload = ApiPayload::Json(serde_json::json!([{
            "service_id": 101,
            "vehicle_id": 1,
            "service_date": "2024-03-01",
            "part_code": "OIL-FLTR",
            "rate": 10.5,
            "taxable_amount": 2.0,
            "final_amount": 12.5
        }]));
        let list: Vec<MaintenanceRecord> = decode_list(payload).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].part_code, "OIL-FLTR");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(encode_segment("1"), "1");
        assert_eq!(encode_segment(" 1 "), "1");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("a b"), "a%20b");
    }

    #[test]
    fn test_success_message_fallback() {
        let with_message = ApiPayload::Json(serde_json::json!({"message": "stored"}));
        assert_eq!(success_message(with_message), "stored");

        let without = ApiPayload::Json(serde_json::json!({"record": {}}));
        assert_eq!(success_message(without), DEFAULT_CREATE_MESSAGE);
    }
}
