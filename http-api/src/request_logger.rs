//! Structured request logging middleware for the REST API
//!
//! Provides single-line request logging with timing and field truncation.

use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Instant;
use tracing::info;

/// Maximum length for body field values before truncation
const MAX_FIELD_LENGTH: usize = 30;

/// Truncation suffix for long values
const TRUNCATION_SUFFIX: &str = "...";

/// API request logging middleware
///
/// Logs requests in the format:
/// `PUT /api/items/3 200 [2 ms] name="Bolt M8", quantity="90"`
pub async fn api_request_logging_middleware(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // Only log API endpoints
    if !path.starts_with("/api") {
        return Ok(next.run(request).await);
    }

    // Buffer the body so the field summary can be logged alongside the line
    let (parts, body) = request.into_parts();
    let body_bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            // If we can't read the body, proceed without logging details
            let new_request = Request::from_parts(parts, Body::empty());
            let response = next.run(new_request).await;
            let duration = start_time.elapsed();
            info!(
                "{} {} {} [{} ms] - body read error",
                method,
                path,
                response.status().as_u16(),
                duration.as_millis()
            );
            return Ok(response);
        }
    };

    let fields_summary = match serde_json::from_slice::<Value>(&body_bytes) {
        Ok(json) => format_body_summary(&json),
        Err(_) => String::new(),
    };

    // Reconstruct request with body
    let new_body = Body::from(body_bytes);
    let new_request = Request::from_parts(parts, new_body);

    // Process request
    let response = next.run(new_request).await;
    let duration = start_time.elapsed();
    let status = response.status().as_u16();

    if fields_summary.is_empty() {
        info!("{} {} {} [{} ms]", method, path, status, duration.as_millis());
    } else {
        info!(
            "{} {} {} [{} ms] {}",
            method,
            path,
            status,
            duration.as_millis(),
            fields_summary
        );
    }

    Ok(response)
}

/// Format a JSON request body into a summary string with truncation
fn format_body_summary(body: &Value) -> String {
    match body {
        Value::Object(map) => {
            let formatted_fields: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}=\"{}\"", key, format_field_value(value)))
                .collect();

            formatted_fields.join(", ")
        }
        Value::Array(arr) => {
            format!("[{} items]", arr.len())
        }
        _ => format_field_value(body),
    }
}

/// Format a single field value with truncation
fn format_field_value(value: &Value) -> String {
    let value_str = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{...{} fields}}", obj.len()),
        Value::Null => "null".to_string(),
    };

    truncate_string(&value_str, MAX_FIELD_LENGTH)
}

/// Truncate string to max length with suffix
fn truncate_string(input: &str, max_length: usize) -> String {
    if input.len() <= max_length {
        input.to_string()
    } else {
        let mut cut = max_length.saturating_sub(TRUNCATION_SUFFIX.len());
        // Cut on a char boundary
        while !input.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}{}", &input[..cut], TRUNCATION_SUFFIX)
    }
}
