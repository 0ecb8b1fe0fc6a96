use crate::shared::base64_helpers::decode_ignoring_line_breaks;
use axum::body::Bytes;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

/// Echo a POST body back as `Received POST body: <body>`
pub async fn echo_body(method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return invalid_method();
    }

    info!("Received POST body: {}", String::from_utf8_lossy(&body));
    text_response(StatusCode::OK, prefixed(b"Received POST body: ", &body))
}

/// Base64-decode a POST body and echo the result as `Decoded data: <data>`
pub async fn decode_body(method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return invalid_method();
    }

    match decode_ignoring_line_breaks(&body) {
        Ok(decoded) => {
            info!("Decoded data: {}", String::from_utf8_lossy(&decoded));
            text_response(StatusCode::OK, prefixed(b"Decoded data: ", &decoded))
        }
        Err(e) => {
            let body_text = String::from_utf8_lossy(&body);
            warn!(error = %e, "Base64 Decoding Failed: '{}'", body_text);
            error_response(
                StatusCode::BAD_REQUEST,
                &format!("Base64 Decoding Failed: '{}'", body_text),
            )
        }
    }
}

fn invalid_method() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Invalid request method")
}

fn prefixed(prefix: &[u8], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + data.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(data);
    out
}

fn text_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Plain-text error with a trailing newline, not sniffable as HTML
fn error_response(status: StatusCode, message: &str) -> Response {
    let mut response = text_response(status, format!("{}\n", message).into_bytes());
    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}
