//! Panic recovery for the request pipeline.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use common::AppError;

/// Turn a handler panic into the standard 500 error body.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// payload is logged, never returned to the caller.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("request handler panicked: {}", detail)).into_response()
}
