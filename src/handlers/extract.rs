// handlers/extract.rs - Extractors whose rejections render the `{message, code}` envelope
//
// axum's stock `Json`, `Path` and `Query` reject with plain-text bodies (and
// 422 for JSON that does not match the target type). These wrappers route
// every rejection through `ApiError` so clients always get a 400 envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
