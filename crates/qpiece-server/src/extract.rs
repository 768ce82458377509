//! Extractors whose rejections answer like every other API error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// `Json` body; a malformed body becomes a 400 JSON string.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` string; a missing or malformed parameter becomes a 400 JSON string.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
