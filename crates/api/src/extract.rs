//! Extractors whose rejections render through [`AppError`].
//!
//! Axum's stock `Json`, `Path` and `Query` reply with plain-text bodies and their own
//! status codes; these wrappers keep every failure in the `{error, code}`
//! shape. A malformed body maps to 412 `INVALID_PAYLOAD`.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
