use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with rejections reported through `AppError`, so malformed
/// bodies get the same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
