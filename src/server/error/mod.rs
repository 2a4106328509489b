//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, which is the only place failures are logged.

pub mod code;
pub mod config;
pub mod operation;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ApiResponseDto, ErrorDataDto, ErrorDto},
    server::error::{code::ErrorCode, config::ConfigError, operation::OperationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Startup failures (`ConfigErr`, `DbErr`,
/// `IoErr`) are fatal and are reported by `main` rather than rendered.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database connection or migration error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener binding or serving error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Classified failure of a calculate or list-results operation.
    ///
    /// Results in 400 Bad Request with the classified message.
    #[error(transparent)]
    OperationErr(#[from] OperationError),

    /// Request body could not be parsed.
    ///
    /// Results in 400 Bad Request. The detail is logged but not returned.
    ///
    /// # Fields
    /// - Rejection text produced by the JSON extractor
    #[error("{0}")]
    InvalidRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `ValidationFailed`, with one `Field: .. -> Error: ..` string per field
/// - 400 Bad Request - Calculation, persistence and unreadable-body failures, with an `ErrorDto`
/// - 500 Internal Server Error - Anything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::OperationErr(OperationError::ValidationFailed(violations)) => {
                let code = ErrorCode::InvalidParams;
                let errors: Vec<String> = violations.iter().map(ToString::to_string).collect();
                tracing::warn!("Validation errors ({}): {:?}", code.code(), errors);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponseDto::failure(
                        StatusCode::BAD_REQUEST.as_u16(),
                        code.message(),
                        ErrorDataDto::Fields(errors),
                    )),
                )
                    .into_response()
            }
            Self::OperationErr(err) => {
                let code = err.code();
                tracing::error!("{} ({}): {}", code.message(), code.code(), err);

                classified_response(code)
            }
            Self::InvalidRequest(detail) => {
                let code = ErrorCode::InvalidRequest;
                tracing::warn!("{} ({}): {}", code.message(), code.code(), detail);

                classified_response(code)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// 400 Bad Request carrying only the code and its generic message.
fn classified_response(code: ErrorCode) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponseDto::failure(
            StatusCode::BAD_REQUEST.as_u16(),
            code.message(),
            ErrorDataDto::Classified(ErrorDto {
                code: code.code(),
                error: code.message().to_string(),
            }),
        )),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let code = ErrorCode::Generic;
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponseDto::failure(
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "Internal server error",
                ErrorDto {
                    code: code.code(),
                    error: code.message().to_string(),
                },
            )),
        )
            .into_response()
    }
}
