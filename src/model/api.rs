use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope wrapping every API reply.
///
/// `code_status` mirrors the HTTP status code of the response and `message` carries
/// either the status reason phrase or a classified error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponseDto<T> {
    /// `true` for successful replies, `false` for any failure.
    pub status: bool,
    pub code_status: u16,
    pub message: String,
    /// Payload on success, error detail on failure.
    pub data: T,
}

impl<T> ApiResponseDto<T> {
    pub fn success(code_status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            code_status,
            message: message.into(),
            data,
        }
    }

    pub fn failure(code_status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status: false,
            code_status,
            message: message.into(),
            data,
        }
    }
}

/// Classified error detail returned for calculation and persistence failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Stable numeric error code.
    pub code: u16,
    pub error: String,
}

/// `data` of a failed reply.
///
/// Invalid fields produce a list of `Field: <name> -> Error: <message>` strings; every
/// other failure carries a classified `ErrorDto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDataDto {
    Fields(Vec<String>),
    Classified(ErrorDto),
}
