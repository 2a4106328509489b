use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDataDto, ErrorDto},
        operation::{OperationDto, OperationRequestDto, OperationResultDto},
    },
    server::{
        data::operation::OperationRepository,
        error::AppError,
        model::operation::CalculateParams,
        service::operation::{calculator::Calculator, OperationService},
        state::AppState,
    },
};

/// Tag for grouping operation endpoints in OpenAPI documentation
pub static OPERATION_TAG: &str = "operation";

/// Calculate the maximum k.
///
/// Finds the largest k in `[0, n]` with `k mod x = y`, records the request together
/// with the result and returns only the result.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Calculation input, or the rejection if the body could not be read
///
/// # Returns
/// - `201 Created` - Result computed and stored
/// - `400 Bad Request` - Unreadable body, invalid fields, or failed calculation or save
#[utoipa::path(
    post,
    path = "/api/v1/operation",
    tag = OPERATION_TAG,
    request_body = OperationRequestDto,
    responses(
        (status = 201, description = "Result computed and stored", body = ApiResponseDto<OperationResultDto>),
        (status = 400, description = "Invalid fields (list of field messages), unreadable body, or failed calculation or save (classified error)", body = ApiResponseDto<ErrorDataDto>),
        (status = 500, description = "Internal server error", body = ApiResponseDto<ErrorDto>)
    ),
)]
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<OperationRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponseDto<OperationResultDto>>), AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let repo = OperationRepository::new(&state.db);
    let result = OperationService::new(Calculator, &repo)
        .calculate(CalculateParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponseDto::success(
            StatusCode::CREATED.as_u16(),
            "Created",
            OperationResultDto { result },
        )),
    ))
}

/// List every recorded calculation.
///
/// # Returns
/// - `200 OK` - All operations, oldest first
/// - `400 Bad Request` - Records could not be read
#[utoipa::path(
    get,
    path = "/api/v1/operation",
    tag = OPERATION_TAG,
    responses(
        (status = 200, description = "All recorded operations", body = ApiResponseDto<Vec<OperationDto>>),
        (status = 400, description = "Records could not be read", body = ApiResponseDto<ErrorDataDto>),
        (status = 500, description = "Internal server error", body = ApiResponseDto<ErrorDto>)
    ),
)]
pub async fn list_results(
    State(state): State<AppState>,
) -> Result<Json<ApiResponseDto<Vec<OperationDto>>>, AppError> {
    let repo = OperationRepository::new(&state.db);
    let operations = OperationService::new(Calculator, &repo)
        .list_results()
        .await?;

    let dtos = operations.into_iter().map(|o| o.into_dto()).collect();

    Ok(Json(ApiResponseDto::success(
        StatusCode::OK.as_u16(),
        "OK",
        dtos,
    )))
}
