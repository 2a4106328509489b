use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller::operation, state::AppState};

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(operation::calculate, operation::list_results))
}
