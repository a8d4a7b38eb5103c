use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use crate::controllers::operation_order_controller::OperationOrderController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::operation_order_dto::{CreateOperationOrderRequest, TotalCostQuery, TotalCostResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ValidatedJson, ValidatedParams};

pub fn create_operation_order_router() -> Router<AppState> {
    Router::new()
        .route("/insert_operation", post(insert_operation))
        .route("/total_cost", get(total_cost))
        .route("/average_cost", get(average_cost))
}

async fn insert_operation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateOperationOrderRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let controller = OperationOrderController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn total_cost(
    State(state): State<AppState>,
    ValidatedParams(query): ValidatedParams<TotalCostQuery>,
) -> Result<Json<TotalCostResponse>, AppError> {
    let controller = OperationOrderController::new(state.pool.clone());
    let response = controller.total_cost(query).await?;
    Ok(Json(response))
}

async fn average_cost(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, f64>>, AppError> {
    let controller = OperationOrderController::new(state.pool.clone());
    let response = controller.average_cost().await?;
    Ok(Json(response))
}
