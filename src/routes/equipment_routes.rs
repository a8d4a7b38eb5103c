use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use crate::controllers::equipment_controller::EquipmentController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::equipment_dto::{
    ActiveEquipmentQuery, CreateEquipmentRequest, EquipmentResponse, UpdateEquipmentStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{ValidatedJson, ValidatedParams};

pub fn create_equipment_router() -> Router<AppState> {
    Router::new()
        .route("/insert_equipment", post(insert_equipment))
        .route("/update_equipment_status", put(update_equipment_status))
        .route("/active_equipments", get(active_equipments))
}

async fn insert_equipment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEquipmentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let controller = EquipmentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_equipment_status(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateEquipmentStatusRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let controller = EquipmentController::new(state.pool.clone());
    let response = controller.deactivate(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn active_equipments(
    State(state): State<AppState>,
    ValidatedParams(query): ValidatedParams<ActiveEquipmentQuery>,
) -> Result<Json<BTreeMap<String, Vec<EquipmentResponse>>>, AppError> {
    let controller = EquipmentController::new(state.pool.clone());
    let response = controller.list_active(query).await?;
    Ok(Json(response))
}
