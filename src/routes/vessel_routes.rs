use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use crate::controllers::vessel_controller::VesselController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::vessel_dto::CreateVesselRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::ValidatedJson;

pub fn create_vessel_router() -> Router<AppState> {
    Router::new().route("/insert_vessel", post(insert_vessel))
}

async fn insert_vessel(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateVesselRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let controller = VesselController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
