use crate::database::StoreError;
use crate::dto::common_dto::MessageResponse;
use crate::dto::vessel_dto::CreateVesselRequest;
use crate::repositories::vessel_repository::VesselRepository;
use crate::utils::errors::{conflict_error, AppError};
use sqlx::PgPool;
use tracing::info;

pub const DUPLICATED_VESSEL_CODE: &str = "Duplicated vessel code";

pub struct VesselController {
    repository: VesselRepository,
}

impl VesselController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VesselRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVesselRequest) -> Result<MessageResponse, AppError> {
        let code = request.code.unwrap_or_default();

        let vessel = self.repository.create(&code).await.map_err(|e| match e {
            StoreError::UniqueViolation { .. } => conflict_error(DUPLICATED_VESSEL_CODE),
            other => AppError::Store(other),
        })?;

        info!(vessel_id = vessel.id, vessel_code = %vessel.code, "🚢 Buque registrado");
        Ok(MessageResponse::ok())
    }
}
