use std::collections::BTreeMap;

use crate::database::StoreError;
use crate::dto::common_dto::MessageResponse;
use crate::dto::equipment_dto::{
    ActiveEquipmentQuery, CreateEquipmentRequest, EquipmentResponse, UpdateEquipmentStatusRequest,
};
use crate::repositories::equipment_repository::EquipmentRepository;
use crate::repositories::vessel_repository::VesselRepository;
use crate::utils::errors::{bad_request_error, conflict_error, AppError};
use sqlx::PgPool;
use tracing::info;

pub const INVALID_VESSEL_CODE: &str = "Invalid vessel code";
pub const DUPLICATED_EQUIPMENT_CODE: &str = "Duplicated equipment code";

pub struct EquipmentController {
    repository: EquipmentRepository,
    vessels: VesselRepository,
}

impl EquipmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EquipmentRepository::new(pool.clone()),
            vessels: VesselRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateEquipmentRequest) -> Result<MessageResponse, AppError> {
        let vessel_code = request.vessel_code.unwrap_or_default();
        let vessel = self
            .vessels
            .find_by_code(&vessel_code)
            .await?
            .ok_or_else(|| bad_request_error(INVALID_VESSEL_CODE))?;

        let equipment = self
            .repository
            .create(
                vessel.id,
                &request.code.unwrap_or_default(),
                &request.name.unwrap_or_default(),
                &request.location.unwrap_or_default(),
            )
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { .. } => conflict_error(DUPLICATED_EQUIPMENT_CODE),
                // El buque desapareció entre la búsqueda y el insert
                StoreError::ForeignKeyViolation { .. } => bad_request_error(INVALID_VESSEL_CODE),
                other => AppError::Store(other),
            })?;

        info!(
            equipment_id = equipment.id,
            equipment_code = %equipment.code,
            vessel_code = %vessel.code,
            "🔧 Equipo registrado"
        );
        Ok(MessageResponse::ok())
    }

    pub async fn deactivate(
        &self,
        request: UpdateEquipmentStatusRequest,
    ) -> Result<MessageResponse, AppError> {
        let codes = request.codes.unwrap_or_default();

        let updated = self
            .repository
            .deactivate_by_codes(&codes)
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { .. } => conflict_error(DUPLICATED_EQUIPMENT_CODE),
                other => AppError::Store(other),
            })?;

        info!(requested = codes.len(), updated, "🔌 Equipos desactivados");
        Ok(MessageResponse::ok())
    }

    /// Equipos activos del buque, agrupados bajo su código
    pub async fn list_active(
        &self,
        query: ActiveEquipmentQuery,
    ) -> Result<BTreeMap<String, Vec<EquipmentResponse>>, AppError> {
        let vessel_code = query.vessel_code.unwrap_or_default();
        let vessel = self
            .vessels
            .find_by_code(&vessel_code)
            .await?
            .ok_or_else(|| bad_request_error(INVALID_VESSEL_CODE))?;

        let equipments = self.repository.find_active_by_vessel(vessel.id).await?;

        let response = equipments.into_iter().map(EquipmentResponse::from).collect();
        Ok(BTreeMap::from([(vessel.code, response)]))
    }
}
