use std::collections::BTreeMap;

use crate::database::StoreError;
use crate::dto::common_dto::MessageResponse;
use crate::dto::operation_order_dto::{
    quantize_cost, CreateOperationOrderRequest, TotalCostQuery, TotalCostResponse,
};
use crate::repositories::equipment_repository::EquipmentRepository;
use crate::repositories::operation_order_repository::OperationOrderRepository;
use crate::utils::errors::{bad_request_error, AppError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

pub const INVALID_EQUIPMENT_CODE: &str = "Invalid equipment code";
pub const INVALID_PARAMETERS: &str = "Invalid parameters";

pub struct OperationOrderController {
    repository: OperationOrderRepository,
    equipments: EquipmentRepository,
}

impl OperationOrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OperationOrderRepository::new(pool.clone()),
            equipments: EquipmentRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateOperationOrderRequest,
    ) -> Result<MessageResponse, AppError> {
        let code = request.code.unwrap_or_default();
        let equipment = self
            .equipments
            .find_by_code(&code)
            .await?
            .ok_or_else(|| bad_request_error(INVALID_EQUIPMENT_CODE))?;

        let cost = quantize_cost(request.cost.unwrap_or_default());
        let order = self
            .repository
            .create(equipment.id, &request.order_type.unwrap_or_default(), cost)
            .await
            .map_err(|e| match e {
                StoreError::ForeignKeyViolation { .. } => bad_request_error(INVALID_EQUIPMENT_CODE),
                other => AppError::Store(other),
            })?;

        info!(
            order_id = order.id,
            equipment_code = %equipment.code,
            cost = %order.cost,
            "🧾 Orden de operación registrada"
        );
        Ok(MessageResponse::ok())
    }

    /// Costo total de las órdenes de los equipos que coinciden por código o nombre.
    /// Un filtro ausente se compara contra la cadena vacía y no coincide con nada.
    pub async fn total_cost(&self, query: TotalCostQuery) -> Result<TotalCostResponse, AppError> {
        let code = query.code.unwrap_or_default();
        let name = query.name.unwrap_or_default();

        let equipment_ids = self.equipments.find_ids_by_code_or_name(&code, &name).await?;
        if equipment_ids.is_empty() {
            return Err(bad_request_error(INVALID_PARAMETERS));
        }

        let total = self.repository.total_cost_for_equipment(&equipment_ids).await?;
        Ok(TotalCostResponse {
            total_cost: to_number(total)?,
        })
    }

    pub async fn average_cost(&self) -> Result<BTreeMap<String, f64>, AppError> {
        let averages = self.repository.average_cost_by_vessel().await?;

        let mut response = BTreeMap::new();
        for row in averages {
            response.insert(row.vessel_code, to_number(row.average_cost)?);
        }
        Ok(response)
    }
}

fn to_number(value: Decimal) -> Result<f64, AppError> {
    value
        .to_f64()
        .ok_or_else(|| AppError::Internal(format!("Cost {} is not representable", value)))
}
