use crate::database::StoreResult;
use crate::models::operation_order::{OperationOrder, VesselAverageCost};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct OperationOrderRepository {
    pool: PgPool,
}

impl OperationOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        equipment_id: i64,
        order_type: &str,
        cost: Decimal,
    ) -> StoreResult<OperationOrder> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, OperationOrder>(
            r#"
            INSERT INTO operation_order (equipment_id, type, cost)
            VALUES ($1, $2, $3)
            RETURNING id, equipment_id, type, cost
            "#
        )
        .bind(equipment_id)
        .bind(order_type)
        .bind(cost)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(order)
    }

    /// Suma de costos de las órdenes de los equipos indicados (0 si no hay órdenes)
    pub async fn total_cost_for_equipment(&self, equipment_ids: &[i64]) -> StoreResult<Decimal> {
        let (total,): (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(cost), 0) FROM operation_order WHERE equipment_id = ANY($1)"
        )
        .bind(equipment_ids)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Costo promedio por buque, redondeado a dos decimales.
    /// Los buques sin órdenes no aparecen.
    pub async fn average_cost_by_vessel(&self) -> StoreResult<Vec<VesselAverageCost>> {
        let averages = sqlx::query_as::<_, VesselAverageCost>(
            r#"
            SELECT v.code AS vessel_code, ROUND(AVG(o.cost), 2) AS average_cost
            FROM operation_order o
            JOIN equipments e ON e.id = o.equipment_id
            JOIN vessels v ON v.id = e.vessel_id
            GROUP BY v.code
            ORDER BY v.code
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(averages)
    }
}
