use crate::database::StoreResult;
use crate::models::equipment::Equipment;
use sqlx::PgPool;

const EQUIPMENT_COLUMNS: &str = "id, vessel_id, code, name, location, active";

pub struct EquipmentRepository {
    pool: PgPool,
}

impl EquipmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vessel_id: i64,
        code: &str,
        name: &str,
        location: &str,
    ) -> StoreResult<Equipment> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            r#"
            INSERT INTO equipments (vessel_id, code, name, location, active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING {}
            "#,
            EQUIPMENT_COLUMNS
        );
        let equipment = sqlx::query_as::<_, Equipment>(&query)
            .bind(vessel_id)
            .bind(code)
            .bind(name)
            .bind(location)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(equipment)
    }

    /// Marcar como inactivos todos los equipos cuyo código esté en la lista.
    /// Devuelve la cantidad de filas actualizadas.
    pub async fn deactivate_by_codes(&self, codes: &[String]) -> StoreResult<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE equipments SET active = FALSE WHERE code = ANY($1)")
            .bind(codes)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    pub async fn find_by_code(&self, code: &str) -> StoreResult<Option<Equipment>> {
        let query = format!("SELECT {} FROM equipments WHERE code = $1", EQUIPMENT_COLUMNS);
        let equipment = sqlx::query_as::<_, Equipment>(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(equipment)
    }

    pub async fn find_active_by_vessel(&self, vessel_id: i64) -> StoreResult<Vec<Equipment>> {
        let query = format!(
            "SELECT {} FROM equipments WHERE vessel_id = $1 AND active ORDER BY id",
            EQUIPMENT_COLUMNS
        );
        let equipments = sqlx::query_as::<_, Equipment>(&query)
            .bind(vessel_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(equipments)
    }

    /// Ids de los equipos que coinciden por código o por nombre
    pub async fn find_ids_by_code_or_name(&self, code: &str, name: &str) -> StoreResult<Vec<i64>> {
        let ids: Vec<(i64,)> = sqlx::query_as(
            "SELECT id FROM equipments WHERE code = $1 OR name = $2 ORDER BY id"
        )
        .bind(code)
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }
}
