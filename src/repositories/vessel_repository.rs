use crate::database::StoreResult;
use crate::models::vessel::Vessel;
use sqlx::PgPool;

pub struct VesselRepository {
    pool: PgPool,
}

impl VesselRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, code: &str) -> StoreResult<Vessel> {
        let mut tx = self.pool.begin().await?;

        let vessel = sqlx::query_as::<_, Vessel>(
            "INSERT INTO vessels (code) VALUES ($1) RETURNING id, code"
        )
        .bind(code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(vessel)
    }

    pub async fn find_by_code(&self, code: &str) -> StoreResult<Option<Vessel>> {
        let vessel = sqlx::query_as::<_, Vessel>("SELECT id, code FROM vessels WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vessel)
    }
}
