//! Farm production reporting queries (read-only `fms` namespace)
//!
//! Numeric measurements are cast to `float8` and coded fields to `text` in
//! SQL so the row types do not depend on the dataset's column types.

use farmboard_core::{
    BreedGrowthRow, Dashboard, DestinationBreedCount, EnvFailureRow, FarmTally, Paginated,
    Pagination,
};
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use super::DbError;

#[derive(FromRow)]
struct GrowthRecord {
    breed_nm: String,
    weight: Option<f64>,
    feed_intake: Option<f64>,
}

#[derive(FromRow)]
struct ShipmentRecord {
    destination: String,
    breed_nm: String,
    cnt: i64,
}

#[derive(FromRow)]
struct EnvRecord {
    temp: Option<f64>,
    humid: Option<f64>,
    farm: String,
    weight: Option<f64>,
    pass_fail: String,
}

#[derive(FromRow)]
struct TallyRecord {
    farm: String,
    passed: i64,
    total: i64,
}

/// Reporting repository
pub struct ReportRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReportRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Page through `fms.total_result`, each row as a JSON object.
    pub async fn list_results(&self, page: Pagination) -> Result<Paginated<Value>, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fms.total_result")
            .fetch_one(self.pool)
            .await?;

        let rows: Vec<Value> = sqlx::query_scalar(
            r#"
            SELECT to_jsonb(t)
            FROM fms.total_result t
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(page.paginate(rows, total))
    }

    /// One chick with its decoded breed, as a JSON object of both sides'
    /// columns.
    pub async fn chick_info(&self, chick_no: &str) -> Result<Value, DbError> {
        sqlx::query_scalar(
            r#"
            SELECT to_jsonb(a) || to_jsonb(b)
            FROM fms.chick_info a
            JOIN (
                SELECT code, code_desc
                FROM fms.master_code
                WHERE column_nm = 'breeds'
            ) AS b ON a.breeds = b.code
            WHERE a.chick_no::text = $1
            LIMIT 1
            "#,
        )
        .bind(chick_no)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("chick_info", chick_no))
    }

    /// Weight against feed intake per health check, with breed label.
    pub async fn breed_growth(&self) -> Result<Vec<BreedGrowthRow>, DbError> {
        let rows: Vec<GrowthRecord> = sqlx::query_as(
            r#"
            SELECT COALESCE(m.code_desc::text, '') AS breed_nm,
                   h.weight::float8 AS weight,
                   h.feed_intake::float8 AS feed_intake
            FROM fms.health_cond h
            JOIN fms.chick_info c ON h.chick_no = c.chick_no
            JOIN fms.master_code m ON c.breeds = m.code AND m.column_nm = 'breeds'
            WHERE h.weight > 0 AND h.feed_intake > 0
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| BreedGrowthRow {
                breed: r.breed_nm,
                weight: r.weight,
                feed_intake: r.feed_intake,
            })
            .collect())
    }

    /// Shipment counts per (destination, breed).
    pub async fn destination_counts(&self) -> Result<Vec<DestinationBreedCount>, DbError> {
        let rows: Vec<ShipmentRecord> = sqlx::query_as(
            r#"
            SELECT COALESCE(s.destination::text, '') AS destination,
                   COALESCE(m.code_desc::text, '') AS breed_nm,
                   COUNT(*) AS cnt
            FROM fms.ship_result s
            JOIN fms.chick_info c ON s.chick_no = c.chick_no
            JOIN fms.master_code m ON c.breeds = m.code AND m.column_nm = 'breeds'
            GROUP BY s.destination, m.code_desc
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DestinationBreedCount {
                destination: r.destination,
                breed: r.breed_nm,
                count: r.cnt,
            })
            .collect())
    }

    /// Failed production records with the environment reading of the
    /// matching health-check day.
    pub async fn env_failures(&self) -> Result<Vec<EnvFailureRow>, DbError> {
        let rows: Vec<EnvRecord> = sqlx::query_as(
            r#"
            SELECT e.temp::float8 AS temp,
                   e.humid::float8 AS humid,
                   COALESCE(c.farm::text, '') AS farm,
                   h.weight::float8 AS weight,
                   p.pass_fail::text AS pass_fail
            FROM fms.prod_result p
            JOIN fms.health_cond h ON p.chick_no = h.chick_no
            JOIN fms.env_cond e ON h.check_date = e.date
            JOIN fms.chick_info c ON p.chick_no = c.chick_no
            WHERE TRIM(p.pass_fail) = 'F' AND h.weight > 0
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| EnvFailureRow {
                temp: r.temp,
                humid: r.humid,
                farm: r.farm,
                weight: r.weight,
                pass_fail: r.pass_fail,
            })
            .collect())
    }

    /// Passed and total production records per farm, by farm ascending.
    pub async fn farm_tallies(&self) -> Result<Vec<FarmTally>, DbError> {
        let rows: Vec<TallyRecord> = sqlx::query_as(
            r#"
            SELECT COALESCE(c.farm::text, '') AS farm,
                   COUNT(*) FILTER (WHERE TRIM(p.pass_fail) = 'P') AS passed,
                   COUNT(*) AS total
            FROM fms.chick_info c
            JOIN fms.prod_result p ON c.chick_no = p.chick_no
            GROUP BY c.farm
            ORDER BY c.farm
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| FarmTally {
                farm: r.farm,
                passed: r.passed,
                total: r.total,
            })
            .collect())
    }

    /// Run the four dashboard queries and build the chart datasets.
    pub async fn dashboard(&self) -> Result<Dashboard, DbError> {
        let growth = self.breed_growth().await?;
        let shipments = self.destination_counts().await?;
        let environment = self.env_failures().await?;
        let tallies = self.farm_tallies().await?;

        Ok(Dashboard::build(growth, shipments, environment, tallies))
    }
}
