//! Vehicle registry repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CustomerId, VehicleRecordId};
use domain_ledger::{VehicleNumber, VehicleRecord, VehicleType};

use crate::error::DatabaseError;

/// Database row for a remembered vehicle number
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VehicleRow {
    pub id: Uuid,
    pub vehicle_number: String,
    pub customer_id: Option<Uuid>,
    pub vehicle_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VehicleRow {
    pub fn into_domain(self) -> Result<VehicleRecord, DatabaseError> {
        let vehicle_number = VehicleNumber::new(&self.vehicle_number)
            .map_err(|_| DatabaseError::CorruptRow("blank vehicle_number".to_string()))?;
        let vehicle_type = self
            .vehicle_type
            .map(|t| {
                t.parse::<VehicleType>()
                    .map_err(|_| DatabaseError::CorruptRow(format!("vehicle_type '{t}'")))
            })
            .transpose()?;

        Ok(VehicleRecord {
            id: VehicleRecordId::from_uuid(self.id),
            vehicle_number,
            customer_id: self.customer_id.map(CustomerId::from_uuid),
            vehicle_type,
            created_at: self.created_at,
        })
    }
}

/// Repository for the vehicle registry
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts or refreshes a registry entry. The number is the natural
    /// key; a repeat sighting updates the owning customer and type.
    pub async fn upsert(&self, record: &VehicleRecord) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO vehicle_numbers (id, vehicle_number, customer_id, vehicle_type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (vehicle_number)
            DO UPDATE SET
                customer_id = EXCLUDED.customer_id,
                vehicle_type = COALESCE(EXCLUDED.vehicle_type, vehicle_numbers.vehicle_type)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.vehicle_number.as_str())
        .bind(record.customer_id.map(|id| *id.as_uuid()))
        .bind(record.vehicle_type.map(|t| t.as_str()))
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }

    /// Every remembered number, alphabetically
    pub async fn list_all(&self) -> Result<Vec<VehicleRecord>, DatabaseError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, vehicle_number, customer_id, vehicle_type, created_at
            FROM vehicle_numbers
            ORDER BY vehicle_number
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter().map(VehicleRow::into_domain).collect()
    }

    /// Substring search for autocomplete, case-insensitive
    pub async fn search(&self, query: &str) -> Result<Vec<VehicleRecord>, DatabaseError> {
        let pattern = like_pattern(query);
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, vehicle_number, customer_id, vehicle_type, created_at
            FROM vehicle_numbers
            WHERE vehicle_number ILIKE $1
            ORDER BY vehicle_number
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter().map(VehicleRow::into_domain).collect()
    }

    /// Hard-deletes a registry entry
    pub async fn delete(&self, id: VehicleRecordId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM vehicle_numbers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("VehicleRecord", id));
        }
        Ok(())
    }
}

/// Builds a contains-pattern for ILIKE, escaping the wildcard characters
/// so user input matches literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    for c in query.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_and_trims() {
        assert_eq!(like_pattern(" mh 12 "), "%mh 12%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        // "%%" would otherwise match the whole registry
        assert_eq!(like_pattern("%%"), "%\\%\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
