//! Fuel transaction repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CustomerId, Money, TransactionId};
use domain_ledger::{FuelTransaction, FuelType, VehicleNumber};

use crate::error::DatabaseError;

/// Database row for a fuel transaction
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vehicle_number: String,
    pub amount: Decimal,
    pub fuel_type: String,
    pub staff_name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TransactionRow {
    pub fn into_domain(self) -> Result<FuelTransaction, DatabaseError> {
        let fuel_type: FuelType = self
            .fuel_type
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("fuel_type '{}'", self.fuel_type)))?;
        let vehicle_number = VehicleNumber::new(&self.vehicle_number)
            .map_err(|_| DatabaseError::CorruptRow("blank vehicle_number".to_string()))?;

        Ok(FuelTransaction {
            id: TransactionId::from_uuid(self.id),
            customer_id: CustomerId::from_uuid(self.customer_id),
            vehicle_number,
            amount: Money::new(self.amount),
            fuel_type,
            staff_name: self.staff_name,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}

/// Repository for fuel-on-credit transactions
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records a transaction and refreshes the vehicle registry in one
    /// database transaction. The registry upsert moves the number to
    /// this customer if it was last seen with another.
    pub async fn record(&self, txn: &FuelTransaction) -> Result<(), DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, customer_id, vehicle_number, amount, fuel_type,
                staff_name, notes, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(txn.id.as_uuid())
        .bind(txn.customer_id.as_uuid())
        .bind(txn.vehicle_number.as_str())
        .bind(txn.amount.amount())
        .bind(txn.fuel_type.as_str())
        .bind(&txn.staff_name)
        .bind(&txn.notes)
        .bind(txn.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        sqlx::query(
            r#"
            INSERT INTO vehicle_numbers (id, vehicle_number, customer_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (vehicle_number)
            DO UPDATE SET customer_id = EXCLUDED.customer_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(txn.vehicle_number.as_str())
        .bind(txn.customer_id.as_uuid())
        .bind(txn.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;
        Ok(())
    }

    /// All transactions, oldest first. Aggregation tallies over this.
    pub async fn list_all(&self) -> Result<Vec<FuelTransaction>, DatabaseError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, customer_id, vehicle_number, amount, fuel_type,
                   staff_name, notes, created_at
            FROM transactions
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }

    /// One customer's transactions, oldest first
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<FuelTransaction>, DatabaseError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, customer_id, vehicle_number, amount, fuel_type,
                   staff_name, notes, created_at
            FROM transactions
            WHERE customer_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(customer_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }

    /// Most recent transactions across all customers
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<FuelTransaction>, DatabaseError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, customer_id, vehicle_number, amount, fuel_type,
                   staff_name, notes, created_at
            FROM transactions
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }

    /// Hard-deletes a transaction
    pub async fn delete(&self, id: TransactionId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Transaction", id));
        }
        Ok(())
    }
}
