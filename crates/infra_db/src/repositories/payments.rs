//! Payment repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CustomerId, Money, PaymentId};
use domain_ledger::{Payment, PaymentMethod};

use crate::error::DatabaseError;

/// Database row for a payment
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaymentRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: Decimal,
    pub method: String,
    pub staff_name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PaymentRow {
    pub fn into_domain(self) -> Result<Payment, DatabaseError> {
        let method: PaymentMethod = self
            .method
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("payment method '{}'", self.method)))?;

        Ok(Payment {
            id: PaymentId::from_uuid(self.id),
            customer_id: CustomerId::from_uuid(self.customer_id),
            amount: Money::new(self.amount),
            method,
            staff_name: self.staff_name,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}

/// Repository for payments received
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a payment
    pub async fn record(&self, payment: &Payment) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO payments (id, customer_id, amount, method, staff_name, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(payment.customer_id.as_uuid())
        .bind(payment.amount.amount())
        .bind(payment.method.as_str())
        .bind(&payment.staff_name)
        .bind(&payment.notes)
        .bind(payment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }

    /// All payments, oldest first
    pub async fn list_all(&self) -> Result<Vec<Payment>, DatabaseError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT id, customer_id, amount, method, staff_name, notes, created_at
            FROM payments
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter().map(PaymentRow::into_domain).collect()
    }

    /// One customer's payments, oldest first
    pub async fn list_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Payment>, DatabaseError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT id, customer_id, amount, method, staff_name, notes, created_at
            FROM payments
            WHERE customer_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(customer_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        rows.into_iter().map(PaymentRow::into_domain).collect()
    }

    /// Hard-deletes a payment
    pub async fn delete(&self, id: PaymentId) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Payment", id));
        }
        Ok(())
    }
}
