//! Customer repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CustomerId, Money};
use domain_ledger::Customer;

use crate::error::DatabaseError;

/// Database row for a customer account
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub credit_limit: Decimal,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CustomerRow {
    pub fn into_domain(self) -> Customer {
        Customer {
            id: CustomerId::from_uuid(self.id),
            name: self.name,
            phone: self.phone,
            address: self.address,
            credit_limit: Money::new(self.credit_limit),
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

/// Repository for customer accounts
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a new customer account
    pub async fn create(&self, customer: &Customer) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, phone, address, credit_limit, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(customer.id.as_uuid())
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(customer.credit_limit.amount())
        .bind(&customer.created_by)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }

    /// Fetches one customer by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` when no such customer exists.
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Customer, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, address, credit_limit, created_by, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?
        .ok_or_else(|| DatabaseError::not_found("Customer", id))?;

        Ok(row.into_domain())
    }

    /// Lists every customer, ordered by name
    pub async fn list_all(&self) -> Result<Vec<Customer>, DatabaseError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, address, credit_limit, created_by, created_at
            FROM customers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(rows.into_iter().map(CustomerRow::into_domain).collect())
    }

    /// Updates the mutable fields of an existing customer
    pub async fn update(&self, customer: &Customer) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, phone = $3, address = $4, credit_limit = $5
            WHERE id = $1
            "#,
        )
        .bind(customer.id.as_uuid())
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(customer.credit_limit.amount())
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Customer", customer.id));
        }
        Ok(())
    }
}
