//! Infra DB - PostgreSQL persistence for the credit ledger
//!
//! Connection pooling, migrations, and one repository per table. All
//! SQL lives here; the domain crate never sees a connection.

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{
    CustomerRepository, PaymentRepository, TransactionRepository, VehicleRepository,
};
