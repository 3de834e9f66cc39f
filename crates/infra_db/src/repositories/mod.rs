//! Repository implementations
//!
//! One repository per table. Rows are plain `FromRow` structs converted
//! into domain types at the edge; a row that fails conversion surfaces
//! as `DatabaseError::CorruptRow` rather than a panic.

pub mod customers;
pub mod payments;
pub mod transactions;
pub mod vehicles;

pub use customers::CustomerRepository;
pub use payments::PaymentRepository;
pub use transactions::TransactionRepository;
pub use vehicles::VehicleRepository;
