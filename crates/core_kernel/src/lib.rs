//! Core Kernel - Foundational types for the credit-ledger system
//!
//! This crate provides the fundamental building blocks used across all
//! workspace crates:
//! - Rupee money type with precise decimal arithmetic
//! - Strongly-typed entity identifiers
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{CustomerId, PaymentId, TransactionId, VehicleRecordId};
pub use money::{Money, MoneyError};
