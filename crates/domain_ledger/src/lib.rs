//! Domain Ledger - Fuel-station credit ledger rules
//!
//! The business core of the credit ledger: customers and their advisory
//! credit limits, fuel-on-credit transactions, payments, derived
//! outstanding balances, statements, and reminder messaging. Everything
//! here is pure; persistence and HTTP live in sibling crates.

pub mod aggregate;
pub mod customer;
pub mod entry;
pub mod error;
pub mod limits;
pub mod messaging;
pub mod payment;
pub mod statement;
pub mod time;
pub mod transaction;
pub mod vehicle;

pub use aggregate::{
    summarize_accounts, AccountSummary, CustomerTotals, DashboardStats, OutstandingBook,
    StaffTodayStats,
};
pub use customer::Customer;
pub use entry::{CreditEntryDraft, EntryFormState};
pub use error::LedgerError;
pub use limits::{classify, preview_impact, LimitPreview, Standing};
pub use payment::{Payment, PaymentMethod};
pub use statement::{build_statement, select_range, Statement, StatementPeriod};
pub use transaction::{FuelTransaction, FuelType, VehicleNumber};
pub use vehicle::{suggest, VehicleRecord, VehicleType};
