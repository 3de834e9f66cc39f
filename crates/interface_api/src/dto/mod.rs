//! Request/response data transfer objects

pub mod customers;
pub mod dashboard;
pub mod payments;
pub mod statements;
pub mod transactions;
pub mod vehicles;
