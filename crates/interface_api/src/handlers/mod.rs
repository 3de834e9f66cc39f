//! Request handlers

pub mod customers;
pub mod dashboard;
pub mod health;
pub mod payments;
pub mod transactions;
pub mod vehicles;
