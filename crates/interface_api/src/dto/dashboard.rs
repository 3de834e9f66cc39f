//! Dashboard DTOs

use serde::Serialize;

use core_kernel::Money;
use domain_ledger::{DashboardStats, StaffTodayStats};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_outstanding: Money,
    pub recovered_this_month: Money,
    pub credited_today: Money,
    pub collected_today: Money,
    pub over_limit_count: usize,
    pub active_customers: usize,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_outstanding: stats.total_outstanding,
            recovered_this_month: stats.recovered_this_month,
            credited_today: stats.credited_today,
            collected_today: stats.collected_today,
            over_limit_count: stats.over_limit_count,
            active_customers: stats.active_customers,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StaffTodayResponse {
    pub entry_count: usize,
    pub credited: Money,
    pub payment_count: usize,
    pub collected: Money,
}

impl From<StaffTodayStats> for StaffTodayResponse {
    fn from(stats: StaffTodayStats) -> Self {
        Self {
            entry_count: stats.entry_count,
            credited: stats.credited,
            payment_count: stats.payment_count,
            collected: stats.collected,
        }
    }
}
