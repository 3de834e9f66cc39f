//! Outstanding-balance aggregation
//!
//! Balances are never stored. Every read tallies the relevant credit and
//! payment rows in a single pass; outstanding is the difference of the
//! two sums and may legitimately go negative when a customer overpays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{CustomerId, Money};

use crate::customer::Customer;
use crate::limits::{classify, Standing};
use crate::payment::Payment;
use crate::time::{month_window, today_window};
use crate::transaction::FuelTransaction;

/// Running totals for one customer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerTotals {
    /// Sum of all credit entries
    pub credited: Money,
    /// Sum of all payments received
    pub paid: Money,
}

impl CustomerTotals {
    /// What the customer currently owes. Negative means the account is
    /// in credit.
    pub fn outstanding(&self) -> Money {
        self.credited - self.paid
    }
}

/// Per-customer totals tallied from raw ledger rows
#[derive(Debug, Clone, Default)]
pub struct OutstandingBook {
    totals: HashMap<CustomerId, CustomerTotals>,
}

impl OutstandingBook {
    /// Tallies all rows in one pass over each slice
    pub fn tally(transactions: &[FuelTransaction], payments: &[Payment]) -> Self {
        let mut totals: HashMap<CustomerId, CustomerTotals> = HashMap::new();

        for txn in transactions {
            totals.entry(txn.customer_id).or_default().credited += txn.amount;
        }
        for payment in payments {
            totals.entry(payment.customer_id).or_default().paid += payment.amount;
        }

        Self { totals }
    }

    /// Totals for one customer; a customer with no rows owes nothing
    pub fn totals_for(&self, customer_id: CustomerId) -> CustomerTotals {
        self.totals.get(&customer_id).copied().unwrap_or_default()
    }

    /// Outstanding balance for one customer
    pub fn outstanding_for(&self, customer_id: CustomerId) -> Money {
        self.totals_for(customer_id).outstanding()
    }

    /// Sum of all positive and negative balances together
    pub fn total_outstanding(&self) -> Money {
        self.totals.values().map(CustomerTotals::outstanding).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CustomerId, &CustomerTotals)> {
        self.totals.iter()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// A customer joined with their tallied balance and standing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub customer: Customer,
    pub totals: CustomerTotals,
    pub outstanding: Money,
    pub standing: Standing,
}

/// Joins customers with the book, preserving the input customer order
pub fn summarize_accounts(customers: Vec<Customer>, book: &OutstandingBook) -> Vec<AccountSummary> {
    customers
        .into_iter()
        .map(|customer| {
            let totals = book.totals_for(customer.id);
            let outstanding = totals.outstanding();
            let standing = classify(outstanding, customer.credit_limit);
            AccountSummary {
                customer,
                totals,
                outstanding,
                standing,
            }
        })
        .collect()
}

/// Station-wide figures for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum of every customer's outstanding balance
    pub total_outstanding: Money,
    /// Payments received in the current IST month
    pub recovered_this_month: Money,
    /// Credit extended today (IST)
    pub credited_today: Money,
    /// Payments received today (IST)
    pub collected_today: Money,
    /// Customers at or over their limit
    pub over_limit_count: usize,
    /// Customers with any ledger activity
    pub active_customers: usize,
}

impl DashboardStats {
    /// Computes dashboard figures as of `now`
    pub fn compute(
        customers: &[Customer],
        transactions: &[FuelTransaction],
        payments: &[Payment],
        now: DateTime<Utc>,
    ) -> Self {
        let book = OutstandingBook::tally(transactions, payments);
        let today = today_window(now);
        let month = month_window(now);

        let credited_today = transactions
            .iter()
            .filter(|t| today.contains(t.created_at))
            .map(|t| t.amount)
            .sum();
        let collected_today = payments
            .iter()
            .filter(|p| today.contains(p.created_at))
            .map(|p| p.amount)
            .sum();
        let recovered_this_month = payments
            .iter()
            .filter(|p| month.contains(p.created_at))
            .map(|p| p.amount)
            .sum();

        let over_limit_count = customers
            .iter()
            .filter(|c| {
                classify(book.outstanding_for(c.id), c.credit_limit) == Standing::OverLimit
            })
            .count();

        tracing::debug!(
            customers = customers.len(),
            transactions = transactions.len(),
            payments = payments.len(),
            "computing dashboard stats"
        );

        Self {
            total_outstanding: book.total_outstanding(),
            recovered_this_month,
            credited_today,
            collected_today,
            over_limit_count,
            active_customers: book.len(),
        }
    }
}

/// One staff member's activity today (IST)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffTodayStats {
    pub entry_count: usize,
    pub credited: Money,
    pub payment_count: usize,
    pub collected: Money,
}

impl StaffTodayStats {
    /// Tallies today's rows recorded under the given staff name
    pub fn compute(
        staff_name: &str,
        transactions: &[FuelTransaction],
        payments: &[Payment],
        now: DateTime<Utc>,
    ) -> Self {
        let today = today_window(now);

        let mine_txns: Vec<_> = transactions
            .iter()
            .filter(|t| t.staff_name == staff_name && today.contains(t.created_at))
            .collect();
        let mine_payments: Vec<_> = payments
            .iter()
            .filter(|p| p.staff_name == staff_name && today.contains(p.created_at))
            .collect();

        Self {
            entry_count: mine_txns.len(),
            credited: mine_txns.iter().map(|t| t.amount).sum(),
            payment_count: mine_payments.len(),
            collected: mine_payments.iter().map(|p| p.amount).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentMethod;
    use crate::transaction::{FuelType, VehicleNumber};

    fn txn(customer_id: CustomerId, rupees: i64) -> FuelTransaction {
        FuelTransaction::new(
            customer_id,
            VehicleNumber::new("MH 12 AB 1234").unwrap(),
            Money::from_rupees(rupees),
            FuelType::Diesel,
            "Ravi",
        )
        .unwrap()
    }

    fn pay(customer_id: CustomerId, rupees: i64) -> Payment {
        Payment::new(
            customer_id,
            Money::from_rupees(rupees),
            PaymentMethod::Cash,
            "Ravi",
        )
        .unwrap()
    }

    #[test]
    fn test_tally_sums_per_customer() {
        let a = CustomerId::new();
        let b = CustomerId::new();

        let book = OutstandingBook::tally(
            &[txn(a, 1000), txn(a, 500), txn(b, 200)],
            &[pay(a, 300)],
        );

        assert_eq!(book.outstanding_for(a), Money::from_rupees(1200));
        assert_eq!(book.outstanding_for(b), Money::from_rupees(200));
        assert_eq!(book.total_outstanding(), Money::from_rupees(1400));
    }

    #[test]
    fn test_unknown_customer_owes_nothing() {
        let book = OutstandingBook::tally(&[], &[]);
        assert!(book.outstanding_for(CustomerId::new()).is_zero());
    }

    #[test]
    fn test_overpayment_goes_negative() {
        let a = CustomerId::new();
        let book = OutstandingBook::tally(&[txn(a, 100)], &[pay(a, 150)]);
        assert_eq!(book.outstanding_for(a), Money::from_rupees(-50));
    }

    #[test]
    fn test_payment_only_customer_is_active() {
        let a = CustomerId::new();
        let book = OutstandingBook::tally(&[], &[pay(a, 500)]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.outstanding_for(a), Money::from_rupees(-500));
    }

    #[test]
    fn test_dashboard_counts_over_limit() {
        let over = Customer::new(CustomerId::new(), "Over", Money::from_rupees(100)).unwrap();
        let under = Customer::new(CustomerId::new(), "Under", Money::from_rupees(10000)).unwrap();
        let customers = vec![over.clone(), under.clone()];

        let transactions = vec![txn(over.id, 150), txn(under.id, 150)];
        let stats = DashboardStats::compute(&customers, &transactions, &[], Utc::now());

        assert_eq!(stats.over_limit_count, 1);
        assert_eq!(stats.active_customers, 2);
        assert_eq!(stats.total_outstanding, Money::from_rupees(300));
        assert_eq!(stats.credited_today, Money::from_rupees(300));
    }

    #[test]
    fn test_staff_stats_filter_by_name() {
        let a = CustomerId::new();
        let mut other = txn(a, 700);
        other.staff_name = "Meena".to_string();

        let stats =
            StaffTodayStats::compute("Ravi", &[txn(a, 100), txn(a, 200), other], &[pay(a, 50)], Utc::now());

        assert_eq!(stats.entry_count, 2);
        assert_eq!(stats.credited, Money::from_rupees(300));
        assert_eq!(stats.payment_count, 1);
        assert_eq!(stats.collected, Money::from_rupees(50));
    }

    #[test]
    fn test_summaries_preserve_customer_order() {
        let a = Customer::new(CustomerId::new(), "A", Money::from_rupees(100)).unwrap();
        let b = Customer::new(CustomerId::new(), "B", Money::from_rupees(100)).unwrap();
        let book = OutstandingBook::tally(&[txn(b.id, 50)], &[]);

        let summaries = summarize_accounts(vec![a.clone(), b.clone()], &book);

        assert_eq!(summaries[0].customer.id, a.id);
        assert_eq!(summaries[1].customer.id, b.id);
        assert!(summaries[0].outstanding.is_zero());
        assert_eq!(summaries[1].outstanding, Money::from_rupees(50));
    }
}
