//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::{CustomerId, Money};
use domain_ledger::{
    Customer, FuelTransaction, FuelType, Payment, PaymentMethod, VehicleNumber,
};

use crate::fixtures::{MoneyFixtures, StringFixtures};

/// Builder for test customers
pub struct CustomerBuilder {
    id: CustomerId,
    name: String,
    phone: Option<String>,
    credit_limit: Money,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self {
            id: CustomerId::new_v7(),
            name: Name().fake(),
            phone: Some(StringFixtures::phone_number().to_string()),
            credit_limit: MoneyFixtures::fleet_limit(),
        }
    }

    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn without_phone(mut self) -> Self {
        self.phone = None;
        self
    }

    pub fn with_credit_limit(mut self, limit: Money) -> Self {
        self.credit_limit = limit;
        self
    }

    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.id, self.name, self.credit_limit)
            .expect("builder produces valid customers");
        customer.phone = self.phone;
        customer
    }
}

/// Builder for test fuel transactions
pub struct TransactionBuilder {
    customer_id: CustomerId,
    vehicle_number: String,
    amount: Money,
    fuel_type: FuelType,
    staff_name: String,
    created_at: Option<DateTime<Utc>>,
}

impl TransactionBuilder {
    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            vehicle_number: StringFixtures::vehicle_number().to_string(),
            amount: MoneyFixtures::diesel_fill(),
            fuel_type: FuelType::Diesel,
            staff_name: StringFixtures::staff_name().to_string(),
            created_at: None,
        }
    }

    pub fn with_vehicle(mut self, number: impl Into<String>) -> Self {
        self.vehicle_number = number.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = fuel_type;
        self
    }

    pub fn by_staff(mut self, name: impl Into<String>) -> Self {
        self.staff_name = name.into();
        self
    }

    pub fn at(mut self, when: DateTime<Utc>) -> Self {
        self.created_at = Some(when);
        self
    }

    pub fn build(self) -> FuelTransaction {
        let txn = FuelTransaction::new(
            self.customer_id,
            VehicleNumber::new(&self.vehicle_number).expect("builder vehicle number"),
            self.amount,
            self.fuel_type,
            self.staff_name,
        )
        .expect("builder produces valid transactions");

        match self.created_at {
            Some(at) => txn.recorded_at(at),
            None => txn,
        }
    }
}

/// Builder for test payments
pub struct PaymentBuilder {
    customer_id: CustomerId,
    amount: Money,
    method: PaymentMethod,
    staff_name: String,
    created_at: Option<DateTime<Utc>>,
}

impl PaymentBuilder {
    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            amount: MoneyFixtures::partial_payment(),
            method: PaymentMethod::Upi,
            staff_name: StringFixtures::staff_name().to_string(),
            created_at: None,
        }
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    pub fn by_staff(mut self, name: impl Into<String>) -> Self {
        self.staff_name = name.into();
        self
    }

    pub fn at(mut self, when: DateTime<Utc>) -> Self {
        self.created_at = Some(when);
        self
    }

    pub fn build(self) -> Payment {
        let payment = Payment::new(self.customer_id, self.amount, self.method, self.staff_name)
            .expect("builder produces valid payments");

        match self.created_at {
            Some(at) => payment.recorded_at(at),
            None => payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_builder_defaults() {
        let customer = CustomerBuilder::new().build();
        assert!(!customer.name.is_empty());
        assert_eq!(customer.credit_limit, MoneyFixtures::fleet_limit());
    }

    #[test]
    fn test_transaction_builder_links_customer() {
        let id = CustomerId::new();
        let txn = TransactionBuilder::for_customer(id)
            .with_amount(Money::from_rupees(100))
            .build();
        assert_eq!(txn.customer_id, id);
        assert_eq!(txn.amount, Money::from_rupees(100));
    }
}
