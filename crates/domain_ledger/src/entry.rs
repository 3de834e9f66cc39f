//! The credit entry flow
//!
//! Entry starts from an existing customer, or detours through an inline
//! "new customer" sub-form. The two modes are explicit states with named
//! transitions, so a draft can never reference a customer while the
//! sub-form is still open.

use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money};

use crate::error::LedgerError;
use crate::transaction::{FuelTransaction, FuelType, VehicleNumber};

/// Where the entry form is in its flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryFormState {
    /// Picking an existing customer; `None` until one is chosen
    Selecting { customer_id: Option<CustomerId> },
    /// The inline new-customer sub-form is open
    CreatingCustomer,
}

impl EntryFormState {
    /// Fresh form with nothing chosen
    pub fn new() -> Self {
        EntryFormState::Selecting { customer_id: None }
    }

    /// Chooses an existing customer; closes the sub-form if it was open
    pub fn select(self, customer_id: CustomerId) -> Self {
        EntryFormState::Selecting {
            customer_id: Some(customer_id),
        }
    }

    /// Opens the inline new-customer sub-form, dropping any selection
    pub fn open_customer_form(self) -> Self {
        EntryFormState::CreatingCustomer
    }

    /// Closes the sub-form without creating anyone
    pub fn cancel_customer_form(self) -> Self {
        match self {
            EntryFormState::CreatingCustomer => EntryFormState::Selecting { customer_id: None },
            other => other,
        }
    }

    /// The sub-form saved; the new customer becomes the selection
    pub fn customer_created(self, customer_id: CustomerId) -> Self {
        EntryFormState::Selecting {
            customer_id: Some(customer_id),
        }
    }

    /// The chosen customer, when the form is ready to submit
    pub fn selected(&self) -> Option<CustomerId> {
        match self {
            EntryFormState::Selecting { customer_id } => *customer_id,
            EntryFormState::CreatingCustomer => None,
        }
    }
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw entry-form input before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditEntryDraft {
    pub vehicle_number: String,
    pub amount: Option<Money>,
    pub fuel_type: Option<FuelType>,
    pub notes: Option<String>,
}

impl CreditEntryDraft {
    /// Validates the draft against the form state and produces a
    /// transaction ready to persist.
    ///
    /// # Errors
    ///
    /// Returns the first failing field as `LedgerError::Validation`, in
    /// form order: customer, vehicle, amount, fuel type.
    pub fn submit(
        &self,
        state: &EntryFormState,
        staff_name: &str,
    ) -> Result<FuelTransaction, LedgerError> {
        let customer_id = state
            .selected()
            .ok_or_else(|| LedgerError::validation("customer", "select a customer first"))?;

        let vehicle_number = VehicleNumber::new(&self.vehicle_number)?;

        let amount = self
            .amount
            .ok_or_else(|| LedgerError::validation("amount", "amount required"))?;

        let fuel_type = self
            .fuel_type
            .ok_or_else(|| LedgerError::validation("fuel_type", "fuel type required"))?;

        let mut txn =
            FuelTransaction::new(customer_id, vehicle_number, amount, fuel_type, staff_name)?;
        if let Some(notes) = &self.notes {
            let notes = notes.trim();
            if !notes.is_empty() {
                txn = txn.with_notes(notes);
            }
        }
        Ok(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CreditEntryDraft {
        CreditEntryDraft {
            vehicle_number: "mh 12 ab 1234".to_string(),
            amount: Some(Money::from_rupees(1500)),
            fuel_type: Some(FuelType::Diesel),
            notes: None,
        }
    }

    #[test]
    fn test_submit_with_selected_customer() {
        let customer_id = CustomerId::new();
        let state = EntryFormState::new().select(customer_id);

        let txn = draft().submit(&state, "Ravi").unwrap();

        assert_eq!(txn.customer_id, customer_id);
        assert_eq!(txn.vehicle_number.as_str(), "MH 12 AB 1234");
    }

    #[test]
    fn test_submit_without_selection_fails() {
        let result = draft().submit(&EntryFormState::new(), "Ravi");
        assert!(matches!(result, Err(LedgerError::Validation { field, .. }) if field == "customer"));
    }

    #[test]
    fn test_submit_while_creating_customer_fails() {
        let state = EntryFormState::new().open_customer_form();
        let result = draft().submit(&state, "Ravi");
        assert!(result.is_err());
    }

    #[test]
    fn test_customer_created_becomes_selection() {
        let new_id = CustomerId::new();
        let state = EntryFormState::new()
            .open_customer_form()
            .customer_created(new_id);

        assert_eq!(state.selected(), Some(new_id));
    }

    #[test]
    fn test_cancel_returns_to_empty_selection() {
        let state = EntryFormState::new()
            .select(CustomerId::new())
            .open_customer_form()
            .cancel_customer_form();

        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_missing_amount_reported_by_field() {
        let mut d = draft();
        d.amount = None;
        let state = EntryFormState::new().select(CustomerId::new());

        let result = d.submit(&state, "Ravi");
        assert!(matches!(result, Err(LedgerError::Validation { field, .. }) if field == "amount"));
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let value = serde_json::to_value(EntryFormState::new()).unwrap();
        assert_eq!(value["state"], "selecting");
        assert!(value["customer_id"].is_null());

        let value = serde_json::to_value(EntryFormState::new().open_customer_form()).unwrap();
        assert_eq!(value["state"], "creating_customer");
    }

    #[test]
    fn test_blank_notes_dropped() {
        let mut d = draft();
        d.notes = Some("   ".to_string());
        let state = EntryFormState::new().select(CustomerId::new());

        let txn = d.submit(&state, "Ravi").unwrap();
        assert!(txn.notes.is_none());
    }
}
