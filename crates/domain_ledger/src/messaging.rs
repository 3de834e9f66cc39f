//! Payment reminder messages
//!
//! Reminders go out as WhatsApp deep links. The number is normalized to
//! the Indian country code and the message text carries the formatted
//! outstanding amount.

use core_kernel::Money;

use crate::customer::Customer;
use crate::error::LedgerError;

/// Reminder text sent to a customer
pub fn reminder_text(outstanding: Money) -> String {
    format!(
        "Hello, your outstanding bill is ₹{}. Please pay via UPI. Thank you! - BunkCredit",
        outstanding.to_inr_string()
    )
}

/// Builds a `wa.me` deep link prefilled with the reminder text.
///
/// Non-digits are stripped from the stored phone number and the 91
/// country code is prefixed when it is missing.
///
/// # Errors
///
/// Returns `LedgerError::MissingPhone` when the customer has no phone
/// number on record.
pub fn whatsapp_link(customer: &Customer, outstanding: Money) -> Result<String, LedgerError> {
    let phone = customer.phone.as_deref().ok_or(LedgerError::MissingPhone)?;
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(LedgerError::MissingPhone);
    }

    let number = if digits.len() == 10 {
        format!("91{digits}")
    } else {
        digits
    };

    Ok(format!(
        "https://wa.me/{}?text={}",
        number,
        percent_encode(&reminder_text(outstanding))
    ))
}

// RFC 3986 unreserved set; everything else is %-escaped
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CustomerId;

    fn customer_with_phone(phone: &str) -> Customer {
        Customer::new(CustomerId::new(), "ABC Transport", Money::from_rupees(50000))
            .unwrap()
            .with_phone(phone)
    }

    #[test]
    fn test_reminder_text_formats_amount() {
        let text = reminder_text(Money::from_rupees(120500));
        assert!(text.contains("₹1,20,500"));
        assert!(text.ends_with("- BunkCredit"));
    }

    #[test]
    fn test_link_prefixes_country_code() {
        let customer = customer_with_phone("98765 43210");
        let link = whatsapp_link(&customer, Money::from_rupees(500)).unwrap();
        assert!(link.starts_with("https://wa.me/919876543210?text="));
    }

    #[test]
    fn test_link_keeps_existing_country_code() {
        let customer = customer_with_phone("+91 98765 43210");
        let link = whatsapp_link(&customer, Money::from_rupees(500)).unwrap();
        assert!(link.starts_with("https://wa.me/919876543210?text="));
    }

    #[test]
    fn test_missing_phone_is_an_error() {
        let customer =
            Customer::new(CustomerId::new(), "No Phone", Money::zero()).unwrap();
        let result = whatsapp_link(&customer, Money::from_rupees(500));
        assert!(matches!(result, Err(LedgerError::MissingPhone)));
    }

    #[test]
    fn test_text_is_percent_encoded() {
        let customer = customer_with_phone("9876543210");
        let link = whatsapp_link(&customer, Money::from_rupees(500)).unwrap();
        let query = link.split("?text=").nth(1).unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains('₹'));
        // The rupee sign is three UTF-8 bytes
        assert!(query.contains("%E2%82%B9"));
        assert!(query.contains("Hello%2C"));
    }
}
