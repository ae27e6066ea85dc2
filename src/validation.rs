use regex::Regex;
use std::sync::OnceLock;

use crate::application::CreateCreditRequest;
use crate::config::DeskLimits;
use crate::errors::{DeskError, Result};

// national mobile number: optional +7/8 prefix, ten digits, optional
// space/dash/parenthesis separators
const PHONE_PATTERN: &str =
    r"^(\+7|8)?[\s\-]?\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{2}[\s\-]?\d{2}$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// validate a creation request against the desk limits
///
/// fails with `Validation` naming the first offending form field; the
/// store guarantees no state change on failure
pub fn validate_request(request: &CreateCreditRequest, limits: &DeskLimits) -> Result<()> {
    let name = request.client_name.trim();
    if name.is_empty() {
        return Err(DeskError::Validation {
            field: "clientName",
            message: "client name is required".to_string(),
        });
    }
    if name.chars().count() < limits.client_name_min_len {
        return Err(DeskError::Validation {
            field: "clientName",
            message: format!(
                "client name must be at least {} characters",
                limits.client_name_min_len
            ),
        });
    }

    let phone = request.phone_number.trim();
    if phone.is_empty() {
        return Err(DeskError::Validation {
            field: "phoneNumber",
            message: "phone number is required".to_string(),
        });
    }
    if !phone_regex().is_match(phone) {
        return Err(DeskError::Validation {
            field: "phoneNumber",
            message: "phone number is not a valid mobile number".to_string(),
        });
    }

    if request.amount < limits.amount_min || request.amount > limits.amount_max {
        return Err(DeskError::Validation {
            field: "amount",
            message: format!(
                "amount must be between {} and {}",
                limits.amount_min, limits.amount_max
            ),
        });
    }

    if request.term_months < limits.term_min_months || request.term_months > limits.term_max_months
    {
        return Err(DeskError::Validation {
            field: "term",
            message: format!(
                "term must be between {} and {} months",
                limits.term_min_months, limits.term_max_months
            ),
        });
    }

    if request.rate < limits.rate_min || request.rate > limits.rate_max {
        return Err(DeskError::Validation {
            field: "rate",
            message: format!(
                "rate must be between {} and {}",
                limits.rate_min, limits.rate_max
            ),
        });
    }
    if !request.rate.is_single_decimal() {
        return Err(DeskError::Validation {
            field: "rate",
            message: "rate precision is one decimal place".to_string(),
        });
    }

    if let Some(description) = &request.description {
        if description.chars().count() > limits.description_max_len {
            return Err(DeskError::Validation {
                field: "description",
                message: format!(
                    "description must not exceed {} characters",
                    limits.description_max_len
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use rust_decimal_macros::dec;

    fn request() -> CreateCreditRequest {
        CreateCreditRequest {
            client_name: "Иванов Иван Иванович".to_string(),
            phone_number: "+7 (999) 123-45-67".to_string(),
            amount: Money::from_major(500_000),
            term_months: 24,
            rate: Rate::from_percent(dec!(12.5)),
            description: None,
        }
    }

    fn assert_rejects(request: CreateCreditRequest, expected_field: &str) {
        let err = validate_request(&request, &DeskLimits::default()).unwrap_err();
        assert_eq!(err.field(), Some(expected_field));
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_request(&request(), &DeskLimits::default()).is_ok());
    }

    #[test]
    fn test_client_name_rules() {
        let mut r = request();
        r.client_name = "".to_string();
        assert_rejects(r, "clientName");

        let mut r = request();
        r.client_name = "Ив".to_string();
        assert_rejects(r, "clientName");
    }

    #[test]
    fn test_phone_formats() {
        let limits = DeskLimits::default();
        for phone in [
            "+7 (999) 123-45-67",
            "8 (999) 123-45-67",
            "+79991234567",
            "89991234567",
            "999-123-45-67",
        ] {
            let mut r = request();
            r.phone_number = phone.to_string();
            assert!(validate_request(&r, &limits).is_ok(), "rejected {phone}");
        }

        for phone in ["", "12345", "+7 (999) 123-45-6", "not a phone", "+7999123456789"] {
            let mut r = request();
            r.phone_number = phone.to_string();
            assert_rejects(r, "phoneNumber");
        }
    }

    #[test]
    fn test_amount_range() {
        let mut r = request();
        r.amount = Money::from_major(10);
        assert_rejects(r, "amount");

        let mut r = request();
        r.amount = Money::from_major(5_000_001);
        assert_rejects(r, "amount");

        let mut r = request();
        r.amount = Money::from_major(50_000);
        assert!(validate_request(&r, &DeskLimits::default()).is_ok());
    }

    #[test]
    fn test_term_range() {
        let mut r = request();
        r.term_months = 5;
        assert_rejects(r, "term");

        let mut r = request();
        r.term_months = 361;
        assert_rejects(r, "term");
    }

    #[test]
    fn test_rate_range_and_precision() {
        let mut r = request();
        r.rate = Rate::from_percent(dec!(0.5));
        assert_rejects(r, "rate");

        let mut r = request();
        r.rate = Rate::from_percent(dec!(50.1));
        assert_rejects(r, "rate");

        let mut r = request();
        r.rate = Rate::from_percent(dec!(12.55));
        assert_rejects(r, "rate");
    }

    #[test]
    fn test_description_length() {
        let mut r = request();
        r.description = Some("а".repeat(501));
        assert_rejects(r, "description");

        let mut r = request();
        r.description = Some("а".repeat(500));
        assert!(validate_request(&r, &DeskLimits::default()).is_ok());
    }
}
