use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::annuity::PaymentTotals;
use crate::decimal::{Money, Rate};
use crate::errors::{DeskError, Result};
use crate::types::{ApplicationId, CreditStatus};

/// a single credit application tracked through its lifecycle
///
/// `monthly_payment` is computed once at creation and stored; it is never
/// recomputed for existing records, even when the calculator changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditApplication {
    pub id: ApplicationId,
    pub client_name: String,
    pub phone_number: String,
    pub amount: Money,
    #[serde(rename = "term")]
    pub term_months: u32,
    pub rate: Rate,
    pub monthly_payment: Money,
    pub status: CreditStatus,
    pub created_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreditApplication {
    /// loan economics derived from the stored payment
    pub fn totals(&self) -> PaymentTotals {
        PaymentTotals::from_payment(self.monthly_payment, self.amount, self.term_months)
    }

    /// apply a status transition, enforcing the forward-only graph
    ///
    /// entering Approved stamps `approved_date` with `today` unless a date
    /// is already present; every other transition leaves it untouched
    pub fn transition_to(&mut self, new_status: CreditStatus, today: NaiveDate) -> Result<()> {
        if !self.status.can_transition_to(new_status) {
            return Err(DeskError::InvalidTransition {
                from: self.status,
                to: new_status,
            });
        }

        self.status = new_status;

        if new_status == CreditStatus::Approved && self.approved_date.is_none() {
            self.approved_date = Some(today);
        }

        Ok(())
    }
}

/// creation form payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditRequest {
    pub client_name: String,
    pub phone_number: String,
    pub amount: Money,
    #[serde(rename = "term")]
    pub term_months: u32,
    pub rate: Rate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn application(status: CreditStatus) -> CreditApplication {
        CreditApplication {
            id: Uuid::new_v4(),
            client_name: "Иванов Иван Иванович".to_string(),
            phone_number: "+7 (999) 123-45-67".to_string(),
            amount: Money::from_major(500_000),
            term_months: 24,
            rate: Rate::from_percent(dec!(12.5)),
            monthly_payment: Money::from_str_exact("23653.65").unwrap(),
            status,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            approved_date: None,
            description: None,
        }
    }

    #[test]
    fn test_approval_stamps_date() {
        let mut app = application(CreditStatus::Pending);
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();

        app.transition_to(CreditStatus::Approved, today).unwrap();
        assert_eq!(app.status, CreditStatus::Approved);
        assert_eq!(app.approved_date, Some(today));
    }

    #[test]
    fn test_approval_date_not_overwritten() {
        let mut app = application(CreditStatus::Pending);
        let original = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        app.approved_date = Some(original);

        app.transition_to(CreditStatus::Approved, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .unwrap();
        assert_eq!(app.approved_date, Some(original));
    }

    #[test]
    fn test_other_transitions_leave_approved_date_untouched() {
        let mut app = application(CreditStatus::Active);
        let approved = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        app.approved_date = Some(approved);

        app.transition_to(CreditStatus::Closed, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .unwrap();
        assert_eq!(app.approved_date, Some(approved));
    }

    #[test]
    fn test_denied_transition_keeps_record_unchanged() {
        let mut app = application(CreditStatus::Approved);
        let before = app.clone();

        let err = app
            .transition_to(CreditStatus::Pending, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            DeskError::InvalidTransition {
                from: CreditStatus::Approved,
                to: CreditStatus::Pending,
            }
        ));
        assert_eq!(app, before);
    }

    #[test]
    fn test_totals_from_stored_payment() {
        let app = application(CreditStatus::Active);
        let totals = app.totals();
        assert_eq!(totals.monthly_payment, app.monthly_payment);
        assert_eq!(
            totals.total_payment,
            Money::from_str_exact("567687.60").unwrap()
        );
        assert_eq!(
            totals.overpayment,
            Money::from_str_exact("67687.60").unwrap()
        );
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let app = application(CreditStatus::Pending);
        let json = serde_json::to_string(&app).unwrap();
        assert!(json.contains("\"clientName\""));
        assert!(json.contains("\"monthlyPayment\""));
        assert!(json.contains("\"createdDate\""));
        assert!(!json.contains("\"approvedDate\"")); // skipped while none

        let back: CreditApplication = serde_json::from_str(&json).unwrap();
        assert_eq!(back, app);
    }
}
