use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// fixed monthly annuity payment for (principal, term, annual rate)
///
/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1), with r the monthly rate.
/// The result is rounded half away from zero to kopecks. A zero rate
/// degenerates to straight-line repayment (amount / term) since the closed
/// formula divides by zero there.
pub fn monthly_payment(amount: Money, term_months: u32, annual_rate: Rate) -> Money {
    if term_months == 0 {
        return amount;
    }

    let r = annual_rate.monthly_fraction();

    if r.is_zero() {
        return Money::from_decimal_half_up(amount.as_decimal() / Decimal::from(term_months));
    }

    // (1 + r)^n by repeated multiplication; term is capped at 360
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + r;
    for _ in 0..term_months {
        compound *= base;
    }

    let numerator = amount.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal_half_up(numerator / denominator)
}

/// loan economics derived from a monthly payment; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub overpayment: Money,
}

impl PaymentTotals {
    /// derive totals from an already-known payment
    pub fn from_payment(monthly_payment: Money, amount: Money, term_months: u32) -> Self {
        let total_payment = monthly_payment * Decimal::from(term_months);
        Self {
            monthly_payment,
            total_payment,
            overpayment: total_payment - amount,
        }
    }

    /// compute payment and totals in one call, for the live form preview
    pub fn quote(amount: Money, term_months: u32, annual_rate: Rate) -> Self {
        Self::from_payment(monthly_payment(amount, term_months, annual_rate), amount, term_months)
    }
}

/// one row of the repayment preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub payment_number: u32,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub ending_balance: Money,
}

/// month-by-month repayment preview for the creation form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnuitySchedule {
    pub amount: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub rows: Vec<ScheduleRow>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AnnuitySchedule {
    /// generate the full schedule; the final row absorbs residual rounding
    /// so the balance closes at exactly zero
    pub fn generate(amount: Money, term_months: u32, annual_rate: Rate) -> Self {
        let payment = monthly_payment(amount, term_months, annual_rate);
        let r = annual_rate.monthly_fraction();

        let mut rows = Vec::with_capacity(term_months as usize);
        let mut balance = amount;

        for i in 1..=term_months {
            let interest_portion = Money::from_decimal_half_up(balance.as_decimal() * r);
            let is_last = i == term_months;

            let (payment_amount, principal_portion) = if is_last {
                (interest_portion + balance, balance)
            } else {
                let principal = (payment - interest_portion).min(balance);
                (payment, principal)
            };

            let ending_balance = (balance - principal_portion).max(Money::ZERO);

            rows.push(ScheduleRow {
                payment_number: i,
                payment_amount,
                interest_portion,
                principal_portion,
                ending_balance,
            });

            balance = ending_balance;
        }

        let total_interest = rows
            .iter()
            .map(|row| row.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = rows
            .iter()
            .map(|row| row.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Self {
            amount,
            annual_rate,
            term_months,
            rows,
            total_interest,
            total_payment,
        }
    }

    /// get row for a specific payment number
    pub fn row(&self, payment_number: u32) -> Option<&ScheduleRow> {
        self.rows.get(payment_number.checked_sub(1)? as usize)
    }
}
