use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::application::CreditApplication;
use crate::config::DeskLimits;
use crate::decimal::{Money, Rate};
use crate::store::CreditStore;
use crate::types::CreditStatus;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn money(s: &str) -> Money {
    Money::from_str_exact(s).expect("valid seed amount")
}

/// demonstration dataset of the credit desk
///
/// The stored `monthly_payment` figures are kept exactly as the desk has
/// always carried them; existing records are never repriced, so several
/// figures differ from what the current calculator would produce for the
/// same terms.
pub fn demo_applications() -> Vec<CreditApplication> {
    vec![
        CreditApplication {
            id: Uuid::new_v4(),
            client_name: "Иванов Иван Иванович".to_string(),
            phone_number: "+7 (999) 123-45-67".to_string(),
            amount: Money::from_major(500_000),
            term_months: 24,
            rate: Rate::from_percent(dec!(12.5)),
            monthly_payment: money("23546.89"),
            status: CreditStatus::Active,
            created_date: date(2024, 1, 15),
            approved_date: Some(date(2024, 1, 17)),
            description: Some("Потребительский кредит на покупку автомобиля".to_string()),
        },
        CreditApplication {
            id: Uuid::new_v4(),
            client_name: "Петрова Анна Сергеевна".to_string(),
            phone_number: "+7 (999) 987-65-43".to_string(),
            amount: Money::from_major(1_200_000),
            term_months: 36,
            rate: Rate::from_percent(dec!(10.8)),
            monthly_payment: money("39245.67"),
            status: CreditStatus::Pending,
            created_date: date(2024, 12, 20),
            approved_date: None,
            description: Some("Ипотечный кредит".to_string()),
        },
        CreditApplication {
            id: Uuid::new_v4(),
            client_name: "Сидоров Петр Александрович".to_string(),
            phone_number: "+7 (999) 555-44-33".to_string(),
            amount: Money::from_major(250_000),
            term_months: 12,
            rate: Rate::from_percent(dec!(15.2)),
            monthly_payment: money("22456.78"),
            status: CreditStatus::Approved,
            created_date: date(2024, 12, 22),
            approved_date: Some(date(2024, 12, 23)),
            description: Some("Краткосрочный потребительский кредит".to_string()),
        },
        CreditApplication {
            id: Uuid::new_v4(),
            client_name: "Козлова Елена Михайловна".to_string(),
            phone_number: "+7 (999) 777-88-99".to_string(),
            amount: Money::from_major(800_000),
            term_months: 60,
            rate: Rate::from_percent(dec!(9.5)),
            monthly_payment: money("16789.12"),
            status: CreditStatus::Rejected,
            created_date: date(2024, 12, 18),
            approved_date: None,
            description: Some("Кредит на образование".to_string()),
        },
        CreditApplication {
            id: Uuid::new_v4(),
            client_name: "Морозов Алексей Викторович".to_string(),
            phone_number: "+7 (999) 111-22-33".to_string(),
            amount: Money::from_major(150_000),
            term_months: 18,
            rate: Rate::from_percent(dec!(14.0)),
            monthly_payment: money("9567.45"),
            status: CreditStatus::Closed,
            created_date: date(2023, 6, 10),
            approved_date: Some(date(2023, 6, 12)),
            description: Some("Кредит на ремонт квартиры".to_string()),
        },
    ]
}

impl CreditStore {
    /// store preloaded with the demonstration dataset
    pub fn with_demo_data(limits: DeskLimits) -> Self {
        Self::from_applications(demo_applications(), limits)
    }
}
