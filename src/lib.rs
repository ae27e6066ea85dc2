pub mod annuity;
pub mod application;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod format;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// re-export key types
pub use annuity::{monthly_payment, AnnuitySchedule, PaymentTotals, ScheduleRow};
pub use application::{CreateCreditRequest, CreditApplication};
pub use config::DeskLimits;
pub use decimal::{Money, Rate};
pub use errors::{DeskError, Result};
pub use events::{Event, EventLog};
pub use seed::demo_applications;
pub use store::{CreditFilter, CreditStore};
pub use types::{ApplicationId, CreditStatus};
pub use validation::validate_request;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
