use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{ApplicationId, CreditStatus};

/// all events emitted by store operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ApplicationSubmitted {
        id: ApplicationId,
        amount: Money,
        monthly_payment: Money,
    },
    StatusChanged {
        id: ApplicationId,
        old_status: CreditStatus,
        new_status: CreditStatus,
        changed_on: NaiveDate,
    },
    ApplicationDeleted {
        id: ApplicationId,
    },
}

/// event log for collecting events during store operations
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
