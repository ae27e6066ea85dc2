use hourglass_rs::SafeTimeProvider;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::annuity;
use crate::application::{CreateCreditRequest, CreditApplication};
use crate::config::DeskLimits;
use crate::decimal::Money;
use crate::errors::{DeskError, Result};
use crate::events::{Event, EventLog};
use crate::types::{ApplicationId, CreditStatus};
use crate::validation::validate_request;

/// filter criteria for listing applications; present criteria are AND-combined
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditFilter {
    /// match any of these statuses; empty means no status restriction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<CreditStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_from: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_to: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_from: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_to: Option<u32>,
    /// case-insensitive substring match on the client name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl CreditFilter {
    pub fn matches(&self, application: &CreditApplication) -> bool {
        if !self.status.is_empty() && !self.status.contains(&application.status) {
            return false;
        }

        if let Some(from) = self.amount_from {
            if application.amount < from {
                return false;
            }
        }
        if let Some(to) = self.amount_to {
            if application.amount > to {
                return false;
            }
        }

        if let Some(from) = self.term_from {
            if application.term_months < from {
                return false;
            }
        }
        if let Some(to) = self.term_to {
            if application.term_months > to {
                return false;
            }
        }

        if let Some(needle) = &self.client_name {
            let haystack = application.client_name.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// authoritative, ordered collection of credit applications
///
/// The store is the single owner of the records; callers receive clones
/// and never mutate a record in place. Operations are async to preserve
/// the console's calling contract, though no real I/O is awaited.
pub struct CreditStore {
    applications: Vec<CreditApplication>,
    limits: DeskLimits,
    events: EventLog,
}

impl CreditStore {
    /// create an empty store with the given limits
    pub fn new(limits: DeskLimits) -> Self {
        Self {
            applications: Vec::new(),
            limits,
            events: EventLog::new(),
        }
    }

    /// build a store around existing records, newest first
    pub fn from_applications(applications: Vec<CreditApplication>, limits: DeskLimits) -> Self {
        Self {
            applications,
            limits,
            events: EventLog::new(),
        }
    }

    pub fn limits(&self) -> &DeskLimits {
        &self.limits
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// list applications matching the filter, newest first
    pub async fn list(&self, filter: &CreditFilter) -> Vec<CreditApplication> {
        self.applications
            .iter()
            .filter(|application| filter.matches(application))
            .cloned()
            .collect()
    }

    /// fetch a single application by id
    pub async fn get(&self, id: ApplicationId) -> Result<CreditApplication> {
        self.applications
            .iter()
            .find(|application| application.id == id)
            .cloned()
            .ok_or(DeskError::NotFound { id })
    }

    /// validate, price, and record a new application
    ///
    /// the new record is prepended so listings run newest first; nothing
    /// is stored when validation fails
    pub async fn create(
        &mut self,
        request: CreateCreditRequest,
        time: &SafeTimeProvider,
    ) -> Result<CreditApplication> {
        validate_request(&request, &self.limits)?;

        let monthly_payment =
            annuity::monthly_payment(request.amount, request.term_months, request.rate);

        let application = CreditApplication {
            id: Uuid::new_v4(),
            client_name: request.client_name,
            phone_number: request.phone_number,
            amount: request.amount,
            term_months: request.term_months,
            rate: request.rate,
            monthly_payment,
            status: CreditStatus::Pending,
            created_date: time.now().date_naive(),
            approved_date: None,
            description: request.description,
        };

        info!(
            "application {} submitted: {} over {} months at {}",
            application.id, application.amount, application.term_months, application.rate
        );

        self.events.emit(Event::ApplicationSubmitted {
            id: application.id,
            amount: application.amount,
            monthly_payment,
        });

        self.applications.insert(0, application.clone());

        Ok(application)
    }

    /// apply a status transition to an existing application
    pub async fn update_status(
        &mut self,
        id: ApplicationId,
        new_status: CreditStatus,
        time: &SafeTimeProvider,
    ) -> Result<CreditApplication> {
        let today = time.now().date_naive();

        let application = self
            .applications
            .iter_mut()
            .find(|application| application.id == id)
            .ok_or(DeskError::NotFound { id })?;

        let old_status = application.status;
        application.transition_to(new_status, today)?;

        info!("application {id} moved {old_status} -> {new_status}");

        self.events.emit(Event::StatusChanged {
            id,
            old_status,
            new_status,
            changed_on: today,
        });

        Ok(application.clone())
    }

    /// remove an application; deleting an unknown id is an error
    pub async fn delete(&mut self, id: ApplicationId) -> Result<()> {
        let index = self
            .applications
            .iter()
            .position(|application| application.id == id)
            .ok_or(DeskError::NotFound { id })?;

        self.applications.remove(index);
        debug!("application {id} deleted");

        self.events.emit(Event::ApplicationDeleted { id });

        Ok(())
    }

    /// drain events collected since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// snapshot the collection as pretty-printed json
    pub fn export_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.applications)
    }

    /// rebuild a store from a json snapshot
    pub fn import_json(
        json: &str,
        limits: DeskLimits,
    ) -> std::result::Result<Self, serde_json::Error> {
        let applications: Vec<CreditApplication> = serde_json::from_str(json)?;
        Ok(Self::from_applications(applications, limits))
    }
}
