use chrono::{Days, NaiveDate};

use crate::models::{Event, EventStatus, NewEvent};
use crate::repositories::{CompanyRepository, EventRepository, StoreError};

use super::{ServiceError, ServiceResult};

/// Inclusive length of every event, in days.
pub const EVENT_SPAN_DAYS: u64 = 3;

#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub name: String,
    pub location_city: String,
    pub location_country: String,
    pub timezone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub struct EventService<'a, S> {
    store: &'a mut S,
}

impl<'a, S: CompanyRepository + EventRepository> EventService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Creates an active event for a company. The end date must fall exactly
    /// two days after the start date.
    pub fn create_event(&mut self, company_id: i32, input: CreateEvent) -> ServiceResult<Event> {
        if self.store.find_company(company_id)?.is_none() {
            return Err(company_not_found());
        }

        if expected_end_date(input.start_date) != Some(input.end_date) {
            tracing::debug!(
                company_id,
                start_date = %input.start_date,
                end_date = %input.end_date,
                "rejected event span"
            );
            return Err(invalid_span());
        }

        let new_event = NewEvent {
            company_id,
            name: input.name,
            location_city: input.location_city,
            location_country: input.location_country,
            timezone: input.timezone,
            start_date: input.start_date,
            end_date: input.end_date,
            status: EventStatus::Active.as_str().to_string(),
        };

        let event = self
            .store
            .insert_event(&new_event)
            .map_err(|err| match err {
                StoreError::ForeignKeyViolation { .. } => company_not_found(),
                StoreError::CheckViolation { .. } => invalid_span(),
                other => ServiceError::from(other),
            })?;

        tracing::info!(company_id, event_id = event.id, "created event");
        Ok(event)
    }
}

fn expected_end_date(start_date: NaiveDate) -> Option<NaiveDate> {
    start_date.checked_add_days(Days::new(EVENT_SPAN_DAYS - 1))
}

fn company_not_found() -> ServiceError {
    ServiceError::NotFound("Company not found.".to_string())
}

fn invalid_span() -> ServiceError {
    ServiceError::Validation(
        "Event must span exactly 3 days (end_date must be start_date + 2 days).".to_string(),
    )
}
