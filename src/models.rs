use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;

use crate::schema::*;

pub const DEFAULT_TIMEZONE: &str = "Europe/Madrid";
pub const OTHER_ROOM_NAME: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = companies)]
pub struct Company {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub struct NewCompany {
    pub name: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(table_name = users)]
#[diesel(belongs_to(Company))]
pub struct User {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub company_id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(table_name = events)]
#[diesel(belongs_to(Company))]
pub struct Event {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    pub location_city: String,
    pub location_country: String,
    pub timezone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent {
    pub company_id: i32,
    pub name: String,
    pub location_city: String,
    pub location_country: String,
    pub timezone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(table_name = event_rooms)]
#[diesel(belongs_to(Event))]
pub struct EventRoom {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub default_location: Option<String>,
    pub is_other: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = event_rooms)]
pub struct NewEventRoom {
    pub event_id: i32,
    pub name: String,
    pub default_location: Option<String>,
    pub is_other: bool,
}

/// Role a user holds inside their company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Organizer,
    Attendee,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Organizer, UserRole::Attendee];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Organizer => "organizer",
            UserRole::Attendee => "attendee",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an event. Only `Active` is assigned today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Active,
    Canceled,
    Archived,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::Canceled => "canceled",
            EventStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
