//! In-memory store used by service unit tests.
//!
//! Mirrors the constraints declared in the migrations so services see the
//! same violations they would get from Postgres.

use super::{
    CompanyRepository, EventRepository, RoomRepository, StoreError, StoreResult, UserRepository,
};
use crate::models::{
    Company, Event, EventRoom, NewCompany, NewEvent, NewEventRoom, NewUser, User, UserRole,
};

#[derive(Default)]
pub struct MemoryStore {
    companies: Vec<Company>,
    users: Vec<User>,
    events: Vec<Event>,
    rooms: Vec<EventRoom>,
    next_id: i32,
}

impl MemoryStore {
    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn company_exists(&self, company_id: i32) -> bool {
        self.companies.iter().any(|company| company.id == company_id)
    }

    /// Removes a company together with everything it owns.
    pub fn delete_company(&mut self, company_id: i32) {
        let owned_events: Vec<i32> = self
            .events
            .iter()
            .filter(|event| event.company_id == company_id)
            .map(|event| event.id)
            .collect();
        self.rooms
            .retain(|room| !owned_events.contains(&room.event_id));
        self.events.retain(|event| event.company_id != company_id);
        self.users.retain(|user| user.company_id != company_id);
        self.companies.retain(|company| company.id != company_id);
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

fn unique(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: Some(constraint.to_string()),
    }
}

fn foreign_key(constraint: &str) -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: Some(constraint.to_string()),
    }
}

fn check(constraint: &str) -> StoreError {
    StoreError::CheckViolation {
        constraint: Some(constraint.to_string()),
    }
}

impl CompanyRepository for MemoryStore {
    fn find_company(&mut self, company_id: i32) -> StoreResult<Option<Company>> {
        Ok(self
            .companies
            .iter()
            .find(|company| company.id == company_id)
            .cloned())
    }

    fn find_company_by_name(&mut self, name: &str) -> StoreResult<Option<Company>> {
        Ok(self
            .companies
            .iter()
            .find(|company| company.name == name)
            .cloned())
    }

    fn insert_company(&mut self, company: &NewCompany) -> StoreResult<Company> {
        if self.companies.iter().any(|c| c.name == company.name) {
            return Err(unique("uq_companies_name"));
        }
        let created = Company {
            id: self.allocate_id(),
            name: company.name.clone(),
        };
        self.companies.push(created.clone());
        Ok(created)
    }
}

impl UserRepository for MemoryStore {
    fn find_user(&mut self, user_id: i32) -> StoreResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == user_id).cloned())
    }

    fn find_user_by_email(&mut self, company_id: i32, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|user| user.company_id == company_id && user.email == email)
            .cloned())
    }

    fn insert_user(&mut self, user: &NewUser) -> StoreResult<User> {
        if !self.company_exists(user.company_id) {
            return Err(foreign_key("users_company_id_fkey"));
        }
        if user.role.parse::<UserRole>().is_err() {
            return Err(check("ck_users_role"));
        }
        if self
            .users
            .iter()
            .any(|u| u.company_id == user.company_id && u.email == user.email)
        {
            return Err(unique("uq_users_company_email"));
        }
        let created = User {
            id: self.allocate_id(),
            company_id: user.company_id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            active: user.active,
        };
        self.users.push(created.clone());
        Ok(created)
    }
}

impl EventRepository for MemoryStore {
    fn find_event(&mut self, event_id: i32) -> StoreResult<Option<Event>> {
        Ok(self.events.iter().find(|event| event.id == event_id).cloned())
    }

    fn insert_event(&mut self, event: &NewEvent) -> StoreResult<Event> {
        if !self.company_exists(event.company_id) {
            return Err(foreign_key("events_company_id_fkey"));
        }
        if event.end_date < event.start_date {
            return Err(check("ck_event_date_range"));
        }
        let created = Event {
            id: self.allocate_id(),
            company_id: event.company_id,
            name: event.name.clone(),
            location_city: event.location_city.clone(),
            location_country: event.location_country.clone(),
            timezone: event.timezone.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            status: event.status.clone(),
        };
        self.events.push(created.clone());
        Ok(created)
    }
}

impl RoomRepository for MemoryStore {
    fn list_rooms(&mut self, event_id: i32) -> StoreResult<Vec<EventRoom>> {
        Ok(self
            .rooms
            .iter()
            .filter(|room| room.event_id == event_id)
            .cloned()
            .collect())
    }

    fn event_has_rooms(&mut self, event_id: i32) -> StoreResult<bool> {
        Ok(self.rooms.iter().any(|room| room.event_id == event_id))
    }

    fn insert_rooms(&mut self, rooms: &[NewEventRoom]) -> StoreResult<Vec<EventRoom>> {
        let mut staged: Vec<EventRoom> = Vec::with_capacity(rooms.len());
        for room in rooms {
            if !self.events.iter().any(|event| event.id == room.event_id) {
                return Err(foreign_key("event_rooms_event_id_fkey"));
            }
            let existing = self.rooms.iter().chain(staged.iter());
            let mut clash_name = false;
            let mut clash_other = false;
            for other in existing.filter(|other| other.event_id == room.event_id) {
                clash_name |= other.name == room.name;
                clash_other |= other.is_other && room.is_other;
            }
            if clash_name {
                return Err(unique("uq_event_rooms_event_name"));
            }
            if clash_other {
                return Err(unique("uq_event_rooms_event_other"));
            }
            staged.push(EventRoom {
                id: 0,
                event_id: room.event_id,
                name: room.name.clone(),
                default_location: room.default_location.clone(),
                is_other: room.is_other,
            });
        }

        for room in &mut staged {
            room.id = self.allocate_id();
        }
        self.rooms.extend(staged.iter().cloned());
        Ok(staged)
    }
}
