use diesel::{prelude::*, PgConnection};

use super::StoreResult;
use crate::models::{Event, NewEvent};
use crate::schema::events;

pub trait EventRepository {
    fn find_event(&mut self, event_id: i32) -> StoreResult<Option<Event>>;
    fn insert_event(&mut self, event: &NewEvent) -> StoreResult<Event>;
}

impl EventRepository for PgConnection {
    fn find_event(&mut self, event_id: i32) -> StoreResult<Option<Event>> {
        let event = events::table
            .find(event_id)
            .select(Event::as_select())
            .first(self)
            .optional()?;
        Ok(event)
    }

    fn insert_event(&mut self, event: &NewEvent) -> StoreResult<Event> {
        let created = diesel::insert_into(events::table)
            .values(event)
            .returning(Event::as_returning())
            .get_result(self)?;
        Ok(created)
    }
}
