use diesel::{dsl::exists, prelude::*, PgConnection};

use super::StoreResult;
use crate::models::{EventRoom, NewEventRoom};
use crate::schema::event_rooms;

pub trait RoomRepository {
    /// Rooms of an event in creation order.
    fn list_rooms(&mut self, event_id: i32) -> StoreResult<Vec<EventRoom>>;
    fn event_has_rooms(&mut self, event_id: i32) -> StoreResult<bool>;
    /// Inserts the whole batch in one statement; either every room lands or none.
    fn insert_rooms(&mut self, rooms: &[NewEventRoom]) -> StoreResult<Vec<EventRoom>>;
}

impl RoomRepository for PgConnection {
    fn list_rooms(&mut self, event_id: i32) -> StoreResult<Vec<EventRoom>> {
        let rooms = event_rooms::table
            .filter(event_rooms::event_id.eq(event_id))
            .order(event_rooms::id.asc())
            .select(EventRoom::as_select())
            .load(self)?;
        Ok(rooms)
    }

    fn event_has_rooms(&mut self, event_id: i32) -> StoreResult<bool> {
        let found = diesel::select(exists(
            event_rooms::table.filter(event_rooms::event_id.eq(event_id)),
        ))
        .get_result(self)?;
        Ok(found)
    }

    fn insert_rooms(&mut self, rooms: &[NewEventRoom]) -> StoreResult<Vec<EventRoom>> {
        let mut created: Vec<EventRoom> = diesel::insert_into(event_rooms::table)
            .values(rooms)
            .returning(EventRoom::as_returning())
            .get_results(self)?;
        created.sort_by_key(|room| room.id);
        Ok(created)
    }
}
