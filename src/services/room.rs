use crate::models::{EventRoom, NewEventRoom, OTHER_ROOM_NAME};
use crate::repositories::{EventRepository, RoomRepository, StoreError};

use super::{ServiceError, ServiceResult};

pub struct RoomService<'a, S> {
    store: &'a mut S,
}

impl<'a, S: EventRepository + RoomRepository> RoomService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Sets up the rooms of an event. This can happen only once per event.
    ///
    /// Creates `Room 1` through `Room N`, each optionally bound to the
    /// matching entry of `default_locations`, followed by the `Other` room.
    /// Rooms are returned in that order.
    pub fn configure_rooms(
        &mut self,
        event_id: i32,
        room_count: usize,
        default_locations: Option<Vec<String>>,
    ) -> ServiceResult<Vec<EventRoom>> {
        if self.store.find_event(event_id)?.is_none() {
            return Err(ServiceError::NotFound("Event not found.".to_string()));
        }

        if self.store.event_has_rooms(event_id)? {
            tracing::debug!(event_id, "rejected repeated room configuration");
            return Err(already_configured());
        }

        if let Some(locations) = default_locations.as_ref() {
            if locations.len() != room_count {
                return Err(ServiceError::Validation(
                    "default_locations length must match room_count.".to_string(),
                ));
            }
        }

        let rooms = build_rooms(event_id, room_count, default_locations);
        let created = self.store.insert_rooms(&rooms).map_err(|err| match err {
            StoreError::UniqueViolation { .. } => already_configured(),
            StoreError::ForeignKeyViolation { .. } => {
                ServiceError::NotFound("Event not found.".to_string())
            }
            other => ServiceError::from(other),
        })?;

        tracing::info!(event_id, rooms = created.len(), "configured event rooms");
        Ok(created)
    }
}

fn build_rooms(
    event_id: i32,
    room_count: usize,
    default_locations: Option<Vec<String>>,
) -> Vec<NewEventRoom> {
    let mut locations = default_locations.map(Vec::into_iter);
    let mut rooms: Vec<NewEventRoom> = (1..=room_count)
        .map(|number| NewEventRoom {
            event_id,
            name: format!("Room {number}"),
            default_location: locations.as_mut().and_then(|iter| iter.next()),
            is_other: false,
        })
        .collect();

    rooms.push(NewEventRoom {
        event_id,
        name: OTHER_ROOM_NAME.to_string(),
        default_location: None,
        is_other: true,
    });
    rooms
}

fn already_configured() -> ServiceError {
    ServiceError::Conflict("Rooms are already configured for this event.".to_string())
}
