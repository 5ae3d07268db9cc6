//! Staged world construction.

use thiserror::Error;

use crate::color::DoorColor;
use crate::world::{ActionEffect, Door, Key, Room, RoomId, World};

/// Raised when an assembled world references rooms it does not contain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("world has no rooms")]
    NoRooms,
    #[error("{room}: {color} door leads to a room outside the world")]
    DoorToNowhere { room: String, color: DoorColor },
    #[error("{room}: {color} key was found in a room outside the world")]
    KeyFromNowhere { room: String, color: DoorColor },
}

/// Assembles a [`World`] in two stages: allocate rooms (collecting their
/// ids), then wire doors, keys, and actions between them.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    rooms: Vec<Room>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and get its id back for wiring.
    pub fn room(&mut self, name: impl Into<String>, description: impl Into<String>) -> RoomId {
        let id = RoomId::new(self.rooms.len());
        self.rooms.push(Room::new(name, description));
        id
    }

    /// Wire a door out of `from`. The destination is only validated at
    /// [`WorldBuilder::build`] time, so rooms can be wired in any order.
    pub fn door(&mut self, from: RoomId, door: Door) {
        self.rooms[from.index()].add_door(door);
    }

    pub fn key(&mut self, room: RoomId, key: Key) {
        self.rooms[room.index()].add_key(key);
    }

    pub fn action(&mut self, room: RoomId, command: &str, effect: ActionEffect) {
        self.rooms[room.index()].add_action(command, effect);
    }

    /// Validate every cross-room reference and finish.
    pub fn build(self) -> Result<World, WorldError> {
        if self.rooms.is_empty() {
            return Err(WorldError::NoRooms);
        }

        let count = self.rooms.len();
        for room in &self.rooms {
            for door in room.doors() {
                if door.leads_to.index() >= count {
                    return Err(WorldError::DoorToNowhere {
                        room: room.name.clone(),
                        color: door.color,
                    });
                }
            }
            for key in room.keys() {
                if key.found_in.index() >= count {
                    return Err(WorldError::KeyFromNowhere {
                        room: room.name.clone(),
                        color: key.color,
                    });
                }
            }
        }

        Ok(World::new(self.rooms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_validates_empty_world() {
        assert_eq!(WorldBuilder::new().build().unwrap_err(), WorldError::NoRooms);
    }

    #[test]
    fn test_build_wires_rooms_and_doors() {
        let mut builder = WorldBuilder::new();
        let hall = builder.room("Hall", "Bare.");
        let cell = builder.room("Cell", "Sealed.");
        builder.door(hall, Door::new(DoorColor::Red, cell));

        let world = builder.build().unwrap();
        assert_eq!(world.room_count(), 2);
        assert_eq!(world.room(hall).door(DoorColor::Red).unwrap().leads_to, cell);
        assert!(world.room(cell).doors().is_empty());
    }

    #[test]
    fn test_build_rejects_door_to_foreign_room() {
        let mut other = WorldBuilder::new();
        other.room("Hall", "Bare.");
        let foreign = other.room("Cell", "Sealed.");

        let mut builder = WorldBuilder::new();
        let hall = builder.room("Hall", "Bare.");
        builder.door(hall, Door::new(DoorColor::Red, foreign));

        assert_eq!(
            builder.build().unwrap_err(),
            WorldError::DoorToNowhere {
                room: "Hall".to_string(),
                color: DoorColor::Red,
            }
        );
    }

    #[test]
    fn test_build_rejects_key_from_foreign_room() {
        let mut other = WorldBuilder::new();
        other.room("Hall", "Bare.");
        let foreign = other.room("Cell", "Sealed.");

        let mut builder = WorldBuilder::new();
        let hall = builder.room("Hall", "Bare.");
        builder.key(hall, Key::new(DoorColor::Blue, foreign, "a key"));

        assert_eq!(
            builder.build().unwrap_err(),
            WorldError::KeyFromNowhere {
                room: "Hall".to_string(),
                color: DoorColor::Blue,
            }
        );
    }

    #[test]
    fn test_error_messages_name_the_room() {
        let err = WorldError::DoorToNowhere {
            room: "Hall".to_string(),
            color: DoorColor::Red,
        };
        assert_eq!(err.to_string(), "Hall: red door leads to a room outside the world");
    }
}
