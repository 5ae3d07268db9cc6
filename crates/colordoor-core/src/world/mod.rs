//! The room graph.
//!
//! Rooms live in a flat arena addressed by [`RoomId`]; doors and keys
//! refer to rooms by id, never by reference.

pub mod builder;
pub mod key;
pub mod room;

pub use builder::{WorldBuilder, WorldError};
pub use key::Key;
pub use room::{ActionEffect, Door, Room, RoomState};

use serde::{Deserialize, Serialize};

/// Index of a room in the [`World`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

impl RoomId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// All rooms. The set is fixed after construction; room contents (lock
/// state, keys, flags) stay mutable for the lifetime of the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    pub(crate) fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Ids handed out by [`WorldBuilder`] are always in range; indexing
    /// with an id from another world panics.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (RoomId::new(index), room))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
