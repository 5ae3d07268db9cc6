//! Player state.

use crate::color::DoorColor;
use crate::world::{Key, RoomId};

/// The player: a location and a pocketful of keys.
#[derive(Debug, Clone)]
pub struct Player {
    /// Rewritten only by walking through an unlocked door.
    pub current_room: RoomId,
    /// Keys in pickup order.
    pub inventory: Vec<Key>,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Self {
            current_room: start,
            inventory: Vec::new(),
        }
    }

    pub fn has_key(&self, color: DoorColor) -> bool {
        self.inventory.iter().any(|key| key.color == color)
    }
}
