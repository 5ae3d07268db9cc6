//! Keys.

use serde::{Deserialize, Serialize};

use crate::color::DoorColor;
use crate::world::RoomId;

/// A colored key. Unlocks doors of the matching color, one room at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub color: DoorColor,
    /// Where the key was originally placed. Informational only; picking
    /// the key up does not change it.
    pub found_in: RoomId,
    /// Flavor text. Not shown during play; it surfaces in world dumps.
    pub description: String,
}

impl Key {
    pub fn new(color: DoorColor, found_in: RoomId, description: impl Into<String>) -> Self {
        Self {
            color,
            found_in,
            description: description.into(),
        }
    }
}
