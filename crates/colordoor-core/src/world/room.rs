//! Rooms, doors, and room-scoped actions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::DoorColor;
use crate::world::{Key, RoomId};

/// A one-way passage to another room.
///
/// Doors are directed. A return passage, where the world has one, is a
/// separate door with its own color and lock state; nothing keeps the two
/// in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub color: DoorColor,
    pub leads_to: RoomId,
    pub locked: bool,
}

impl Door {
    /// An unlocked door.
    pub fn new(color: DoorColor, leads_to: RoomId) -> Self {
        Self {
            color,
            leads_to,
            locked: false,
        }
    }

    /// A locked door. Opens only via a matching key.
    pub fn locked(color: DoorColor, leads_to: RoomId) -> Self {
        Self {
            color,
            leads_to,
            locked: true,
        }
    }
}

/// Room-local flags flipped by custom actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    pub light_on: bool,
}

/// What a registered room action does.
///
/// Effects are plain data interpreted by the dispatcher against the room
/// the player is standing in, which is always the room the action was
/// registered on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEffect {
    /// Flip the room's light and report the resulting state.
    ToggleLight { on: String, off: String },
}

/// A node in the room graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub description: String,
    doors: Vec<Door>,
    keys: Vec<Key>,
    actions: HashMap<String, ActionEffect>,
    pub state: RoomState,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            doors: Vec::new(),
            keys: Vec::new(),
            actions: HashMap::new(),
            state: RoomState::default(),
        }
    }

    /// Append a door. Duplicate colors are allowed; lookups resolve to the
    /// first match in insertion order.
    pub fn add_door(&mut self, door: Door) {
        self.doors.push(door);
    }

    pub fn add_key(&mut self, key: Key) {
        self.keys.push(key);
    }

    /// Remove one key equal to `key`. Doing nothing when it is absent is
    /// part of the contract.
    pub fn remove_key(&mut self, key: &Key) {
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
        }
    }

    /// Register a custom action under the lowercased command word.
    /// Registering the same word again replaces the earlier effect.
    pub fn add_action(&mut self, command: &str, effect: ActionEffect) {
        self.actions.insert(command.to_lowercase(), effect);
    }

    /// First door of the given color, if any.
    pub fn door(&self, color: DoorColor) -> Option<&Door> {
        self.doors.iter().find(|door| door.color == color)
    }

    pub fn door_mut(&mut self, color: DoorColor) -> Option<&mut Door> {
        self.doors.iter_mut().find(|door| door.color == color)
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Remove and return every key in the room, preserving order.
    pub fn take_keys(&mut self) -> Vec<Key> {
        std::mem::take(&mut self.keys)
    }

    pub fn action(&self, command: &str) -> Option<&ActionEffect> {
        self.actions.get(command)
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Render the description block shown at the top of each turn.
    ///
    /// Pure: describing a room never changes it. Blank entries mark the
    /// paragraph breaks between sections.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!("You are in the {}.", self.name),
            self.description.clone(),
        ];

        lines.push(String::new());
        if self.doors.is_empty() {
            lines.push("There are no doors here!".to_string());
        } else {
            lines.push("You see doors in these colors:".to_string());
            for door in &self.doors {
                let lock_status = if door.locked { " (locked)" } else { "" };
                lines.push(format!("- {}{}", door.color.display_name(), lock_status));
            }
        }

        if !self.keys.is_empty() {
            lines.push(String::new());
            lines.push("You see some keys:".to_string());
            for key in &self.keys {
                lines.push(format!("- {} key", key.color.display_name()));
            }
        }

        if !self.actions.is_empty() {
            lines.push(String::new());
            lines.push("You can also try actions like:".to_string());
            for action in self.actions.keys() {
                lines.push(format!("- {action}"));
            }
        }

        lines
    }
}
