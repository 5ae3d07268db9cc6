//! Unlocking doors.

use crate::action::ActionResult;
use crate::color::DoorColor;
use crate::gameloop::GameState;

/// Try to unlock a door of the given color in the current room.
///
/// Three checks, in order: the player carries a matching key, the room has
/// a door of that color, and that door is locked. Each miss gets its own
/// message and changes nothing; only passing all three flips the lock.
///
/// `color_word` is the raw token the player typed. A word that is not a
/// color at all fails the first check with the same message as a key the
/// player has not found yet.
pub fn use_key(state: &mut GameState, color_word: &str) -> ActionResult {
    let carried = color_word
        .parse::<DoorColor>()
        .ok()
        .filter(|&color| state.player.has_key(color));
    let Some(color) = carried else {
        state.message(format!("You don’t have a {color_word} key."));
        return ActionResult::NoOp;
    };

    let room_id = state.player.current_room;
    let (message, result) = match state.world.room_mut(room_id).door_mut(color) {
        None => (
            format!("There is no {color} door here."),
            ActionResult::NoOp,
        ),
        Some(door) if !door.locked => (
            format!("The {color} door is already unlocked."),
            ActionResult::NoOp,
        ),
        Some(door) => {
            door.locked = false;
            (
                format!("You used the {color} key to unlock the door!"),
                ActionResult::Success,
            )
        }
    };
    state.message(message);
    result
}
