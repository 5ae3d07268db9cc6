//! Moving between rooms.

use crate::action::ActionResult;
use crate::color::DoorColor;
use crate::gameloop::GameState;

/// Walk through the door of the given color, if the current room has one
/// and it is unlocked.
///
/// Movement never unlocks anything: a locked door stays shut even with
/// the matching key in the player's pocket. Successful movement narrates
/// nothing; the next turn's room description tells the story.
pub fn move_through_door(state: &mut GameState, color_word: &str) -> ActionResult {
    let door = color_word.parse::<DoorColor>().ok().and_then(|color| {
        let room = state.world.room(state.player.current_room);
        room.door(color).map(|door| (door.leads_to, door.locked))
    });

    match door {
        None => {
            state.message("There is no door of that color here.");
            ActionResult::NoOp
        }
        Some((_, true)) => {
            state.message("That door is locked. You need the matching key.");
            ActionResult::NoOp
        }
        Some((destination, false)) => {
            state.player.current_room = destination;
            ActionResult::Success
        }
    }
}
