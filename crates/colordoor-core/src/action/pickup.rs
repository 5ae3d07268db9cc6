//! Picking keys up.

use crate::action::ActionResult;
use crate::gameloop::GameState;

/// Move every key in the current room into the player's inventory.
///
/// One line of narration per key, in the room's key order. With nothing
/// to take, a message and no mutation.
pub fn take_keys(state: &mut GameState) -> ActionResult {
    let taken = state.world.room_mut(state.player.current_room).take_keys();
    if taken.is_empty() {
        state.message("There are no keys here to take.");
        return ActionResult::NoOp;
    }

    for key in taken {
        state.message(format!("You picked up the {} key.", key.color));
        state.player.inventory.push(key);
    }
    ActionResult::Success
}
