//! Room-scoped custom actions.

use crate::action::ActionResult;
use crate::gameloop::GameState;
use crate::world::ActionEffect;

/// Run the current room's action registered under `word`, if there is one.
///
/// Returns `None` when the room has no such action, so the dispatcher can
/// fall through to treating the word as a door color.
pub fn try_room_action(state: &mut GameState, word: &str) -> Option<ActionResult> {
    let room_id = state.player.current_room;
    let effect = state.world.room(room_id).action(word)?.clone();

    match effect {
        ActionEffect::ToggleLight { on, off } => {
            let room = state.world.room_mut(room_id);
            room.state.light_on = !room.state.light_on;
            let lit = room.state.light_on;
            state.message(if lit { on } else { off });
        }
    }
    Some(ActionResult::Success)
}
