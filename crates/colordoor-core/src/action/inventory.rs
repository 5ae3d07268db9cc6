//! Inventory listing.

use crate::action::ActionResult;
use crate::gameloop::GameState;

/// Show what the player is carrying. Read-only.
pub fn list_inventory(state: &mut GameState) -> ActionResult {
    if state.player.inventory.is_empty() {
        state.message("You’re not carrying any keys.");
        return ActionResult::NoOp;
    }

    let lines: Vec<String> = state
        .player
        .inventory
        .iter()
        .map(|key| format!("- {} key", key.color.display_name()))
        .collect();

    state.message("\nYou have the following keys:");
    for line in lines {
        state.message(line);
    }
    ActionResult::NoOp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DoorColor;
    use crate::world::{Key, WorldBuilder};

    fn empty_state() -> GameState {
        let mut builder = WorldBuilder::new();
        let hall = builder.room("Hall", "Bare.");
        GameState::with_world(builder.build().unwrap(), hall)
    }

    #[test]
    fn test_empty_pockets() {
        let mut state = empty_state();

        let result = list_inventory(&mut state);
        assert!(matches!(result, ActionResult::NoOp));
        assert_eq!(state.take_messages(), vec!["You’re not carrying any keys."]);
    }

    #[test]
    fn test_lists_keys_in_pickup_order() {
        let mut state = empty_state();
        let here = state.player.current_room;
        state.player.inventory.push(Key::new(DoorColor::Blue, here, "first"));
        state.player.inventory.push(Key::new(DoorColor::Orange, here, "second"));

        list_inventory(&mut state);
        assert_eq!(
            state.take_messages(),
            vec!["\nYou have the following keys:", "- Blue key", "- Orange key"]
        );
    }
}
