//! Game state and the command dispatcher.

use crate::action::{self, ActionResult};
use crate::command::Command;
use crate::house;
use crate::player::Player;
use crate::world::{Key, Room, RoomId, World, WorldError};

/// Everything the game owns: the room graph, the player, key bookkeeping,
/// and the outgoing message queue. One instance per process, created at
/// start and dropped at quit.
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: World,
    pub player: Player,
    /// Every key created at world-build time, in creation order.
    /// Bookkeeping only; the live keys sit in rooms and the inventory.
    pub keys: Vec<Key>,
    /// Messages produced since the frontend last drained them.
    pub messages: Vec<String>,
    /// Append-only transcript of every message ever pushed.
    pub message_history: Vec<String>,
    /// Commands dispatched so far.
    pub turns: u64,
}

impl GameState {
    /// The standard game: the six-room house with the player in the
    /// Kitchen.
    pub fn new() -> Result<Self, WorldError> {
        let house = house::build()?;
        Ok(Self::with_world(house.world, house.start))
    }

    /// Wrap an arbitrary world. The key ledger snapshots the keys sitting
    /// in rooms at this moment.
    pub fn with_world(world: World, start: RoomId) -> Self {
        let keys = world
            .rooms()
            .flat_map(|(_, room)| room.keys().iter().cloned())
            .collect();
        Self {
            world,
            player: Player::new(start),
            keys,
            messages: Vec::new(),
            message_history: Vec::new(),
            turns: 0,
        }
    }

    /// Queue a message for the frontend and append it to the transcript.
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.messages.push(msg.clone());
        self.message_history.push(msg);
    }

    /// Hand the pending messages to the frontend, leaving the queue empty.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn current_room(&self) -> &Room {
        self.world.room(self.player.current_room)
    }

    /// Description block for the room the player is standing in. Pure.
    pub fn describe_current_room(&self) -> Vec<String> {
        self.current_room().describe()
    }
}

/// What the frontend should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Keep reading input.
    Continue,
    /// The player quit; tear the session down.
    PlayerQuit,
}

/// Drives a [`GameState`] one command at a time.
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Dispatch one command.
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        let result = execute_command(&mut self.state, command);
        self.state.turns += 1;

        match result {
            ActionResult::Quit => GameLoopResult::PlayerQuit,
            ActionResult::Success | ActionResult::NoOp => GameLoopResult::Continue,
        }
    }
}

/// Fixed dispatch priority: built-ins, then the current room's custom
/// actions, then the whole word as a door color.
fn execute_command(state: &mut GameState, command: Command) -> ActionResult {
    match command {
        Command::Quit => {
            state.message("\nThanks for playing!");
            ActionResult::Quit
        }
        Command::TakeKey => action::pickup::take_keys(state),
        Command::UseKey(color_word) => action::unlock::use_key(state, &color_word),
        Command::MalformedUse => {
            state.message("Try 'use [color] key'.");
            ActionResult::NoOp
        }
        Command::Inventory => action::inventory::list_inventory(state),
        Command::Other(word) => match action::custom::try_room_action(state, &word) {
            Some(result) => result,
            None => action::movement::move_through_door(state, &word),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DoorColor;
    use crate::world::{ActionEffect, Door, WorldBuilder};

    fn tick_line(game: &mut GameLoop, line: &str) -> (GameLoopResult, Vec<String>) {
        let result = game.tick(Command::parse(line));
        (result, game.state_mut().take_messages())
    }

    #[test]
    fn test_quit_says_goodbye() {
        let mut game = GameLoop::new(GameState::new().unwrap());

        let (result, messages) = tick_line(&mut game, "quit");
        assert_eq!(result, GameLoopResult::PlayerQuit);
        assert_eq!(messages, vec!["\nThanks for playing!"]);
    }

    #[test]
    fn test_malformed_use_prints_the_hint() {
        let mut game = GameLoop::new(GameState::new().unwrap());

        let (result, messages) = tick_line(&mut game, "use key");
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(messages, vec!["Try 'use [color] key'."]);
    }

    #[test]
    fn test_unknown_word_reads_as_a_door_color() {
        let mut game = GameLoop::new(GameState::new().unwrap());

        let (result, messages) = tick_line(&mut game, "dance");
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(messages, vec!["There is no door of that color here."]);
    }

    #[test]
    fn test_room_action_shadows_a_door_of_the_same_name() {
        // Dispatch checks the room's actions before door colors, so an
        // action named "red" wins over the red door.
        let mut builder = WorldBuilder::new();
        let hall = builder.room("Hall", "Bare.");
        let cell = builder.room("Cell", "Sealed.");
        builder.door(hall, Door::new(DoorColor::Red, cell));
        builder.action(
            hall,
            "red",
            ActionEffect::ToggleLight {
                on: "the lamp glows red".to_string(),
                off: "the lamp goes dark".to_string(),
            },
        );
        let mut game = GameLoop::new(GameState::with_world(builder.build().unwrap(), hall));

        let (result, messages) = tick_line(&mut game, "red");
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(messages, vec!["the lamp glows red"]);
        assert_eq!(game.state().player.current_room, hall);
    }

    #[test]
    fn test_builtin_commands_shadow_room_actions_of_the_same_name() {
        // Built-ins dispatch before the room's action table, so actions
        // registered under their names can never fire.
        let mut builder = WorldBuilder::new();
        let hall = builder.room("Hall", "Bare.");
        for word in ["inventory", "quit"] {
            builder.action(
                hall,
                word,
                ActionEffect::ToggleLight {
                    on: "the lamp glows".to_string(),
                    off: "the lamp goes dark".to_string(),
                },
            );
        }
        let mut game = GameLoop::new(GameState::with_world(builder.build().unwrap(), hall));

        let (result, messages) = tick_line(&mut game, "inventory");
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(messages, vec!["You’re not carrying any keys."]);
        assert!(!game.state().current_room().state.light_on);

        let (result, messages) = tick_line(&mut game, "quit");
        assert_eq!(result, GameLoopResult::PlayerQuit);
        assert_eq!(messages, vec!["\nThanks for playing!"]);
        assert!(!game.state().current_room().state.light_on);
    }

    #[test]
    fn test_ticks_count_turns() {
        let mut game = GameLoop::new(GameState::new().unwrap());
        assert_eq!(game.state().turns, 0);

        tick_line(&mut game, "red");
        tick_line(&mut game, "inventory");
        assert_eq!(game.state().turns, 2);
    }

    #[test]
    fn test_message_history_keeps_everything() {
        let mut game = GameLoop::new(GameState::new().unwrap());

        tick_line(&mut game, "take key");
        tick_line(&mut game, "dance");
        assert!(game.state().messages.is_empty());
        assert_eq!(
            game.state().message_history,
            vec![
                "There are no keys here to take.",
                "There is no door of that color here.",
            ]
        );
    }

    #[test]
    fn test_ledger_snapshots_both_keys() {
        let state = GameState::new().unwrap();
        let colors: Vec<DoorColor> = state.keys.iter().map(|key| key.color).collect();
        assert_eq!(colors, vec![DoorColor::Blue, DoorColor::Orange]);
    }
}
