//! Player commands and line parsing.

/// The commands one line of input can turn into.
///
/// Parsing is context free. A word that is not a built-in command comes
/// out as [`Command::Other`] and is resolved by the dispatcher against the
/// player's current room: a registered room action first, then a door
/// color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Pick up every key in the room ("take key").
    TakeKey,
    /// Unlock a door ("use <color> key"). Carries the color word as typed
    /// so misses can echo it back, whatever it was.
    UseKey(String),
    /// A "use ..." line that does not fit the three-word shape.
    MalformedUse,
    /// List carried keys.
    Inventory,
    /// Anything else: a room action word or a door color.
    Other(String),
}

/// The command summary the welcome banner prints.
pub const COMMAND_SUMMARY: &[&str] = &[
    "Commands: [color] (to move), 'take key', 'use [color] key', 'inventory', 'quit'",
    "Some rooms have unique actions — try typing them!",
];

impl Command {
    /// Parse one line of player input.
    ///
    /// Normalizes by trimming surrounding whitespace and lowercasing, then
    /// applies the fixed priority: exact built-ins, the `use ` prefix
    /// (which demands exactly three whitespace-separated words ending in
    /// "key"), and finally the whole normalized line as an uninterpreted
    /// word. Never fails.
    pub fn parse(input: &str) -> Command {
        let line = input.trim().to_lowercase();

        match line.as_str() {
            "quit" => Command::Quit,
            "take key" => Command::TakeKey,
            "inventory" => Command::Inventory,
            _ if line.starts_with("use ") => {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() == 3 && parts[2] == "key" {
                    Command::UseKey(parts[1].to_string())
                } else {
                    Command::MalformedUse
                }
            }
            _ => Command::Other(line),
        }
    }
}
