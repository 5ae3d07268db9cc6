//! Player-visible verbs.
//!
//! Each verb is a free function over [`GameState`](crate::GameState) that
//! pushes its narration onto the message queue and reports what happened.
//! Misses are messages, never errors.

pub mod custom;
pub mod inventory;
pub mod movement;
pub mod pickup;
pub mod unlock;

/// Outcome of dispatching one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Game state changed.
    Success,
    /// Nothing changed; the player got guidance instead.
    NoOp,
    /// The player asked to leave.
    Quit,
}
