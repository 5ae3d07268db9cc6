//! colordoor-core: game logic for the Color Door Adventure.
//!
//! This crate contains all game rules with no I/O dependencies. Frontends
//! feed parsed [`Command`]s to a [`GameLoop`] and render the messages the
//! state queues up.
//!
//! The world is a fixed graph of rooms joined by one-way colored doors,
//! some locked; keys of the matching color unlock them, one room at a
//! time.

pub mod action;
pub mod color;
pub mod command;
pub mod gameloop;
pub mod house;
pub mod player;
pub mod world;


pub use color::DoorColor;
pub use command::Command;
pub use gameloop::{GameLoop, GameLoopResult, GameState};
