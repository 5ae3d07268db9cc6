//! Console frontend for the Color Door Adventure.

pub mod app;
pub mod input;

pub use app::App;
pub use input::{LineEditor, ReadResult, RustylineEditor};
