//! Door and key colors.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The colors the world's doors and keys come in.
///
/// A color doubles as a key identity: a key opens exactly the locked doors
/// sharing its color. `Display` and `FromStr` both use the lowercase word;
/// listings use [`DoorColor::display_name`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DoorColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Black,
    White,
}

impl DoorColor {
    /// Capitalized form used in room and inventory listings.
    pub const fn display_name(&self) -> &'static str {
        match self {
            DoorColor::Red => "Red",
            DoorColor::Blue => "Blue",
            DoorColor::Green => "Green",
            DoorColor::Yellow => "Yellow",
            DoorColor::Purple => "Purple",
            DoorColor::Orange => "Orange",
            DoorColor::Cyan => "Cyan",
            DoorColor::Black => "Black",
            DoorColor::White => "White",
        }
    }
}
