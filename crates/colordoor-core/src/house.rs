//! The fixed world: six rooms off a kitchen, ten one-way colored doors,
//! two keys, and one pull-string light.

use crate::color::DoorColor;
use crate::world::{ActionEffect, Door, Key, RoomId, World, WorldBuilder, WorldError};

/// A freshly built world and where the player wakes up in it.
#[derive(Debug, Clone)]
pub struct House {
    pub world: World,
    pub start: RoomId,
}

/// Build the house. Identical on every call; nothing here is random.
pub fn build() -> Result<House, WorldError> {
    let mut b = WorldBuilder::new();

    let kitchen = b.room("Kitchen", "A bright kitchen with the smell of fresh bread.");
    let living_room = b.room("Living Room", "A cozy space with a roaring fireplace.");
    let study = b.room("Study", "A quiet study filled with dusty books.");
    let garden = b.room("Garden", "A lush garden buzzing with bees and sunlight.");
    let bedroom = b.room("Bedroom", "A dim room with clothes scattered about.");
    let closet = b.room("Bedroom Closet", "A walk-in closet with a single pull-string light.");

    b.door(kitchen, Door::new(DoorColor::Red, living_room));
    b.door(kitchen, Door::locked(DoorColor::Blue, study));
    b.door(living_room, Door::new(DoorColor::Green, kitchen));
    b.door(living_room, Door::new(DoorColor::Yellow, garden));
    b.door(study, Door::new(DoorColor::Purple, kitchen));
    b.door(garden, Door::locked(DoorColor::Orange, living_room));
    b.door(living_room, Door::new(DoorColor::Cyan, bedroom));
    b.door(bedroom, Door::new(DoorColor::Black, living_room));
    b.door(bedroom, Door::new(DoorColor::White, closet));
    b.door(closet, Door::new(DoorColor::White, living_room));

    b.key(
        living_room,
        Key::new(DoorColor::Blue, living_room, "engraved with a small 'S'."),
    );
    // An early draft colored this key cyan, which left the Garden with no
    // way out. Orange matches the locked garden door it opens.
    b.key(
        garden,
        Key::new(DoorColor::Orange, garden, "it sparkles faintly in the sunlight."),
    );

    b.action(
        closet,
        "pull string",
        ActionEffect::ToggleLight {
            on: "You pull the string — the light flickers on, revealing shelves of old clothes."
                .to_string(),
            off: "You pull the string again — the light clicks off, and the closet goes dark."
                .to_string(),
        },
    );

    let world = b.build()?;
    Ok(House {
        world,
        start: kitchen,
    })
}
