//! Bundled card catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is the read-only data source for the collection browser. It is
//! built once at compile time and provided to the component tree through
//! context, so views only ever borrow `&'static CardRecord` values and never
//! own or mutate card data.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=100&width=100";

/// One collectible card.
///
/// Optional fields stay `None` when unknown so "zero" and "missing" remain
/// distinguishable in the detail dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct CardRecord {
    /// Stable identity key, unique across the catalog.
    pub id: u32,
    pub name: &'static str,
    /// Category label such as `"Fire/Flying"`. Displayed as-is, never split.
    pub kind: &'static str,
    pub hp: u32,
    pub image: &'static str,
    pub description: Option<&'static str>,
    /// Meters.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub abilities: Option<&'static [&'static str]>,
}

impl CardRecord {
    /// Abilities to list, empty when the record carries none.
    pub fn ability_list(&self) -> &'static [&'static str] {
        self.abilities.unwrap_or(&[])
    }
}

static BUNDLED_CARDS: [CardRecord; 6] = [
    CardRecord {
        id: 1,
        name: "Pikachu",
        kind: "Electric",
        hp: 60,
        image: PLACEHOLDER_IMAGE,
        description: Some("A mouse-like Pokémon that can generate electricity."),
        height: Some(0.4),
        weight: Some(6.0),
        abilities: Some(&["Static", "Lightning Rod"]),
    },
    CardRecord {
        id: 2,
        name: "Charizard",
        kind: "Fire/Flying",
        hp: 120,
        image: PLACEHOLDER_IMAGE,
        description: Some("A dragon-like Pokémon that spits fire hot enough to melt boulders."),
        height: Some(1.7),
        weight: Some(90.5),
        abilities: Some(&["Blaze", "Solar Power"]),
    },
    CardRecord {
        id: 3,
        name: "Bulbasaur",
        kind: "Grass/Poison",
        hp: 45,
        image: PLACEHOLDER_IMAGE,
        description: Some(
            "A strange seed was planted on its back at birth. The plant sprouts and grows with this Pokémon.",
        ),
        height: Some(0.7),
        weight: Some(6.9),
        abilities: Some(&["Overgrow", "Chlorophyll"]),
    },
    CardRecord {
        id: 4,
        name: "Squirtle",
        kind: "Water",
        hp: 44,
        image: PLACEHOLDER_IMAGE,
        description: Some("A turtle-like Pokémon that can squirt water from its mouth."),
        height: Some(0.5),
        weight: Some(9.0),
        abilities: Some(&["Torrent", "Rain Dish"]),
    },
    CardRecord {
        id: 5,
        name: "Mewtwo",
        kind: "Psychic",
        hp: 150,
        image: PLACEHOLDER_IMAGE,
        description: Some("A genetically engineered Pokémon with powerful psychic abilities."),
        height: Some(2.0),
        weight: Some(122.0),
        abilities: Some(&["Pressure", "Unnerve"]),
    },
    CardRecord {
        id: 6,
        name: "Gengar",
        kind: "Ghost/Poison",
        hp: 100,
        image: PLACEHOLDER_IMAGE,
        description: Some("A shadowy Pokémon that is said to be the animated soul of a deceased being."),
        height: Some(1.5),
        weight: Some(40.5),
        abilities: Some(&["Cursed Body"]),
    },
];

/// Read-only, ordered view over a `'static` set of cards.
///
/// Insertion order is the default display order.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    cards: &'static [CardRecord],
}

impl Catalog {
    /// The dataset compiled into the application.
    pub fn bundled() -> Self {
        Self { cards: &BUNDLED_CARDS }
    }

    /// Wrap an externally supplied card list.
    pub fn from_static(cards: &'static [CardRecord]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &'static [CardRecord] {
        self.cards
    }

    /// Look a card up by its identity key.
    pub fn get(&self, id: u32) -> Option<&'static CardRecord> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}
