use super::*;

// =============================================================
// Bundled dataset
// =============================================================

#[test]
fn bundled_catalog_has_six_cards_in_display_order() {
    let catalog = Catalog::bundled();
    let names: Vec<&str> = catalog.cards().iter().map(|c| c.name).collect();
    assert_eq!(names, ["Pikachu", "Charizard", "Bulbasaur", "Squirtle", "Mewtwo", "Gengar"]);
    assert_eq!(catalog.len(), 6);
    assert!(!catalog.is_empty());
}

#[test]
fn bundled_catalog_ids_are_unique() {
    let catalog = Catalog::bundled();
    let mut ids: Vec<u32> = catalog.cards().iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
    assert!(ids.iter().all(|id| *id > 0));
}

#[test]
fn bundled_descriptions_are_clean_utf8() {
    for card in Catalog::bundled().cards() {
        let description = card.description.unwrap_or_default();
        assert!(!description.contains("Ã"), "garbled text in {}", card.name);
    }
    let pikachu = Catalog::bundled().get(1).unwrap();
    assert_eq!(pikachu.description, Some("A mouse-like Pokémon that can generate electricity."));
}

#[test]
fn multi_category_kind_is_kept_verbatim() {
    let charizard = Catalog::bundled().get(2).unwrap();
    assert_eq!(charizard.kind, "Fire/Flying");
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn get_returns_catalog_entry_by_identity() {
    let catalog = Catalog::bundled();
    let mewtwo = catalog.get(5).unwrap();
    assert_eq!(mewtwo.name, "Mewtwo");
    assert_eq!(mewtwo.hp, 150);
    assert!(std::ptr::eq(mewtwo, &catalog.cards()[4]));
}

#[test]
fn get_unknown_id_is_none() {
    assert!(Catalog::bundled().get(42).is_none());
    assert!(Catalog::bundled().get(0).is_none());
}

#[test]
fn default_is_bundled() {
    assert_eq!(Catalog::default().cards(), Catalog::bundled().cards());
}

#[test]
fn from_static_wraps_empty_list() {
    static NONE: [CardRecord; 0] = [];
    let catalog = Catalog::from_static(&NONE);
    assert!(catalog.is_empty());
    assert!(catalog.get(1).is_none());
}

// =============================================================
// Optional fields
// =============================================================

#[test]
fn ability_list_is_empty_when_absent() {
    let card = CardRecord {
        id: 99,
        name: "Missingno",
        kind: "Bird/Normal",
        hp: 33,
        image: "/placeholder.svg",
        description: None,
        height: None,
        weight: None,
        abilities: None,
    };
    assert!(card.ability_list().is_empty());
}

#[test]
fn ability_list_preserves_order() {
    let gengar = Catalog::bundled().get(6).unwrap();
    assert_eq!(gengar.ability_list(), ["Cursed Body"]);
    let pikachu = Catalog::bundled().get(1).unwrap();
    assert_eq!(pikachu.ability_list(), ["Static", "Lightning Rod"]);
}
