//! Static fixtures used across harnesses.

/// A small shoe-shop lexicon in the on-disk JSON shape.
pub const LEXICON_JSON: &str = r#"{
    "thesaurus": [
        ["sneaker", "trainer", "runner"],
        ["boot", "wellington"],
        ["red", "crimson", "scarlet"]
    ],
    "supplements": {
        "running": ["sport"],
        "wellington": ["rain"]
    },
    "corrections": {
        "snekaer": "sneaker",
        "bots": "boot"
    },
    "drop_list": ["the", "for", "a"]
}"#;

/// Catalog matching [`LEXICON_JSON`], in a fixed item order.
pub const CATALOG_JSON: &str = r#"{
    "trail-runner":  ["trainer", "sport", "trail"],
    "city-sneaker":  ["sneaker", "white", "leather"],
    "rain-boot":     ["boot", "rain", "rubber"],
    "party-heel":    ["heel", "crimson", "satin"],
    "house-slipper": ["slipper", "wool"]
}"#;

/// Words used to build larger synthetic catalogs.
pub const VOCABULARY: &[&str] = &[
    "red", "blue", "green", "boot", "sneaker", "sandal", "leather", "canvas", "rubber",
    "wool", "trail", "road", "city", "rain", "snow", "party", "office", "garden",
];
