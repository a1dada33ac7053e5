//! The classroom species cards

use crate::core::types::{Species, TrophicLevel};

/// One species card a student can place in a food web
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub glyph: &'static str,
    pub level: TrophicLevel,
}

impl CatalogEntry {
    pub fn is_producer(&self) -> bool {
        self.level == TrophicLevel::Producer
    }

    pub fn species(&self) -> Species {
        Species::from(self.name)
    }

    /// Card text, e.g. `🌳 grass (producer)`
    pub fn card_label(&self) -> String {
        if self.is_producer() {
            format!("{} {} (producer)", self.glyph, self.name)
        } else {
            format!("{} {}", self.glyph, self.name)
        }
    }
}

/// All cards in the order they are offered
pub static CATALOG: [CatalogEntry; 10] = [
    CatalogEntry { name: "grass", glyph: "🌳", level: TrophicLevel::Producer },
    CatalogEntry { name: "acorn", glyph: "🌰", level: TrophicLevel::Producer },
    CatalogEntry { name: "caterpillar", glyph: "🐛", level: TrophicLevel::Primary },
    CatalogEntry { name: "rabbit", glyph: "🐇", level: TrophicLevel::Primary },
    CatalogEntry { name: "squirrel", glyph: "🐿️", level: TrophicLevel::Primary },
    CatalogEntry { name: "frog", glyph: "🐸", level: TrophicLevel::Secondary },
    CatalogEntry { name: "bulbul", glyph: "🐦", level: TrophicLevel::Secondary },
    CatalogEntry { name: "snake", glyph: "🐍", level: TrophicLevel::Tertiary },
    CatalogEntry { name: "weasel", glyph: "🦦", level: TrophicLevel::Tertiary },
    CatalogEntry { name: "hawk", glyph: "🦅", level: TrophicLevel::Apex },
];

/// Find a card by name, ignoring case and surrounding whitespace
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    let name = name.trim();
    CATALOG.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Glyph for a species, `?` when it has no card
pub fn glyph_of(species: &Species) -> &'static str {
    lookup(species.as_str()).map(|e| e.glyph).unwrap_or("?")
}

/// `glyph name` label used by renderers
pub fn label_of(species: &Species) -> String {
    format!("{} {}", glyph_of(species), species)
}

pub fn is_producer(species: &Species) -> bool {
    lookup(species.as_str()).is_some_and(|e| e.is_producer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("Rabbit").map(|e| e.glyph), Some("🐇"));
        assert_eq!(lookup("  hawk ").map(|e| e.level), Some(TrophicLevel::Apex));
        assert!(lookup("dragon").is_none());
    }

    #[test]
    fn test_card_labels() {
        assert_eq!(lookup("grass").unwrap().card_label(), "🌳 grass (producer)");
        assert_eq!(lookup("snake").unwrap().card_label(), "🐍 snake");
    }

    #[test]
    fn test_unknown_species_label() {
        assert_eq!(label_of(&Species::from("dragon")), "? dragon");
        assert!(!is_producer(&Species::from("dragon")));
        assert!(is_producer(&Species::from("acorn")));
    }

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
