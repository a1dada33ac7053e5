pub mod species;

pub use species::{glyph_of, is_producer, label_of, lookup, CatalogEntry, CATALOG};
