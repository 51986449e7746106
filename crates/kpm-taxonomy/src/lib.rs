//! Controlled vocabulary for KP Medizin exam protocols.
//!
//! Protocols classify their content against a fixed three-level hierarchy
//! (Fach → Fachgebiet → Thema) plus flat enumerations (Bundesländer,
//! Kategorien, Schwierigkeitsgrade, Prüfungskompetenzen). The hierarchy is
//! embedded at compile time as CSV and loaded once with [`load`]; all
//! queries are pure membership lookups with no failure modes.

mod embedded;
mod enums;
mod error;
mod kuerzel;
mod loader;
mod types;

pub use enums::Schwierigkeit;
pub use error::{Result, TaxonomyError};
pub use kuerzel::{fach_kuerzel, fach_kuerzel_or_fallback};
pub use loader::{load, load_from_str};
pub use types::{
    BUNDESLAENDER, KATEGORIEN, PRUEFUNGSKOMPETENZEN, Taxonomie, is_bundesland, is_kategorie,
};
