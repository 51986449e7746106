//! Embedded vocabulary data.
//!
//! The three-level Fach/Fachgebiet/Thema hierarchy is embedded at compile
//! time with `include_str!()` so the binary works offline with no data
//! paths to resolve. Flat enumerations live in [`crate::types`] as static
//! tables.

/// Fach/Fachgebiet/Thema hierarchy as CSV.
///
/// One row per Thema; a row with an empty `Thema` column declares a
/// childless Fachgebiet, a row with empty `Fachgebiet` and `Thema`
/// columns declares a childless Fach.
pub const TAXONOMIE_CSV: &str = include_str!("../data/taxonomie.csv");
