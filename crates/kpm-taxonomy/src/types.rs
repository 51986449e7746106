//! Vocabulary query types and flat enumerations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The sixteen German Bundesländer, the only valid jurisdictions.
pub const BUNDESLAENDER: &[&str] = &[
    "Baden-Württemberg",
    "Bayern",
    "Berlin",
    "Brandenburg",
    "Bremen",
    "Hamburg",
    "Hessen",
    "Mecklenburg-Vorpommern",
    "Niedersachsen",
    "Nordrhein-Westfalen",
    "Rheinland-Pfalz",
    "Saarland",
    "Sachsen",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Thüringen",
];

/// Exam formats a protocol can describe.
pub const KATEGORIEN: &[&str] = &[
    "Mündliche Prüfung",
    "Schriftliche Prüfung",
    "OSCE",
    "Praktische Prüfung",
    "Fallbesprechung",
    "Differentialdiagnose",
];

/// Competencies an exam case can probe.
pub const PRUEFUNGSKOMPETENZEN: &[&str] = &[
    "Diagnostik",
    "Therapie",
    "Notfallmanagement",
    "Kommunikation",
    "Patientenführung",
    "Medizinische Expertise",
    "Wissenschaftliche Grundlagen",
];

/// Is `value` a known Bundesland?
pub fn is_bundesland(value: &str) -> bool {
    BUNDESLAENDER.contains(&value)
}

/// Is `value` a known Kategorie?
pub fn is_kategorie(value: &str) -> bool {
    KATEGORIEN.contains(&value)
}

/// The three-level controlled vocabulary: Fach → Fachgebiet → Thema.
///
/// All sequences preserve the curated source order. Lookups on unknown
/// keys yield empty results, never errors; not every Fach has Fachgebiete
/// defined yet, and not every Fachgebiet has Themen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Taxonomie {
    faecher: Vec<String>,
    fachgebiete: BTreeMap<String, Vec<String>>,
    themen: BTreeMap<String, Vec<String>>,
}

const NO_CHILDREN: &[String] = &[];

impl Taxonomie {
    pub(crate) fn from_parts(
        faecher: Vec<String>,
        fachgebiete: BTreeMap<String, Vec<String>>,
        themen: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            faecher,
            fachgebiete,
            themen,
        }
    }

    /// All Fächer, in curated order.
    pub fn faecher(&self) -> &[String] {
        &self.faecher
    }

    /// Fachgebiete of a Fach, in curated order. Empty when the Fach is
    /// unknown or has no Fachgebiete defined.
    pub fn fachgebiete(&self, fach: &str) -> &[String] {
        self.fachgebiete
            .get(fach)
            .map_or(NO_CHILDREN, Vec::as_slice)
    }

    /// Themen of a Fachgebiet, in curated order. Empty when the
    /// Fachgebiet is unknown or has no Themen defined.
    pub fn themen(&self, fachgebiet: &str) -> &[String] {
        self.themen
            .get(fachgebiet)
            .map_or(NO_CHILDREN, Vec::as_slice)
    }

    /// Is `fach` a member of the vocabulary?
    pub fn is_fach(&self, fach: &str) -> bool {
        self.faecher.iter().any(|f| f == fach)
    }

    /// Is `fachgebiet` a valid Fachgebiet under `fach`?
    pub fn is_fachgebiet(&self, fach: &str, fachgebiet: &str) -> bool {
        self.fachgebiete(fach).iter().any(|g| g == fachgebiet)
    }

    /// Is `fachgebiet` listed under any Fach? Distinguishes a member with
    /// no Themen from a name outside the vocabulary.
    pub fn contains_fachgebiet(&self, fachgebiet: &str) -> bool {
        self.fachgebiete
            .values()
            .any(|children| children.iter().any(|g| g == fachgebiet))
    }

    /// Is `thema` a valid Thema under `fachgebiet`?
    pub fn is_thema(&self, fachgebiet: &str, thema: &str) -> bool {
        self.themen(fachgebiet).iter().any(|t| t == thema)
    }
}
