//! Validation violation types.
//!
//! Each variant carries only its needed data; `message()` renders the
//! user-facing German text. Violations are values collected by the
//! validator, never raised as errors.

use serde::{Deserialize, Serialize};

/// Number of the Teil a question-level violation belongs to (1 or 3).
pub type TeilNummer = u8;

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// A required top-level field is empty.
    PflichtfeldFehlt { feld: &'static str },
    /// The jurisdiction is not a known Bundesland.
    UngueltigesBundesland,
    /// The Fach is not in the vocabulary.
    UngueltigesFach,
    /// The Fachgebiet is not listed under the selected Fach.
    UngueltigesFachgebiet,
    /// The Thema is not listed under the selected Fachgebiet.
    UngueltigesThema,
    /// The Kategorie is not a known exam format.
    UngueltigeKategorie,
    /// A question has no question text.
    FrageOhneText { teil: TeilNummer, nummer: usize },
    /// A question has no answer.
    FrageOhneAntwort { teil: TeilNummer, nummer: usize },
    /// A question's difficulty is outside the three allowed grades.
    UngueltigeSchwierigkeit { teil: TeilNummer, nummer: usize },
    /// A question-bearing Teil has no questions (export readiness only).
    TeilOhneFragen { teil: TeilNummer },
}

impl Violation {
    /// The user-facing message, 1:1 displayable by callers.
    pub fn message(&self) -> String {
        match self {
            Self::PflichtfeldFehlt { feld } => format!("{feld} ist erforderlich."),
            Self::UngueltigesBundesland => {
                "Bitte wählen Sie ein gültiges Bundesland aus.".to_string()
            }
            Self::UngueltigesFach => "Bitte wählen Sie ein gültiges Fach aus.".to_string(),
            Self::UngueltigesFachgebiet => {
                "Bitte wählen Sie ein gültiges Fachgebiet für das ausgewählte Fach aus."
                    .to_string()
            }
            Self::UngueltigesThema => {
                "Bitte wählen Sie ein gültiges Thema für das ausgewählte Fachgebiet aus."
                    .to_string()
            }
            Self::UngueltigeKategorie => {
                "Bitte wählen Sie eine gültige Kategorie aus.".to_string()
            }
            Self::FrageOhneText { teil, nummer } => {
                format!("Frage {nummer} in Teil {teil}: Fragetext ist erforderlich")
            }
            Self::FrageOhneAntwort { teil, nummer } => {
                format!("Frage {nummer} in Teil {teil}: Antwort ist erforderlich")
            }
            Self::UngueltigeSchwierigkeit { teil, nummer } => {
                format!(
                    "Frage {nummer} in Teil {teil}: Bitte wählen Sie einen gültigen \
                     Schwierigkeitsgrad aus."
                )
            }
            Self::TeilOhneFragen { teil } => {
                format!("Teil {teil} muss mindestens eine Frage enthalten.")
            }
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
