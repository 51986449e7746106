//! Protocol identifier and export filename derivation.
//!
//! The identifier encodes jurisdiction, exam date and a monotonically
//! advancing sequence number: `{STATE2}{year}{month2}{seq3}`, e.g.
//! `BA202402001`. The sequence comes from a process-wide counter behind
//! the [`SequenceSource`] seam; one tick is consumed per identity-field
//! change event, not per distinct document, so gaps in exported sequences
//! are expected.

use kpm_taxonomy::fach_kuerzel_or_fallback;

use crate::protokoll::Protokoll;

/// Source of sequence numbers for identifier generation.
///
/// Implementations must return the pre-increment value: `next_sequence`
/// hands out `n` while persisting `n + 1` as the next available value.
/// The first identifier ever generated therefore carries sequence 1.
pub trait SequenceSource {
    type Error;

    /// Consume one counter tick and return the consumed value.
    fn next_sequence(&mut self) -> Result<u32, Self::Error>;
}

/// Format an identifier from its components.
pub fn format_protokoll_id(state: &str, exam_year: &str, exam_month: &str, sequence: u32) -> String {
    format!(
        "{}{}{:0>2}{:03}",
        state_kuerzel(state),
        exam_year,
        exam_month,
        sequence
    )
}

/// First two characters of the Bundesland name, upper-cased.
fn state_kuerzel(state: &str) -> String {
    state.chars().take(2).collect::<String>().to_uppercase()
}

impl Protokoll {
    /// Recompute the derived identifier after an identity-field change.
    ///
    /// Callers invoke this once per committed change to state, exam year
    /// or exam month, including changes that re-select the current value.
    /// While any of the three is empty this is a no-op: the existing
    /// identifier is left untouched and no tick is consumed.
    pub fn refresh_id<S: SequenceSource>(&mut self, sequence: &mut S) -> Result<(), S::Error> {
        if self.state.is_empty() || self.exam_year.is_empty() || self.exam_month.is_empty() {
            return Ok(());
        }
        let n = sequence.next_sequence()?;
        self.id = format_protokoll_id(&self.state, &self.exam_year, &self.exam_month, n);
        Ok(())
    }

    /// The sequence number embedded in the current identifier, if one has
    /// been derived.
    pub fn sequence_from_id(&self) -> Option<u32> {
        let len = self.id.len();
        // Hand-edited identifiers may hold arbitrary text; an unusable
        // suffix degrades to None, never a slicing panic.
        if len < 3 || !self.id.is_char_boundary(len - 3) {
            return None;
        }
        let (_, suffix) = self.id.split_at(len - 3);
        suffix.parse().ok()
    }
}

/// Derive the export filename (without extension) for a protocol.
///
/// Format: `KPM_{state2}_{year}_{month2}_{fachKuerzel}_{seq3}_v{version}`,
/// e.g. `KPM_NO_2024_02_IM-CH_001_v100`. The Fach segment lists at most
/// three distinct non-empty question Fächer in encounter order (Teil 1
/// before Teil 3), abbreviated through the fixed table. The version
/// segment is the document version with the dots stripped.
pub fn export_filename(protokoll: &Protokoll, sequence: u32) -> String {
    let mut faecher: Vec<&str> = Vec::new();
    for frage in protokoll.alle_fragen() {
        if faecher.len() == 3 {
            break;
        }
        if !frage.fach.is_empty() && !faecher.contains(&frage.fach.as_str()) {
            faecher.push(&frage.fach);
        }
    }
    let fach_segment = faecher
        .iter()
        .map(|fach| fach_kuerzel_or_fallback(fach))
        .collect::<Vec<_>>()
        .join("-");

    format!(
        "KPM_{}_{}_{:0>2}_{}_{:03}_v{}",
        state_kuerzel(&protokoll.state),
        protokoll.exam_year,
        protokoll.exam_month,
        fach_segment,
        sequence,
        protokoll.version.replace('.', "")
    )
}
