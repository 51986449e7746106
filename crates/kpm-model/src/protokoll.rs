//! The exam protocol entity graph: Protokoll → Teile → Fragen.
//!
//! Wire field names match the established JSON exchange format of the
//! protocol archive (camelCase, German domain nouns), so exported
//! documents and saved drafts stay compatible with existing files.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single exam question inside Teil 1 or Teil 3.
///
/// `id` is assigned at creation and never changes. `tags` has set
/// semantics and always carries the question's own fach/fachgebiet/thema
/// whenever those are non-empty; the classification setters re-derive
/// that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frage {
    pub id: Uuid,
    pub fach: String,
    pub fachgebiet: String,
    pub thema: String,
    pub question: String,
    pub answer: String,
    pub ideal_answer: String,
    pub tags: BTreeSet<String>,
    /// Difficulty grade as stored ("leicht"/"mittel"/"schwer", empty =
    /// ungraded). Kept as raw text so invalid drafts stay representable
    /// for the validator.
    pub schwierigkeit: String,
    pub kommentar: String,
}

impl Frage {
    /// A fresh, empty question with a new identity.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            fach: String::new(),
            fachgebiet: String::new(),
            thema: String::new(),
            question: String::new(),
            answer: String::new(),
            ideal_answer: String::new(),
            tags: BTreeSet::new(),
            schwierigkeit: String::new(),
            kommentar: String::new(),
        }
    }

    /// Replace the Fach and re-derive tags.
    pub fn set_fach(&mut self, fach: impl Into<String>) {
        self.fach = fach.into();
        self.sync_tags();
    }

    /// Replace the Fachgebiet and re-derive tags.
    pub fn set_fachgebiet(&mut self, fachgebiet: impl Into<String>) {
        self.fachgebiet = fachgebiet.into();
        self.sync_tags();
    }

    /// Replace the Thema and re-derive tags.
    pub fn set_thema(&mut self, thema: impl Into<String>) {
        self.thema = thema.into();
        self.sync_tags();
    }

    /// Re-apply the derived-tag invariant: the current non-empty
    /// classification values are always members of `tags`.
    pub fn sync_tags(&mut self) {
        for value in [&self.fach, &self.fachgebiet, &self.thema] {
            if !value.is_empty() {
                self.tags.insert(value.clone());
            }
        }
    }
}

impl Default for Frage {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the three fixed content blocks of a protocol.
///
/// Teil 1 and Teil 3 carry questions; Teil 2 is content-only and has no
/// `questions` key at all in the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teil {
    pub id: Uuid,
    pub inhalt: String,
    /// Difficulty grade as stored (see [`Frage::schwierigkeit`]).
    pub schwierigkeit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Frage>>,
}

impl Teil {
    /// A question-bearing Teil, pre-seeded with one empty question.
    pub fn with_questions() -> Self {
        Self {
            id: Uuid::new_v4(),
            inhalt: String::new(),
            schwierigkeit: String::new(),
            questions: Some(vec![Frage::new()]),
        }
    }

    /// A content-only Teil (Teil 2).
    pub fn content_only() -> Self {
        Self {
            id: Uuid::new_v4(),
            inhalt: String::new(),
            schwierigkeit: String::new(),
            questions: None,
        }
    }

    /// The questions of this Teil, empty for a content-only Teil.
    pub fn fragen(&self) -> &[Frage] {
        self.questions.as_deref().unwrap_or_default()
    }

    /// Append a fresh question, carrying over the classification and tags
    /// of the last question so consecutive questions on the same topic
    /// need no re-selection.
    pub fn add_frage(&mut self) -> &mut Frage {
        let mut frage = Frage::new();
        let questions = self.questions.get_or_insert_with(Vec::new);
        if let Some(last) = questions.last() {
            frage.fach = last.fach.clone();
            frage.fachgebiet = last.fachgebiet.clone();
            frage.thema = last.thema.clone();
            frage.tags = last.tags.clone();
        }
        questions.push(frage);
        questions.last_mut().expect("question just pushed")
    }

    /// Remove the question at `index`, if present.
    pub fn remove_frage(&mut self, index: usize) -> Option<Frage> {
        let questions = self.questions.as_mut()?;
        if index < questions.len() {
            Some(questions.remove(index))
        } else {
            None
        }
    }

    /// Replace the question at `index` wholesale, preserving its identity.
    pub fn replace_frage(&mut self, index: usize, mut frage: Frage) -> bool {
        let Some(questions) = self.questions.as_mut() else {
            return false;
        };
        let Some(slot) = questions.get_mut(index) else {
            return false;
        };
        frage.id = slot.id;
        frage.sync_tags();
        *slot = frage;
        true
    }
}

/// The full exam-case document being assembled.
///
/// `id` is derived from jurisdiction, exam year and exam month plus the
/// sequence counter (see [`crate::ids`]); it is never user-entered and
/// stays empty until all three identity fields are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protokoll {
    pub version: String,
    pub id: String,
    /// Bundesland in which the exam took place.
    pub state: String,
    pub exam_year: String,
    pub exam_month: String,
    pub fach: String,
    pub fachgebiet: String,
    pub thema: String,
    pub kategorie: String,
    pub teil1: Teil,
    pub teil2: Teil,
    pub teil3: Teil,
    pub kommentar: String,
    pub schlagwoerter: String,
    /// Overall difficulty grade as stored (see [`Frage::schwierigkeit`]).
    pub schwierigkeit: String,
    pub pruefungskompetenz: String,
    pub verbunden_themen: String,
}

/// Document format version stamped on new protocols.
pub const PROTOKOLL_VERSION: &str = "1.0.0";

impl Protokoll {
    /// A fresh, empty protocol: new identities for all nested Teile and
    /// Fragen, every scalar field empty, `id` not yet derived.
    pub fn new() -> Self {
        Self {
            version: PROTOKOLL_VERSION.to_string(),
            id: String::new(),
            state: String::new(),
            exam_year: String::new(),
            exam_month: String::new(),
            fach: String::new(),
            fachgebiet: String::new(),
            thema: String::new(),
            kategorie: String::new(),
            teil1: Teil::with_questions(),
            teil2: Teil::content_only(),
            teil3: Teil::with_questions(),
            kommentar: String::new(),
            schlagwoerter: String::new(),
            schwierigkeit: String::new(),
            pruefungskompetenz: String::new(),
            verbunden_themen: String::new(),
        }
    }

    /// All questions of the two question-bearing Teile, Teil 1 first.
    pub fn alle_fragen(&self) -> impl Iterator<Item = &Frage> {
        self.teil1.fragen().iter().chain(self.teil3.fragen())
    }
}

impl Default for Protokoll {
    fn default() -> Self {
        Self::new()
    }
}
