//! Tests for the protocol model, identifier and filename derivation.

use std::convert::Infallible;

use kpm_model::{Frage, Protokoll, SequenceSource, export_filename, format_protokoll_id};

/// In-memory counter with the same return/store split as the persisted
/// one: hands out the current value, stores current + 1.
struct MemCounter(u32);

impl SequenceSource for MemCounter {
    type Error = Infallible;

    fn next_sequence(&mut self) -> Result<u32, Infallible> {
        let n = self.0;
        self.0 = n + 1;
        Ok(n)
    }
}

#[test]
fn new_protokoll_starts_empty_with_fresh_identities() {
    let protokoll = Protokoll::new();
    assert_eq!(protokoll.version, "1.0.0");
    assert!(protokoll.id.is_empty());
    assert!(protokoll.state.is_empty());
    assert_eq!(protokoll.teil1.fragen().len(), 1);
    assert!(protokoll.teil2.questions.is_none());
    assert_eq!(protokoll.teil3.fragen().len(), 1);
    assert_ne!(protokoll.teil1.id, protokoll.teil3.id);

    let other = Protokoll::new();
    assert_ne!(protokoll.teil1.id, other.teil1.id);
    assert_ne!(
        protokoll.teil1.fragen()[0].id,
        other.teil1.fragen()[0].id
    );
}

#[test]
fn classification_setters_derive_tags() {
    let mut frage = Frage::new();
    frage.set_fach("Innere Medizin");
    frage.set_fachgebiet("Kardiologie");
    frage.set_thema("Herzinsuffizienz");

    assert!(frage.tags.contains("Innere Medizin"));
    assert!(frage.tags.contains("Kardiologie"));
    assert!(frage.tags.contains("Herzinsuffizienz"));

    // Re-setting the same value must not duplicate (set semantics).
    frage.set_thema("Herzinsuffizienz");
    assert_eq!(frage.tags.len(), 3);
}

#[test]
fn replace_frage_keeps_identity_and_tags() {
    let mut protokoll = Protokoll::new();
    let original_id = protokoll.teil1.fragen()[0].id;

    let mut replacement = Frage::new();
    replacement.fach = "Chirurgie".to_string();
    replacement.question = "Wie wird eine Appendizitis versorgt?".to_string();

    assert!(protokoll.teil1.replace_frage(0, replacement));
    let frage = &protokoll.teil1.fragen()[0];
    assert_eq!(frage.id, original_id);
    assert!(frage.tags.contains("Chirurgie"));

    // Out of range and content-only Teile reject the replacement.
    assert!(!protokoll.teil1.replace_frage(5, Frage::new()));
    assert!(!protokoll.teil2.replace_frage(0, Frage::new()));
}

#[test]
fn add_frage_carries_over_classification() {
    let mut protokoll = Protokoll::new();
    {
        let first = &mut protokoll.teil1.questions.as_mut().unwrap()[0];
        first.set_fach("Innere Medizin");
        first.set_fachgebiet("Pneumologie");
    }
    protokoll.teil1.add_frage();

    let fragen = protokoll.teil1.fragen();
    assert_eq!(fragen.len(), 2);
    assert_eq!(fragen[1].fach, "Innere Medizin");
    assert_eq!(fragen[1].fachgebiet, "Pneumologie");
    assert!(fragen[1].question.is_empty());
    assert_ne!(fragen[0].id, fragen[1].id);
}

#[test]
fn refresh_id_is_a_noop_while_identity_fields_are_incomplete() {
    let mut counter = MemCounter(1);
    let mut protokoll = Protokoll::new();
    protokoll.state = "Bayern".to_string();
    protokoll.exam_year = "2024".to_string();
    // exam_month still empty

    protokoll.id = "BA202401007".to_string();
    protokoll.refresh_id(&mut counter).unwrap();

    // Identifier untouched, no tick consumed.
    assert_eq!(protokoll.id, "BA202401007");
    assert_eq!(counter.0, 1);
}

#[test]
fn first_identifier_uses_sequence_one() {
    let mut counter = MemCounter(1);
    let mut protokoll = Protokoll::new();
    protokoll.state = "Bayern".to_string();
    protokoll.exam_year = "2024".to_string();
    protokoll.exam_month = "2".to_string();

    protokoll.refresh_id(&mut counter).unwrap();
    assert_eq!(protokoll.id, "BA202402001");
    assert_eq!(protokoll.sequence_from_id(), Some(1));
    // Counter already reflects "next available".
    assert_eq!(counter.0, 2);
}

#[test]
fn every_change_event_consumes_a_tick_even_when_redundant() {
    let mut counter = MemCounter(1);
    let mut protokoll = Protokoll::new();
    protokoll.state = "Hessen".to_string();
    protokoll.exam_year = "2025".to_string();
    protokoll.exam_month = "11".to_string();

    let mut ids = Vec::new();
    for _ in 0..3 {
        // Re-selecting the same month still counts as a change event.
        protokoll.exam_month = "11".to_string();
        protokoll.refresh_id(&mut counter).unwrap();
        ids.push(protokoll.id.clone());
    }

    assert_eq!(ids, ["HE202511001", "HE202511002", "HE202511003"]);
    assert_eq!(counter.0, 4);
}

#[test]
fn sequence_from_id_degrades_to_none_on_hand_edited_identifiers() {
    let mut protokoll = Protokoll::new();
    for id in ["", "1", "ÄÖÜ12", "BA2024020ab", "BA20240201ä"] {
        protokoll.id = id.to_string();
        assert_eq!(protokoll.sequence_from_id(), None, "id {id:?}");
    }

    protokoll.id = "BA202402001".to_string();
    assert_eq!(protokoll.sequence_from_id(), Some(1));
}

#[test]
fn month_and_sequence_are_zero_padded() {
    assert_eq!(format_protokoll_id("Bremen", "2023", "9", 42), "BR202309042");
    assert_eq!(
        format_protokoll_id("Nordrhein-Westfalen", "2024", "12", 7),
        "NO202412007"
    );
}

#[test]
fn export_filename_matches_the_archive_convention() {
    let mut protokoll = Protokoll::new();
    protokoll.state = "Nordrhein-Westfalen".to_string();
    protokoll.exam_year = "2024".to_string();
    protokoll.exam_month = "2".to_string();
    protokoll.teil1.questions.as_mut().unwrap()[0].set_fach("Innere Medizin");
    protokoll.teil3.questions.as_mut().unwrap()[0].set_fach("Chirurgie");

    assert_eq!(
        export_filename(&protokoll, 1),
        "KPM_NO_2024_02_IM-CH_001_v100"
    );
}

#[test]
fn export_filename_caps_and_deduplicates_faecher() {
    let mut protokoll = Protokoll::new();
    protokoll.state = "Bayern".to_string();
    protokoll.exam_year = "2024".to_string();
    protokoll.exam_month = "7".to_string();

    let teil1 = protokoll.teil1.questions.as_mut().unwrap();
    teil1[0].set_fach("Innere Medizin");
    for fach in ["Innere Medizin", "Neurologie", "Urologie", "Chirurgie"] {
        protokoll.teil1.add_frage().set_fach(fach);
    }

    // Duplicate collapsed, fourth distinct Fach dropped.
    assert_eq!(
        export_filename(&protokoll, 12),
        "KPM_BA_2024_07_IM-NE-UR_012_v100"
    );
}

#[test]
fn wire_format_round_trips_and_teil2_has_no_questions_key() {
    let mut protokoll = Protokoll::new();
    protokoll.state = "Berlin".to_string();
    protokoll.exam_year = "2024".to_string();
    protokoll.schlagwoerter = "EKG, Notfall".to_string();
    protokoll.verbunden_themen = "Herzinsuffizienz".to_string();
    protokoll.teil1.questions.as_mut().unwrap()[0].set_fach("Innere Medizin");

    let json = serde_json::to_string_pretty(&protokoll).unwrap();
    assert!(json.contains("\"examYear\""));
    assert!(json.contains("\"verbundenThemen\""));
    assert!(json.contains("\"idealAnswer\""));

    let teil2 = serde_json::to_value(&protokoll.teil2).unwrap();
    assert!(teil2.get("questions").is_none());

    let round: Protokoll = serde_json::from_str(&json).unwrap();
    assert_eq!(round, protokoll);
}
