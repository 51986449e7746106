//! Tests for the JSON and Markdown projections.

use kpm_model::Protokoll;
use kpm_render::{to_canonical_json, to_markdown};

fn beispiel_protokoll() -> Protokoll {
    let mut protokoll = Protokoll::new();
    protokoll.id = "BA202402001".to_string();
    protokoll.state = "Bayern".to_string();
    protokoll.exam_year = "2024".to_string();
    protokoll.exam_month = "2".to_string();
    protokoll.fach = "Innere Medizin".to_string();
    protokoll.fachgebiet = "Kardiologie".to_string();
    protokoll.thema = "Herzinsuffizienz".to_string();
    protokoll.kategorie = "Mündliche Prüfung".to_string();
    protokoll.teil1.inhalt = "Patient mit Belastungsdyspnoe.".to_string();
    {
        let frage = &mut protokoll.teil1.questions.as_mut().unwrap()[0];
        frage.question = "Welche Leitsymptome erwarten Sie?".to_string();
        frage.answer = "Dyspnoe und Ödeme.".to_string();
        frage.set_fach("Innere Medizin".to_string());
    }
    protokoll
}

#[test]
fn canonical_json_round_trips_and_is_stable() {
    let protokoll = beispiel_protokoll();
    let json = to_canonical_json(&protokoll).unwrap();
    let wieder: Protokoll = serde_json::from_str(&json).unwrap();
    assert_eq!(wieder, protokoll);
    assert_eq!(to_canonical_json(&wieder).unwrap(), json);
}

#[test]
fn canonical_json_uses_the_wire_field_names() {
    let json = to_canonical_json(&beispiel_protokoll()).unwrap();
    assert!(json.contains("\"examYear\": \"2024\""));
    assert!(json.contains("\"examMonth\": \"2\""));
    assert!(json.contains("\"verbundenThemen\""));
    assert!(!json.contains("exam_year"));
}

#[test]
fn markdown_renders_sections_in_order() {
    let markdown = to_markdown(&beispiel_protokoll());
    let sections = [
        "# Prüfungsprotokoll",
        "## Fachliche Einordnung",
        "## Teil 1: Anamnese und körperliche Untersuchung",
        "## Teil 2: Dokumentation",
        "## Teil 3: Fallbeschreibung",
        "## Zusätzliche Informationen",
    ];
    let mut position = 0;
    for section in sections {
        let found = markdown[position..]
            .find(section)
            .unwrap_or_else(|| panic!("missing section {section}"));
        position += found + section.len();
    }
    assert!(markdown.contains("**ID:** BA202402001"));
    assert!(markdown.contains("#### Frage 1"));
    assert!(markdown.contains("**Frage:** Welche Leitsymptome erwarten Sie?"));
    assert!(markdown.contains("**Tags:** Innere Medizin"));
}

#[test]
fn empty_fields_render_as_placeholders() {
    let markdown = to_markdown(&Protokoll::new());
    assert!(markdown.contains("**ID:** (Noch nicht generiert)"));
    assert!(markdown.contains("**Bundesland:** (Nicht ausgewählt)"));
    assert!(markdown.contains("**Frage:** (Keine Frage)"));
    assert!(markdown.contains("**Antwort:** (Keine Antwort)"));
    assert!(markdown.contains("**Ideale Antwort:** (Keine ideale Antwort)"));
    assert!(markdown.contains("**Tags:** (Keine Tags)"));
    assert!(markdown.contains("**Schlagwörter:** (Keine Schlagwörter)"));
    assert!(markdown.contains("**Verbundene Themen:** (Keine verbundenen Themen)"));
    // Empty comments disappear instead of rendering placeholders.
    assert!(!markdown.contains("**Allgemeiner Kommentar:**"));
}

#[test]
fn markdown_tolerates_missing_question_lists() {
    let mut protokoll = Protokoll::new();
    protokoll.teil1.questions = None;
    protokoll.teil3.questions = None;
    let markdown = to_markdown(&protokoll);
    assert!(!markdown.contains("### Fragen"));
    assert!(markdown.contains("## Teil 3: Fallbeschreibung"));
}

#[test]
fn rendering_does_not_mutate_the_protokoll() {
    let protokoll = beispiel_protokoll();
    let vorher = protokoll.clone();
    let _ = to_markdown(&protokoll);
    let _ = to_canonical_json(&protokoll).unwrap();
    assert_eq!(protokoll, vorher);
}
