//! Markdown projection of a protocol.
//!
//! A pure readable rendering of whatever the protocol holds right now.
//! Empty fields render as labelled placeholders rather than being
//! dropped, so an incomplete draft still produces a complete document.

use kpm_model::{Frage, Protokoll, Teil};

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Render the protocol as a human-readable Markdown document.
pub fn to_markdown(protokoll: &Protokoll) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push("# Prüfungsprotokoll".to_string());
    parts.push(format!(
        "**ID:** {}",
        or_placeholder(&protokoll.id, "(Noch nicht generiert)")
    ));
    parts.push(format!("**Version:** {}", protokoll.version));
    parts.push(format!(
        "**Bundesland:** {}",
        or_placeholder(&protokoll.state, "(Nicht ausgewählt)")
    ));
    parts.push(format!(
        "**Prüfungsjahr:** {}",
        or_placeholder(&protokoll.exam_year, "(Nicht ausgewählt)")
    ));
    parts.push(format!(
        "**Prüfungsmonat:** {}",
        or_placeholder(&protokoll.exam_month, "(Nicht ausgewählt)")
    ));
    parts.push(String::new());

    parts.push("## Fachliche Einordnung".to_string());
    parts.push(format!(
        "**Fach:** {}",
        or_placeholder(&protokoll.fach, "(Nicht ausgewählt)")
    ));
    parts.push(format!(
        "**Fachgebiet:** {}",
        or_placeholder(&protokoll.fachgebiet, "(Nicht ausgewählt)")
    ));
    parts.push(format!(
        "**Thema:** {}",
        or_placeholder(&protokoll.thema, "(Nicht ausgewählt)")
    ));
    parts.push(format!(
        "**Kategorie:** {}",
        or_placeholder(&protokoll.kategorie, "(Nicht ausgewählt)")
    ));
    parts.push(String::new());

    render_teil(
        &mut parts,
        "## Teil 1: Anamnese und körperliche Untersuchung",
        &protokoll.teil1,
    );

    parts.push("## Teil 2: Dokumentation".to_string());
    parts.push(format!(
        "**Schwierigkeit:** {}",
        or_placeholder(&protokoll.teil2.schwierigkeit, "(Nicht angegeben)")
    ));
    if !protokoll.teil2.inhalt.is_empty() {
        parts.push("### Inhalt".to_string());
        parts.push(protokoll.teil2.inhalt.clone());
    }
    parts.push(String::new());

    render_teil(&mut parts, "## Teil 3: Fallbeschreibung", &protokoll.teil3);

    parts.push("## Zusätzliche Informationen".to_string());
    parts.push(format!(
        "**Schwierigkeit (Gesamt):** {}",
        or_placeholder(&protokoll.schwierigkeit, "(Nicht angegeben)")
    ));
    parts.push(format!(
        "**Schlagwörter:** {}",
        or_placeholder(&protokoll.schlagwoerter, "(Keine Schlagwörter)")
    ));
    parts.push(format!(
        "**Prüfungskompetenz:** {}",
        or_placeholder(&protokoll.pruefungskompetenz, "(Nicht angegeben)")
    ));
    parts.push(format!(
        "**Verbundene Themen:** {}",
        or_placeholder(&protokoll.verbunden_themen, "(Keine verbundenen Themen)")
    ));
    if !protokoll.kommentar.is_empty() {
        parts.push(format!("**Allgemeiner Kommentar:** {}", protokoll.kommentar));
    }

    parts.join("\n")
}

fn render_teil(parts: &mut Vec<String>, heading: &str, teil: &Teil) {
    parts.push(heading.to_string());
    parts.push(format!(
        "**Schwierigkeit:** {}",
        or_placeholder(&teil.schwierigkeit, "(Nicht angegeben)")
    ));
    if !teil.inhalt.is_empty() {
        parts.push("### Inhalt".to_string());
        parts.push(teil.inhalt.clone());
    }
    let fragen = teil.fragen();
    if !fragen.is_empty() {
        parts.push("\n### Fragen".to_string());
        for (index, frage) in fragen.iter().enumerate() {
            render_frage(parts, index + 1, frage);
        }
    }
}

fn render_frage(parts: &mut Vec<String>, nummer: usize, frage: &Frage) {
    parts.push(format!("#### Frage {nummer}"));
    parts.push(format!(
        "**Frage:** {}",
        or_placeholder(&frage.question, "(Keine Frage)")
    ));
    parts.push(format!(
        "**Antwort:** {}",
        or_placeholder(&frage.answer, "(Keine Antwort)")
    ));
    parts.push(format!(
        "**Ideale Antwort:** {}",
        or_placeholder(&frage.ideal_answer, "(Keine ideale Antwort)")
    ));
    parts.push(format!(
        "**Schwierigkeit:** {}",
        or_placeholder(&frage.schwierigkeit, "(Nicht angegeben)")
    ));
    let tags = frage.tags.iter().cloned().collect::<Vec<_>>().join(", ");
    parts.push(format!(
        "**Tags:** {}",
        or_placeholder(&tags, "(Keine Tags)")
    ));
    if !frage.kommentar.is_empty() {
        parts.push(format!("**Kommentar:** {}", frage.kommentar));
    }
    parts.push(String::new());
}
