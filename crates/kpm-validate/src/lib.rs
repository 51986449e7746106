//! Validation of exam protocols against the controlled vocabulary.
//!
//! [`validate`] evaluates every rule and collects every violation, with
//! no short-circuiting for data reasons. Referential rules
//! only fire when the parent field is present: an empty Fachgebiet is not
//! a violation by itself, an unreachable one degrades to the generic
//! referential message.

mod violation;

use kpm_model::{Protokoll, Teil};
use kpm_taxonomy::{Schwierigkeit, Taxonomie, is_bundesland, is_kategorie};

pub use violation::{TeilNummer, Violation};

/// Required top-level fields, checked first, in display order.
const PFLICHTFELDER: &[(&str, fn(&Protokoll) -> &str)] = &[
    ("Bundesland", |p| &p.state),
    ("Prüfungsjahr", |p| &p.exam_year),
    ("Prüfungsmonat", |p| &p.exam_month),
    ("Fach", |p| &p.fach),
];

/// Validate a protocol snapshot. An empty result means valid.
pub fn validate(protokoll: &Protokoll, taxonomie: &Taxonomie) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (feld, value) in PFLICHTFELDER {
        if value(protokoll).is_empty() {
            violations.push(Violation::PflichtfeldFehlt { feld });
        }
    }

    if !protokoll.state.is_empty() && !is_bundesland(&protokoll.state) {
        violations.push(Violation::UngueltigesBundesland);
    }
    if !protokoll.fach.is_empty() && !taxonomie.is_fach(&protokoll.fach) {
        violations.push(Violation::UngueltigesFach);
    }
    if !protokoll.fach.is_empty()
        && !protokoll.fachgebiet.is_empty()
        && !taxonomie.is_fachgebiet(&protokoll.fach, &protokoll.fachgebiet)
    {
        violations.push(Violation::UngueltigesFachgebiet);
    }
    if !protokoll.fachgebiet.is_empty()
        && !protokoll.thema.is_empty()
        && !taxonomie.is_thema(&protokoll.fachgebiet, &protokoll.thema)
    {
        violations.push(Violation::UngueltigesThema);
    }
    if !protokoll.kategorie.is_empty() && !is_kategorie(&protokoll.kategorie) {
        violations.push(Violation::UngueltigeKategorie);
    }

    check_fragen(&protokoll.teil1, 1, &mut violations);
    check_fragen(&protokoll.teil3, 3, &mut violations);

    violations
}

/// Validate for export: [`validate`] plus the readiness rule that Teil 1
/// and Teil 3 each carry at least one question.
pub fn validate_export(protokoll: &Protokoll, taxonomie: &Taxonomie) -> Vec<Violation> {
    let mut violations = validate(protokoll, taxonomie);
    for (teil, nummer) in [(&protokoll.teil1, 1), (&protokoll.teil3, 3)] {
        if teil.fragen().is_empty() {
            violations.push(Violation::TeilOhneFragen { teil: nummer });
        }
    }
    violations
}

fn check_fragen(teil: &Teil, nummer: TeilNummer, violations: &mut Vec<Violation>) {
    for (index, frage) in teil.fragen().iter().enumerate() {
        let frage_nummer = index + 1;
        if frage.question.is_empty() {
            violations.push(Violation::FrageOhneText {
                teil: nummer,
                nummer: frage_nummer,
            });
        }
        if frage.answer.is_empty() {
            violations.push(Violation::FrageOhneAntwort {
                teil: nummer,
                nummer: frage_nummer,
            });
        }
        if !frage.schwierigkeit.is_empty() && Schwierigkeit::parse(&frage.schwierigkeit).is_none()
        {
            violations.push(Violation::UngueltigeSchwierigkeit {
                teil: nummer,
                nummer: frage_nummer,
            });
        }
    }
}
