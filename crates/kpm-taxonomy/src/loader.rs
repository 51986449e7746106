//! Vocabulary loading from embedded CSV data.

use std::collections::BTreeMap;
use std::io::Cursor;

use serde::Deserialize;

use crate::embedded;
use crate::error::{Result, TaxonomyError};
use crate::types::Taxonomie;

/// Row of `taxonomie.csv`. Fachgebiet and Thema may be blank; a blank
/// column means the parent level has no children on this row.
#[derive(Debug, Deserialize)]
struct TaxonomieCsvRow {
    #[serde(rename = "Fach")]
    fach: String,
    #[serde(rename = "Fachgebiet")]
    fachgebiet: String,
    #[serde(rename = "Thema")]
    thema: String,
}

/// Load the embedded vocabulary.
pub fn load() -> Result<Taxonomie> {
    load_from_str(embedded::TAXONOMIE_CSV, "taxonomie.csv")
}

/// Load a vocabulary from CSV string content.
///
/// Duplicate rows are collapsed; first occurrence fixes the order at each
/// level. Rows with a Thema but no Fachgebiet are rejected as malformed.
pub fn load_from_str(content: &str, file: &'static str) -> Result<Taxonomie> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(cursor);

    let mut faecher: Vec<String> = Vec::new();
    let mut fachgebiete: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut themen: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for result in reader.deserialize::<TaxonomieCsvRow>() {
        let row = result.map_err(|e| TaxonomyError::CsvParse {
            file,
            message: e.to_string(),
        })?;

        let fach = row.fach.trim();
        let fachgebiet = row.fachgebiet.trim();
        let thema = row.thema.trim();

        if fach.is_empty() {
            return Err(TaxonomyError::CsvParse {
                file,
                message: "row without Fach".to_string(),
            });
        }
        if fachgebiet.is_empty() && !thema.is_empty() {
            return Err(TaxonomyError::CsvParse {
                file,
                message: format!("Thema '{thema}' has no Fachgebiet"),
            });
        }

        push_unique(&mut faecher, fach);
        if !fachgebiet.is_empty() {
            push_unique(fachgebiete.entry(fach.to_string()).or_default(), fachgebiet);
        }
        if !thema.is_empty() {
            push_unique(themen.entry(fachgebiet.to_string()).or_default(), thema);
        }
    }

    Ok(Taxonomie::from_parts(faecher, fachgebiete, themen))
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
