//! Fixed Fach abbreviations used in export filenames.

/// Abbreviation table for the known Fächer.
const FACH_KUERZEL: &[(&str, &str)] = &[
    ("Innere Medizin", "IM"),
    ("Chirurgie", "CH"),
    ("Allgemeinmedizin", "AM"),
    ("Orthopädie", "OR"),
    ("Neurologie", "NE"),
    ("Psychiatrie", "PS"),
    ("Gynäkologie", "GY"),
    ("Pädiatrie", "PD"),
    ("Urologie", "UR"),
    ("Dermatologie", "DE"),
    ("Augenheilkunde", "AU"),
    ("HNO", "HN"),
    ("Anästhesiologie", "AN"),
];

/// Look up the fixed two-letter abbreviation for a Fach.
pub fn fach_kuerzel(fach: &str) -> Option<&'static str> {
    FACH_KUERZEL
        .iter()
        .find(|(name, _)| *name == fach)
        .map(|(_, kuerzel)| *kuerzel)
}

/// Abbreviation with fallback: unknown Fächer abbreviate to their first
/// two characters, upper-cased.
pub fn fach_kuerzel_or_fallback(fach: &str) -> String {
    match fach_kuerzel(fach) {
        Some(kuerzel) => kuerzel.to_string(),
        None => fach.chars().take(2).collect::<String>().to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::{fach_kuerzel, fach_kuerzel_or_fallback};

    #[test]
    fn known_faecher_use_the_table() {
        assert_eq!(fach_kuerzel("Innere Medizin"), Some("IM"));
        assert_eq!(fach_kuerzel("HNO"), Some("HN"));
        assert_eq!(fach_kuerzel("Unbekannt"), None);
    }

    #[test]
    fn unknown_faecher_fall_back_to_first_two_chars() {
        assert_eq!(fach_kuerzel_or_fallback("Chirurgie"), "CH");
        assert_eq!(fach_kuerzel_or_fallback("Zahnmedizin"), "ZA");
        assert_eq!(fach_kuerzel_or_fallback("Ästhetik"), "ÄS");
    }
}
