use thiserror::Error;

/// Errors raised while loading the embedded vocabulary.
///
/// Lookups never fail; a malformed embedded CSV is a packaging defect,
/// not a user-data condition.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to parse {file}: {message}")]
    CsvParse { file: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, TaxonomyError>;
