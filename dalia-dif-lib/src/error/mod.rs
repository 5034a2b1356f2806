use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid community registry: {0}")]
    InvalidCommunity(String),
    #[error("Missing columns in {source_name}: {columns:?}")]
    MissingColumns {
        source_name: String,
        columns: Vec<&'static str>,
    },
    #[error(transparent)]
    Row(#[from] RowError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A hard failure of a single field transformer.
///
/// Every variant carries the offending input so the curator can find it in
/// the spreadsheet.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("Empty {0} field")]
    EmptyField(&'static str),
    #[error("Empty {0}")]
    EmptyItem(&'static str),
    #[error("Invalid DALIA_ID \"{value}\": {source}")]
    InvalidUuid { value: String, source: uuid::Error },
    #[error("Invalid identifier in \"{entry}\": {identifier}")]
    InvalidIdentifier { entry: String, identifier: String },
    #[error("Could not match regex for {kind} \"{entry}\"")]
    MalformedAuthor { kind: &'static str, entry: String },
    #[error("Community was incorrectly encoded \"{0}\". Did you remember to include one of (S), (R), (SR), or (RS) at the end?")]
    MalformedCommunity(String),
    #[error("Invalid discipline \"{0}\". Disciplines must be taken from the Hochschulfaechersystematik")]
    InvalidDiscipline(String),
    #[error("Could not match regex for file format \"{0}\"")]
    MalformedFileFormat(String),
    #[error("Invalid language identifier \"{0}\". Please check Lexvo.")]
    InvalidLanguage(String),
    #[error("Unknown {vocabulary} \"{value}\"")]
    UnknownTerm {
        vocabulary: &'static str,
        value: String,
    },
    #[error("Invalid license identifier \"{0}\"")]
    InvalidLicense(String),
    #[error("Invalid link \"{0}\"")]
    InvalidLink(String),
    #[error("Unknown related work relation \"{0}\"")]
    UnknownRelation(String),
    #[error("Link missing in related work \"{0}\"")]
    MissingRelatedLink(String),
    #[error("Invalid publication date \"{0}\"")]
    InvalidPublicationDate(String),
    #[error("Invalid size \"{token}\": {source}")]
    InvalidSize {
        token: String,
        source: ParseFloatError,
    },
}

/// A field failure located in its source file.
#[derive(Debug, Error)]
#[error("[{source_name} line:{line}] {column}: {source}")]
pub struct RowError {
    pub source_name: String,
    pub line: usize,
    pub column: &'static str,
    #[source]
    pub source: FieldError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_display_names_line_and_column() {
        let err = RowError {
            source_name: "curation.csv".to_string(),
            line: 7,
            column: "Title",
            source: FieldError::EmptyField("Title"),
        };
        assert_eq!(
            err.to_string(),
            "[curation.csv line:7] Title: Empty Title field"
        );
    }

    #[test]
    fn test_size_error_keeps_parser_message() {
        let source = "3,14".parse::<f64>().unwrap_err();
        let err = FieldError::InvalidSize {
            token: "3,14".to_string(),
            source: source.clone(),
        };
        assert_eq!(
            err.to_string(),
            format!("Invalid size \"3,14\": {}", source)
        );
    }
}
