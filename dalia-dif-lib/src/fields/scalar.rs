//! Single-valued text columns.

use std::sync::LazyLock;

use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNode};
use regex::Regex;

use super::FieldOutput;
use crate::error::FieldError;
use crate::namespace::{dcterms, fabio, schema};

const MONTH: &str = "(?P<month>0[1-9]|1[0-2])";
const DAY: &str = "(?P<day>0[1-9]|[12][0-9]|3[01])";
const YEAR: &str = r"(?P<year>\d{4})";

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{YEAR}-{MONTH}-{DAY}$")).unwrap());
static ISO_YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{YEAR}-{MONTH}$")).unwrap());
static YEAR_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(&format!("^{YEAR}$")).unwrap());
static GERMAN_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{DAY}\.{MONTH}\.{YEAR}$")).unwrap());
static GERMAN_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{MONTH}\.{YEAR}$")).unwrap());

/// `Title` column. Text after the first colon becomes the subtitle.
pub fn title(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::EmptyField("Title"));
    }

    let (title, subtitle) = match value.split_once(':') {
        Some((title, subtitle)) if !subtitle.trim().is_empty() => {
            (title.trim(), Some(subtitle.trim()))
        }
        _ => (value, None),
    };
    if title.is_empty() {
        return Err(FieldError::EmptyField("Title"));
    }

    let mut output = FieldOutput::new();
    output.push(resource.clone(), dcterms::TITLE, Literal::new_simple_literal(title));
    if let Some(subtitle) = subtitle {
        output.push(
            resource.clone(),
            fabio::HAS_SUBTITLE,
            Literal::new_simple_literal(subtitle),
        );
    }
    Ok(output)
}

pub fn description(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    let value = raw.trim();
    if !value.is_empty() {
        output.push(resource.clone(), dcterms::DESCRIPTION, Literal::new_simple_literal(value));
    }
    Ok(output)
}

/// `Size` column. A bare number is taken as megabytes; a value that names
/// its own unit is kept as written.
pub fn size(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    let value = raw.trim();
    let mut tokens = value.split_whitespace();
    let Some(token) = tokens.next() else {
        return Ok(output);
    };
    token.parse::<f64>().map_err(|source| FieldError::InvalidSize {
        token: token.to_string(),
        source,
    })?;

    let size = match tokens.next() {
        Some(_) => value.to_string(),
        None => format!("{} MB", value),
    };
    output.push(resource.clone(), schema::FILE_SIZE, Literal::new_simple_literal(size));
    Ok(output)
}

pub fn version(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    let value = raw.trim();
    if !value.is_empty() {
        output.push(resource.clone(), schema::VERSION, Literal::new_simple_literal(value));
    }
    Ok(output)
}

/// Parses a publication date into a typed literal.
///
/// Day and month ranges are checked by shape only; `2023-02-30` is accepted.
fn parse_publication_date(value: &str) -> Option<Literal> {
    if ISO_DATE.is_match(value) {
        return Some(Literal::new_typed_literal(value, xsd::DATE));
    }
    if ISO_YEAR_MONTH.is_match(value) {
        return Some(Literal::new_typed_literal(value, xsd::G_YEAR_MONTH));
    }
    if YEAR_ONLY.is_match(value) {
        return Some(Literal::new_typed_literal(value, xsd::G_YEAR));
    }
    if let Some(c) = GERMAN_DATE.captures(value) {
        return Some(Literal::new_typed_literal(
            format!("{}-{}-{}", &c["year"], &c["month"], &c["day"]),
            xsd::DATE,
        ));
    }
    if let Some(c) = GERMAN_MONTH_YEAR.captures(value) {
        return Some(Literal::new_typed_literal(
            format!("{}-{}", &c["year"], &c["month"]),
            xsd::G_YEAR_MONTH,
        ));
    }
    None
}

pub fn publication_date(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    let value = raw.trim();
    if value.is_empty() {
        return Ok(output);
    }
    let date = parse_publication_date(value)
        .ok_or_else(|| FieldError::InvalidPublicationDate(value.to_string()))?;
    output.push(resource.clone(), schema::DATE_PUBLISHED, date);
    Ok(output)
}
