//! Columns whose values come from a fixed vocabulary.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use oxrdf::{Literal, NamedNode};
use regex::Regex;

use super::{split_field, FieldOutput};
use crate::diagnostics::Skip;
use crate::error::FieldError;
use crate::lookup::picklists::{LEGACY_MEDIA_TYPES, MEDIA_TYPE_EXCEPTIONS};
use crate::lookup::LookupTables;
use crate::namespace::{dcterms, fabio, modalia, schema, HCRT, HOCHSCHULFAECHERSYSTEMATIK, LEXVO_ISO639_3};

static FILE_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.?[^\s.]\S*$").unwrap());

pub fn disciplines(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for discipline in split_field(raw, "discipline")? {
        let invalid = || FieldError::InvalidDiscipline(discipline.to_string());
        match discipline.strip_prefix(HOCHSCHULFAECHERSYSTEMATIK) {
            Some(code) if !code.is_empty() => {}
            _ => return Err(invalid()),
        }
        let iri = NamedNode::new(discipline).map_err(|_| invalid())?;
        output.push(resource.clone(), fabio::HAS_DISCIPLINE, iri);
    }
    Ok(output)
}

/// File extensions, upper-cased and without their leading dot.
pub fn file_formats(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let mut formats = BTreeSet::new();
    for format in split_field(raw, "file format")? {
        if !FILE_FORMAT.is_match(format) {
            return Err(FieldError::MalformedFileFormat(format.to_string()));
        }
        formats.insert(format.trim_start_matches('.').to_uppercase());
    }

    let mut output = FieldOutput::new();
    for format in formats {
        output.push(resource.clone(), dcterms::FORMAT, Literal::new_simple_literal(format));
    }
    Ok(output)
}

pub fn keywords(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    let keywords: BTreeSet<&str> = split_field(raw, "keyword")?.into_iter().collect();

    let mut output = FieldOutput::new();
    for keyword in keywords {
        output.push(resource.clone(), schema::KEYWORDS, Literal::new_simple_literal(keyword));
    }
    Ok(output)
}

/// ISO 639-1 or 639-3 codes, emitted as Lexvo IRIs.
pub fn languages(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for code in split_field(raw, "language")? {
        let iso639_3 = tables
            .language(code)
            .ok_or_else(|| FieldError::InvalidLanguage(code.to_string()))?;
        output.push(
            resource.clone(),
            dcterms::LANGUAGE,
            NamedNode::new_unchecked(format!("{}{}", LEXVO_ISO639_3, iso639_3)),
        );
    }
    Ok(output)
}

pub fn media_types(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for media_type in split_field(raw, "media type")? {
        if let Some(iri) = tables.media_type(media_type) {
            output.push(resource.clone(), modalia::HAS_MEDIA_TYPE, iri.clone());
        } else if !LEGACY_MEDIA_TYPES.contains(&media_type.to_lowercase().as_str()) {
            return Err(FieldError::UnknownTerm {
                vocabulary: "media type",
                value: media_type.to_string(),
            });
        }
    }
    Ok(output)
}

pub fn proficiency_levels(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for level in split_field(raw, "proficiency level")? {
        let iri = tables
            .proficiency_level(level)
            .ok_or_else(|| FieldError::UnknownTerm {
                vocabulary: "proficiency level",
                value: level.to_string(),
            })?;
        output.push(resource.clone(), modalia::REQUIRES_PROFICIENCY_LEVEL, iri.clone());
    }
    Ok(output)
}

pub fn target_groups(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for group in split_field(raw, "target group")? {
        let iri = tables
            .target_group(group)
            .ok_or_else(|| FieldError::UnknownTerm {
                vocabulary: "target group",
                value: group.to_string(),
            })?;
        output.push(resource.clone(), modalia::HAS_TARGET_GROUP, iri.clone());
    }
    Ok(output)
}

/// Learning resource types: HCRT IRIs or labels of the DALIA picklist.
///
/// Media type labels are ignored here since curators used to put them into
/// this column. Any other unknown token is skipped.
pub fn learning_resource_types(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for token in split_field(raw, "learning resource type")? {
        let token = token.to_lowercase();
        if MEDIA_TYPE_EXCEPTIONS.contains(&token.as_str()) {
            continue;
        }
        let iri = if token.starts_with(HCRT) {
            NamedNode::new(token.as_str()).ok()
        } else {
            tables.learning_resource_type(&token).cloned()
        };
        match iri {
            Some(iri) => output.push(resource.clone(), modalia::HAS_LEARNING_TYPE, iri),
            None => output.skip(Skip::UnknownLearningResourceType(token)),
        }
    }
    Ok(output)
}
