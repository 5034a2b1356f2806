use std::sync::LazyLock;

use oxrdf::NamedNode;
use regex::Regex;

use super::{split_field, FieldOutput};
use crate::error::FieldError;
use crate::lookup::LookupTables;
use crate::namespace::{dcterms, schema, SPDX_LICENSE};

static SPDX_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.+-]+$").unwrap());

/// `License` column: an SPDX identifier or one of the special licenses.
pub fn license(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::EmptyField("License"));
    }

    let iri = match tables.special_license(value) {
        Some(iri) => iri.clone(),
        None if SPDX_ID.is_match(value) => {
            NamedNode::new_unchecked(format!("{}{}", SPDX_LICENSE, value))
        }
        None => return Err(FieldError::InvalidLicense(value.to_string())),
    };

    let mut output = FieldOutput::new();
    output.push(resource.clone(), dcterms::LICENSE, iri);
    Ok(output)
}

/// `Link` column: at least one absolute IRI.
pub fn links(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::EmptyField("Link"));
    }

    let mut output = FieldOutput::new();
    for link in split_field(raw, "link")? {
        let iri = NamedNode::new(link).map_err(|_| FieldError::InvalidLink(link.to_string()))?;
        output.push(resource.clone(), schema::URL, iri);
    }
    Ok(output)
}

/// `RelatedWork` column: `<relation>:<link>` items.
pub fn related_works(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for item in split_field(raw, "related work")? {
        let (relation, link) = match item.split_once(':') {
            Some((relation, link)) => (relation.trim(), link.trim()),
            None => (item, ""),
        };
        let predicate = tables
            .related_work(relation)
            .ok_or_else(|| FieldError::UnknownRelation(relation.to_string()))?;
        if link.is_empty() {
            return Err(FieldError::MissingRelatedLink(item.to_string()));
        }
        let object = NamedNode::new(link).map_err(|_| FieldError::InvalidLink(link.to_string()))?;
        output.push(resource.clone(), predicate.as_ref(), object);
    }
    Ok(output)
}
