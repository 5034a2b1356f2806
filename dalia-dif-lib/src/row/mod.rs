//! One DIF v1.3 CSV row to the triples of one learning resource.

use std::collections::{BTreeMap, HashMap};

use oxrdf::vocab::rdf;
use oxrdf::{NamedNode, Triple};
use uuid::Uuid;

use crate::diagnostics::{Diagnostics, Skip};
use crate::error::{FieldError, RowError};
use crate::fields::{self, FieldOutput};
use crate::graph::DifGraph;
use crate::lookup::LookupTables;
use crate::namespace::{educor, DALIA_LEARNING_RESOURCE};

pub const DIF_HEADER_ID: &str = "DALIA_ID";
pub const DIF_HEADER_TITLE: &str = "Title";
pub const DIF_HEADER_AUTHORS: &str = "Authors";
pub const DIF_HEADER_LICENSE: &str = "License";
pub const DIF_HEADER_LINK: &str = "Link";
pub const DIF_HEADER_COMMUNITY: &str = "Community";
pub const DIF_HEADER_DESCRIPTION: &str = "Description";
pub const DIF_HEADER_DISCIPLINE: &str = "Discipline";
pub const DIF_HEADER_FILE_FORMAT: &str = "FileFormat";
pub const DIF_HEADER_KEYWORDS: &str = "Keywords";
pub const DIF_HEADER_LANGUAGE: &str = "Language";
pub const DIF_HEADER_LEARNING_RESOURCE_TYPE: &str = "LearningResourceType";
pub const DIF_HEADER_MEDIA_TYPE: &str = "MediaType";
pub const DIF_HEADER_PROFICIENCY_LEVEL: &str = "ProficiencyLevel";
pub const DIF_HEADER_PUBLICATION_DATE: &str = "PublicationDate";
pub const DIF_HEADER_TARGET_GROUP: &str = "TargetGroup";
pub const DIF_HEADER_RELATED_WORK: &str = "RelatedWork";
pub const DIF_HEADER_SIZE: &str = "Size";
pub const DIF_HEADER_VERSION: &str = "Version";
/// Optional NFDI4Culture identifier column, only read with
/// [`RowParser::with_n4c_links`].
pub const DIF_HEADER_N4C_ID: &str = "N4C_ID";

/// Columns every DIF v1.3 file must have.
pub const REQUIRED_COLUMNS: [&str; 19] = [
    DIF_HEADER_ID,
    DIF_HEADER_TITLE,
    DIF_HEADER_AUTHORS,
    DIF_HEADER_LICENSE,
    DIF_HEADER_LINK,
    DIF_HEADER_COMMUNITY,
    DIF_HEADER_DESCRIPTION,
    DIF_HEADER_DISCIPLINE,
    DIF_HEADER_FILE_FORMAT,
    DIF_HEADER_KEYWORDS,
    DIF_HEADER_LANGUAGE,
    DIF_HEADER_LEARNING_RESOURCE_TYPE,
    DIF_HEADER_MEDIA_TYPE,
    DIF_HEADER_PROFICIENCY_LEVEL,
    DIF_HEADER_PUBLICATION_DATE,
    DIF_HEADER_TARGET_GROUP,
    DIF_HEADER_RELATED_WORK,
    DIF_HEADER_SIZE,
    DIF_HEADER_VERSION,
];

/// A raw DIF row with its known columns pulled out.
///
/// Missing columns are empty strings. Anything not in [`REQUIRED_COLUMNS`]
/// ends up in `extra`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DifRow {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub license: String,
    pub link: String,
    pub community: String,
    pub description: String,
    pub discipline: String,
    pub file_format: String,
    pub keywords: String,
    pub language: String,
    pub learning_resource_type: String,
    pub media_type: String,
    pub proficiency_level: String,
    pub publication_date: String,
    pub target_group: String,
    pub related_work: String,
    pub size: String,
    pub version: String,
    pub extra: BTreeMap<String, String>,
}

fn take(raw: &mut HashMap<String, String>, column: &str) -> String {
    raw.remove(column).unwrap_or_default()
}

impl DifRow {
    pub fn from_raw(mut raw: HashMap<String, String>) -> Self {
        let mut row = Self {
            id: take(&mut raw, DIF_HEADER_ID),
            title: take(&mut raw, DIF_HEADER_TITLE),
            authors: take(&mut raw, DIF_HEADER_AUTHORS),
            license: take(&mut raw, DIF_HEADER_LICENSE),
            link: take(&mut raw, DIF_HEADER_LINK),
            community: take(&mut raw, DIF_HEADER_COMMUNITY),
            description: take(&mut raw, DIF_HEADER_DESCRIPTION),
            discipline: take(&mut raw, DIF_HEADER_DISCIPLINE),
            file_format: take(&mut raw, DIF_HEADER_FILE_FORMAT),
            keywords: take(&mut raw, DIF_HEADER_KEYWORDS),
            language: take(&mut raw, DIF_HEADER_LANGUAGE),
            learning_resource_type: take(&mut raw, DIF_HEADER_LEARNING_RESOURCE_TYPE),
            media_type: take(&mut raw, DIF_HEADER_MEDIA_TYPE),
            proficiency_level: take(&mut raw, DIF_HEADER_PROFICIENCY_LEVEL),
            publication_date: take(&mut raw, DIF_HEADER_PUBLICATION_DATE),
            target_group: take(&mut raw, DIF_HEADER_TARGET_GROUP),
            related_work: take(&mut raw, DIF_HEADER_RELATED_WORK),
            size: take(&mut raw, DIF_HEADER_SIZE),
            version: take(&mut raw, DIF_HEADER_VERSION),
            extra: BTreeMap::new(),
        };
        row.extra = raw.into_iter().collect();
        row
    }
}

impl<K, V> FromIterator<(K, V)> for DifRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_raw(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The triples of one converted row.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningResource {
    pub uuid: Uuid,
    pub iri: NamedNode,
    pub triples: Vec<Triple>,
}

pub fn learning_resource_iri(uuid: &Uuid) -> NamedNode {
    NamedNode::new_unchecked(format!("{}{}", DALIA_LEARNING_RESOURCE, uuid))
}

/// Runs the field transformers over rows.
#[derive(Debug, Clone, Copy)]
pub struct RowParser<'a> {
    tables: &'a LookupTables,
    n4c_links: bool,
}

impl<'a> RowParser<'a> {
    pub fn new(tables: &'a LookupTables) -> Self {
        Self {
            tables,
            n4c_links: false,
        }
    }

    /// Adds a non-empty `N4C_ID` cell to the resource's links.
    pub fn with_n4c_links(mut self, n4c_links: bool) -> Self {
        self.n4c_links = n4c_links;
        self
    }

    /// Converts a row. Returns `Ok(None)` when `DALIA_ID` is blank.
    ///
    /// The first failing field aborts the row. Skipped items and unprocessed
    /// columns only reach `diagnostics` once every field converted.
    pub fn parse(
        &self,
        row: &DifRow,
        line: usize,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<LearningResource>, RowError> {
        let id = row.id.trim();
        if id.is_empty() {
            tracing::debug!("Skipping line {} without {}", line, DIF_HEADER_ID);
            return Ok(None);
        }

        let source_name = diagnostics.source_name().to_string();
        let row_error = |column: &'static str, source: FieldError| RowError {
            source_name: source_name.clone(),
            line,
            column,
            source,
        };

        let uuid = Uuid::parse_str(id).map_err(|source| {
            row_error(
                DIF_HEADER_ID,
                FieldError::InvalidUuid {
                    value: id.to_string(),
                    source,
                },
            )
        })?;
        let iri = learning_resource_iri(&uuid);
        let tables = self.tables;

        let mut triples = vec![Triple::new(
            iri.clone(),
            rdf::TYPE.into_owned(),
            educor::EDUCATIONAL_RESOURCE.into_owned(),
        )];
        let mut skipped: Vec<Skip> = Vec::new();
        let mut collect = |column: &'static str,
                           result: Result<FieldOutput, FieldError>|
         -> Result<(), RowError> {
            let output = result.map_err(|source| row_error(column, source))?;
            skipped.extend(output.skipped);
            triples.extend(output.triples);
            Ok(())
        };
        let n4c_id = row
            .extra
            .get(DIF_HEADER_N4C_ID)
            .map(|value| value.trim())
            .filter(|value| self.n4c_links && !value.is_empty());

        collect(DIF_HEADER_AUTHORS, fields::authors(&iri, &row.authors))?;
        collect(DIF_HEADER_LICENSE, fields::license(&iri, &row.license, tables))?;
        collect(DIF_HEADER_LINK, fields::links(&iri, &row.link))?;
        if let Some(n4c_id) = n4c_id {
            collect(DIF_HEADER_N4C_ID, fields::links(&iri, n4c_id))?;
        }
        collect(DIF_HEADER_TITLE, fields::title(&iri, &row.title))?;
        collect(
            DIF_HEADER_COMMUNITY,
            fields::communities(&iri, &row.community, tables),
        )?;
        collect(DIF_HEADER_DESCRIPTION, fields::description(&iri, &row.description))?;
        collect(DIF_HEADER_DISCIPLINE, fields::disciplines(&iri, &row.discipline))?;
        collect(DIF_HEADER_FILE_FORMAT, fields::file_formats(&iri, &row.file_format))?;
        collect(DIF_HEADER_KEYWORDS, fields::keywords(&iri, &row.keywords))?;
        collect(
            DIF_HEADER_LANGUAGE,
            fields::languages(&iri, &row.language, tables),
        )?;
        collect(
            DIF_HEADER_LEARNING_RESOURCE_TYPE,
            fields::learning_resource_types(&iri, &row.learning_resource_type, tables),
        )?;
        collect(
            DIF_HEADER_MEDIA_TYPE,
            fields::media_types(&iri, &row.media_type, tables),
        )?;
        collect(
            DIF_HEADER_PROFICIENCY_LEVEL,
            fields::proficiency_levels(&iri, &row.proficiency_level, tables),
        )?;
        collect(
            DIF_HEADER_PUBLICATION_DATE,
            fields::publication_date(&iri, &row.publication_date),
        )?;
        collect(
            DIF_HEADER_TARGET_GROUP,
            fields::target_groups(&iri, &row.target_group, tables),
        )?;
        collect(
            DIF_HEADER_RELATED_WORK,
            fields::related_works(&iri, &row.related_work, tables),
        )?;
        collect(DIF_HEADER_SIZE, fields::size(&iri, &row.size))?;
        collect(DIF_HEADER_VERSION, fields::version(&iri, &row.version))?;

        for skip in skipped {
            diagnostics.record_skip(line, skip);
        }
        for (column, value) in &row.extra {
            if n4c_id.is_some() && column == DIF_HEADER_N4C_ID {
                continue;
            }
            if !value.trim().is_empty() {
                diagnostics.record_unprocessed_column(column);
            }
        }

        tracing::debug!("Line {}: {} triples for {}", line, triples.len(), iri);
        Ok(Some(LearningResource {
            uuid,
            iri,
            triples,
        }))
    }

    /// Converts a row and adds its triples to `graph`.
    ///
    /// The graph is only touched when the whole row converts.
    pub fn parse_into(
        &self,
        row: &DifRow,
        line: usize,
        diagnostics: &mut Diagnostics,
        graph: &mut DifGraph,
    ) -> Result<Option<Uuid>, RowError> {
        let Some(resource) = self.parse(row, line, diagnostics)? else {
            return Ok(None);
        };
        graph.extend(&resource.triples);
        Ok(Some(resource.uuid))
    }
}

/// Convenience wrapper for a single raw row.
pub fn parse_row(
    raw: HashMap<String, String>,
    line: usize,
    tables: &LookupTables,
    diagnostics: &mut Diagnostics,
) -> Result<Option<LearningResource>, RowError> {
    RowParser::new(tables).parse(&DifRow::from_raw(raw), line, diagnostics)
}
