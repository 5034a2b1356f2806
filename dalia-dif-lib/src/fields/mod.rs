//! Field transformers: one raw DIF cell in, triples for the resource out.
//!
//! Every transformer returns `Result<FieldOutput, FieldError>`. An `Err`
//! aborts the whole row; [`Skip`]s inside the output are reported but the
//! row is kept.

mod authors;
mod communities;
mod controlled;
mod links;
mod scalar;

use oxrdf::{NamedNodeRef, NamedOrBlankNode, Term, Triple};

use crate::diagnostics::Skip;
use crate::error::FieldError;

pub use authors::{authors, is_valid_orcid, is_valid_ror, is_valid_wikidata, parse_author, Author};
pub use communities::{communities, parse_community, CommunityRelation};
pub use controlled::{
    disciplines, file_formats, keywords, languages, learning_resource_types, media_types,
    proficiency_levels, target_groups,
};
pub use links::{license, links, related_works};
pub use scalar::{description, publication_date, size, title, version};

/// Separator of multi-valued DIF cells.
pub const MULTI_VALUE_SEPARATOR: &str = " * ";

/// Triples produced by one transformer plus the items it skipped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldOutput {
    pub triples: Vec<Triple>,
    pub skipped: Vec<Skip>,
}

impl FieldOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        subject: impl Into<NamedOrBlankNode>,
        predicate: NamedNodeRef<'_>,
        object: impl Into<Term>,
    ) {
        self.triples
            .push(Triple::new(subject, predicate.into_owned(), object));
    }

    pub fn skip(&mut self, skip: Skip) {
        self.skipped.push(skip);
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty() && self.skipped.is_empty()
    }
}

/// Splits a multi-valued cell on `" * "`.
///
/// A blank cell yields no items. Any blank item fails with
/// `Empty <item_name>`.
pub fn split_field<'a>(raw: &'a str, item_name: &'static str) -> Result<Vec<&'a str>, FieldError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .map(|item| {
            if item.is_empty() {
                Err(FieldError::EmptyItem(item_name))
            } else {
                Ok(item)
            }
        })
        .collect()
}

/// Like [`split_field`] but drops blank items instead of failing.
pub fn split_lenient(raw: &str) -> Vec<&str> {
    raw.split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use oxrdf::NamedNode;

    use super::FieldOutput;
    use crate::graph::DifGraph;

    pub const RESOURCE: &str = "http://example.com/something";

    pub fn resource() -> NamedNode {
        NamedNode::new_unchecked(RESOURCE)
    }

    pub fn graph_of(output: &FieldOutput) -> DifGraph {
        let mut graph = DifGraph::new();
        graph.extend(&output.triples);
        graph
    }

    /// Asserts that the output is isomorphic to the given Turtle document.
    pub fn assert_same_graph(output: &FieldOutput, expected: &str) {
        let actual = graph_of(output);
        let expected = DifGraph::from_turtle(expected).unwrap();
        assert!(
            actual.is_isomorphic(&expected),
            "graphs differ:\n{}",
            actual
                .to_string(crate::graph::OutputFormat::NTriples)
                .unwrap()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_field_trims_items() {
        assert_eq!(
            split_field("  Lecture *  Tutorial  ", "learning resource type").unwrap(),
            vec!["Lecture", "Tutorial"]
        );
    }

    #[test]
    fn test_split_field_blank_is_empty() {
        assert!(split_field("   ", "keyword").unwrap().is_empty());
        assert!(split_field("", "keyword").unwrap().is_empty());
    }

    #[test]
    fn test_split_field_rejects_empty_items() {
        assert_eq!(
            split_field("FAIR *  * RDM", "keyword"),
            Err(FieldError::EmptyItem("keyword"))
        );
        assert_eq!(
            split_field("FAIR * ", "keyword"),
            Err(FieldError::EmptyItem("keyword"))
        );
    }

    #[test]
    fn test_split_field_requires_spaced_separator() {
        assert_eq!(split_field("C*C++", "keyword").unwrap(), vec!["C*C++"]);
    }

    #[test]
    fn test_split_lenient_drops_empty_items() {
        assert!(split_lenient("  *    *  ").is_empty());
        assert_eq!(split_lenient("a *  * b"), vec!["a", "b"]);
    }
}
