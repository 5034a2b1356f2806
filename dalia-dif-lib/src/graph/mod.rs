//! Output graph for converted learning resources.

use std::io::Write;
use std::str::FromStr;

use oxrdf::graph::CanonicalizationAlgorithm;
use oxrdf::{Graph, Triple};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use serde::{Deserialize, Serialize};

use crate::error::ProcessorError;
use crate::namespace::PREFIXES;

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Turtle,
    NTriples,
    RdfXml,
}

impl OutputFormat {
    fn to_rdf_format(self) -> RdfFormat {
        match self {
            OutputFormat::Turtle => RdfFormat::Turtle,
            OutputFormat::NTriples => RdfFormat::NTriples,
            OutputFormat::RdfXml => RdfFormat::RdfXml,
        }
    }

    pub fn file_extension(self) -> &'static str {
        self.to_rdf_format().file_extension()
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "turtle" | "ttl" => Ok(OutputFormat::Turtle),
            "ntriples" | "nt" => Ok(OutputFormat::NTriples),
            "rdfxml" | "rdf" | "xml" => Ok(OutputFormat::RdfXml),
            _ => Err(ProcessorError::InvalidConfig(format!(
                "Invalid output format '{}'. Must be one of: turtle, ntriples, rdfxml",
                s
            ))),
        }
    }
}

/// A set of triples, deduplicated, with DALIA prefixes for serialization.
#[derive(Debug, Default, Clone)]
pub struct DifGraph {
    graph: Graph,
}

impl DifGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses Turtle into a graph.
    pub fn from_turtle(data: &str) -> Result<Self, ProcessorError> {
        let mut graph = Graph::new();
        for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(data.as_bytes()) {
            let quad = quad.map_err(|e| ProcessorError::Serialization(e.to_string()))?;
            graph.insert(&Triple::from(quad));
        }
        Ok(Self { graph })
    }

    pub fn insert(&mut self, triple: &Triple) -> bool {
        self.graph.insert(triple)
    }

    pub fn extend<'a>(&mut self, triples: impl IntoIterator<Item = &'a Triple>) {
        for triple in triples {
            self.insert(triple);
        }
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }

    /// Structural equality modulo blank node names.
    pub fn is_isomorphic(&self, other: &DifGraph) -> bool {
        let mut left = self.graph.clone();
        let mut right = other.graph.clone();
        left.canonicalize(CanonicalizationAlgorithm::Unstable);
        right.canonicalize(CanonicalizationAlgorithm::Unstable);
        left == right
    }

    pub fn write<W: Write>(&self, writer: W, format: OutputFormat) -> Result<W, ProcessorError> {
        let mut serializer = RdfSerializer::from_format(format.to_rdf_format());
        for (name, iri) in PREFIXES {
            serializer = serializer
                .with_prefix(name, iri)
                .map_err(|e| ProcessorError::Serialization(e.to_string()))?;
        }
        let mut serializer = serializer.for_writer(writer);
        for triple in self.graph.iter() {
            serializer.serialize_triple(triple)?;
        }
        Ok(serializer.finish()?)
    }

    pub fn to_string(&self, format: OutputFormat) -> Result<String, ProcessorError> {
        let buffer = self.write(Vec::new(), format)?;
        String::from_utf8(buffer)
            .map_err(|e| ProcessorError::Serialization(format!("Invalid UTF-8 in output: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal, NamedNode};

    #[test]
    fn test_insert_deduplicates() {
        let mut graph = DifGraph::new();
        let triple = Triple::new(
            NamedNode::new_unchecked("http://example.com/something"),
            NamedNode::new_unchecked("https://schema.org/version"),
            Literal::new_simple_literal("2.3"),
        );
        assert!(graph.insert(&triple));
        assert!(!graph.insert(&triple));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_isomorphism_ignores_blank_node_names() {
        let mut graph = DifGraph::new();
        graph.insert(&Triple::new(
            NamedNode::new_unchecked("http://example.com/something"),
            NamedNode::new_unchecked("https://schema.org/author"),
            BlankNode::new_unchecked("someone"),
        ));
        let expected = DifGraph::from_turtle(
            "<http://example.com/something> <https://schema.org/author> [] .",
        )
        .unwrap();
        assert!(graph.is_isomorphic(&expected));
    }

    #[test]
    fn test_turtle_output_uses_prefixes() {
        let graph = DifGraph::from_turtle(
            "<http://example.com/something> <https://schema.org/version> \"2.3\" .",
        )
        .unwrap();
        let turtle = graph.to_string(OutputFormat::Turtle).unwrap();
        assert!(turtle.contains("@prefix schema: <https://schema.org/>"));
        assert!(turtle.contains("schema:version \"2.3\""));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TTL".parse::<OutputFormat>().unwrap(), OutputFormat::Turtle);
        assert_eq!("nt".parse::<OutputFormat>().unwrap(), OutputFormat::NTriples);
        assert!("json".parse::<OutputFormat>().is_err());
    }
}
