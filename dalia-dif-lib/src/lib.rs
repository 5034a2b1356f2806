//! DALIA DIF v1.3 to RDF converter library
//!
//! This library converts curated DIF v1.3 CSV rows describing educational
//! resources into RDF triples (schema.org, Dublin Core, MoDalia and friends).

mod config;
mod diagnostics;
mod error;
pub mod fields;
mod graph;
pub mod lookup;
pub mod namespace;
mod processor;
pub mod row;

pub use config::template::CONFIG_TEMPLATE;
pub use config::DifConfig;
pub use diagnostics::{DiagnosticMessage, Diagnostics, Skip};
pub use error::{FieldError, ProcessorError, RowError};
pub use fields::FieldOutput;
pub use graph::{DifGraph, OutputFormat};
pub use lookup::{Community, LookupPaths, LookupTables};
pub use processor::{Processor, ProcessorBuilder, RunSummary};
pub use row::{parse_row, DifRow, LearningResource, RowParser};
