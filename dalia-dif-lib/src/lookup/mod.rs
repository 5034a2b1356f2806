//! Static label → IRI tables used while parsing rows.
//!
//! Tables are built once by [`LookupTables::load`] (or
//! [`LookupTables::builtin`]) and only read afterwards.

mod community;
mod languages;
pub mod picklists;

use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use oxrdf::NamedNode;
use uuid::Uuid;

use crate::error::ProcessorError;

pub use community::{communities_lookup, read_communities, Community};
pub use languages::LanguageTable;

const BUNDLED_COMMUNITIES: &str = include_str!("../../data/dalia_communities.csv");

/// Files that replace or extend the bundled reference data.
#[derive(Debug, Clone, Default)]
pub struct LookupPaths {
    /// Community registry CSV. The bundled registry is used when absent.
    pub communities: Option<PathBuf>,
    /// SIL `iso-639-3.tab` table extending the built-in language codes.
    pub languages: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LookupTables {
    communities: HashMap<String, Uuid>,
    media_types: HashMap<String, NamedNode>,
    proficiency_levels: HashMap<String, NamedNode>,
    target_groups: HashMap<String, NamedNode>,
    learning_resource_types: HashMap<String, NamedNode>,
    related_works: HashMap<String, NamedNode>,
    licenses: HashMap<String, NamedNode>,
    languages: LanguageTable,
}

fn picklist(entries: &[(&str, &str)]) -> HashMap<String, NamedNode> {
    entries
        .iter()
        .map(|(label, iri)| (label.to_lowercase(), NamedNode::new_unchecked(*iri)))
        .collect()
}

impl LookupTables {
    /// Tables with the bundled community registry.
    pub fn builtin() -> Result<Self, ProcessorError> {
        let communities = read_communities(BUNDLED_COMMUNITIES.as_bytes())?;
        Self::with_communities(&communities)
    }

    pub fn with_communities(communities: &[Community]) -> Result<Self, ProcessorError> {
        Ok(Self {
            communities: communities_lookup(communities),
            media_types: picklist(picklists::MEDIA_TYPES),
            proficiency_levels: picklist(picklists::PROFICIENCY_LEVELS),
            target_groups: picklist(picklists::TARGET_GROUPS),
            learning_resource_types: picklist(picklists::LEARNING_RESOURCE_TYPES),
            related_works: picklist(picklists::RELATED_WORKS),
            licenses: picklist(picklists::SPECIAL_LICENSES),
            languages: LanguageTable::builtin()?,
        })
    }

    pub fn load(paths: &LookupPaths) -> Result<Self, ProcessorError> {
        let mut tables = match &paths.communities {
            Some(path) => {
                tracing::info!("Loading community registry from {}", path.display());
                let communities = read_communities(File::open(path)?)?;
                tracing::info!("Loaded {} communities", communities.len());
                Self::with_communities(&communities)?
            }
            None => Self::builtin()?,
        };

        if let Some(path) = &paths.languages {
            tracing::info!("Loading language codes from {}", path.display());
            tables.languages.extend_from_tab(File::open(path)?)?;
        }

        Ok(tables)
    }

    pub fn community(&self, name: &str) -> Option<Uuid> {
        self.communities.get(&name.to_lowercase()).copied()
    }

    pub fn media_type(&self, label: &str) -> Option<&NamedNode> {
        self.media_types.get(&label.to_lowercase())
    }

    pub fn proficiency_level(&self, label: &str) -> Option<&NamedNode> {
        self.proficiency_levels.get(&label.to_lowercase())
    }

    pub fn target_group(&self, label: &str) -> Option<&NamedNode> {
        self.target_groups.get(&label.to_lowercase())
    }

    pub fn learning_resource_type(&self, label: &str) -> Option<&NamedNode> {
        self.learning_resource_types.get(&label.to_lowercase())
    }

    pub fn related_work(&self, relation: &str) -> Option<&NamedNode> {
        self.related_works.get(&relation.to_lowercase())
    }

    pub fn special_license(&self, value: &str) -> Option<&NamedNode> {
        self.licenses.get(&value.to_lowercase())
    }

    pub fn language(&self, code: &str) -> Option<&str> {
        self.languages.resolve(code)
    }
}
