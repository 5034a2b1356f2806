use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::ProcessorError;

/// A curated DALIA community.
#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub uuid: Uuid,
    pub title: String,
    pub ror: Option<String>,
    pub website: Option<String>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CommunityRecord {
    #[serde(rename = "UUID")]
    uuid: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "ROR")]
    ror: Option<String>,
    #[serde(rename = "Website")]
    website: Option<String>,
    #[serde(rename = "Synonyms")]
    synonyms: Option<String>,
}

impl TryFrom<CommunityRecord> for Community {
    type Error = ProcessorError;

    fn try_from(record: CommunityRecord) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(record.uuid.trim()).map_err(|e| {
            ProcessorError::InvalidCommunity(format!(
                "Community '{}' has an invalid UUID '{}': {}",
                record.title, record.uuid, e
            ))
        })?;
        let title = record.title.trim().to_string();
        if title.is_empty() {
            return Err(ProcessorError::InvalidCommunity(format!(
                "Community {} has no title",
                uuid
            )));
        }
        let synonyms = record
            .synonyms
            .as_deref()
            .unwrap_or_default()
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Ok(Self {
            uuid,
            title,
            ror: record.ror.filter(|s| !s.trim().is_empty()),
            website: record.website.filter(|s| !s.trim().is_empty()),
            synonyms,
        })
    }
}

/// Reads a community registry with the header `UUID,Title,ROR,Website,Synonyms`.
pub fn read_communities<R: Read>(reader: R) -> Result<Vec<Community>, ProcessorError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut communities = Vec::new();
    for record in reader.deserialize::<CommunityRecord>() {
        communities.push(Community::try_from(record?)?);
    }
    Ok(communities)
}

/// Maps every title and synonym, lower-cased, to its community.
pub fn communities_lookup(communities: &[Community]) -> HashMap<String, Uuid> {
    let mut lookup = HashMap::new();
    for community in communities {
        for label in std::iter::once(&community.title).chain(&community.synonyms) {
            if let Some(previous) = lookup.insert(label.to_lowercase(), community.uuid) {
                if previous != community.uuid {
                    tracing::warn!(
                        "Community label '{}' is used by both {} and {}",
                        label,
                        previous,
                        community.uuid
                    );
                }
            }
        }
    }
    lookup
}
