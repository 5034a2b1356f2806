use std::sync::LazyLock;

use oxrdf::{NamedNode, NamedNodeRef};
use regex::Regex;

use super::{split_field, FieldOutput};
use crate::diagnostics::Skip;
use crate::error::FieldError;
use crate::lookup::LookupTables;
use crate::namespace::{community, DALIA_COMMUNITY};

static COMMUNITY_RELATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>.*)\s\((?P<relation>S|R|SR|RS)\)$").unwrap());

/// How a community relates to a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityRelation {
    /// `(S)`
    SupportingHost,
    /// `(R)`
    Recommender,
    /// `(SR)` or `(RS)`
    Both,
}

impl CommunityRelation {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(CommunityRelation::SupportingHost),
            "R" => Some(CommunityRelation::Recommender),
            "SR" | "RS" => Some(CommunityRelation::Both),
            _ => None,
        }
    }

    pub fn predicates(self) -> &'static [NamedNodeRef<'static>] {
        match self {
            CommunityRelation::SupportingHost => &[community::SUPPORTING_HOST],
            CommunityRelation::Recommender => &[community::RECOMMENDER],
            CommunityRelation::Both => &[community::SUPPORTING_HOST, community::RECOMMENDER],
        }
    }
}

/// Splits `"<name> (<relation>)"` into the trimmed name and its relation.
pub fn parse_community(entry: &str) -> Result<(&str, CommunityRelation), FieldError> {
    let malformed = || FieldError::MalformedCommunity(entry.to_string());
    let captures = COMMUNITY_RELATION.captures(entry).ok_or_else(malformed)?;
    let relation = captures
        .name("relation")
        .and_then(|m| CommunityRelation::from_code(m.as_str()))
        .ok_or_else(malformed)?;
    let name = captures.name("name").map_or("", |m| m.as_str()).trim();
    Ok((name, relation))
}

/// `Community` column. Unknown community names are skipped, not fatal.
pub fn communities(
    resource: &NamedNode,
    raw: &str,
    tables: &LookupTables,
) -> Result<FieldOutput, FieldError> {
    let mut output = FieldOutput::new();
    for entry in split_field(raw, "community")? {
        let (name, relation) = parse_community(entry)?;
        let Some(uuid) = tables.community(name) else {
            output.skip(Skip::UnknownCommunity(name.to_string()));
            continue;
        };
        let community = NamedNode::new_unchecked(format!("{}{}", DALIA_COMMUNITY, uuid));
        for predicate in relation.predicates() {
            output.push(resource.clone(), *predicate, community.clone());
        }
    }
    Ok(output)
}
