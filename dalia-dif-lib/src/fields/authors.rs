use std::sync::LazyLock;

use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Literal, NamedNode};
use regex::Regex;
use uuid::Uuid;

use super::{split_lenient, FieldOutput};
use crate::error::FieldError;
use crate::namespace::{m4i, owl, schema, AUTHOR_UNORDERED};

static ANNOTATED_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^{}]+?)\s*:\s*\{(?P<body>[^{}]*)\}$").unwrap()
});

static ORCID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://orcid\.org/(?P<id>\d{4}-\d{4}-\d{4}-\d{3}[\dX])$").unwrap()
});

static ROR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://ror\.org/(?P<id>0[a-hj-km-np-tv-z0-9]{6})(?P<check>[0-9]{2})$").unwrap()
});

static WIKIDATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^http://www\.wikidata\.org/entity/Q[1-9][0-9]*$").unwrap());

const CROCKFORD_BASE32: &str = "0123456789abcdefghjkmnpqrstvwxyz";

/// A parsed entry of the `Authors` column.
#[derive(Debug, Clone, PartialEq)]
pub enum Author {
    Person {
        family_name: Option<String>,
        given_name: Option<String>,
        orcid: Option<String>,
    },
    Organization {
        name: String,
        ror: Option<String>,
        wikidata: Option<String>,
    },
}

impl Author {
    fn person(name: &str, orcid: Option<&str>) -> Self {
        let (family, given) = match name.rsplit_once(',') {
            Some((family, given)) => (family.trim(), Some(given.trim())),
            None => (name.trim(), None),
        };
        Author::Person {
            family_name: Some(family).filter(|s| !s.is_empty()).map(String::from),
            given_name: given.filter(|s| !s.is_empty()).map(String::from),
            orcid: orcid.map(String::from),
        }
    }

    fn organization(name: &str, identifier: Option<&str>) -> Self {
        let (ror, wikidata) = match identifier {
            Some(id) if is_valid_ror(id) => (Some(id.to_string()), None),
            Some(id) => (None, Some(id.to_string())),
            None => (None, None),
        };
        Author::Organization {
            name: name.trim().to_string(),
            ror,
            wikidata,
        }
    }

    fn describe(&self, node: &BlankNode, output: &mut FieldOutput) {
        match self {
            Author::Person {
                family_name,
                given_name,
                orcid,
            } => {
                output.push(node.clone(), rdf::TYPE, schema::PERSON.into_owned());
                if let Some(family_name) = family_name {
                    output.push(
                        node.clone(),
                        schema::FAMILY_NAME,
                        Literal::new_simple_literal(family_name),
                    );
                }
                if let Some(given_name) = given_name {
                    output.push(
                        node.clone(),
                        schema::GIVEN_NAME,
                        Literal::new_simple_literal(given_name),
                    );
                }
                if let Some(orcid) = orcid {
                    output.push(node.clone(), m4i::ORCID_ID, Literal::new_simple_literal(orcid));
                }
            }
            Author::Organization {
                name,
                ror,
                wikidata,
            } => {
                output.push(node.clone(), rdf::TYPE, schema::ORGANIZATION.into_owned());
                output.push(node.clone(), schema::NAME, Literal::new_simple_literal(name));
                if let Some(ror) = ror {
                    output.push(node.clone(), m4i::HAS_ROR_ID, Literal::new_simple_literal(ror));
                }
                if let Some(wikidata) = wikidata {
                    output.push(
                        node.clone(),
                        owl::SAME_AS,
                        NamedNode::new_unchecked(wikidata.as_str()),
                    );
                }
            }
        }
    }
}

/// ISO 7064 MOD 11-2 check of an ORCID URI.
pub fn is_valid_orcid(uri: &str) -> bool {
    let Some(captures) = ORCID.captures(uri) else {
        return false;
    };
    let digits: Vec<char> = captures["id"].chars().filter(|c| *c != '-').collect();
    let Some((check, body)) = digits.split_last() else {
        return false;
    };
    let mut total: u32 = 0;
    for c in body {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        total = (total + digit) * 2;
    }
    let expected = (12 - total % 11) % 11;
    let expected = if expected == 10 {
        'X'
    } else {
        char::from_digit(expected, 10).unwrap_or('?')
    };
    *check == expected
}

/// Checks the two trailing digits of a ROR id against its base-32 value.
pub fn is_valid_ror(uri: &str) -> bool {
    let Some(captures) = ROR.captures(uri) else {
        return false;
    };
    let mut value: u64 = 0;
    for c in captures["id"].chars() {
        let Some(position) = CROCKFORD_BASE32.find(c) else {
            return false;
        };
        value = value * 32 + position as u64;
    }
    let Ok(check) = captures["check"].parse::<u64>() else {
        return false;
    };
    98 - (value * 100 % 97) == check
}

pub fn is_valid_wikidata(uri: &str) -> bool {
    WIKIDATA.is_match(uri)
}

/// Parses a single author entry. `n/a` yields `None`.
pub fn parse_author(entry: &str) -> Result<Option<Author>, FieldError> {
    let entry = entry.trim();
    if entry.eq_ignore_ascii_case("n/a") {
        return Ok(None);
    }
    if !entry.contains('{') {
        return Ok(Some(Author::person(entry, None)));
    }

    let Some(captures) = ANNOTATED_AUTHOR.captures(entry) else {
        let kind = if entry.contains("organization") {
            "organization"
        } else {
            "person"
        };
        return Err(FieldError::MalformedAuthor {
            kind,
            entry: entry.to_string(),
        });
    };
    let name = captures["name"].trim();
    let body = captures["body"].trim();

    let invalid = |identifier: &str| FieldError::InvalidIdentifier {
        entry: entry.to_string(),
        identifier: identifier.to_string(),
    };

    if let Some(rest) = body.strip_prefix("organization") {
        let identifier = rest.trim();
        if identifier.is_empty() {
            return Ok(Some(Author::organization(name, None)));
        }
        if is_valid_ror(identifier) || is_valid_wikidata(identifier) {
            return Ok(Some(Author::organization(name, Some(identifier))));
        }
        return Err(invalid(identifier));
    }

    if body.is_empty() {
        return Err(FieldError::MalformedAuthor {
            kind: "person",
            entry: entry.to_string(),
        });
    }
    if is_valid_orcid(body) {
        Ok(Some(Author::person(name, Some(body))))
    } else if is_valid_ror(body) || is_valid_wikidata(body) {
        Ok(Some(Author::organization(name, Some(body))))
    } else {
        Err(invalid(body))
    }
}

fn author_node(resource: &NamedNode, position: usize, role: &str) -> BlankNode {
    let name = format!("{}#author/{}/{}", resource.as_str(), position, role);
    BlankNode::new_from_unique_id(Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()).as_u128())
}

/// `Authors` column: an ordered `schema:author` list plus one unordered
/// statement per author.
pub fn authors(resource: &NamedNode, raw: &str) -> Result<FieldOutput, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::EmptyField("Authors"));
    }

    let mut parsed = Vec::new();
    for entry in split_lenient(raw) {
        if let Some(author) = parse_author(entry)? {
            parsed.push(author);
        }
    }

    let mut output = FieldOutput::new();
    if parsed.is_empty() {
        return Ok(output);
    }

    let cells: Vec<BlankNode> = (0..parsed.len())
        .map(|i| author_node(resource, i, "list"))
        .collect();
    output.push(resource.clone(), schema::AUTHOR, cells[0].clone());

    for (i, author) in parsed.iter().enumerate() {
        let member = author_node(resource, i, "ordered");
        author.describe(&member, &mut output);
        output.push(cells[i].clone(), rdf::FIRST, member);
        match cells.get(i + 1) {
            Some(next) => output.push(cells[i].clone(), rdf::REST, next.clone()),
            None => output.push(cells[i].clone(), rdf::REST, rdf::NIL.into_owned()),
        }

        let unordered = author_node(resource, i, "unordered");
        author.describe(&unordered, &mut output);
        output.push(resource.clone(), AUTHOR_UNORDERED, unordered);
    }

    Ok(output)
}
