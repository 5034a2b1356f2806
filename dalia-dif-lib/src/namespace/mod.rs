//! IRIs of the vocabularies used in DALIA learning-resource graphs.

use oxrdf::NamedNodeRef;

pub const DALIA_LEARNING_RESOURCE: &str = "https://id.dalia.education/learning-resource/";
pub const DALIA_COMMUNITY: &str = "https://id.dalia.education/community/";
pub const HOCHSCHULFAECHERSYSTEMATIK: &str = "https://w3id.org/kim/hochschulfaechersystematik/";
pub const HCRT: &str = "https://w3id.org/kim/hcrt/";
pub const LEXVO_ISO639_3: &str = "http://lexvo.org/id/iso639-3/";
pub const SPDX_LICENSE: &str = "http://spdx.org/licenses/";

/// Prefixes bound when serializing a graph.
pub const PREFIXES: [(&str, &str); 17] = [
    ("bflr", "http://bibfra.me/vocab/relation/"),
    ("bibo", "http://purl.org/ontology/bibo/"),
    ("citedcat", "https://w3id.org/citedcat-ap/"),
    ("dalia-community", DALIA_COMMUNITY),
    ("dalia-lr", DALIA_LEARNING_RESOURCE),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("ec", "https://github.com/tibonto/educor#"),
    ("fabio", "http://purl.org/spar/fabio/"),
    ("hcrt", HCRT),
    ("hsfs", HOCHSCHULFAECHERSYSTEMATIK),
    ("lexvo", LEXVO_ISO639_3),
    ("m4i", "http://w3id.org/nfdi4ing/metadata4ing#"),
    ("mo", "https://purl.org/ontology/modalia#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("rec", "http://purl.org/ontology/rec/core#"),
    ("schema", "https://schema.org/"),
];

pub mod schema {
    use super::NamedNodeRef;

    pub const AUTHOR: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://schema.org/author");
    pub const DATE_PUBLISHED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://schema.org/datePublished");
    pub const FAMILY_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://schema.org/familyName");
    pub const FILE_SIZE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://schema.org/fileSize");
    pub const GIVEN_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://schema.org/givenName");
    pub const KEYWORDS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://schema.org/keywords");
    pub const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://schema.org/name");
    pub const ORGANIZATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://schema.org/Organization");
    pub const PERSON: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://schema.org/Person");
    pub const URL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://schema.org/url");
    pub const VERSION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://schema.org/version");
}

pub mod dcterms {
    use super::NamedNodeRef;

    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/description");
    pub const FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/format");
    pub const LANGUAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/language");
    pub const LICENSE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/license");
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
}

pub mod fabio {
    use super::NamedNodeRef;

    pub const HAS_DISCIPLINE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/spar/fabio/hasDiscipline");
    pub const HAS_SUBTITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/spar/fabio/hasSubtitle");
}

pub mod m4i {
    use super::NamedNodeRef;

    pub const ORCID_ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://w3id.org/nfdi4ing/metadata4ing#orcidId");
    pub const HAS_ROR_ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://w3id.org/nfdi4ing/metadata4ing#hasRorId");
}

pub mod modalia {
    use super::NamedNodeRef;

    pub const HAS_LEARNING_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://purl.org/ontology/modalia#hasLearningType");
    pub const HAS_MEDIA_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://purl.org/ontology/modalia#hasMediaType");
    pub const HAS_TARGET_GROUP: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://purl.org/ontology/modalia#hasTargetGroup");
    pub const REQUIRES_PROFICIENCY_LEVEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://purl.org/ontology/modalia#requiresProficiencyLevel");
}

pub mod educor {
    use super::NamedNodeRef;

    pub const EDUCATIONAL_RESOURCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://github.com/tibonto/educor#EducationalResource");
}

pub mod owl {
    use super::NamedNodeRef;

    pub const SAME_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#sameAs");
}

pub mod community {
    use super::NamedNodeRef;

    pub const SUPPORTING_HOST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://bibfra.me/vocab/relation/supportinghost");
    pub const RECOMMENDER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/ontology/rec/core#recommender");
}

pub const AUTHOR_UNORDERED: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("https://dalia.education/authorUnordered");
