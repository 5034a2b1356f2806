//! Picklists of the DIF v1.3 curation sheet.
//!
//! Keys are lower-case labels as curators type them; values are IRIs.

pub const MEDIA_TYPES: &[(&str, &str)] = &[
    ("audio", "https://schema.org/AudioObject"),
    ("code", "https://schema.org/SoftwareSourceCode"),
    ("image", "https://schema.org/ImageObject"),
    ("presentation", "https://schema.org/PresentationDigitalDocument"),
    ("text", "https://schema.org/Text"),
    ("video", "https://schema.org/VideoObject"),
];

/// Tokens found in old MediaType columns that have no counterpart in the
/// media type vocabulary. They are accepted and produce nothing.
pub const LEGACY_MEDIA_TYPES: &[&str] = &["multipart", "other"];

/// Media type labels that curators also put into the LearningResourceType
/// column. They are ignored there instead of being reported as unknown.
pub const MEDIA_TYPE_EXCEPTIONS: &[&str] = &["audio", "code", "image", "presentation", "text", "video"];

pub const PROFICIENCY_LEVELS: &[(&str, &str)] = &[
    ("novice", "https://purl.org/ontology/modalia#Novice"),
    ("advanced beginner", "https://purl.org/ontology/modalia#Beginner"),
    ("competent", "https://purl.org/ontology/modalia#Competent"),
    ("proficient", "https://purl.org/ontology/modalia#Proficient"),
    ("expert", "https://purl.org/ontology/modalia#Expert"),
];

pub const TARGET_GROUPS: &[(&str, &str)] = &[
    ("data steward", "https://purl.org/ontology/modalia#DataSteward"),
    ("data librarian", "https://purl.org/ontology/modalia#DataLibrarian"),
    ("researcher", "https://purl.org/ontology/modalia#Researcher"),
    (
        "research software engineer",
        "https://purl.org/ontology/modalia#ResearchSoftwareEngineer",
    ),
    ("student (ba)", "https://purl.org/ontology/modalia#BachelorStudent"),
    ("student (ma)", "https://purl.org/ontology/modalia#MastersStudent"),
    ("student (phd)", "https://purl.org/ontology/modalia#PhDStudent"),
    ("student (school)", "https://purl.org/ontology/modalia#SchoolStudent"),
    (
        "teacher (higher education)",
        "https://purl.org/ontology/modalia#TeacherHighEducation",
    ),
    ("teacher (school)", "https://purl.org/ontology/modalia#TeacherSchool"),
];

pub const LEARNING_RESOURCE_TYPES: &[(&str, &str)] = &[
    ("article", "http://purl.org/ontology/bibo/Article"),
    ("bibo:article", "http://purl.org/ontology/bibo/Article"),
    ("best practice example", "https://purl.org/ontology/modalia#BestPracticeExample"),
    ("book", "http://purl.org/ontology/bibo/Book"),
    ("bibo:book", "http://purl.org/ontology/bibo/Book"),
    ("codenotebook", "https://purl.org/ontology/modalia#CodeNotebook"),
    ("collection", "https://purl.org/ontology/modalia#Collection"),
    ("exercise", "https://purl.org/ontology/modalia#Exercise"),
    ("lecture", "https://purl.org/ontology/modalia#Lecture"),
    ("report", "http://purl.org/ontology/bibo/Report"),
    ("bibo:report", "http://purl.org/ontology/bibo/Report"),
    ("thesis", "http://purl.org/ontology/bibo/Thesis"),
    ("bibo:thesis", "http://purl.org/ontology/bibo/Thesis"),
    ("tutorial", "https://purl.org/ontology/modalia#Tutorial"),
];

pub const RELATED_WORKS: &[(&str, &str)] = &[
    ("hasformat", "http://purl.org/dc/terms/hasFormat"),
    ("haspart", "https://schema.org/hasPart"),
    ("hastranslation", "https://schema.org/workTranslation"),
    ("hasversion", "http://purl.org/dc/terms/hasVersion"),
    ("isbasedon", "https://purl.org/ontology/modalia#isBasedOn"),
    ("isformatof", "http://purl.org/dc/terms/isFormatOf"),
    ("ispartof", "https://schema.org/isPartOf"),
    ("isreferencedby", "http://purl.org/dc/terms/isReferencedBy"),
    ("isreplacedby", "http://purl.org/dc/terms/isReplacedBy"),
    ("isrequiredby", "http://purl.org/dc/terms/isRequiredBy"),
    ("issupplementedby", "https://w3id.org/citedcat-ap/isSupplementedBy"),
    ("issupplementto", "https://w3id.org/citedcat-ap/isSupplementTo"),
    ("istranslationof", "https://schema.org/translationOfWork"),
    ("isversionof", "http://purl.org/dc/terms/isVersionOf"),
    ("references", "http://purl.org/dc/terms/references"),
    ("replaces", "http://purl.org/dc/terms/replaces"),
    ("requires", "http://purl.org/dc/terms/requires"),
    ("wasrevisionof", "http://www.w3.org/ns/prov#wasRevisionOf"),
];

/// Licence values that are not SPDX identifiers.
pub const SPECIAL_LICENSES: &[(&str, &str)] = &[(
    "proprietary",
    "https://purl.org/ontology/modalia#ProprietaryLicense",
)];
