pub const CONFIG_TEMPLATE: &str = r#"{
  // DIF v1.3 curation sheet (comma-delimited CSV)
  "input": "dif.csv",

  // Optional community registry with the columns
  // UUID,Title,ROR,Website,Synonyms (synonyms separated by "|").
  // The registry bundled with dalia-dif is used when omitted.
  // "communities": "dalia_communities.csv",

  // Optional SIL iso-639-3.tab file to accept more language codes
  // "languages": "iso-639-3.tab",

  // Output file; defaults to the input path with the format's extension
  "output": "dif.ttl",

  // One of: turtle, ntriples, rdfxml
  "format": "turtle",

  // Name shown in log lines; defaults to the input file name
  // "sourceName": "curation-2024",

  // Log rows that fail to convert and continue with the next one
  "keepGoing": false,

  // Add the optional N4C_ID column to each resource's links
  "n4cLinks": false
}
"#;
