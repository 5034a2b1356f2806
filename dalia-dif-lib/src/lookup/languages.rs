//! ISO 639 language codes, resolved to their ISO 639-3 form.

use std::collections::HashMap;
use std::io::Read;

use crate::error::ProcessorError;

/// SIL code table (`Id`, `Part2B`, `Part2T`, `Part1`, ...) covering every
/// ISO 639-3 code.
const BUNDLED_LANGUAGES: &str = include_str!("../../data/iso-639-3.tab");

/// Case-insensitive language code lookup.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    codes: HashMap<String, String>,
}

impl LanguageTable {
    /// Table built from the bundled SIL code table.
    pub fn builtin() -> Result<Self, ProcessorError> {
        let mut table = Self {
            codes: HashMap::new(),
        };
        table.extend_from_tab(BUNDLED_LANGUAGES.as_bytes())?;
        Ok(table)
    }

    /// Adds the codes of a SIL `iso-639-3.tab` file. Returns the number of
    /// new ISO 639-3 ids.
    pub fn extend_from_tab<R: Read>(&mut self, reader: R) -> Result<usize, ProcessorError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let position = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                ProcessorError::InvalidConfig(format!(
                    "Language table is missing the '{}' column",
                    name
                ))
            })
        };
        let id_idx = position("Id")?;
        let part2b_idx = position("Part2B")?;
        let part1_idx = position("Part1")?;

        let mut added = 0;
        for record in reader.records() {
            let record = record?;
            let Some(id) = record.get(id_idx).map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            let id = id.to_lowercase();
            for alias in [record.get(part2b_idx), record.get(part1_idx)]
                .into_iter()
                .flatten()
                .map(str::trim)
                .filter(|s| !s.is_empty())
            {
                self.codes.insert(alias.to_lowercase(), id.clone());
            }
            if self.codes.insert(id.clone(), id).is_none() {
                added += 1;
            }
        }
        tracing::debug!("Loaded {} ISO 639-3 codes", added);
        Ok(added)
    }

    /// Resolves a two- or three-letter code to its ISO 639-3 code.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.codes.get(&code.to_lowercase()).map(String::as_str)
    }
}
