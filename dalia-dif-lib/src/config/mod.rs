pub mod template;

use std::io::Read;
use std::path::{Path, PathBuf};

use json_comments::StripComments;
use serde::{Deserialize, Serialize};

use crate::error::ProcessorError;
use crate::graph::OutputFormat;
use crate::lookup::LookupPaths;

/// Conversion settings, read from a JSON file that may contain comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DifConfig {
    /// DIF v1.3 CSV file to convert.
    pub input: PathBuf,
    /// Community registry replacing the bundled one.
    #[serde(default)]
    pub communities: Option<PathBuf>,
    /// SIL ISO 639-3 code table extending the built-in language codes.
    #[serde(default)]
    pub languages: Option<PathBuf>,
    /// Output file. Defaults to the input path with the format's extension.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
    /// Name used in log lines. Defaults to the input file name.
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub keep_going: bool,
    /// Read the optional `N4C_ID` column as an additional link.
    #[serde(default)]
    pub n4c_links: bool,
}

impl DifConfig {
    /// A config for a single input file with default settings.
    pub fn for_input<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            communities: None,
            languages: None,
            output: None,
            format: OutputFormat::default(),
            source_name: None,
            keep_going: false,
            n4c_links: false,
        }
    }

    /// Loads a config file. Relative paths are resolved against the
    /// directory containing it.
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Result<Self, ProcessorError> {
        let path = path.into();
        tracing::info!("Loading config from {}", path.display());
        let file = std::fs::File::open(&path)?;
        let base_path = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::from_reader(file, base_path)?;
        tracing::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R, base_path: &Path) -> Result<Self, ProcessorError> {
        let mut config: DifConfig = serde_json::from_reader(StripComments::new(reader))?;
        config.resolve_paths(base_path);
        Ok(config)
    }

    fn resolve_paths(&mut self, base_path: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base_path.join(&*path);
            }
        };
        resolve(&mut self.input);
        for path in [&mut self.communities, &mut self.languages, &mut self.output]
            .into_iter()
            .flatten()
        {
            resolve(path);
        }
    }

    /// Checks that every referenced input file exists.
    pub fn validate(&self) -> Result<(), ProcessorError> {
        tracing::info!("Validating config...");
        let files = [
            ("input", Some(&self.input)),
            ("communities", self.communities.as_ref()),
            ("languages", self.languages.as_ref()),
        ];
        for (field, path) in files {
            let Some(path) = path else { continue };
            if !path.is_file() {
                tracing::error!("Config field '{}' points to a missing file", field);
                return Err(ProcessorError::InvalidConfig(format!(
                    "'{}' file not found: {}",
                    field,
                    path.display()
                )));
            }
        }
        if let Some(parent) = self.output_path().parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ProcessorError::InvalidConfig(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        Ok(())
    }

    pub fn lookup_paths(&self) -> LookupPaths {
        LookupPaths {
            communities: self.communities.clone(),
            languages: self.languages.clone(),
        }
    }

    pub fn source_name(&self) -> String {
        match &self.source_name {
            Some(name) => name.clone(),
            None => self
                .input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.input.display().to_string()),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => self.input.with_extension(self.format.file_extension()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_with_comments() {
        let data = r#"{
            // the curation sheet
            "input": "dif.csv",
            "communities": "/data/communities.csv",
            "format": "ntriples", // one triple per line
            "keepGoing": true,
            "n4cLinks": true
        }"#;
        let config = DifConfig::from_reader(data.as_bytes(), Path::new("/work")).unwrap();

        assert_eq!(config.input, PathBuf::from("/work/dif.csv"));
        assert_eq!(config.communities, Some(PathBuf::from("/data/communities.csv")));
        assert_eq!(config.format, OutputFormat::NTriples);
        assert!(config.keep_going);
        assert!(config.n4c_links);
        assert_eq!(config.source_name(), "dif.csv");
        assert_eq!(config.output_path(), PathBuf::from("/work/dif.nt"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let data = r#"{ "input": "dif.csv", "inptu": "typo.csv" }"#;
        assert!(matches!(
            DifConfig::from_reader(data.as_bytes(), Path::new(".")),
            Err(ProcessorError::Json(_))
        ));
    }

    #[test]
    fn test_validate_reports_missing_input() {
        let config = DifConfig::for_input("../test-data/does-not-exist.csv");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("does-not-exist.csv"));
    }

    #[test]
    fn test_load_test_config() {
        let config = DifConfig::from_file("../test-data/config.jsonc").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.source_name(), "dif.csv");
        assert!(config.lookup_paths().communities.is_some());
    }

    #[test]
    fn test_template_is_valid_config() {
        let config =
            DifConfig::from_reader(template::CONFIG_TEMPLATE.as_bytes(), Path::new(".")).unwrap();
        assert_eq!(config.format, OutputFormat::Turtle);
        assert!(!config.n4c_links);
    }
}
