use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::error::ProcessorError;
use crate::graph::DifGraph;
use crate::lookup::{LookupPaths, LookupTables};
use crate::row::{DifRow, RowParser, REQUIRED_COLUMNS};

/// Row counts of one processed file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub resources: usize,
    pub skipped_rows: usize,
    pub failed_rows: usize,
}

impl RunSummary {
    fn merge(&mut self, other: RunSummary) {
        self.rows += other.rows;
        self.resources += other.resources;
        self.skipped_rows += other.skipped_rows;
        self.failed_rows += other.failed_rows;
    }
}

/// Converts whole DIF CSV files into a [`DifGraph`].
pub struct Processor {
    tables: LookupTables,
    keep_going: bool,
    n4c_links: bool,
}

#[derive(Debug, Default)]
pub struct ProcessorBuilder {
    lookup_paths: LookupPaths,
    keep_going: bool,
    n4c_links: bool,
}

impl ProcessorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup_paths(mut self, paths: LookupPaths) -> Self {
        self.lookup_paths = paths;
        self
    }

    /// Log failing rows and continue instead of aborting the run.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Treat the optional `N4C_ID` column as an additional link.
    pub fn n4c_links(mut self, n4c_links: bool) -> Self {
        self.n4c_links = n4c_links;
        self
    }

    pub fn build(self) -> Result<Processor, ProcessorError> {
        Ok(Processor {
            tables: LookupTables::load(&self.lookup_paths)?,
            keep_going: self.keep_going,
            n4c_links: self.n4c_links,
        })
    }
}

impl Processor {
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::new()
    }

    /// Processes a DIF file into `graph`.
    ///
    /// The diagnostics source name falls back to the file name when unset.
    pub fn process_file<P: AsRef<Path>>(
        &self,
        path: P,
        graph: &mut DifGraph,
        diagnostics: &mut Diagnostics,
    ) -> Result<RunSummary, ProcessorError> {
        let path = path.as_ref();
        if diagnostics.source_name().is_empty() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            diagnostics.set_source_name(name);
        }
        tracing::info!("Processing DIF file {}", path.display());
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open DIF file {}: {}", path.display(), e),
            )
        })?;
        self.process_reader(file, graph, diagnostics)
    }

    /// Processes several DIF files into one graph. Each file reports under
    /// its own file name.
    pub fn process_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
        graph: &mut DifGraph,
        diagnostics: &mut Diagnostics,
    ) -> Result<RunSummary, ProcessorError> {
        let mut summary = RunSummary::default();
        for path in paths {
            let mut file_diagnostics = Diagnostics::default();
            let result = self.process_file(path, graph, &mut file_diagnostics);
            diagnostics.merge(file_diagnostics);
            summary.merge(result?);
        }
        Ok(summary)
    }

    /// Processes comma-delimited DIF data. Data rows are numbered from 2.
    pub fn process_reader<R: Read>(
        &self,
        reader: R,
        graph: &mut DifGraph,
        diagnostics: &mut Diagnostics,
    ) -> Result<RunSummary, ProcessorError> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        self.validate_headers(&headers, diagnostics.source_name())?;

        let parser = RowParser::new(&self.tables).with_n4c_links(self.n4c_links);
        let mut summary = RunSummary::default();

        for (index, result) in reader.records().enumerate() {
            let line = index + 2;
            let record = result?;
            summary.rows += 1;

            let raw: HashMap<String, String> = headers
                .iter()
                .cloned()
                .zip(record.iter().map(String::from))
                .collect();
            let row = DifRow::from_raw(raw);

            match parser.parse_into(&row, line, diagnostics, graph) {
                Ok(Some(_)) => summary.resources += 1,
                Ok(None) => summary.skipped_rows += 1,
                Err(e) if self.keep_going => {
                    summary.failed_rows += 1;
                    diagnostics.record_failed_row(line, e.to_string());
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(
            "{}: {} rows, {} learning resources, {} without {}, {} failed",
            diagnostics.source_name(),
            summary.rows,
            summary.resources,
            summary.skipped_rows,
            crate::row::DIF_HEADER_ID,
            summary.failed_rows
        );
        Ok(summary)
    }

    fn validate_headers(&self, headers: &[String], source_name: &str) -> Result<(), ProcessorError> {
        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == column))
            .collect();
        if !missing.is_empty() {
            tracing::error!("{} is missing columns: {}", source_name, missing.join(", "));
            return Err(ProcessorError::MissingColumns {
                source_name: source_name.to_string(),
                columns: missing,
            });
        }
        for header in headers {
            if !REQUIRED_COLUMNS.contains(&header.as_str()) {
                tracing::debug!("Column '{}' is not part of DIF v1.3", header);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_ROW: [&str; 19] = [
        "b3763080-15a4-4de4-b99b-c9b337644904",
        "Intro to RDM: the basics",
        "Musterfrau, Paula * ACME : {organization}",
        "CC-BY-4.0",
        "https://example.org/rdm",
        "NFDI4Chem (S)",
        "An introduction",
        "https://w3id.org/kim/hochschulfaechersystematik/n0",
        "PDF",
        "rdm * fair",
        "en",
        "Lecture",
        "video",
        "novice",
        "2024",
        "researcher",
        "",
        "12",
        "1.0",
    ];

    fn dif_csv(rows: &[[&str; 19]]) -> Vec<u8> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(REQUIRED_COLUMNS).unwrap();
        for row in rows {
            writer.write_record(row).unwrap();
        }
        writer.into_inner().unwrap()
    }

    fn bad_row() -> [&'static str; 19] {
        let mut row = GOOD_ROW;
        row[0] = "6f0c3a9e-1b2c-4d3e-8f40-5a6b7c8d9e0f";
        row[3] = "Not a license";
        row
    }

    fn empty_id_row() -> [&'static str; 19] {
        let mut row = GOOD_ROW;
        row[0] = "";
        row
    }

    #[test]
    fn test_process_reader() {
        let processor = Processor::builder().build().unwrap();
        let mut graph = DifGraph::new();
        let mut diagnostics = Diagnostics::new("dif.csv");

        let summary = processor
            .process_reader(
                dif_csv(&[GOOD_ROW, empty_id_row()]).as_slice(),
                &mut graph,
                &mut diagnostics,
            )
            .unwrap();

        assert_eq!(
            summary,
            RunSummary {
                rows: 2,
                resources: 1,
                skipped_rows: 1,
                failed_rows: 0,
            }
        );
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_failing_row_stops_run_with_line_number() {
        let processor = Processor::builder().build().unwrap();
        let mut graph = DifGraph::new();
        let mut diagnostics = Diagnostics::new("dif.csv");

        let err = processor
            .process_reader(
                dif_csv(&[GOOD_ROW, bad_row()]).as_slice(),
                &mut graph,
                &mut diagnostics,
            )
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "[dif.csv line:3] License: Invalid license identifier \"Not a license\""
        );
    }

    #[test]
    fn test_keep_going_counts_failed_rows() {
        let processor = Processor::builder().keep_going(true).build().unwrap();
        let mut graph = DifGraph::new();
        let mut diagnostics = Diagnostics::new("dif.csv");

        let summary = processor
            .process_reader(
                dif_csv(&[bad_row(), GOOD_ROW]).as_slice(),
                &mut graph,
                &mut diagnostics,
            )
            .unwrap();

        assert_eq!(summary.resources, 1);
        assert_eq!(summary.failed_rows, 1);
        assert_eq!(diagnostics.failed_rows(), 1);
        assert_eq!(diagnostics.warnings()[0].line, 2);
    }

    #[test]
    fn test_missing_columns() {
        let processor = Processor::builder().build().unwrap();
        let data = "DALIA_ID,Title\nb3763080-15a4-4de4-b99b-c9b337644904,A title\n";

        let err = processor
            .process_reader(
                data.as_bytes(),
                &mut DifGraph::new(),
                &mut Diagnostics::new("dif.csv"),
            )
            .unwrap_err();

        match err {
            ProcessorError::MissingColumns { columns, .. } => {
                assert_eq!(columns.len(), 17);
                assert!(columns.contains(&"Authors"));
                assert!(!columns.contains(&"Title"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    fn write_dif(dir: &Path, name: &str, rows: &[[&str; 19]]) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, dif_csv(rows)).unwrap();
        path
    }

    #[test]
    fn test_process_files_merges_summaries() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut second = GOOD_ROW;
        second[0] = "0f8a3c1e-6b2d-4e5f-9a7b-1c2d3e4f5a6b";
        second[5] = "Ghost (S)";
        let files = [
            write_dif(dir.path(), "first.csv", &[bad_row(), GOOD_ROW]),
            write_dif(dir.path(), "second.csv", &[empty_id_row(), second, bad_row()]),
        ];

        let processor = Processor::builder().keep_going(true).build().unwrap();
        let mut graph = DifGraph::new();
        let mut diagnostics = Diagnostics::new("batch");
        let summary = processor
            .process_files(&files, &mut graph, &mut diagnostics)
            .unwrap();

        assert_eq!(
            summary,
            RunSummary {
                rows: 5,
                resources: 2,
                skipped_rows: 1,
                failed_rows: 2,
            }
        );
        assert_eq!(diagnostics.failed_rows(), 2);
        assert_eq!(diagnostics.missing_communities()["Ghost"], 1);

        let messages: Vec<&str> = diagnostics
            .warnings()
            .iter()
            .map(|w| w.message.as_str())
            .collect();
        assert!(messages[0].starts_with("[first.csv line:2] License"));
        assert!(messages.iter().any(|m| m.starts_with("[second.csv line:4] License")));
    }

    #[test]
    fn test_process_files_stops_at_failing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let files = [
            write_dif(dir.path(), "first.csv", &[GOOD_ROW]),
            write_dif(dir.path(), "second.csv", &[bad_row()]),
        ];

        let processor = Processor::builder().build().unwrap();
        let mut graph = DifGraph::new();
        let err = processor
            .process_files(&files, &mut graph, &mut Diagnostics::default())
            .unwrap_err();

        assert!(err.to_string().starts_with("[second.csv line:2] License"));
        assert!(!graph.is_empty());
    }

    #[test]
    fn test_n4c_links_option() {
        let mut writer = csv::Writer::from_writer(vec![]);
        let mut header = REQUIRED_COLUMNS.to_vec();
        header.push(crate::row::DIF_HEADER_N4C_ID);
        writer.write_record(&header).unwrap();
        let mut row = GOOD_ROW.to_vec();
        row.push("https://nfdi4culture.de/id/E1234");
        writer.write_record(&row).unwrap();
        let data = writer.into_inner().unwrap();

        let mut plain = DifGraph::new();
        let mut diagnostics = Diagnostics::new("dif.csv");
        Processor::builder()
            .build()
            .unwrap()
            .process_reader(data.as_slice(), &mut plain, &mut diagnostics)
            .unwrap();
        assert_eq!(diagnostics.unprocessed_columns()["N4C_ID"], 1);

        let mut linked = DifGraph::new();
        let mut diagnostics = Diagnostics::new("dif.csv");
        Processor::builder()
            .n4c_links(true)
            .build()
            .unwrap()
            .process_reader(data.as_slice(), &mut linked, &mut diagnostics)
            .unwrap();
        assert_eq!(linked.len(), plain.len() + 1);
        assert!(diagnostics.unprocessed_columns().is_empty());
    }

    #[test]
    fn test_process_file_names_source_after_file() {
        let processor = Processor::builder().build().unwrap();
        let mut graph = DifGraph::new();
        let mut diagnostics = Diagnostics::default();

        let summary = processor
            .process_file("../test-data/dif.csv", &mut graph, &mut diagnostics)
            .unwrap();

        assert_eq!(diagnostics.source_name(), "dif.csv");
        assert_eq!(summary.failed_rows, 0);
        assert!(summary.resources > 0);
    }
}
