//! Timetable ingestion.
//!
//! Reads a comma-separated timetable with a header row into a
//! [`ScheduleGraph`]. Loading is best-effort: unreadable rows are skipped
//! and counted, and only a failure of the source itself aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use super::error::LoadError;
use super::graph::{ScheduleGraph, ScheduleGraphBuilder};
use super::record::TimetableRecord;

/// Counts from one load, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows turned into legs.
    pub loaded: usize,
    /// Rows with fewer than the required number of fields.
    pub short_rows: usize,
    /// Rows with enough fields but unparseable values.
    pub invalid_rows: usize,
}

/// Load the timetable at `path`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be opened or read.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<ScheduleGraph, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (graph, _) = read_schedule(file, path)?;
    Ok(graph)
}

/// Read a timetable from any reader; `source` names it in errors and logs.
pub fn read_schedule<R: Read>(
    reader: R,
    source: &Path,
) -> Result<(ScheduleGraph, LoadSummary), LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut builder = ScheduleGraphBuilder::default();
    let mut summary = LoadSummary::default();

    for result in csv_reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => {
                return Err(LoadError::Read {
                    path: source.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                // Undecodable bytes on one line; the rest of the file is fine.
                warn!(source = %source.display(), error = %e, "Skipping unreadable timetable row");
                summary.invalid_rows += 1;
                continue;
            }
        };
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<&str> = row.iter().collect();

        match TimetableRecord::from_fields(&fields) {
            Ok(record) => {
                builder.add_record(record);
                summary.loaded += 1;
            }
            Err(e) if e.is_short_row() => {
                debug!(line, error = %e, "Skipping short timetable row");
                summary.short_rows += 1;
            }
            Err(e) => {
                warn!(line, error = %e, "Skipping invalid timetable row");
                summary.invalid_rows += 1;
            }
        }
    }

    let graph = builder.build();

    info!(
        source = %source.display(),
        origins = graph.origin_count(),
        legs = graph.leg_count(),
        skipped = summary.short_rows + summary.invalid_rows,
        "Loaded schedule"
    );
    for (origin, count) in graph.origins() {
        debug!(origin = %origin, legs = count, "Outbound legs");
    }

    Ok((graph, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationCode;
    use std::io::Write;

    const HEADER: &str = "from,to,start,end,mode,price,from_city,to_city\n";

    fn code(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn read(body: &str) -> (ScheduleGraph, LoadSummary) {
        let text = format!("{HEADER}{body}");
        read_schedule(text.as_bytes(), Path::new("test.csv")).unwrap()
    }

    #[test]
    fn header_is_skipped() {
        let (graph, summary) = read("DEL,BOM,0600,0800,flight,4500,Delhi,Mumbai\n");
        assert_eq!(summary.loaded, 1);
        assert_eq!(graph.leg_count(), 1);
        assert!(!graph.has_origin(&code("FROM")));
    }

    #[test]
    fn short_rows_are_skipped_without_failing() {
        let (graph, summary) = read(
            "DEL,BOM,0600,0800,flight,4500,Delhi,Mumbai\n\
             DEL,JAI,0600\n\
             JAI,BOM,0900,1100,train,700,Jaipur,Mumbai\n",
        );
        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.short_rows, 1);
        assert_eq!(graph.outbound_legs(&code("DEL")).len(), 1);
        assert!(graph.is_known_destination(&code("BOM")));
    }

    #[test]
    fn invalid_rows_are_skipped_without_failing() {
        let (graph, summary) = read(
            "DEL,BOM,6am,0800,flight,4500,Delhi,Mumbai\n\
             DEL,BOM,0600,0800,flight,lots,Delhi,Mumbai\n\
             DEL,PNQ,0600,0800,flight,3000,Delhi,Pune\n",
        );
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.invalid_rows, 2);
        assert!(!graph.is_known_destination(&code("BOM")));
        assert!(graph.is_known_destination(&code("PNQ")));
    }

    #[test]
    fn empty_file_gives_empty_graph() {
        let (graph, summary) = read("");
        assert!(graph.is_empty());
        assert_eq!(summary, LoadSummary::default());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{HEADER}BOM,BLR,2330,0130,train,800,Mumbai,Bangalore\n"
        )
        .unwrap();
        file.flush().unwrap();

        let graph = load_schedule(file.path()).unwrap();
        let legs = graph.outbound_legs(&code("BOM"));
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].duration_mins(), 120);
        assert_eq!(graph.display_name(&code("BLR")), Some("Bangalore"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_schedule(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
