use crate::error::Result;
use crate::records::StudentRun;
use serde::Serialize;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Read student runs from any CSV source with a header row
pub fn read_runs<R: Read>(reader: R) -> Result<Vec<StudentRun>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut runs = Vec::new();
    for record in rdr.deserialize() {
        runs.push(record?);
    }
    Ok(runs)
}

pub fn read_runs_from_path(path: &Path) -> Result<Vec<StudentRun>> {
    let file = fs::File::open(path)?;
    read_runs(file)
}

/// Write `headers` followed by one record per row.
///
/// The header is written even when `rows` is empty. `headers` must list the
/// row type's fields in declaration order.
pub fn write_rows<W: Write, T: Serialize>(writer: W, headers: &[&str], rows: &[T]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows to `path`, creating parent directories as needed.
/// Returns the bytes written so callers can fingerprint the file.
pub fn write_rows_to_path<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_rows(&mut buf, headers, rows)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &buf)?;
    Ok(buf)
}

pub const CLUSTERED_RUN_HEADERS: [&str; 9] = [
    "run_id",
    "day",
    "time_window_start",
    "time_window_end",
    "student_id",
    "home_lat",
    "home_lng",
    "university_id",
    "cluster_id",
];

pub const SUMMARY_HEADERS: [&str; 8] = [
    "day",
    "time_window_start",
    "time_window_end",
    "university_id",
    "cluster_id",
    "cluster_size",
    "centroid_lat",
    "centroid_lng",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::ClusterSummary;

    const RUNS_CSV: &str = "\
run_id,day,time_window_start,time_window_end,student_id,home_lat,home_lng,university_id
Mon_08:00-09:00,Mon,08:00,09:00,S0001,40.712800,-74.006000,U01
Mon_08:00-09:00,Mon,08:00,09:00,S0002,40.7306,-73.9352,U01
";

    #[test]
    fn test_read_runs() {
        let runs = read_runs(RUNS_CSV.as_bytes()).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].student_id, "S0001");
        assert_eq!(runs[0].home_lat, "40.712800");
        assert_eq!(runs[1].university_id, "U01");
    }

    #[test]
    fn test_read_runs_accepts_generic_headers() {
        let csv = "day,time_window_start,time_window_end,destination_id,record_id,lat,lng\n\
                   Tue,07:30,08:30,U02,R9,40.1,-74.2\n";
        let runs = read_runs(csv.as_bytes()).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].run_id, "");
        assert_eq!(runs[0].student_id, "R9");
        assert_eq!(runs[0].university_id, "U02");
        assert_eq!(runs[0].home_lng, "-74.2");
    }

    #[test]
    fn test_read_runs_missing_column_fails() {
        let csv = "day,time_window_start,student_id\nMon,08:00,S1\n";
        assert!(read_runs(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_reads_nothing() {
        let csv = "run_id,day,time_window_start,time_window_end,student_id,home_lat,home_lng,university_id\n";
        assert!(read_runs(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_write_summary_rows() {
        let rows = vec![ClusterSummary {
            day: "Mon".to_string(),
            time_window_start: "08:00".to_string(),
            time_window_end: "09:00".to_string(),
            university_id: "U01".to_string(),
            cluster_id: "Mon_08:00-09:00_U01_C01".to_string(),
            cluster_size: 2,
            centroid_lat: "40.721700".to_string(),
            centroid_lng: "-73.970700".to_string(),
        }];

        let mut buf = Vec::new();
        write_rows(&mut buf, &SUMMARY_HEADERS, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "day,time_window_start,time_window_end,university_id,cluster_id,cluster_size,centroid_lat,centroid_lng\n\
             Mon,08:00,09:00,U01,Mon_08:00-09:00_U01_C01,2,40.721700,-73.970700\n"
        );
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("summary.csv");

        let rows: Vec<ClusterSummary> = Vec::new();
        let bytes = write_rows_to_path(&path, &SUMMARY_HEADERS, &rows).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
