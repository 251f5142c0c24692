//! Delimited fixture file writer

use std::path::Path;

use crate::entities::Record;

/// Write a header row plus one row per record to `path`.
///
/// Rows are projected onto `field_order`: record fields outside the
/// order are dropped, fields the record lacks are written empty. The
/// parent directory must already exist; an existing file is
/// overwritten.
pub fn write_fixture(
    path: &Path,
    field_order: &[&str],
    records: &[Record],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(field_order)?;
    for record in records {
        writer.write_record(field_order.iter().map(|f| record.field(f).unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn writes_header_and_rows_in_field_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let records = vec![
            Record::new().set("a", "1").set("b", "2"),
            Record::new().set("b", "4").set("a", "3"),
        ];
        write_fixture(&path, &["a", "b"], &records).unwrap();
        assert_eq!(read_lines(&path), vec!["a,b", "1,2", "3,4"]);
    }

    #[test]
    fn extra_record_fields_are_dropped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let records = vec![Record::new().set("a", "1").set("b", "2").set("c", "3")];
        write_fixture(&path, &["a", "b"], &records).unwrap();
        assert_eq!(read_lines(&path), vec!["a,b", "1,2"]);
    }

    #[test]
    fn missing_fields_render_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let records = vec![Record::new().set("a", "1")];
        write_fixture(&path, &["a", "b"], &records).unwrap();
        assert_eq!(read_lines(&path), vec!["a,b", "1,"]);
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let records = vec![Record::new().set("tags", "mechanical,critical")];
        write_fixture(&path, &["tags"], &records).unwrap();
        assert_eq!(read_lines(&path), vec!["tags", "\"mechanical,critical\""]);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("out.csv");
        assert!(write_fixture(&path, &["a"], &[]).is_err());
    }

    #[test]
    fn overwrites_an_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        fs::write(&path, "stale").unwrap();
        write_fixture(&path, &["a"], &[Record::new().set("a", "1")]).unwrap();
        assert_eq!(read_lines(&path), vec!["a", "1"]);
    }
}
