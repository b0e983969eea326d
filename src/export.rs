use crate::reference::entries;
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

/// Writes the registry as CSV (`code,iban_length,sepa`) in code order and returns the
/// number of data rows.
pub fn write_registry_csv<W: Write>(writer: W, sepa_only: bool) -> Result<usize, String> {
    let mut writer = csv::Writer::from_writer(writer);
    let mut rows = 0usize;
    for entry in entries().filter(|entry| entry.sepa || !sepa_only) {
        writer.serialize(entry).map_err(|err| err.to_string())?;
        rows += 1;
    }
    writer.flush().map_err(|err| err.to_string())?;
    log::debug!("wrote {} registry rows (sepa_only={})", rows, sepa_only);
    Ok(rows)
}

/// Like [`write_registry_csv`], writing to `path` and creating its parent directories.
pub fn write_registry_csv_file(path: &Path, sepa_only: bool) -> Result<usize, String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|err| err.to_string())?;
        }
    }
    let file = File::create(path).map_err(|err| err.to_string())?;
    write_registry_csv(file, sepa_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{known_country_codes, COUNTRY_COUNT};

    fn render(sepa_only: bool) -> (usize, String) {
        let mut out = Vec::new();
        let rows = write_registry_csv(&mut out, sepa_only).unwrap();
        (rows, String::from_utf8(out).unwrap())
    }

    #[test]
    fn full_export_has_header_and_every_code() {
        let (rows, text) = render(false);
        assert_eq!(rows, COUNTRY_COUNT);

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("code,iban_length,sepa"));
        let codes: Vec<&str> = lines
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(codes, known_country_codes());
    }

    #[test]
    fn export_rows_carry_metadata() {
        let (_, text) = render(false);
        assert!(text.lines().any(|line| line == "DE,22,true"));
        assert!(text.lines().any(|line| line == "BR,29,false"));
    }

    #[test]
    fn sepa_only_export_skips_non_sepa() {
        let (rows, text) = render(true);
        assert_eq!(rows, 34);
        assert!(text.lines().skip(1).all(|line| line.ends_with(",true")));
        assert!(!text.contains("BR,"));
    }

    #[test]
    fn file_export_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("iban-export-{}", std::process::id()));
        let path = dir.join("nested").join("countries.csv");
        let rows = write_registry_csv_file(&path, false).unwrap();
        assert_eq!(rows, COUNTRY_COUNT);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), COUNTRY_COUNT + 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
