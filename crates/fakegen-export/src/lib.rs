//! fakegen-export — CSV serialization of a generated series.
//!
//! This is the export collaborator boundary: failures are reported as
//! [`ExportError`] (and logged by [`export_csv_logged`]), never propagated
//! into generation state.

use fakegen_core::{Record, Series};
use std::borrow::Cow;
use std::io::Write;
use tracing::error;

/// Suggested download filename for exported series.
pub const CSV_FILENAME: &str = "data.csv";

/// Column order of the exported CSV, matching the display table.
pub const CSV_HEADER: &str = "serial,identifier,person,location,phone,error_count";

/// Export failure. Serialization into a `String` cannot fail; writer-backed
/// export surfaces the underlying I/O error.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The destination writer failed.
    #[error("csv write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the series as CSV to `out`: header row, then one row per record in
/// serial order.
pub fn write_csv<W: Write>(out: &mut W, series: &Series) -> Result<(), ExportError> {
    writeln!(out, "{CSV_HEADER}")?;
    for record in series.records() {
        write_row(out, record)?;
    }
    Ok(())
}

/// Serialize the series to an in-memory CSV string.
pub fn to_csv_string(series: &Series) -> Result<String, ExportError> {
    let mut buf = Vec::with_capacity(64 * (series.len() + 1));
    write_csv(&mut buf, series)?;
    // write_csv only ever emits UTF-8.
    Ok(String::from_utf8(buf).unwrap_or_default())
}

/// Boundary helper: serialize the series, logging and swallowing any
/// failure so the caller's state stays usable. Returns `None` on failure.
#[must_use]
pub fn export_csv_logged(series: &Series) -> Option<String> {
    match to_csv_string(series) {
        Ok(csv) => Some(csv),
        Err(err) => {
            error!(%err, "csv export failed");
            None
        }
    }
}

fn write_row<W: Write>(out: &mut W, record: &Record) -> Result<(), ExportError> {
    writeln!(
        out,
        "{},{},{},{},{},{}",
        record.serial,
        csv_escape(&record.identifier),
        csv_escape(&record.person),
        csv_escape(&record.location),
        csv_escape(&record.phone),
        record.error_count,
    )?;
    Ok(())
}

/// Minimal CSV field escaping (wraps in quotes if needed).
fn csv_escape(s: &str) -> Cow<'_, str> {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakegen_core::{GenerationParams, Session, SessionEvent};
    use fakegen_locale::Locale;
    use pretty_assertions::assert_eq;

    fn sample_series(locale: Locale) -> Series {
        let mut session = Session::new(GenerationParams::new(locale).with_seed(42)).unwrap();
        session.apply(SessionEvent::Refresh).unwrap();
        session.series().clone()
    }

    #[test]
    fn header_then_one_row_per_record() {
        let series = sample_series(Locale::EnUs);
        let csv = to_csv_string(&series).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 1 + series.len());
    }

    #[test]
    fn rows_start_with_their_serial() {
        let series = sample_series(Locale::FrFr);
        let csv = to_csv_string(&series).unwrap();
        for (i, line) in csv.lines().skip(1).enumerate() {
            let serial = line.split(',').next().unwrap();
            assert_eq!(serial, (i + 1).to_string());
        }
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        // ru_RU locations always contain commas.
        let series = sample_series(Locale::RuRu);
        let csv = to_csv_string(&series).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(",\""), "expected quoted location in {row:?}");
    }

    #[test]
    fn escaping_rules() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn empty_series_exports_header_only() {
        let series = Series::new();
        let csv = to_csv_string(&series).unwrap();
        assert_eq!(csv.trim_end(), CSV_HEADER);
    }

    #[test]
    fn logged_export_succeeds_on_valid_series() {
        let series = sample_series(Locale::EnUs);
        let csv = export_csv_logged(&series).unwrap();
        assert!(csv.starts_with(CSV_HEADER));
    }

    #[test]
    fn writer_failure_surfaces_as_io_error() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let series = sample_series(Locale::EnUs);
        let err = write_csv(&mut FailingWriter, &series).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
