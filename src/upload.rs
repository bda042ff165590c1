//! Local checks on spreadsheets before they are uploaded.

use crate::error::UploadError;

/// MIME type of `.xlsx` workbooks.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type of legacy `.xls` workbooks.
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// Whether a file looks like an Excel workbook.
///
/// A recognised MIME type is enough; without one, the name must end in
/// `.xlsx` (case-insensitive).
pub fn is_excel(filename: &str, content_type: Option<&str>) -> bool {
    if matches!(content_type, Some(XLSX_MIME) | Some(XLS_MIME)) {
        return true;
    }
    filename.to_lowercase().ends_with(".xlsx")
}

/// MIME type implied by a workbook's extension; `None` for anything else.
pub fn mime_for(filename: &str) -> Option<&'static str> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".xlsx") {
        Some(XLSX_MIME)
    } else if lower.ends_with(".xls") {
        Some(XLS_MIME)
    } else {
        None
    }
}

/// Check a file selected for upload.
///
/// Returns every problem found (wrong type and too large can both apply);
/// an empty vector means the file may be sent.
pub fn check_file(
    filename: &str,
    content_type: Option<&str>,
    size: u64,
    max_size: u64,
) -> Vec<UploadError> {
    let mut problems = Vec::new();
    if !is_excel(filename, content_type) {
        problems.push(UploadError::InvalidFileType);
    }
    if size > max_size {
        problems.push(UploadError::FileTooLarge {
            max: format_file_size(max_size),
        });
    }
    if !problems.is_empty() {
        tracing::debug!("Rejected {}: {} problem(s)", filename, problems.len());
    }
    problems
}

/// Human-readable size: `0 Bytes`, `1.5 KB`, `32 MB`.
///
/// Powers of 1024, at most two decimals, trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    #[test]
    fn test_is_excel() {
        assert!(is_excel("clientes.xlsx", None));
        assert!(is_excel("CLIENTES.XLSX", None));
        assert!(is_excel("export", Some(XLSX_MIME)));
        assert!(is_excel("viejo.xls", Some(XLS_MIME)));
        // Legacy extension alone is not enough
        assert!(!is_excel("viejo.xls", None));
        assert!(!is_excel("clientes.csv", Some("text/csv")));
    }

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("a.xls"), Some(XLS_MIME));
        assert_eq!(mime_for("A.XLS"), Some(XLS_MIME));
        assert_eq!(mime_for("a.xlsx"), Some(XLSX_MIME));
        assert_eq!(mime_for("a.csv"), None);
    }

    #[test]
    fn test_legacy_workbook_accepted_by_extension() {
        assert!(check_file("viejo.xls", mime_for("viejo.xls"), 10, 100).is_empty());
        assert_eq!(check_file("datos.csv", mime_for("datos.csv"), 10, 100).len(), 1);
    }

    #[test]
    fn test_check_file_accepts_workbook() {
        assert!(check_file("clientes.xlsx", None, 2048, DEFAULT_MAX_UPLOAD_BYTES).is_empty());
    }

    #[test]
    fn test_check_file_reports_all_problems() {
        let problems = check_file("clientes.pdf", None, DEFAULT_MAX_UPLOAD_BYTES + 1, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(problems.len(), 2);
        assert!(matches!(problems[0], UploadError::InvalidFileType));
        assert_eq!(
            problems[1].to_string(),
            "El archivo es demasiado grande. Máximo 32 MB"
        );
    }

    #[test]
    fn test_check_file_size_boundary() {
        assert!(check_file("a.xlsx", None, 100, 100).is_empty());
        assert_eq!(check_file("a.xlsx", None, 101, 100).len(), 1);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(32 * 1024 * 1024), "32 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3072 GB");
    }
}
