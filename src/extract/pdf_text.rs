//! Invoice date extraction from PDF text
//!
//! The date search mirrors the layouts seen on real invoices: a day-first
//! numeric date or an ISO-style year-first one, with `.`, `/`, or `-`
//! separators.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches DD.MM.YYYY, DD/MM/YYYY, and DD-MM-YYYY dates
static DAY_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})[./\-](\d{1,2})[./\-](20\d{2})")
        .expect("Failed to compile day-first date regex")
});

/// Matches YYYY.MM.DD, YYYY/MM/DD, and YYYY-MM-DD dates
static YEAR_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(20\d{2})[./\-](\d{1,2})[./\-](\d{1,2})")
        .expect("Failed to compile year-first date regex")
});

/// Extracts the invoice date (year, month) from a PDF's text
///
/// Returns `None` when the document cannot be read, text extraction fails,
/// or no valid date appears in the text. Failures are logged and never
/// propagate; a skipped candidate must not abort the batch.
///
/// # Arguments
/// * `path` - The path to the PDF file
pub fn extract_invoice_date(path: &Path) -> Option<(i32, u32)> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Error reading {}: {e}", path.display());
            return None;
        }
    };

    // pdf-extract (via its font handling) can panic on malformed documents,
    // so the call is isolated behind catch_unwind.
    let text = match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(&bytes)))
    {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("Error reading {}: {e}", path.display());
            return None;
        }
        Err(_) => {
            warn!(
                "Error reading {}: text extraction panicked on a malformed document",
                path.display()
            );
            return None;
        }
    };

    debug!(
        "Extracted {} characters of text from {}",
        text.len(),
        path.display()
    );

    find_invoice_date(&text)
}

/// Finds the first plausible invoice date in a block of text
///
/// Day-first dates take priority over year-first ones; within a pattern the
/// first occurrence wins. A pattern whose first occurrence has an impossible
/// month does not disqualify the later patterns.
///
/// # Arguments
/// * `text` - The text to search
///
/// # Returns
/// * `Option<(i32, u32)>` - The year and month of the first valid date found
pub fn find_invoice_date(text: &str) -> Option<(i32, u32)> {
    if let Some(captures) = DAY_FIRST_RE.captures(text) {
        let year: i32 = captures[3].parse().ok()?;
        let month: u32 = captures[2].parse().ok()?;
        if (1..=12).contains(&month) {
            return Some((year, month));
        }
    }

    if let Some(captures) = YEAR_FIRST_RE.captures(text) {
        let year: i32 = captures[1].parse().ok()?;
        let month: u32 = captures[2].parse().ok()?;
        if (1..=12).contains(&month) {
            return Some((year, month));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_day_first_date() {
        let text = "Invoice\nDate: 15.03.2024\nAmount due: 120,00";
        assert_eq!(find_invoice_date(text), Some((2024, 3)));

        // Slash and hyphen separators work the same way
        assert_eq!(find_invoice_date("issued 01/12/2023"), Some((2023, 12)));
        assert_eq!(find_invoice_date("issued 7-4-2022"), Some((2022, 4)));
    }

    #[test]
    fn test_find_year_first_date() {
        let text = "Rechnungsdatum 2024.03.15";
        assert_eq!(find_invoice_date(text), Some((2024, 3)));
    }

    #[test]
    fn test_day_first_takes_priority() {
        // Both formats present: the day-first pattern wins regardless of position
        let text = "period 2023.01.01 paid 15.06.2024";
        assert_eq!(find_invoice_date(text), Some((2024, 6)));
    }

    #[test]
    fn test_invalid_month_falls_through_to_next_pattern() {
        // 13 is not a month, so the day-first candidate is discarded and the
        // year-first one is used instead
        let text = "ref 01.13.2024 issued 2024.05.02";
        assert_eq!(find_invoice_date(text), Some((2024, 5)));
    }

    #[test]
    fn test_no_date_found() {
        assert_eq!(find_invoice_date("no dates here"), None);
        assert_eq!(find_invoice_date(""), None);

        // Years outside 20xx are not invoice dates
        assert_eq!(find_invoice_date("15.03.1998"), None);
    }

    #[test]
    fn test_extract_invoice_date_unreadable_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = temp_dir.path().join("broken.pdf");
        std::fs::write(&path, "not a pdf").unwrap();

        assert_eq!(extract_invoice_date(&path), None);
    }

    #[test]
    fn test_extract_invoice_date_missing_file() {
        let path = Path::new("/definitely/missing/file.pdf");
        assert_eq!(extract_invoice_date(path), None);
    }
}
