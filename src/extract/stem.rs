//! Pattern extraction from existing filenames
//!
//! Two stem layouts are understood here: `company invoice_no`, where the
//! first word is the company, and the fully dated
//! `YYYY-MM-DD - name - invoice_no` layout.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, pattern_mismatch_error};

/// Separator between the name and the invoice number in dated stems
const NAME_SEPARATOR: &str = " - ";

/// Matches a stem that starts with an ISO date followed by a dash separator
static DATED_STEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})\s*-\s*(.+)$").expect("Failed to compile dated stem regex")
});

/// Company and invoice number taken from a `company invoice_no` stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInvoice {
    /// The company name, the first word of the stem
    pub company: String,
    /// The invoice number, everything after the first word
    pub invoice_number: String,
}

/// Components of a `YYYY-MM-DD - name - invoice_no` stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedInvoiceStem {
    /// The ISO date prefix
    pub date: String,
    /// The name between the date and the invoice number
    pub name: String,
    /// The trailing invoice number
    pub invoice_number: String,
}

/// Splits a stem into company name and invoice number
///
/// The first whitespace-separated word is the company; the rest of the stem
/// is the invoice number.
///
/// # Arguments
/// * `stem` - The filename without its extension
///
/// # Errors
/// Returns an error if the stem has fewer than two words
pub fn split_company_invoice(stem: &str) -> Result<CompanyInvoice> {
    let trimmed = stem.trim();
    let boundary = trimmed
        .find(char::is_whitespace)
        .ok_or_else(|| pattern_mismatch_error(stem, "expected 'company invoice_no'"))?;

    let company = trimmed[..boundary].to_string();
    let invoice_number = trimmed[boundary..].trim_start().to_string();

    if invoice_number.is_empty() {
        return Err(pattern_mismatch_error(stem, "expected 'company invoice_no'"));
    }

    Ok(CompanyInvoice {
        company,
        invoice_number,
    })
}

/// Splits a `YYYY-MM-DD - name - invoice_no` stem into its components
///
/// The remainder after the date is split at its *last* `" - "`, so a name
/// that itself contains the separator stays intact and only the trailing
/// component becomes the invoice number.
///
/// # Arguments
/// * `stem` - The filename without its extension
///
/// # Errors
/// Returns an error if the stem has no date prefix or no second separator
pub fn split_dated_stem(stem: &str) -> Result<DatedInvoiceStem> {
    let captures = DATED_STEM_RE
        .captures(stem)
        .ok_or_else(|| pattern_mismatch_error(stem, "expected 'YYYY-MM-DD - name - invoice_no'"))?;

    let date = captures[1].to_string();
    let remainder = &captures[2];

    let separator_index = remainder.rfind(NAME_SEPARATOR).ok_or_else(|| {
        pattern_mismatch_error(stem, "expected 'YYYY-MM-DD - name - invoice_no'")
    })?;

    let name = remainder[..separator_index].trim().to_string();
    let invoice_number = remainder[separator_index + NAME_SEPARATOR.len()..]
        .trim()
        .to_string();

    Ok(DatedInvoiceStem {
        date,
        name,
        invoice_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_company_invoice() {
        let fields = split_company_invoice("Acme 2024-001").unwrap();
        assert_eq!(fields.company, "Acme");
        assert_eq!(fields.invoice_number, "2024-001");

        // Everything after the first word belongs to the invoice number
        let fields = split_company_invoice("Utility Co 2024/03").unwrap();
        assert_eq!(fields.company, "Utility");
        assert_eq!(fields.invoice_number, "Co 2024/03");
    }

    #[test]
    fn test_split_company_invoice_single_word() {
        assert!(split_company_invoice("Acme").is_err());
        assert!(split_company_invoice("Acme   ").is_err());
        assert!(split_company_invoice("").is_err());
    }

    #[test]
    fn test_split_dated_stem() {
        let parsed = split_dated_stem("2024-03-15 - Acme Corp - INV 123/45").unwrap();
        assert_eq!(parsed.date, "2024-03-15");
        assert_eq!(parsed.name, "Acme Corp");
        assert_eq!(parsed.invoice_number, "INV 123/45");
    }

    #[test]
    fn test_split_dated_stem_name_contains_separator() {
        // Only the last ' - ' separates the invoice number; the name keeps
        // its own internal separator
        let parsed = split_dated_stem("2024-01-02 - Smith - Jones Ltd - 42").unwrap();
        assert_eq!(parsed.name, "Smith - Jones Ltd");
        assert_eq!(parsed.invoice_number, "42");
    }

    #[test]
    fn test_split_dated_stem_tight_date_separator() {
        // The separator after the date tolerates missing surrounding spaces
        let parsed = split_dated_stem("2024-03-15- Acme - 7").unwrap();
        assert_eq!(parsed.date, "2024-03-15");
        assert_eq!(parsed.name, "Acme");
        assert_eq!(parsed.invoice_number, "7");
    }

    #[test]
    fn test_split_dated_stem_mismatches() {
        // No date prefix
        assert!(split_dated_stem("Acme - 42").is_err());
        // Date but no second separator
        assert!(split_dated_stem("2024-03-15 - AcmeOnly").is_err());
        // Empty stem
        assert!(split_dated_stem("").is_err());
    }
}
