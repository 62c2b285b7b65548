//! Target filename templates
//!
//! One function per naming convention. Each one runs its result through
//! `sanitize_filename` so no invalid character survives, whatever the
//! metadata contained.

use crate::extract::DatedInvoiceStem;

use super::sanitize::{format_invoice_number, normalize_component, sanitize_filename};

/// Builds the `"{author} - {title}.epub"` filename
pub fn epub_filename(author: &str, title: &str) -> String {
    sanitize_filename(&format!("{author} - {title}.epub"))
}

/// Builds the `"{yyyy}-{mm} {company} {invoice_no}.pdf"` filename
///
/// The month is zero-padded and the invoice number gets the shared
/// whitespace-strip and `/`-to-`-` treatment.
pub fn monthly_invoice_filename(year: i32, month: u32, company: &str, invoice_number: &str) -> String {
    let invoice_number = format_invoice_number(invoice_number);
    sanitize_filename(&format!("{year}-{month:02} {company} {invoice_number}.pdf"))
}

/// Builds the `"{yyyy-mm-dd}_{name}_{invoice_no}.pdf"` filename
///
/// With `normalize` set, the name and invoice number are lowercased and
/// their whitespace runs become single hyphens before the invoice-number
/// formatting is applied.
pub fn dated_invoice_filename(parsed: &DatedInvoiceStem, normalize: bool) -> String {
    let (name, invoice_number) = if normalize {
        (
            normalize_component(&parsed.name),
            format_invoice_number(&normalize_component(&parsed.invoice_number)),
        )
    } else {
        (
            parsed.name.clone(),
            format_invoice_number(&parsed.invoice_number),
        )
    };

    sanitize_filename(&format!("{}_{}_{}.pdf", parsed.date, name, invoice_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_stem(date: &str, name: &str, invoice_number: &str) -> DatedInvoiceStem {
        DatedInvoiceStem {
            date: date.to_string(),
            name: name.to_string(),
            invoice_number: invoice_number.to_string(),
        }
    }

    #[test]
    fn test_epub_filename() {
        assert_eq!(
            epub_filename("Frank Herbert", "Dune"),
            "Frank Herbert - Dune.epub"
        );

        // Invalid characters from the metadata never reach the filesystem
        assert_eq!(
            epub_filename("A: Writer", "Odd/Title?"),
            "A Writer - OddTitle.epub"
        );
    }

    #[test]
    fn test_monthly_invoice_filename() {
        assert_eq!(
            monthly_invoice_filename(2024, 3, "Acme", "INV 12/3"),
            "2024-03 Acme INV12-3.pdf"
        );

        // Months past September keep their two digits
        assert_eq!(
            monthly_invoice_filename(2023, 11, "Utility", "7"),
            "2023-11 Utility 7.pdf"
        );
    }

    #[test]
    fn test_dated_invoice_filename() {
        let parsed = parsed_stem("2024-03-15", "Acme Corp", "INV 123/45");
        assert_eq!(
            dated_invoice_filename(&parsed, false),
            "2024-03-15_Acme Corp_INV123-45.pdf"
        );
    }

    #[test]
    fn test_dated_invoice_filename_normalized() {
        let parsed = parsed_stem("2024-03-15", "Acme Corp", "INV 123/45");
        assert_eq!(
            dated_invoice_filename(&parsed, true),
            "2024-03-15_acme-corp_inv-123-45.pdf"
        );
    }
}
