use file_rename::extract::split_dated_stem;
use file_rename::naming::{dated_invoice_filename, format_invoice_number, sanitize_filename};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_formatting_idempotent() {
        // Applying the formatting twice equals applying it once
        let inputs = ["INV 123/45", "2024 / 001", "already-clean", "  1 / 2 / 3"];
        for input in inputs {
            let once = format_invoice_number(input);
            let twice = format_invoice_number(&once);
            assert_eq!(once, twice, "Formatting '{input}' twice changed the result");
        }
    }

    #[test]
    fn test_sanitize_strips_all_invalid_characters() {
        let sanitized = sanitize_filename("a<b>c:d\"e/f\\g|h?i*j.pdf");
        assert_eq!(sanitized, "abcdefghij.pdf");

        // Sanitizing is idempotent as well
        assert_eq!(sanitize_filename(&sanitized), sanitized);
    }

    #[test]
    fn test_split_and_synthesize_recovers_components() {
        // Rejoining with underscores keeps the name intact even when it
        // contains the ' - ' separator itself
        let parsed = split_dated_stem("2023-07-01 - Müller - Sohn GmbH - RE 2023/441").unwrap();
        assert_eq!(parsed.name, "Müller - Sohn GmbH");
        assert_eq!(parsed.invoice_number, "RE 2023/441");

        let filename = dated_invoice_filename(&parsed, false);
        assert_eq!(filename, "2023-07-01_Müller - Sohn GmbH_RE2023-441.pdf");
    }

    #[test]
    fn test_end_to_end_example_plain() {
        let parsed = split_dated_stem("2024-03-15 - Acme Corp - INV 123/45").unwrap();
        assert_eq!(
            dated_invoice_filename(&parsed, false),
            "2024-03-15_Acme Corp_INV123-45.pdf"
        );
    }

    #[test]
    fn test_end_to_end_example_normalized() {
        let parsed = split_dated_stem("2024-03-15 - Acme Corp - INV 123/45").unwrap();
        assert_eq!(
            dated_invoice_filename(&parsed, true),
            "2024-03-15_acme-corp_inv-123-45.pdf"
        );
    }
}
