//! Metadata and pattern extraction module
//!
//! This module contains the per-variant extractors that derive the
//! components of a new filename from file content, file timestamps,
//! or the existing filename.

mod epub;
mod file_time;
mod pdf_text;
mod stem;

pub use epub::extract_epub_metadata;
pub use file_time::file_date;
pub use pdf_text::{extract_invoice_date, find_invoice_date};
pub use stem::{CompanyInvoice, DatedInvoiceStem, split_company_invoice, split_dated_stem};
