//! Name synthesis module
//!
//! This module assembles and sanitizes the target filename for each
//! renaming convention.

mod sanitize;
mod template;

pub use sanitize::{format_invoice_number, normalize_component, sanitize_filename};
pub use template::{dated_invoice_filename, epub_filename, monthly_invoice_filename};
