//! EPUB metadata extraction
//!
//! An epub is a ZIP container whose `META-INF/container.xml` points at the
//! OPF package document, which in turn carries the Dublin Core metadata
//! elements this module reads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use zip::ZipArchive;

use crate::errors::{Result, metadata_unavailable_error};

const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Extracts the author and title from an epub file
///
/// Any failure along the way (malformed archive, missing container entry,
/// unparseable XML, absent elements) yields `(None, None)`; extraction
/// problems are never fatal to the batch.
///
/// # Arguments
/// * `path` - The path to the epub file
///
/// # Returns
/// * `(Option<String>, Option<String>)` - The author and title, when present
pub fn extract_epub_metadata(path: &Path) -> (Option<String>, Option<String>) {
    match read_package_document(path) {
        Ok(package) => dublin_core_fields(&package),
        Err(e) => {
            debug!("Could not read epub metadata: {e}");
            (None, None)
        }
    }
}

/// Reads the OPF package document out of the epub archive
///
/// # Errors
/// Returns an error if the archive cannot be opened, the container file is
/// missing or malformed, or the package document cannot be read
fn read_package_document(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| metadata_unavailable_error(path.to_path_buf(), &e.to_string()))?;

    let container = read_archive_entry(&mut archive, "META-INF/container.xml")
        .map_err(|e| metadata_unavailable_error(path.to_path_buf(), &e.to_string()))?;

    let package_path = package_document_path(&container).ok_or_else(|| {
        metadata_unavailable_error(path.to_path_buf(), "container has no rootfile entry")
    })?;

    read_archive_entry(&mut archive, &package_path)
        .map_err(|e| metadata_unavailable_error(path.to_path_buf(), &e.to_string()))
}

fn read_archive_entry(
    archive: &mut ZipArchive<File>,
    name: &str,
) -> std::result::Result<String, zip::result::ZipError> {
    let mut entry = archive.by_name(name)?;
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

/// Finds the package document path in the container XML
///
/// The first `rootfile` element's `full-path` attribute names the OPF
/// document, per the epub container specification.
pub(crate) fn package_document_path(container: &str) -> Option<String> {
    let document = roxmltree::Document::parse(container).ok()?;
    document
        .descendants()
        .find(|node| node.has_tag_name("rootfile"))?
        .attribute("full-path")
        .map(str::to_string)
}

/// Reads the `dc:creator` and `dc:title` texts from the package document
pub(crate) fn dublin_core_fields(package: &str) -> (Option<String>, Option<String>) {
    let document = match roxmltree::Document::parse(package) {
        Ok(document) => document,
        Err(e) => {
            debug!("Could not parse package document: {e}");
            return (None, None);
        }
    };

    let author = dublin_core_text(&document, "creator");
    let title = dublin_core_text(&document, "title");

    (author, title)
}

fn dublin_core_text(document: &roxmltree::Document, element: &str) -> Option<String> {
    let text = document
        .descendants()
        .find(|node| node.has_tag_name((DUBLIN_CORE_NS, element)))?
        .text()?
        .trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
