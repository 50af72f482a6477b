//! Reading uploaded bureau documents from disk.
//!
//! Uploads are accepted when they claim the `text/xml` media type or carry
//! an `.xml` file name, and when they fit within the size limit.

use std::fs;
use std::path::Path;

use crate::config::{XML_EXTENSION, XML_MEDIA_TYPE};
use crate::error::{ReportError, Result};

/// Check an upload's claimed type and size before reading it.
///
/// # Errors
/// `UnsupportedMediaType` when neither the media type nor the file name
/// marks the upload as XML, `PayloadTooLarge` when `size` exceeds `max_size`.
///
/// # Examples
/// ```
/// use bureau_report::intake::validate_upload;
///
/// assert!(validate_upload("report.xml", None, 100, 1024).is_ok());
/// assert!(validate_upload("report", Some("text/xml"), 100, 1024).is_ok());
/// assert!(validate_upload("report.pdf", None, 100, 1024).is_err());
/// assert!(validate_upload("report.xml", None, 2048, 1024).is_err());
/// ```
pub fn validate_upload(
    file_name: &str,
    media_type: Option<&str>,
    size: u64,
    max_size: u64,
) -> Result<()> {
    let is_xml = media_type == Some(XML_MEDIA_TYPE) || file_name.ends_with(XML_EXTENSION);
    if !is_xml {
        return Err(ReportError::UnsupportedMediaType(file_name.to_string()));
    }

    if size > max_size {
        return Err(ReportError::PayloadTooLarge {
            size,
            max: max_size,
        });
    }

    Ok(())
}

/// Validate and read an XML document from disk.
///
/// # Arguments
/// * `path` - Path to the uploaded file
/// * `max_size` - Maximum accepted file size in bytes
///
/// # Returns
/// The document text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(path: &Path, max_size: u64) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let size = fs::metadata(path)?.len();

    validate_upload(&file_name, None, size, max_size)?;

    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read document");
    Ok(bytes_to_string(&bytes, &file_name))
}

/// Convert bytes to a string, warning when the input is not valid UTF-8.
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(
                context,
                "Document is not valid UTF-8, invalid sequences were replaced"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
