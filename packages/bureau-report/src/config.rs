//! Configuration constants for report extraction and intake.

/// Wrapper element of an Experian profile response.
pub const WRAPPER_TAG: &str = "INProfileResponse";

/// Media type accepted for uploads.
pub const XML_MEDIA_TYPE: &str = "text/xml";

/// File name suffix accepted for uploads.
pub const XML_EXTENSION: &str = ".xml";

/// Default maximum upload size in bytes (10 MB).
///
/// Can be overridden via the CLI `--max-size` flag.
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// Name reported when the applicant block yields no usable name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Separator between address-line fragments.
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Number of address-line fragments read from a holder address block.
pub const ADDRESS_LINE_COUNT: usize = 3;

/// Deepest element nesting accepted before parsing.
///
/// Experian responses nest about six levels deep.
pub const MAX_NESTING_DEPTH: usize = 256;
