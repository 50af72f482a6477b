//! Bureau Report - Extract a flat credit report from Experian XML.
//!
//! This crate turns an Experian `INProfileResponse` document into a single
//! [`ExtractedReport`] ready for storage and display. The XML is first parsed
//! into a generic tree where every child collection is a sequence, then the
//! extractor walks that tree applying defaults, coercion and fallbacks.
//!
//! # Example
//!
//! ```
//! use bureau_report::parse_report;
//!
//! let xml = r#"<INProfileResponse>
//!   <Current_Application><Current_Application_Details><Current_Applicant_Details>
//!     <First_Name> Jane </First_Name><Last_Name>Doe</Last_Name>
//!   </Current_Applicant_Details></Current_Application_Details></Current_Application>
//!   <SCORE><BureauScore>742</BureauScore></SCORE>
//! </INProfileResponse>"#;
//!
//! let report = parse_report(xml).unwrap();
//! assert_eq!(report.name, "Jane Doe");
//! assert_eq!(report.credit_score, 742);
//! assert!(report.credit_accounts.is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`tree`]: XML to generic tree conversion
//! - [`coerce`]: Lenient integer and decimal parsing
//! - [`schema`]: Source field paths and their defaults
//! - [`extract`]: Report extraction
//! - [`types`]: Output data types
//! - [`error`]: Error types and Result alias
//! - [`config`]: Configuration constants
//! - [`intake`]: Upload validation and file reading
//! - [`output`]: JSON and YAML rendering
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod coerce;
pub mod config;
pub mod error;
pub mod extract;
pub mod intake;
pub mod output;
pub mod schema;
pub mod tree;
pub mod types;

// Re-export main functions
pub use extract::{extract, parse_report};
pub use tree::parse_document;

// Re-export commonly used items
pub use error::{ReportError, Result};
pub use types::{Address, CreditAccount, ExtractedReport, ReportSummary};
