//! Error types for the fiscan-core library.

use thiserror::Error;

/// Main error type for the fiscan library.
#[derive(Error, Debug)]
pub enum FiscanError {
    /// Document recognition or extraction error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Export serialization error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// HTTP client error.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while recognizing and extracting a fiscal document.
///
/// Extraction is all-or-nothing per document: any variant here means no
/// partial record was produced.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input bytes are not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The markup is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Neither of the two known root wrappers is present.
    #[error("unrecognized document: expected an nfeProc or cteProc root, found <{0}>")]
    UnrecognizedDocument(String),

    /// A required element is missing.
    #[error("missing required element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// A required attribute is missing.
    #[error("missing required attribute: {attribute} on <{element}>")]
    MissingAttribute { attribute: String, element: String },
}

/// Errors raised during a classification lookup.
///
/// These never escape the validator: every variant degrades to a negative
/// validation result and is only surfaced through the log.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Request failed (connect error, timeout, or undecodable body).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned status {0}")]
    Status(u16),
}

/// Errors raised while serializing an export artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// The in-memory output buffer could not be recovered.
    #[error("output buffer error: {0}")]
    Buffer(String),

    /// PDF generation failed.
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Result type for the fiscan library.
pub type Result<T> = std::result::Result<T, FiscanError>;
