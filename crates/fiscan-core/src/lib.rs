//! Core library for fiscal XML document analysis.
//!
//! This crate provides:
//! - NF-e / CT-e document recognition and field extraction
//! - NCM/CEST classification lookup against the registry service
//! - Spreadsheet (CSV) and PDF report export

pub mod document;
pub mod error;
pub mod export;
pub mod models;
pub mod validator;
pub mod xml;

pub use document::parse;
pub use error::{ExportError, FiscanError, ParseError, Result};
pub use export::{to_report, to_spreadsheet};
pub use models::config::{FiscanConfig, LookupConfig};
pub use models::document::{DocumentType, FiscalDocument, LineItem};
pub use validator::CestValidator;
