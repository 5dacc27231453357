//! Normalized fiscal document model.

use serde::{Deserialize, Serialize};

/// The two mutually exclusive document schemas the analyzer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// NF-e: electronic goods invoice, carries line items.
    Nfe,
    /// CT-e: electronic freight transport manifest, header fields only.
    Cte,
}

impl DocumentType {
    /// Literal type prefix embedded in the document's `Id` attribute.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            DocumentType::Nfe => "NFe",
            DocumentType::Cte => "CTe",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Nfe => "NF-e",
            DocumentType::Cte => "CT-e",
        }
    }
}

/// A parsed fiscal document.
///
/// Built fresh per input and never partially populated: the parser either
/// returns a complete record or an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalDocument {
    /// Recognized document schema.
    pub doc_type: DocumentType,

    /// Issuer legal name.
    pub issuer: String,

    /// Recipient legal name.
    pub recipient: String,

    /// 44-digit access key, type prefix already stripped.
    pub access_key: String,

    /// Line items in source order; always empty for CT-e documents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,
}

/// A single `det` line item from an NF-e document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Order marker from the `nItem` attribute, unique within the document.
    pub item_index: String,

    /// Product description.
    pub description: String,

    /// 8-digit NCM commodity classification code.
    pub ncm: String,

    /// CEST tax-segment code; the "not informed" sentinel when the document
    /// omits it.
    pub cest: String,

    /// 4-digit CFOP transaction-nature code.
    pub cfop: String,

    /// ICMS rate as found in the tax block ("0%" when no rate block present).
    pub icms_rate: String,

    /// Whether the optional ICMSST sub-block is present.
    pub tax_substitution: bool,

    /// Whether the CFOP marks single-stage taxation.
    pub single_stage: bool,

    /// Classification lookup outcome; `None` until the validator runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cest_validated: Option<bool>,
}

impl LineItem {
    /// Two-valued label used for boolean columns in exports.
    pub fn flag_label(value: bool) -> &'static str {
        if value { "yes" } else { "no" }
    }

    /// Label for the validation column. A negative result means "needs
    /// manual review", not "confirmed invalid".
    pub fn validation_label(&self) -> &'static str {
        match self.cest_validated {
            Some(true) => "valid",
            Some(false) => "review",
            None => "pending",
        }
    }
}
