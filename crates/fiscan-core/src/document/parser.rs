//! Fiscal document parser: raw XML bytes to a normalized record.
//!
//! Two stages: decode the bytes into a generic DOM, then materialize a
//! statically shaped [`FiscalDocument`] field by field with explicit presence
//! checks. Extraction is all-or-nothing per document.

use roxmltree::{Document, Node};
use tracing::{debug, info};

use crate::error::ParseError;
use crate::models::document::{DocumentType, FiscalDocument, LineItem};
use crate::xml::{find_by_path, find_child, find_children, get_attribute, get_tag_name, get_text};

use super::rules::cest::CEST_NOT_INFORMED;
use super::rules::cfop::is_single_stage;

/// Rate used when neither ICMS regime sub-block is present.
const DEFAULT_ICMS_RATE: &str = "0%";

/// The two mutually exclusive ICMS regime sub-blocks that carry a rate,
/// probed in order.
const ICMS_RATE_BLOCKS: [&str; 2] = ["ICMS00", "ICMS20"];

/// Parse a fiscal XML document into a normalized record.
///
/// Recognizes the NF-e and CT-e wrappers; any other root, malformed markup,
/// undecodable bytes, or missing required structure yields a [`ParseError`]
/// and no partial record.
pub fn parse(raw: &[u8]) -> Result<FiscalDocument, ParseError> {
    let text = std::str::from_utf8(raw)?;
    let dom = Document::parse(text)?;
    let root = dom.root_element();

    info!(bytes = raw.len(), root = get_tag_name(root), "parsing fiscal document");

    match get_tag_name(root) {
        "nfeProc" => parse_nfe(root),
        "cteProc" => parse_cte(root),
        other => Err(ParseError::UnrecognizedDocument(other.to_string())),
    }
}

fn parse_nfe(root: Node) -> Result<FiscalDocument, ParseError> {
    let inf = find_by_path(root, "NFe/infNFe").ok_or_else(|| ParseError::MissingElement {
        element: "NFe/infNFe".to_string(),
        context: "nfeProc".to_string(),
    })?;

    let issuer = required_text(inf, "emit/xNome", "infNFe")?;
    let recipient = required_text(inf, "dest/xNome", "infNFe")?;
    let access_key = strip_key_prefix(required_attr(inf, "Id")?, DocumentType::Nfe);

    let mut items = Vec::new();
    for det in find_children(inf, "det") {
        items.push(parse_line_item(det)?);
    }

    debug!(items = items.len(), "extracted NF-e record");

    Ok(FiscalDocument {
        doc_type: DocumentType::Nfe,
        issuer,
        recipient,
        access_key,
        items,
    })
}

fn parse_cte(root: Node) -> Result<FiscalDocument, ParseError> {
    let inf = find_by_path(root, "CTe/infCte").ok_or_else(|| ParseError::MissingElement {
        element: "CTe/infCte".to_string(),
        context: "cteProc".to_string(),
    })?;

    // CT-e carries no commodity-level detail in this tool's scope.
    Ok(FiscalDocument {
        doc_type: DocumentType::Cte,
        issuer: required_text(inf, "emit/xNome", "infCte")?,
        recipient: required_text(inf, "dest/xNome", "infCte")?,
        access_key: strip_key_prefix(required_attr(inf, "Id")?, DocumentType::Cte),
        items: Vec::new(),
    })
}

fn parse_line_item(det: Node) -> Result<LineItem, ParseError> {
    let item_index = required_attr(det, "nItem")?.to_string();

    let prod = find_child(det, "prod").ok_or_else(|| ParseError::MissingElement {
        element: "prod".to_string(),
        context: format!("det {item_index}"),
    })?;

    let description = required_text(prod, "xProd", "prod")?;
    let ncm = required_text(prod, "NCM", "prod")?;
    let cfop = required_text(prod, "CFOP", "prod")?;

    // Optional by format; the sentinel keeps "omitted" distinct from an
    // empty value.
    let cest = find_child(prod, "CEST")
        .map(get_text)
        .unwrap_or_else(|| CEST_NOT_INFORMED.to_string());

    let icms = find_by_path(det, "imposto/ICMS").ok_or_else(|| ParseError::MissingElement {
        element: "imposto/ICMS".to_string(),
        context: format!("det {item_index}"),
    })?;

    // Closed variant: try ICMS00, else ICMS20, else the default rate.
    let icms_rate = ICMS_RATE_BLOCKS
        .iter()
        .find_map(|tag| find_child(icms, tag))
        .and_then(|block| find_child(block, "pICMS"))
        .map(get_text)
        .unwrap_or_else(|| DEFAULT_ICMS_RATE.to_string());

    let tax_substitution = find_child(icms, "ICMSST").is_some();
    let single_stage = is_single_stage(&cfop);

    Ok(LineItem {
        item_index,
        description,
        ncm,
        cest,
        cfop,
        icms_rate,
        tax_substitution,
        single_stage,
        cest_validated: None,
    })
}

/// Remove the literal type prefix wherever it occurs, not just at the start.
/// Some producers embed it mid-string; unanchored removal tolerates them.
fn strip_key_prefix(id: &str, doc_type: DocumentType) -> String {
    id.replace(doc_type.key_prefix(), "")
}

fn required_text(parent: Node, path: &str, context: &str) -> Result<String, ParseError> {
    find_by_path(parent, path)
        .map(get_text)
        .ok_or_else(|| ParseError::MissingElement {
            element: path.to_string(),
            context: context.to_string(),
        })
}

fn required_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str, ParseError> {
    get_attribute(node, name).ok_or_else(|| ParseError::MissingAttribute {
        attribute: name.to_string(),
        element: get_tag_name(node).to_string(),
    })
}
