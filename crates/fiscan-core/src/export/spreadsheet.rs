//! Spreadsheet (CSV) export.

use crate::error::ExportError;
use crate::models::document::{FiscalDocument, LineItem};

/// Fixed column set, one per line-item field.
const HEADER: [&str; 9] = [
    "item",
    "description",
    "ncm",
    "cest",
    "cfop",
    "icms_rate",
    "tax_substitution",
    "single_stage",
    "cest_validated",
];

/// Serialize the line-item table as CSV bytes: one header row, one data row
/// per item, in source order.
///
/// Writes into a scratch buffer and hands the bytes over whole; on error no
/// partial artifact is returned.
pub fn to_spreadsheet(doc: &FiscalDocument) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(HEADER)?;
    for item in &doc.items {
        wtr.write_record([
            item.item_index.as_str(),
            item.description.as_str(),
            item.ncm.as_str(),
            item.cest.as_str(),
            item.cfop.as_str(),
            item.icms_rate.as_str(),
            LineItem::flag_label(item.tax_substitution),
            LineItem::flag_label(item.single_stage),
            item.validation_label(),
        ])?;
    }

    wtr.into_inner().map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentType;
    use pretty_assertions::assert_eq;

    fn document(items: Vec<LineItem>) -> FiscalDocument {
        FiscalDocument {
            doc_type: DocumentType::Nfe,
            issuer: "ACME Industria Ltda".to_string(),
            recipient: "Comercio Varejista SA".to_string(),
            access_key: "35200714200166000187550010000000046550000046".to_string(),
            items,
        }
    }

    fn item(index: &str, validated: Option<bool>) -> LineItem {
        LineItem {
            item_index: index.to_string(),
            description: "Oleo lubrificante".to_string(),
            ncm: "27101932".to_string(),
            cest: "06.001.00".to_string(),
            cfop: "5933".to_string(),
            icms_rate: "18.00".to_string(),
            tax_substitution: true,
            single_stage: true,
            cest_validated: validated,
        }
    }

    #[test]
    fn test_header_plus_one_row_per_item() {
        let doc = document(vec![item("1", Some(true)), item("2", None), item("3", Some(false))]);
        let bytes = to_spreadsheet(&doc).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER.join(","));
    }

    #[test]
    fn test_row_values_match_fields() {
        let doc = document(vec![item("1", Some(true))]);
        let text = String::from_utf8(to_spreadsheet(&doc).unwrap()).unwrap();

        assert_eq!(
            text.lines().nth(1).unwrap(),
            "1,Oleo lubrificante,27101932,06.001.00,5933,18.00,yes,yes,valid"
        );
    }

    #[test]
    fn test_validation_states_render_distinctly() {
        let doc = document(vec![item("1", None), item("2", Some(false))]);
        let text = String::from_utf8(to_spreadsheet(&doc).unwrap()).unwrap();

        assert!(text.lines().nth(1).unwrap().ends_with("pending"));
        assert!(text.lines().nth(2).unwrap().ends_with("review"));
    }

    #[test]
    fn test_itemless_document_yields_header_only() {
        let text = String::from_utf8(to_spreadsheet(&document(Vec::new())).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut it = item("1", None);
        it.description = "Oleo, aditivado".to_string();
        let text = String::from_utf8(to_spreadsheet(&document(vec![it])).unwrap()).unwrap();
        assert!(text.contains("\"Oleo, aditivado\""));
    }
}
