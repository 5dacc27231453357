//! PDF report export via `printpdf`.

use std::io::BufWriter;

use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::ExportError;
use crate::models::document::FiscalDocument;

/// Render a minimal fixed-layout report with the document-level fields.
///
/// The document is built in memory and handed over as whole bytes; a
/// generation failure returns an error with no partial artifact.
pub fn to_report(doc: &FiscalDocument) -> Result<Vec<u8>, ExportError> {
    let title = format!("Fiscal analysis: {}", doc.doc_type.label());

    let (pdf, page, layer) = PdfDocument::new(&title, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = pdf.get_page(page).get_layer(layer);
    let font = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    let mut y = Mm(280.0);

    layer.use_text(&title, 14.0, Mm(20.0), y, &bold);
    y -= Mm(10.0);

    let fields = [
        ("Issuer", doc.issuer.as_str()),
        ("Recipient", doc.recipient.as_str()),
        ("Access key", doc.access_key.as_str()),
    ];
    for (label, value) in fields {
        layer.use_text(format!("{label}: {value}"), 10.0, Mm(20.0), y, &font);
        y -= Mm(6.0);
    }

    layer.use_text(
        format!("Line items: {}", doc.items.len()),
        10.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(10.0);

    layer.use_text(
        format!("Generated {}", Local::now().format("%Y-%m-%d %H:%M")),
        8.0,
        Mm(20.0),
        y,
        &font,
    );

    let mut buf = BufWriter::new(Vec::new());
    pdf.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentType;

    fn document() -> FiscalDocument {
        FiscalDocument {
            doc_type: DocumentType::Cte,
            issuer: "Transportadora Rapida Ltda".to_string(),
            recipient: "Comercio Varejista SA".to_string(),
            access_key: "35200714200166000187570010000000015000000010".to_string(),
            items: Vec::new(),
        }
    }

    #[test]
    fn test_report_is_a_pdf() {
        let bytes = to_report(&document()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_report_is_nonempty_for_both_types() {
        let mut doc = document();
        assert!(!to_report(&doc).unwrap().is_empty());

        doc.doc_type = DocumentType::Nfe;
        assert!(!to_report(&doc).unwrap().is_empty());
    }
}
