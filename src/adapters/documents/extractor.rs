//! Plain-text extraction from uploaded documents.
//!
//! PDF pages are extracted with `pdf-extract` (digital text layer only, no OCR);
//! blank pages are skipped. TXT is decoded as lossy UTF-8.

use crate::domain::{DocumentKind, DomainError, UploadedDocument};
use crate::ports::DocumentExtractorPort;
use tracing::{debug, info};

pub struct FileTextExtractor;

impl FileTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pdf(bytes: &[u8]) -> Result<String, DomainError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| DomainError::Extraction(format!("PDF parsing failed: {}", e)))?;
        let total = pages.len();

        let text = pages
            .into_iter()
            .map(|page| page.trim().to_string())
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        debug!(pages = total, text_len = text.len(), "pdf text extracted");
        Ok(text)
    }
}

impl Default for FileTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractorPort for FileTextExtractor {
    fn extract_text(&self, document: &UploadedDocument) -> Result<String, DomainError> {
        let text = match document.kind() {
            Some(DocumentKind::Pdf) => Self::extract_pdf(&document.bytes)?,
            Some(DocumentKind::PlainText) => String::from_utf8_lossy(&document.bytes).into_owned(),
            None => {
                return Err(DomainError::Extraction(format!(
                    "unsupported document type '{}' (expected .pdf or .txt)",
                    document.file_name
                )));
            }
        };

        info!(
            file = %document.file_name,
            bytes = document.bytes.len(),
            chars = text.chars().count(),
            "document text extracted"
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a PDF with one page per entry; an empty entry produces a page with no text.
    fn make_test_pdf(page_texts: &[&str]) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = if text.is_empty() {
                String::new()
            } else {
                format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET")
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn extracts_text_from_pdf() {
        let doc = UploadedDocument::new("labs.pdf", make_test_pdf(&["Hemoglobin normal"]));
        let text = FileTextExtractor::new().extract_text(&doc).unwrap();
        assert!(text.contains("Hemoglobin"), "got: {text}");
    }

    #[test]
    fn skips_blank_pages() {
        let doc = UploadedDocument::new("labs.pdf", make_test_pdf(&["First", "", "Third"]));
        let text = FileTextExtractor::new().extract_text(&doc).unwrap();
        assert!(text.contains("First") && text.contains("Third"), "got: {text}");
        assert!(!text.starts_with('\n'));
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn invalid_pdf_is_extraction_error() {
        let doc = UploadedDocument::new("broken.pdf", b"not a pdf".to_vec());
        let err = FileTextExtractor::new().extract_text(&doc).unwrap_err();
        assert!(matches!(err, DomainError::Extraction(_)));
    }

    #[test]
    fn plain_text_decoded_lossily() {
        let mut bytes = b"BP 120/80 ".to_vec();
        bytes.push(0xff);
        let doc = UploadedDocument::new("notes.TXT", bytes);
        let text = FileTextExtractor::new().extract_text(&doc).unwrap();
        assert!(text.starts_with("BP 120/80 "));
    }

    #[test]
    fn unsupported_type_rejected() {
        let doc = UploadedDocument::new("xray.png", vec![0x89, 0x50]);
        let err = FileTextExtractor::new().extract_text(&doc).unwrap_err();
        assert!(err.to_string().contains("unsupported document type"));
    }
}
