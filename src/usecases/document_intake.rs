//! Turns an uploaded document into optional supplemental text for an assessment.
//!
//! Any rejection (too large, unreadable, no text) is an error; the caller then assesses without it.

use crate::domain::{DomainError, UploadedDocument};
use crate::ports::DocumentExtractorPort;

/// Reject uploads larger than `limit` bytes. A size equal to the limit is accepted.
pub fn check_upload_size(size: u64, limit: u64) -> Result<(), DomainError> {
    if size > limit {
        return Err(DomainError::Extraction(format!(
            "document is too large ({} bytes, limit {})",
            size, limit
        )));
    }
    Ok(())
}

/// Size-check and extract `document`. Whitespace-only text counts as a failure.
pub fn extract_supplemental(
    document: &UploadedDocument,
    extractor: &dyn DocumentExtractorPort,
    limit: u64,
) -> Result<String, DomainError> {
    check_upload_size(document.bytes.len() as u64, limit)?;
    let text = extractor.extract_text(document)?;
    if text.trim().is_empty() {
        return Err(DomainError::Extraction(format!(
            "no text found in '{}'",
            document.file_name
        )));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a fixed result regardless of input.
    struct StubExtractor(Result<&'static str, &'static str>);

    impl DocumentExtractorPort for StubExtractor {
        fn extract_text(&self, _document: &UploadedDocument) -> Result<String, DomainError> {
            self.0
                .map(str::to_string)
                .map_err(|e| DomainError::Extraction(e.to_string()))
        }
    }

    fn doc(len: usize) -> UploadedDocument {
        UploadedDocument::new("labs.txt", vec![b'a'; len])
    }

    #[test]
    fn over_limit_is_rejected() {
        let extractor = StubExtractor(Ok("glucose 5.4"));
        assert_eq!(extract_supplemental(&doc(11), &extractor, 10).ok(), None);
        let err = extract_supplemental(&doc(11), &extractor, 10).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn exactly_at_limit_is_accepted() {
        let extractor = StubExtractor(Ok("glucose 5.4"));
        assert_eq!(
            extract_supplemental(&doc(10), &extractor, 10).ok().as_deref(),
            Some("glucose 5.4")
        );
    }

    #[test]
    fn extractor_error_is_rejected() {
        let extractor = StubExtractor(Err("PDF parsing failed"));
        assert_eq!(extract_supplemental(&doc(3), &extractor, 10).ok(), None);
        let err = extract_supplemental(&doc(3), &extractor, 10).unwrap_err();
        assert!(matches!(err, DomainError::Extraction(_)));
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let extractor = StubExtractor(Ok(" \n\t "));
        let err = extract_supplemental(&doc(3), &extractor, 10).unwrap_err();
        assert!(err.to_string().contains("no text found in 'labs.txt'"));
    }

    #[test]
    fn size_check_boundary() {
        assert!(check_upload_size(10, 10).is_ok());
        assert!(check_upload_size(0, 10).is_ok());
        assert!(check_upload_size(11, 10).is_err());
    }
}
