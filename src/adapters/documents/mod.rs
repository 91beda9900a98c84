//! Document adapters. Implement DocumentExtractorPort for uploaded PDF and TXT files.

pub mod extractor;

pub use extractor::FileTextExtractor;
