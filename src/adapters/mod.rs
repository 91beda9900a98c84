//! Infrastructure adapters. Implement outbound ports.
//!
//! LLM providers, document extraction, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod documents;
pub mod ui;
