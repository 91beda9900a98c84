//! health-desk: LLM-backed preliminary symptom assessment with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
