pub mod entity;

pub use entity::{AdjudicationDefaults, AdjudicationRequest, DocumentsPresent, LedgerChecks};
