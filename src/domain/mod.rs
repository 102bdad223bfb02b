// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod adjudication;
pub mod extraction;
pub mod files;
pub mod ledger;
pub mod prediction;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// File selection
pub use files::{is_pdf, validate_selection, FileRow, FileRowSet, SelectedFile, MAX_FILE_SIZE};

// Extraction
pub use extraction::{AdjudicationMetadata, DepositMetadata, ExtractionResult, ONE_MONTH_RENT};

// Adjudication
pub use adjudication::{
    AdjudicationDefaults, AdjudicationRequest, DocumentsPresent, LedgerChecks,
};

// Prediction
pub use prediction::{PredictRequest, PredictResponse, Predictions};

// Ledger review
pub use ledger::LedgerReview;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("no files selected")]
    NoFilesSelected,

    #[error("'{0}' is not a PDF")]
    NotAPdf(String),

    #[error("'{0}' exceeds the 25 MiB upload limit")]
    FileTooLarge(String),

    #[error("no extraction result available: {0}")]
    MissingExtraction(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
