// src/lib.rs
// claimflow - Typed client flows for the SDI claim adjudication API
//
// Architecture:
// - Domain-centric: entities and invariants live in `domain`, validated
//   before anything touches the network
// - Explicit UI boundary: flows read forms through `FormState` and render
//   through `FlowPresenter`; no page tree anywhere in this crate
// - Infrastructure at the edge: one HTTP client behind the `ClaimApi` trait,
//   single-attempt requests, errors carry the raw response body
// - Recoverable by construction: every failure path leaves the flows in a
//   re-submittable state

// ============================================================================
// MODULES
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod format;
pub mod integrations;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    is_pdf,
    validate_selection,
    AdjudicationDefaults,
    AdjudicationMetadata,
    AdjudicationRequest,
    DepositMetadata,
    DocumentsPresent,
    ExtractionResult,
    FileRow,
    FileRowSet,
    LedgerChecks,
    LedgerReview,
    PredictRequest,
    PredictResponse,
    Predictions,
    SelectedFile,
    MAX_FILE_SIZE,
    ONE_MONTH_RENT,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use domain::{DomainError, DomainResult};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - UI boundary
// ============================================================================

pub use application::{
    ClaimFormSnapshot, DisplayableError, ErrorStyle, FlowKind, FlowPresenter, FormState,
    MemoryFormState, PredictionFormSnapshot,
};

// ============================================================================
// PUBLIC API - Client and flows
// ============================================================================

pub use integrations::{ClaimApi, HttpClaimApi};

pub use services::{
    ClaimIntakeService, FlowState, LedgerReviewService, PredictionService,
};

pub use format::{currency_or_raw, format_currency, to_number};
