// src/services/mod.rs
//
// Services Module - Flow Orchestration Layer

pub mod claim_intake;
pub mod field_resolution;
pub mod ledger_service;
pub mod prediction_service;


// Re-export all services and their types
pub use claim_intake::ClaimIntakeService;

pub use field_resolution::{
    assemble_request, resolve_deposit, resolve_jurisdiction, resolve_move_out_date,
};

pub use ledger_service::LedgerReviewService;

pub use prediction_service::PredictionService;

/// Lifecycle of one form interaction cycle
///
/// Idle -> Submitting -> {Success, Failed}. Success re-enters Submitting
/// when the upload flow's finalize sub-action fires. In-flight requests
/// cannot be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}
