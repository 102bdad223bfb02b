// src/application/mod.rs
//
// Application Layer - UI Boundary
//
// The flows never touch a page tree. They read manual entry through
// FormState and report results through FlowPresenter; the embedder binds
// both to whatever UI exists.

pub mod form;
pub mod presenter;

pub use form::{ClaimFormSnapshot, FormState, MemoryFormState, PredictionFormSnapshot};
pub use presenter::{DisplayableError, ErrorStyle, FlowKind, FlowPresenter};
