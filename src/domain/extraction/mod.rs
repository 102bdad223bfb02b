pub mod entity;

pub use entity::{AdjudicationMetadata, DepositMetadata, ExtractionResult, ONE_MONTH_RENT};
