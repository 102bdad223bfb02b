use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of `POST /predict`
///
/// The page serializes one visible form into a single row; the endpoint
/// accepts a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub rows: Vec<Map<String, Value>>,
    pub clip_to_max_benefit: bool,
}

/// Response of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Predictions,

    #[serde(default)]
    pub n_rows: u64,

    #[serde(default)]
    pub clipped: bool,
}

/// The endpoint documents an array, but the page also tolerated a bare
/// scalar, so both shapes parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Predictions {
    Many(Vec<f64>),
    One(f64),
}

impl Predictions {
    /// The value rendered on the page: the first element, or the scalar
    pub fn first(&self) -> Option<f64> {
        match self {
            Predictions::Many(values) => values.first().copied(),
            Predictions::One(value) => Some(*value),
        }
    }
}
