// src/application/form.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Read-only snapshot of the manual claim-entry fields, as typed
///
/// Values stay free text here; numeric coercion happens during field
/// resolution, not at capture time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimFormSnapshot {
    pub monthly_rent: String,
    pub max_benefit: String,
    pub move_out_date: String,
    pub lease_state: String,
    pub deposit_amount: String,
    pub jurisdiction: String,
}

/// Read-only snapshot of the prediction form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionFormSnapshot {
    /// Field name -> entered value, in a stable order
    pub fields: BTreeMap<String, String>,
    pub clip_to_max_benefit: bool,
}

/// The "current form state" service the flows depend on
///
/// Implementations bind to a real UI; `MemoryFormState` serves tests and
/// headless embedders.
#[cfg_attr(test, mockall::automock)]
pub trait FormState: Send + Sync {
    fn claim_snapshot(&self) -> ClaimFormSnapshot;

    fn prediction_snapshot(&self) -> PredictionFormSnapshot;

    /// Mutation callback for the prediction reset action
    fn clear_prediction_form(&self);
}

/// In-memory form binding
#[derive(Debug, Default)]
pub struct MemoryFormState {
    claim: Mutex<ClaimFormSnapshot>,
    prediction: Mutex<PredictionFormSnapshot>,
}

impl MemoryFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_claim(&self, snapshot: ClaimFormSnapshot) {
        *self.claim.lock().expect("form state poisoned") = snapshot;
    }

    pub fn set_prediction(&self, snapshot: PredictionFormSnapshot) {
        *self.prediction.lock().expect("form state poisoned") = snapshot;
    }

    pub fn set_prediction_field(&self, name: impl Into<String>, value: impl Into<String>) {
        self.prediction
            .lock()
            .expect("form state poisoned")
            .fields
            .insert(name.into(), value.into());
    }
}

impl FormState for MemoryFormState {
    fn claim_snapshot(&self) -> ClaimFormSnapshot {
        self.claim.lock().expect("form state poisoned").clone()
    }

    fn prediction_snapshot(&self) -> PredictionFormSnapshot {
        self.prediction.lock().expect("form state poisoned").clone()
    }

    fn clear_prediction_form(&self) {
        let mut prediction = self.prediction.lock().expect("form state poisoned");
        prediction.fields.clear();
    }
}
