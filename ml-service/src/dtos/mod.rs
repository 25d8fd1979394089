pub mod calc;
pub mod suggestions;

pub use calc::{CalcRequest, CalcResponse, EstimateRequest, EstimateResponse};
pub use suggestions::{Suggestion, SuggestionParams, SuggestionsResponse};

use serde::{Deserialize, Serialize};

/// Fixed acknowledgement returned by placeholder endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StubMessage {
    pub message: String,
}

impl StubMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
