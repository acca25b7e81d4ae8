//! Result of one dispatched conversion, ready for rendering

use serde::Serialize;

use crate::engine::{ConversionTrace, Traced};

/// A finished conversion: what was asked, what came out, and optionally how.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Menu-style label, e.g. "Decimal → Binary"
    pub operation: String,
    /// Input as the user supplied it
    pub input: String,
    /// Rendered result value
    pub result: String,
    /// Additional labelled renderings of the same value
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<View>,
    /// Narrated steps, present only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<ConversionTrace>,
}

/// One labelled rendering, e.g. ("Hexadecimal", "FF")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub label: String,
    pub value: String,
}

impl Outcome {
    pub fn new(operation: impl Into<String>, input: impl Into<String>, result: impl ToString) -> Self {
        Self {
            operation: operation.into(),
            input: input.into(),
            result: result.to_string(),
            views: Vec::new(),
            steps: None,
        }
    }

    /// Build from a traced engine result, keeping the narration.
    pub fn from_traced<T: ToString>(
        operation: impl Into<String>,
        input: impl Into<String>,
        traced: Traced<T>,
    ) -> Self {
        let mut outcome = Self::new(operation, input, traced.value);
        outcome.steps = Some(traced.trace);
        outcome
    }

    pub fn with_view(mut self, label: impl Into<String>, value: impl ToString) -> Self {
        self.views.push(View {
            label: label.into(),
            value: value.to_string(),
        });
        self
    }
}
