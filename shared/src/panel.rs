use crate::error::ValidationError;
use crate::method::{MatchMethod, MethodHint};
use crate::wire::ComparisonRequest;

/// Inputs the user controls before submitting.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationPanel {
    source_a_id: String,
    source_b_id: String,
    method: MatchMethod,
    threshold: f64,
    hint: MethodHint,
}

/// What the panel showed at the moment of submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    pub source_a_id: String,
    pub source_b_id: String,
    pub threshold: f64,
    pub method: MatchMethod,
}

impl Default for ConfigurationPanel {
    fn default() -> Self {
        Self::new(MatchMethod::default())
    }
}

impl ConfigurationPanel {
    pub fn new(method: MatchMethod) -> Self {
        Self {
            source_a_id: String::new(),
            source_b_id: String::new(),
            method,
            threshold: method.default_threshold(),
            hint: method.hint(),
        }
    }

    pub fn method(&self) -> MatchMethod {
        self.method
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn hint(&self) -> &MethodHint {
        &self.hint
    }

    pub fn source_a_id(&self) -> &str {
        &self.source_a_id
    }

    pub fn source_b_id(&self) -> &str {
        &self.source_b_id
    }

    pub fn threshold_label(&self) -> String {
        format!("{:.2}", self.threshold)
    }

    /// Switching method discards any manual threshold.
    pub fn select_method(&mut self, method: MatchMethod) {
        self.method = method;
        self.threshold = method.default_threshold();
        self.hint = method.hint();
    }

    pub fn adjust_threshold(&mut self, value: f64) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite threshold {}", value);
            return;
        }
        self.threshold = value.clamp(0.0, 1.0);
    }

    pub fn set_source_a(&mut self, id: impl Into<String>) {
        self.source_a_id = id.into();
    }

    pub fn set_source_b(&mut self, id: impl Into<String>) {
        self.source_b_id = id.into();
    }

    pub fn read_configuration(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            source_a_id: self.source_a_id.clone(),
            source_b_id: self.source_b_id.clone(),
            threshold: self.threshold,
            method: self.method,
        }
    }
}

impl ConfigSnapshot {
    pub fn validate(&self) -> Result<ComparisonRequest, ValidationError> {
        let source_a_id = self.source_a_id.trim();
        let source_b_id = self.source_b_id.trim();

        match (source_a_id.is_empty(), source_b_id.is_empty()) {
            (true, true) => Err(ValidationError::MissingBoth),
            (true, false) => Err(ValidationError::MissingSourceA),
            (false, true) => Err(ValidationError::MissingSourceB),
            (false, false) => Ok(ComparisonRequest {
                source_a_id: source_a_id.to_string(),
                source_b_id: source_b_id.to_string(),
                threshold: self.threshold,
                method: self.method,
            }),
        }
    }
}
