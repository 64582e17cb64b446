//! Model Errors
//!
//! Error taxonomy for the predict path. Every error propagates unmodified
//! to the caller; there are no retries and no partial results.

use crate::logic::features::LayoutMismatchError;

// ============================================================================
// MODEL UNAVAILABLE
// ============================================================================

/// Artifacts missing or failed to load - fatal for the predict path
#[derive(Debug, Clone)]
pub struct ModelUnavailableError(pub String);

impl std::fmt::Display for ModelUnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelUnavailableError: {}", self.0)
    }
}

impl std::error::Error for ModelUnavailableError {}

// ============================================================================
// DIMENSION MISMATCH
// ============================================================================

/// Encoded vector size disagrees with the model's expected input
#[derive(Debug, Clone)]
pub struct DimensionMismatchError {
    pub expected: usize,
    pub actual: usize,
}

impl std::fmt::Display for DimensionMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dimension mismatch: model expects {} features, got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for DimensionMismatchError {}

// ============================================================================
// PREDICT ERROR (umbrella)
// ============================================================================

/// Any failure on the predict path
#[derive(Debug, Clone)]
pub enum PredictError {
    /// Artifacts not loaded
    ModelUnavailable(ModelUnavailableError),
    /// Vector length disagrees with the fitted input width
    DimensionMismatch(DimensionMismatchError),
    /// Vector built against a different feature schema
    Layout(LayoutMismatchError),
    /// Runtime inference fault
    Inference(String),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::ModelUnavailable(e) => write!(f, "{}", e),
            PredictError::DimensionMismatch(e) => write!(f, "{}", e),
            PredictError::Layout(e) => write!(f, "{}", e),
            PredictError::Inference(msg) => write!(f, "Inference failed: {}", msg),
        }
    }
}

impl std::error::Error for PredictError {}

impl From<ModelUnavailableError> for PredictError {
    fn from(e: ModelUnavailableError) -> Self {
        PredictError::ModelUnavailable(e)
    }
}

impl From<DimensionMismatchError> for PredictError {
    fn from(e: DimensionMismatchError) -> Self {
        PredictError::DimensionMismatch(e)
    }
}

impl From<LayoutMismatchError> for PredictError {
    fn from(e: LayoutMismatchError) -> Self {
        PredictError::Layout(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = DimensionMismatchError {
            expected: 11,
            actual: 9,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: model expects 11 features, got 9"
        );
    }

    #[test]
    fn test_predict_error_wraps_unmodified() {
        let inner = ModelUnavailableError("scaler not loaded".to_string());
        let err: PredictError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }
}
