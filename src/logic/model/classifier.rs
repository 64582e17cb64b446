//! Classifier Model - ONNX Runtime Integration
//!
//! Wraps the fitted churn classifier. The graph takes a float32 `(1, N)`
//! tensor of scaled features; its first output is interpreted as class
//! probabilities (one sigmoid value, or a [not-churn, churn] pair).

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::RwLock;

use super::error::{DimensionMismatchError, ModelUnavailableError, PredictError};

/// Binary outcome: class 0 = retain, class 1 = churn
pub const CLASS_COUNT: usize = 2;

/// Fitted churn classifier
pub struct ClassifierModel {
    // ort sessions need &mut to run; the lock keeps the outward API &self
    session: RwLock<Session>,
    expected_features: usize,
}

impl ClassifierModel {
    /// Load the ONNX artifact from a file
    pub fn from_file(path: &str, expected_features: usize) -> Result<Self, ModelUnavailableError> {
        log::info!("Loading classifier artifact from: {}", path);

        if !std::path::Path::new(path).exists() {
            return Err(ModelUnavailableError(format!("Model not found: {}", path)));
        }

        let session = Session::builder()
            .map_err(|e| ModelUnavailableError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelUnavailableError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelUnavailableError(format!("Failed to load model: {}", e)))?;

        Ok(Self {
            session: RwLock::new(session),
            expected_features,
        })
    }

    /// Load the ONNX artifact from memory
    pub fn from_memory(bytes: &[u8], expected_features: usize) -> Result<Self, ModelUnavailableError> {
        log::info!("Loading classifier artifact from memory ({} bytes)", bytes.len());

        let session = Session::builder()
            .map_err(|e| ModelUnavailableError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelUnavailableError(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(bytes)
            .map_err(|e| ModelUnavailableError(format!("Failed to load model from memory: {}", e)))?;

        Ok(Self {
            session: RwLock::new(session),
            expected_features,
        })
    }

    /// Input width the classifier was fitted on
    pub fn expected_features(&self) -> usize {
        self.expected_features
    }

    /// Probability per class, ordered [P(not churn), P(churn)]
    pub fn predict_proba(&self, scaled: &[f32]) -> Result<[f32; CLASS_COUNT], PredictError> {
        if scaled.len() != self.expected_features {
            return Err(DimensionMismatchError {
                expected: self.expected_features,
                actual: scaled.len(),
            }
            .into());
        }

        let mut session_guard = self.session.write();
        let session = &mut *session_guard;

        let input_array =
            Array2::<f32>::from_shape_vec((1, self.expected_features), scaled.to_vec())
                .map_err(|e| PredictError::Inference(format!("Failed to create input array: {}", e)))?;

        // Get output name BEFORE run to avoid borrow conflict
        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| PredictError::Inference("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| PredictError::Inference(format!("Failed to create tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| PredictError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| PredictError::Inference("No output from model".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError::Inference(format!("Failed to extract output: {}", e)))?;

        proba_pair(output_tensor.1)
    }

    /// Predicted class index (argmax over the probability pair)
    pub fn predict(&self, scaled: &[f32]) -> Result<usize, PredictError> {
        let proba = self.predict_proba(scaled)?;
        Ok(argmax(&proba))
    }
}

// ============================================================================
// OUTPUT INTERPRETATION
// ============================================================================

/// Interpret a raw output tensor as a two-class probability pair.
///
/// One value is a sigmoid over churn and expands to [1-p, p]; two or more
/// values are taken as [P(not churn), P(churn)]. A pair that does not sum
/// to ~1.0 is an inference fault, not something to renormalize silently.
pub(crate) fn proba_pair(raw: &[f32]) -> Result<[f32; CLASS_COUNT], PredictError> {
    let pair = match raw {
        [] => {
            return Err(PredictError::Inference(
                "Model produced an empty output".to_string(),
            ))
        }
        [p] => [1.0 - p, *p],
        [p0, p1, ..] => [*p0, *p1],
    };

    let sum: f32 = pair.iter().sum();
    if (sum - 1.0).abs() > 1e-3 {
        return Err(PredictError::Inference(format!(
            "Model output is not a probability distribution (sum {:.4})",
            sum
        )));
    }

    Ok(pair)
}

/// Index of the most probable class; ties resolve to class 0
pub(crate) fn argmax(pair: &[f32; CLASS_COUNT]) -> usize {
    if pair[1] > pair[0] {
        1
    } else {
        0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proba_pair_from_sigmoid() {
        let pair = proba_pair(&[0.8]).unwrap();
        assert!((pair[0] - 0.2).abs() < 1e-6);
        assert!((pair[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_proba_pair_from_pair() {
        let pair = proba_pair(&[0.3, 0.7]).unwrap();
        assert_eq!(pair, [0.3, 0.7]);
    }

    #[test]
    fn test_proba_pair_sums_to_one() {
        for raw in [&[0.0f32] as &[f32], &[0.5], &[1.0], &[0.25, 0.75]] {
            let pair = proba_pair(raw).unwrap();
            let sum: f32 = pair.iter().sum();
            assert!((sum - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_proba_pair_rejects_non_distribution() {
        assert!(proba_pair(&[0.9, 0.9]).is_err());
        assert!(proba_pair(&[]).is_err());
    }

    #[test]
    fn test_argmax_matches_label_contract() {
        assert_eq!(argmax(&[0.7, 0.3]), 0);
        assert_eq!(argmax(&[0.3, 0.7]), 1);
        // Tie resolves to the retain class
        assert_eq!(argmax(&[0.5, 0.5]), 0);
    }

    #[test]
    fn test_missing_artifact() {
        let result = ClassifierModel::from_file("no/such/model.onnx", 11);
        assert!(result.is_err());
    }
}
