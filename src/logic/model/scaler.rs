//! Scaler Model - Fitted z-score Transform
//!
//! Opaque pre-trained artifact: per-feature means and scales learned at
//! training time, persisted as JSON. `transform` preserves dimensionality;
//! a width disagreement is a typed error, never a silent truncation.

use serde::{Deserialize, Serialize};

use super::error::{DimensionMismatchError, ModelUnavailableError};

/// On-disk shape of the scaler artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Per-feature means learned at training time
    pub mean: Vec<f32>,
    /// Per-feature standard deviations learned at training time
    pub scale: Vec<f32>,
}

/// Fitted standard scaler
#[derive(Debug, Clone)]
pub struct ScalerModel {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl ScalerModel {
    /// Build from already-parsed parameters
    pub fn from_params(params: ScalerParams) -> Result<Self, ModelUnavailableError> {
        if params.mean.is_empty() {
            return Err(ModelUnavailableError(
                "Scaler artifact has no features".to_string(),
            ));
        }
        if params.mean.len() != params.scale.len() {
            return Err(ModelUnavailableError(format!(
                "Scaler artifact is inconsistent: {} means vs {} scales",
                params.mean.len(),
                params.scale.len()
            )));
        }

        Ok(Self {
            mean: params.mean,
            scale: params.scale,
        })
    }

    /// Parse from raw artifact bytes (JSON)
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelUnavailableError> {
        let params: ScalerParams = serde_json::from_slice(bytes)
            .map_err(|e| ModelUnavailableError(format!("Failed to parse scaler artifact: {}", e)))?;
        Self::from_params(params)
    }

    /// Load from an artifact file
    pub fn from_file(path: &str) -> Result<Self, ModelUnavailableError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ModelUnavailableError(format!("Failed to read scaler '{}': {}", path, e)))?;
        Self::from_slice(&bytes)
    }

    /// Number of features this scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Apply the fitted z-score transform. Output has the same
    /// dimensionality as the input.
    pub fn transform(&self, values: &[f32]) -> Result<Vec<f32>, DimensionMismatchError> {
        if values.len() != self.mean.len() {
            return Err(DimensionMismatchError {
                expected: self.mean.len(),
                actual: values.len(),
            });
        }

        let scaled = values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&v, (&mean, &scale))| (v - mean) / scale.max(1e-8))
            .collect();

        Ok(scaled)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fitted_scaler() -> ScalerModel {
        ScalerModel::from_params(ScalerParams {
            mean: vec![10.0, 20.0, 0.0],
            scale: vec![2.0, 5.0, 1.0],
        })
        .unwrap()
    }

    #[test]
    fn test_transform_z_score() {
        let scaler = fitted_scaler();
        let scaled = scaler.transform(&[12.0, 10.0, 0.5]).unwrap();

        assert!((scaled[0] - 1.0).abs() < 1e-6);
        assert!((scaled[1] - (-2.0)).abs() < 1e-6);
        assert!((scaled[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_transform_preserves_dimensionality() {
        let scaler = fitted_scaler();
        let scaled = scaler.transform(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(scaled.len(), scaler.n_features());
    }

    #[test]
    fn test_transform_dimension_mismatch() {
        let scaler = fitted_scaler();
        let err = scaler.transform(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err.expected, 3);
        assert_eq!(err.actual, 2);
    }

    #[test]
    fn test_zero_scale_guarded() {
        let scaler = ScalerModel::from_params(ScalerParams {
            mean: vec![0.0],
            scale: vec![0.0],
        })
        .unwrap();

        let scaled = scaler.transform(&[1.0]).unwrap();
        assert!(scaled[0].is_finite());
    }

    #[test]
    fn test_inconsistent_artifact_rejected() {
        let result = ScalerModel::from_params(ScalerParams {
            mean: vec![0.0, 0.0],
            scale: vec![1.0],
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"mean": [1.0, 2.0], "scale": [1.0, 4.0]}}"#).unwrap();

        let scaler = ScalerModel::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(scaler.n_features(), 2);

        let scaled = scaler.transform(&[1.0, 10.0]).unwrap();
        assert!((scaled[0] - 0.0).abs() < 1e-6);
        assert!((scaled[1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file() {
        assert!(ScalerModel::from_file("no/such/scaler.json").is_err());
    }

    #[test]
    fn test_malformed_artifact() {
        assert!(ScalerModel::from_slice(b"not json").is_err());
    }
}
