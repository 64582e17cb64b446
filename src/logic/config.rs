//! Artifact Configuration
//!
//! Where the pre-trained artifacts are loaded from. Resolved once at
//! startup; environment variables override the compiled defaults.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Locations of the two pre-trained artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Path to the fitted scaler (JSON)
    pub scaler_path: String,
    /// Path to the fitted classifier (ONNX)
    pub model_path: String,
}

impl ArtifactConfig {
    pub fn new(scaler_path: impl Into<String>, model_path: impl Into<String>) -> Self {
        Self {
            scaler_path: scaler_path.into(),
            model_path: model_path.into(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            scaler_path: constants::get_scaler_path(),
            model_path: constants::get_model_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths() {
        let config = ArtifactConfig::new("scaler.json", "model.onnx");
        assert_eq!(config.scaler_path, "scaler.json");
        assert_eq!(config.model_path, "model.onnx");
    }
}
