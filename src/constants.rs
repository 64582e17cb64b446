//! Central Configuration Constants
//!
//! Single source of truth for artifact locations and app identity.
//! To change the default artifact directory, only edit this file.

/// Default scaler artifact path (JSON with fitted z-score parameters)
pub const DEFAULT_SCALER_PATH: &str = "models/churn_scaler.json";

/// Default classifier artifact path (ONNX graph)
pub const DEFAULT_MODEL_PATH: &str = "models/churn_model.onnx";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "CustomerKeeper";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scaler artifact path from environment or use default
pub fn get_scaler_path() -> String {
    std::env::var("CHURN_SCALER_PATH").unwrap_or_else(|_| DEFAULT_SCALER_PATH.to_string())
}

/// Get classifier artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("CHURN_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}
