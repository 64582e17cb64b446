//! Model Module - Churn Inference Engine
//!
//! Wraps the two opaque pre-trained artifacts: the fitted scaler and the
//! ONNX classifier. Both load once at startup and are read-only afterwards.

pub mod classifier;
pub mod error;
pub mod inference;
pub mod scaler;

// Re-export common types
pub use classifier::ClassifierModel;
pub use error::{DimensionMismatchError, ModelUnavailableError, PredictError};
pub use inference::{
    get_metadata, get_status, init, is_model_loaded, load_artifacts, predict_churn,
    unload_artifacts, ChurnLabel, ChurnPredictor, EngineStatus, ModelMetadata, PredictionResult,
};
pub use scaler::{ScalerModel, ScalerParams};
