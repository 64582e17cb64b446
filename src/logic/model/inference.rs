//! Churn Inference - Artifact State & Predictor
//!
//! The scaler and classifier load once at process start; afterwards they
//! are shared read-only by every request. If loading fails the process
//! stays in unavailable mode and every predict call fails fast - there is
//! no heuristic fallback and no partial result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::logic::config::ArtifactConfig;
use crate::logic::features::{encode, CustomerProfile, FeatureVector, FEATURE_COUNT};

use super::classifier::{argmax, ClassifierModel};
use super::error::{ModelUnavailableError, PredictError};
use super::scaler::ScalerModel;

// ============================================================================
// STATE
// ============================================================================

/// Loaded scaler artifact
static SCALER: RwLock<Option<Arc<ScalerModel>>> = RwLock::new(None);

/// Loaded classifier artifact
static CLASSIFIER: RwLock<Option<Arc<ClassifierModel>>> = RwLock::new(None);

/// Metadata of the loaded artifact pair
static MODEL_METADATA: RwLock<Option<ModelMetadata>> = RwLock::new(None);

/// Latency stats
static LATENCY_SUM: AtomicU64 = AtomicU64::new(0);
static PREDICTION_COUNT: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Metadata of the loaded artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub scaler_path: String,
    pub model_path: String,
    pub features: usize,
    /// SHA-256 of the scaler artifact bytes
    pub scaler_fingerprint: String,
    /// SHA-256 of the classifier artifact bytes
    pub model_fingerprint: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Engine status for callers that render health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_name: String,
    pub features: usize,
    pub avg_latency_ms: f32,
    pub prediction_count: u64,
}

/// Predicted outcome: class 0 = retain, class 1 = churn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChurnLabel {
    Retain,
    Churn,
}

impl ChurnLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChurnLabel::Retain => "retain",
            ChurnLabel::Churn => "churn",
        }
    }

    /// Class index the classifier was trained with
    pub fn class_index(&self) -> usize {
        match self {
            ChurnLabel::Retain => 0,
            ChurnLabel::Churn => 1,
        }
    }

    pub fn from_class_index(index: usize) -> Self {
        if index == 1 {
            ChurnLabel::Churn
        } else {
            ChurnLabel::Retain
        }
    }

    pub fn is_churn(&self) -> bool {
        matches!(self, ChurnLabel::Churn)
    }
}

impl std::fmt::Display for ChurnLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Prediction output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: ChurnLabel,
    /// Ordered [P(not churn), P(churn)], sums to 1.0
    pub probabilities: [f32; 2],
    pub inference_time_us: u64,
}

impl PredictionResult {
    pub fn churn_probability(&self) -> f32 {
        self.probabilities[1]
    }

    pub fn retain_probability(&self) -> f32 {
        self.probabilities[0]
    }
}

// ============================================================================
// ARTIFACT LOADING
// ============================================================================

fn artifact_fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Load the scaler + classifier pair into process-wide state.
///
/// On failure nothing is stored and the process stays in unavailable mode;
/// subsequent predict calls fail fast with `ModelUnavailableError`.
pub fn load_artifacts(config: &ArtifactConfig) -> Result<(), ModelUnavailableError> {
    log::info!("Loading scaler artifact from: {}", config.scaler_path);
    let scaler_bytes = std::fs::read(&config.scaler_path).map_err(|e| {
        ModelUnavailableError(format!(
            "Failed to read scaler '{}': {}",
            config.scaler_path, e
        ))
    })?;
    let scaler = ScalerModel::from_slice(&scaler_bytes)?;

    if scaler.n_features() != FEATURE_COUNT {
        // Loadable but fitted on a different width; every predict will
        // surface a DimensionMismatchError until the artifact is fixed.
        log::warn!(
            "Scaler was fitted on {} features, encoder produces {}",
            scaler.n_features(),
            FEATURE_COUNT
        );
    }

    let model_bytes = std::fs::read(&config.model_path).map_err(|e| {
        ModelUnavailableError(format!(
            "Failed to read model '{}': {}",
            config.model_path, e
        ))
    })?;
    let classifier = ClassifierModel::from_memory(&model_bytes, scaler.n_features())?;

    let metadata = ModelMetadata {
        scaler_path: config.scaler_path.clone(),
        model_path: config.model_path.clone(),
        features: scaler.n_features(),
        scaler_fingerprint: artifact_fingerprint(&scaler_bytes),
        model_fingerprint: artifact_fingerprint(&model_bytes),
        loaded_at: chrono::Utc::now(),
    };
    log::info!(
        "Artifacts loaded: scaler sha256={} model sha256={}",
        metadata.scaler_fingerprint,
        metadata.model_fingerprint
    );

    *SCALER.write() = Some(Arc::new(scaler));
    *CLASSIFIER.write() = Some(Arc::new(classifier));
    *MODEL_METADATA.write() = Some(metadata);

    Ok(())
}

/// Load artifacts from the configured locations (env overrides + defaults)
pub fn init() -> Result<(), ModelUnavailableError> {
    load_artifacts(&ArtifactConfig::default()).map_err(|e| {
        log::warn!("Artifact load failed, predict path unavailable: {}", e);
        e
    })
}

/// Check if both artifacts are loaded
pub fn is_model_loaded() -> bool {
    SCALER.read().is_some() && CLASSIFIER.read().is_some()
}

/// Drop the loaded artifacts (returns the process to unavailable mode)
pub fn unload_artifacts() {
    *SCALER.write() = None;
    *CLASSIFIER.write() = None;
    *MODEL_METADATA.write() = None;
    log::info!("Artifacts unloaded");
}

/// Get metadata of the loaded artifacts
pub fn get_metadata() -> Option<ModelMetadata> {
    MODEL_METADATA.read().clone()
}

/// Engine status snapshot
pub fn get_status() -> EngineStatus {
    let metadata = MODEL_METADATA.read();
    let (loaded, name, features) = match metadata.as_ref() {
        Some(meta) => (true, meta.model_path.clone(), meta.features),
        None => (false, "None".to_string(), FEATURE_COUNT),
    };

    let sum = LATENCY_SUM.load(Ordering::Relaxed);
    let count = PREDICTION_COUNT.load(Ordering::Relaxed);
    let avg = if count > 0 {
        (sum as f32 / count as f32) / 1000.0
    } else {
        0.0
    };

    EngineStatus {
        model_loaded: loaded,
        model_name: name,
        features,
        avg_latency_ms: avg,
        prediction_count: count,
    }
}

// ============================================================================
// CHURN PREDICTOR
// ============================================================================

/// Prediction pipeline over an immutable scaler + classifier pair
pub struct ChurnPredictor {
    scaler: Arc<ScalerModel>,
    classifier: Arc<ClassifierModel>,
}

impl ChurnPredictor {
    pub fn new(scaler: Arc<ScalerModel>, classifier: Arc<ClassifierModel>) -> Self {
        Self { scaler, classifier }
    }

    /// Build over the process-wide loaded artifacts
    pub fn from_loaded() -> Result<Self, ModelUnavailableError> {
        let scaler = SCALER
            .read()
            .clone()
            .ok_or_else(|| ModelUnavailableError("Scaler artifact not loaded".to_string()))?;
        let classifier = CLASSIFIER
            .read()
            .clone()
            .ok_or_else(|| ModelUnavailableError("Classifier artifact not loaded".to_string()))?;

        Ok(Self::new(scaler, classifier))
    }

    /// Scale the encoded vector and classify it.
    ///
    /// Deterministic function of the frozen artifacts and the input;
    /// either returns a complete label + probability pair or fails.
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, PredictError> {
        let start_time = std::time::Instant::now();

        vector.validate()?;

        let scaled = self.scaler.transform(vector.as_slice())?;
        let probabilities = self.classifier.predict_proba(&scaled)?;
        let label = ChurnLabel::from_class_index(argmax(&probabilities));

        let inference_time = start_time.elapsed().as_micros() as u64;
        LATENCY_SUM.fetch_add(inference_time, Ordering::Relaxed);
        PREDICTION_COUNT.fetch_add(1, Ordering::Relaxed);

        Ok(PredictionResult {
            label,
            probabilities,
            inference_time_us: inference_time,
        })
    }
}

/// Encode a profile and predict in one call (the "predict churn" action)
pub fn predict_churn(profile: &CustomerProfile) -> Result<PredictionResult, PredictError> {
    let vector = encode(profile);
    let predictor = ChurnPredictor::from_loaded()?;
    let result = predictor.predict(&vector);

    if let Err(e) = &result {
        log::warn!("Churn prediction failed: {}", e);
        log::debug!("Offending vector: {}", vector.to_log_entry());
    }

    result
}

// ============================================================================
// TESTS
// ============================================================================
