//! CustomerKeeper Core - Churn Inference & Retention Offers
//!
//! Predicts whether a bank customer will churn, using a pre-trained scaler
//! and classifier pair loaded once at process start, and generates retention
//! offers from a fixed table of threshold rules.
//!
//! The two flows are independent and stateless:
//! - `encode` + `ChurnPredictor::predict` (or the `predict_churn` shortcut)
//! - `generate_offers`
//!
//! The presentation layer lives outside this crate and is responsible for
//! collecting the raw form fields and rendering results.

pub mod constants;
pub mod logic;

pub use logic::features::{encode, CustomerProfile, FeatureVector, Gender, Geography};
pub use logic::model::{
    init, is_model_loaded, load_artifacts, predict_churn, ChurnLabel, ChurnPredictor,
    DimensionMismatchError, ModelUnavailableError, PredictError, PredictionResult,
};
pub use logic::offers::{generate_offers, Offer, OfferEngine, OfferInput, OfferSet};
