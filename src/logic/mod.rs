//! Logic Module - Business Logic & Engines
//!
//! Three engines, composed only at the presentation boundary:
//! - `features/` - CustomerProfile encoding + the feature-layout contract
//! - `model/`    - Scaler + ONNX classifier inference
//! - `offers/`   - Rule-based retention offer generation

pub mod config;
pub mod features;
pub mod model;
pub mod offers;
