//! Offers Module - Retention Offer Generation
//!
//! A deterministic decision table over six customer attributes. Depends on
//! no model artifact, so it keeps working when the predict path is
//! unavailable.

pub mod engine;
pub mod rules;
pub mod types;

// Re-export common types
pub use engine::{default_rules, generate_offers, OfferEngine};
pub use rules::OfferRule;
pub use types::{Offer, OfferCategory, OfferInput, OfferSet};
