//! Offer Engine
//!
//! Applies the rule table in fixed order. Output order is rule order;
//! every applicable rule fires independently, with no ranking and no
//! deduplication. Pure computation, no failure modes.

use super::rules::{
    AgeBandRule, BalanceTierRule, CreditTierRule, EngagementRule, OfferRule, ProductMixRule,
    SalaryTierRule,
};
use super::types::{OfferInput, OfferSet};

/// The retention decision table, in output order
pub fn default_rules() -> Vec<Box<dyn OfferRule>> {
    vec![
        Box::new(AgeBandRule),
        Box::new(BalanceTierRule),
        Box::new(SalaryTierRule),
        Box::new(ProductMixRule),
        Box::new(CreditTierRule),
        Box::new(EngagementRule),
    ]
}

/// Rule-based retention offer generator
pub struct OfferEngine {
    rules: Vec<Box<dyn OfferRule>>,
}

impl OfferEngine {
    /// Engine over the standard decision table
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Engine over a custom rule list (order is output order)
    pub fn with_rules(rules: Vec<Box<dyn OfferRule>>) -> Self {
        Self { rules }
    }

    /// Apply every rule in order, collecting the offers that fire
    pub fn generate(&self, input: &OfferInput) -> OfferSet {
        let mut offers = OfferSet::new();

        for rule in &self.rules {
            if let Some(offer) = rule.evaluate(input) {
                log::debug!("{} fired: {}", rule.name(), offer.title);
                offers.push(offer);
            }
        }

        offers
    }
}

impl Default for OfferEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate retention offers for one customer (the "generate offers" action)
pub fn generate_offers(
    age: u32,
    balance: f64,
    salary: f64,
    num_products: u32,
    credit_score: u32,
    is_active_member: bool,
) -> OfferSet {
    let input = OfferInput {
        age,
        balance,
        salary,
        num_products,
        credit_score,
        is_active_member,
    };

    OfferEngine::new().generate(&input)
}

// ============================================================================
// TESTS
// ============================================================================
