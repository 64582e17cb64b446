//! Offer Types
//!
//! Data structures for retention offers. No decision logic here.

use serde::{Deserialize, Serialize};

use crate::logic::features::CustomerProfile;

// ============================================================================
// OFFER CATEGORY
// ============================================================================

/// Rule category an offer came from, in rule-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferCategory {
    /// Age band (youth / family / senior)
    AgeBand,
    /// Balance tier (low / medium / high)
    BalanceTier,
    /// Salary tier (saver / investor)
    SalaryTier,
    /// Product mix (cross-sell / reward)
    ProductMix,
    /// Credit score tier
    CreditTier,
    /// Inactive-member engagement
    Engagement,
}

impl OfferCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferCategory::AgeBand => "age_band",
            OfferCategory::BalanceTier => "balance_tier",
            OfferCategory::SalaryTier => "salary_tier",
            OfferCategory::ProductMix => "product_mix",
            OfferCategory::CreditTier => "credit_tier",
            OfferCategory::Engagement => "engagement",
        }
    }
}

impl std::fmt::Display for OfferCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// OFFER
// ============================================================================

/// A single retention offer recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub category: OfferCategory,
    /// Short label
    pub title: String,
    /// Explanatory sentence
    pub description: String,
}

impl Offer {
    pub fn new(category: OfferCategory, title: &str, description: &str) -> Self {
        Self {
            category,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl std::fmt::Display for Offer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

// ============================================================================
// OFFER SET
// ============================================================================

/// Ordered sequence of offers; order reflects rule-table order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferSet {
    offers: Vec<Offer>,
}

impl OfferSet {
    pub fn new() -> Self {
        Self { offers: Vec::new() }
    }

    pub fn push(&mut self, offer: Offer) {
        self.offers.push(offer);
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter()
    }

    pub fn as_slice(&self) -> &[Offer] {
        &self.offers
    }

    /// Titles in offer order, handy for rendering and assertions
    pub fn titles(&self) -> Vec<&str> {
        self.offers.iter().map(|o| o.title.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Offer> {
        self.offers
    }
}

impl IntoIterator for OfferSet {
    type Item = Offer;
    type IntoIter = std::vec::IntoIter<Offer>;

    fn into_iter(self) -> Self::IntoIter {
        self.offers.into_iter()
    }
}

// ============================================================================
// OFFER INPUT
// ============================================================================

/// The subset of customer attributes the rule table reads
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OfferInput {
    pub age: u32,
    pub balance: f64,
    pub salary: f64,
    pub num_products: u32,
    pub credit_score: u32,
    pub is_active_member: bool,
}

impl OfferInput {
    pub fn from_profile(profile: &CustomerProfile) -> Self {
        Self {
            age: profile.age,
            balance: profile.balance,
            salary: profile.estimated_salary,
            num_products: profile.num_products,
            credit_score: profile.credit_score,
            is_active_member: profile.is_active_member,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{Gender, Geography};

    #[test]
    fn test_offer_set_preserves_order() {
        let mut set = OfferSet::new();
        set.push(Offer::new(OfferCategory::AgeBand, "First", "a"));
        set.push(Offer::new(OfferCategory::BalanceTier, "Second", "b"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.titles(), vec!["First", "Second"]);
    }

    #[test]
    fn test_offer_display() {
        let offer = Offer::new(OfferCategory::Engagement, "Title", "Sentence.");
        assert_eq!(offer.to_string(), "Title: Sentence.");
    }

    #[test]
    fn test_offer_input_from_profile() {
        let profile = CustomerProfile {
            credit_score: 500,
            age: 25,
            tenure: 2,
            balance: 1_000.0,
            num_products: 1,
            has_credit_card: false,
            is_active_member: false,
            estimated_salary: 30_000.0,
            geography: Geography::Spain,
            gender: Gender::Female,
        };

        let input = OfferInput::from_profile(&profile);
        assert_eq!(input.age, 25);
        assert_eq!(input.balance, 1_000.0);
        assert_eq!(input.salary, 30_000.0);
        assert_eq!(input.num_products, 1);
        assert_eq!(input.credit_score, 500);
        assert!(!input.is_active_member);
    }
}
