//! Offer Rules (Extensible)
//!
//! Independent threshold rules over customer attributes. Each rule
//! contributes at most one offer; boundaries are inclusive/exclusive
//! exactly as the constants below read.

use super::types::{Offer, OfferCategory, OfferInput};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// age < 30 is the youth band
pub const YOUTH_AGE_LIMIT: u32 = 30;
/// age > 50 is the senior band; 30..=50 is the family band
pub const SENIOR_AGE_LIMIT: u32 = 50;

/// balance < 5000 is the low tier
pub const LOW_BALANCE_LIMIT: f64 = 5_000.0;
/// balance >= 20000 is the platinum tier; in between is priority
pub const HIGH_BALANCE_LIMIT: f64 = 20_000.0;

/// salary >= 40000 is the investor tier
pub const HIGH_SALARY_LIMIT: f64 = 40_000.0;

/// num_products >= 2 is the multi-product tier
pub const MULTI_PRODUCT_MIN: u32 = 2;

/// credit_score < 600 needs improvement assistance
pub const FAIR_CREDIT_LIMIT: u32 = 600;
/// credit_score >= 750 is the preferred tier; 600..750 is loyalty
pub const EXCELLENT_CREDIT_LIMIT: u32 = 750;

// ============================================================================
// OFFER RULE TRAIT
// ============================================================================

/// One row group of the retention decision table
pub trait OfferRule: Send + Sync {
    fn name(&self) -> &str;
    fn category(&self) -> OfferCategory;
    /// Evaluate against the input; at most one offer per rule
    fn evaluate(&self, input: &OfferInput) -> Option<Offer>;
}

// ============================================================================
// BUILT-IN RULES
// ============================================================================

/// Age band: youth / family / senior
pub struct AgeBandRule;

impl OfferRule for AgeBandRule {
    fn name(&self) -> &str {
        "AgeBandRule"
    }

    fn category(&self) -> OfferCategory {
        OfferCategory::AgeBand
    }

    fn evaluate(&self, input: &OfferInput) -> Option<Offer> {
        let offer = if input.age < YOUTH_AGE_LIMIT {
            Offer::new(
                self.category(),
                "Youth Advantage Savings Account",
                "A high-interest savings account designed for young customers to achieve financial goals faster.",
            )
        } else if input.age <= SENIOR_AGE_LIMIT {
            Offer::new(
                self.category(),
                "Family Benefit Program",
                "Provides benefits for families, such as joint accounts and insurance for family members.",
            )
        } else {
            Offer::new(
                self.category(),
                "Senior Citizen Wellness Program",
                "A program with lower banking fees, priority service, and health-related perks for senior customers.",
            )
        };

        Some(offer)
    }
}

/// Balance tier: low / medium / high
pub struct BalanceTierRule;

impl OfferRule for BalanceTierRule {
    fn name(&self) -> &str {
        "BalanceTierRule"
    }

    fn category(&self) -> OfferCategory {
        OfferCategory::BalanceTier
    }

    fn evaluate(&self, input: &OfferInput) -> Option<Offer> {
        let offer = if input.balance < LOW_BALANCE_LIMIT {
            Offer::new(
                self.category(),
                "Low-Balance Fee Waiver",
                "Waives fees on maintaining a minimum balance, helping customers manage their accounts affordably.",
            )
        } else if input.balance < HIGH_BALANCE_LIMIT {
            Offer::new(
                self.category(),
                "Priority Banking",
                "Provides dedicated support and faster service for medium balance accounts, improving the customer experience.",
            )
        } else {
            Offer::new(
                self.category(),
                "Platinum Membership",
                "Exclusive banking privileges, including personal advisors and premium support.",
            )
        };

        Some(offer)
    }
}

/// Salary tier: saver / investor
pub struct SalaryTierRule;

impl OfferRule for SalaryTierRule {
    fn name(&self) -> &str {
        "SalaryTierRule"
    }

    fn category(&self) -> OfferCategory {
        OfferCategory::SalaryTier
    }

    fn evaluate(&self, input: &OfferInput) -> Option<Offer> {
        let offer = if input.salary < HIGH_SALARY_LIMIT {
            Offer::new(
                self.category(),
                "Savings Booster Plan",
                "Automated deposits to encourage savings and build financial security over time.",
            )
        } else {
            Offer::new(
                self.category(),
                "Premium Investment Plan",
                "Tailored for high earners, offering personalized investment options and wealth management support.",
            )
        };

        Some(offer)
    }
}

/// Product mix: cross-sell single-product customers, reward the rest
pub struct ProductMixRule;

impl OfferRule for ProductMixRule {
    fn name(&self) -> &str {
        "ProductMixRule"
    }

    fn category(&self) -> OfferCategory {
        OfferCategory::ProductMix
    }

    fn evaluate(&self, input: &OfferInput) -> Option<Offer> {
        let offer = if input.num_products < MULTI_PRODUCT_MIN {
            Offer::new(
                self.category(),
                "Cross-sell Offer",
                "Special discounts on loans and credit cards to encourage use of multiple banking products.",
            )
        } else {
            Offer::new(
                self.category(),
                "Reward Program",
                "Loyalty rewards, including cashback and exclusive benefits for long-term customers.",
            )
        };

        Some(offer)
    }
}

/// Credit score tier: assistance / loyalty / preferred
pub struct CreditTierRule;

impl OfferRule for CreditTierRule {
    fn name(&self) -> &str {
        "CreditTierRule"
    }

    fn category(&self) -> OfferCategory {
        OfferCategory::CreditTier
    }

    fn evaluate(&self, input: &OfferInput) -> Option<Offer> {
        let offer = if input.credit_score < FAIR_CREDIT_LIMIT {
            Offer::new(
                self.category(),
                "Credit Improvement Assistance",
                "Financial counseling and credit score monitoring to help improve credit scores.",
            )
        } else if input.credit_score < EXCELLENT_CREDIT_LIMIT {
            Offer::new(
                self.category(),
                "Loyalty Rewards",
                "Special rewards for good credit behavior, offering perks and reduced fees.",
            )
        } else {
            Offer::new(
                self.category(),
                "Preferred Customer Program",
                "Lower loan rates and exclusive benefits for customers with excellent credit scores.",
            )
        };

        Some(offer)
    }
}

/// Engagement: only inactive members get an offer
pub struct EngagementRule;

impl OfferRule for EngagementRule {
    fn name(&self) -> &str {
        "EngagementRule"
    }

    fn category(&self) -> OfferCategory {
        OfferCategory::Engagement
    }

    fn evaluate(&self, input: &OfferInput) -> Option<Offer> {
        if input.is_active_member {
            return None;
        }

        Some(Offer::new(
            self.category(),
            "Special Engagement Package",
            "Increased account activity benefits, such as fee reductions and reward points.",
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> OfferInput {
        OfferInput {
            age: 35,
            balance: 10_000.0,
            salary: 50_000.0,
            num_products: 2,
            credit_score: 650,
            is_active_member: true,
        }
    }

    #[test]
    fn test_age_bands() {
        let rule = AgeBandRule;
        let mut i = input();

        i.age = 29;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Youth Advantage Savings Account");

        // Both edges of the family band are inclusive
        i.age = 30;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Family Benefit Program");
        i.age = 50;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Family Benefit Program");

        i.age = 51;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Senior Citizen Wellness Program");
    }

    #[test]
    fn test_balance_tiers() {
        let rule = BalanceTierRule;
        let mut i = input();

        i.balance = 4_999.99;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Low-Balance Fee Waiver");

        i.balance = 5_000.0;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Priority Banking");
        i.balance = 19_999.99;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Priority Banking");

        i.balance = 20_000.0;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Platinum Membership");
    }

    #[test]
    fn test_salary_tiers() {
        let rule = SalaryTierRule;
        let mut i = input();

        i.salary = 39_999.99;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Savings Booster Plan");

        i.salary = 40_000.0;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Premium Investment Plan");
    }

    #[test]
    fn test_product_mix() {
        let rule = ProductMixRule;
        let mut i = input();

        i.num_products = 1;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Cross-sell Offer");

        i.num_products = 2;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Reward Program");
    }

    #[test]
    fn test_credit_tiers() {
        let rule = CreditTierRule;
        let mut i = input();

        i.credit_score = 599;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Credit Improvement Assistance");

        i.credit_score = 600;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Loyalty Rewards");
        i.credit_score = 749;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Loyalty Rewards");

        i.credit_score = 750;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Preferred Customer Program");
    }

    #[test]
    fn test_engagement_is_conditional() {
        let rule = EngagementRule;
        let mut i = input();

        i.is_active_member = true;
        assert!(rule.evaluate(&i).is_none());

        i.is_active_member = false;
        assert_eq!(rule.evaluate(&i).unwrap().title, "Special Engagement Package");
    }

    #[test]
    fn test_unconditional_rules_always_fire() {
        // Every rule except Engagement contributes exactly one offer for
        // any input.
        let i = input();
        assert!(AgeBandRule.evaluate(&i).is_some());
        assert!(BalanceTierRule.evaluate(&i).is_some());
        assert!(SalaryTierRule.evaluate(&i).is_some());
        assert!(ProductMixRule.evaluate(&i).is_some());
        assert!(CreditTierRule.evaluate(&i).is_some());
    }
}
