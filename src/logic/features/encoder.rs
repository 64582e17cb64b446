//! Feature Encoder - CustomerProfile to FeatureVector
//!
//! Maps raw customer attributes into the exact numeric layout the scaler
//! and classifier were fitted on. Pure function; no validation beyond the
//! range hints enforced upstream, out-of-range values pass through
//! uncorrected.

use super::profile::CustomerProfile;
use super::vector::FeatureVector;

/// Encode a profile into the model's feature layout.
///
/// Geography is one-hot encoded with France as the reference category;
/// booleans become 0/1; everything else is coerced to f32 unchanged.
pub fn encode(profile: &CustomerProfile) -> FeatureVector {
    let mut vector = FeatureVector::new();

    vector.set_by_name("credit_score", profile.credit_score as f32);
    vector.set_by_name("age", profile.age as f32);
    vector.set_by_name("tenure", profile.tenure as f32);
    vector.set_by_name("balance", profile.balance as f32);
    vector.set_by_name("num_products", profile.num_products as f32);
    vector.set_by_name("has_credit_card", if profile.has_credit_card { 1.0 } else { 0.0 });
    vector.set_by_name("is_active_member", if profile.is_active_member { 1.0 } else { 0.0 });
    vector.set_by_name("estimated_salary", profile.estimated_salary as f32);

    let (germany, spain) = profile.geography.one_hot();
    vector.set_by_name("geography_is_germany", germany);
    vector.set_by_name("geography_is_spain", spain);

    vector.set_by_name("gender", profile.gender.encoded());

    vector
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::profile::{Gender, Geography};

    fn sample_profile() -> CustomerProfile {
        CustomerProfile {
            credit_score: 600,
            age: 35,
            tenure: 5,
            balance: 12_500.0,
            num_products: 1,
            has_credit_card: true,
            is_active_member: false,
            estimated_salary: 50_000.0,
            geography: Geography::France,
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_encode_field_order() {
        let vector = encode(&sample_profile());
        let values = vector.as_array();

        // Training-time column order, position by position.
        assert_eq!(values[0], 600.0); // credit_score
        assert_eq!(values[1], 35.0); // age
        assert_eq!(values[2], 5.0); // tenure
        assert_eq!(values[3], 12_500.0); // balance
        assert_eq!(values[4], 1.0); // num_products
        assert_eq!(values[5], 1.0); // has_credit_card
        assert_eq!(values[6], 0.0); // is_active_member
        assert_eq!(values[7], 50_000.0); // estimated_salary
        assert_eq!(values[10], 1.0); // gender (Male = 1)
    }

    #[test]
    fn test_encode_geography_germany() {
        let mut profile = sample_profile();
        profile.geography = Geography::Germany;

        let vector = encode(&profile);
        assert_eq!(vector.get_by_name("geography_is_germany"), Some(1.0));
        assert_eq!(vector.get_by_name("geography_is_spain"), Some(0.0));
    }

    #[test]
    fn test_encode_geography_spain() {
        let mut profile = sample_profile();
        profile.geography = Geography::Spain;

        let vector = encode(&profile);
        assert_eq!(vector.get_by_name("geography_is_germany"), Some(0.0));
        assert_eq!(vector.get_by_name("geography_is_spain"), Some(1.0));
    }

    #[test]
    fn test_encode_geography_reference_category() {
        // France, and any raw value coerced through from_form_value,
        // leaves both flags at zero.
        let mut profile = sample_profile();
        profile.geography = Geography::from_form_value("somewhere else");

        let vector = encode(&profile);
        assert_eq!(vector.get_by_name("geography_is_germany"), Some(0.0));
        assert_eq!(vector.get_by_name("geography_is_spain"), Some(0.0));
    }

    #[test]
    fn test_encode_trusts_caller_ranges() {
        // Encoder passes out-of-range values through uncorrected.
        let mut profile = sample_profile();
        profile.balance = -3_000.0;

        let vector = encode(&profile);
        assert_eq!(vector.get_by_name("balance"), Some(-3_000.0));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(encode(&profile), encode(&profile));
    }
}
