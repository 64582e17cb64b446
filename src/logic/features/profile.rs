//! Customer Profile Types
//!
//! Raw customer attributes as collected by the form layer.
//! Transient - a profile lives for one prediction or offer-generation call.

use serde::{Deserialize, Serialize};

// ============================================================================
// GEOGRAPHY
// ============================================================================

/// Customer geography. France is the one-hot reference category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geography {
    Germany,
    Spain,
    France,
}

impl Geography {
    pub fn as_str(&self) -> &'static str {
        match self {
            Geography::Germany => "Germany",
            Geography::Spain => "Spain",
            Geography::France => "France",
        }
    }

    /// One-hot encoding as (germany, spain). France is all zeros.
    pub fn one_hot(&self) -> (f32, f32) {
        match self {
            Geography::Germany => (1.0, 0.0),
            Geography::Spain => (0.0, 1.0),
            Geography::France => (0.0, 0.0),
        }
    }

    /// Coerce a raw form value. Anything that is not Germany or Spain falls
    /// back to the reference category.
    pub fn from_form_value(value: &str) -> Geography {
        match value.trim().to_ascii_lowercase().as_str() {
            "germany" => Geography::Germany,
            "spain" => Geography::Spain,
            _ => Geography::France,
        }
    }
}

impl std::fmt::Display for Geography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Geography {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "germany" => Ok(Geography::Germany),
            "spain" => Ok(Geography::Spain),
            "france" => Ok(Geography::France),
            _ => Err(InvalidInputError::new("geography", s)),
        }
    }
}

// ============================================================================
// GENDER
// ============================================================================

/// Customer gender, coded as it was at training time (Male = 1, Female = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Numeric coding used by the trained model
    pub fn encoded(&self) -> f32 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(InvalidInputError::new("gender", s)),
        }
    }
}

// ============================================================================
// CUSTOMER PROFILE
// ============================================================================

/// One customer's raw attributes, as entered in the form.
///
/// Range hints (credit_score 0-1000, age 0-120, tenure 0-10, num_products
/// 1-4, non-negative balance) are enforced upstream by the form layer.
/// The encoder passes values through uncorrected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub credit_score: u32,
    pub age: u32,
    pub tenure: u32,
    pub balance: f64,
    pub num_products: u32,
    pub has_credit_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
    pub geography: Geography,
    pub gender: Gender,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// A raw form field that could not be coerced. Input sanitization is the
/// caller's responsibility; the core only reports, never repairs.
#[derive(Debug, Clone)]
pub struct InvalidInputError {
    pub field: &'static str,
    pub value: String,
}

impl InvalidInputError {
    pub fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid value for {}: '{}'", self.field, self.value)
    }
}

impl std::error::Error for InvalidInputError {}

// ============================================================================
// TESTS
// ============================================================================
