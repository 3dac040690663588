use serde::{Deserialize, Serialize};

/// Number of features the trained cost model expects, in the fixed
/// training-time order (see [`crate::core::encoding`]).
pub const FEATURE_LEN: usize = 9;

/// Fixed-order numeric input for the cost model.
pub type FeatureVector = [f64; FEATURE_LEN];

/// Applicant sex as recorded on the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Residential region of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

/// Declared health conditions, multi-select on the form.
///
/// Wire names match the option labels used when the model was trained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCondition {
    Diabetes,
    #[serde(rename = "High BP")]
    HighBloodPressure,
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    Asthma,
    #[serde(rename = "No major issues")]
    NoMajorIssues,
}

/// One applicant submission, built from the quote form and discarded after
/// the response is rendered. Nothing is persisted between submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u8,
    pub sex: Sex,
    pub bmi: f64,
    pub children: u8,
    pub smoker: bool,
    pub region: Region,
    #[serde(rename = "annualIncome")]
    pub annual_income: u32,
    #[serde(rename = "exerciseDaysPerWeek")]
    pub exercise_days_per_week: u8,
    #[serde(rename = "healthConditions", default)]
    pub health_conditions: Vec<HealthCondition>,
}

impl UserProfile {
    /// Membership test over the declared conditions. Duplicate selections
    /// have no extra effect; the scorer only asks whether a condition is
    /// present.
    pub fn has_condition(&self, condition: HealthCondition) -> bool {
        self.health_conditions.contains(&condition)
    }
}

/// Priced quote for one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Predicted annual cost, raw model output
    pub amount: f64,
    /// Display rendering of `amount`, e.g. `₹ 24,580.50`
    pub formatted: String,
    /// Medical risk score fed into the model as feature 6
    #[serde(rename = "riskScore")]
    pub risk_score: u32,
}
