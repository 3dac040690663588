use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{HealthCondition, Region, Sex, UserProfile};

/// Request for a full premium quote.
///
/// The range rules mirror the bounds the hosting page enforces on its
/// widgets, so a well-behaved client never trips them; they are the
/// structural backstop for hand-rolled callers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(range(min = 18, max = 65))]
    pub age: u8,
    pub sex: Sex,
    #[validate(range(min = 15.0, max = 45.0))]
    pub bmi: f64,
    #[validate(range(min = 0, max = 5))]
    pub children: u8,
    pub smoker: bool,
    pub region: Region,
    #[validate(range(min = 200_000, max = 1_000_000))]
    #[serde(alias = "annual_income", rename = "annualIncome")]
    pub annual_income: u32,
    #[validate(range(min = 0, max = 6))]
    #[serde(alias = "exercise_days_per_week", rename = "exerciseDaysPerWeek")]
    pub exercise_days_per_week: u8,
    #[serde(alias = "health_conditions", rename = "healthConditions", default)]
    pub health_conditions: Vec<HealthCondition>,
}

impl QuoteRequest {
    /// Convert into the domain profile consumed by the quoter.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            age: self.age,
            sex: self.sex,
            bmi: self.bmi,
            children: self.children,
            smoker: self.smoker,
            region: self.region,
            annual_income: self.annual_income,
            exercise_days_per_week: self.exercise_days_per_week,
            health_conditions: self.health_conditions,
        }
    }
}

/// Request for the live risk-score preview shown on the form before the
/// applicant asks for a price. Carries only the health-relevant fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RiskScoreRequest {
    #[validate(range(min = 18, max = 65))]
    pub age: u8,
    #[validate(range(min = 15.0, max = 45.0))]
    pub bmi: f64,
    pub smoker: bool,
    #[serde(alias = "health_conditions", rename = "healthConditions", default)]
    pub health_conditions: Vec<HealthCondition>,
}
