use crate::models::{HealthCondition, UserProfile};

/// Weight added per declared condition
const DIABETES_WEIGHT: u32 = 3;
const HIGH_BP_WEIGHT: u32 = 2;
const HEART_DISEASE_WEIGHT: u32 = 4;
const ASTHMA_WEIGHT: u32 = 2;

/// Bonuses applied after the condition block
const OBESE_BMI_WEIGHT: u32 = 2;
const SENIOR_AGE_WEIGHT: u32 = 1;
const SMOKER_WEIGHT: u32 = 3;

const OBESE_BMI_THRESHOLD: f64 = 30.0;
const SENIOR_AGE_THRESHOLD: u8 = 50;

/// Derive the medical risk score for one applicant.
///
/// Scoring steps, in order:
/// 1. Each declared condition adds its weight (Diabetes +3, High BP +2,
///    Heart Disease +4, Asthma +2). Contributions are independent and
///    never short-circuit each other.
/// 2. "No major issues" resets the running score to 0, discarding whatever
///    the condition block accumulated, regardless of what else is ticked.
/// 3. BMI over 30 adds 2, age over 50 adds 1, smoking adds 3. These apply
///    after the reset, so a "no major issues" applicant can still carry a
///    non-zero score from lifestyle alone. The trained model was fit
///    against scores computed in exactly this order; keep it.
pub fn medical_risk_score(
    conditions: &[HealthCondition],
    bmi: f64,
    age: u8,
    smoker: bool,
) -> u32 {
    let mut score = 0;

    if conditions.contains(&HealthCondition::Diabetes) {
        score += DIABETES_WEIGHT;
    }
    if conditions.contains(&HealthCondition::HighBloodPressure) {
        score += HIGH_BP_WEIGHT;
    }
    if conditions.contains(&HealthCondition::HeartDisease) {
        score += HEART_DISEASE_WEIGHT;
    }
    if conditions.contains(&HealthCondition::Asthma) {
        score += ASTHMA_WEIGHT;
    }

    if conditions.contains(&HealthCondition::NoMajorIssues) {
        score = 0;
    }

    if bmi > OBESE_BMI_THRESHOLD {
        score += OBESE_BMI_WEIGHT;
    }
    if age > SENIOR_AGE_THRESHOLD {
        score += SENIOR_AGE_WEIGHT;
    }
    if smoker {
        score += SMOKER_WEIGHT;
    }

    score
}

/// Score an applicant profile directly.
#[inline]
pub fn score_profile(profile: &UserProfile) -> u32 {
    medical_risk_score(
        &profile.health_conditions,
        profile.bmi,
        profile.age,
        profile.smoker,
    )
}
