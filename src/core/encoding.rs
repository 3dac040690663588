use crate::models::{FeatureVector, Region, Sex, UserProfile};

/// Numeric code for sex, as used when the cost model was trained.
#[inline]
pub fn sex_code(sex: Sex) -> f64 {
    match sex {
        Sex::Male => 1.0,
        Sex::Female => 0.0,
    }
}

/// Numeric code for the smoker flag.
#[inline]
pub fn smoker_code(smoker: bool) -> f64 {
    if smoker {
        1.0
    } else {
        0.0
    }
}

/// Numeric code for the region, matching the training-time label encoding.
#[inline]
pub fn region_code(region: Region) -> f64 {
    match region {
        Region::Northeast => 0.0,
        Region::Northwest => 1.0,
        Region::Southeast => 2.0,
        Region::Southwest => 3.0,
    }
}

/// Assemble the model input for one applicant.
///
/// The element order is a contract with the trained artifact and must only
/// change together with it:
///
/// `[age, sex, bmi, children, smoker, region, riskScore, annualIncome,
/// exerciseDaysPerWeek]`
pub fn encode_features(profile: &UserProfile, risk_score: u32) -> FeatureVector {
    [
        profile.age as f64,
        sex_code(profile.sex),
        profile.bmi,
        profile.children as f64,
        smoker_code(profile.smoker),
        region_code(profile.region),
        risk_score as f64,
        profile.annual_income as f64,
        profile.exercise_days_per_week as f64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthCondition;

    fn create_profile() -> UserProfile {
        UserProfile {
            age: 60,
            sex: Sex::Male,
            bmi: 32.0,
            children: 2,
            smoker: true,
            region: Region::Southeast,
            annual_income: 400_000,
            exercise_days_per_week: 2,
            health_conditions: vec![HealthCondition::Diabetes, HealthCondition::HighBloodPressure],
        }
    }

    #[test]
    fn test_sex_codes() {
        assert_eq!(sex_code(Sex::Male), 1.0);
        assert_eq!(sex_code(Sex::Female), 0.0);
    }

    #[test]
    fn test_smoker_codes() {
        assert_eq!(smoker_code(true), 1.0);
        assert_eq!(smoker_code(false), 0.0);
    }

    #[test]
    fn test_region_codes() {
        assert_eq!(region_code(Region::Northeast), 0.0);
        assert_eq!(region_code(Region::Northwest), 1.0);
        assert_eq!(region_code(Region::Southeast), 2.0);
        assert_eq!(region_code(Region::Southwest), 3.0);
    }

    #[test]
    fn test_feature_order_high_risk_applicant() {
        let features = encode_features(&create_profile(), 11);
        assert_eq!(
            features,
            [60.0, 1.0, 32.0, 2.0, 1.0, 2.0, 11.0, 400_000.0, 2.0]
        );
    }

    #[test]
    fn test_feature_order_clean_applicant() {
        let profile = UserProfile {
            age: 25,
            sex: Sex::Female,
            bmi: 22.0,
            children: 0,
            smoker: false,
            region: Region::Northeast,
            annual_income: 300_000,
            exercise_days_per_week: 3,
            health_conditions: vec![HealthCondition::NoMajorIssues],
        };

        let features = encode_features(&profile, 0);
        assert_eq!(features, [25.0, 0.0, 22.0, 0.0, 0.0, 0.0, 0.0, 300_000.0, 3.0]);
    }
}
