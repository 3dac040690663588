use crate::core::{encoding::encode_features, risk::score_profile};
use crate::models::{Quote, UserProfile};
use crate::services::{CostModel, ModelError};
use std::sync::Arc;

/// Currency symbol used on the quote page
const CURRENCY_SYMBOL: &str = "₹";

/// Per-submission pricing orchestrator
///
/// # Steps
/// 1. Derive the medical risk score
/// 2. Encode the fixed-order feature vector
/// 3. Run model inference
/// 4. Format the predicted cost for display
///
/// Holds the one process-wide model handle; everything else is computed
/// fresh per call, so a single `Quoter` is safely shared across workers.
#[derive(Clone)]
pub struct Quoter {
    model: Arc<dyn CostModel>,
}

impl Quoter {
    pub fn new(model: Arc<dyn CostModel>) -> Self {
        Self { model }
    }

    /// Name of the artifact backing this quoter, for health reporting.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Price one applicant submission.
    ///
    /// No retry on failure; the applicant resubmits from the page.
    pub fn quote(&self, profile: &UserProfile) -> Result<Quote, ModelError> {
        let risk_score = score_profile(profile);
        let features = encode_features(profile, risk_score);

        let amount = self.model.predict(&features)?;

        Ok(Quote {
            amount,
            formatted: format_currency(amount),
            risk_score,
        })
    }
}

/// Render a cost the way the quote page shows it: currency symbol, thousands
/// separators, two decimals.
pub fn format_currency(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{} {}{}.{}", CURRENCY_SYMBOL, sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HealthCondition, Region, Sex};
    use crate::services::ModelError;

    /// Fixed-output stand-in for the trained artifact
    struct StubModel {
        output: f64,
    }

    impl CostModel for StubModel {
        fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
            assert_eq!(features.len(), crate::models::FEATURE_LEN);
            Ok(self.output)
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

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
            health_conditions: vec![
                HealthCondition::Diabetes,
                HealthCondition::HighBloodPressure,
            ],
        }
    }

    #[test]
    fn test_quote_carries_risk_score_and_formatting() {
        let quoter = Quoter::new(Arc::new(StubModel { output: 24580.5 }));

        let quote = quoter.quote(&create_profile()).unwrap();

        assert_eq!(quote.risk_score, 11);
        assert_eq!(quote.amount, 24580.5);
        assert_eq!(quote.formatted, "₹ 24,580.50");
    }

    #[test]
    fn test_quote_propagates_prediction_failure() {
        struct FailingModel;

        impl CostModel for FailingModel {
            fn predict(&self, _features: &[f64]) -> Result<f64, ModelError> {
                Err(ModelError::Prediction("inference exploded".to_string()))
            }

            fn name(&self) -> &str {
                "failing"
            }
        }

        let quoter = Quoter::new(Arc::new(FailingModel));
        let err = quoter.quote(&create_profile()).unwrap_err();

        assert!(matches!(err, ModelError::Prediction(_)));
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "₹ 0.00");
        assert_eq!(format_currency(999.999), "₹ 1,000.00");
        assert_eq!(format_currency(24580.5), "₹ 24,580.50");
        assert_eq!(format_currency(1_234_567.891), "₹ 1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1234.5), "₹ -1,234.50");
    }
}
