use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::FEATURE_LEN;

/// Errors raised by the cost model
#[derive(Debug, Error)]
pub enum ModelError {
    /// Artifact missing or corrupt. Raised at startup only; the process
    /// must not serve quotes without a model.
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    /// Inference failed for one submission. The caller may resubmit; the
    /// process keeps serving.
    #[error("Prediction error: {0}")]
    Prediction(String),
}

/// Opaque inference capability over a fixed-length numeric vector.
///
/// The quoter neither knows nor cares how the estimate is computed; any
/// artifact that accepts the 9-feature input and returns one number fits
/// behind this trait.
pub trait CostModel: Send + Sync {
    /// Predict the annual cost for one encoded feature vector.
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Artifact name, for logs and health reporting.
    fn name(&self) -> &str;
}

/// On-disk shape of the trained regression artifact, exported by the
/// training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    /// Feature names in training order; doubles as the input-order contract
    #[serde(rename = "featureNames")]
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Linear regression cost model loaded from a JSON artifact.
///
/// Loaded once at startup and shared read-only across workers for the
/// lifetime of the process.
#[derive(Debug, Clone)]
pub struct LinearCostModel {
    name: String,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearCostModel {
    /// Load and verify the artifact at `path`.
    ///
    /// Any failure here is `ModelError::Unavailable`; callers are expected
    /// to abort startup on it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|e| {
            ModelError::Unavailable(format!("cannot read artifact {}: {}", path.display(), e))
        })?;

        let artifact: ModelArtifact = serde_json::from_str(&raw).map_err(|e| {
            ModelError::Unavailable(format!("cannot parse artifact {}: {}", path.display(), e))
        })?;

        Self::from_artifact(artifact)
    }

    /// Build the model from an already-parsed artifact, verifying its
    /// internal consistency.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact.coefficients.len() != artifact.feature_names.len() {
            return Err(ModelError::Unavailable(format!(
                "artifact {} declares {} features but carries {} coefficients",
                artifact.name,
                artifact.feature_names.len(),
                artifact.coefficients.len()
            )));
        }

        if artifact.coefficients.len() != FEATURE_LEN {
            return Err(ModelError::Unavailable(format!(
                "artifact {} expects {} features, this service encodes {}",
                artifact.name,
                artifact.coefficients.len(),
                FEATURE_LEN
            )));
        }

        if !artifact.coefficients.iter().all(|c| c.is_finite())
            || !artifact.intercept.is_finite()
        {
            return Err(ModelError::Unavailable(format!(
                "artifact {} contains non-finite parameters",
                artifact.name
            )));
        }

        Ok(Self {
            name: artifact.name,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }
}

impl CostModel for LinearCostModel {
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::Prediction(format!(
                "feature vector has {} elements, model expects {}",
                features.len(),
                self.coefficients.len()
            )));
        }

        let estimate: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept;

        if !estimate.is_finite() {
            return Err(ModelError::Prediction(format!(
                "model {} produced a non-finite estimate",
                self.name
            )));
        }

        Ok(estimate)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_artifact() -> ModelArtifact {
        ModelArtifact {
            name: "test-ols".to_string(),
            schema_version: 1,
            feature_names: vec![
                "age".into(),
                "sex".into(),
                "bmi".into(),
                "children".into(),
                "smoker".into(),
                "region".into(),
                "medicalRiskScore".into(),
                "annualIncome".into(),
                "exerciseDaysPerWeek".into(),
            ],
            coefficients: vec![100.0, 10.0, 50.0, 20.0, 500.0, 5.0, 200.0, 0.01, -30.0],
            intercept: 1000.0,
        }
    }

    #[test]
    fn test_predict_linear_combination() {
        let model = LinearCostModel::from_artifact(create_artifact()).unwrap();

        let features = [60.0, 1.0, 32.0, 2.0, 1.0, 2.0, 11.0, 400_000.0, 2.0];
        let expected = 100.0 * 60.0
            + 10.0
            + 50.0 * 32.0
            + 20.0 * 2.0
            + 500.0
            + 5.0 * 2.0
            + 200.0 * 11.0
            + 0.01 * 400_000.0
            + -30.0 * 2.0
            + 1000.0;

        let estimate = model.predict(&features).unwrap();
        assert!((estimate - expected).abs() < 1e-9);
    }

    #[test]
    fn test_predict_rejects_wrong_length() {
        let model = LinearCostModel::from_artifact(create_artifact()).unwrap();

        let err = model.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, ModelError::Prediction(_)));
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let err = LinearCostModel::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ModelError::Unavailable(_)));
    }

    #[test]
    fn test_load_corrupt_file_is_unavailable() {
        let path = std::env::temp_dir().join(format!("premia-corrupt-{}.json", std::process::id()));
        std::fs::write(&path, "not json at all").unwrap();

        let err = LinearCostModel::load(&path).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable(_)));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_mismatched_coefficient_count_is_unavailable() {
        let mut artifact = create_artifact();
        artifact.coefficients.pop();

        let err = LinearCostModel::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable(_)));
    }

    #[test]
    fn test_non_finite_parameters_are_unavailable() {
        let mut artifact = create_artifact();
        artifact.intercept = f64::NAN;

        let err = LinearCostModel::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable(_)));
    }

    #[test]
    fn test_load_round_trip() {
        let path = std::env::temp_dir().join(format!("premia-model-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&create_artifact()).unwrap()).unwrap();

        let model = LinearCostModel::load(&path).unwrap();
        assert_eq!(model.name(), "test-ols");

        std::fs::remove_file(&path).ok();
    }
}
