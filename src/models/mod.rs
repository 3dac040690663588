// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FeatureVector, HealthCondition, Quote, Region, Sex, UserProfile, FEATURE_LEN};
pub use requests::{QuoteRequest, RiskScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, QuoteResponse, RiskScoreResponse};
