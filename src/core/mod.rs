// Core algorithm exports
pub mod encoding;
pub mod quoter;
pub mod risk;

pub use encoding::{encode_features, region_code, sex_code, smoker_code};
pub use quoter::{format_currency, Quoter};
pub use risk::{medical_risk_score, score_profile};
