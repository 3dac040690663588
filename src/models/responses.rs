use serde::{Deserialize, Serialize};

/// Response for the quote estimate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(rename = "quoteId")]
    pub quote_id: String,
    /// Predicted annual cost, raw model output
    pub amount: f64,
    /// Display string the page renders verbatim
    pub formatted: String,
    #[serde(rename = "riskScore")]
    pub risk_score: u32,
    /// Name of the model artifact that priced this quote
    pub model: String,
}

/// Response for the risk-score preview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScoreResponse {
    #[serde(rename = "riskScore")]
    pub risk_score: u32,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
