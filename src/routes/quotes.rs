use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{medical_risk_score, Quoter};
use crate::models::{
    ErrorResponse, HealthResponse, QuoteRequest, QuoteResponse, RiskScoreRequest,
    RiskScoreResponse,
};
use crate::services::ModelError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub quoter: Quoter,
}

/// Configure all quote-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/quotes/estimate", web::post().to(estimate_quote))
        .route("/quotes/risk", web::post().to(preview_risk_score));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.quoter.model_name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Quote estimate endpoint
///
/// POST /api/v1/quotes/estimate
///
/// Request body:
/// ```json
/// {
///   "age": 25,
///   "sex": "female",
///   "bmi": 22.0,
///   "children": 0,
///   "smoker": false,
///   "region": "northeast",
///   "annualIncome": 300000,
///   "exerciseDaysPerWeek": 3,
///   "healthConditions": ["No major issues"]
/// }
/// ```
async fn estimate_quote(
    state: web::Data<AppState>,
    req: web::Json<QuoteRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for quote request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();

    match state.quoter.quote(&profile) {
        Ok(quote) => {
            tracing::info!(
                "Quoted {} (risk score {}) with model {}",
                quote.formatted,
                quote.risk_score,
                state.quoter.model_name()
            );

            HttpResponse::Ok().json(QuoteResponse {
                quote_id: uuid::Uuid::new_v4().to_string(),
                amount: quote.amount,
                formatted: quote.formatted,
                risk_score: quote.risk_score,
                model: state.quoter.model_name().to_string(),
            })
        }
        Err(e @ ModelError::Prediction(_)) => {
            // Surface the underlying message; the applicant may resubmit
            tracing::error!("Prediction failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Prediction failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
        Err(e) => {
            tracing::error!("Unexpected model error during quote: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Model error".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Risk score preview endpoint
///
/// POST /api/v1/quotes/risk
///
/// The form shows the medical risk score live while the applicant edits
/// their health details; this endpoint computes it without touching the
/// model.
async fn preview_risk_score(req: web::Json<RiskScoreRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let risk_score = medical_risk_score(&req.health_conditions, req.bmi, req.age, req.smoker);

    HttpResponse::Ok().json(RiskScoreResponse { risk_score })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            model: "insurance-cost-ols".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
