use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{matcher, Tokenizer};
use crate::models::{
    ErrorResponse, HealthResponse, RankMatchesRequest, RankMatchesResponse, TextMatchRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub tokenizer: Arc<Tokenizer>,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/text", web::post().to(text_matches))
        .route("/debug/echo", web::post().to(debug_echo));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Debug endpoint to echo raw JSON for debugging
async fn debug_echo(body: web::Bytes, req: actix_web::HttpRequest) -> impl Responder {
    let body_str = String::from_utf8_lossy(&body);
    tracing::info!(
        "DEBUG echo - path: {}, method: {}, body: {}",
        req.path(),
        req.method(),
        body_str
    );
    HttpResponse::Ok().json(serde_json::json!({
        "path": req.path(),
        "method": req.method().to_string(),
        "body": body_str,
    }))
}

/// Rank mentors by skill overlap
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "mentee": { "id": "string", "skills": ["string"] },
///   "mentors": [{ "id": "string", "skills": ["string"] }],
///   "limit": 20
/// }
/// ```
///
/// An empty mentor pool or a mentee with no declared skills is a valid
/// degenerate input and yields an empty or zero-score list, not an error.
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    let limit = (req.limit as usize).min(state.max_limit);
    let total_candidates = req.mentors.len();

    tracing::info!(
        "Ranking {} mentors for mentee {} (request {}, limit {})",
        total_candidates,
        req.mentee.id,
        request_id,
        limit
    );

    let mut matches = matcher::rank(&req.mentee, &req.mentors);
    matches.truncate(limit);

    tracing::debug!(
        "Returning {} matches for mentee {} (request {})",
        matches.len(),
        req.mentee.id,
        request_id
    );

    HttpResponse::Ok().json(RankMatchesResponse {
        matches,
        total_candidates,
    })
}

/// Rank mentor bios against a reference text by cosine similarity
///
/// POST /api/v1/matches/text
///
/// Request body:
/// ```json
/// {
///   "reference": "string",
///   "documents": [{ "id": "string", "text": "string" }],
///   "limit": 20
/// }
/// ```
async fn text_matches(
    state: web::Data<AppState>,
    req: web::Json<TextMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for text_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    let limit = (req.limit as usize).min(state.max_limit);
    let total_candidates = req.documents.len();

    tracing::info!(
        "Ranking {} documents by text similarity (request {}, limit {})",
        total_candidates,
        request_id,
        limit
    );

    let mut matches = match state.tokenizer.rank_documents(&req.reference, &req.documents) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Text similarity pipeline failed (request {}): {}", request_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Text similarity failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };
    matches.truncate(limit);

    HttpResponse::Ok().json(RankMatchesResponse {
        matches,
        total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
