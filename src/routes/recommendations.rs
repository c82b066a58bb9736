use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::RecommendationSettings;
use crate::core::{Recommender, RequiredSkills};
use crate::errors::ApiError;
use crate::models::{HealthResponse, RecommendRequest, RecommendResponse, ScoreRequest, ScoreResponse};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub limits: RecommendationSettings,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend))
        .route("/recommendations/score", web::post().to(score));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank freelancers
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "freelancers": [{ "id": "f1", "skills": ["React"], "rating": 4.8,
///                     "profileCompleteness": 90, "completedProjects": 12 }],
///   "requirements": { "requiredSkills": ["react", "node"] },
///   "limit": 20
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    if req.freelancers.len() > state.limits.max_freelancers {
        return Err(ApiError::TooManyFreelancers {
            count: req.freelancers.len(),
            max: state.limits.max_freelancers,
        });
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {}", errors);
        return Err(errors.into());
    }

    let total_candidates = req.freelancers.len();
    let mut ranking = state
        .recommender
        .rank(&req.freelancers, req.requirements.as_ref());

    if let Some(limit) = req.limit {
        ranking.truncate(limit.min(state.limits.max_limit));
    }

    let response = RecommendResponse {
        mode: ranking.mode(),
        total_results: ranking.len(),
        freelancers: ranking,
        total_candidates,
    };

    tracing::info!(
        "Returning {} recommendations ({:?} mode) from {} candidates",
        response.total_results,
        response.mode,
        total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Explain one freelancer's score
///
/// POST /api/v1/recommendations/score
///
/// Request body:
/// ```json
/// {
///   "freelancer": { "id": "f1", "skills": ["React"], "rating": 4.8 },
///   "requiredSkills": ["react"]
/// }
/// ```
async fn score(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let required = RequiredSkills::new(&req.required_skills).ok_or_else(|| {
        ApiError::Validation("requiredSkills must contain at least one non-empty skill".to_string())
    })?;

    let breakdown = state.recommender.score(&req.freelancer, &required);
    let passes_threshold = state.recommender.passes(&breakdown);

    tracing::debug!(
        "Scored freelancer {}: {} (passes: {})",
        req.freelancer.id,
        breakdown.recommendation_score,
        passes_threshold
    );

    Ok(HttpResponse::Ok().json(ScoreResponse {
        breakdown,
        min_score: state.recommender.min_score(),
        passes_threshold,
    }))
}
