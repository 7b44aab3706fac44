use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{format_response, Matcher};
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, RosterResponse};
use crate::services::RosterStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_creatives))
        .route("/creatives", web::get().to(list_creatives));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let roster_size = match state.roster.load().await {
        Ok(roster) => Some(roster.len()),
        Err(e) => {
            tracing::warn!("Health check could not load roster: {}", e);
            None
        }
    };

    let status = if roster_size.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        roster_size,
    })
}

/// Match creatives endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "objective": "string",
///   "category": "string",
///   "region": "Global",
///   "channels": ["string"],
///   "formats": ["string"],
///   "budget": "low|medium|high"
/// }
/// ```
async fn match_creatives(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();

    if let Err(errors) = req.validate() {
        tracing::info!(%request_id, "Rejected brief: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid brief format. Required: category, objective".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let brief = req.into_inner().into_brief();

    let roster = match state.roster.load().await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!(%request_id, "Failed to load roster: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to match creatives".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let outcome = state.matcher.find_matches(&brief, &roster);
    let response = format_response(&brief, &outcome);

    tracing::info!(
        %request_id,
        category = %brief.category,
        "Returning {} matches (from {} candidates)",
        response.filtered_candidates,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Roster listing endpoint
///
/// GET /api/v1/creatives
async fn list_creatives(state: web::Data<AppState>) -> impl Responder {
    match state.roster.load().await {
        Ok(roster) => HttpResponse::Ok().json(RosterResponse {
            total: roster.len(),
            creatives: roster.to_vec(),
        }),
        Err(e) => {
            tracing::error!("Failed to load roster: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load roster".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Creative, MatchResponse};
    use actix_web::{test, App};

    fn create_creative(id: &str, country: &str) -> Creative {
        Creative {
            id: id.to_string(),
            name: format!("Creative {}", id),
            city: "Capital".to_string(),
            country: country.to_string(),
            skills: vec!["video".to_string(), "technology".to_string()],
            mediums: vec!["video".to_string()],
            themes: vec!["technology".to_string(), "startup".to_string()],
            portfolio_tags: vec!["technology".to_string()],
            day_rate_band: "medium".to_string(),
            availability: "available".to_string(),
            rating: 4.5,
            completed_projects_count: 60,
            languages: vec!["english".to_string()],
        }
    }

    fn app_state() -> AppState {
        AppState {
            roster: Arc::new(RosterStore::in_memory(vec![
                create_creative("1", "UAE"),
                create_creative("2", "Saudi Arabia"),
            ])),
            matcher: Matcher::default(),
        }
    }

    #[actix_web::test]
    async fn test_match_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({
                "objective": "launch app",
                "category": "technology",
                "region": "UAE",
                "formats": "video"
            }))
            .to_request();

        let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_candidates, 2);
        assert_eq!(resp.filtered_candidates, 1);
        assert_eq!(resp.top_matches[0].creative_id, "1");
        assert_eq!(resp.brief_summary.region, "UAE");
        assert_eq!(resp.brief_summary.budget, "medium");
    }

    #[actix_web::test]
    async fn test_match_rejects_missing_objective() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({ "category": "technology" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_body_gets_json_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .app_data(crate::routes::json_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"objective\": ")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "invalid_json");
        assert_eq!(body.status_code, 400);
    }

    #[actix_web::test]
    async fn test_health_reports_roster_size() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.roster_size, Some(2));
    }

    #[actix_web::test]
    async fn test_list_creatives() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/creatives").to_request();
        let resp: RosterResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total, 2);
        assert_eq!(resp.creatives[1].country, "Saudi Arabia");
    }
}
