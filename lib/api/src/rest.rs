use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer, ResponseError, Result as ActixResult};
use schemematch_core::{ApplicantProfile, MatchingEngine};
use schemematch_storage::RegistrationLog;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::explain::RecommendationResponse;

/// Matches returned by /api/recommend unless configured otherwise
pub const DEFAULT_TOP_N: usize = 3;

/// Shared request state. The engine is immutable and read without locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchingEngine>,
    pub registrations: Arc<RegistrationLog>,
    pub top_n: usize,
}

impl AppState {
    pub fn new(engine: Arc<MatchingEngine>, registrations: Arc<RegistrationLog>) -> Self {
        Self {
            engine,
            registrations,
            top_n: DEFAULT_TOP_N,
        }
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Profile(#[from] schemematch_core::Error),

    #[error("failed to store registration: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Profile(schemematch_core::Error::MalformedProfile(_)) => StatusCode::BAD_REQUEST,
            ApiError::Profile(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "detail": self.to_string()
        }))
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
        info!("Serving {} schemes", state.engine.len());
        HttpServer::new(move || {
            App::new()
                .wrap(cors())
                .configure(|cfg| configure(cfg, state.clone()))
        })
        .bind((host, port))?
        .run()
        .await
    }
}

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Register the routes on an app; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state))
        .route("/", web::get().to(root))
        .route("/api/store-user", web::post().to(store_user))
        .route("/api/recommend", web::post().to(recommend));
}

async fn root() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Scheme matching backend is running"
    })))
}

async fn store_user(
    state: web::Data<AppState>,
    profile: web::Json<ApplicantProfile>,
) -> Result<HttpResponse, ApiError> {
    profile.validate()?;

    let record = state.registrations.append(&profile).map_err(|e| {
        error!("Failed to store registration: {:#}", e);
        e
    })?;
    debug!("Stored registration {}", record.id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "User data saved securely.",
        "id": record.id,
    })))
}

async fn recommend(
    state: web::Data<AppState>,
    profile: web::Json<ApplicantProfile>,
) -> Result<HttpResponse, ApiError> {
    profile.validate()?;

    let matches = state.engine.match_profile(&profile);
    debug!("{} eligible schemes for {}", matches.len(), profile.name);

    if matches.is_empty() {
        let message = if state.engine.is_catalog_available() {
            "No specific schemes found for your criteria, but check out general schemes."
        } else {
            "No schemes are available right now. Please try again later."
        };
        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": message,
            "data": []
        })));
    }

    let response = RecommendationResponse::from_matches(&matches, &profile.name, state.top_n);
    Ok(HttpResponse::Ok().json(response))
}
