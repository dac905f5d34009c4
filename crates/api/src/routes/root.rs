use fether_config::config;
use fether_result::Result;
use rocket::http::Status;
use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// # Feature Limits
#[derive(Serialize, JsonSchema, Debug)]
pub struct FeatureLimits {
    /// Maximum activities per event
    pub activities: usize,
    /// Maximum support options per event
    pub supports: usize,
    /// Maximum tags per event
    pub tags: usize,
    /// Maximum date proposals per event
    pub date_proposals: usize,
    /// Maximum time proposals per event
    pub time_proposals: usize,
    /// Maximum days in a candidate-date calendar
    pub candidate_dates: usize,
}

/// # Server Configuration
#[derive(Serialize, JsonSchema, Debug)]
pub struct FetherConfig {
    /// Fether API version
    pub fether: String,
    /// URL pointing to the client serving this node
    pub app: String,
    /// Limits enforced on this Fether node
    pub limits: FeatureLimits,
}

/// # Query Node
///
/// Fetch the server configuration for this Fether instance.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Result<Json<FetherConfig>> {
    let config = config().await;

    Ok(Json(FetherConfig {
        fether: env!("CARGO_PKG_VERSION").to_string(),
        app: config.hosts.app,
        limits: FeatureLimits {
            activities: config.features.limits.activities,
            supports: config.features.limits.supports,
            tags: config.features.limits.tags,
            date_proposals: config.features.limits.date_proposals,
            time_proposals: config.features.limits.time_proposals,
            candidate_dates: config.features.limits.candidate_dates,
        },
    }))
}

/// Health check endpoint.
#[openapi(skip)]
#[get("/ping")]
pub async fn ping() -> Status {
    Status::Ok
}
