use fether_database::{util::reference::Reference, CostEstimate, Database};
use fether_result::Result;
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema, Default)]
pub struct DataCostEstimate {
    /// Restrict the activity total to these ids
    pub selected_activities: Option<Vec<String>>,
    /// Restrict the support total to these ids
    pub selected_supports: Option<Vec<String>>,
}

/// # Estimate Cost
///
/// Total the event's costs, optionally restricted to a selection. Selections
/// beyond the event's configured pick counts keep the newest picks.
#[openapi(tag = "Events")]
#[post("/<target>/cost", data = "<data>")]
pub async fn estimate_cost(
    db: &State<Database>,
    target: Reference,
    data: Json<DataCostEstimate>,
) -> Result<Json<CostEstimate>> {
    let event = target.as_event(db).await?;
    let data = data.into_inner();

    Ok(Json(event.cost_estimate(
        data.selected_activities,
        data.selected_supports,
    )))
}
