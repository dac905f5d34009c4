use fether_database::{util::reference::Reference, Database, Event};
use fether_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Event By Code
///
/// Fetch an event by either of its shareable codes.
#[openapi(tag = "Events")]
#[get("/code/<target>", rank = 1)]
pub async fn fetch_event_by_code(db: &State<Database>, target: Reference) -> Result<Json<Event>> {
    Ok(Json(target.as_event_by_code(db).await?))
}
