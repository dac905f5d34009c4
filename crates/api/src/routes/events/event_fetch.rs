use fether_database::{util::reference::Reference, Database, Event};
use fether_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Event
///
/// Fetch an event by its id.
#[openapi(tag = "Events")]
#[get("/<target>")]
pub async fn fetch_event(db: &State<Database>, target: Reference) -> Result<Json<Event>> {
    Ok(Json(target.as_event(db).await?))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use fether_database::Event;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fetch_event() {
        let harness = TestHarness::new().await;

        let event = Event::create(
            &harness.db,
            Event {
                name: TestHarness::rand_string(),
                ..Default::default()
            },
        )
        .await
        .expect("`Event`");

        let response = harness
            .client
            .get(format!("/events/{}", event.id))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let fetched: Event = response.into_json().await.expect("`Event`");
        assert_eq!(fetched, event);
    }

    #[rocket::async_test]
    async fn fetch_unknown_event() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .get("/events/01J0000000000000000000000X")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);

        let body: serde_json::Value = response.into_json().await.expect("error body");
        assert_eq!(body["message"], "Event not found");
    }
}
