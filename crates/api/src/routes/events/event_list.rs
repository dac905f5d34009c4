use fether_database::{Database, Event};
use fether_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # List Events
///
/// Fetch all events, oldest first.
#[openapi(tag = "Events")]
#[get("/")]
pub async fn list_events(db: &State<Database>) -> Result<Json<Vec<Event>>> {
    Ok(Json(db.fetch_events().await?))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use fether_database::Event;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn list_events() {
        let harness = TestHarness::new().await;

        for name in ["Picnic", "Game night"] {
            Event::create(
                &harness.db,
                Event {
                    name: name.to_string(),
                    ..Default::default()
                },
            )
            .await
            .expect("`Event`");
        }

        let response = harness.client.get("/events").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let events: Vec<Event> = response.into_json().await.expect("`Vec<Event>`");
        assert_eq!(events.len(), 2);

        let names: Vec<&str> = events.iter().map(|event| event.name.as_str()).collect();
        assert!(names.contains(&"Picnic"));
        assert!(names.contains(&"Game night"));
    }
}
