use fether_database::{util::reference::Reference, Database};
use fether_result::Result;
use rocket::State;

/// # Delete Event
///
/// Delete an event by its id.
#[openapi(tag = "Events")]
#[delete("/<target>")]
pub async fn delete_event(db: &State<Database>, target: Reference) -> Result<()> {
    let event = target.as_event(db).await?;
    event.delete(db).await
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use fether_database::Event;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn delete_event() {
        let harness = TestHarness::new().await;

        let event = Event::create(
            &harness.db,
            Event {
                name: "Picnic".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("`Event`");

        let response = harness
            .client
            .delete(format!("/events/{}", event.id))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        assert!(harness.db.fetch_event(&event.id).await.is_err());

        // A second delete has nothing left to hit.
        let response = harness
            .client
            .delete(format!("/events/{}", event.id))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
