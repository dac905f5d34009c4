use fether_config::config;
use fether_database::{util::reference::Reference, Database};
use fether_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Candidate Dates
///
/// Expand the event's date range into a bounded per-day calendar.
#[openapi(tag = "Events")]
#[get("/<target>/dates")]
pub async fn candidate_dates(db: &State<Database>, target: Reference) -> Result<Json<Vec<String>>> {
    let event = target.as_event(db).await?;
    let limit = config().await.features.limits.candidate_dates;

    Ok(Json(
        event
            .candidate_dates(limit)
            .iter()
            .map(|date| date.to_string())
            .collect(),
    ))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use fether_database::Event;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn candidate_dates_expand_the_range() {
        let harness = TestHarness::new().await;

        let event = Event::create(
            &harness.db,
            Event {
                name: "Lake weekend".to_string(),
                start_date: Some("2024-06-01".to_string()),
                end_date: Some("2024-06-03".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("`Event`");

        let response = harness
            .client
            .get(format!("/events/{}/dates", event.id))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let dates: Vec<String> = response.into_json().await.expect("`Vec<String>`");
        assert_eq!(
            dates,
            vec!["2024-06-01", "2024-06-02", "2024-06-03"]
        );
    }

    #[rocket::async_test]
    async fn no_range_yields_an_empty_calendar() {
        let harness = TestHarness::new().await;

        let event = Event::create(
            &harness.db,
            Event {
                name: "Undated".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("`Event`");

        let response = harness
            .client
            .get(format!("/events/{}/dates", event.id))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let dates: Vec<String> = response.into_json().await.expect("`Vec<String>`");
        assert!(dates.is_empty());
    }
}
