use fether_database::{util::reference::Reference, Database, Event, FieldsEvent, PartialEvent};
use fether_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Serialize, Deserialize, JsonSchema, Default)]
pub struct DataEditEvent {
    /// Event name
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// Where the event takes place
    pub location: Option<String>,
    /// Event description
    #[validate(length(min = 0, max = 2000))]
    pub description: Option<String>,
    /// Settled date
    pub date: Option<String>,
    /// First candidate day
    pub start_date: Option<String>,
    /// Last candidate day
    pub end_date: Option<String>,
    /// Settled time of day
    pub time: Option<String>,
    /// Deadline for participants to respond
    pub rsvp_deadline: Option<String>,
    /// Cap on the number of participants
    pub max_participants: Option<i32>,
    /// Ordered list of tags
    pub tags: Option<Vec<String>>,
    /// Whether the event is publicly listed
    pub is_public: Option<bool>,
    /// Whether participants may suggest dates
    pub allow_date_suggestions: Option<bool>,
    /// Whether participants may suggest times
    pub allow_time_suggestions: Option<bool>,
    /// How many activities a participant is asked to pick
    pub required_activity_count: Option<usize>,
    /// How many support options a participant is asked to pick
    pub required_support_count: Option<usize>,
    /// Fields to remove from the event
    pub remove: Option<Vec<FieldsEvent>>,
}

impl From<DataEditEvent> for PartialEvent {
    fn from(data: DataEditEvent) -> Self {
        Self {
            name: data.name,
            location: data.location,
            description: data.description,
            date: data.date,
            start_date: data.start_date,
            end_date: data.end_date,
            time: data.time,
            rsvp_deadline: data.rsvp_deadline,
            max_participants: data.max_participants,
            tags: data.tags,
            is_public: data.is_public,
            allow_date_suggestions: data.allow_date_suggestions,
            allow_time_suggestions: data.allow_time_suggestions,
            required_activity_count: data.required_activity_count,
            required_support_count: data.required_support_count,
            ..Default::default()
        }
    }
}

/// # Edit Event
///
/// Edit event details by its id.
#[openapi(tag = "Events")]
#[patch("/<target>", data = "<data>")]
pub async fn edit_event(
    db: &State<Database>,
    target: Reference,
    data: Json<DataEditEvent>,
) -> Result<Json<Event>> {
    let mut data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let mut event = target.as_event(db).await?;

    let remove = data.remove.take().unwrap_or_default();
    event.update(db, data.into(), remove).await?;

    Ok(Json(event))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use fether_database::Event;
    use rocket::http::{ContentType, Status};

    #[rocket::async_test]
    async fn edit_event() {
        let harness = TestHarness::new().await;

        let event = Event::create(
            &harness.db,
            Event {
                name: "Picnic".to_string(),
                description: Some("Sandwiches in the park".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("`Event`");

        let response = harness
            .client
            .patch(format!("/events/{}", event.id))
            .header(ContentType::JSON)
            .body(
                json!({
                    "name": "Evening picnic",
                    "remove": ["Description"]
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let updated: Event = response.into_json().await.expect("`Event`");
        assert_eq!(updated.name, "Evening picnic");
        assert!(updated.description.is_none());
        assert!(updated.updated_at.is_some());

        let persisted = harness.db.fetch_event(&event.id).await.expect("`Event`");
        assert_eq!(persisted, updated);
    }

    #[rocket::async_test]
    async fn edit_unknown_event() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .patch("/events/01J0000000000000000000000X")
            .header(ContentType::JSON)
            .body(json!({ "name": "Ghost" }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
