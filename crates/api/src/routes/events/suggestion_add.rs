use fether_config::config;
use fether_database::{util::reference::Reference, Database, DateProposal, Event};
use fether_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Proposals to append, tagged by what is being suggested
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "proposals", rename_all = "lowercase")]
pub enum DataAddSuggestions {
    /// Candidate date ranges
    Date(Vec<DateProposal>),
    /// Candidate times of day
    Time(Vec<String>),
}

/// # Add Suggestions
///
/// Append date or time proposals to an event. Rejected when the matching
/// suggestion flag is disabled on the event.
#[openapi(tag = "Events")]
#[put("/<target>/suggestions", data = "<data>")]
pub async fn add_suggestions(
    db: &State<Database>,
    target: Reference,
    data: Json<DataAddSuggestions>,
) -> Result<Json<Event>> {
    let event = target.as_event(db).await?;
    let limits = config().await.features.limits;

    match data.into_inner() {
        DataAddSuggestions::Date(proposals) => {
            if !event.allow_date_suggestions {
                return Err(create_error!(SuggestionsDisabled));
            }

            if event.date_proposals.len() + proposals.len() > limits.date_proposals {
                return Err(create_error!(TooManyProposals {
                    max: limits.date_proposals
                }));
            }

            db.push_date_proposals(&event.id, &proposals).await?;
        }
        DataAddSuggestions::Time(proposals) => {
            if !event.allow_time_suggestions {
                return Err(create_error!(SuggestionsDisabled));
            }

            if event.time_proposals.len() + proposals.len() > limits.time_proposals {
                return Err(create_error!(TooManyProposals {
                    max: limits.time_proposals
                }));
            }

            db.push_time_proposals(&event.id, &proposals).await?;
        }
    }

    Ok(Json(db.fetch_event(&event.id).await?))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use fether_database::Event;
    use rocket::http::{ContentType, Status};

    #[rocket::async_test]
    async fn add_suggestions() {
        let harness = TestHarness::new().await;

        let event = Event::create(
            &harness.db,
            Event {
                name: "Picnic".to_string(),
                allow_date_suggestions: true,
                allow_time_suggestions: true,
                ..Default::default()
            },
        )
        .await
        .expect("`Event`");

        let response = harness
            .client
            .put(format!("/events/{}/suggestions", event.id))
            .header(ContentType::JSON)
            .body(
                json!({
                    "type": "date",
                    "proposals": [
                        { "start_date": "2024-06-08", "end_date": "2024-06-09" }
                    ]
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let updated: Event = response.into_json().await.expect("`Event`");
        assert_eq!(updated.date_proposals.len(), 1);

        let response = harness
            .client
            .put(format!("/events/{}/suggestions", event.id))
            .header(ContentType::JSON)
            .body(json!({ "type": "time", "proposals": ["18:00"] }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let updated: Event = response.into_json().await.expect("`Event`");
        assert_eq!(updated.time_proposals, vec!["18:00".to_string()]);
    }

    #[rocket::async_test]
    async fn suggestions_respect_the_event_flags() {
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
            .put(format!("/events/{}/suggestions", event.id))
            .header(ContentType::JSON)
            .body(json!({ "type": "time", "proposals": ["18:00"] }).to_string())
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);

        let persisted = harness.db.fetch_event(&event.id).await.expect("`Event`");
        assert!(persisted.time_proposals.is_empty());
    }
}
