use fether_database::{util::reference::Reference, Database, Event, Vote};
use fether_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Serialize, Deserialize, JsonSchema)]
pub struct DataVote {
    /// Id of the voting participant
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    /// Whether they are in favour
    pub vote: bool,
}

/// # Vote On Activity
///
/// Append a vote to one of an event's activities. Votes are append-only and
/// may repeat per participant, matching the preview flow.
#[openapi(tag = "Events")]
#[put("/<target>/activities/<activity>/vote", data = "<data>")]
pub async fn vote_activity(
    db: &State<Database>,
    target: Reference,
    activity: String,
    data: Json<DataVote>,
) -> Result<Json<Event>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let event = target.as_event(db).await?;
    let activity = event.activity(&activity)?;

    if !activity.voting_enabled {
        return Err(create_error!(VotingDisabled));
    }

    db.push_activity_vote(
        &event.id,
        &activity.id,
        &Vote {
            user_id: data.user_id,
            vote: data.vote,
        },
    )
    .await?;

    Ok(Json(db.fetch_event(&event.id).await?))
}
