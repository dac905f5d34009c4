use fether_database::{
    Activity, ActivitySupport, CostMode, Database, DateProposal, Event, SupportCategory,
};
use fether_result::{create_error, Result};
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Serialize, Deserialize, JsonSchema)]
pub struct DataCreateActivity {
    /// Activity name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Where it takes place
    pub location: Option<String>,
    /// External link with more information
    pub link: Option<String>,
    /// Whether participants may suggest changes
    #[serde(default)]
    pub allow_suggestions: bool,
    /// Whether participants may vote on this activity
    #[serde(default)]
    pub voting_enabled: bool,
    /// Whether an equipment list is shown
    #[serde(default)]
    pub equipment_enabled: bool,
    /// Free-text equipment list
    pub equipment_items: Option<String>,
    /// Which of the cost fields is meaningful
    #[serde(default)]
    pub cost_mode: CostMode,
    pub cost: Option<String>,
    pub min_cost: Option<String>,
    pub max_cost: Option<String>,
}

#[derive(Validate, Serialize, Deserialize, JsonSchema)]
pub struct DataCreateSupport {
    /// Category of this choice
    pub category: SupportCategory,
    /// Concrete option within the category
    #[validate(length(min = 1, max = 100))]
    pub option: String,
    /// Label shown instead of the option name
    pub custom_label: Option<String>,
    /// Whether participants may vote on this choice
    #[serde(default)]
    pub is_votable: bool,
    /// Which of the cost fields is meaningful
    #[serde(default)]
    pub cost_mode: CostMode,
    pub cost: Option<String>,
    pub min_cost: Option<String>,
    pub max_cost: Option<String>,
}

#[derive(Validate, Serialize, Deserialize, JsonSchema)]
pub struct DataCreateEvent {
    /// Event name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Where the event takes place
    pub location: Option<String>,
    /// Event description
    #[validate(length(min = 0, max = 2000))]
    pub description: Option<String>,
    /// Settled date, if one has been picked
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
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the event is publicly listed
    #[serde(default)]
    pub is_public: bool,
    /// Whether participants may suggest dates
    #[serde(default)]
    pub allow_date_suggestions: bool,
    /// Whether participants may suggest times
    #[serde(default)]
    pub allow_time_suggestions: bool,
    /// How many activities a participant is asked to pick
    pub required_activity_count: Option<usize>,
    /// How many support options a participant is asked to pick
    pub required_support_count: Option<usize>,
    /// Date ranges proposed up front
    #[serde(default)]
    pub date_proposals: Vec<DateProposal>,
    /// Times of day proposed up front
    #[serde(default)]
    pub time_proposals: Vec<String>,
    /// Candidate activities
    #[serde(default)]
    #[validate]
    pub activities: Vec<DataCreateActivity>,
    /// Logistics choices
    #[serde(default)]
    #[validate]
    pub supports: Vec<DataCreateSupport>,
}

impl From<DataCreateActivity> for Activity {
    fn from(data: DataCreateActivity) -> Self {
        Self {
            id: Ulid::new().to_string(),
            name: data.name,
            location: data.location,
            link: data.link,
            allow_suggestions: data.allow_suggestions,
            voting_enabled: data.voting_enabled,
            equipment_enabled: data.equipment_enabled,
            equipment_items: data.equipment_items,
            cost_mode: data.cost_mode,
            cost: data.cost,
            min_cost: data.min_cost,
            max_cost: data.max_cost,
            votes: vec![],
        }
    }
}

impl From<DataCreateSupport> for ActivitySupport {
    fn from(data: DataCreateSupport) -> Self {
        Self {
            id: Ulid::new().to_string(),
            category: data.category,
            option: data.option,
            custom_label: data.custom_label,
            is_votable: data.is_votable,
            cost_mode: data.cost_mode,
            cost: data.cost,
            min_cost: data.min_cost,
            max_cost: data.max_cost,
        }
    }
}

/// # Create Event
///
/// Create a new event and assign its shareable codes.
#[openapi(tag = "Events")]
#[post("/", data = "<data>")]
pub async fn create_event(
    db: &State<Database>,
    data: Json<DataCreateEvent>,
) -> Result<Created<Json<Event>>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let event = Event::create(
        db,
        Event {
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
            date_proposals: data.date_proposals,
            time_proposals: data.time_proposals,
            activities: data.activities.into_iter().map(Into::into).collect(),
            supports: data.supports.into_iter().map(Into::into).collect(),
            ..Default::default()
        },
    )
    .await?;

    Ok(Created::new(format!("/events/{}", event.id)).body(Json(event)))
}
