use chrono::Utc;
use fether_config::config;
use fether_result::{ErrorType, Result};
use ulid::Ulid;

use crate::util::calendar;
use crate::util::costs::sum_item_cost;
use crate::util::selection::BoundedSelection;
use crate::{Database, IntoDocumentPath};

/// Alphabet used for shareable codes, ambiguous glyphs removed
pub const CODE_ALPHABET: [char; 32] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Length of shareable codes
pub const CODE_LENGTH: usize = 8;

auto_derived!(
    /// Pricing discriminator for costed items
    #[serde(rename_all = "lowercase")]
    pub enum CostMode {
        /// Single known price, read from `cost`
        Fixed,
        /// Price bracket, totals read from `min_cost`
        Range,
        /// Anything else contributes nothing to totals
        #[serde(other)]
        Unknown,
    }

    /// Kind of logistics choice attached to an event
    #[serde(rename_all = "lowercase")]
    pub enum SupportCategory {
        Transportation,
        Lodging,
        Meals,
        Other,
    }

    /// A participant's vote on an activity
    pub struct Vote {
        /// Id of the voting participant
        pub user_id: String,
        /// Whether they are in favour
        pub vote: bool,
    }

    /// Candidate date range suggested for an event
    pub struct DateProposal {
        pub start_date: String,
        pub end_date: String,
        /// Optional time of day
        #[serde(skip_serializing_if = "Option::is_none")]
        pub time: Option<String>,
    }

    /// A candidate thing-to-do within an event
    pub struct Activity {
        /// Activity Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Activity name
        pub name: String,
        /// Where it takes place
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,
        /// External link with more information
        #[serde(skip_serializing_if = "Option::is_none")]
        pub link: Option<String>,

        /// Whether participants may suggest changes
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub allow_suggestions: bool,
        /// Whether participants may vote on this activity
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub voting_enabled: bool,
        /// Whether an equipment list is shown
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub equipment_enabled: bool,
        /// Free-text equipment list
        #[serde(skip_serializing_if = "Option::is_none")]
        pub equipment_items: Option<String>,

        /// Which of the cost fields is meaningful
        pub cost_mode: CostMode,
        /// Price when `cost_mode` is fixed
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cost: Option<String>,
        /// Lower price bound when `cost_mode` is range
        #[serde(skip_serializing_if = "Option::is_none")]
        pub min_cost: Option<String>,
        /// Upper price bound when `cost_mode` is range
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_cost: Option<String>,

        /// Votes collected so far, append-only
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub votes: Vec<Vote>,
    }

    /// A logistics choice (transportation, lodging, meals) attached to an event
    pub struct ActivitySupport {
        /// Support Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Category of this choice
        pub category: SupportCategory,
        /// Concrete option within the category
        pub option: String,
        /// Label shown instead of the option name
        #[serde(skip_serializing_if = "Option::is_none")]
        pub custom_label: Option<String>,

        /// Whether participants may vote on this choice
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub is_votable: bool,

        /// Which of the cost fields is meaningful
        pub cost_mode: CostMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cost: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub min_cost: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_cost: Option<String>,
    }
);

auto_derived_partial!(
    /// Event
    pub struct Event {
        /// Event Id
        #[serde(rename = "_id")]
        pub id: String,

        /// Event name
        pub name: String,

        /// Where the event takes place
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,
        /// Event description
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,

        /// Settled date, if one has been picked
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date: Option<String>,
        /// First candidate day
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_date: Option<String>,
        /// Last candidate day
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_date: Option<String>,
        /// Settled time of day
        #[serde(skip_serializing_if = "Option::is_none")]
        pub time: Option<String>,
        /// Deadline for participants to respond
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rsvp_deadline: Option<String>,

        /// Cap on the number of participants
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_participants: Option<i32>,

        /// Ordered list of tags
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub tags: Vec<String>,

        /// Whether the event is publicly listed
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub is_public: bool,
        /// Whether participants may suggest dates
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub allow_date_suggestions: bool,
        /// Whether participants may suggest times
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub allow_time_suggestions: bool,

        /// How many activities a participant is asked to pick
        #[serde(skip_serializing_if = "Option::is_none")]
        pub required_activity_count: Option<usize>,
        /// How many support options a participant is asked to pick
        #[serde(skip_serializing_if = "Option::is_none")]
        pub required_support_count: Option<usize>,

        /// Date ranges suggested by participants
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub date_proposals: Vec<DateProposal>,
        /// Times of day suggested by participants
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub time_proposals: Vec<String>,

        /// Candidate activities
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub activities: Vec<Activity>,
        /// Logistics choices
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub supports: Vec<ActivitySupport>,

        /// Shareable participant code, unique across events
        pub event_code: String,
        /// Shareable organiser code, unique across events
        pub admin_code: String,

        /// Creation timestamp
        pub created_at: String,
        /// Timestamp of the last edit
        #[serde(skip_serializing_if = "Option::is_none")]
        pub updated_at: Option<String>,
    },
    "PartialEvent"
);

auto_derived!(
    /// Optional fields on event object
    pub enum FieldsEvent {
        Description,
        Location,
        Time,
        RsvpDeadline,
        MaxParticipants,
    }
);

/// Computed cost summary for an event
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct CostEstimate {
    /// Sum over the (selected) activities
    pub activity_total: f64,
    /// Sum over the (selected) support options
    pub support_total: f64,
    /// Sum of both totals
    pub total: f64,

    /// Activity selection after caps were applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_activities: Option<Vec<String>>,
    /// Support selection after caps were applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_supports: Option<Vec<String>>,
}

impl IntoDocumentPath for FieldsEvent {
    fn as_path(&self) -> Option<&'static str> {
        match self {
            FieldsEvent::Description => "description".into(),
            FieldsEvent::Location => "location".into(),
            FieldsEvent::Time => "time".into(),
            FieldsEvent::RsvpDeadline => "rsvp_deadline".into(),
            FieldsEvent::MaxParticipants => "max_participants".into(),
        }
    }
}

impl Default for CostMode {
    fn default() -> Self {
        Self::Fixed
    }
}

impl Default for SupportCategory {
    fn default() -> Self {
        Self::Other
    }
}

#[allow(clippy::derivable_impls)]
impl Default for Activity {
    fn default() -> Self {
        Self {
            id: Default::default(),
            name: Default::default(),
            location: Default::default(),
            link: Default::default(),
            allow_suggestions: Default::default(),
            voting_enabled: Default::default(),
            equipment_enabled: Default::default(),
            equipment_items: Default::default(),
            cost_mode: Default::default(),
            cost: Default::default(),
            min_cost: Default::default(),
            max_cost: Default::default(),
            votes: Default::default(),
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for ActivitySupport {
    fn default() -> Self {
        Self {
            id: Default::default(),
            category: Default::default(),
            option: Default::default(),
            custom_label: Default::default(),
            is_votable: Default::default(),
            cost_mode: Default::default(),
            cost: Default::default(),
            min_cost: Default::default(),
            max_cost: Default::default(),
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for Event {
    fn default() -> Self {
        Self {
            id: Default::default(),
            name: Default::default(),
            location: Default::default(),
            description: Default::default(),
            date: Default::default(),
            start_date: Default::default(),
            end_date: Default::default(),
            time: Default::default(),
            rsvp_deadline: Default::default(),
            max_participants: Default::default(),
            tags: Default::default(),
            is_public: Default::default(),
            allow_date_suggestions: Default::default(),
            allow_time_suggestions: Default::default(),
            required_activity_count: Default::default(),
            required_support_count: Default::default(),
            date_proposals: Default::default(),
            time_proposals: Default::default(),
            activities: Default::default(),
            supports: Default::default(),
            event_code: Default::default(),
            admin_code: Default::default(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

impl Event {
    /// Create a new event, assigning its id, shareable codes and timestamp
    pub async fn create(db: &Database, mut event: Event) -> Result<Event> {
        let limits = config().await.features.limits;
        if event.tags.len() > limits.tags {
            return Err(create_error!(TooManyTags { max: limits.tags }));
        }

        if event.activities.len() > limits.activities {
            return Err(create_error!(TooManyActivities {
                max: limits.activities
            }));
        }

        if event.supports.len() > limits.supports {
            return Err(create_error!(TooManySupports {
                max: limits.supports
            }));
        }

        if event.date_proposals.len() > limits.date_proposals {
            return Err(create_error!(TooManyProposals {
                max: limits.date_proposals
            }));
        }

        if event.time_proposals.len() > limits.time_proposals {
            return Err(create_error!(TooManyProposals {
                max: limits.time_proposals
            }));
        }

        event.id = Ulid::new().to_string();
        event.event_code = Event::unique_code(db).await?;
        event.admin_code = Event::unique_code(db).await?;
        event.created_at = Utc::now().to_rfc3339();

        db.insert_event(&event).await?;
        Ok(event)
    }

    /// Generate a shareable code no other event uses, re-rolling on collision
    async fn unique_code(db: &Database) -> Result<String> {
        loop {
            let code = nanoid::nanoid!(CODE_LENGTH, &CODE_ALPHABET);
            match db.fetch_event_by_code(&code).await {
                Ok(_) => continue,
                Err(error) if matches!(error.error_type, ErrorType::UnknownEvent) => {
                    return Ok(code)
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Remove a field from this object
    pub fn remove_field(&mut self, field: &FieldsEvent) {
        match field {
            FieldsEvent::Description => self.description = None,
            FieldsEvent::Location => self.location = None,
            FieldsEvent::Time => self.time = None,
            FieldsEvent::RsvpDeadline => self.rsvp_deadline = None,
            FieldsEvent::MaxParticipants => self.max_participants = None,
        }
    }

    /// Update this event
    pub async fn update(
        &mut self,
        db: &Database,
        mut partial: PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        partial.updated_at = Some(Utc::now().to_rfc3339());

        for field in &remove {
            self.remove_field(field);
        }

        db.update_event(&self.id, &partial, remove).await?;
        self.apply_options(partial);
        Ok(())
    }

    /// Delete this event
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_event(&self.id).await
    }

    /// Find an embedded activity by its id
    pub fn activity(&self, id: &str) -> Result<&Activity> {
        self.activities
            .iter()
            .find(|activity| activity.id == id)
            .ok_or_else(|| create_error!(UnknownActivity))
    }

    /// Total the event's costs, optionally restricted to a selection
    ///
    /// Selections are capped by `required_activity_count` /
    /// `required_support_count` with oldest-first eviction.
    pub fn cost_estimate(
        &self,
        selected_activities: Option<Vec<String>>,
        selected_supports: Option<Vec<String>>,
    ) -> CostEstimate {
        let selected_activities = selected_activities
            .map(|ids| BoundedSelection::apply(ids, self.required_activity_count));
        let selected_supports =
            selected_supports.map(|ids| BoundedSelection::apply(ids, self.required_support_count));

        let activity_total = sum_item_cost(&self.activities, selected_activities.as_deref());
        let support_total = sum_item_cost(&self.supports, selected_supports.as_deref());

        CostEstimate {
            activity_total,
            support_total,
            total: activity_total + support_total,
            selected_activities,
            selected_supports,
        }
    }

    /// Expand the event's date range into per-day candidates, capped at `limit`
    pub fn candidate_dates(&self, limit: usize) -> Vec<chrono::NaiveDate> {
        calendar::candidate_dates(self.start_date.as_deref(), self.end_date.as_deref(), limit)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn kayaking() -> Activity {
        Activity {
            id: "ACT_KAYAK".to_string(),
            name: "Kayaking".to_string(),
            voting_enabled: true,
            cost_mode: CostMode::Range,
            min_cost: Some("15.00".to_string()),
            max_cost: Some("30.00".to_string()),
            ..Default::default()
        }
    }

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let event = Event::create(
                &db,
                Event {
                    name: "Lake weekend".to_string(),
                    description: Some("Two days by the lake".to_string()),
                    start_date: Some("2024-06-01".to_string()),
                    end_date: Some("2024-06-02".to_string()),
                    allow_date_suggestions: true,
                    activities: vec![kayaking()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            assert_eq!(event.event_code.len(), CODE_LENGTH);
            assert_eq!(event.admin_code.len(), CODE_LENGTH);
            assert_ne!(event.event_code, event.admin_code);

            let fetched = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(event, fetched);

            let by_code = db.fetch_event_by_code(&event.event_code).await.unwrap();
            let by_admin_code = db.fetch_event_by_code(&event.admin_code).await.unwrap();
            assert_eq!(by_code, by_admin_code);
            assert_eq!(event.id, by_code.id);

            let mut updated = event.clone();
            updated
                .update(
                    &db,
                    PartialEvent {
                        name: Some("Lake week".to_string()),
                        ..Default::default()
                    },
                    vec![FieldsEvent::Description],
                )
                .await
                .unwrap();

            let fetched = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched.name, "Lake week");
            assert!(fetched.description.is_none());
            assert!(fetched.updated_at.is_some());
            assert_eq!(updated, fetched);

            updated.delete(&db).await.unwrap();
            assert!(db.fetch_event(&event.id).await.is_err());
        });
    }

    #[async_std::test]
    async fn append_suggestions_and_votes() {
        database_test!(|db| async move {
            let event = Event::create(
                &db,
                Event {
                    name: "Lake weekend".to_string(),
                    allow_date_suggestions: true,
                    allow_time_suggestions: true,
                    activities: vec![kayaking()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            db.push_date_proposals(
                &event.id,
                &[DateProposal {
                    start_date: "2024-06-08".to_string(),
                    end_date: "2024-06-09".to_string(),
                    time: None,
                }],
            )
            .await
            .unwrap();

            db.push_time_proposals(&event.id, &["18:00".to_string()])
                .await
                .unwrap();

            db.push_activity_vote(
                &event.id,
                "ACT_KAYAK",
                &Vote {
                    user_id: "USER_A".to_string(),
                    vote: true,
                },
            )
            .await
            .unwrap();

            let fetched = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched.date_proposals.len(), 1);
            assert_eq!(fetched.time_proposals, vec!["18:00".to_string()]);
            assert_eq!(fetched.activities[0].votes.len(), 1);
            assert!(fetched.activities[0].votes[0].vote);

            assert!(db
                .push_activity_vote(
                    &event.id,
                    "ACT_MISSING",
                    &Vote {
                        user_id: "USER_A".to_string(),
                        vote: false,
                    },
                )
                .await
                .is_err());
        });
    }

    #[async_std::test]
    async fn create_enforces_limits() {
        database_test!(|db| async move {
            let limits = fether_config::config().await.features.limits;
            let result = Event::create(
                &db,
                Event {
                    name: "Tag pile".to_string(),
                    tags: (0..=limits.tags).map(|i| format!("tag-{i}")).collect(),
                    ..Default::default()
                },
            )
            .await;

            assert!(result.is_err());
        });
    }

    #[test]
    fn cost_estimate_applies_selection_caps() {
        let event = Event {
            required_activity_count: Some(1),
            activities: vec![
                Activity {
                    id: "A".to_string(),
                    cost_mode: CostMode::Fixed,
                    cost: Some("20.00".to_string()),
                    ..Default::default()
                },
                Activity {
                    id: "B".to_string(),
                    cost_mode: CostMode::Fixed,
                    cost: Some("7.50".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        // Oldest pick is evicted once the cap is hit.
        let estimate = event.cost_estimate(Some(vec!["A".to_string(), "B".to_string()]), None);
        assert_eq!(estimate.selected_activities, Some(vec!["B".to_string()]));
        assert_eq!(estimate.activity_total, 7.5);
        assert_eq!(estimate.total, 7.5);
    }
}
