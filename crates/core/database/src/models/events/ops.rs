use crate::models::events::{DateProposal, Event, FieldsEvent, PartialEvent, Vote};
use fether_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch an event by either of its shareable codes
    async fn fetch_event_by_code(&self, code: &str) -> Result<Event>;

    /// Fetch all events
    async fn fetch_events(&self) -> Result<Vec<Event>>;

    /// Update a given event with new information
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()>;

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()>;

    /// Append date proposals to an event
    async fn push_date_proposals(&self, id: &str, proposals: &[DateProposal]) -> Result<()>;

    /// Append time proposals to an event
    async fn push_time_proposals(&self, id: &str, proposals: &[String]) -> Result<()>;

    /// Append a vote to one of an event's activities
    async fn push_activity_vote(&self, id: &str, activity: &str, vote: &Vote) -> Result<()>;
}
