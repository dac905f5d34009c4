use super::AbstractEvents;
use crate::ReferenceDb;
use crate::{DateProposal, Event, FieldsEvent, PartialEvent, Vote};
use fether_result::Result;

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert", "event"))
        } else {
            events.insert(event.id.to_string(), event.clone());
            Ok(())
        }
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch an event by either of its shareable codes
    async fn fetch_event_by_code(&self, code: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .values()
            .find(|event| event.event_code == code || event.admin_code == code)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch all events, oldest first
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut events: Vec<Event> = events.values().cloned().collect();
        events.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(events)
    }

    /// Update a given event with new information
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        let mut events = self.events.lock().await;
        if let Some(event) = events.get_mut(id) {
            for field in &remove {
                event.remove_field(field);
            }

            event.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }

    /// Append date proposals to an event
    async fn push_date_proposals(&self, id: &str, proposals: &[DateProposal]) -> Result<()> {
        let mut events = self.events.lock().await;
        if let Some(event) = events.get_mut(id) {
            event.date_proposals.extend_from_slice(proposals);
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }

    /// Append time proposals to an event
    async fn push_time_proposals(&self, id: &str, proposals: &[String]) -> Result<()> {
        let mut events = self.events.lock().await;
        if let Some(event) = events.get_mut(id) {
            event.time_proposals.extend_from_slice(proposals);
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }

    /// Append a vote to one of an event's activities
    async fn push_activity_vote(&self, id: &str, activity: &str, vote: &Vote) -> Result<()> {
        let mut events = self.events.lock().await;
        let event = events
            .get_mut(id)
            .ok_or_else(|| create_error!(UnknownEvent))?;

        let activity = event
            .activities
            .iter_mut()
            .find(|candidate| candidate.id == activity)
            .ok_or_else(|| create_error!(UnknownActivity))?;

        activity.votes.push(vote.clone());
        Ok(())
    }
}
