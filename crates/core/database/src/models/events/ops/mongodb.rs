use bson::{to_bson, Document};
use futures::StreamExt;

use super::AbstractEvents;
use crate::{DateProposal, Event, FieldsEvent, IntoDocumentPath, MongoDb, PartialEvent, Vote};
use fether_result::Result;

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownEvent))
    }

    async fn fetch_event_by_code(&self, code: &str) -> Result<Event> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "$or": [
                    { "event_code": code },
                    { "admin_code": code }
                ]
            }
        )?
        .ok_or_else(|| create_error!(UnknownEvent))
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        Ok(self
            .col::<Event>(COL)
            .find(doc! {})
            .await
            .map_err(|_| create_database_error!("find", COL))?
            .filter_map(|s| async {
                if cfg!(debug_assertions) {
                    // Hard fail on invalid documents
                    Some(s.unwrap())
                } else {
                    s.ok()
                }
            })
            .collect::<Vec<Event>>()
            .await)
    }

    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        query!(
            self,
            update_one_by_id,
            COL,
            id,
            partial,
            remove.iter().map(|x| x as &dyn IntoDocumentPath).collect(),
            None
        )
        .map(|_| ())
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }

    async fn push_date_proposals(&self, id: &str, proposals: &[DateProposal]) -> Result<()> {
        let proposals = to_bson(proposals).map_err(|_| create_database_error!("to_bson", COL))?;

        self.col::<Document>(COL)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$push": {
                        "date_proposals": {
                            "$each": proposals
                        }
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    async fn push_time_proposals(&self, id: &str, proposals: &[String]) -> Result<()> {
        self.col::<Document>(COL)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$push": {
                        "time_proposals": {
                            "$each": proposals
                        }
                    }
                },
            )
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("update_one", COL))
    }

    async fn push_activity_vote(&self, id: &str, activity: &str, vote: &Vote) -> Result<()> {
        let vote = to_bson(vote).map_err(|_| create_database_error!("to_bson", COL))?;

        // Single $push against the matched embedded activity,
        // last-writer-wins, no version check.
        let result = self
            .col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": id,
                    "activities._id": activity
                },
                doc! {
                    "$push": {
                        "activities.$.votes": vote
                    }
                },
            )
            .await
            .map_err(|_| create_database_error!("update_one", COL))?;

        if result.matched_count == 0 {
            Err(create_error!(UnknownActivity))
        } else {
            Ok(())
        }
    }
}
