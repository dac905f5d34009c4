use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};
use serde_json::json;

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::UnknownEvent => Status::NotFound,
            ErrorType::UnknownActivity => Status::NotFound,
            ErrorType::SuggestionsDisabled => Status::Forbidden,
            ErrorType::VotingDisabled => Status::Forbidden,
            ErrorType::TooManyActivities { .. } => Status::BadRequest,
            ErrorType::TooManySupports { .. } => Status::BadRequest,
            ErrorType::TooManyTags { .. } => Status::BadRequest,
            ErrorType::TooManyProposals { .. } => Status::BadRequest,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::InvalidOperation => Status::BadRequest,
            ErrorType::InvalidProperty => Status::BadRequest,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
        };

        // Serialize the error data structure into JSON, keeping the
        // `message` / `error` keys the web client reads for its toasts.
        let mut body = serde_json::to_value(&self).unwrap_or_else(|_| json!({}));
        if let Some(object) = body.as_object_mut() {
            let key = match status.code {
                403 | 404 => "message",
                _ => "error",
            };
            object.insert(key.to_string(), json!(self.error_type.message()));
        }
        let string = body.to_string();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
