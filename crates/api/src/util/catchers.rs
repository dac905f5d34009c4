use fether_result::{create_error, Result};
use rocket::Catcher;

#[catch(404)]
pub fn not_found() -> Result<()> {
    Err(create_error!(NotFound))
}

// Rocket rejects malformed JSON bodies with 422; the original API answered
// these with a 400 validation failure, which the responder produces.
#[catch(422)]
pub fn unprocessable_entity() -> Result<()> {
    Err(create_error!(FailedValidation {
        error: "Invalid request body".to_string()
    }))
}

#[catch(500)]
pub fn internal_error() -> Result<()> {
    Err(create_error!(InternalError))
}

pub fn all_catchers() -> Vec<Catcher> {
    catchers![not_found, unprocessable_entity, internal_error]
}
