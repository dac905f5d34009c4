use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod activity_vote;
mod cost_estimate;
mod event_create;
mod event_dates;
mod event_delete;
mod event_edit;
mod event_fetch;
mod event_fetch_code;
mod event_list;
mod suggestion_add;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        event_create::create_event,
        event_list::list_events,
        event_fetch::fetch_event,
        event_fetch_code::fetch_event_by_code,
        event_edit::edit_event,
        event_delete::delete_event,
        suggestion_add::add_suggestions,
        activity_vote::vote_activity,
        cost_estimate::estimate_cost,
        event_dates::candidate_dates,
    ]
}
