use rocket::{Build, Rocket};
use rocket_okapi::{okapi::openapi3::OpenApi, settings::OpenApiSettings};

mod events;
mod root;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root, root::ping],
        "/events" => events::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Fether API".to_owned(),
            description: Some("Plan gatherings, vote on options and total the cost.".to_owned()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        servers: vec![Server {
            url: "http://local.fether.app:8000".to_owned(),
            description: Some("Local Fether Environment".to_owned()),
            ..Default::default()
        }],
        tags: vec![
            Tag {
                name: "Core".to_owned(),
                description: Some(
                    "Use in your applications to determine information about this Fether node"
                        .to_owned(),
                ),
                ..Default::default()
            },
            Tag {
                name: "Events".to_owned(),
                description: Some("Create events and collect votes and suggestions".to_owned()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
