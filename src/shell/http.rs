use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::registrations::use_cases::list_registrations::inbound::http as list_http;
use crate::modules::registrations::use_cases::register_citizen::inbound::http as register_http;
use crate::modules::registrations::use_cases::release_registration::inbound::http as release_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route(
            "/registration",
            get(list_http::handle).post(register_http::handle),
        )
        .route(
            "/registration/{citizen_id}",
            get(list_http::handle_one).delete(release_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
