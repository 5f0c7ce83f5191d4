use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::time_clock::use_cases::clock_in::inbound::graphql::ClockInMutation;
use crate::modules::time_clock::use_cases::clock_out::inbound::graphql::ClockOutMutation;
use crate::modules::time_clock::use_cases::get_clock_status::inbound::graphql::ClockStatusQuery;
use crate::modules::time_clock::use_cases::get_my_weekly_hours::inbound::graphql::MyWeeklyHoursQuery;
use crate::modules::time_clock::use_cases::review_overtime_request::inbound::graphql::ReviewOvertimeMutation;
use crate::shell::actor::Actor;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ClockStatusQuery, MyWeeklyHoursQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ClockInMutation, ClockOutMutation, ReviewOvertimeMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// `/gql`: GraphiQL on GET, queries on POST on behalf of the calling actor.
pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    actor: Actor,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(actor)).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
