use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;

use super::RoomqlSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Routes: `POST /graphql`, GraphiQL on `GET /graphql`, and `GET /health`.
pub fn router(schema: RoomqlSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .with_state(schema)
}

/// Serves the schema until the process is stopped.
pub async fn run_server(schema: RoomqlSchema, host: &str, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");
    axum::serve(listener, router(schema)).await
}

/// True when the document never reached the resolvers: parse errors,
/// arguments of the wrong type, or missing required arguments.
///
/// Resolver errors always carry the path of the failing field, so a response
/// whose errors are all pathless was rejected before execution.
pub fn rejected_before_execution(response: &async_graphql::Response) -> bool {
    response.is_err() && response.errors.iter().all(|e| e.path.is_empty())
}

async fn graphql_handler(State(schema): State<RoomqlSchema>, req: GraphQLRequest) -> Response {
    let response = schema.execute(req.into_inner()).await;

    let status = if rejected_before_execution(&response) {
        tracing::warn!(
            error = %response.errors.first().map(|e| e.message.as_str()).unwrap_or_default(),
            "rejected GraphQL document"
        );
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    (status, GraphQLResponse::from(response)).into_response()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}
