//! Request handlers for the GraphQL endpoint.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use async_graphql::http::GraphiQLSource;
use async_graphql::parser::parse_query;
use async_graphql::parser::types::OperationType;
use async_graphql::Variables;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use bookshelf_schema::BookshelfSchema;
use serde::Deserialize;
use std::sync::Arc;

/// Context shared by all handlers.
pub struct HandlerContext {
    /// Server configuration.
    pub config: ServerConfig,
    /// Executable schema (holds the store).
    pub schema: BookshelfSchema,
}

impl HandlerContext {
    /// Creates a new handler context.
    pub fn new(config: ServerConfig, schema: BookshelfSchema) -> Self {
        Self { config, schema }
    }
}

/// URL parameters accepted on `GET`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetParams {
    /// GraphQL document.
    pub query: Option<String>,
    /// Operation to run when the document holds several.
    pub operation_name: Option<String>,
    /// JSON-encoded variables object.
    pub variables: Option<String>,
}

/// Handles `POST` with a JSON GraphQL request body.
pub async fn graphql_post(
    State(ctx): State<Arc<HandlerContext>>,
    Json(request): Json<async_graphql::Request>,
) -> ServerResult<Json<async_graphql::Response>> {
    if request.query.trim().is_empty() {
        return Err(missing_query());
    }
    tracing::debug!(operation = ?request.operation_name, "executing POST request");
    Ok(Json(ctx.schema.execute(request).await))
}

/// Handles `GET`: runs a query from URL parameters, or serves GraphiQL.
pub async fn graphql_get(
    State(ctx): State<Arc<HandlerContext>>,
    Query(params): Query<GetParams>,
) -> ServerResult<Response> {
    let Some(query) = params.query else {
        if ctx.config.graphiql {
            return Ok(graphiql_page(&ctx.config.endpoint).into_response());
        }
        return Err(missing_query());
    };

    if selects_mutation(&query, params.operation_name.as_deref()) {
        tracing::warn!("refused mutation over GET");
        return Err(ServerError::MethodNotAllowed(
            "Can only perform a mutation operation from a POST request.".into(),
        ));
    }

    let mut request = async_graphql::Request::new(query);
    if let Some(name) = params.operation_name {
        request = request.operation_name(name);
    }
    if let Some(raw) = params.variables {
        let json: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            ServerError::InvalidRequest(format!("Variables are invalid JSON: {e}"))
        })?;
        request = request.variables(Variables::from_json(json));
    }

    tracing::debug!(operation = ?request.operation_name, "executing GET request");
    Ok(Json(ctx.schema.execute(request).await).into_response())
}

fn missing_query() -> ServerError {
    ServerError::InvalidRequest("Must provide query string.".into())
}

fn graphiql_page(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}

/// Returns true if the operation `query` would run is a mutation.
///
/// Unparseable documents return false; execution reports the syntax error.
fn selects_mutation(query: &str, operation_name: Option<&str>) -> bool {
    let Ok(document) = parse_query(query) else {
        return false;
    };
    document.operations.iter().any(|(name, op)| {
        op.node.ty == OperationType::Mutation
            && operation_name.map_or(true, |wanted| name.map(|n| n.as_str()) == Some(wanted))
    })
}
