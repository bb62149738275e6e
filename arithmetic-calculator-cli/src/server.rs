use crate::config::ServerConfig;
use anyhow::{Context, Result};
use arithmetic_calculator::interpreter::calculate;
use arithmetic_calculator::interpreter::error::{ErrorKind, EvaluationError};
use arithmetic_calculator::interpreter::formatter::format_general;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::any::Any;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;

pub const CALCULATE_ROUTE: &str = "/api/v1/calculate";

const INVALID_EXPRESSION_MESSAGE: &str = "Expression is not valid";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

const EXPRESSION_FIELD: &str = "expression";

#[derive(Debug, PartialEq, Eq)]
pub struct CalculateRequest {
    pub expression: String,
}

impl CalculateRequest {
    /// Field names match case-insensitively, an exact match wins. A missing or `null`
    /// expression is empty.
    fn from_fields(fields: &Map<String, Value>) -> Result<CalculateRequest, ApiError> {
        let field = fields.get(EXPRESSION_FIELD).or_else(|| {
            fields
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(EXPRESSION_FIELD))
                .map(|(_, value)| value)
        });
        let expression = match field {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(expression)) => expression.clone(),
            Some(other) => {
                return Err(ApiError::MalformedBody(format!(
                    "expression must be a string, found {}",
                    other
                )))
            }
        };
        Ok(CalculateRequest { expression })
    }
}

/// Exactly one of the two fields is present in a response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculateResponse {
    fn success(value: f64) -> Self {
        CalculateResponse {
            result: Some(format_general(value)),
            error: None,
        }
    }

    fn failure(message: &str) -> Self {
        CalculateResponse {
            result: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Evaluation(evaluation_error) => match evaluation_error.kind() {
                ErrorKind::MismatchedParentheses
                | ErrorKind::InvalidInput
                | ErrorKind::DivisionByZero => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_client_error() {
            debug!("rejected request: {}", self);
            INVALID_EXPRESSION_MESSAGE
        } else {
            error!("failed to handle request: {:#}", self);
            INTERNAL_ERROR_MESSAGE
        };
        (status, Json(CalculateResponse::failure(message))).into_response()
    }
}

/// Builds the HTTP boundary of the calculator: a single `POST /api/v1/calculate` route.
pub fn router() -> Router {
    Router::new()
        .route(
            CALCULATE_ROUTE,
            post(calculate_handler).fallback(method_not_allowed),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Serves the calculation API until Ctrl-C is received.
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("could not bind to {}", address))?;
    info!("Server is running on http://{}", address);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down gracefully"),
        Err(signal_error) => error!("could not listen for Ctrl-C: {}", signal_error),
    }
}

/// The body is decoded by hand so that any decoding failure, including a missing or wrong
/// content type, is answered the same way. Only the first JSON value in the body is read.
async fn calculate_handler(body: Bytes) -> Result<Json<CalculateResponse>, ApiError> {
    let request = decode_request(&body)?;
    let value = calculate(&request.expression)?;
    Ok(Json(CalculateResponse::success(value)))
}

fn decode_request(body: &[u8]) -> Result<CalculateRequest, ApiError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(Value::Object(fields))) => CalculateRequest::from_fields(&fields),
        Some(Ok(other)) => Err(ApiError::MalformedBody(format!(
            "expected a JSON object, found {}",
            other
        ))),
        Some(Err(decode_error)) => Err(ApiError::MalformedBody(decode_error.to_string())),
        None => Err(ApiError::MalformedBody("empty body".to_string())),
    }
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", details)).into_response()
}
