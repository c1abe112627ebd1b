use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::plan::TacticalPlan;

pub const PREDICT_ENDPOINT: &str = "/predict";
pub const CONNECT_FAILED_ALERT: &str = "Failed to connect to server.";
pub const UNKNOWN_ERROR_FALLBACK: &str = "Unknown error occurred";

#[derive(Debug, Deserialize)]
struct RejectionBody {
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Plan(TacticalPlan),
    Rejected(String),
}

#[derive(Debug)]
pub enum ResponseError {
    MalformedBody(serde_json::Error),
    UnexpectedShape(serde_json::Error),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::MalformedBody(err) => write!(f, "response body is not json: {err}"),
            ResponseError::UnexpectedShape(err) => write!(f, "response body is not a plan: {err}"),
        }
    }
}

impl std::error::Error for ResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseError::MalformedBody(err) => Some(err),
            ResponseError::UnexpectedShape(err) => Some(err),
        }
    }
}

/// The body is parsed before the status is inspected, so a malformed body on
/// a 2xx response fails the same way a dropped connection does.
pub fn interpret_response(ok: bool, body: &str) -> Result<SubmitOutcome, ResponseError> {
    let value: Value = serde_json::from_str(body).map_err(ResponseError::MalformedBody)?;
    if !ok {
        let rejection: RejectionBody =
            serde_json::from_value(value).unwrap_or(RejectionBody { error: None });
        let message = rejection
            .error
            .unwrap_or_else(|| UNKNOWN_ERROR_FALLBACK.to_string());
        return Ok(SubmitOutcome::Rejected(message));
    }
    let plan: TacticalPlan =
        serde_json::from_value(value).map_err(ResponseError::UnexpectedShape)?;
    Ok(SubmitOutcome::Plan(plan))
}

pub fn rejection_alert(message: &str) -> String {
    format!("Error: {message}")
}
