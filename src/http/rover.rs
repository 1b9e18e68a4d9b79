//! Rover API handlers.

use axum::{extract::rejection::JsonRejection, http::HeaderMap, Json};
use serde::{Deserialize, Deserializer, Serialize};

use crate::http::request::request_id;
use crate::http::response::ApiError;
use crate::observability::metrics;
use crate::rover::{Heading, Position, Rover, State};

pub const INFO: &str = "Mars Rover API; send POST with sample payload at this endpoint";

/// POST payload. Missing or `null` fields are no-ops, not errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: State,
    #[serde(default, deserialize_with = "null_as_default")]
    pub command: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub result: String,
}

/// GET payload: usage hint plus a request that can be posted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub info: String,
    pub sample: MoveRequest,
}

impl InfoResponse {
    pub fn sample() -> Self {
        Self {
            info: INFO.to_string(),
            sample: MoveRequest {
                state: Position::new(0, 0, Heading::North).into(),
                command: "FFF".to_string(),
            },
        }
    }
}

pub async fn get_info() -> Json<InfoResponse> {
    Json(InfoResponse::sample())
}

pub async fn move_rover(
    headers: HeaderMap,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let request_id = request_id(&headers);
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(request_id = %request_id, error = %rejection.body_text(), "Rejected move request");
        ApiError::from(rejection)
    })?;

    let result = run(request.state, &request.command);

    tracing::debug!(
        request_id = %request_id,
        command = %request.command,
        applied = result.applied,
        result = %result.rendered,
        "Rover moved"
    );
    metrics::record_commands(result.applied);

    Ok(Json(MoveResponse {
        result: result.rendered,
    }))
}

struct MoveOutcome {
    rendered: String,
    applied: usize,
}

// One rover per request, dropped when the request ends.
fn run(state: State, command: &str) -> MoveOutcome {
    let mut rover = Rover::new();
    rover.set_state(state);
    let applied = rover.execute(command);
    MoveOutcome {
        rendered: rover.to_string(),
        applied,
    }
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_from_payload_state() {
        let state: State =
            serde_json::from_value(json!({ "x": 0, "y": 0, "direction": "NORTH" })).unwrap();
        let outcome = run(state, "FFF");
        assert_eq!(outcome.rendered, "(0, 3) NORTH");
        assert_eq!(outcome.applied, 3);
    }

    #[test]
    fn test_missing_fields_default_to_noop() {
        let request: MoveRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.command, "");
        assert!(!request.state.is_valid());
        assert_eq!(
            run(request.state, &request.command).rendered,
            "(undefined, undefined) undefined"
        );
    }

    #[test]
    fn test_null_fields_match_missing_fields() {
        let request: MoveRequest =
            serde_json::from_value(json!({ "state": null, "command": null })).unwrap();
        assert_eq!(request, MoveRequest::default());
    }

    #[test]
    fn test_sample_shape() {
        let value = serde_json::to_value(InfoResponse::sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "info": INFO,
                "sample": {
                    "state": { "x": 0, "y": 0, "direction": "NORTH" },
                    "command": "FFF"
                }
            })
        );
    }
}
