//! End-to-end tests against a running service.

use rover_sdk::{MoveRequest, RoverClient, RoverState};
use rover_service::ServiceConfig;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_info_endpoint() {
    let (addr, shutdown) = common::start_service(ServiceConfig::default()).await;
    let client = RoverClient::new(&common::api_url(addr));

    let info = client.info().await.expect("info request failed");
    assert!(info.info.starts_with("Mars Rover API"));
    assert_eq!(info.sample.command, "FFF");
    assert_eq!(info.sample.state.direction, "NORTH");

    shutdown.trigger();
}

#[tokio::test]
async fn test_sample_payload_round_trips() {
    let (addr, shutdown) = common::start_service(ServiceConfig::default()).await;
    let client = RoverClient::new(&common::api_url(addr));

    let info = client.info().await.unwrap();
    let moved = client.move_rover(&info.sample).await.unwrap();
    assert_eq!(moved.result, "(0, 3) NORTH");

    shutdown.trigger();
}

#[tokio::test]
async fn test_move_scenarios() {
    let (addr, shutdown) = common::start_service(ServiceConfig::default()).await;
    let client = RoverClient::new(&common::api_url(addr));

    let cases = [
        ((6, 4, "NORTH"), "", "(6, 4) NORTH"),
        ((0, 0, "WEST"), "F", "(-1, 0) WEST"),
        ((0, 0, "WEST"), "X", "(0, 0) WEST"),
        ((0, 0, "WEST"), "FLFFFRFLB", "(-2, -2) SOUTH"),
        ((0, 0, "EAST"), "FFXFF", "(2, 0) EAST"),
        ((0, 0, "EAST"), "FFFBBBRFFBBLBBFF", "(0, 0) EAST"),
    ];

    for ((x, y, direction), command, expected) in cases {
        let req = MoveRequest {
            state: RoverState::new(x, y, direction),
            command: command.to_string(),
        };
        let res = client.move_rover(&req).await.unwrap();
        assert_eq!(res.result, expected, "command {:?}", command);
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (addr, shutdown) = common::start_service(ServiceConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/missing", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Route not found" }));

    shutdown.trigger();
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = ServiceConfig::default();
    config.limits.max_body_bytes = 128;
    let (addr, shutdown) = common::start_service(config).await;

    let body = json!({
        "state": { "x": 0, "y": 0, "direction": "NORTH" },
        "command": "F".repeat(1024),
    });
    let res = common::client()
        .post(common::api_url(addr))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 413);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Request body too large" }));

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let (addr, shutdown) = common::start_service(ServiceConfig::default()).await;
    let url = common::api_url(addr);

    let mut handles = Vec::new();
    for i in 0..20i64 {
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            let client = RoverClient::new(&url);
            let req = MoveRequest {
                state: RoverState::new(i, -i, "EAST"),
                command: "F".repeat(i as usize),
            };
            let res = client.move_rover(&req).await.unwrap();
            (i, res.result)
        }));
    }

    for handle in handles {
        let (i, result) = handle.await.unwrap();
        assert_eq!(result, format!("({}, {}) EAST", 2 * i, -i));
    }

    shutdown.trigger();
}
