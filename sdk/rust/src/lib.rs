use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverState {
    pub x: serde_json::Value,
    pub y: serde_json::Value,
    pub direction: serde_json::Value,
}

impl RoverState {
    pub fn new(x: i64, y: i64, direction: &str) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            direction: direction.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub state: RoverState,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub info: String,
    pub sample: MoveRequest,
}

pub struct RoverClient {
    client: Client,
    api_url: String,
}

impl RoverClient {
    /// `api_url` is the full endpoint, e.g. `http://localhost:5000/api`.
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.to_string(),
        }
    }

    /// Fetch usage info and the sample payload.
    pub async fn info(&self) -> Result<InfoResponse, Box<dyn std::error::Error>> {
        let resp = self.client.get(&self.api_url).send().await?;
        Self::decode(resp).await
    }

    /// Move a rover from `state` by `command`; returns the rendered end position.
    pub async fn move_rover(&self, req: &MoveRequest) -> Result<MoveResponse, Box<dyn std::error::Error>> {
        let resp = self.client.post(&self.api_url).json(req).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        resp: reqwest::Response,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Rover API returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str::<T>(&text)?)
    }
}
