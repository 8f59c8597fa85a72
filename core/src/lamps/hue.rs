//! Philips Hue bridge client (REST API v1).

use super::{LampChange, LampCommand, LampError, LampInfo, LampSink, TransitionTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

pub struct HueBridge {
    address: String,
    username: String,
    client: reqwest::Client,
    lamps: Vec<LampInfo>,
}

#[derive(Debug, Deserialize)]
struct HueLight {
    name: String,
}

/// Body of `PUT /lights/<id>/state`.
#[derive(Debug, Serialize, PartialEq)]
struct StateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transitiontime: Option<u16>,
}

impl StateBody {
    fn new(change: LampChange, transition: Option<TransitionTime>) -> Self {
        Self {
            on: change.on,
            bri: change.brightness,
            hue: change.hue,
            sat: change.saturation,
            transitiontime: transition.map(TransitionTime::deciseconds),
        }
    }
}

fn http_client(address: &str) -> Result<reqwest::Client, LampError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| LampError::Unreachable {
            address: address.to_string(),
            source,
        })
}

/// The bridge reports failures as `[{"error": {...}}]` with a 200 status.
fn check_bridge_errors(address: &str, response: &Value) -> Result<(), LampError> {
    let Some(entries) = response.as_array() else {
        return Ok(());
    };
    for entry in entries {
        if let Some(error) = entry.get("error") {
            return Err(LampError::Bridge {
                address: address.to_string(),
                code: error.get("type").and_then(Value::as_u64).unwrap_or_default(),
                description: error
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }
    }
    Ok(())
}

fn parse_lights(address: &str, response: Value) -> Result<Vec<LampInfo>, LampError> {
    check_bridge_errors(address, &response)?;
    let lights: HashMap<String, HueLight> =
        serde_json::from_value(response).map_err(|e| LampError::InvalidResponse {
            address: address.to_string(),
            detail: e.to_string(),
        })?;

    let mut lamps: Vec<LampInfo> = lights
        .into_iter()
        .map(|(id, light)| LampInfo::new(id, light.name))
        .collect();
    lamps.sort_by(|a, b| {
        let key = |l: &LampInfo| (l.id.0.parse::<u64>().unwrap_or(u64::MAX), l.id.0.clone());
        key(a).cmp(&key(b))
    });
    Ok(lamps)
}

fn parse_username(address: &str, response: &Value) -> Result<String, LampError> {
    check_bridge_errors(address, response)?;
    response
        .as_array()
        .and_then(|entries| entries.iter().find_map(|e| e.pointer("/success/username")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| LampError::InvalidResponse {
            address: address.to_string(),
            detail: format!("no username in pairing response: {response}"),
        })
}

impl HueBridge {
    /// Pair with the bridge. The link button on the bridge must have been
    /// pressed shortly before. Returns the new API username.
    pub async fn register(address: &str, device_type: &str) -> Result<String, LampError> {
        let client = http_client(address)?;
        let response: Value = client
            .post(format!("http://{address}/api"))
            .json(&serde_json::json!({ "devicetype": device_type }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| LampError::Unreachable {
                address: address.to_string(),
                source,
            })?
            .json()
            .await
            .map_err(|e| LampError::InvalidResponse {
                address: address.to_string(),
                detail: e.to_string(),
            })?;

        let username = parse_username(address, &response)?;
        tracing::info!(address, "paired with bridge");
        Ok(username)
    }

    /// Connect to a paired bridge and discover its lamps.
    pub async fn connect(address: &str, username: &str) -> Result<Self, LampError> {
        tracing::debug!(address, "bridge.connect");
        let client = http_client(address)?;
        let response: Value = client
            .get(format!("http://{address}/api/{username}/lights"))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| LampError::Unreachable {
                address: address.to_string(),
                source,
            })?
            .json()
            .await
            .map_err(|e| LampError::InvalidResponse {
                address: address.to_string(),
                detail: e.to_string(),
            })?;

        let lamps = parse_lights(address, response)?;
        tracing::info!(address, lamps = lamps.len(), "connected to bridge");

        Ok(Self {
            address: address.to_string(),
            username: username.to_string(),
            client,
            lamps,
        })
    }
}

impl LampSink for HueBridge {
    fn lamps(&self) -> Vec<LampInfo> {
        self.lamps.clone()
    }

    async fn apply(&mut self, command: &LampCommand) -> Result<(), LampError> {
        let url = format!(
            "http://{}/api/{}/lights/{}/state",
            self.address, self.username, command.lamp
        );
        let body = StateBody::new(command.change, command.transition);

        let response: Value = self
            .client
            .put(url)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| LampError::Unreachable {
                address: self.address.clone(),
                source,
            })?
            .json()
            .await
            .map_err(|e| LampError::InvalidResponse {
                address: self.address.clone(),
                detail: e.to_string(),
            })?;

        check_bridge_errors(&self.address, &response)
    }
}
