//! Hue bridge communication.
//!
//! Implements the lighting controller seam over the Hue bridge's REST API.
//! Only the two commands the control loop needs are spoken here: set color
//! temperature (mired) and set brightness (0-255), each addressed to a list
//! of light ids. Discovery, pairing, and the rest of the bridge surface are
//! out of scope.
//!
//! The bridge signals application-level failures inside a 200 response as an
//! `[{"error": {...}}]` array, so every response body is checked, not just
//! the HTTP status.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::{Value, json};
use std::time::Duration;

use crate::constants::BRIDGE_TIMEOUT_SECS;

/// Command surface of the lighting hardware.
///
/// The control loop only ever issues these two writes. Keeping them behind a
/// trait lets tests substitute a recording mock for the network bridge.
pub trait LightingController {
    /// Set the color temperature, in mired, of each listed light.
    fn set_color_temperature(&self, mired: u32, lights: &[u32]) -> Result<()>;

    /// Set the brightness, on the bridge's 0-255 scale, of each listed light.
    fn set_brightness(&self, bri: u8, lights: &[u32]) -> Result<()>;

    /// Human-readable controller name for log output.
    fn name(&self) -> &'static str;
}

/// Philips Hue bridge client over its local REST API.
pub struct HueBridge {
    client: Client,
    address: String,
    api_key: String,
}

impl HueBridge {
    /// Connect to a bridge and verify the address and application key.
    ///
    /// Performs a single lights query; an unreachable host or an
    /// unauthorized key fails here rather than on the first loop iteration.
    pub fn connect(address: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(BRIDGE_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        let bridge = Self {
            client,
            address: address.to_string(),
            api_key: api_key.to_string(),
        };

        let response: Value = bridge
            .client
            .get(bridge.url("lights"))
            .send()
            .with_context(|| format!("Failed to reach Hue bridge at {address}"))?
            .json()
            .context("Hue bridge returned malformed JSON")?;
        check_bridge_errors(&response).context("Hue bridge rejected the connection")?;

        Ok(bridge)
    }

    fn url(&self, resource: &str) -> String {
        format!("http://{}/api/{}/{}", self.address, self.api_key, resource)
    }

    /// PUT a state change to one light and surface any bridge-reported error.
    fn put_state(&self, light: u32, state: &Value) -> Result<()> {
        let response: Value = self
            .client
            .put(self.url(&format!("lights/{light}/state")))
            .json(state)
            .send()
            .with_context(|| format!("Failed to send state to light {light}"))?
            .json()
            .context("Hue bridge returned malformed JSON")?;
        check_bridge_errors(&response)
            .with_context(|| format!("Hue bridge rejected state for light {light}"))
    }
}

impl LightingController for HueBridge {
    fn set_color_temperature(&self, mired: u32, lights: &[u32]) -> Result<()> {
        let state = json!({ "ct": mired });
        for &light in lights {
            self.put_state(light, &state)?;
        }
        Ok(())
    }

    fn set_brightness(&self, bri: u8, lights: &[u32]) -> Result<()> {
        let state = json!({ "bri": bri });
        for &light in lights {
            self.put_state(light, &state)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Hue bridge"
    }
}

/// Scan a bridge response for `{"error": {...}}` entries.
///
/// Successful responses are either an object (resource queries) or an array
/// of `{"success": ...}` entries (state changes); either way an error entry
/// carries a `description` worth surfacing verbatim.
fn check_bridge_errors(response: &Value) -> Result<()> {
    if let Some(entries) = response.as_array() {
        for entry in entries {
            if let Some(error) = entry.get("error") {
                let description = error
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown bridge error");
                anyhow::bail!("{description}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_response_passes_error_check() {
        let response = json!({ "1": { "name": "Hue color lamp 1" } });
        assert!(check_bridge_errors(&response).is_ok());
    }

    #[test]
    fn success_array_passes_error_check() {
        let response = json!([{ "success": { "/lights/1/state/ct": 250 } }]);
        assert!(check_bridge_errors(&response).is_ok());
    }

    #[test]
    fn error_array_surfaces_description() {
        let response = json!([{ "error": {
            "type": 1,
            "address": "/",
            "description": "unauthorized user"
        }}]);
        let err = check_bridge_errors(&response).unwrap_err();
        assert!(err.to_string().contains("unauthorized user"));
    }
}
