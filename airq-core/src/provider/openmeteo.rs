use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{AirQualityRequest, HourlySeries};

use super::{AirQualityProvider, FetchError};

const BASE_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

/// Channel list requested on every call, in API naming.
const HOURLY_CHANNELS: &str = "pm2_5,pm10,ozone,carbon_monoxide,us_aqi";

/// Open-Meteo air-quality API client. No credentials required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self { base_url: BASE_URL.to_string(), http: Client::new() }
    }

    /// Point the client at a different endpoint (local stubs).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }
}

fn query_params(request: &AirQualityRequest) -> [(&'static str, String); 4] {
    [
        ("latitude", request.latitude.to_string()),
        ("longitude", request.longitude.to_string()),
        ("hourly", HOURLY_CHANNELS.to_string()),
        ("timezone", "auto".to_string()),
    ]
}

/// Decode a response body and check it actually carries a usable time axis.
fn parse_payload(body: &str) -> Result<HourlySeries, FetchError> {
    let parsed: OmAirQualityResponse = serde_json::from_str(body).map_err(|err| {
        FetchError::Transport(
            anyhow::Error::new(err).context("Failed to parse Open-Meteo air-quality JSON"),
        )
    })?;

    let hourly = parsed
        .hourly
        .ok_or_else(|| FetchError::MalformedPayload("response has no hourly block".into()))?;

    if hourly.time.is_empty() {
        return Err(FetchError::MalformedPayload("hourly time axis is empty".into()));
    }

    Ok(hourly)
}

#[derive(Debug, Deserialize)]
struct OmAirQualityResponse {
    #[serde(default)]
    hourly: Option<HourlySeries>,
}

#[async_trait]
impl AirQualityProvider for OpenMeteoProvider {
    async fn hourly_air_quality(
        &self,
        request: &AirQualityRequest,
    ) -> Result<HourlySeries, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&query_params(request))
            .send()
            .await
            .map_err(|err| {
                FetchError::Transport(
                    anyhow::Error::new(err).context("Failed to send request to Open-Meteo"),
                )
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            FetchError::Transport(
                anyhow::Error::new(err).context("Failed to read Open-Meteo response body"),
            )
        })?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %truncate_body(&body), "Open-Meteo returned non-success");
            return Err(FetchError::Status { status: status.as_u16() });
        }

        parse_payload(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multibyte text cannot panic the slice.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_api_contract() {
        let city = crate::registry::resolve("sydney").unwrap();
        let params = query_params(&AirQualityRequest::from(city));

        assert_eq!(params[0], ("latitude", "-33.8688".to_string()));
        assert_eq!(params[1], ("longitude", "151.2093".to_string()));
        assert_eq!(params[2], ("hourly", "pm2_5,pm10,ozone,carbon_monoxide,us_aqi".to_string()));
        assert_eq!(params[3], ("timezone", "auto".to_string()));
    }

    #[test]
    fn parses_well_formed_payload() {
        let body = r#"{
            "hourly": {
                "time": ["t0"],
                "us_aqi": [88],
                "pm2_5": [5.5],
                "pm10": [10.0],
                "ozone": [20.25],
                "carbon_monoxide": [0.15]
            }
        }"#;

        let hourly = parse_payload(body).unwrap();
        assert_eq!(hourly.time, vec!["t0".to_string()]);
        assert_eq!(hourly.us_aqi, Some(vec![Some(88.0)]));
    }

    #[test]
    fn nulls_survive_parsing() {
        let body = r#"{"hourly": {"time": ["t0", "t1"], "pm10": [null, 3.2]}}"#;

        let hourly = parse_payload(body).unwrap();
        assert_eq!(hourly.pm10, Some(vec![None, Some(3.2)]));
        assert_eq!(hourly.ozone, None);
    }

    #[test]
    fn missing_hourly_block_is_malformed() {
        let err = parse_payload(r#"{"latitude": 1.0}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn empty_time_axis_is_malformed() {
        let err = parse_payload(r#"{"hourly": {"time": []}}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));

        let err = parse_payload(r#"{"hourly": {"us_aqi": [1.0]}}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // Byte 200 lands inside the two-byte 'é'; truncation must step back
        // instead of panicking.
        let mut body = "x".repeat(199);
        body.push('é');
        body.push_str(&"y".repeat(100));

        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "x".repeat(199)));

        let multibyte = "é".repeat(150);
        let truncated = truncate_body(&multibyte);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
    }

    #[test]
    fn truncate_body_leaves_short_bodies_alone() {
        assert_eq!(truncate_body("not found"), "not found");
        assert_eq!(truncate_body(""), "");
    }

    #[test]
    fn unparseable_body_is_a_transport_failure() {
        let err = parse_payload("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
