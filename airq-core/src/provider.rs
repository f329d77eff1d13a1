use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{AirQualityRequest, HourlySeries};

pub mod openmeteo;

/// Why a fetch attempt produced no data.
///
/// The UI shows one uniform NoData state for all three; the classification
/// exists for diagnostics and for tests to assert on the cause.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never completed: DNS, connection, timeout, body read.
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),

    /// The server answered, but with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The body parsed (or didn't) into something without a usable hourly
    /// time axis.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// A source of hourly air-quality series for a pair of coordinates.
///
/// Implementations must hand back a series with a non-empty time axis or the
/// matching `FetchError`; they never panic on odd payloads.
#[async_trait]
pub trait AirQualityProvider: Send + Sync + Debug {
    async fn hourly_air_quality(
        &self,
        request: &AirQualityRequest,
    ) -> Result<HourlySeries, FetchError>;
}
