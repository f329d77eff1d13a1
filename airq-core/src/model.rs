use serde::Deserialize;

use crate::{provider::FetchError, registry::CityEntry};

/// Placeholder shown for every absent metric, whatever made it absent.
pub const NO_INFO: &str = "NO INFO";

/// Coordinates for one air-quality fetch, derived from a registry entry.
///
/// The channel set, hourly granularity and automatic timezone are fixed
/// properties of the provider, not of the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualityRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&CityEntry> for AirQualityRequest {
    fn from(city: &CityEntry) -> Self {
        Self { latitude: city.latitude, longitude: city.longitude }
    }
}

/// Hourly time-series as the API reports them: one shared time axis and one
/// numeric-or-null series per channel.
///
/// Channels may be missing entirely, and a series may be shorter than the
/// time axis; readers must not assume the parallelism holds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub pm2_5: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub pm10: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub ozone: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub carbon_monoxide: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub us_aqi: Option<Vec<Option<f64>>>,
}

/// The latest sample of each channel, normalized for display.
///
/// AQI is rounded to the nearest integer; concentrations to one decimal
/// place. `None` uniformly covers null, missing-series, short-series and
/// non-finite source values, and is never replaced by zero or a sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsRecord {
    pub us_aqi: Option<i64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub ozone: Option<f64>,
    pub carbon_monoxide: Option<f64>,
}

impl MetricsRecord {
    /// Build a record from the last index of the time axis ("latest").
    ///
    /// Returns `None` when the time axis is empty, i.e. there is no latest
    /// sample to take.
    pub fn from_latest(hourly: &HourlySeries) -> Option<Self> {
        let index = hourly.time.len().checked_sub(1)?;

        Some(Self {
            us_aqi: channel_at(hourly.us_aqi.as_deref(), index).map(|v| v.round() as i64),
            pm2_5: channel_at(hourly.pm2_5.as_deref(), index).map(round1),
            pm10: channel_at(hourly.pm10.as_deref(), index).map(round1),
            ozone: channel_at(hourly.ozone.as_deref(), index).map(round1),
            carbon_monoxide: channel_at(hourly.carbon_monoxide.as_deref(), index).map(round1),
        })
    }

    pub fn aqi_text(&self) -> String {
        self.us_aqi.map_or_else(|| NO_INFO.to_string(), |v| v.to_string())
    }

    pub fn pm2_5_text(&self) -> String {
        concentration_text(self.pm2_5)
    }

    pub fn pm10_text(&self) -> String {
        concentration_text(self.pm10)
    }

    pub fn ozone_text(&self) -> String {
        concentration_text(self.ozone)
    }

    pub fn carbon_monoxide_text(&self) -> String {
        concentration_text(self.carbon_monoxide)
    }
}

/// One fetch attempt's result, tagged with the city's display name.
///
/// Failures never surface as `Err` from the pipeline; they arrive here as
/// `NoData` with the classified cause attached for logs and tests.
#[derive(Debug)]
pub enum FetchOutcome {
    Metrics { city_name: String, record: MetricsRecord },
    NoData { city_name: String, cause: FetchError },
}

/// Read one channel's value at `index`, treating a missing series, an index
/// past its end, a null, or a non-finite number all as absent.
fn channel_at(series: Option<&[Option<f64>]>, index: usize) -> Option<f64> {
    series
        .and_then(|s| s.get(index))
        .copied()
        .flatten()
        .filter(|v| v.is_finite())
}

/// Round to one decimal place, halves away from zero (display convention).
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn concentration_text(value: Option<f64>) -> String {
    value.map_or_else(|| NO_INFO.to_string(), |v| format!("{v:.1}"))
}
