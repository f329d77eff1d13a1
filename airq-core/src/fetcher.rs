use crate::{
    animate::{AnimationTarget, AnimationTrigger},
    display::DisplaySink,
    model::{AirQualityRequest, FetchOutcome, MetricsRecord},
    provider::{AirQualityProvider, FetchError},
    registry,
};

/// The fetch pipeline: resolve a city, call the provider, normalize the
/// latest sample, hand the result to the display sink.
///
/// Owns its collaborators; nothing here reaches into ambient state. Failures
/// are classified internally but resolve to one uniform no-data render, so
/// `fetch` itself never returns `Err`.
#[derive(Debug)]
pub struct AirQualityFetcher<D: DisplaySink> {
    provider: Box<dyn AirQualityProvider>,
    display: D,
    animation: AnimationTrigger,
}

impl<D: DisplaySink> AirQualityFetcher<D> {
    pub fn new(provider: Box<dyn AirQualityProvider>, display: D, animation: AnimationTrigger) -> Self {
        Self { provider, display, animation }
    }

    /// Fetch and render the latest air quality for `city_id`.
    ///
    /// An unknown id returns `None` without touching the display. Otherwise
    /// the title is set (and the subtitle cleared) before the network call,
    /// and exactly one of a metrics render or a no-data render follows.
    ///
    /// Overlapping calls are not coordinated: if a second city is requested
    /// while a fetch is in flight, whichever completes last wins the display.
    pub async fn fetch(&mut self, city_id: &str) -> Option<FetchOutcome> {
        let city = registry::resolve(city_id)?;

        self.display.set_title(&format!("Air Quality {}", city.name));
        self.display.set_subtitle("");

        let request = AirQualityRequest::from(city);

        let outcome = match self.provider.hourly_air_quality(&request).await {
            Ok(hourly) => match MetricsRecord::from_latest(&hourly) {
                Some(record) => {
                    self.display.render_metrics(&record);
                    self.animation.animate(AnimationTarget::MetricsCard);
                    FetchOutcome::Metrics { city_name: city.name.to_string(), record }
                }
                // Provider validation makes this unreachable in practice,
                // but an empty axis still must not crash.
                None => self.no_data(
                    city.name,
                    FetchError::MalformedPayload("hourly time axis is empty".into()),
                ),
            },
            Err(cause) => self.no_data(city.name, cause),
        };

        Some(outcome)
    }

    fn no_data(&mut self, city_name: &str, cause: FetchError) -> FetchOutcome {
        match &cause {
            FetchError::Transport(err) => {
                tracing::error!(city = city_name, error = %err, "air quality fetch failed in transport");
            }
            FetchError::Status { status } => {
                tracing::warn!(city = city_name, status, "air quality fetch got a non-success response");
            }
            FetchError::MalformedPayload(detail) => {
                tracing::warn!(city = city_name, detail = %detail, "air quality payload unusable");
            }
        }

        self.display.render_no_data();
        FetchOutcome::NoData { city_name: city_name.to_string(), cause }
    }
}
