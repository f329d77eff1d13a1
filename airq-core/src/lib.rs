//! Core library for the `airq` air-quality watcher.
//!
//! This crate defines:
//! - The city registry (the values the selector offers)
//! - The Open-Meteo provider and the fetch/normalize pipeline
//! - The display-sink and animation abstractions the pipeline renders through
//! - The key-modal state machine and persisted configuration
//!
//! It is used by `airq-cli`, but can also be reused by other binaries or services.

pub mod animate;
pub mod config;
pub mod display;
pub mod fetcher;
pub mod modal;
pub mod model;
pub mod provider;
pub mod registry;

pub use animate::{AnimationTarget, AnimationTrigger, Animator};
pub use config::Config;
pub use display::DisplaySink;
pub use fetcher::AirQualityFetcher;
pub use modal::{KEY_BANDS, KeyModal};
pub use model::{AirQualityRequest, FetchOutcome, HourlySeries, MetricsRecord, NO_INFO};
pub use provider::{AirQualityProvider, FetchError, openmeteo::OpenMeteoProvider};
pub use registry::{CITIES, CityEntry};
