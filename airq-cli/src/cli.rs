use anyhow::anyhow;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select};

use airq_core::{
    AirQualityFetcher, AnimationTarget, AnimationTrigger, CITIES, Config, KEY_BANDS, KeyModal,
    OpenMeteoProvider, registry,
};

use crate::display::TerminalDisplay;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "airq", version, about = "Air quality watcher")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the latest air quality for a city (the default city if omitted).
    Show {
        /// City id, e.g. "sydney". See `airq cities`.
        city: Option<String>,
    },

    /// List the supported city ids.
    Cities,

    /// Print the air quality key (US AQI bands).
    Key,

    /// Set the default city used by `airq show`.
    Configure {
        /// City id, e.g. "sydney".
        city: String,
    },

    /// Pick cities interactively and watch their air quality.
    Watch,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city } => show(city).await,
            Command::Cities => {
                for city in CITIES {
                    println!("{:<10} {}", city.id, city.name);
                }
                Ok(())
            }
            Command::Key => {
                print_key();
                Ok(())
            }
            Command::Configure { city } => {
                let mut cfg = Config::load()?;
                cfg.set_default_city(&city)?;
                cfg.save()?;
                println!("Default city set to '{city}'.");
                Ok(())
            }
            Command::Watch => watch().await,
        }
    }
}

/// The terminal has no animation engine; every trigger is a logged no-op.
fn animation() -> AnimationTrigger {
    AnimationTrigger::unavailable()
}

fn fetcher() -> AirQualityFetcher<TerminalDisplay> {
    AirQualityFetcher::new(
        Box::new(OpenMeteoProvider::new()),
        TerminalDisplay,
        animation(),
    )
}

async fn show(city: Option<String>) -> anyhow::Result<()> {
    let city_id = match city {
        Some(id) => {
            // The watcher itself ignores unknown ids; the CLI is the
            // selector, so it tells the user instead.
            registry::resolve(&id)
                .ok_or_else(|| {
                    anyhow!(
                        "Unknown city '{id}'.\n\
                         Hint: run `airq cities` to list the supported city ids."
                    )
                })?
                .id
        }
        None => Config::load()?.default_city_entry().id,
    };

    tracing::debug!(city = city_id, "city selected");
    fetcher().fetch(city_id).await;
    Ok(())
}

fn print_key() {
    println!("Air Quality Key (US AQI)");
    for band in KEY_BANDS {
        println!("  {:>7}  {}", band.range, band.label);
    }
}

const KEY_CHOICE: &str = "Air quality key";
const QUIT_CHOICE: &str = "Quit";

async fn watch() -> anyhow::Result<()> {
    let mut fetcher = fetcher();
    let mut modal = KeyModal::new(animation());

    // The hero card's entrance effect from the original page layout.
    animation().animate(AnimationTarget::HeroCard);

    // Load the default city before the first prompt.
    fetcher.fetch(Config::load()?.default_city_entry().id).await;

    loop {
        let mut choices: Vec<&str> = CITIES.iter().map(|c| c.name).collect();
        choices.push(KEY_CHOICE);
        choices.push(QUIT_CHOICE);

        let picked = match Select::new("City:", choices).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match picked {
            QUIT_CHOICE => break,
            KEY_CHOICE => {
                modal.open();
                print_key();
                modal.close();
            }
            name => {
                if let Some(city) = CITIES.iter().find(|c| c.name == name) {
                    fetcher.fetch(city.id).await;
                }
            }
        }
    }

    Ok(())
}
