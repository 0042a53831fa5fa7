use clap::{Parser, Subcommand};
use inquire::Text;
use wx_core::{CityQuery, Config, Units, WeatherClient, run_query};

/// Top-level CLI struct.
///
/// The default invocation takes the city name as positional words, so
/// `wx new york -F` works without a subcommand.
#[derive(Debug, Parser)]
#[command(
    name = "wx",
    version,
    about = "Current weather for a city",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Name of the city to check for, one or more words.
    #[arg(value_name = "CITY", required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Display temperatures in F units.
    #[arg(short = 'F', long = "fahrenheit")]
    pub imperial: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => {
                let units = if self.imperial { Units::Imperial } else { Units::Metric };
                let query = CityQuery::new(self.city, units);

                let config = Config::load()?;
                let client = WeatherClient::new();

                let lines = run_query(&client, &config, &query).await?;
                for line in lines {
                    println!("{line}");
                }

                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let api_key = Text::new("OpenWeather API key:").prompt()?;

    let mut config = Config::load()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}
