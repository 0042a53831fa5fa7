use reqwest::Url;

use crate::error::WeatherError;

/// Current-weather endpoint. The credential and city are query parameters.
pub const BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Display unit preference, mapped to the provider's `units` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature suffix for display: `C` or `F`.
    pub fn temp_symbol(&self) -> char {
        match self {
            Units::Metric => 'C',
            Units::Imperial => 'F',
        }
    }
}

/// One weather lookup: a city name given as words plus a unit preference.
///
/// Built once per invocation and never mutated.
#[derive(Debug, Clone)]
pub struct CityQuery {
    words: Vec<String>,
    units: Units,
}

impl CityQuery {
    pub fn new(words: Vec<String>, units: Units) -> Self {
        Self { words, units }
    }

    /// City name with the words joined by single spaces.
    pub fn city(&self) -> String {
        self.words.join(" ")
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// Build the full request URL for this query.
    ///
    /// Pure string construction; the only failure is a missing or blank
    /// credential, reported as a configuration error rather than a
    /// half-built URL. Percent-encoding of the city name (spaces become
    /// `+`) is handled by the URL query serializer.
    pub fn to_url(&self, api_key: &str) -> Result<Url, WeatherError> {
        self.to_url_with_base(BASE_URL, api_key)
    }

    pub(crate) fn to_url_with_base(
        &self,
        base: &str,
        api_key: &str,
    ) -> Result<Url, WeatherError> {
        if api_key.trim().is_empty() {
            return Err(WeatherError::Config(
                "API key is empty; cannot build a request URL.".to_string(),
            ));
        }

        Url::parse_with_params(
            base,
            &[
                ("q", self.city().as_str()),
                ("units", self.units.as_str()),
                ("appid", api_key),
            ],
        )
        .map_err(|e| WeatherError::Config(format!("Invalid request URL: {e}")))
    }
}
