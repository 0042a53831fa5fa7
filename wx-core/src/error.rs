use thiserror::Error;

/// Closed set of failure kinds on the fetch path.
///
/// Every variant is terminal: nothing is retried, and each one maps to
/// exactly one diagnostic line printed by the CLI before exiting non-zero.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Credential missing or unusable; raised before any network traffic.
    #[error("{0}")]
    Config(String),

    /// The provider rejected the API key (HTTP 401).
    #[error("Access denied. Check API key.")]
    Unauthorized,

    /// The provider has no data for the queried city (HTTP 404).
    #[error("No weather data for this city.")]
    NotFound,

    /// Transport-level failure, or an unexpected HTTP status. Carries the
    /// underlying reason string verbatim.
    #[error("{0}")]
    Network(String),

    /// The response body could not be decoded against the provider schema.
    #[error("Couldn't read server response.")]
    MalformedResponse,
}
