//! Core library for the `wx` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - Query construction and the HTTP transport adapter
//! - Response decoding into a weather record
//! - The pure formatting pipeline and report renderer
//!
//! It is used by `wx-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod query;
pub mod report;

pub use client::WeatherClient;
pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherRecord;
pub use query::{CityQuery, Units};

/// Fetch the weather for a query and render the report lines.
///
/// Thin composition of the pipeline: credential check, URL build, one GET,
/// decode, format. Errors are the closed [`WeatherError`] set; the caller
/// decides how to surface them.
pub async fn run_query(
    client: &WeatherClient,
    config: &Config,
    query: &CityQuery,
) -> Result<Vec<String>, WeatherError> {
    let api_key = config.api_key()?;
    let record = client.fetch(query, api_key).await?;

    Ok(report::render(&record, query.units(), format::host_utc_offset()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_surface_is_reexported() {
        // Compile-time check that the convenience re-exports stay in place.
        let _units: Units = Units::Metric;
        let _cfg = Config::default();
    }
}
