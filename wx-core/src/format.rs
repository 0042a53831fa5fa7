//! Pure display formatters for the report.
//!
//! Everything here is stateless and total over domain-valid input: no IO, no
//! clock reads (the host UTC offset is captured by the caller and passed in).

use chrono::{DateTime, Local, Timelike, Utc};

use crate::query::Units;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Format a latitude as `{deg}°{minutes:02}'{N|S}`.
///
/// Minutes are the truncated fractional degrees times 60. Zero is treated as
/// positive, so an exact 0.0 renders as `0°00'N`.
pub fn format_latitude(lat: f64) -> String {
    format_angle(lat, 'N', 'S')
}

/// Format a longitude as `{deg}°{minutes:02}'{E|W}`. Zero renders as east.
pub fn format_longitude(lon: f64) -> String {
    format_angle(lon, 'E', 'W')
}

fn format_angle(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    let abs = value.abs();
    let degrees = abs.trunc() as u32;
    let minutes = (abs.fract() * 60.0).trunc() as u32;

    format!("{degrees}\u{00b0}{minutes:02}'{hemisphere}")
}

/// Format a wind speed reported in m/s.
///
/// Metric display converts to km/h. Imperial display labels the raw value
/// "mph" without converting it; the provider already reports imperial wind
/// in mph when queried with `units=imperial`, and when it does not, the raw
/// number passes through unchanged. This matches the observable behavior of
/// the program being reproduced.
pub fn format_speed(speed: f64, units: Units) -> String {
    match units {
        Units::Metric => format!("{:.1} km/h", speed * 3.6),
        Units::Imperial => format!("{speed:.1} mph"),
    }
}

/// Map a wind bearing (degrees east of true north) to one of the 16 compass
/// labels. Sectors are 22.5° wide and centered on each label, so anything
/// below 11.25° or at/above 348.75° is "N"; the upper boundary of a sector
/// belongs to the next label (11.25° is already NNE).
pub fn format_direction(degrees: f64) -> &'static str {
    let sector = (((degrees + 11.25) / 22.5).floor() as usize) % COMPASS.len();
    COMPASS[sector]
}

/// Shift a UTC event timestamp into "the query host's wall-clock reading of
/// the target city's event".
///
/// Contract: BOTH offsets are added — the city's UTC offset and then the
/// host's own UTC offset on top. The composition is surprising (a host west
/// of UTC shifts the city's local time further west) but it is the
/// program's observable behavior and is kept as-is.
pub fn local_wall_clock(utc_ts: i64, city_offset: i64, host_offset: i64) -> i64 {
    utc_ts + city_offset + host_offset
}

/// UTC offset of the machine running the query, in seconds, including any
/// daylight-saving shift currently in effect.
pub fn host_utc_offset() -> i64 {
    i64::from(Local::now().offset().local_minus_utc())
}

/// Render a timestamp as a 12-hour `h:mm` clock reading.
///
/// Hours 0 and 12 both display as 12; there is no AM/PM suffix.
pub fn format_clock(ts: i64) -> String {
    let dt = DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default();

    let hour = match dt.hour() % 12 {
        0 => 12,
        h => h,
    };

    format!("{hour}:{:02}", dt.minute())
}
