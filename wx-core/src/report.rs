use crate::{
    format::{
        format_clock, format_direction, format_latitude, format_longitude, format_speed,
        local_wall_clock,
    },
    model::WeatherRecord,
    query::Units,
};

/// Column width the coordinate line is centered in.
const REPORT_WIDTH: usize = 60;

/// Assemble the fixed-layout report for one weather record.
///
/// `host_offset` is the querying machine's UTC offset in seconds (see
/// [`crate::format::host_utc_offset`]); sunrise and sunset are shifted by
/// both the city's offset and the host's before display. Pure function: the
/// caller prints the returned lines in order.
pub fn render(record: &WeatherRecord, units: Units, host_offset: i64) -> Vec<String> {
    let sym = units.temp_symbol();

    let header = format!(
        "{}, {}  {:.1}\u{00b0}{sym}  {}",
        record.city,
        record.country,
        record.temp,
        capitalize_words(&record.description),
    );

    let coords = center(
        &format!(
            "{}  {}  humidity {}%",
            format_latitude(record.lat),
            format_longitude(record.lon),
            record.humidity,
        ),
        REPORT_WIDTH,
    );

    let feels = format!("feels like {:.1}\u{00b0}{sym}", record.feels_like);
    let clouds = format!("cloud cover {}%", record.clouds);

    let mut wind = format!(
        "wind {} {}",
        format_speed(record.wind_speed, units),
        format_direction(record.wind_deg),
    );
    if let Some(gust) = record.wind_gust {
        wind.push_str(&format!(", gusts {}", format_speed(gust, units)));
    }

    let range = format!(
        "low {:.1}\u{00b0}{sym}  high {:.1}\u{00b0}{sym}  pressure {} hPa",
        record.temp_min, record.temp_max, record.pressure,
    );

    let sun = format!(
        "sunrise {}  sunset {}  visibility {} km",
        format_clock(local_wall_clock(record.sunrise, record.utc_offset, host_offset)),
        format_clock(local_wall_clock(record.sunset, record.utc_offset, host_offset)),
        record.visibility / 1000,
    );

    vec![header, coords, feels, clouds, wind, range, sun]
}

/// Uppercase the first letter of each word, leaving the rest untouched.
fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Left-pad `text` so it sits in the middle of a `width`-column line.
/// No trailing padding is added.
fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;

    fn sample_record() -> WeatherRecord {
        WeatherRecord::decode(model::sample_body().as_bytes()).expect("sample must decode")
    }

    #[test]
    fn golden_metric_report() {
        // Host offset pinned to zero so the expected text is stable.
        let lines = render(&sample_record(), Units::Metric, 0);

        let expected = vec![
            "New York, US  21.4\u{00b0}C  Broken Clouds".to_string(),
            format!("{}40\u{00b0}42'N  74\u{00b0}00'W  humidity 64%", " ".repeat(15)),
            "feels like 21.1\u{00b0}C".to_string(),
            "cloud cover 75%".to_string(),
            "wind 18.0 km/h E, gusts 25.9 km/h".to_string(),
            "low 19.2\u{00b0}C  high 23.0\u{00b0}C  pressure 1015 hPa".to_string(),
            "sunrise 5:13  sunset 4:13  visibility 10 km".to_string(),
        ];

        assert_eq!(lines, expected);
    }

    #[test]
    fn imperial_report_labels_and_raw_speeds() {
        let lines = render(&sample_record(), Units::Imperial, 0);

        assert_eq!(lines[0], "New York, US  21.4\u{00b0}F  Broken Clouds");
        assert_eq!(lines[4], "wind 5.0 mph E, gusts 7.2 mph");
        assert_eq!(lines[5], "low 19.2\u{00b0}F  high 23.0\u{00b0}F  pressure 1015 hPa");
    }

    #[test]
    fn wind_line_omits_absent_gust() {
        let mut record = sample_record();
        record.wind_gust = None;

        let lines = render(&record, Units::Metric, 0);
        assert_eq!(lines[4], "wind 18.0 km/h E");
    }

    #[test]
    fn host_offset_shifts_sun_times() {
        // One hour east of UTC pushes both clock readings forward an hour.
        let lines = render(&sample_record(), Units::Metric, 3_600);
        assert_eq!(lines[6], "sunrise 6:13  sunset 5:13  visibility 10 km");
    }

    #[test]
    fn visibility_is_truncated_to_whole_kilometers() {
        let mut record = sample_record();
        record.visibility = 9_900;

        let lines = render(&record, Units::Metric, 0);
        assert!(lines[6].ends_with("visibility 9 km"), "line: {}", lines[6]);
    }

    #[test]
    fn description_words_are_capitalized() {
        assert_eq!(capitalize_words("light intensity drizzle"), "Light Intensity Drizzle");
        assert_eq!(capitalize_words("clear sky"), "Clear Sky");
    }

    #[test]
    fn centering_pads_on_the_left_only() {
        let line = center("abcd", 10);
        assert_eq!(line, "   abcd");
    }
}
