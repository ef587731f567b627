use super::clean_text;
use crate::model::Field;
use regex::Regex;
use std::sync::LazyLock;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("duration regex")
});

pub fn parse_duration(value: &Field) -> String {
    match value.as_str() {
        Some(iso) => format_duration(iso),
        None => clean_text(value),
    }
}

/// Converts an ISO 8601 time duration (`PT1H30M`) to a readable phrase.
///
/// Values outside the `PT[nH][nM][nS]` form are returned unchanged, since many
/// publishers already write "30 mins". Seconds only show when there are no
/// hours or minutes.
pub fn format_duration(iso: &str) -> String {
    let iso = iso.trim();
    to_phrase(iso).unwrap_or_else(|| iso.to_string())
}

// None when the value is not a `PT` duration or a component does not fit a u64.
fn to_phrase(iso: &str) -> Option<String> {
    let caps = ISO_DURATION.captures(iso)?;
    let component = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse::<u64>().ok(),
        None => Some(0),
    };

    let (hours, minutes, seconds) = (component(1)?, component(2)?, component(3)?);
    let hours = hours.checked_add(minutes / 60)?;
    let minutes = minutes % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(pluralize(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute"));
    }
    if seconds > 0 && parts.is_empty() {
        parts.push(pluralize(seconds, "second"));
    }
    Some(parts.join(" "))
}

fn pluralize(count: u64, unit: &str) -> String {
    format!("{count} {unit}{}", if count == 1 { "" } else { "s" })
}
