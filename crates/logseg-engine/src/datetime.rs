use chrono::{DateTime, Utc};

/// Format an epoch timestamp field value as `YYYY-MM-DD HH:mm:ss` (UTC).
///
/// Ten-digit values are seconds, longer values milliseconds. A nonzero
/// millisecond part of a millisecond-precision value is appended as `.mmm`.
/// Anything unparseable returns `None` so the caller can fall back to the
/// raw text.
pub fn format_timestamp(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let value: i64 = trimmed.parse().ok()?;
    let (millis, has_millis_precision) = if trimmed.len() == 10 {
        (value.checked_mul(1000)?, false)
    } else {
        (value, true)
    };

    let datetime = DateTime::<Utc>::from_timestamp_millis(millis)?;
    if has_millis_precision && millis % 1000 != 0 {
        Some(datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
    } else {
        Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Format a nanosecond-precision timestamp (`2024-04-09T13:02:11.502064896Z`
/// or an epoch number) preserving the sub-millisecond digits of the source.
///
/// The base time renders to millisecond precision; the digits beyond
/// millisecond are carried over from the text verbatim, trimmed back to
/// microseconds when the nanosecond remainder is all zeros.
pub fn format_timestamp_nanos(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return format_timestamp(trimmed);
    }

    let parsed = DateTime::parse_from_rfc3339(trimmed).ok()?;
    let base = parsed
        .with_timezone(&Utc)
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string();

    let tail = sub_millisecond_digits(trimmed);
    if tail.is_empty() {
        return Some(base);
    }

    let tail_value: u128 = tail.parse().unwrap_or(0);
    if tail_value % 1000 != 0 {
        Some(format!("{base}{tail}"))
    } else {
        Some(format!("{base}{}", &tail[..tail.len().min(3)]))
    }
}

/// Fractional-second digits of an RFC 3339 string beyond the millisecond
/// part, e.g. `"064896"` for `...11.502064896Z`.
fn sub_millisecond_digits(raw: &str) -> &str {
    let Some(dot) = raw.find('.') else {
        return "";
    };
    let fraction = &raw[dot + 1..];
    let digits_len = fraction
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(fraction.len());
    let digits = &fraction[..digits_len];
    if digits.len() > 3 { &digits[3..] } else { "" }
}
