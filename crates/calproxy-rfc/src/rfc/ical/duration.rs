//! DURATION value formatting (RFC 5545 §3.3.6).

use chrono::TimeDelta;
use thiserror::Error;

/// Errors from [`format_duration`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    /// Magnitude of one week or more.
    #[error("duration too large (must be under 1 week)")]
    TooLarge,
    /// Magnitude of one second or less.
    #[error("duration too small (must be longer than 1 second)")]
    TooSmall,
}

/// Formats a signed span as an RFC 5545 DURATION value.
///
/// The magnitude is decomposed by integer division, strictly days → hours →
/// minutes → seconds, with no rounding and no carry past days. The day
/// component appears only when non-zero; once any time component is
/// non-zero every lower unit is emitted too, zero or not, since the grammar
/// forbids gaps after the first time component.
///
/// ## Errors
/// Fails with [`DurationError::TooLarge`] at a magnitude of 7 days or more
/// and with [`DurationError::TooSmall`] at a magnitude of 1 second or less.
pub fn format_duration(span: TimeDelta) -> Result<String, DurationError> {
    if span.abs() >= TimeDelta::days(7) {
        return Err(DurationError::TooLarge);
    }
    if span.abs() <= TimeDelta::seconds(1) {
        return Err(DurationError::TooSmall);
    }

    let negative = span < TimeDelta::zero();
    let span = span.abs();
    let days = span.num_days();
    let hours = span.num_hours() % 24;
    let minutes = span.num_minutes() % 60;
    let seconds = span.num_seconds() % 60;

    let mut out = String::from(if negative { "-P" } else { "P" });
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H{minutes}M{seconds}S"));
        } else if minutes > 0 {
            out.push_str(&format!("{minutes}M{seconds}S"));
        } else {
            out.push_str(&format!("{seconds}S"));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_week_is_too_large() {
        assert_eq!(format_duration(TimeDelta::days(7)), Err(DurationError::TooLarge));
        assert_eq!(
            format_duration(-TimeDelta::days(7)),
            Err(DurationError::TooLarge)
        );
    }

    #[test]
    fn just_under_one_week_formats() {
        let span = TimeDelta::days(6)
            + TimeDelta::hours(23)
            + TimeDelta::minutes(59)
            + TimeDelta::seconds(59);
        assert_eq!(format_duration(span).as_deref(), Ok("P6DT23H59M59S"));
    }

    #[test]
    fn one_second_and_under_is_too_small() {
        assert_eq!(
            format_duration(TimeDelta::seconds(1)),
            Err(DurationError::TooSmall)
        );
        assert_eq!(
            format_duration(-TimeDelta::seconds(1)),
            Err(DurationError::TooSmall)
        );
        assert_eq!(
            format_duration(TimeDelta::zero()),
            Err(DurationError::TooSmall)
        );
    }

    #[test]
    fn time_components_cascade_once_started() {
        assert_eq!(
            format_duration(TimeDelta::minutes(90)).as_deref(),
            Ok("PT1H30M0S")
        );
        assert_eq!(
            format_duration(TimeDelta::minutes(15) + TimeDelta::seconds(30)).as_deref(),
            Ok("PT15M30S")
        );
        assert_eq!(format_duration(TimeDelta::seconds(2)).as_deref(), Ok("PT2S"));
    }

    #[test]
    fn whole_days_omit_the_time_part() {
        assert_eq!(format_duration(TimeDelta::days(1)).as_deref(), Ok("P1D"));
    }

    #[test]
    fn lower_units_do_not_backfill_to_higher_ones() {
        // 1 day + 5 seconds: hours and minutes are zero and stay unemitted
        // because the first non-zero time component is the seconds.
        let span = TimeDelta::days(1) + TimeDelta::seconds(5);
        assert_eq!(format_duration(span).as_deref(), Ok("P1DT5S"));
    }

    #[test]
    fn negative_spans_carry_a_leading_sign() {
        assert_eq!(
            format_duration(-TimeDelta::minutes(90)).as_deref(),
            Ok("-PT1H30M0S")
        );
    }

    #[test]
    fn subsecond_precision_truncates() {
        assert_eq!(
            format_duration(TimeDelta::milliseconds(1500)).as_deref(),
            Ok("PT1S")
        );
    }
}
