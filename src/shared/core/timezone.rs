// Organization-local calendar math.
//
// Purpose
// - Every conversion from an absolute instant to an organization's calendar day,
//   week or wall-clock label goes through this module.
//
// Boundaries
// - Instants are always `DateTime<Utc>`; zones are resolved IANA names.
// - Elapsed durations are measured between absolute instants, so a shift that
//   spans a daylight-saving transition counts the hours actually worked.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves an IANA zone name, falling back to UTC for unknown names.
pub fn resolve_zone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(zone) => zone,
        Err(_) => {
            tracing::warn!(timezone = name, "unknown timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

pub fn local_date(instant: DateTime<Utc>, zone: Tz) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}

/// First instant of `date` in `zone`.
pub fn local_midnight(date: NaiveDate, zone: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(at) = zone.from_local_datetime(&midnight).earliest() {
        return at.with_timezone(&Utc);
    }
    // Midnight skipped by a DST jump: the day starts at the first valid hour.
    zone.from_local_datetime(&(midnight + Duration::hours(1)))
        .earliest()
        .map(|at| at.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Sunday that opens the local week containing `instant`.
pub fn start_of_week(instant: DateTime<Utc>, zone: Tz) -> NaiveDate {
    let date = local_date(instant, zone);
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// `[start, end)` instants of the seven local days beginning at `week_start`.
pub fn week_bounds(week_start: NaiveDate, zone: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        local_midnight(week_start, zone),
        local_midnight(week_start + Duration::days(7), zone),
    )
}

pub fn elapsed_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

/// Wall-clock label such as `8:55 AM`.
pub fn format_clock_time(instant: DateTime<Utc>, zone: Tz) -> String {
    instant.with_timezone(&zone).format("%-I:%M %p").to_string()
}
