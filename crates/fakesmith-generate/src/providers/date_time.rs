use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use chrono_tz::{TZ_VARIANTS, Tz};
use regex::Regex;

use fakesmith_core::FakeValue;

use super::pick;
use crate::engine::Generator;
use crate::errors::GenerationError;
use crate::params::Args;
use crate::provider::{FormatterTable, Provider};
use crate::registry::ProviderRegistry;

pub const FAMILY: &str = "DateTime";

/// 0001-01-01T00:00:00Z.
const MIN_AD_TIMESTAMP: i64 = -62_135_596_800;

const CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

static RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])\s*(\d+)\s*(second|minute|hour|day|week|month|year)s?$")
        .expect("relative time pattern is valid")
});

pub fn register(registry: &mut ProviderRegistry) {
    registry.register(FAMILY, "", || DateTimeProvider);
}

/// Dates and times between configurable bounds.
///
/// Moment arguments accept unix seconds, `now`, `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS`, RFC 3339, or an offset such as `-30 years` relative
/// to the configured reference time. Zones default to the configured one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeProvider;

impl Provider for DateTimeProvider {
    fn family(&self) -> &str {
        FAMILY
    }

    fn formatters(&self) -> FormatterTable {
        FormatterTable::new()
            .with("unixTime", |generator, args| {
                let max = since_epoch_max(generator, args, 0)?;
                Ok(FakeValue::Int(generator.number_between(0, max)))
            })
            .with("dateTime", |generator, args| {
                let max = since_epoch_max(generator, args, 0)?;
                let zone = zone(generator, args, 1)?;
                random_moment(generator, 0, max, zone).map(FakeValue::Timestamp)
            })
            .with("dateTimeAD", |generator, args| {
                let max = moment(generator, args, 0, "now")?.timestamp();
                let zone = zone(generator, args, 1)?;
                if max < MIN_AD_TIMESTAMP {
                    return Err(args.invalid(0, "a moment after year 1"));
                }
                random_moment(generator, MIN_AD_TIMESTAMP, max, zone).map(FakeValue::Timestamp)
            })
            .with("iso8601", |generator, args| {
                let value = date_time(generator, args, 0)?;
                Ok(FakeValue::Text(
                    value.format("%Y-%m-%dT%H:%M:%S%z").to_string(),
                ))
            })
            .with("date", |generator, args| {
                let format = args.get_string(0).unwrap_or_else(|| "%Y-%m-%d".to_string());
                let value = date_time(generator, args, 1)?;
                render(&value, &format, args, 0).map(FakeValue::Text)
            })
            .with("time", |generator, args| {
                let format = args.get_string(0).unwrap_or_else(|| "%H:%M:%S".to_string());
                let value = date_time(generator, args, 1)?;
                render(&value, &format, args, 0).map(FakeValue::Text)
            })
            .with("dateTimeBetween", |generator, args| {
                let start = moment(generator, args, 0, "-30 years")?;
                let end = moment(generator, args, 1, "now")?;
                let zone = zone(generator, args, 2)?;
                between(generator, start, end, zone).map(FakeValue::Timestamp)
            })
            .with("dateTimeInInterval", |generator, args| {
                let base = moment(generator, args, 0, "-30 years")?;
                let interval = args.get_string(1).unwrap_or_else(|| "+5 days".to_string());
                let other = relative(&interval, base)
                    .ok_or_else(|| args.invalid(1, "a relative interval such as '+5 days'"))?;
                let zone = zone(generator, args, 2)?;
                between(generator, base.min(other), base.max(other), zone)
                    .map(FakeValue::Timestamp)
            })
            .with("dateTimeThisCentury", |generator, args| {
                recent(generator, args, "-100 years")
            })
            .with("dateTimeThisDecade", |generator, args| {
                recent(generator, args, "-10 years")
            })
            .with("dateTimeThisYear", |generator, args| {
                let now = generator.config().reference_now();
                let start = NaiveDate::from_ymd_opt(now.year(), 1, 1)
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|start| start.and_utc())
                    .unwrap_or(now);
                let end = moment(generator, args, 0, "now")?;
                let zone = zone(generator, args, 1)?;
                between(generator, start, end, zone).map(FakeValue::Timestamp)
            })
            .with("dateTimeThisMonth", |generator, args| {
                recent(generator, args, "-1 month")
            })
            .with("amPm", |generator, args| formatted(generator, args, "%P"))
            .with("dayOfMonth", |generator, args| formatted(generator, args, "%d"))
            .with("dayOfWeek", |generator, args| formatted(generator, args, "%A"))
            .with("month", |generator, args| formatted(generator, args, "%m"))
            .with("monthName", |generator, args| formatted(generator, args, "%B"))
            .with("year", |generator, args| formatted(generator, args, "%Y"))
            .with("century", |generator, _| {
                pick(generator, CENTURIES, "century").map(FakeValue::from)
            })
            .with("timezone", |generator, _| {
                let zone = generator
                    .random_element(&TZ_VARIANTS)
                    .ok_or_else(|| GenerationError::InvalidArgument("timezone: no zones".into()))?;
                Ok(FakeValue::from(zone.name()))
            })
    }
}

/// Resolves a moment argument, falling back to `default` when absent.
fn moment(
    generator: &Generator,
    args: &Args<'_>,
    idx: usize,
    default: &str,
) -> Result<DateTime<Utc>, GenerationError> {
    let now = generator.config().reference_now();
    let resolved = match args.get(idx) {
        None => parse_moment(default, now),
        Some(FakeValue::Int(seconds)) => DateTime::from_timestamp(*seconds, 0),
        Some(FakeValue::Timestamp(value)) => Some(value.to_utc()),
        Some(FakeValue::Date(date)) => date.and_hms_opt(0, 0, 0).map(|value| value.and_utc()),
        Some(FakeValue::Text(text)) => parse_moment(text, now),
        Some(_) => None,
    };
    resolved.ok_or_else(|| args.invalid(idx, "a date, unix timestamp, or relative time"))
}

pub(crate) fn parse_moment(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("now") {
        return Some(now);
    }
    if let Ok(seconds) = text.parse::<i64>() {
        return DateTime::from_timestamp(seconds, 0);
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.to_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
            return Some(value.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|value| value.and_utc());
    }
    relative(text, now)
}

/// Applies an offset such as `+5 days` or `-1 month` to `base`.
pub(crate) fn relative(text: &str, base: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = RELATIVE.captures(text.trim())?;
    let negative = caps.get(1)?.as_str() == "-";
    let amount: u32 = caps.get(2)?.as_str().parse().ok()?;
    let unit = caps.get(3)?.as_str();

    let months = match unit {
        "month" => Some(amount),
        "year" => amount.checked_mul(12),
        _ => None,
    };
    if let Some(months) = months {
        let months = Months::new(months);
        return if negative {
            base.checked_sub_months(months)
        } else {
            base.checked_add_months(months)
        };
    }

    let amount = i64::from(amount);
    let delta = match unit {
        "second" => TimeDelta::try_seconds(amount),
        "minute" => TimeDelta::try_minutes(amount),
        "hour" => TimeDelta::try_hours(amount),
        "day" => TimeDelta::try_days(amount),
        "week" => TimeDelta::try_weeks(amount),
        _ => None,
    }?;
    if negative {
        base.checked_sub_signed(delta)
    } else {
        base.checked_add_signed(delta)
    }
}

fn zone(generator: &Generator, args: &Args<'_>, idx: usize) -> Result<Tz, GenerationError> {
    match args.get_str(idx) {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| args.invalid(idx, "an IANA time zone name")),
        None => generator.config().timezone(),
    }
}

fn since_epoch_max(
    generator: &Generator,
    args: &Args<'_>,
    idx: usize,
) -> Result<i64, GenerationError> {
    let max = moment(generator, args, idx, "now")?.timestamp();
    if max < 0 {
        return Err(args.invalid(idx, "a moment after 1970-01-01"));
    }
    Ok(max)
}

fn random_moment(
    generator: &mut Generator,
    min: i64,
    max: i64,
    zone: Tz,
) -> Result<DateTime<FixedOffset>, GenerationError> {
    let seconds = generator.number_between(min, max);
    DateTime::from_timestamp(seconds, 0)
        .map(|value| value.with_timezone(&zone).fixed_offset())
        .ok_or_else(|| {
            GenerationError::InvalidArgument(format!("timestamp {seconds} is out of range"))
        })
}

fn between(
    generator: &mut Generator,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    zone: Tz,
) -> Result<DateTime<FixedOffset>, GenerationError> {
    if start > end {
        return Err(GenerationError::InvalidArgument(format!(
            "start date {start} must be anterior to end date {end}"
        )));
    }
    random_moment(generator, start.timestamp(), end.timestamp(), zone)
}

/// Moment between 1970 and the `max` argument, in the default zone.
fn date_time(
    generator: &mut Generator,
    args: &Args<'_>,
    max_idx: usize,
) -> Result<DateTime<FixedOffset>, GenerationError> {
    let max = since_epoch_max(generator, args, max_idx)?;
    let zone = generator.config().timezone()?;
    random_moment(generator, 0, max, zone)
}

fn recent(
    generator: &mut Generator,
    args: &Args<'_>,
    since: &str,
) -> Result<FakeValue, GenerationError> {
    let now = generator.config().reference_now();
    let start = relative(since, now).unwrap_or(now);
    let end = moment(generator, args, 0, "now")?;
    let zone = zone(generator, args, 1)?;
    between(generator, start, end, zone).map(FakeValue::Timestamp)
}

fn formatted(
    generator: &mut Generator,
    args: &Args<'_>,
    format: &str,
) -> Result<FakeValue, GenerationError> {
    let value = date_time(generator, args, 0)?;
    Ok(FakeValue::Text(value.format(format).to_string()))
}

/// Formats with a caller-supplied strftime pattern, rejecting bad patterns
/// instead of panicking.
fn render(
    value: &DateTime<FixedOffset>,
    format: &str,
    args: &Args<'_>,
    idx: usize,
) -> Result<String, GenerationError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(args.invalid(idx, "a valid strftime format"));
    }
    let mut output = String::new();
    write!(output, "{}", value.format_with_items(items.iter()))
        .map_err(|_| args.invalid(idx, "a strftime format applicable to a date"))?;
    Ok(output)
}
