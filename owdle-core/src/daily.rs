use std::borrow::Cow;
use std::cell::Cell;
use std::fmt;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";
const HASH_SEED: i32 = 5381;

/// Source of "now" for everything date-dependent.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant, movable by hand.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Per-use salt mixed into the daily key so that two daily picks made on the
/// same date land on unrelated indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedOffset(Cow<'static, str>);

impl SeedOffset {
    pub const fn named(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<u32> for SeedOffset {
    fn from(value: u32) -> Self {
        Self(Cow::Owned(value.to_string()))
    }
}

impl From<&'static str> for SeedOffset {
    fn from(value: &'static str) -> Self {
        Self::named(value)
    }
}

impl fmt::Display for SeedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Today's calendar date (`YYYY-MM-DD`) as observed in `time_zone`.
pub fn date_key(time_zone: &str) -> String {
    date_key_at(time_zone, Utc::now())
}

/// Calendar date of `now` on the wall clock of `time_zone` (an IANA name).
/// Unknown zones fall back to the machine's local date.
pub fn date_key_at(time_zone: &str, now: DateTime<Utc>) -> String {
    match time_zone.parse::<Tz>() {
        Ok(zone) => now.with_timezone(&zone).format(DATE_FORMAT).to_string(),
        Err(_) => {
            debug!(time_zone, "Unknown time zone, falling back to local date");
            now.with_timezone(&Local).format(DATE_FORMAT).to_string()
        }
    }
}

/// DJB2 variant: `hash = hash * 33 ^ unit` over UTF-16 code units, 32-bit
/// signed wrapping arithmetic, absolute value of the result.
pub fn djb2(text: &str) -> u64 {
    let mut hash = HASH_SEED;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(33) ^ i32::from(unit);
    }
    i64::from(hash).unsigned_abs()
}

/// Index picked for `"{date_key}-{seed}"` in a list of `len` elements.
pub fn daily_index(len: usize, date_key: &str, seed: &SeedOffset) -> usize {
    assert!(len > 0, "daily selection needs a non-empty list");
    let composite = format!("{}-{}", date_key, seed);
    (djb2(&composite) % len as u64) as usize
}

/// Deterministic pick for today in `time_zone`.
///
/// Panics on an empty list; callers guarantee the roster is populated.
pub fn select_daily<'a, T>(list: &'a [T], time_zone: &str, seed: &SeedOffset) -> &'a T {
    select_daily_at(list, time_zone, seed, Utc::now())
}

pub fn select_daily_at<'a, T>(
    list: &'a [T],
    time_zone: &str,
    seed: &SeedOffset,
    now: DateTime<Utc>,
) -> &'a T {
    &list[daily_index(list.len(), &date_key_at(time_zone, now), seed)]
}

/// Time left until the next local midnight in `time_zone`, when the daily pick rolls over.
pub fn time_until_next_midnight(time_zone: &str, now: DateTime<Utc>) -> TimeDelta {
    let remaining = match time_zone.parse::<Tz>() {
        Ok(zone) => until_midnight(&zone, now),
        Err(_) => until_midnight(&Local, now),
    };
    remaining.unwrap_or_else(TimeDelta::zero)
}

fn until_midnight<Z: TimeZone>(zone: &Z, now: DateTime<Utc>) -> Option<TimeDelta> {
    let next_day = now.with_timezone(zone).date_naive().succ_opt()?;
    let midnight = next_day.and_hms_opt(0, 0, 0)?;

    // Zones that skip midnight on a DST change start the day an hour later
    let start = zone
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            zone.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })?;

    Some(start.with_timezone(&Utc) - now)
}

/// `HH:MM:SS`, negatives clamped to zero.
pub fn format_countdown(remaining: TimeDelta) -> String {
    let total_seconds = remaining.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
