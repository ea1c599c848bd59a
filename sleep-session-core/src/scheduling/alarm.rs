//! Alarm-time normalization.
//!
//! The user picks a time of day only. The concrete instant is the next
//! occurrence of that wall time strictly after "now": today if it is still
//! ahead, otherwise tomorrow. All arithmetic happens on zone-aware instants
//! so the delay stays exact across daylight-saving shifts.

use chrono::{DateTime, Days, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};

/// The next instant strictly after `now` at which the local wall clock
/// reads `alarm`.
///
/// A wall time repeated by a backward shift resolves to whichever of its
/// two instants comes first after `now`. A wall time skipped by a forward
/// shift is read with the offset in force before the shift, which lands
/// the same distance past the gap (02:30 in a one-hour gap becomes 03:30).
pub fn normalize_alarm<Tz: TimeZone>(now: &DateTime<Tz>, alarm: NaiveTime) -> DateTime<Tz> {
    let today = now.date_naive();
    if let Some(fire) = next_after(now, today.and_time(alarm)) {
        return fire;
    }
    match today.checked_add_days(Days::new(1)) {
        Some(tomorrow) => resolve_local(&now.timezone(), tomorrow.and_time(alarm)),
        None => now.clone() + TimeDelta::days(1),
    }
}

/// Seconds from `now` until the normalized alarm, rounded to the nearest
/// second.
pub fn alarm_delay_secs<Tz: TimeZone>(now: &DateTime<Tz>, alarm: NaiveTime) -> u64 {
    let millis = (normalize_alarm(now, alarm) - now.clone()).num_milliseconds();
    ((millis + 500) / 1000).max(0) as u64
}

fn next_after<Tz: TimeZone>(now: &DateTime<Tz>, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    match now.timezone().from_local_datetime(&local) {
        LocalResult::Single(fire) => (fire > *now).then_some(fire),
        LocalResult::Ambiguous(first, second) => {
            if first > *now {
                Some(first)
            } else {
                (second > *now).then_some(second)
            }
        }
        LocalResult::None => {
            let fire = across_gap(&now.timezone(), local);
            (fire > *now).then_some(fire)
        }
    }
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(fire) | LocalResult::Ambiguous(fire, _) => fire,
        LocalResult::None => across_gap(tz, local),
    }
}

/// Reads a skipped wall time with the offset from a day earlier.
fn across_gap<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    let before = tz.offset_from_utc_datetime(&(local - TimeDelta::days(1))).fix();
    let utc = local - TimeDelta::seconds(i64::from(before.local_minus_utc()));
    tz.from_utc_datetime(&utc)
}
