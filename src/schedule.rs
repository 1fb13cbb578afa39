//! Temporal classification of date records.
//!
//! A record is "scheduled/unlogged" when its local date-time is still ahead
//! of the reference instant *or* when no feeling has been recorded; a past
//! date nobody logged stays on the scheduled theme. The same predicate drives
//! calendar colors, list badges, and which form sections are shown, so it
//! lives here once.
//!
//! All functions take the reference instant as an argument; nothing in this
//! module reads the wall clock.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::{DateRecord, Feeling};

/// Visual/business classification of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTheme {
    /// Planned, or past but never logged.
    Scheduled,
    /// Logged with an outcome.
    Outcome(Feeling),
}

/// What the app should open with, derived from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartupView<'a> {
    /// A past scheduled date was never logged; prompt about this record once.
    Reminder(&'a DateRecord),
    /// Empty journal.
    Welcome,
    /// Regular calendar/pipeline view.
    Journal,
}

/// True iff the composed local date-time is strictly later than `now`.
///
/// A missing time means the record counts as "today until the day ends", so
/// the effective time is 23:59:59. A missing date is never in the future.
pub fn is_future(date: Option<NaiveDate>, time: Option<NaiveTime>, now: NaiveDateTime) -> bool {
    let Some(date) = date else {
        return false;
    };
    let time = time.unwrap_or_else(end_of_day);
    NaiveDateTime::new(date, time) > now
}

/// Combined predicate governing the scheduled theme and the suppression of
/// outcome form sections: future **or** not yet logged.
pub fn is_unlogged_or_scheduled(record: &DateRecord, now: NaiveDateTime) -> bool {
    is_future(record.date, record.time, now) || record.feeling.is_none()
}

/// Theme for rendering one record in the calendar, history list, or detail
/// view. Past + logged shows the outcome feeling; everything else is
/// scheduled.
pub fn theme_for(record: &DateRecord, now: NaiveDateTime) -> DateTheme {
    match record.feeling {
        Some(feeling) if !is_future(record.date, record.time, now) => DateTheme::Outcome(feeling),
        _ => DateTheme::Scheduled,
    }
}

/// Find the most recent past encounter that was scheduled but never logged
/// and whose reminder has not been acknowledged yet.
///
/// Candidates must have both a date and a time, a composed date-time strictly
/// before `now`, no feeling, no next-step decision, and
/// `reminder_acknowledged == false`. Among candidates the latest calendar
/// date wins; ties resolve by time and then by record id, so the result does
/// not depend on snapshot ordering.
///
/// Pure and idempotent; the caller persists `reminder_acknowledged = true`
/// after showing the prompt.
pub fn find_missed_encounter<'a>(
    records: &'a [DateRecord],
    now: NaiveDateTime,
) -> Option<&'a DateRecord> {
    records
        .iter()
        .filter(|r| r.feeling.is_none() && r.next_step.is_none() && !r.reminder_acknowledged)
        .filter_map(|r| match (r.date, r.time) {
            (Some(date), Some(time)) => Some((date, time, r)),
            _ => None,
        })
        .filter(|(date, time, _)| NaiveDateTime::new(*date, *time) < now)
        .max_by_key(|(date, time, r)| (*date, *time, r.id.clone()))
        .map(|(_, _, r)| r)
}

/// Decide the startup screen from a fresh snapshot: a pending missed-date
/// reminder takes priority, an empty journal gets the welcome screen,
/// anything else opens the journal.
pub fn startup_view<'a>(records: &'a [DateRecord], now: NaiveDateTime) -> StartupView<'a> {
    if let Some(missed) = find_missed_encounter(records, now) {
        StartupView::Reminder(missed)
    } else if records.is_empty() {
        StartupView::Welcome
    } else {
        StartupView::Journal
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}
