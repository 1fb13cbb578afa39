//! History and calendar views derived from the raw snapshot.
//!
//! Unlike the pipeline, these views keep every record, including unnamed
//! ones, so the history list and the calendar heat-map always reflect what
//! was actually logged.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::schedule::{self, DateTheme};
use crate::types::{DateRecord, Feeling};

/// Journal-wide counting highlights shown on the insights card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Insights {
    /// Person with the most Good/Excellent logged dates, by trimmed name.
    pub top_connection: Option<String>,
    /// Most frequently picked highlight tag.
    pub top_tag: Option<String>,
}

/// Partition the snapshot into `(upcoming, past)` by the future predicate.
/// Records without a date count as past.
pub fn split_history<'a>(
    records: &'a [DateRecord],
    now: NaiveDateTime,
) -> (Vec<&'a DateRecord>, Vec<&'a DateRecord>) {
    records
        .iter()
        .partition(|r| schedule::is_future(r.date, r.time, now))
}

/// Records whose calendar date equals `day`, compared on raw calendar
/// components, local semantics with no timezone conversion.
pub fn records_on_day<'a>(records: &'a [DateRecord], day: NaiveDate) -> Vec<&'a DateRecord> {
    records.iter().filter(|r| r.date == Some(day)).collect()
}

/// Theme for one calendar cell: the first record on that day decides the
/// color. `None` when the day has no records.
pub fn day_theme(records: &[DateRecord], day: NaiveDate, now: NaiveDateTime) -> Option<DateTheme> {
    records
        .iter()
        .find(|r| r.date == Some(day))
        .map(|r| schedule::theme_for(r, now))
}

/// Compute counting insights over the whole journal.
///
/// Top connection counts only Good/Excellent logged dates, keyed by trimmed
/// (not case-folded) name as the journal displays it. Top tag counts every
/// tag on every record. Ties resolve to the highest count and then the
/// lexicographically smallest value, so results are input-order independent.
pub fn insights(records: &[DateRecord]) -> Insights {
    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    let mut tag_counts: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if matches!(record.feeling, Some(Feeling::Good) | Some(Feeling::Excellent)) {
            let name = record.name.trim();
            if !name.is_empty() {
                *name_counts.entry(name).or_insert(0) += 1;
            }
        }
        for tag in &record.tags {
            *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    Insights {
        top_connection: top_entry(name_counts),
        top_tag: top_entry(tag_counts),
    }
}

fn top_entry(counts: HashMap<&str, usize>) -> Option<String> {
    counts
        .into_iter()
        .max_by(|(a, ac), (b, bc)| ac.cmp(bc).then_with(|| b.cmp(a)))
        .map(|(value, _)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Scenario, Stage};

    fn record(name: &str, date: &str, feeling: Option<Feeling>) -> DateRecord {
        DateRecord {
            id: None,
            name: name.to_string(),
            title: None,
            link: None,
            photo: None,
            date: Some(date.parse().unwrap()),
            time: None,
            stage: Stage::FirstDate,
            scenario: Scenario::Dinner,
            feeling,
            tags: Vec::new(),
            diary_feel: None,
            diary_attraction: None,
            next_step: None,
            reminder_acknowledged: false,
        }
    }

    fn noon(date: &str) -> NaiveDateTime {
        format!("{}T12:00:00", date).parse().unwrap()
    }

    #[test]
    fn history_splits_on_the_future_predicate() {
        let now = noon("2024-03-10");
        let records = vec![
            record("Sam", "2024-03-01", Some(Feeling::Good)),
            record("Alex", "2024-03-10", None), // today, no time: still upcoming
            record("Kim", "2024-04-01", None),
        ];

        let (upcoming, past) = split_history(&records, now);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].name, "Sam");
    }

    #[test]
    fn records_on_day_matches_calendar_components() {
        let records = vec![
            record("Sam", "2024-03-01", None),
            record("Alex", "2024-03-01", None),
            record("Kim", "2024-03-02", None),
        ];

        let day = records_on_day(&records, "2024-03-01".parse().unwrap());
        assert_eq!(day.len(), 2);
        assert!(records_on_day(&records, "2024-03-03".parse().unwrap()).is_empty());
    }

    #[test]
    fn day_theme_uses_first_record_on_the_day() {
        let now = noon("2024-03-10");
        let records = vec![
            record("Sam", "2024-03-01", Some(Feeling::Excellent)),
            record("Alex", "2024-03-01", None),
        ];

        assert_eq!(
            day_theme(&records, "2024-03-01".parse().unwrap(), now),
            Some(DateTheme::Outcome(Feeling::Excellent))
        );
        assert_eq!(day_theme(&records, "2024-03-05".parse().unwrap(), now), None);
    }

    #[test]
    fn empty_journal_has_no_insights() {
        assert_eq!(insights(&[]), Insights::default());
    }

    #[test]
    fn top_connection_counts_good_dates_only() {
        let records = vec![
            record("Sam", "2024-01-01", Some(Feeling::Good)),
            record("Sam ", "2024-01-08", Some(Feeling::Excellent)),
            record("Alex", "2024-01-02", Some(Feeling::Awful)),
            record("Alex", "2024-01-09", Some(Feeling::Bad)),
            record("Alex", "2024-01-16", Some(Feeling::Okay)),
        ];

        let result = insights(&records);
        assert_eq!(result.top_connection.as_deref(), Some("Sam"));
    }

    #[test]
    fn top_tag_counts_all_records() {
        let mut a = record("Sam", "2024-01-01", Some(Feeling::Good));
        a.tags = vec!["Funny".into(), "Genuine".into()];
        let mut b = record("Alex", "2024-01-02", None);
        b.tags = vec!["Funny".into()];

        let result = insights(&[a, b]);
        assert_eq!(result.top_tag.as_deref(), Some("Funny"));
    }

    #[test]
    fn insight_ties_resolve_lexicographically() {
        let records = vec![
            record("Zoe", "2024-01-01", Some(Feeling::Good)),
            record("Amy", "2024-01-02", Some(Feeling::Good)),
        ];
        assert_eq!(insights(&records).top_connection.as_deref(), Some("Amy"));
    }
}
