//! Active-relationship pipeline aggregation.
//!
//! Collapses the full snapshot into one representative record per person
//! (the record with the latest `(date, time)`), then filters out people whose
//! latest record ended the relationship and buckets the rest by stage.
//! Latest-wins everywhere: an earlier `Continue` cannot revive a person whose
//! newest record says `End`, and a newer record that is not `End` brings them
//! back. No history is accumulated.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::schedule;
use crate::types::{DateRecord, Feeling, NextStep, Stage};

/// Derived pipeline status of a single person, recomputed from their
/// representative record alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonStatus {
    /// Latest record is upcoming or was never logged.
    Scheduled,
    /// Latest record has an outcome and the relationship continues.
    Logged { stage: Stage, feeling: Feeling },
    /// Latest record decided `End`; the person leaves pipeline views.
    Ended,
}

/// Representative records of active people, bucketed by stage.
///
/// All five stage buckets always exist; an empty pipeline still answers
/// `get(stage)` with an empty slice, which keeps "no people at this stage"
/// distinguishable from "no data". Bucket contents are ordered by person
/// key, so equal inputs always compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct StageBuckets<'a> {
    buckets: [Vec<&'a DateRecord>; 5],
}

impl<'a> StageBuckets<'a> {
    fn new() -> Self {
        StageBuckets {
            buckets: Default::default(),
        }
    }

    pub fn get(&self, stage: Stage) -> &[&'a DateRecord] {
        &self.buckets[stage.index()]
    }

    /// Buckets in fixed display order (First date → Relationship).
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = (Stage, &'s [&'a DateRecord])> + 's {
        Stage::ALL.into_iter().map(move |stage| (stage, self.get(stage)))
    }

    /// Number of active people across all stages.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Person grouping key: trimmed, case-folded name. `None` for blank names,
/// which are excluded from pipeline grouping (but stay in raw history).
pub fn person_key(name: &str) -> Option<String> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Sort key for picking the representative record. A missing time sorts at
/// midnight here, earliest within its day, which is intentionally different
/// from the 23:59 default used for future detection. A missing date sorts
/// before every real date, so an undated record never displaces a dated one.
fn recency_key(record: &DateRecord) -> (NaiveDate, NaiveTime) {
    (
        record.date.unwrap_or(NaiveDate::MIN),
        record.time.unwrap_or(NaiveTime::MIN),
    )
}

/// Group records by person key and keep the most recent record per person.
///
/// Exact `(date, time)` ties go to the record seen last in input order. Does
/// not mutate its input; returns borrows into the snapshot, keyed and
/// iterated in person-key order so derived views are deterministic.
pub fn latest_per_person(records: &[DateRecord]) -> BTreeMap<String, &DateRecord> {
    let mut latest: BTreeMap<String, &DateRecord> = BTreeMap::new();

    for record in records {
        let Some(key) = person_key(&record.name) else {
            log::debug!("Record {:?} has no name; excluded from pipeline grouping", record.id);
            continue;
        };

        match latest.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                // >= so the last-seen record wins exact ties.
                if recency_key(record) >= recency_key(slot.get()) {
                    slot.insert(record);
                }
            }
        }
    }

    latest
}

/// People whose latest record did not end the relationship, in person-key
/// order.
pub fn active_people(records: &[DateRecord]) -> Vec<&DateRecord> {
    latest_per_person(records)
        .into_values()
        .filter(|rep| rep.next_step != Some(NextStep::End))
        .collect()
}

/// Bucket active people's representative records into the five fixed stages.
/// Unrecognized stage labels were already coerced to `4th+` at decode time.
pub fn group_by_stage(records: &[DateRecord]) -> StageBuckets<'_> {
    let mut grouped = StageBuckets::new();
    for rep in active_people(records) {
        grouped.buckets[rep.stage.index()].push(rep);
    }
    grouped
}

/// Derive a person's pipeline status from their representative record.
/// `Ended` wins over everything; otherwise an unlogged or upcoming record
/// means `Scheduled`; a logged outcome means `Logged`.
pub fn person_status(representative: &DateRecord, now: NaiveDateTime) -> PersonStatus {
    if representative.next_step == Some(NextStep::End) {
        return PersonStatus::Ended;
    }
    match representative.feeling {
        Some(feeling) if !schedule::is_unlogged_or_scheduled(representative, now) => {
            PersonStatus::Logged {
                stage: representative.stage,
                feeling,
            }
        }
        _ => PersonStatus::Scheduled,
    }
}
