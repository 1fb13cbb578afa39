//! Core record and category types shared by the classifier and aggregator.
//!
//! Category values mirror the journal's document store exactly: feelings are
//! stored UPPERCASE (`"GOOD"`), stages and next steps as display labels
//! (`"Second date"`, `"End"`), scenarios as lowercase ids (`"coffee"`).
//! Wire decoding lives in [`crate::snapshot`]; this module owns the label
//! mappings and their fallbacks.

use chrono::{NaiveDate, NaiveTime};

/// One logged or planned encounter.
///
/// `date` and `time` carry local calendar semantics: they are compared and
/// grouped as-is, never normalized to UTC. A record with no `feeling` has not
/// been logged yet, which is different from any of the five feelings.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRecord {
    /// Store-assigned document id. Absent for drafts not yet persisted.
    pub id: Option<String>,
    /// Display name; `trim().to_lowercase()` of this is the person key.
    pub name: String,
    /// Nickname-style title, e.g. "The Architect".
    pub title: Option<String>,
    /// Link to the person's profile elsewhere.
    pub link: Option<String>,
    /// Inline photo reference (opaque to the core).
    pub photo: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub stage: Stage,
    pub scenario: Scenario,
    /// Outcome of the encounter. `None` means "not yet logged".
    pub feeling: Option<Feeling>,
    /// Highlight labels picked when logging.
    pub tags: Vec<String>,
    pub diary_feel: Option<String>,
    pub diary_attraction: Option<String>,
    /// Decision after the date. `None` means undecided, distinct from Unsure.
    pub next_step: Option<NextStep>,
    /// Set once the missed-date reminder has been shown; never prompt again.
    pub reminder_acknowledged: bool,
}

/// Relationship-progress bucket, in fixed pipeline display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    FirstDate,
    SecondDate,
    ThirdDate,
    FourthPlus,
    Relationship,
}

impl Stage {
    /// All stages in pipeline display order.
    pub const ALL: [Stage; 5] = [
        Stage::FirstDate,
        Stage::SecondDate,
        Stage::ThirdDate,
        Stage::FourthPlus,
        Stage::Relationship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::FirstDate => "First date",
            Stage::SecondDate => "Second date",
            Stage::ThirdDate => "Third date",
            Stage::FourthPlus => "4th+",
            Stage::Relationship => "Relationship",
        }
    }

    /// Map a stored stage label to its bucket. Anything unrecognized lands in
    /// the `4th+` catch-all rather than failing.
    pub fn from_label(value: &str) -> Stage {
        match value {
            "First date" => Stage::FirstDate,
            "Second date" => Stage::SecondDate,
            "Third date" => Stage::ThirdDate,
            "Relationship" => Stage::Relationship,
            _ => Stage::FourthPlus,
        }
    }

    /// Position within [`Stage::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Outcome feeling recorded when a date is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feeling {
    Awful,
    Bad,
    Okay,
    Good,
    Excellent,
}

impl Feeling {
    pub fn label(&self) -> &'static str {
        match self {
            Feeling::Awful => "Awful",
            Feeling::Bad => "Bad",
            Feeling::Okay => "Okay",
            Feeling::Good => "Good",
            Feeling::Excellent => "Excellent",
        }
    }

    /// Stored wire value (UPPERCASE, as the store writes it).
    pub fn as_wire(&self) -> &'static str {
        match self {
            Feeling::Awful => "AWFUL",
            Feeling::Bad => "BAD",
            Feeling::Okay => "OKAY",
            Feeling::Good => "GOOD",
            Feeling::Excellent => "EXCELLENT",
        }
    }

    /// Unrecognized stored values render as Okay, matching the journal UI.
    pub fn from_wire(value: &str) -> Feeling {
        match value {
            "AWFUL" => Feeling::Awful,
            "BAD" => Feeling::Bad,
            "GOOD" => Feeling::Good,
            "EXCELLENT" => Feeling::Excellent,
            _ => Feeling::Okay,
        }
    }
}

/// Where the date took place. Opaque to aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Coffee,
    Dinner,
    Streaming,
    Activity,
}

impl Scenario {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Scenario::Coffee => "coffee",
            Scenario::Dinner => "dinner",
            Scenario::Streaming => "netflix",
            Scenario::Activity => "activity",
        }
    }

    pub fn from_wire(value: &str) -> Scenario {
        match value {
            "dinner" => Scenario::Dinner,
            "netflix" => Scenario::Streaming,
            "activity" => Scenario::Activity,
            _ => Scenario::Coffee,
        }
    }
}

/// Decision recorded after a logged date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NextStep {
    Continue,
    End,
    Unsure,
}

impl NextStep {
    pub fn as_wire(&self) -> &'static str {
        match self {
            NextStep::Continue => "Continue",
            NextStep::End => "End",
            NextStep::Unsure => "Unsure",
        }
    }

    pub fn from_wire(value: &str) -> NextStep {
        match value {
            "Continue" => NextStep::Continue,
            "End" => NextStep::End,
            _ => NextStep::Unsure,
        }
    }
}
