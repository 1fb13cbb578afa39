//! Datebook: derivation core for a private dating journal.
//!
//! The app logs dates (planned and past), attaches outcomes, and renders a
//! calendar, a history list, and an active-relationship pipeline. This crate
//! is the pure part: given the snapshot the persistence layer pushes on every
//! change notification, it classifies each record's temporal state
//! ([`schedule`]) and collapses the list into one current-status entry per
//! person ([`pipeline`]). Auth, storage, image handling, and rendering are
//! external collaborators.
//!
//! Everything here is a pure function of its arguments: no I/O, no hidden
//! state, no wall-clock reads. Callers hold the snapshot, pass the reference
//! instant explicitly, and recompute derived views wholesale on every
//! notification.

pub mod error;
pub mod pipeline;
pub mod schedule;
pub mod snapshot;
pub mod summary;
pub mod types;

pub use error::SnapshotError;
pub use pipeline::{
    active_people, group_by_stage, latest_per_person, person_key, person_status, PersonStatus,
    StageBuckets,
};
pub use schedule::{
    find_missed_encounter, is_future, is_unlogged_or_scheduled, startup_view, theme_for, DateTheme,
    StartupView,
};
pub use snapshot::{parse_record, parse_snapshot, promotion_update, reminder_ack_update};
pub use summary::{day_theme, insights, records_on_day, split_history, Insights};
pub use types::{DateRecord, Feeling, NextStep, Scenario, Stage};
