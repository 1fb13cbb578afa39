//! End-to-end flow over a realistic store snapshot: decode, pick the startup
//! view, roll up the pipeline, and build the write-back for the reminder.

use chrono::NaiveDateTime;

use datebook::{
    find_missed_encounter, group_by_stage, parse_snapshot, person_status, reminder_ack_update,
    split_history, startup_view, Feeling, PersonStatus, Stage, StartupView,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn now() -> NaiveDateTime {
    "2024-03-10T12:00:00".parse().unwrap()
}

const SNAPSHOT: &str = r#"[
    {"id": "d1", "name": "Sam", "date": "2024-01-12", "time": "19:00",
     "dateNumber": "First date", "scenario": "coffee", "feeling": "GOOD",
     "tags": ["Good conversation"], "nextStep": "Continue", "reminderShown": true},
    {"id": "d2", "name": "sam ", "date": "2024-02-02", "time": "20:00",
     "dateNumber": "Second date", "scenario": "dinner", "feeling": "EXCELLENT",
     "tags": ["Great chemistry", "Funny"], "nextStep": "Continue", "reminderShown": true},
    {"id": "d3", "name": "Alex", "date": "2024-02-20", "time": "18:30",
     "dateNumber": "First date", "scenario": "activity", "feeling": "BAD",
     "nextStep": "End", "reminderShown": true},
    {"id": "d4", "name": "Kim", "date": "2024-03-08", "time": "19:30",
     "dateNumber": "First date", "scenario": "coffee", "reminderShown": false},
    {"id": "d5", "name": "Kim", "date": "2024-04-02", "time": "19:00",
     "dateNumber": "Second date", "scenario": "dinner"},
    {"id": "d6", "name": "", "date": "2024-01-20",
     "dateNumber": "First date", "scenario": "netflix", "feeling": "OKAY"}
]"#;

#[test]
fn snapshot_drives_all_derived_views() {
    init_logging();
    let records = parse_snapshot(SNAPSHOT).unwrap();
    assert_eq!(records.len(), 6);

    // A missed past date (Kim on 2024-03-08) greets the user first.
    let missed = find_missed_encounter(&records, now()).unwrap();
    assert_eq!(missed.id.as_deref(), Some("d4"));
    assert_eq!(startup_view(&records, now()), StartupView::Reminder(missed));

    // Acknowledging writes exactly one field back.
    let ack = reminder_ack_update();
    assert_eq!(ack.len(), 1);

    // Pipeline: Alex ended; Sam's latest is the Feb record; Kim's latest is
    // the upcoming April record. The unnamed record never groups.
    let grouped = group_by_stage(&records);
    assert_eq!(grouped.total(), 2);
    assert_eq!(grouped.get(Stage::FirstDate).len(), 0);
    assert_eq!(grouped.get(Stage::SecondDate).len(), 2);

    let sam = grouped
        .get(Stage::SecondDate)
        .iter()
        .find(|r| r.id.as_deref() == Some("d2"))
        .copied()
        .unwrap();
    assert_eq!(
        person_status(sam, now()),
        PersonStatus::Logged {
            stage: Stage::SecondDate,
            feeling: Feeling::Excellent,
        }
    );

    let kim = grouped
        .get(Stage::SecondDate)
        .iter()
        .find(|r| r.id.as_deref() == Some("d5"))
        .copied()
        .unwrap();
    assert_eq!(person_status(kim, now()), PersonStatus::Scheduled);

    // Raw history still carries every record, unnamed ones included.
    let (upcoming, past) = split_history(&records, now());
    assert_eq!(upcoming.len(), 1);
    assert_eq!(past.len(), 5);
}

#[test]
fn acknowledged_snapshot_opens_the_journal() {
    init_logging();
    let records = parse_snapshot(SNAPSHOT).unwrap();
    let acknowledged: Vec<_> = records
        .into_iter()
        .map(|mut r| {
            r.reminder_acknowledged = true;
            r
        })
        .collect();

    assert_eq!(find_missed_encounter(&acknowledged, now()), None);
    assert_eq!(startup_view(&acknowledged, now()), StartupView::Journal);
}
