use chrono::{Duration, FixedOffset, Utc};
use geotimbra::core::grouping::{group_by_day_in, summarize_month};
use geotimbra::models::day_group::DayStatus;
use geotimbra::models::event_type::EventKind::{In, Out};
use geotimbra::utils::format_duration;

mod common;
use common::{date, event, utc};

#[test]
fn test_complete_day_duration() {
    let events = vec![
        event(1, In, utc(2024, 5, 20, 9, 1, 15)),
        event(2, Out, utc(2024, 5, 20, 18, 2, 30)),
    ];

    let groups = group_by_day_in(&events, &Utc);
    assert_eq!(groups.len(), 1);

    let day = &groups[0];
    assert_eq!(day.date_key, date(2024, 5, 20));
    assert_eq!(day.status, DayStatus::Complete);
    assert_eq!(day.total_duration.as_deref(), Some("9h 1m"));
    assert_eq!(day.entry.as_ref().map(|e| e.id), Some(1));
    assert_eq!(day.exit.as_ref().map(|e| e.id), Some(2));
}

#[test]
fn test_one_group_per_day_most_recent_first() {
    let events = vec![
        event(1, In, utc(2024, 5, 18, 8, 55, 10)),
        event(2, Out, utc(2024, 5, 18, 17, 30, 5)),
        event(3, In, utc(2024, 5, 20, 9, 0, 0)),
        event(4, Out, utc(2024, 5, 20, 17, 0, 0)),
        event(5, In, utc(2024, 5, 19, 9, 0, 0)),
    ];

    let groups = group_by_day_in(&events, &Utc);
    let keys: Vec<_> = groups.iter().map(|g| g.date_key).collect();
    assert_eq!(
        keys,
        vec![date(2024, 5, 20), date(2024, 5, 19), date(2024, 5, 18)]
    );
}

#[test]
fn test_input_order_does_not_matter() {
    let mut events = vec![
        event(1, In, utc(2024, 5, 20, 9, 0, 0)),
        event(2, Out, utc(2024, 5, 20, 12, 0, 0)),
        event(3, In, utc(2024, 5, 20, 13, 0, 0)),
        event(4, Out, utc(2024, 5, 20, 17, 0, 0)),
    ];
    let sorted = group_by_day_in(&events, &Utc);
    events.reverse();
    let reversed = group_by_day_in(&events, &Utc);

    assert_eq!(sorted, reversed);
}

#[test]
fn test_first_in_and_last_out_win() {
    let events = vec![
        event(1, In, utc(2024, 5, 20, 9, 0, 0)),
        event(2, Out, utc(2024, 5, 20, 12, 0, 0)),
        event(3, In, utc(2024, 5, 20, 13, 0, 0)),
        event(4, Out, utc(2024, 5, 20, 17, 30, 0)),
    ];

    let groups = group_by_day_in(&events, &Utc);
    let day = &groups[0];
    assert_eq!(day.entry.as_ref().map(|e| e.id), Some(1));
    assert_eq!(day.exit.as_ref().map(|e| e.id), Some(4));
    assert_eq!(day.total_duration.as_deref(), Some("8h 30m"));
}

#[test]
fn test_two_entries_keep_the_earliest() {
    let events = vec![
        event(7, In, utc(2024, 5, 20, 10, 0, 0)),
        event(3, In, utc(2024, 5, 20, 8, 0, 0)),
    ];

    let groups = group_by_day_in(&events, &Utc);
    assert_eq!(groups[0].entry.as_ref().map(|e| e.id), Some(3));
    assert_eq!(groups[0].status, DayStatus::MissingExit);
    assert!(groups[0].total_duration.is_none());
}

#[test]
fn test_entry_only_day() {
    let events = vec![event(1, In, utc(2024, 5, 20, 9, 0, 0))];

    let groups = group_by_day_in(&events, &Utc);
    assert_eq!(groups[0].status, DayStatus::MissingExit);
    assert!(groups[0].exit.is_none());
    assert!(groups[0].worked.is_none());
}

#[test]
fn test_exit_only_day() {
    let events = vec![event(1, Out, utc(2024, 5, 20, 18, 0, 0))];

    let groups = group_by_day_in(&events, &Utc);
    assert_eq!(groups[0].status, DayStatus::MissingEntry);
    assert!(groups[0].entry.is_none());
    assert!(groups[0].total_duration.is_none());
}

#[test]
fn test_exit_before_entry_has_no_duration() {
    let events = vec![
        event(1, Out, utc(2024, 5, 20, 8, 0, 0)),
        event(2, In, utc(2024, 5, 20, 9, 0, 0)),
    ];

    let groups = group_by_day_in(&events, &Utc);
    assert_eq!(groups[0].status, DayStatus::Inverted);
    assert!(groups[0].total_duration.is_none());
    assert!(!groups[0].is_complete());
}

#[test]
fn test_day_key_follows_the_time_zone() {
    // 23:30 UTC is already the next day at UTC+2
    let events = vec![event(1, In, utc(2024, 5, 20, 23, 30, 0))];
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    assert_eq!(group_by_day_in(&events, &Utc)[0].date_key, date(2024, 5, 20));
    assert_eq!(
        group_by_day_in(&events, &plus_two)[0].date_key,
        date(2024, 5, 21)
    );
}

#[test]
fn test_empty_input() {
    assert!(group_by_day_in(&[], &Utc).is_empty());
}

#[test]
fn test_month_summary() {
    let events = vec![
        event(1, In, utc(2024, 5, 20, 9, 0, 0)),
        event(2, Out, utc(2024, 5, 20, 17, 0, 0)),
        event(3, In, utc(2024, 5, 21, 9, 0, 0)),
        event(4, Out, utc(2024, 5, 21, 13, 45, 0)),
        event(5, In, utc(2024, 5, 22, 9, 0, 0)),
    ];

    let summary = summarize_month(&group_by_day_in(&events, &Utc));
    assert_eq!(summary.days, 3);
    assert_eq!(summary.complete_days, 2);
    assert_eq!(summary.total_str(), "12h 45m");
}

#[test]
fn test_format_duration_truncates_seconds() {
    assert_eq!(format_duration(Duration::seconds(59)), "0h 0m");
    assert_eq!(format_duration(Duration::minutes(59)), "0h 59m");
    assert_eq!(format_duration(Duration::minutes(481) + Duration::seconds(15)), "8h 1m");
    assert_eq!(format_duration(Duration::minutes(-90)), "-1h 30m");
}
