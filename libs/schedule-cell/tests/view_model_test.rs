use chrono::{DateTime, Duration, NaiveDate, Offset, TimeZone, Utc};

use schedule_cell::models::{
    Appointment, AppointmentDraft, AppointmentModality, AppointmentStatus, NavigationDirection,
    ScheduleQuery, StatusFilter, ViewMode,
};
use schedule_cell::services::{mock_schedule, ScheduleViewService};

fn service() -> ScheduleViewService {
    ScheduleViewService::new(Utc.fix())
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, hour, minute, 0).unwrap()
}

fn appointment(id: &str, name: &str, reason: &str, status: AppointmentStatus, start: DateTime<Utc>) -> Appointment {
    Appointment::try_from(AppointmentDraft {
        id: id.to_string(),
        patient_id: format!("patient_{}", id),
        patient_name: name.to_string(),
        patient_avatar: None,
        modality: AppointmentModality::Video,
        status,
        start_time: start,
        end_time: start + Duration::minutes(30),
        reason: reason.to_string(),
        notes: None,
        room_number: None,
        is_urgent: false,
    })
    .unwrap()
}

fn ids(appointments: &[Appointment]) -> Vec<&str> {
    appointments.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn test_identity_query_returns_input_unchanged() {
    let appointments = mock_schedule(day(), Utc.fix()).unwrap();
    let filtered = service().filter(&appointments, &ScheduleQuery::for_date(day()));
    assert_eq!(filtered, appointments);
}

#[test]
fn test_filter_is_order_preserving_subset() {
    let appointments = mock_schedule(day(), Utc.fix()).unwrap();

    let queries = vec![
        ScheduleQuery::for_date(day()).with_search("consultation"),
        ScheduleQuery::for_date(day()).with_status(StatusFilter::Only(AppointmentStatus::Scheduled)),
        ScheduleQuery::for_date(day()).with_search("o").with_status(StatusFilter::Only(AppointmentStatus::Completed)),
        ScheduleQuery::for_date(day()).with_search("nobody matches this"),
    ];

    for query in queries {
        let filtered = service().filter(&appointments, &query);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|kept| appointments.iter().position(|a| a.id == kept.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken for {:?}", query);
    }
}

#[test]
fn test_search_is_case_insensitive_over_name_and_reason() {
    let appointments = mock_schedule(day(), Utc.fix()).unwrap();

    let by_name = service().filter(&appointments, &ScheduleQuery::for_date(day()).with_search("EMILY"));
    assert_eq!(ids(&by_name), vec!["apt_2"]);

    let by_reason = service().filter(&appointments, &ScheduleQuery::for_date(day()).with_search("Consultation"));
    assert_eq!(ids(&by_reason), vec!["apt_2", "apt_3", "apt_5"]);
}

#[test]
fn test_status_filter_combines_with_search() {
    let appointments = mock_schedule(day(), Utc.fix()).unwrap();
    let query = ScheduleQuery::for_date(day())
        .with_search("consultation")
        .with_status(StatusFilter::Only(AppointmentStatus::InProgress));

    assert_eq!(ids(&service().filter(&appointments, &query)), vec!["apt_3"]);
}

#[test]
fn test_shared_hour_binds_lower_index() {
    let appointments = vec![
        appointment("late_listed", "Ann Lee", "Check", AppointmentStatus::Scheduled, at(9, 15)),
        appointment("early_listed", "Bob Ray", "Check", AppointmentStatus::Scheduled, at(9, 0)),
    ];

    let slots = service().bind_time_slots(&appointments);
    let nine = slots.iter().find(|s| s.label == "09:00").unwrap();
    assert_eq!(nine.appointment.as_ref().map(|a| a.id.as_str()), Some("late_listed"));
    assert_eq!(slots.iter().filter(|s| s.appointment.is_some()).count(), 1);
}

#[test]
fn test_out_of_grid_hours_are_not_bound() {
    let appointments = vec![
        appointment("dawn", "Ann Lee", "Check", AppointmentStatus::Scheduled, at(7, 0)),
        appointment("night", "Bob Ray", "Check", AppointmentStatus::Scheduled, at(20, 0)),
        appointment("last", "Cy Doe", "Check", AppointmentStatus::Scheduled, at(19, 45)),
    ];

    let slots = service().bind_time_slots(&appointments);
    let bound: Vec<_> = slots
        .iter()
        .filter_map(|s| s.appointment.as_ref().map(|a| a.id.as_str()))
        .collect();
    assert_eq!(bound, vec!["last"]);
}

#[test]
fn test_summary_counts_bounded_by_total() {
    let appointments = vec![
        appointment("a", "Ann Lee", "Check", AppointmentStatus::Completed, at(8, 0)),
        appointment("b", "Bob Ray", "Check", AppointmentStatus::InProgress, at(9, 0)),
        appointment("c", "Cy Doe", "Check", AppointmentStatus::Completed, at(10, 0)),
        appointment("d", "Di Fox", "Check", AppointmentStatus::NoShow, at(11, 0)),
    ];

    let summary = service().summarize(&appointments);
    assert_eq!(summary.total, appointments.len());
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.urgent, 0);
    assert!(summary.completed <= summary.total);
    assert!(summary.in_progress <= summary.total);
    assert!(summary.urgent <= summary.total);
}

#[test]
fn test_empty_input_degrades_to_empty_results() {
    let svc = service();
    let query = ScheduleQuery::for_date(day()).with_search("anything");

    assert!(svc.filter(&[], &query).is_empty());
    assert!(svc.select_for_day(&[], day()).is_empty());
    assert_eq!(svc.summarize(&[]).total, 0);
    assert!(svc.bind_time_slots(&[]).iter().all(|s| s.appointment.is_none()));

    let view = svc.build(&[], &query, at(12, 0));
    assert!(view.appointments.is_empty());
    assert_eq!(view.time_slots.len(), 12);
    assert_eq!(view.count_label, "0 appointments scheduled");
}

#[test]
fn test_select_for_day_ignores_other_days() {
    let mut appointments = mock_schedule(day(), Utc.fix()).unwrap();
    appointments.extend(mock_schedule(day() + Duration::days(1), Utc.fix()).unwrap());

    assert_eq!(service().select_for_day(&appointments, day()).len(), 5);
    assert_eq!(service().select_for_day(&appointments, day() + Duration::days(1)).len(), 5);
    assert!(service().select_for_day(&appointments, day() - Duration::days(1)).is_empty());
}

#[test]
fn test_navigate_round_trip() {
    let svc = service();
    for view_mode in [ViewMode::Day, ViewMode::Week] {
        let forward = svc.navigate(day(), NavigationDirection::Next, view_mode);
        assert_ne!(forward, day());
        assert_eq!(svc.navigate(forward, NavigationDirection::Prev, view_mode), day());
    }
}

#[test]
fn test_navigate_day_crosses_month_boundary() {
    let end_of_feb = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(
        service().navigate(end_of_feb, NavigationDirection::Next, ViewMode::Day),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
}

#[test]
fn test_build_full_view_for_mock_day() {
    let appointments = mock_schedule(day(), Utc.fix()).unwrap();
    let query = ScheduleQuery::for_date(day()).with_view_mode(ViewMode::Week);

    let view = service().build(&appointments, &query, at(10, 0));

    assert_eq!(view.heading, "Monday, June 10, 2024");
    assert_eq!(view.view_mode, ViewMode::Week);
    assert_eq!(view.count_label, "5 appointments scheduled");
    assert_eq!(ids(&view.upcoming), vec!["apt_2", "apt_3", "apt_4"]);
    assert_eq!(view.summary.total, 5);
}
