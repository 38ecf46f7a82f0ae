use super::*;

#[test]
fn badge_class_tracks_status() {
    assert_eq!(
        status_badge_class(AppointmentStatus::Scheduled),
        "status-badge--scheduled"
    );
    assert_eq!(
        status_badge_class(AppointmentStatus::Completed),
        "status-badge--completed"
    );
    assert_eq!(
        status_badge_class(AppointmentStatus::Cancelled),
        "status-badge--cancelled"
    );
}
