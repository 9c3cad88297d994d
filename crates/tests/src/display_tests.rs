use pretty_assertions::assert_eq;
use shared_types::{status_display, urgency_display, BookingStatus, Urgency, UNKNOWN_STATUS};

#[test]
fn test_status_display_for_each_lifecycle_state() {
    let expected = [
        ("pending", "Pending", "amber"),
        ("accepted", "Accepted", "blue"),
        ("ongoing", "Ongoing", "blue"),
        ("completed", "Completed", "emerald"),
        ("rejected", "Rejected", "red"),
    ];

    for (raw, text, color) in expected {
        let display = status_display(raw);
        assert_eq!(display.text, text);
        assert!(display.color_class.contains(color), "{raw} should be {color}");
    }
}

#[test]
fn test_status_display_matches_typed_lookup() {
    for status in BookingStatus::ALL {
        assert_eq!(status_display(status.as_str()), status.display());
    }
}

#[test]
fn test_unknown_status_falls_back_to_amber() {
    assert_eq!(status_display("archived"), UNKNOWN_STATUS);
    assert_eq!(status_display(""), UNKNOWN_STATUS);
    assert_eq!(status_display("Pending"), UNKNOWN_STATUS, "status matching is exact");
    assert_eq!(UNKNOWN_STATUS.color_class, status_display("pending").color_class);
}

#[test]
fn test_urgency_display_is_case_insensitive() {
    assert_eq!(urgency_display("URGENT"), urgency_display("urgent"));
    assert_eq!(urgency_display("Moderate"), Urgency::Moderate.color_class());
    assert!(urgency_display("urgent").contains("red"));
}

#[test]
fn test_unknown_urgency_uses_flexible() {
    assert_eq!(urgency_display("whenever"), Urgency::Flexible.color_class());
    assert_eq!(urgency_display(""), urgency_display("flexible"));
    assert_eq!(Urgency::from_str_or_default("someday"), Urgency::Flexible);
}
