use super::*;

#[test]
fn kind_defaults_to_success() {
    let toast = Toast::new("Added to cart", None);
    assert_eq!(toast.kind, "success");
    assert_eq!(toast.severity(), Severity::Success);
    assert_eq!(toast.class_name(), "alert-glass alert-success");
    assert_eq!(toast.icon_class(), "fas fa-check-circle me-2");
}

#[test]
fn error_toast_carries_message_and_exclamation_icon() {
    let toast = Toast::new("Saved", Some("error"));
    assert_eq!(toast.message, "Saved");
    assert_eq!(toast.class_name(), "alert-glass alert-error");
    assert!(toast.icon_class().contains("fa-exclamation-circle"));
}

#[test]
fn unknown_kind_keeps_class_but_uses_info_icon() {
    let toast = Toast::new("Heads up", Some("warning"));
    assert_eq!(toast.class_name(), "alert-glass alert-warning");
    assert_eq!(toast.severity(), Severity::Info);
    assert_eq!(toast.icon_class(), "fas fa-info-circle me-2");
}

#[test]
fn message_is_kept_verbatim() {
    let toast = Toast::new("<b>5</b> items", Some("info"));
    assert_eq!(toast.message, "<b>5</b> items");
}

#[test]
fn severity_lookup_is_case_sensitive() {
    assert_eq!(Severity::from_kind("Error"), Severity::Info);
}
