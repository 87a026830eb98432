use super::*;

#[test]
fn vehicle_deserializes_backend_field_names() {
    let json = r#"{
        "_id": "65a1f0",
        "name": "Truck 1",
        "status": "maintenance",
        "updatedAt": "2024-03-05T14:07:09.000Z",
        "__v": 0
    }"#;
    let vehicle: Vehicle = serde_json::from_str(json).expect("vehicle");
    assert_eq!(vehicle.id, "65a1f0");
    assert_eq!(vehicle.name, "Truck 1");
    assert_eq!(vehicle.status, VehicleStatus::Maintenance);
    assert_eq!(vehicle.updated_at.as_deref(), Some("2024-03-05T14:07:09.000Z"));
}

#[test]
fn vehicle_without_updated_at_still_parses() {
    let json = r#"{"_id":"a","name":"Van","status":"inactive"}"#;
    let vehicle: Vehicle = serde_json::from_str(json).expect("vehicle");
    assert_eq!(vehicle.updated_at, None);
}

#[test]
fn vehicle_rejects_unknown_status() {
    let json = r#"{"_id":"a","name":"Van","status":"retired"}"#;
    assert!(serde_json::from_str::<Vehicle>(json).is_err());
}

#[test]
fn new_vehicle_serializes_name_and_lowercase_status() {
    let body = NewVehicle { name: "Truck 1".to_owned(), status: VehicleStatus::Active };
    assert_eq!(
        serde_json::to_value(&body).expect("json"),
        serde_json::json!({ "name": "Truck 1", "status": "active" })
    );
}

#[test]
fn status_patch_serializes_only_status() {
    let body = StatusPatch { status: VehicleStatus::Maintenance };
    assert_eq!(
        serde_json::to_value(body).expect("json"),
        serde_json::json!({ "status": "maintenance" })
    );
}

#[test]
fn status_default_is_active() {
    assert_eq!(VehicleStatus::default(), VehicleStatus::Active);
}

#[test]
fn status_all_is_selector_order() {
    assert_eq!(
        VehicleStatus::ALL,
        [VehicleStatus::Active, VehicleStatus::Maintenance, VehicleStatus::Inactive]
    );
}

#[test]
fn status_parses_wire_values() {
    for status in VehicleStatus::ALL {
        assert_eq!(status.as_str().parse::<VehicleStatus>(), Ok(status));
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn status_parse_is_exact() {
    let err = "Active".parse::<VehicleStatus>().expect_err("labels are not wire values");
    assert_eq!(err, ParseStatusError("Active".to_owned()));
    assert!("".parse::<VehicleStatus>().is_err());
}

#[test]
fn status_labels_are_capitalized() {
    assert_eq!(VehicleStatus::Active.label(), "Active");
    assert_eq!(VehicleStatus::Maintenance.label(), "Maintenance");
    assert_eq!(VehicleStatus::Inactive.label(), "Inactive");
}

#[test]
fn status_tones_map_green_yellow_red() {
    assert_eq!(VehicleStatus::Active.tone(), StatusTone::Success);
    assert_eq!(VehicleStatus::Maintenance.tone(), StatusTone::Warning);
    assert_eq!(VehicleStatus::Inactive.tone(), StatusTone::Danger);
}

// =============================================================
// format_updated_at
// =============================================================

#[test]
fn format_updated_at_in_utc_renders_z_stamp() {
    assert_eq!(
        format_updated_at_in(Some("2024-03-05T14:07:09.000Z"), UtcOffset::UTC),
        "2024-03-05 14:07:09"
    );
}

#[test]
fn format_updated_at_in_converts_to_viewer_offset() {
    let plus_two = time::macros::offset!(+2);
    assert_eq!(
        format_updated_at_in(Some("2024-03-05T14:07:09.000Z"), plus_two),
        "2024-03-05 16:07:09"
    );
    let minus_five = time::macros::offset!(-5);
    assert_eq!(
        format_updated_at_in(Some("2024-03-05T02:07:09Z"), minus_five),
        "2024-03-04 21:07:09"
    );
}

#[test]
fn format_updated_at_in_normalizes_source_offset() {
    assert_eq!(
        format_updated_at_in(Some("2024-03-05T14:07:09+02:00"), UtcOffset::UTC),
        "2024-03-05 12:07:09"
    );
}

#[test]
fn format_updated_at_uses_local_offset() {
    let raw = Some("2024-03-05T14:07:09.000Z");
    assert_eq!(format_updated_at(raw), format_updated_at_in(raw, local_offset()));
}

#[test]
fn format_updated_at_missing_is_invalid_date() {
    assert_eq!(format_updated_at(None), INVALID_DATE);
    assert_eq!(format_updated_at_in(None, UtcOffset::UTC), INVALID_DATE);
}

#[test]
fn format_updated_at_garbage_is_invalid_date() {
    assert_eq!(format_updated_at(Some("yesterday")), INVALID_DATE);
}
