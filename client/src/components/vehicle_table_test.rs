use super::*;

fn vehicle(id: &str, status: VehicleStatus) -> Vehicle {
    Vehicle { id: id.to_owned(), name: format!("Truck {id}"), status, updated_at: None }
}

#[test]
fn row_status_reads_latest_list() {
    let before = vec![vehicle("v1", VehicleStatus::Active), vehicle("v2", VehicleStatus::Inactive)];
    assert_eq!(row_status(&before, "v1"), Some(VehicleStatus::Active));

    let after = vec![vehicle("v1", VehicleStatus::Maintenance), vehicle("v2", VehicleStatus::Inactive)];
    assert_eq!(row_status(&after, "v1"), Some(VehicleStatus::Maintenance));
}

#[test]
fn row_status_missing_row_is_none() {
    assert_eq!(row_status(&[vehicle("v1", VehicleStatus::Active)], "v9"), None);
}
