use super::*;

#[test]
fn edit_route_embeds_employee_id() {
    assert_eq!(edit_route(42), "/dashboard/edit/42");
}

#[test]
fn create_route_nests_under_dashboard() {
    assert!(ROUTE_CREATE.starts_with(ROUTE_DASHBOARD));
}
