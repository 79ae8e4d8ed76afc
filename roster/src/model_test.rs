use super::*;

#[test]
fn employee_deserializes_backend_camel_case() {
    let raw = r#"{"employeeId":7,"fullname":"Ada Lovelace","telNo":"555-0101","positionId":3,"positionName":"Engineer"}"#;
    let employee: Employee = serde_json::from_str(raw).unwrap();
    assert_eq!(employee.employee_id, 7);
    assert_eq!(employee.fullname, "Ada Lovelace");
    assert_eq!(employee.tel_no.as_deref(), Some("555-0101"));
    assert_eq!(employee.position_id, Some(3));
    assert_eq!(employee.position_name, "Engineer");
}

#[test]
fn employee_tolerates_null_phone_and_missing_position_id() {
    let raw = r#"{"employeeId":1,"fullname":"Grace","telNo":null,"positionName":"Admin"}"#;
    let employee: Employee = serde_json::from_str(raw).unwrap();
    assert_eq!(employee.tel_no, None);
    assert_eq!(employee.position_id, None);
}

#[test]
fn phone_label_falls_back_to_dash() {
    let mut employee = Employee {
        employee_id: 1,
        fullname: "Grace".to_owned(),
        tel_no: None,
        position_id: None,
        position_name: "Admin".to_owned(),
    };
    assert_eq!(employee.phone_label(), "-");
    employee.tel_no = Some("   ".to_owned());
    assert_eq!(employee.phone_label(), "-");
    employee.tel_no = Some("081".to_owned());
    assert_eq!(employee.phone_label(), "081");
}

#[test]
fn matches_lowercase_checks_all_three_fields() {
    let employee = Employee {
        employee_id: 1,
        fullname: "Grace Hopper".to_owned(),
        tel_no: Some("089-ABC".to_owned()),
        position_id: Some(2),
        position_name: "Rear Admiral".to_owned(),
    };
    assert!(employee.matches_lowercase("hopper"));
    assert!(employee.matches_lowercase("abc"));
    assert!(employee.matches_lowercase("admiral"));
    assert!(employee.matches_lowercase(""));
    assert!(!employee.matches_lowercase("lovelace"));
}

#[test]
fn update_body_flattens_draft_next_to_id() {
    let draft = EmployeeDraft { fullname: "Ada".to_owned(), tel_no: String::new(), position_id: 4 };
    let body = serde_json::to_value(EmployeeUpdate { employee_id: 9, draft: &draft }).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "employeeId": 9, "fullname": "Ada", "telNo": "", "positionId": 4 })
    );
}

#[test]
fn login_response_token_is_optional() {
    let with: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(with.token.as_deref(), Some("abc"));
    let without: LoginResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(without.token, None);
}
