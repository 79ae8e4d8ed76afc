use super::*;

#[test]
fn by_id_endpoints_carry_id_query() {
    assert_eq!(
        ApiRequest::employee(42).path_and_query(),
        "/api/Employee/GetEmployeeById?id=42"
    );
    assert_eq!(
        ApiRequest::delete_employee(42).path_and_query(),
        "/api/Employee/DeletePosition?id=42"
    );
    let update = ApiRequest::update_employee(5, serde_json::json!({}));
    assert_eq!(update.method, Method::Put);
    assert_eq!(update.path_and_query(), "/api/Employee/UpdateEmployee?id=5");
}

#[test]
fn collection_endpoints_have_no_query() {
    assert_eq!(ApiRequest::list_employees().path_and_query(), EMPLOYEES);
    assert_eq!(ApiRequest::positions().path_and_query(), POSITIONS);
}

#[test]
fn url_joins_base_without_double_slash() {
    let request = ApiRequest::list_employees();
    assert_eq!(
        request.url("http://127.0.0.1:3000/"),
        "http://127.0.0.1:3000/api/Employee/GetAllEmployee"
    );
    assert_eq!(request.url(""), "/api/Employee/GetAllEmployee");
}

#[test]
fn authorization_uses_bearer_scheme() {
    let request = ApiRequest::positions();
    assert_eq!(request.authorization(), None);
    assert_eq!(
        request.with_bearer("tok-1").authorization().as_deref(),
        Some("Bearer tok-1")
    );
}

#[test]
fn method_names_are_uppercase_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}
