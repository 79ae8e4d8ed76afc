//! Endpoint catalogue for the employee backend.
//!
//! Every path is relative to the `/api` prefix that the server reverse
//! proxies to the backend service, so the same requests work from the
//! browser (same origin) and from the CLI (against the server's base URL).

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use serde_json::Value;

use crate::model::EmployeeId;

pub const LOGIN: &str = "/api/Authentication/login";
pub const REGISTER: &str = "/api/UserManagement/create-user";
pub const EMPLOYEES: &str = "/api/Employee/GetAllEmployee";
pub const EMPLOYEE_BY_ID: &str = "/api/Employee/GetEmployeeById";
pub const CREATE_EMPLOYEE: &str = "/api/Employee/CreateEmployee";
pub const UPDATE_EMPLOYEE: &str = "/api/Employee/UpdateEmployee";
/// The backend exposes employee deletion under this (misnamed) path.
pub const DELETE_EMPLOYEE: &str = "/api/Employee/DeletePosition";
pub const POSITIONS: &str = "/api/AllMaster/GetAllPosition";

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully prepared backend call, ready for a [`crate::Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    /// Value of the `id` query parameter, for the by-id endpoints.
    pub id: Option<EmployeeId>,
    pub body: Option<Value>,
    /// Session token sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: &'static str) -> Self {
        Self { method, path, id: None, body: None, bearer: None }
    }

    #[must_use]
    pub fn login(body: Value) -> Self {
        Self::new(Method::Post, LOGIN).with_body(body)
    }

    #[must_use]
    pub fn register(body: Value) -> Self {
        Self::new(Method::Post, REGISTER).with_body(body)
    }

    #[must_use]
    pub fn list_employees() -> Self {
        Self::new(Method::Get, EMPLOYEES)
    }

    #[must_use]
    pub fn employee(id: EmployeeId) -> Self {
        Self::new(Method::Get, EMPLOYEE_BY_ID).with_id(id)
    }

    #[must_use]
    pub fn create_employee(body: Value) -> Self {
        Self::new(Method::Post, CREATE_EMPLOYEE).with_body(body)
    }

    #[must_use]
    pub fn update_employee(id: EmployeeId, body: Value) -> Self {
        Self::new(Method::Put, UPDATE_EMPLOYEE).with_id(id).with_body(body)
    }

    #[must_use]
    pub fn delete_employee(id: EmployeeId) -> Self {
        Self::new(Method::Delete, DELETE_EMPLOYEE).with_id(id)
    }

    #[must_use]
    pub fn positions() -> Self {
        Self::new(Method::Get, POSITIONS)
    }

    #[must_use]
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    /// Path plus query string, e.g. `/api/Employee/GetEmployeeById?id=42`.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match self.id {
            Some(id) => format!("{}?id={id}", self.path),
            None => self.path.to_owned(),
        }
    }

    /// Absolute URL against `base`; an empty base yields a same-origin path.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path_and_query())
    }

    /// Value for the `Authorization` header, if a token is attached.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(|token| format!("Bearer {token}"))
    }
}
