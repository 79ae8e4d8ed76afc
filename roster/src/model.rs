//! Wire DTOs exchanged with the employee backend.
//!
//! Field names follow the backend's camelCase JSON. The backend is the
//! authority for every record; nothing here is persisted locally.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Backend identifier of an employee record.
pub type EmployeeId = i64;

/// Backend identifier of a position lookup entry.
pub type PositionId = i64;

/// An employee as returned by `GetAllEmployee` / `GetEmployeeById`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub fullname: String,
    /// Telephone number; the backend may send `null` or omit it.
    #[serde(default)]
    pub tel_no: Option<String>,
    /// Foreign key into the position list. Only present on some endpoints.
    #[serde(default)]
    pub position_id: Option<PositionId>,
    /// Denormalized position display name.
    #[serde(default)]
    pub position_name: String,
}

impl Employee {
    /// Telephone for display, `-` when missing or blank.
    #[must_use]
    pub fn phone_label(&self) -> &str {
        match self.tel_no.as_deref() {
            Some(tel) if !tel.trim().is_empty() => tel,
            _ => "-",
        }
    }

    /// Case-insensitive substring match over name, phone and position name.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.fullname.to_lowercase().contains(needle)
            || self
                .tel_no
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
            || self.position_name.to_lowercase().contains(needle)
    }
}

/// A position lookup entry from `GetAllPosition`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub position_id: PositionId,
    pub position_name: String,
}

/// Body of `CreateEmployee`, and the editable part of `UpdateEmployee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub fullname: String,
    pub tel_no: String,
    pub position_id: PositionId,
}

/// Body of `UpdateEmployee`: the full record including its identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate<'a> {
    pub employee_id: EmployeeId,
    #[serde(flatten)]
    pub draft: &'a EmployeeDraft,
}

/// Body of `Authentication/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of `Authentication/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `UserManagement/create-user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub fullname: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: String,
}

/// Role assigned to self-registered accounts.
pub const DEFAULT_ROLE: &str = "user";
