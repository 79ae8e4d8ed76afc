//! Controlled form models and their submit-time validation.
//!
//! Only presence is checked here. Uniqueness, referential integrity and
//! everything else is the backend's job.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::model::{Credentials, DEFAULT_ROLE, Employee, EmployeeDraft, NewAccount, PositionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Enter a valid email address")]
    InvalidEmail,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns [`FormError::Required`] when either field is blank.
    pub fn validate(&self) -> Result<Credentials, FormError> {
        let username = required(&self.username, "Username")?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(Credentials { username, password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub fullname: String,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns [`FormError::Required`] for a blank field and
    /// [`FormError::InvalidEmail`] when the email has no `@`.
    pub fn validate(&self) -> Result<NewAccount, FormError> {
        let fullname = required(&self.fullname, "Fullname")?;
        let username = required(&self.username, "Username")?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        let email = required(&self.email, "Email")?;
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        Ok(NewAccount {
            fullname,
            username,
            password: self.password.clone(),
            email,
            role: DEFAULT_ROLE.to_owned(),
        })
    }
}

/// Fields shared by the create and edit employee forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub fullname: String,
    pub tel_no: String,
    pub position_id: Option<PositionId>,
}

impl EmployeeForm {
    /// Pre-populate from a fetched record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            fullname: employee.fullname.clone(),
            tel_no: employee.tel_no.clone().unwrap_or_default(),
            position_id: employee.position_id,
        }
    }

    /// Apply the raw value of the position `<select>`; the empty
    /// placeholder option clears the selection.
    pub fn select_position(&mut self, raw: &str) {
        self.position_id = raw.trim().parse().ok();
    }

    /// # Errors
    ///
    /// Returns [`FormError::Required`] when the name is blank or no position
    /// is selected.
    pub fn validate(&self) -> Result<EmployeeDraft, FormError> {
        let fullname = required(&self.fullname, "Full name")?;
        let position_id = self.position_id.ok_or(FormError::Required("Position"))?;
        Ok(EmployeeDraft { fullname, tel_no: self.tel_no.trim().to_owned(), position_id })
    }
}
