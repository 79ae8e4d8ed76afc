//! Shared employee-directory model for the browser client and the CLI.
//!
//! This crate owns everything both front ends agree on: the wire DTOs the
//! backend speaks, the endpoint catalogue, the listing view model (filter +
//! pagination), the delete-confirmation workflow, form validation, and the
//! session-guarded [`Gateway`] that every remote call goes through.
//!
//! I/O is kept behind two seams. [`Transport`] executes a prepared
//! [`ApiRequest`] (`gloo-net` in the browser, `reqwest` in the CLI) and
//! [`TokenStore`] persists the session token (`localStorage` in the browser,
//! a file in the CLI).

pub mod delete_flow;
pub mod endpoint;
pub mod form;
pub mod gateway;
pub mod listing;
pub mod model;

pub use delete_flow::{DeleteFlow, DeleteOutcome};
pub use endpoint::{ApiRequest, Method};
pub use form::{EmployeeForm, FormError, LoginForm, RegisterForm};
pub use gateway::{ApiError, CallError, DeleteReport, Gateway, MemoryTokenStore, TokenStore, Transport};
pub use listing::{Listing, PAGE_SIZE};
pub use model::{Credentials, Employee, EmployeeDraft, EmployeeId, NewAccount, Position, PositionId};
