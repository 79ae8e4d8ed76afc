//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and form surfaces while reading/writing
//! page state passed in as signals.

pub mod confirm_dialog;
pub mod employee_fields;
pub mod pagination;
pub mod skeleton;
pub mod toaster;
