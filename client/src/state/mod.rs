//! Shared reactive state types provided through Leptos context.

pub mod notice;
