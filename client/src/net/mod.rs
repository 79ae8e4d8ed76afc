//! Networking modules for backend access.
//!
//! SYSTEM CONTEXT
//! ==============
//! All backend traffic goes through `roster::Gateway`; this module only
//! supplies the browser transport that carries it.

pub mod api;
