//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts the `ats` REST port to the browser's fetch API.

pub mod api;
