//! Browser-side helpers.

pub mod notify;
