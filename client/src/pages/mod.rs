//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (state signals, effects, request
//! spawning) and delegates rendering details to `components`.

pub mod add_professional;
pub mod professionals;
