//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from signals and report user input through callbacks;
//! they never issue requests themselves.

pub mod layout;
pub mod professional_form;
pub mod professionals_table;
pub mod source_filter;
