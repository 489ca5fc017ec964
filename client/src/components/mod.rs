//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; pages compose
//! them.

pub mod main_nav;
pub mod route_gate;
