//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Configuration lives here so pages and components read settings from
//! context instead of the browser environment.

pub mod config;
