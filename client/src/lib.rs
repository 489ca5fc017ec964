//! # client
//!
//! Leptos + WASM frontend for the career-services portal.
//!
//! This crate contains pages, components, the session signal, the route
//! access gate, and the identity-provider client used by the sign-in and
//! sign-up flows. Resume scoring, job matching and the interview chatbot live
//! behind third-party APIs and are not part of this crate.

pub mod app;
pub mod components;
pub mod gate;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
