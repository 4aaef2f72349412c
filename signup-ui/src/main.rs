//! Activity Signup Dashboard
//!
//! Browser client for the school activity signup service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with participants and remaining spots
//! - Teacher login with a token kept in localStorage
//! - Register / unregister students, with per-participant removal controls
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Session, roster and action logic live in the
//! `activity-signup` core; this crate supplies the surface, transport,
//! token store and timer.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    logging::init();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
