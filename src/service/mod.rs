//! Service layer: configured entry points over the domain and render
//! layers.
//!
//! [`NavService`] applies configured defaults (slot budget, labels, theme
//! paths) and logs each rendering step.

pub mod nav_service;

pub use nav_service::{EditorSettings, NavService};
