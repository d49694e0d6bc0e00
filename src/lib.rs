//! # nouveau-nav
//!
//! Pagination, breadcrumb and editor helpers for the Nouveau theme, plus an
//! HTTP service that renders them on request.
//!
//! The centrepiece is the pagination window calculator in
//! [`domain::pagination`]: a pure function from (current page, total pages,
//! slot budget) to an ordered token strip. Everything else is presentation
//! built on top of plain values; nothing reads ambient request state.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── NavService (service/)
//!     │
//!     ├── HTML renderers (render/)
//!     └── Pagination, breadcrumbs, editor, templates (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod service;
