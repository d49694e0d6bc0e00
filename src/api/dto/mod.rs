//! Data Transfer Objects for REST request/response serialization.
//!
//! Domain types are embedded as-is where their JSON shape is already the
//! wire format; the schemas document them as opaque objects.

pub mod breadcrumb_dto;
pub mod editor_dto;
pub mod layout_dto;
pub mod pagination_dto;

pub use breadcrumb_dto::*;
pub use editor_dto::*;
pub use layout_dto::*;
pub use pagination_dto::*;
