//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileEntry`], [`FileKind`], [`Listing`] - Directory listings from the server
//! - [`ViewType`], [`TypeFilter`] - Explorer presentation state
//! - [`BrowseRoute`] - Path-based navigation

mod entry;
mod explorer;
mod route;

pub use entry::{Breadcrumb, FileEntry, FileKind, Listing, TypeStats};
pub use explorer::{TypeFilter, ViewType};
pub use route::BrowseRoute;
