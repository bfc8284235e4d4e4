//! Core logic of the file manager.
//!
//! This module provides:
//! - [`ViewModel`] filtering, search and selection over a listing
//! - [`download`] staggered multi-file downloads
//! - [`UploadProgress`] upload percentage and speed tracking
//! - [`PreviewTarget`] preview routing
//! - [`ActionSheet`] the mobile action sheet state machine
//! - [`actions`] admin requests, responses and dialog state
//! - [`listing`] listing sync and global search

pub mod actions;
pub mod download;
pub mod error;
pub mod listing;
pub mod preview;
pub mod sheet;
pub mod upload;
mod view_model;

pub use actions::{AdminRequest, Dialog, PendingDelete, ShareDuration, ShareRequest, ShareState};
pub use listing::{LoadSequence, SearchState};
pub use preview::{PreviewKind, PreviewTarget};
pub use sheet::{ActionSheet, SheetAction, SheetEffect};
pub use upload::{UploadProgress, UploadStatus};
pub use view_model::ViewModel;
