//! Desktop file explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer layout
//! - [`FileList`] - List/grid view of the current folder
//! - [`PreviewModal`] - In-page file preview
//! - [`UploadProgress`] - Upload percentage and speed overlay

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod pathbar;
mod preview;
mod readme;
mod search_results;
mod selection_bar;
mod sidebar;
mod toolbar;
mod upload_progress;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use preview::PreviewModal;
pub use upload_progress::UploadProgress;
