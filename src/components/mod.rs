//! UI components built with Leptos.
//!
//! - [`router`] - Layout selection and history handling (main entry point)
//! - [`explorer`] - Desktop file browser
//! - [`dialogs`] - Desktop modal dialogs
//! - [`mobile`] - Mobile file browser and action sheet
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dialogs;
pub mod explorer;
pub mod icons;
pub mod mobile;
pub mod router;

pub use router::AppRouter;
