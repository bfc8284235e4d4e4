//! Mobile layout.
//!
//! - [`MobileExplorer`] - Single-column listing with admin menu
//! - [`ActionSheet`] - Bottom sheet of per-entry actions

mod action_sheet;
#[allow(clippy::module_inception)]
mod explorer;

pub use action_sheet::ActionSheet;
pub use explorer::MobileExplorer;
