//! Utility modules for browser, network, and formatting operations.
//!
//! Provides:
//! - [`fetch_text`], [`fetch_json`], [`fetch::post_json`] - Network fetching
//! - [`upload`] - Multipart uploads with progress
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`qr_svg`] - QR codes for share links

pub mod dom;
pub mod fetch;
pub mod format;
pub mod log;
mod markdown;
mod qr;
pub mod upload;
pub mod url;

pub use fetch::{fetch_json, fetch_text};
pub use markdown::markdown_to_html;
pub use qr::qr_svg;
