//! Path-based browse routing.
//!
//! URL format: `/<dir>[?view=mobile]`, the same URLs the server renders
//! listing pages for, so a reload lands on the same directory.

use crate::config::MOBILE_VIEW_PARAM;
use crate::utils::url::{decode_path, encode_path, query_has};

/// Directory currently shown, plus the forced-mobile flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseRoute {
    /// Directory relative to the served root ("" for the root)
    pub path: String,
    /// `?view=mobile` was requested
    pub force_mobile: bool,
}

impl BrowseRoute {
    pub fn new(path: impl Into<String>, force_mobile: bool) -> Self {
        Self {
            path: path.into().trim_matches('/').to_string(),
            force_mobile,
        }
    }

    /// Parse `location.pathname` and `location.search`.
    pub fn from_location(pathname: &str, search: &str) -> Self {
        Self::new(
            decode_path(pathname),
            query_has(search, "view", MOBILE_VIEW_PARAM),
        )
    }

    /// Convert to a same-origin URL.
    pub fn to_url(&self) -> String {
        let mut url = format!("/{}", encode_path(&self.path));
        if self.force_mobile {
            url.push_str("?view=");
            url.push_str(MOBILE_VIEW_PARAM);
        }
        url
    }

    /// Same flag, different directory.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self::new(path, self.force_mobile)
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let pathname = location
            .as_ref()
            .and_then(|l| l.pathname().ok())
            .unwrap_or_default();
        let search = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();
        Self::from_location(&pathname, &search)
    }

    /// Update browser URL to match this route (using pushState).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&self.to_url()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(BrowseRoute::from_location("/", ""), BrowseRoute::default());
        assert_eq!(
            BrowseRoute::from_location("/media/My%20Clips/", "?view=mobile"),
            BrowseRoute {
                path: "media/My Clips".to_string(),
                force_mobile: true,
            }
        );
    }

    #[test]
    fn test_route_to_url() {
        assert_eq!(BrowseRoute::default().to_url(), "/");
        assert_eq!(
            BrowseRoute::new("media/My Clips", false).to_url(),
            "/media/My%20Clips"
        );
        assert_eq!(
            BrowseRoute::new("docs", true).to_url(),
            "/docs?view=mobile"
        );
    }

    #[test]
    fn test_with_path_keeps_mobile_flag() {
        let route = BrowseRoute::new("a", true).with_path("a/b");
        assert_eq!(route.path, "a/b");
        assert!(route.force_mobile);
    }
}
