//! Directory listing and global search retrieval.

use super::error::FetchError;
use crate::config::{LISTING_DATA_ID, endpoints};
use crate::models::{FileEntry, Listing};
use crate::utils::url::encode_component;
use crate::utils::{dom, fetch_json, log};

/// URL of the listing endpoint for `path`.
pub fn listing_url(path: &str) -> String {
    format!("{}?path={}", endpoints::LIST, encode_component(path))
}

/// URL of the global search endpoint for `query`.
pub fn search_url(query: &str) -> String {
    format!("{}?q={}", endpoints::SEARCH, encode_component(query.trim()))
}

/// Listing embedded in the page at render time, if present and valid.
pub fn embedded_listing() -> Option<Listing> {
    let json = dom::element_text(LISTING_DATA_ID)?;
    match Listing::from_json(&json) {
        Ok(listing) => Some(listing),
        Err(err) => {
            log::warn(&format!("ignoring malformed listing data: {}", err));
            None
        }
    }
}

/// Fetch the listing of `path`.
pub async fn fetch_listing(path: &str) -> Result<Listing, FetchError> {
    fetch_json(&listing_url(path)).await
}

/// Search the whole tree by name.
pub async fn search(query: &str) -> Result<Vec<FileEntry>, FetchError> {
    fetch_json(&search_url(query)).await
}

/// Tickets for in-flight listing fetches.
///
/// Only the most recently issued ticket may install its listing; answers to
/// older requests are dropped, whichever order they arrive in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Global search panel state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading(String),
    Results {
        query: String,
        entries: Vec<FileEntry>,
    },
    Failed(String),
}

impl SearchState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(listing_url(""), "/api/list?path=");
        assert_eq!(listing_url("a b/c"), "/api/list?path=a%20b%2Fc");
        assert_eq!(search_url(" report "), "/api/search?q=report");
    }

    #[test]
    fn test_search_results_parse() {
        let json = r#"[{"name": "x.md", "is_dir": false, "type": "code",
                        "rel_path": "notes/x.md", "size": "1.0 KB"}]"#;
        let entries: Vec<FileEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].path, "notes/x.md");
        assert_eq!(entries[0].mtime, "");
    }

    #[test]
    fn test_only_latest_load_lands() {
        let mut loads = LoadSequence::default();
        let sync_a = loads.begin();
        let navigate_b = loads.begin();

        // B answers first, then A's late answer arrives
        assert!(loads.is_current(navigate_b));
        assert!(!loads.is_current(sync_a));

        let restore = loads.begin();
        assert!(!loads.is_current(navigate_b));
        assert!(loads.is_current(restore));
    }

    #[test]
    fn test_search_state() {
        assert!(!SearchState::Idle.is_open());
        assert!(SearchState::Loading("q".into()).is_open());
    }
}
