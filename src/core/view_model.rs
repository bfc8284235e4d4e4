//! Listing view model: filtering, search, view mode and selection.
//!
//! All derived UI state (which rows are shown, what the selection bar says,
//! what a bulk action operates on) is computed here from one plain struct so
//! it can be exercised without a browser.

use std::collections::HashSet;

use crate::models::{FileEntry, Listing, TypeFilter, ViewType};

// ============================================================================
// Visibility
// ============================================================================

/// Whether an entry passes both the type filter and the name search.
///
/// The search is a case-insensitive substring match on the name.
pub fn is_visible(entry: &FileEntry, filter: TypeFilter, query: &str) -> bool {
    filter.matches(entry.kind) && entry.name.to_lowercase().contains(&query.to_lowercase())
}

// ============================================================================
// SelectionSet
// ============================================================================

/// Names of checked entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: HashSet<String>,
}

impl SelectionSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn set(&mut self, name: &str, checked: bool) {
        if checked {
            self.names.insert(name.to_string());
        } else {
            self.names.remove(name);
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

// ============================================================================
// ViewModel
// ============================================================================

/// State behind the desktop file list and selection bar.
#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    listing: Listing,
    filter: TypeFilter,
    query: String,
    view: ViewType,
    selection: SelectionSet,
    select_all: bool,
}

impl ViewModel {
    pub fn new(listing: Listing) -> Self {
        Self {
            listing,
            ..Default::default()
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn path(&self) -> &str {
        &self.listing.path
    }

    /// Install a freshly fetched listing.
    ///
    /// Selection never survives a listing change. The search term survives a
    /// refresh of the same directory but not navigation elsewhere.
    pub fn replace_listing(&mut self, listing: Listing) {
        if listing.path != self.listing.path {
            self.query.clear();
        }
        self.listing = listing;
        self.clear_selection();
    }

    // ------------------------------------------------------------------------
    // Filter / search / view
    // ------------------------------------------------------------------------

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    /// Change the type filter. Clears the selection.
    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
        self.clear_selection();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Change the search term. The selection is kept.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.sync_select_all();
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    pub fn is_visible(&self, entry: &FileEntry) -> bool {
        is_visible(entry, self.filter, &self.query)
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.listing.entries.iter().filter(|e| self.is_visible(e))
    }

    /// Inline `display` value for an entry's row or card.
    pub fn item_display(&self, entry: &FileEntry) -> &'static str {
        if self.is_visible(entry) {
            self.view.item_display()
        } else {
            "none"
        }
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Folders can only be selected by admins (they cannot be downloaded).
    pub fn is_selectable(&self, entry: &FileEntry) -> bool {
        !entry.is_dir() || self.listing.is_admin
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    /// Check or uncheck a single entry.
    pub fn toggle(&mut self, name: &str, checked: bool) {
        let selectable = self
            .listing
            .entry(name)
            .is_some_and(|e| self.is_selectable(e));
        if selectable {
            self.selection.set(name, checked);
        }
        self.sync_select_all();
    }

    /// Apply the "select all" checkbox to visible, enabled entries only.
    pub fn select_all(&mut self, checked: bool) {
        let targets: Vec<String> = self
            .visible_entries()
            .filter(|e| self.is_selectable(e))
            .map(|e| e.name.clone())
            .collect();
        for name in &targets {
            self.selection.set(name, checked);
        }
        self.select_all = checked;
        self.sync_select_all();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.select_all = false;
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all
    }

    /// Checked, enabled, visible entries in listing order.
    pub fn selected_entries(&self) -> Vec<&FileEntry> {
        self.visible_entries()
            .filter(|e| self.is_selectable(e) && self.selection.contains(&e.name))
            .collect()
    }

    pub fn selection_count(&self) -> usize {
        self.selected_entries().len()
    }

    /// The selection bar is shown iff something is selected.
    pub fn bar_active(&self) -> bool {
        self.selection_count() > 0
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.selected_entries()
            .into_iter()
            .map(|e| e.name.clone())
            .collect()
    }

    /// Download URLs of selected files; folders are skipped.
    pub fn selected_download_urls(&self) -> Vec<String> {
        self.selected_entries()
            .into_iter()
            .filter(|e| !e.is_dir())
            .map(FileEntry::download_url)
            .collect()
    }

    fn sync_select_all(&mut self) {
        if self.selection_count() == 0 {
            self.select_all = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, kind: FileKind) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            kind,
            path: format!("docs/{}", name),
            size: String::new(),
            mtime: String::new(),
        }
    }

    fn sample(is_admin: bool) -> ViewModel {
        ViewModel::new(Listing {
            path: "docs".to_string(),
            entries: vec![
                entry("Reports", FileKind::Folder),
                entry("report.pdf", FileKind::Doc),
                entry("image.png", FileKind::Image),
                entry("clip.mp4", FileKind::Video),
            ],
            is_admin,
            ..Default::default()
        })
    }

    fn visible_names(vm: &ViewModel) -> Vec<&str> {
        vm.visible_entries().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_search_example() {
        let mut vm = ViewModel::new(Listing {
            entries: vec![
                entry("report.pdf", FileKind::Doc),
                entry("image.png", FileKind::Image),
                entry("Reports", FileKind::Folder),
            ],
            ..Default::default()
        });
        vm.set_query("report");
        assert_eq!(visible_names(&vm), vec!["report.pdf", "Reports"]);
    }

    #[test]
    fn test_visibility_property() {
        let filters = [
            TypeFilter::All,
            TypeFilter::Kind(FileKind::Image),
            TypeFilter::Kind(FileKind::Doc),
        ];
        let queries = ["", "re", "PNG", "zzz"];
        let vm = sample(true);

        for filter in filters {
            for query in queries {
                for e in &vm.listing().entries {
                    let type_ok = filter == TypeFilter::All
                        || e.kind == FileKind::Folder
                        || TypeFilter::Kind(e.kind) == filter;
                    let name_ok = e.name.to_lowercase().contains(&query.to_lowercase());
                    assert_eq!(is_visible(e, filter, query), type_ok && name_ok);
                }
            }
        }
    }

    #[test]
    fn test_item_display_follows_view() {
        let mut vm = sample(false);
        vm.set_filter(TypeFilter::Kind(FileKind::Image));
        let doc = vm.listing().entry("report.pdf").cloned().unwrap();
        let img = vm.listing().entry("image.png").cloned().unwrap();

        assert_eq!(vm.item_display(&doc), "none");
        assert_eq!(vm.item_display(&img), "grid");
        vm.set_view(ViewType::Grid);
        assert_eq!(vm.item_display(&img), "flex");
        vm.set_view(ViewType::List);
        assert_eq!(vm.item_display(&img), "grid");
    }

    #[test]
    fn test_filter_change_clears_selection() {
        let mut vm = sample(false);
        vm.select_all(true);
        assert!(vm.select_all_checked());
        assert_eq!(vm.selection_count(), 3);

        vm.set_filter(TypeFilter::Kind(FileKind::Video));
        assert_eq!(vm.selection_count(), 0);
        assert!(!vm.select_all_checked());
        assert!(!vm.bar_active());
    }

    #[test]
    fn test_search_keeps_selection() {
        let mut vm = sample(false);
        vm.toggle("image.png", true);
        vm.toggle("clip.mp4", true);

        vm.set_query("clip");
        assert_eq!(vm.selection_count(), 1);
        assert!(vm.is_checked("image.png"));

        vm.set_query("");
        assert_eq!(vm.selection_count(), 2);
    }

    #[test]
    fn test_select_all_only_visible_and_enabled() {
        let mut vm = sample(false);
        vm.set_query("p");
        vm.select_all(true);

        // "Reports" is visible but folders are disabled for non-admins.
        assert_eq!(vm.selected_names(), vec!["report.pdf", "image.png", "clip.mp4"]);
        assert!(!vm.is_checked("Reports"));

        vm.set_query("");
        vm.set_query("png");
        vm.select_all(false);
        assert!(!vm.is_checked("image.png"));
        assert!(vm.is_checked("report.pdf"));
    }

    #[test]
    fn test_disabled_entries_cannot_be_toggled() {
        let mut vm = sample(false);
        vm.toggle("Reports", true);
        assert_eq!(vm.selection_count(), 0);

        let mut admin = sample(true);
        admin.toggle("Reports", true);
        assert_eq!(admin.selection_count(), 1);
    }

    #[test]
    fn test_count_matches_checked_visible_enabled() {
        let mut vm = sample(true);
        vm.select_all(true);
        vm.set_query("re");

        let expected = vm
            .listing()
            .entries
            .iter()
            .filter(|e| vm.is_checked(&e.name) && vm.is_visible(e) && vm.is_selectable(e))
            .count();
        assert_eq!(vm.selection_count(), expected);
        assert_eq!(expected, 2);
    }

    #[test]
    fn test_unchecking_last_item_resets_select_all() {
        let mut vm = sample(false);
        vm.set_query("image");
        vm.select_all(true);
        assert!(vm.select_all_checked());

        vm.toggle("image.png", false);
        assert!(!vm.bar_active());
        assert!(!vm.select_all_checked());
    }

    #[test]
    fn test_download_urls_skip_folders() {
        let mut vm = sample(true);
        vm.select_all(true);
        assert_eq!(
            vm.selected_download_urls(),
            vec![
                "/download/docs/report.pdf",
                "/download/docs/image.png",
                "/download/docs/clip.mp4",
            ]
        );
        assert_eq!(vm.selected_names().len(), 4);
    }

    #[test]
    fn test_replace_listing() {
        let mut vm = sample(false);
        vm.set_query("png");
        vm.toggle("image.png", true);
        vm.set_view(ViewType::Grid);

        let same_dir = vm.listing().clone();
        vm.replace_listing(same_dir);
        assert_eq!(vm.query(), "png");
        assert_eq!(vm.selection_count(), 0);
        assert_eq!(vm.view(), ViewType::Grid);

        vm.replace_listing(Listing {
            path: "docs/Reports".to_string(),
            ..Default::default()
        });
        assert_eq!(vm.query(), "");
        assert_eq!(vm.path(), "docs/Reports");
    }
}
