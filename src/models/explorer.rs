//! Explorer-related data types for the file browser UI.

use super::{FileKind, TypeStats};

/// View type for the file container (list or grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewType {
    /// List view (default)
    #[default]
    List,
    /// Grid view
    Grid,
}

impl ViewType {
    /// CSS `display` value of a visible item.
    ///
    /// Grid cards are flex boxes and list rows are CSS grid rows, so the
    /// names look swapped on purpose.
    pub fn item_display(self) -> &'static str {
        match self {
            Self::Grid => "flex",
            Self::List => "grid",
        }
    }
}

/// Sidebar type filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Kind(FileKind),
}

impl TypeFilter {
    /// Filters offered in the sidebar, in display order.
    pub const SIDEBAR: [TypeFilter; 7] = [
        TypeFilter::All,
        TypeFilter::Kind(FileKind::Image),
        TypeFilter::Kind(FileKind::Video),
        TypeFilter::Kind(FileKind::Audio),
        TypeFilter::Kind(FileKind::Doc),
        TypeFilter::Kind(FileKind::Code),
        TypeFilter::Kind(FileKind::Archive),
    ];

    /// Folders pass every filter.
    pub fn matches(self, kind: FileKind) -> bool {
        match self {
            Self::All => true,
            Self::Kind(wanted) => kind == FileKind::Folder || kind == wanted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "全部文件",
            Self::Kind(kind) => kind.label(),
        }
    }

    /// Sidebar badge; the server only counts a few kinds.
    pub fn count(self, stats: &TypeStats) -> Option<usize> {
        match self {
            Self::All => Some(stats.total),
            Self::Kind(FileKind::Image) => Some(stats.image),
            Self::Kind(FileKind::Video) => Some(stats.video),
            Self::Kind(FileKind::Doc) => Some(stats.doc),
            Self::Kind(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_type_display_mapping() {
        assert_eq!(ViewType::Grid.item_display(), "flex");
        assert_eq!(ViewType::List.item_display(), "grid");
    }

    #[test]
    fn test_filter_matches() {
        let images = TypeFilter::Kind(FileKind::Image);
        assert!(images.matches(FileKind::Image));
        assert!(images.matches(FileKind::Folder));
        assert!(!images.matches(FileKind::Video));
        assert!(TypeFilter::All.matches(FileKind::Other));
    }

    #[test]
    fn test_sidebar_counts() {
        let stats = TypeStats {
            total: 12,
            image: 4,
            video: 1,
            doc: 3,
        };
        assert_eq!(TypeFilter::All.count(&stats), Some(12));
        assert_eq!(TypeFilter::Kind(FileKind::Doc).count(&stats), Some(3));
        assert_eq!(TypeFilter::Kind(FileKind::Archive).count(&stats), None);
    }
}
