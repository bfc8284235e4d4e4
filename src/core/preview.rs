//! Preview routing: which renderer a file gets in the preview modal.

use crate::models::{FileEntry, FileKind};

/// Renderer used by the preview modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// `<img>`
    Image,
    /// Autoplaying `<video>`
    Video,
    /// Fetched and shown as preformatted text
    Text,
    /// Embedded frame
    Document,
    /// Placeholder message
    Unsupported,
}

impl From<FileKind> for PreviewKind {
    fn from(kind: FileKind) -> Self {
        match kind {
            FileKind::Image => Self::Image,
            FileKind::Video => Self::Video,
            FileKind::Code | FileKind::Text => Self::Text,
            FileKind::Doc => Self::Document,
            FileKind::Folder | FileKind::Audio | FileKind::Archive | FileKind::Other => {
                Self::Unsupported
            }
        }
    }
}

/// File currently open in the preview modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTarget {
    pub name: String,
    pub kind: PreviewKind,
    pub view_url: String,
    pub download_url: String,
}

impl PreviewTarget {
    pub fn new(
        name: impl Into<String>,
        kind: PreviewKind,
        view_url: impl Into<String>,
        download_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            view_url: view_url.into(),
            download_url: download_url.into(),
        }
    }

    pub fn from_entry(entry: &FileEntry) -> Self {
        Self::new(
            entry.name.clone(),
            entry.kind.into(),
            entry.view_url(),
            entry.download_url(),
        )
    }

    /// Whether the body has to be fetched before rendering.
    pub fn needs_fetch(&self) -> bool {
        self.kind == PreviewKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_kind_mapping() {
        assert_eq!(PreviewKind::from(FileKind::Image), PreviewKind::Image);
        assert_eq!(PreviewKind::from(FileKind::Video), PreviewKind::Video);
        assert_eq!(PreviewKind::from(FileKind::Code), PreviewKind::Text);
        assert_eq!(PreviewKind::from(FileKind::Text), PreviewKind::Text);
        assert_eq!(PreviewKind::from(FileKind::Doc), PreviewKind::Document);
        assert_eq!(PreviewKind::from(FileKind::Archive), PreviewKind::Unsupported);
        assert_eq!(PreviewKind::from(FileKind::Other), PreviewKind::Unsupported);
    }

    #[test]
    fn test_target_from_entry() {
        let entry = FileEntry {
            name: "main.rs".to_string(),
            kind: FileKind::Code,
            path: "src/main.rs".to_string(),
            size: "1.2 KB".to_string(),
            mtime: String::new(),
        };
        let target = PreviewTarget::from_entry(&entry);
        assert_eq!(target.view_url, "/view/src/main.rs");
        assert_eq!(target.download_url, "/download/src/main.rs");
        assert!(target.needs_fetch());
    }
}
