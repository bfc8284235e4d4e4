use serde::{Deserialize, Serialize};

use crate::config::endpoints;
use crate::utils::url::encode_path;

// =============================================================================
// File Kind
// =============================================================================

/// Entry classification as reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Folder,
    Image,
    Video,
    Audio,
    Code,
    Text,
    Doc,
    Archive,
    /// Anything else, including the server's generic `file` type.
    #[default]
    #[serde(other)]
    Other,
}

impl FileKind {
    /// Human-readable label for filters and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Folder => "文件夹",
            Self::Image => "图片",
            Self::Video => "视频",
            Self::Audio => "音频",
            Self::Code => "代码",
            Self::Text => "文本",
            Self::Doc => "文档",
            Self::Archive => "压缩包",
            Self::Other => "其他",
        }
    }
}

// =============================================================================
// File Entry
// =============================================================================

/// A single row of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileEntry {
    /// File or folder name (unique within a listing)
    pub name: String,
    /// Classification
    #[serde(rename = "type", default)]
    pub kind: FileKind,
    /// Path relative to the served root
    #[serde(rename = "rel_path")]
    pub path: String,
    /// Pre-formatted size ("-" for folders)
    #[serde(default)]
    pub size: String,
    /// Pre-formatted modification time
    #[serde(default)]
    pub mtime: String,
}

impl FileEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Folder
    }

    /// URL rendering the file inline.
    pub fn view_url(&self) -> String {
        format!("{}{}", endpoints::VIEW_PREFIX, encode_path(&self.path))
    }

    /// URL serving the file as an attachment.
    pub fn download_url(&self) -> String {
        format!("{}{}", endpoints::DOWNLOAD_PREFIX, encode_path(&self.path))
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Per-type counters for the current directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeStats {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub image: usize,
    #[serde(default)]
    pub video: usize,
    #[serde(default)]
    pub doc: usize,
}

/// Disk usage of the served volume.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DiskUsage {
    pub total: String,
    pub used: String,
    pub percent: f64,
}

/// One clickable segment of the current path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// Directory listing as delivered by the server.
///
/// The first listing is embedded into the page; later ones come from the
/// listing endpoint after navigation or a successful mutation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Listing {
    /// Current directory, relative to the served root ("" for the root)
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub entries: Vec<FileEntry>,
    /// Whether admin actions are available
    #[serde(default)]
    pub is_admin: bool,
    /// README.md source of the directory, if any
    #[serde(default)]
    pub readme: Option<String>,
    #[serde(default)]
    pub stats: Option<TypeStats>,
    #[serde(default)]
    pub disk: Option<DiskUsage>,
}

impl Listing {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up an entry by name.
    pub fn entry(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Breadcrumbs from the root to the current directory.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = Vec::new();
        let mut current = String::new();

        for part in self.path.split('/').filter(|p| !p.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(part);
            crumbs.push(Breadcrumb {
                name: part.to_string(),
                path: current.clone(),
            });
        }

        crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing_from_json() {
        let json = r#"{
            "path": "media",
            "is_admin": true,
            "entries": [
                {"name": "clips", "type": "folder", "is_dir": true, "size": "-",
                 "mtime": "2024-05-01 10:00", "rel_path": "media/clips"},
                {"name": "song.flac", "type": "audio", "size": "12.0 MB",
                 "mtime": "2024-05-02 11:30", "rel_path": "media/song.flac"},
                {"name": "setup.bin", "type": "file", "rel_path": "media/setup.bin"}
            ],
            "stats": {"total": 3, "image": 0, "video": 0, "doc": 0}
        }"#;

        let listing = Listing::from_json(json).unwrap();
        assert_eq!(listing.path, "media");
        assert!(listing.is_admin);
        assert_eq!(listing.entries.len(), 3);
        assert!(listing.entries[0].is_dir());
        assert_eq!(listing.entries[1].kind, FileKind::Audio);
        assert_eq!(listing.entries[2].kind, FileKind::Other);
        assert_eq!(listing.entries[2].size, "");
        assert_eq!(listing.stats.map(|s| s.total), Some(3));
        assert!(listing.readme.is_none());
    }

    #[test]
    fn test_entry_urls_are_encoded() {
        let entry = FileEntry {
            name: "my notes #2.txt".to_string(),
            kind: FileKind::Code,
            path: "docs/my notes #2.txt".to_string(),
            size: "1.0 KB".to_string(),
            mtime: String::new(),
        };
        assert_eq!(entry.view_url(), "/view/docs/my%20notes%20%232.txt");
        assert_eq!(entry.download_url(), "/download/docs/my%20notes%20%232.txt");
    }

    #[test]
    fn test_breadcrumbs() {
        let listing = Listing {
            path: "a/b/c".to_string(),
            ..Default::default()
        };
        let crumbs = listing.breadcrumbs();
        assert_eq!(
            crumbs,
            vec![
                Breadcrumb { name: "a".into(), path: "a".into() },
                Breadcrumb { name: "b".into(), path: "a/b".into() },
                Breadcrumb { name: "c".into(), path: "a/b/c".into() },
            ]
        );
        assert!(Listing::default().breadcrumbs().is_empty());
    }
}
