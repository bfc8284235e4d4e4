//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application:
//! collaborator endpoints, UI timings that have to agree with the stylesheets,
//! and the user-facing message catalogue.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand label shown in the header.
pub const APP_NAME: &str = "FileDeck";

/// Element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// `<script type="application/json">` element holding the initial listing.
pub const LISTING_DATA_ID: &str = "listing-data";

// =============================================================================
// Endpoints
// =============================================================================

/// HTTP endpoints of the file server.
pub mod endpoints {
    pub const MKDIR: &str = "/admin/file/mkdir";
    pub const UPLOAD: &str = "/admin/file/upload";
    pub const RENAME: &str = "/admin/file/rename";
    pub const DELETE: &str = "/admin/file/delete";
    pub const SHARE_CREATE: &str = "/admin/share/create";
    pub const LIST: &str = "/api/list";
    pub const SEARCH: &str = "/api/search";
    /// Prefix for raw downloads (`/download/<path>`).
    pub const DOWNLOAD_PREFIX: &str = "/download/";
    /// Prefix for inline views (`/view/<path>`).
    pub const VIEW_PREFIX: &str = "/view/";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Timeout for preview text fetches in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Upload field carrying the target directory.
pub const UPLOAD_PATH_FIELD: &str = "path";

/// Upload field repeated once per chosen file.
pub const UPLOAD_FILES_FIELD: &str = "files";

// =============================================================================
// Timings
// =============================================================================

/// Delay between consecutive downloads of a multi-file selection.
///
/// Browsers throttle or block bursts of programmatic downloads.
pub const DOWNLOAD_STAGGER_MS: u32 = 800;

/// Delay before the action sheet receives its active class.
pub const SHEET_OPEN_DELAY_MS: u32 = 10;

/// Action sheet slide-out duration. Must match `sheet.module.css`.
pub const SHEET_TRANSITION_MS: u32 = 300;

// =============================================================================
// Layout
// =============================================================================

/// Media query selecting the mobile layout.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Query parameter value forcing the mobile layout (`?view=mobile`).
pub const MOBILE_VIEW_PARAM: &str = "mobile";

/// Upload speed above which the display switches from KB/s to MB/s.
pub const SPEED_MB_THRESHOLD: f64 = 1024.0 * 1024.0;

/// Edge length of the share QR code in pixels.
pub const QR_SIZE_PX: u32 = 150;

// =============================================================================
// Messages
// =============================================================================

/// User-facing text.
pub mod messages {
    pub const NETWORK_ERROR: &str = "网络错误";
    pub const SERVER_ERROR: &str = "服务器错误";
    pub const UNKNOWN_ERROR: &str = "未知错误";
    pub const EMPTY_NAME: &str = "名称不能为空";
    pub const COPIED: &str = "已复制";
    pub const LOADING: &str = "加载中...";
    pub const PREVIEW_UNSUPPORTED: &str = "此文件不支持在线预览";
    pub const MOBILE_FOLDER_DOWNLOAD: &str = "手机端暂不支持文件夹打包下载";
    pub const UPLOADING: &str = "上传中...";
    pub const RENAME_PROMPT: &str = "重命名文件:";
    pub const MKDIR_PROMPT: &str = "请输入新文件夹名称:";
    pub const DELETE_IRREVERSIBLE: &str = "此操作不可恢复。";
    pub const SHARE_SUBMIT: &str = "立即生成";
    pub const SHARE_SUBMITTING: &str = "生成中...";

    pub const MKDIR_FAILED: &str = "创建失败";
    pub const UPLOAD_FAILED: &str = "上传失败";
    pub const RENAME_FAILED: &str = "重命名失败";
    pub const DELETE_FAILED: &str = "删除失败";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
