//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::FileKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuBookOpen as FileDoc, LuChevronRight as ChevronRight,
        LuCopy as Copy, LuDownload as Download, LuEllipsisVertical as More, LuEye as Preview,
        LuFile as File, LuFileCode as FileCode, LuFileText as FileText, LuFolder as Folder,
        LuFolderPlus as NewFolder, LuHardDrive as Disk, LuHouse as Home, LuImage as FileImage,
        LuLayers as AllTypes, LuLayoutGrid as Grid, LuList as List, LuLoader as Spinner,
        LuMusic as FileAudio, LuPencil as Edit, LuQrCode as Qr, LuSearch as Search,
        LuShare2 as Share, LuTrash2 as Trash, LuUpload as Upload, LuVideo as FileVideo,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsChevronRight as ChevronRight, BsClipboard as Copy,
        BsCollection as AllTypes, BsDownload as Download, BsEye as Preview,
        BsFileEarmark as File, BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPdf as FileDoc,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkText as FileText,
        BsFileEarmarkZip as FileArchive, BsFolderFill as Folder, BsFolderPlus as NewFolder,
        BsGrid as Grid, BsHddFill as Disk, BsHouseFill as Home, BsListUl as List,
        BsPencil as Edit, BsQrCode as Qr, BsSearch as Search, BsShare as Share,
        BsThreeDotsVertical as More, BsTrash as Trash, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_DOC, FileDoc);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(ALL_TYPES, AllTypes);
themed_icon!(SEARCH, Search);
themed_icon!(LIST, List);
themed_icon!(GRID, Grid);
themed_icon!(NEW_FOLDER, NewFolder);
themed_icon!(UPLOAD, Upload);
themed_icon!(DOWNLOAD, Download);
themed_icon!(PREVIEW, Preview);
themed_icon!(EDIT, Edit);
themed_icon!(TRASH, Trash);
themed_icon!(SHARE, Share);
themed_icon!(QR, Qr);
themed_icon!(COPY, Copy);
themed_icon!(DISK, Disk);
themed_icon!(MORE, More);
themed_icon!(SPINNER, Spinner);
themed_icon!(CLOSE, Close);

/// Icon for an entry of `kind`.
pub fn for_kind(kind: FileKind) -> Icon {
    match kind {
        FileKind::Folder => FOLDER,
        FileKind::Image => FILE_IMAGE,
        FileKind::Video => FILE_VIDEO,
        FileKind::Audio => FILE_AUDIO,
        FileKind::Code => FILE_CODE,
        FileKind::Text => FILE_TEXT,
        FileKind::Doc => FILE_DOC,
        FileKind::Archive => FILE_ARCHIVE,
        FileKind::Other => FILE,
    }
}
