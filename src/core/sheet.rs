//! Mobile action sheet state machine.
//!
//! `Closed → Opening → Open → Closing → Closed`
//!
//! The active class (which drives the CSS slide transition) is only present in
//! `Open`. Opening and closing each complete after a timer; every transition
//! bumps an epoch so a stale timer can tell it has been superseded.

use crate::models::FileEntry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetPhase {
    #[default]
    Closed,
    /// Displayed, active class not yet applied
    Opening,
    Open,
    /// Active class removed, waiting for the slide-out to finish
    Closing,
}

/// Action sheet and the entry it targets.
#[derive(Clone, Debug, Default)]
pub struct ActionSheet {
    phase: SheetPhase,
    item: Option<FileEntry>,
    epoch: u64,
}

impl ActionSheet {
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    pub fn item(&self) -> Option<&FileEntry> {
        self.item.as_ref()
    }

    /// Whether the overlay is rendered at all.
    pub fn is_displayed(&self) -> bool {
        self.phase != SheetPhase::Closed
    }

    /// Whether the active class is applied.
    pub fn is_active(&self) -> bool {
        self.phase == SheetPhase::Open
    }

    /// Target `item` and start opening. Returns the epoch to settle with.
    pub fn open(&mut self, item: FileEntry) -> u64 {
        self.item = Some(item);
        self.phase = SheetPhase::Opening;
        self.bump()
    }

    /// Apply the active class once the opening tick fired.
    pub fn settle_open(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase != SheetPhase::Opening {
            return false;
        }
        self.phase = SheetPhase::Open;
        true
    }

    /// Start closing. Returns the epoch to finish with, or `None` when the
    /// sheet is already closed or closing.
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            SheetPhase::Closed | SheetPhase::Closing => None,
            SheetPhase::Opening | SheetPhase::Open => {
                self.phase = SheetPhase::Closing;
                Some(self.bump())
            }
        }
    }

    /// Hide the sheet and drop the target once the slide-out finished.
    pub fn finish_close(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase != SheetPhase::Closing {
            return false;
        }
        self.phase = SheetPhase::Closed;
        self.item = None;
        true
    }

    fn bump(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Buttons offered by the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetAction {
    Download,
    Preview,
    Rename,
    Delete,
}

/// What dispatching an action on a target means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetEffect {
    /// Nothing to do
    Ignore,
    /// Show a blocking message
    Alert(&'static str),
    /// Leave the page for `url`
    Navigate(String),
    /// Ask for a new name, pre-filled with the current one
    PromptRename(String),
    /// Ask for confirmation before deleting
    ConfirmDelete(String),
}

impl SheetAction {
    pub fn effect(self, item: &FileEntry) -> SheetEffect {
        match self {
            Self::Download if item.is_dir() => {
                SheetEffect::Alert(crate::config::messages::MOBILE_FOLDER_DOWNLOAD)
            }
            Self::Download => SheetEffect::Navigate(item.download_url()),
            Self::Preview if item.is_dir() => SheetEffect::Ignore,
            Self::Preview => SheetEffect::Navigate(item.view_url()),
            Self::Rename => SheetEffect::PromptRename(item.name.clone()),
            Self::Delete => SheetEffect::ConfirmDelete(format!("确定要删除 \"{}\" 吗?", item.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;

    fn file(name: &str, kind: FileKind) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            kind,
            path: name.to_string(),
            size: String::new(),
            mtime: String::new(),
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut sheet = ActionSheet::default();
        assert!(!sheet.is_displayed());

        let epoch = sheet.open(file("a.txt", FileKind::Code));
        assert_eq!(sheet.phase(), SheetPhase::Opening);
        assert!(sheet.is_displayed());
        assert!(!sheet.is_active());

        assert!(sheet.settle_open(epoch));
        assert!(sheet.is_active());

        let closing = sheet.close().unwrap();
        assert_eq!(sheet.phase(), SheetPhase::Closing);
        assert!(!sheet.is_active());
        assert!(sheet.is_displayed());
        assert_eq!(sheet.item().map(|i| i.name.as_str()), Some("a.txt"));

        assert!(sheet.finish_close(closing));
        assert_eq!(sheet.phase(), SheetPhase::Closed);
        assert!(sheet.item().is_none());
    }

    #[test]
    fn test_reopen_while_closing_survives_stale_timer() {
        let mut sheet = ActionSheet::default();
        let first = sheet.open(file("a.txt", FileKind::Code));
        sheet.settle_open(first);
        let stale_close = sheet.close().unwrap();

        let reopened = sheet.open(file("b.png", FileKind::Image));
        assert!(!sheet.finish_close(stale_close));
        assert!(sheet.settle_open(reopened));
        assert_eq!(sheet.item().map(|i| i.name.as_str()), Some("b.png"));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut sheet = ActionSheet::default();
        assert!(sheet.close().is_none());

        let epoch = sheet.open(file("a", FileKind::Other));
        let closing = sheet.close().unwrap();
        assert!(sheet.close().is_none());
        assert!(!sheet.settle_open(epoch));
        assert!(sheet.finish_close(closing));
    }

    #[test]
    fn test_action_effects() {
        let dir = file("photos", FileKind::Folder);
        let doc = file("cv.pdf", FileKind::Doc);

        assert_eq!(
            SheetAction::Download.effect(&dir),
            SheetEffect::Alert("手机端暂不支持文件夹打包下载")
        );
        assert_eq!(
            SheetAction::Download.effect(&doc),
            SheetEffect::Navigate("/download/cv.pdf".to_string())
        );
        assert_eq!(SheetAction::Preview.effect(&dir), SheetEffect::Ignore);
        assert_eq!(
            SheetAction::Preview.effect(&doc),
            SheetEffect::Navigate("/view/cv.pdf".to_string())
        );
        assert_eq!(
            SheetAction::Rename.effect(&doc),
            SheetEffect::PromptRename("cv.pdf".to_string())
        );
        assert!(matches!(SheetAction::Delete.effect(&dir), SheetEffect::ConfirmDelete(msg) if msg.contains("photos")));
    }
}
