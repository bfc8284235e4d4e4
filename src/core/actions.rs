//! Admin actions: request bodies, response handling, and dialog state.
//!
//! Every mutation follows one shape: build a request from validated input,
//! POST it as JSON together with the current directory, then either re-sync
//! the listing or report the server's message.

use serde::{Deserialize, Serialize, Serializer};

use super::error::ActionError;
use crate::config::{endpoints, messages};
use crate::models::FileEntry;
use crate::utils::fetch::post_json;

// ============================================================================
// Requests
// ============================================================================

/// JSON body of a file mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AdminRequest {
    Mkdir {
        path: String,
        name: String,
    },
    Rename {
        path: String,
        old_name: String,
        new_name: String,
    },
    Delete {
        path: String,
        filenames: Vec<String>,
    },
}

impl AdminRequest {
    /// Create-folder request; `None` when the trimmed name is empty.
    pub fn mkdir(path: &str, name: &str) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self::Mkdir {
            path: path.to_string(),
            name: name.to_string(),
        })
    }

    /// Rename request; `None` when the new name is empty or unchanged.
    pub fn rename(path: &str, old_name: &str, new_name: &str) -> Option<Self> {
        let new_name = new_name.trim();
        (!new_name.is_empty() && new_name != old_name).then(|| Self::Rename {
            path: path.to_string(),
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
        })
    }

    /// Delete request; `None` when nothing is staged.
    pub fn delete(path: &str, filenames: Vec<String>) -> Option<Self> {
        (!filenames.is_empty()).then(|| Self::Delete {
            path: path.to_string(),
            filenames,
        })
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Mkdir { .. } => endpoints::MKDIR,
            Self::Rename { .. } => endpoints::RENAME,
            Self::Delete { .. } => endpoints::DELETE,
        }
    }

    /// Prefix of the desktop failure alert.
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Self::Mkdir { .. } => messages::MKDIR_FAILED,
            Self::Rename { .. } => messages::RENAME_FAILED,
            Self::Delete { .. } => messages::DELETE_FAILED,
        }
    }

    /// Partial delete failures come back in `msg`, everything else in `error`.
    fn prefers_msg(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// `{success, error?, msg?}` answer of the admin endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AdminResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl AdminResponse {
    pub fn into_result(self, prefer_msg: bool) -> Result<(), ActionError> {
        if self.success {
            return Ok(());
        }
        let message = if prefer_msg {
            self.msg.or(self.error)
        } else {
            self.error.or(self.msg)
        };
        Err(ActionError::Rejected(
            message.unwrap_or_else(|| messages::UNKNOWN_ERROR.to_string()),
        ))
    }
}

/// POST a mutation and interpret the answer.
pub async fn submit(request: &AdminRequest) -> Result<(), ActionError> {
    let response: AdminResponse = post_json(request.endpoint(), request).await?;
    response.into_result(request.prefers_msg())
}

// ============================================================================
// Delete confirmation
// ============================================================================

/// Filenames staged for the delete confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub filenames: Vec<String>,
}

impl PendingDelete {
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            filenames: vec![name.into()],
        }
    }

    pub fn bulk(filenames: Vec<String>) -> Option<Self> {
        (!filenames.is_empty()).then_some(Self { filenames })
    }

    /// Single deletes name the file, bulk deletes give the count.
    pub fn confirm_message(&self) -> String {
        match self.filenames.as_slice() {
            [name] => format!("确定要删除 \"{}\" 吗？", name),
            names => format!("确定要删除选中的 {} 个项目吗？", names.len()),
        }
    }

    pub fn is_single(&self) -> bool {
        self.filenames.len() == 1
    }

    pub fn into_request(self, path: &str) -> Option<AdminRequest> {
        AdminRequest::delete(path, self.filenames)
    }
}

// ============================================================================
// Sharing
// ============================================================================

/// Lifetime of a share link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareDuration {
    Days(u32),
    Forever,
}

impl Default for ShareDuration {
    fn default() -> Self {
        Self::Days(7)
    }
}

impl ShareDuration {
    pub const CHOICES: [ShareDuration; 4] = [
        ShareDuration::Days(1),
        ShareDuration::Days(7),
        ShareDuration::Days(30),
        ShareDuration::Forever,
    ];

    /// Form value sent to the server.
    pub fn value(self) -> String {
        match self {
            Self::Days(days) => days.to_string(),
            Self::Forever => "forever".to_string(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "forever" => Some(Self::Forever),
            days => days.parse().ok().map(Self::Days),
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Days(days) => format!("{} 天", days),
            Self::Forever => "永久".to_string(),
        }
    }
}

impl Serialize for ShareDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value())
    }
}

/// Body of a share-link request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub file_path: String,
    /// Empty lets the server pick a slug
    pub slug: String,
    pub duration: ShareDuration,
}

impl ShareRequest {
    pub fn new(file_path: &str, slug: &str, duration: ShareDuration) -> Self {
        Self {
            file_path: file_path.to_string(),
            slug: slug.trim().to_string(),
            duration,
        }
    }
}

/// `{url}` or `{error}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ShareResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ShareResponse {
    pub fn into_result(self) -> Result<String, ActionError> {
        if let Some(error) = self.error {
            return Err(ActionError::Rejected(error));
        }
        self.url
            .ok_or_else(|| ActionError::Rejected(messages::UNKNOWN_ERROR.to_string()))
    }
}

/// Request a share link.
pub async fn create_share(request: &ShareRequest) -> Result<String, ActionError> {
    let response: ShareResponse = post_json(endpoints::SHARE_CREATE, request).await?;
    response.into_result()
}

/// Share dialog progress. Errors keep the form so it can be resubmitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ShareState {
    #[default]
    Editing,
    Submitting,
    Created(String),
    Failed(String),
}

impl ShareState {
    pub fn show_form(&self) -> bool {
        !matches!(self, Self::Created(_))
    }

    pub fn submit_disabled(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Submitting => messages::SHARE_SUBMITTING,
            _ => messages::SHARE_SUBMIT,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Created(url) => Some(url),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

// ============================================================================
// Dialogs
// ============================================================================

/// The modal currently open on the desktop layout. At most one at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dialog {
    #[default]
    None,
    Mkdir,
    Rename {
        old_name: String,
    },
    Delete(PendingDelete),
    Share {
        target: FileEntry,
        state: ShareState,
    },
    Qr {
        url: String,
    },
}

impl Dialog {
    /// Move the share dialog of `file_path` to `next`.
    ///
    /// Returns false when that dialog is no longer open, e.g. it was closed
    /// or replaced by the share dialog of another entry.
    pub fn update_share(&mut self, file_path: &str, next: ShareState) -> bool {
        match self {
            Self::Share { target, state } if target.path == file_path => {
                *state = next;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_mkdir_validation() {
        assert_eq!(AdminRequest::mkdir("docs", "   "), None);
        let request = AdminRequest::mkdir("docs", "  drafts ").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"path": "docs", "name": "drafts"})
        );
        assert_eq!(request.endpoint(), "/admin/file/mkdir");
    }

    #[test]
    fn test_rename_validation() {
        assert_eq!(AdminRequest::rename("", "a.txt", "a.txt"), None);
        assert_eq!(AdminRequest::rename("", "a.txt", " "), None);
        let request = AdminRequest::rename("", "a.txt", "b.txt ").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"path": "", "old_name": "a.txt", "new_name": "b.txt"})
        );
    }

    #[test]
    fn test_delete_body() {
        assert_eq!(AdminRequest::delete("x", Vec::new()), None);
        let request = PendingDelete::bulk(vec!["a".into(), "b".into()])
            .unwrap()
            .into_request("x")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"path": "x", "filenames": ["a", "b"]})
        );
        assert_eq!(request.failure_prefix(), "删除失败");
    }

    #[test]
    fn test_admin_response() {
        let ok: AdminResponse = serde_json::from_str(r#"{"success": true, "count": 2}"#).unwrap();
        assert_eq!(ok.into_result(false), Ok(()));

        let denied: AdminResponse = serde_json::from_str(r#"{"error": "无权操作"}"#).unwrap();
        assert_eq!(
            denied.into_result(false),
            Err(ActionError::Rejected("无权操作".to_string()))
        );

        let partial = AdminResponse {
            success: false,
            error: Some("e".into()),
            msg: Some("部分删除失败: x".into()),
        };
        assert_eq!(
            partial.clone().into_result(true),
            Err(ActionError::Rejected("部分删除失败: x".to_string()))
        );
        assert_eq!(
            partial.into_result(false),
            Err(ActionError::Rejected("e".to_string()))
        );

        assert_eq!(
            AdminResponse::default().into_result(false),
            Err(ActionError::Rejected("未知错误".to_string()))
        );
    }

    #[test]
    fn test_pending_delete_messages() {
        let single = PendingDelete::single("a.txt");
        assert!(single.is_single());
        assert!(single.confirm_message().contains("\"a.txt\""));

        let bulk = PendingDelete::bulk(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(bulk.confirm_message(), "确定要删除选中的 3 个项目吗？");
        assert!(PendingDelete::bulk(Vec::new()).is_none());
    }

    #[test]
    fn test_share_request_body() {
        let request = ShareRequest::new("docs/cv.pdf", " cv ", ShareDuration::Forever);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"file_path": "docs/cv.pdf", "slug": "cv", "duration": "forever"})
        );
        let weekly = ShareRequest::new("a", "", ShareDuration::default());
        assert_eq!(serde_json::to_value(&weekly).unwrap()["duration"], "7");
    }

    #[test]
    fn test_share_duration_values() {
        for choice in ShareDuration::CHOICES {
            assert_eq!(ShareDuration::from_value(&choice.value()), Some(choice));
        }
        assert_eq!(ShareDuration::from_value("soon"), None);
    }

    #[test]
    fn test_share_response() {
        let created: ShareResponse =
            serde_json::from_str(r#"{"success": true, "url": "https://x/abc"}"#).unwrap();
        assert_eq!(created.into_result(), Ok("https://x/abc".to_string()));

        let taken: ShareResponse = serde_json::from_str(r#"{"error": "该后缀已被使用，请更换"}"#).unwrap();
        assert!(matches!(taken.into_result(), Err(ActionError::Rejected(_))));
    }

    #[test]
    fn test_share_state() {
        assert!(!ShareState::Editing.submit_disabled());
        assert!(ShareState::Submitting.submit_disabled());
        assert_eq!(ShareState::Submitting.submit_label(), "生成中...");

        let failed = ShareState::Failed("x".into());
        assert!(failed.show_form());
        assert_eq!(failed.error(), Some("x"));
        assert_eq!(failed.submit_label(), "立即生成");

        let created = ShareState::Created("u".into());
        assert!(!created.show_form());
        assert_eq!(created.url(), Some("u"));
    }

    fn share_dialog(path: &str) -> Dialog {
        Dialog::Share {
            target: FileEntry {
                name: path.rsplit('/').next().unwrap_or(path).to_string(),
                kind: FileKind::Doc,
                path: path.to_string(),
                size: "1 KB".to_string(),
                mtime: String::new(),
            },
            state: ShareState::Submitting,
        }
    }

    #[test]
    fn test_share_result_lands_on_its_own_dialog() {
        let mut dialog = share_dialog("docs/a.pdf");
        assert!(dialog.update_share("docs/a.pdf", ShareState::Created("https://x/a".into())));
        let Dialog::Share { target, state } = dialog else {
            panic!("share dialog replaced");
        };
        assert_eq!(target.path, "docs/a.pdf");
        assert_eq!(state.url(), Some("https://x/a"));
    }

    #[test]
    fn test_late_share_result_is_dropped() {
        // Dialog reopened for another file while the first request was in flight
        let mut dialog = share_dialog("docs/b.pdf");
        assert!(!dialog.update_share("docs/a.pdf", ShareState::Created("https://x/a".into())));
        assert_eq!(dialog, share_dialog("docs/b.pdf"));

        let mut closed = Dialog::None;
        assert!(!closed.update_share("docs/a.pdf", ShareState::Failed("x".into())));
        assert_eq!(closed, Dialog::None);
    }
}
