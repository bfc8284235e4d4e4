//! Custom error types for the application.
//!
//! - [`FetchError`] - Transport failures talking to the file server
//! - [`ActionError`] - Outcome of an admin action (rejected by the server or
//!   failed in transport)

use thiserror::Error;

use crate::config::messages;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (offline, CORS, aborted)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response without a usable body
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Whether the server answered at all.
    ///
    /// Answers that could not be used are reported as server errors,
    /// everything else as network errors.
    pub fn server_responded(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_)
                | Self::ResponseReadFailed
                | Self::InvalidContent
                | Self::JsonParseError(_)
        )
    }
}

/// Errors surfaced by admin actions (mkdir, upload, rename, delete, share).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// The server processed the request and refused it.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ActionError {
    /// Text for the blocking alert.
    ///
    /// Server messages get the action prefix (`"删除失败: ..."`) when one is
    /// given; transport failures use the generic network/server wording.
    pub fn alert_text(&self, prefix: Option<&str>) -> String {
        match self {
            Self::Rejected(msg) => match prefix {
                Some(prefix) => format!("{}: {}", prefix, msg),
                None => msg.clone(),
            },
            Self::Fetch(err) if err.server_responded() => messages::SERVER_ERROR.to_string(),
            Self::Fetch(_) => messages::NETWORK_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_text_rejected() {
        let err = ActionError::Rejected("该文件夹已存在".to_string());
        assert_eq!(err.alert_text(Some("创建失败")), "创建失败: 该文件夹已存在");
        assert_eq!(err.alert_text(None), "该文件夹已存在");
    }

    #[test]
    fn test_alert_text_transport() {
        let server: ActionError = FetchError::HttpError(500).into();
        assert_eq!(server.alert_text(Some("上传失败")), "服务器错误");

        let network: ActionError = FetchError::NetworkError("offline".into()).into();
        assert_eq!(network.alert_text(None), "网络错误");

        let timeout: ActionError = FetchError::Timeout.into();
        assert_eq!(timeout.alert_text(None), "网络错误");
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(
            ActionError::Fetch(FetchError::Timeout).to_string(),
            "Request timed out"
        );
    }
}
