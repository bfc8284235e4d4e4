//! Upload progress tracking.
//!
//! Progress events report `loaded`/`total` bytes; the tracker turns them into
//! a percentage that never moves backwards and a running speed estimate.

use web_sys::File;

use super::actions::AdminResponse;
use super::error::{ActionError, FetchError};
use crate::config::endpoints;
use crate::utils::fetch::parse_json_body;
use crate::utils::format::format_speed;
use crate::utils::upload::{self, UploadReply};

/// Highest percentage reported while bytes are still outstanding.
const INCOMPLETE_CEILING: f64 = 99.99;

/// Byte-level progress of one upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadProgress {
    started_at_ms: f64,
    loaded: u64,
    total: u64,
    percent: f64,
    bytes_per_sec: Option<f64>,
}

impl UploadProgress {
    pub fn new(started_at_ms: f64) -> Self {
        Self {
            started_at_ms,
            ..Default::default()
        }
    }

    /// Record a progress event received at `now_ms`.
    ///
    /// Events without a known total are ignored.
    pub fn record(&mut self, loaded: u64, total: u64, now_ms: f64) {
        if total == 0 {
            return;
        }
        self.loaded = loaded;
        self.total = total;

        let raw = if loaded >= total {
            100.0
        } else {
            (loaded as f64 / total as f64 * 100.0).min(INCOMPLETE_CEILING)
        };
        self.percent = self.percent.max(raw);

        let elapsed_secs = (now_ms - self.started_at_ms) / 1000.0;
        if elapsed_secs > 0.0 {
            self.bytes_per_sec = Some(loaded as f64 / elapsed_secs);
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Percentage for the label; only shows 100 once every byte is sent.
    pub fn rounded_percent(&self) -> u32 {
        if self.is_complete() {
            100
        } else {
            (self.percent.round() as u32).min(99)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.loaded >= self.total
    }

    /// Formatted speed, once at least one timed event arrived.
    pub fn speed_text(&self) -> Option<String> {
        self.bytes_per_sec.map(format_speed)
    }
}

/// Desktop upload indicator state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading(UploadProgress),
}

impl UploadStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Uploading(_))
    }

    pub fn progress(&self) -> Option<&UploadProgress> {
        match self {
            Self::Uploading(progress) => Some(progress),
            Self::Idle => None,
        }
    }
}

// ============================================================================
// Submission
// ============================================================================

/// Desktop reply handling: any non-OK status is a server error, whatever the body says.
fn interpret_strict(reply: UploadReply) -> Result<(), ActionError> {
    if !reply.ok() {
        return Err(FetchError::HttpError(reply.status).into());
    }
    interpret(reply)
}

/// Mobile reply handling: the JSON body is read regardless of status.
fn interpret(reply: UploadReply) -> Result<(), ActionError> {
    let response: AdminResponse = parse_json_body(&reply.body, reply.ok(), reply.status)?;
    response.into_result(false)
}

/// Upload `files` into `path`, reporting `(loaded, total)` byte counts.
pub async fn send_with_progress(
    path: &str,
    files: &[File],
    on_progress: impl FnMut(f64, f64) + 'static,
) -> Result<(), ActionError> {
    let form = upload::build_form(path, files)?;
    let reply = upload::upload_with_progress(endpoints::UPLOAD, &form, on_progress).await?;
    interpret_strict(reply)
}

/// Upload `files` into `path` without progress reporting.
pub async fn send(path: &str, files: &[File]) -> Result<(), ActionError> {
    let form = upload::build_form(path, files)?;
    let reply = upload::upload_simple(endpoints::UPLOAD, form).await?;
    interpret(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_monotonic_and_complete() {
        let mut progress = UploadProgress::new(0.0);
        let events = [(10, 100), (50, 100), (40, 100), (99, 100), (100, 100)];
        let mut last = 0.0;

        for (i, (loaded, total)) in events.into_iter().enumerate() {
            progress.record(loaded, total, (i as f64 + 1.0) * 100.0);
            assert!(progress.percent() >= last);
            assert_eq!(progress.percent() == 100.0, loaded == total);
            last = progress.percent();
        }
        assert!(progress.is_complete());
        assert_eq!(progress.rounded_percent(), 100);
    }

    #[test]
    fn test_nearly_done_is_not_100() {
        let mut progress = UploadProgress::new(0.0);
        let total = 10_000_000_000_000u64;
        progress.record(total - 1, total, 1000.0);
        assert!(progress.percent() < 100.0);
        assert_eq!(progress.rounded_percent(), 99);
    }

    #[test]
    fn test_unknown_total_ignored() {
        let mut progress = UploadProgress::new(0.0);
        progress.record(500, 0, 1000.0);
        assert_eq!(progress.percent(), 0.0);
        assert!(progress.speed_text().is_none());
    }

    #[test]
    fn test_speed_estimate() {
        let mut progress = UploadProgress::new(1000.0);
        progress.record(1000, 4000, 1000.0);
        assert!(progress.speed_text().is_none());

        progress.record(2 * 1024 * 1024, 8 * 1024 * 1024, 2000.0);
        assert_eq!(progress.speed_text().as_deref(), Some("2.0 MB/s"));
    }

    #[test]
    fn test_status() {
        assert!(!UploadStatus::Idle.is_active());
        let status = UploadStatus::Uploading(UploadProgress::new(0.0));
        assert!(status.is_active());
        assert!(status.progress().is_some());
    }

    #[test]
    fn test_interpret_reply() {
        let saved = UploadReply {
            status: 200,
            body: r#"{"success": true, "count": 3}"#.to_string(),
        };
        assert_eq!(interpret(saved), Ok(()));

        let missing = UploadReply {
            status: 404,
            body: r#"{"error": "目录不存在"}"#.to_string(),
        };
        assert_eq!(
            interpret(missing).map_err(|e| e.alert_text(Some("上传失败"))),
            Err("上传失败: 目录不存在".to_string())
        );

        let crashed = UploadReply {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(
            interpret(crashed).map_err(|e| e.alert_text(Some("上传失败"))),
            Err("服务器错误".to_string())
        );
    }

    #[test]
    fn test_progress_upload_rejects_any_non_ok_status() {
        let missing = UploadReply {
            status: 404,
            body: r#"{"error": "目录不存在"}"#.to_string(),
        };
        assert_eq!(
            interpret_strict(missing).map_err(|e| e.alert_text(Some("上传失败"))),
            Err("服务器错误".to_string())
        );

        let refused = UploadReply {
            status: 200,
            body: r#"{"error": "无权操作"}"#.to_string(),
        };
        assert_eq!(
            interpret_strict(refused).map_err(|e| e.alert_text(Some("上传失败"))),
            Err("上传失败: 无权操作".to_string())
        );

        let saved = UploadReply {
            status: 200,
            body: r#"{"success": true}"#.to_string(),
        };
        assert_eq!(interpret_strict(saved), Ok(()));
    }
}
