//! Staggered multi-file download.
//!
//! Each download is an anchor click; consecutive clicks are spaced out so the
//! browser does not drop or block them. Scheduled downloads cannot be
//! cancelled and failures are invisible at this layer.

use gloo_timers::callback::Timeout;

use crate::config::DOWNLOAD_STAGGER_MS;
use crate::utils::{dom, log};

/// A download and its delay from the moment the batch was dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledDownload {
    pub delay_ms: u32,
    pub url: String,
}

/// Assign the k-th URL (0-based) a delay of `k * step_ms`.
pub fn schedule(urls: Vec<String>, step_ms: u32) -> Vec<ScheduledDownload> {
    urls.into_iter()
        .enumerate()
        .map(|(index, url)| ScheduledDownload {
            delay_ms: (index as u32).saturating_mul(step_ms),
            url,
        })
        .collect()
}

/// Start downloading every URL, [`DOWNLOAD_STAGGER_MS`] apart.
pub fn dispatch(urls: Vec<String>) {
    if urls.is_empty() {
        return;
    }
    log::info(&format!("downloading {} file(s)", urls.len()));

    for item in schedule(urls, DOWNLOAD_STAGGER_MS) {
        if item.delay_ms == 0 {
            dom::trigger_download(&item.url);
        } else {
            Timeout::new(item.delay_ms, move || dom::trigger_download(&item.url)).forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_spacing() {
        let urls = vec!["/download/a".to_string(), "/download/b".to_string(), "/download/c".to_string()];
        let plan = schedule(urls, 800);

        assert_eq!(plan.len(), 3);
        for (k, item) in plan.iter().enumerate() {
            assert!(item.delay_ms >= k as u32 * 800);
        }
        assert_eq!(plan[0].delay_ms, 0);
        assert_eq!(plan[2].delay_ms, 1600);
        assert_eq!(plan[1].url, "/download/b");
    }

    #[test]
    fn test_schedule_empty() {
        assert!(schedule(Vec::new(), 800).is_empty());
    }
}
