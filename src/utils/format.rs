//! Formatting utilities for transfer speeds and percentages.

use crate::config::SPEED_MB_THRESHOLD;

/// Format a transfer rate (e.g., "512.0 KB/s", "3.4 MB/s").
pub fn format_speed(bytes_per_sec: f64) -> String {
    if bytes_per_sec > SPEED_MB_THRESHOLD {
        format!("{:.1} MB/s", bytes_per_sec / 1024.0 / 1024.0)
    } else {
        format!("{:.1} KB/s", bytes_per_sec / 1024.0)
    }
}

/// Format a whole percentage (e.g., "42%").
pub fn format_percent(percent: u32) -> String {
    format!("{}%", percent)
}

/// CSS width for a progress bar fill.
pub fn progress_width(percent: f64) -> String {
    format!("width: {:.2}%;", percent.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(0.0), "0.0 KB/s");
        assert_eq!(format_speed(512.0 * 1024.0), "512.0 KB/s");
        // Exactly 1 MiB/s is still shown in KB/s.
        assert_eq!(format_speed(1024.0 * 1024.0), "1024.0 KB/s");
        assert_eq!(format_speed(3.5 * 1024.0 * 1024.0), "3.5 MB/s");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0), "0%");
        assert_eq!(format_percent(100), "100%");
    }

    #[test]
    fn test_progress_width() {
        assert_eq!(progress_width(42.5), "width: 42.50%;");
        assert_eq!(progress_width(120.0), "width: 100.00%;");
    }
}
