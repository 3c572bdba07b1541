//! Display formatting for remaining time

/// Remaining seconds at or below which the display switches to warning mode.
pub const WARNING_THRESHOLD_SECS: u64 = 10;

/// Render remaining seconds as `MM:SS`, or `HH:MM:SS` once an hour or more remains.
///
/// Hours are not capped, so very long countdowns simply widen the first field.
pub fn format(remaining_seconds: u64) -> String {
    let hours = remaining_seconds / 3600;
    let minutes = (remaining_seconds % 3600) / 60;
    let secs = remaining_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Elapsed share of the countdown as a whole percentage (0..=100).
pub fn progress_pct(total_seconds: u64, remaining_seconds: u64) -> u8 {
    if total_seconds == 0 {
        return 0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    ((elapsed as u128 * 100) / total_seconds as u128).min(100) as u8
}

/// Whether the countdown is in its final seconds.
pub fn is_warning(remaining_seconds: u64) -> bool {
    remaining_seconds > 0 && remaining_seconds <= WARNING_THRESHOLD_SECS
}
