// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playback position helpers.
//!
//! Positions are plain seconds (`f64`). Callers clamp before use; nothing in
//! here raises errors.

/// Seconds backed off from the exact track end when a seek overshoots.
///
/// Seeking to the precise end makes some audio players fire their
/// end-of-file path instead of landing on the last samples.
pub const END_SEEK_BACKOFF: f64 = 0.1;

/// Jump size for the rewind/fast-forward controls, in seconds
pub const SEEK_JUMP_SECONDS: f64 = 10.0;

/// Clamp a requested seek target into the playable range.
///
/// Negative requests land on 0; requests past the end land
/// [`END_SEEK_BACKOFF`] short of `duration`. In-range requests pass through
/// unchanged. `duration` must be positive for the backoff to make sense.
pub fn clamp_seek_target(requested_seconds: f64, duration: f64) -> f64 {
    if requested_seconds < 0.0 {
        return 0.0;
    }
    if requested_seconds > duration {
        return duration - END_SEEK_BACKOFF;
    }
    requested_seconds
}

/// Format a position as `MM:SS` for the playback time indicator.
///
/// Fractional seconds truncate; minutes roll past 99 rather than wrapping.
pub fn format_for_player(seconds: f64) -> String {
    let raw_seconds = seconds.max(0.0) as u64;
    let minutes = raw_seconds / 60;
    let secs = raw_seconds % 60;
    format!("{:02}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_seek_clamps_to_zero() {
        assert_eq!(clamp_seek_target(-5.0, 100.0), 0.0);
    }

    #[test]
    fn test_overshoot_backs_off_from_end() {
        assert_eq!(clamp_seek_target(150.0, 100.0), 99.9);
    }

    #[test]
    fn test_in_range_seek_passes_through() {
        assert_eq!(clamp_seek_target(50.0, 100.0), 50.0);
        assert_eq!(clamp_seek_target(0.0, 100.0), 0.0);
        assert_eq!(clamp_seek_target(100.0, 100.0), 100.0);
    }

    #[test]
    fn test_format_for_player() {
        assert_eq!(format_for_player(0.0), "00:00");
        assert_eq!(format_for_player(7.9), "00:07");
        assert_eq!(format_for_player(65.0), "01:05");
        assert_eq!(format_for_player(600.0), "10:00");
        assert_eq!(format_for_player(6000.0), "100:00");
    }
}
