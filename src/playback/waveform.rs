// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Waveform split geometry.
//!
//! The playback screen draws the waveform twice, in a "played" color and a
//! "remaining" color, and masks each plot with a rectangle so the pair looks
//! like one waveform painted in two colors up to the play head. This module
//! computes those two mask rectangles.

/// Axis-aligned rectangle in the waveform view's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The two mask rectangles around the play head
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformSplit {
    /// Horizontal offset of the play head within the view
    pub split_point: f64,
    /// Mask covering `[0, split_point)`
    pub remaining: Rect,
    /// Mask covering `[split_point, total_width)`
    pub played: Rect,
}

/// Split a waveform of `total_width` x `height` at the current playback
/// position.
///
/// `split_point = position / duration * total_width`. Deterministic and
/// side-effect free. `duration` must be positive; callers guard, zero is
/// undefined here.
pub fn compute_split(position: f64, duration: f64, total_width: f64, height: f64) -> WaveformSplit {
    let playback_ratio = position / duration;
    let split_point = playback_ratio * total_width;

    WaveformSplit {
        split_point,
        remaining: Rect::new(0.0, 0.0, split_point, height),
        played: Rect::new(split_point, 0.0, total_width - split_point, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_track_start() {
        let split = compute_split(0.0, 120.0, 320.0, 80.0);
        assert_eq!(split.split_point, 0.0);
        assert_eq!(split.remaining, Rect::new(0.0, 0.0, 0.0, 80.0));
        assert_eq!(split.played, Rect::new(0.0, 0.0, 320.0, 80.0));
    }

    #[test]
    fn test_split_at_track_end() {
        let split = compute_split(120.0, 120.0, 320.0, 80.0);
        assert_eq!(split.split_point, 320.0);
        assert_eq!(split.remaining.width, 320.0);
        assert_eq!(split.played.width, 0.0);
    }

    #[test]
    fn test_split_at_midpoint() {
        let split = compute_split(60.0, 120.0, 320.0, 80.0);
        assert_eq!(split.split_point, 160.0);
        assert_eq!(split.remaining, Rect::new(0.0, 0.0, 160.0, 80.0));
        assert_eq!(split.played, Rect::new(160.0, 0.0, 160.0, 80.0));
    }

    #[test]
    fn test_masks_tile_the_full_width() {
        for position in [0.0, 13.7, 45.0, 89.999] {
            let split = compute_split(position, 90.0, 411.5, 64.0);
            assert_eq!(split.remaining.x, 0.0);
            assert_eq!(split.played.x, split.split_point);
            let covered = split.remaining.width + split.played.width;
            assert!((covered - 411.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_width_view() {
        let split = compute_split(30.0, 60.0, 0.0, 44.0);
        assert_eq!(split.split_point, 0.0);
        assert_eq!(split.remaining.width, 0.0);
        assert_eq!(split.played.width, 0.0);
    }
}
