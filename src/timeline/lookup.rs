// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Position-to-chord lookup.
//!
//! A [`ChordTimeline`] is a read-only, time-ordered view over a track's
//! recognized chords. It is rebuilt whenever the track's chords are reloaded;
//! edits go through the track repository and produce a new timeline.

use super::chord::RecognizedChord;

/// Ordered sequence of recognized chords, ascending by time offset.
///
/// Ordering is a hard invariant: lookup correctness depends on it. The
/// constructor sorts defensively so callers can hand over chords straight
/// from storage.
#[derive(Debug, Clone, Default)]
pub struct ChordTimeline {
    chords: Vec<RecognizedChord>,
}

impl ChordTimeline {
    /// Build a timeline from a track's chords, sorting by time offset.
    ///
    /// Ties keep their incoming order; the sort key is not required to be
    /// strictly increasing.
    pub fn new(mut chords: Vec<RecognizedChord>) -> Self {
        chords.sort_by(|a, b| a.time_offset.total_cmp(&b.time_offset));
        Self { chords }
    }

    /// An empty timeline
    pub fn empty() -> Self {
        Self { chords: Vec::new() }
    }

    /// Number of chords in the timeline
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Whether the timeline has no chords
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// The chords in timeline order
    pub fn chords(&self) -> &[RecognizedChord] {
        &self.chords
    }

    /// Get a chord by index
    pub fn chord(&self, index: usize) -> Option<&RecognizedChord> {
        self.chords.get(index)
    }

    /// Index of the chord active at the given playback position (seconds).
    ///
    /// Returns the largest index whose start offset does not exceed
    /// `position`. Two clamps are part of the contract:
    /// - an empty timeline returns 0, which is not a valid index; callers
    ///   must guard before using it for access
    /// - a position before the first chord's offset also returns 0, treating
    ///   the first chord as active early (chord 0 starts at offset 0 in
    ///   practice, so this rarely triggers, but downstream highlight timing
    ///   relies on it)
    ///
    /// Monotonically non-decreasing in `position` for a fixed timeline.
    pub fn index_of_chord_at(&self, position: f64) -> usize {
        if self.chords.is_empty() {
            return 0;
        }
        if self.chords[0].time_offset > position {
            return 0;
        }

        for index in 0..self.chords.len() - 1 {
            if self.chords[index].time_offset <= position
                && self.chords[index + 1].time_offset > position
            {
                return index;
            }
        }
        self.chords.len() - 1
    }

    /// Binary-search equivalent of [`Self::index_of_chord_at`].
    ///
    /// Produces identical results for any sorted timeline; preferable when a
    /// track carries hundreds of chords. The linear scan stays as the
    /// reference implementation.
    pub fn index_of_chord_at_binary(&self, position: f64) -> usize {
        if self.chords.is_empty() {
            return 0;
        }
        let at_or_before = self
            .chords
            .partition_point(|chord| chord.time_offset <= position);
        at_or_before.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(offsets: &[f64]) -> ChordTimeline {
        ChordTimeline::new(
            offsets
                .iter()
                .map(|&offset| RecognizedChord::new("C", offset, 1.0))
                .collect(),
        )
    }

    #[test]
    fn test_empty_timeline_returns_zero() {
        let empty = ChordTimeline::empty();
        assert_eq!(empty.index_of_chord_at(0.0), 0);
        assert_eq!(empty.index_of_chord_at(42.0), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_position_before_first_chord_clamps_to_zero() {
        let timeline = timeline(&[2.0, 6.0, 10.0]);
        assert_eq!(timeline.index_of_chord_at(0.0), 0);
        assert_eq!(timeline.index_of_chord_at(1.99), 0);
        assert_eq!(timeline.index_of_chord_at_binary(1.99), 0);
    }

    #[test]
    fn test_lookup_example_scenario() {
        // Chords at [0, 4, 8, 12], track duration 15s.
        let timeline = timeline(&[0.0, 4.0, 8.0, 12.0]);
        assert_eq!(timeline.index_of_chord_at(0.0), 0);
        assert_eq!(timeline.index_of_chord_at(5.0), 1);
        assert_eq!(timeline.index_of_chord_at(11.9), 2);
        assert_eq!(timeline.index_of_chord_at(14.0), 3);
    }

    #[test]
    fn test_lookup_at_exact_boundaries() {
        let timeline = timeline(&[0.0, 4.0, 8.0]);
        assert_eq!(timeline.index_of_chord_at(4.0), 1);
        assert_eq!(timeline.index_of_chord_at(8.0), 2);
        // Past the last chord's start stays on the last chord.
        assert_eq!(timeline.index_of_chord_at(1000.0), 2);
    }

    #[test]
    fn test_single_chord_timeline() {
        let timeline = timeline(&[0.0]);
        assert_eq!(timeline.index_of_chord_at(0.0), 0);
        assert_eq!(timeline.index_of_chord_at(99.0), 0);
    }

    #[test]
    fn test_constructor_sorts_unordered_input() {
        let timeline = ChordTimeline::new(vec![
            RecognizedChord::new("G", 8.0, 1.0),
            RecognizedChord::new("C", 0.0, 1.0),
            RecognizedChord::new("Em", 4.0, 1.0),
        ]);
        assert_eq!(timeline.chord(0).unwrap().name, "C");
        assert_eq!(timeline.chord(1).unwrap().name, "Em");
        assert_eq!(timeline.chord(2).unwrap().name, "G");
    }

    #[test]
    fn test_duplicate_offsets_resolve_to_last() {
        // Non-strictly-increasing offsets are legal; lookup picks the
        // largest index at or before the position.
        let timeline = timeline(&[0.0, 4.0, 4.0, 9.0]);
        assert_eq!(timeline.index_of_chord_at(4.0), 2);
        assert_eq!(timeline.index_of_chord_at(4.5), 2);
        assert_eq!(timeline.index_of_chord_at_binary(4.0), 2);
    }

    #[test]
    fn test_lookup_is_monotonic_in_position() {
        let timeline = timeline(&[0.0, 1.5, 3.0, 7.25, 11.0, 30.0]);
        let mut last_index = 0;
        let mut position = 0.0;
        while position < 35.0 {
            let index = timeline.index_of_chord_at(position);
            assert!(index >= last_index);
            last_index = index;
            position += 0.125;
        }
    }

    #[test]
    fn test_linear_and_binary_lookups_agree() {
        // Differential test across irregular timelines and positions,
        // including positions before the first offset.
        let cases: Vec<Vec<f64>> = vec![
            vec![],
            vec![0.0],
            vec![3.0],
            vec![0.0, 4.0, 8.0, 12.0],
            vec![0.5, 0.5, 0.5],
            vec![0.0, 0.1, 0.2, 10.0, 10.0, 25.0, 100.0],
        ];
        for offsets in cases {
            let timeline = timeline(&offsets);
            let mut position = -1.0;
            while position < 110.0 {
                assert_eq!(
                    timeline.index_of_chord_at(position),
                    timeline.index_of_chord_at_binary(position),
                    "mismatch at position {} for offsets {:?}",
                    position,
                    offsets
                );
                position += 0.25;
            }
        }
    }

    #[test]
    fn test_lookup_postcondition() {
        // The returned chord starts at or before the position, and every
        // later chord starts strictly after it (or the index is the clamp).
        let timeline = timeline(&[1.0, 2.5, 6.0, 6.0, 14.0]);
        for position in [0.0, 1.0, 2.0, 3.0, 6.0, 10.0, 14.0, 20.0] {
            let i = timeline.index_of_chord_at(position);
            let starts_before = timeline.chord(i).unwrap().time_offset <= position;
            let clamped_early = i == 0 && timeline.chord(0).unwrap().time_offset > position;
            assert!(starts_before || clamped_early);
            for j in i + 1..timeline.len() {
                assert!(timeline.chord(j).unwrap().time_offset > position);
            }
        }
    }
}
