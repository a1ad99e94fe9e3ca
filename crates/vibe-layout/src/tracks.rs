#![forbid(unsafe_code)]

//! Column track geometry for a masonry surface.
//!
//! Splits a container width into `column_count` equal tracks separated by a
//! fixed gap. Remainder pixels go one each to the leftmost tracks, so the
//! tracks plus gaps always cover the container exactly (unless the gaps
//! alone exceed it, in which case the tracks collapse to zero width).

use serde::Serialize;

use crate::masonry::MAX_COLUMNS;

/// Horizontal extent of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Track {
    /// Left edge, relative to the container.
    pub x: u32,
    pub width: u32,
}

impl Track {
    #[must_use]
    pub const fn new(x: u32, width: u32) -> Self {
        Self { x, width }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }
}

/// Compute tracks for `column_count` columns across `container_width`.
///
/// A `column_count` of zero is treated as one; counts above
/// [`MAX_COLUMNS`] are capped.
#[must_use]
pub fn column_tracks(container_width: u32, column_count: usize, gap: u32) -> Vec<Track> {
    let count = column_count.clamp(1, MAX_COLUMNS);
    let count_u64 = count as u64;

    let total_gap = u64::from(gap).saturating_mul(count_u64 - 1);
    let available = u64::from(container_width).saturating_sub(total_gap);
    let base = available / count_u64;
    let remainder = available % count_u64;

    let mut tracks = Vec::with_capacity(count);
    let mut x: u64 = 0;
    for i in 0..count_u64 {
        let width = base + u64::from(i < remainder);
        tracks.push(Track::new(saturate(x), saturate(width)));
        x = x.saturating_add(width).saturating_add(u64::from(gap));
    }
    tracks
}

fn saturate(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_columns_with_gap_cover_container() {
        let t = column_tracks(1000, 3, 16);
        assert_eq!(
            t,
            vec![Track::new(0, 323), Track::new(339, 323), Track::new(678, 322)]
        );
        assert_eq!(t.last().map(|t| t.right()), Some(1000));
    }

    #[test]
    fn single_column_spans_everything() {
        assert_eq!(column_tracks(375, 1, 24), vec![Track::new(0, 375)]);
    }

    #[test]
    fn zero_columns_clamps_to_one() {
        assert_eq!(column_tracks(375, 0, 24), column_tracks(375, 1, 24));
    }

    #[test]
    fn oversized_column_count_is_capped() {
        assert_eq!(column_tracks(1920, usize::MAX, 0).len(), MAX_COLUMNS);
    }

    #[test]
    fn no_gap_even_split() {
        let t = column_tracks(1200, 4, 0);
        assert!(t.iter().all(|t| t.width == 300));
        assert_eq!(t[3].x, 900);
    }

    #[test]
    fn gaps_wider_than_container_collapse_tracks() {
        let t = column_tracks(10, 3, 16);
        assert_eq!(t, vec![Track::new(0, 0), Track::new(16, 0), Track::new(32, 0)]);
    }

    #[test]
    fn zero_width_container() {
        let t = column_tracks(0, 2, 0);
        assert_eq!(t, vec![Track::new(0, 0), Track::new(0, 0)]);
    }

    #[test]
    fn widths_differ_by_at_most_one() {
        for w in [0u32, 1, 99, 640, 1023, 1919] {
            for n in 1..8 {
                let t = column_tracks(w, n, 12);
                let max = t.iter().map(|t| t.width).max().unwrap();
                let min = t.iter().map(|t| t.width).min().unwrap();
                assert!(max - min <= 1, "w={w} n={n}");
            }
        }
    }
}
