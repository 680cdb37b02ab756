// ABOUTME: Ordered threshold tables for band-based clinical scoring
// ABOUTME: Lower-inclusive, upper-exclusive bands with an open-ended top band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ordered list of `(upper_exclusive, value)` bands with an open-ended top band
///
/// `lookup` returns the value of the first band whose upper bound is strictly
/// greater than the input, or `otherwise` when the input is at or above every
/// bound. Bands must be sorted by ascending upper bound.
#[derive(Debug, Clone, Copy)]
pub struct Tiered<T: 'static, V: 'static> {
    below: &'static [(T, V)],
    otherwise: V,
}

impl<T: 'static, V: 'static> Tiered<T, V> {
    /// Build a table from ascending upper bounds and the top-band value
    #[must_use]
    pub const fn new(below: &'static [(T, V)], otherwise: V) -> Self {
        Self { below, otherwise }
    }
}

impl<T: PartialOrd + Copy + 'static, V: Copy + 'static> Tiered<T, V> {
    /// Value of the band containing `value`
    #[must_use]
    pub fn lookup(&self, value: T) -> V {
        self.below
            .iter()
            .find(|(upper, _)| value < *upper)
            .map_or(self.otherwise, |&(_, band_value)| band_value)
    }
}

/// Sparse `(points, percentage)` table with explicit clamps on both ends
///
/// Point totals between two keys resolve to the entry with the largest key
/// not exceeding the total. Totals below the first key resolve to
/// `below_range`; totals above the last key resolve to `above_range`.
#[derive(Debug, Clone, Copy)]
pub struct PointsToPercentage {
    entries: &'static [(i32, u8)],
    below_range: u8,
    above_range: u8,
}

impl PointsToPercentage {
    /// Build a lookup from entries sorted by ascending point key
    #[must_use]
    pub const fn new(entries: &'static [(i32, u8)], below_range: u8, above_range: u8) -> Self {
        Self {
            entries,
            below_range,
            above_range,
        }
    }

    /// Lowest and highest point keys in the table
    #[must_use]
    pub fn key_range(&self) -> Option<(i32, i32)> {
        Some((self.entries.first()?.0, self.entries.last()?.0))
    }

    /// Percentage for a point total
    #[must_use]
    pub fn percentage(&self, points: i32) -> u8 {
        let Some(&(top_key, _)) = self.entries.last() else {
            return self.below_range;
        };
        if points > top_key {
            return self.above_range;
        }
        let position = self.entries.partition_point(|&(key, _)| key <= points);
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map_or(self.below_range, |&(_, percentage)| percentage)
    }
}
