// Dotwire
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Priority ordering for discovered registrations

use std::collections::BTreeMap;

/// Accumulates items under an integer priority and yields them in
/// descending priority order.
///
/// Insertion order is preserved exactly within a priority, so the
/// flattened output is a total order for a given add-sequence. Priorities
/// are compared as-is; the accumulator knows nothing about graph
/// semantics.
///
/// ```
/// use dotwire_compiler::prioritizer::Prioritizer;
///
/// let mut ordering = Prioritizer::new();
/// ordering.add("fallback", 0);
/// ordering.add("primary", 100);
/// assert_eq!(ordering.into_ordered(), vec!["primary", "fallback"]);
/// ```
#[derive(Debug, Clone)]
pub struct Prioritizer<T> {
    buckets: BTreeMap<i64, Vec<T>>,
}

impl<T> Prioritizer<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Append `item` to the end of the bucket keyed by `priority`.
    pub fn add(&mut self, item: T, priority: i64) {
        self.buckets.entry(priority).or_default().push(item);
    }

    /// Number of accumulated items across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Items in descending priority order, insertion order within a
    /// priority. Borrowing and repeatable; an empty accumulator yields an
    /// empty iterator.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buckets.values().rev().flatten()
    }

    /// Consume the accumulator into the flattened ordering. An empty
    /// accumulator yields an empty `Vec`.
    pub fn into_ordered(self) -> Vec<T> {
        self.buckets.into_values().rev().flatten().collect()
    }
}

impl<T> Default for Prioritizer<T> {
    fn default() -> Self {
        Self::new()
    }
}
