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

//! Typed attributes attached to a marker occurrence

use crate::value::Value;

/// Attributes carried by one occurrence of a marker on a registration.
///
/// A registration may attach the same marker several times, each occurrence
/// with its own attributes. `priority` is exactly 0 when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAttributes {
    pub priority: i64,
    pub id: Option<String>,
    pub template: Option<String>,
}

impl TagAttributes {
    /// Attributes of a bare marker: priority 0, no `id`, no `template`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Build from a raw attribute map as supplied by the graph engine.
    ///
    /// `priority` is read from an integer value and degrades to 0 when
    /// absent or not an integer; `id` and `template` are read from string
    /// values. Unrecognized keys are ignored. Never fails.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut attributes = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "priority" => attributes.priority = value.as_int().unwrap_or(0),
                "id" => attributes.id = value.as_str().map(str::to_string),
                "template" => attributes.template = value.as_str().map(str::to_string),
                _ => {}
            }
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_priority_defaults_to_zero() {
        let attributes = TagAttributes::from_pairs(vec![]);
        assert_eq!(attributes.priority, 0);
    }

    #[test]
    fn test_non_integer_priority_degrades_to_zero() {
        let attributes = TagAttributes::from_pairs(vec![(
            "priority".to_string(),
            Value::Str("high".to_string()),
        )]);
        assert_eq!(attributes.priority, 0);
    }

    #[test]
    fn test_recognized_keys_are_extracted() {
        let attributes = TagAttributes::from_pairs(vec![
            ("template".to_string(), Value::from("probe.display")),
            ("id".to_string(), Value::from("memory_probe")),
            ("priority".to_string(), Value::Int(100)),
        ]);

        assert_eq!(attributes.id.as_deref(), Some("memory_probe"));
        assert_eq!(attributes.template.as_deref(), Some("probe.display"));
        assert_eq!(attributes.priority, 100);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let attributes = TagAttributes::from_pairs(vec![
            ("lazy".to_string(), Value::Bool(true)),
            ("priority".to_string(), Value::Int(-5)),
        ]);

        assert_eq!(
            attributes,
            TagAttributes::new().with_priority(-5)
        );
    }
}
