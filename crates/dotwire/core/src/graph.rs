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

//! Capability surface the wiring passes require from the graph engine

use indexmap::IndexMap;

use crate::definition::Definition;
use crate::tag::TagAttributes;
use crate::value::Value;

/// The slice of the dependency graph visible to wiring passes.
///
/// Implemented by the external graph engine. Tag data returned by
/// [`find_tagged`](DefinitionGraph::find_tagged) is a fresh snapshot per
/// call; definition and parameter mutations persist for later build
/// stages. The graph is exclusively owned by the invoking compilation run,
/// which the `&mut` receiver enforces.
pub trait DefinitionGraph {
    /// All registrations carrying `marker`, keyed by identifier in
    /// discovery order. A registration may carry the marker with no
    /// attributes ("tagged with defaults") or more than once with
    /// different attributes.
    fn find_tagged(&self, marker: &str) -> IndexMap<String, Vec<TagAttributes>>;

    /// Whether a definition with the given identifier exists.
    fn has_definition(&self, id: &str) -> bool;

    /// Mutable access to a definition. Absence is distinguishable from
    /// presence with no data.
    fn definition_mut(&mut self, id: &str) -> Option<&mut Definition>;

    /// Publish a named value into the graph's configuration space.
    fn set_parameter(&mut self, name: &str, value: Value);
}
