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

//! Voter collection and injection into the access decision gate

use dotwire_core::{DefinitionGraph, Reference, Value};
use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::pass::CompilerPass;
use crate::prioritizer::Prioritizer;

/// Marker carried by voter registrations.
pub const VOTER_MARKER: &str = "access.voter";
/// Identifier of the decision gate definition the voters are injected into.
pub const DECISION_GATE_ID: &str = "access.decision_gate";

/// Replaces the decision gate's first constructor argument with the
/// priority-ordered list of voter references.
///
/// Priority comes from the first attribute set of each registration; a
/// bare marker participates at priority 0. The replacement fully
/// overwrites argument 0, even when no voters are tagged. A build without
/// the decision gate is left untouched; that is not an error.
#[derive(Debug, Clone)]
pub struct VoterWiringPass {
    marker: String,
    target: String,
}

impl VoterWiringPass {
    /// Pass over the well-known marker and gate names.
    pub fn new() -> Self {
        Self {
            marker: VOTER_MARKER.to_string(),
            target: DECISION_GATE_ID.to_string(),
        }
    }

    /// Override the voter marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Override the gate identifier.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }
}

impl Default for VoterWiringPass {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerPass for VoterWiringPass {
    fn process(&self, graph: &mut dyn DefinitionGraph) -> CompileResult<()> {
        let mut ordering = Prioritizer::new();
        for (service, attribute_sets) in graph.find_tagged(&self.marker) {
            let priority = attribute_sets
                .first()
                .map_or(0, |attributes| attributes.priority);
            ordering.add(Value::Ref(Reference::new(service)), priority);
        }

        if !graph.has_definition(&self.target) {
            debug!(
                pass = self.name(),
                gate = %self.target,
                "decision gate not wired in this build, skipping"
            );
            return Ok(());
        }

        let voters = ordering.into_ordered();
        debug!(
            pass = self.name(),
            voters = voters.len(),
            "injecting ordered voters"
        );

        let gate = graph
            .definition_mut(&self.target)
            .ok_or_else(|| CompileError::TargetNotFound {
                id: self.target.clone(),
            })?;
        gate.replace_argument(0, Value::Seq(voters))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "voter_wiring"
    }
}
