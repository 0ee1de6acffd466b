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

//! Probe discovery, validation, and registration onto the profiler hub

use dotwire_core::{DefinitionGraph, Reference, Value};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::pass::CompilerPass;
use crate::prioritizer::Prioritizer;

/// Marker carried by probe registrations.
pub const PROBE_MARKER: &str = "telemetry.probe";
/// Identifier of the profiler hub definition probes are registered onto.
pub const PROFILER_ID: &str = "telemetry.profiler";
/// Parameter name under which the probe template table is published.
pub const TEMPLATES_PARAMETER: &str = "telemetry.probe_templates";

/// Registers display-carrying probes with the profiler hub.
///
/// Every attribute set carrying a `template` must also carry an `id`;
/// attribute sets without a `template` do not participate. Qualifying
/// probes are ordered by descending priority (discovery order between
/// equal priorities) and wired twice in that one order: as an
/// `identifier -> [id, template]` table published under
/// [`TEMPLATES_PARAMETER`], and as `add(id, identifier)` reference calls
/// appended to the hub definition, so higher-priority probes register
/// before lower-priority ones.
#[derive(Debug, Clone)]
pub struct ProbeRegistrationPass {
    marker: String,
    target: String,
    parameter: String,
}

impl ProbeRegistrationPass {
    /// Pass over the well-known marker, hub, and parameter names.
    pub fn new() -> Self {
        Self {
            marker: PROBE_MARKER.to_string(),
            target: PROFILER_ID.to_string(),
            parameter: TEMPLATES_PARAMETER.to_string(),
        }
    }

    /// Override the probe marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Override the hub identifier.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Override the published parameter name.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }
}

impl Default for ProbeRegistrationPass {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerPass for ProbeRegistrationPass {
    fn process(&self, graph: &mut dyn DefinitionGraph) -> CompileResult<()> {
        let mut ordering = Prioritizer::new();
        for (service, attribute_sets) in graph.find_tagged(&self.marker) {
            for attributes in attribute_sets {
                let Some(template) = attributes.template else {
                    continue;
                };
                let Some(id) = attributes.id else {
                    return Err(CompileError::TemplateWithoutId { service });
                };
                ordering.add((service.clone(), id, template), attributes.priority);
            }
        }

        let ordered = ordering.into_ordered();
        debug!(
            pass = self.name(),
            probes = ordered.len(),
            "ordered probe registrations"
        );

        let mut table = IndexMap::with_capacity(ordered.len());
        for (service, id, template) in &ordered {
            table.insert(
                service.clone(),
                Value::Seq(vec![Value::from(id.as_str()), Value::from(template.as_str())]),
            );
        }

        let hub = graph
            .definition_mut(&self.target)
            .ok_or_else(|| CompileError::TargetNotFound {
                id: self.target.clone(),
            })?;
        for (service, id, _) in &ordered {
            hub.append_method_call(
                "add",
                vec![
                    Value::Ref(Reference::new(id.as_str())),
                    Value::Ref(Reference::new(service.as_str())),
                ],
            );
        }

        graph.set_parameter(&self.parameter, Value::Map(table));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "probe_registration"
    }
}
