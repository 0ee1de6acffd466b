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

//! Compiler pass contract

use dotwire_core::DefinitionGraph;

use crate::error::CompileResult;

/// A single deterministic transform applied once to the dependency graph
/// during a compilation run.
///
/// Passes run sequentially, single-threaded, to completion. Running the
/// same pass twice on one graph is unsupported: the probe registration
/// pass would append its method calls again.
pub trait CompilerPass {
    /// Apply this pass to the graph.
    fn process(&self, graph: &mut dyn DefinitionGraph) -> CompileResult<()>;

    /// Pass name used in diagnostics.
    fn name(&self) -> &'static str;
}
