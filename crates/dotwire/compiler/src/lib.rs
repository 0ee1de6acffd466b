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

//! Compile-time wiring passes for the Dotwire dependency graph
//!
//! Extension points declare themselves by attaching markers to their graph
//! registrations. The passes here discover those markers through the
//! [`DefinitionGraph`] capability, order the matches by declared priority,
//! and wire the ordered result into the consuming components:
//!
//! - [`ProbeRegistrationPass`] validates probe metadata, publishes the
//!   ordered `identifier -> [id, template]` table, and appends the matching
//!   `add` calls to the profiler hub.
//! - [`VoterWiringPass`] replaces the decision gate's first constructor
//!   argument with the ordered voter reference list.
//!
//! Both orderings come from [`Prioritizer`]: descending priority, with
//! discovery order preserved between equal priorities. The driver that
//! sequences passes within a compilation run lives outside this crate.

pub mod error;
pub mod pass;
pub mod passes;
pub mod prioritizer;

// Re-export commonly used types
pub use dotwire_core::DefinitionGraph;
pub use error::{CompileError, CompileResult};
pub use pass::CompilerPass;
pub use passes::{ProbeRegistrationPass, VoterWiringPass};
pub use prioritizer::Prioritizer;
