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

//! Core graph model for Dotwire compile-time wiring
//!
//! This crate holds the surface the wiring passes read and mutate:
//! attribute and argument [`Value`]s, component [`Definition`]s with their
//! recorded method calls, typed marker [`TagAttributes`], and the
//! [`DefinitionGraph`] capability trait implemented by the external graph
//! engine. Graph storage and reference resolution live in that engine, not
//! here.

pub mod definition;
pub mod error;
pub mod graph;
pub mod tag;
pub mod value;

// Re-export commonly used types
pub use definition::{Definition, MethodCall, Reference};
pub use error::GraphError;
pub use graph::DefinitionGraph;
pub use tag::TagAttributes;
pub use value::Value;
