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

//! Error handling for the wiring passes

use dotwire_core::GraphError;
use thiserror::Error;

/// Errors that abort a wiring pass, and with it the compilation run.
///
/// A failed pass must not leave partial output behind, so none of these are
/// recoverable locally.
#[derive(Error, Debug)]
pub enum CompileError {
    /// A probe registration declared a display template without naming the
    /// probe it belongs to.
    #[error(
        "registration \"{service}\" has a \"template\" attribute but no \"id\"; \
         \"id\" is required whenever \"template\" is present"
    )]
    TemplateWithoutId { service: String },

    /// A pass expected a well-known target definition that is not in the
    /// graph.
    #[error("target definition \"{id}\" not found")]
    TargetNotFound { id: String },

    /// A graph mutation was rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result alias for wiring passes.
pub type CompileResult<T> = Result<T, CompileError>;
