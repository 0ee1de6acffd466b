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

//! Component definitions, references, and recorded method calls

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::value::Value;

/// Indirect pointer to another registration's identifier, resolved into a
/// runtime instance by the graph engine once the graph is realized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference(String);

impl Reference {
    /// Create a reference to the registration with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The referenced identifier.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A method call recorded on a definition, replayed on the realized
/// component in recorded order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<Value>,
}

/// A component definition held in the dependency graph.
///
/// Wiring passes mutate definitions in two ways: appending method calls
/// and overwriting individual constructor arguments. Mutations persist in
/// the graph for later build stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    arguments: Vec<Value>,
    method_calls: Vec<MethodCall>,
}

impl Definition {
    /// Create a definition with no constructor arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a definition with the given constructor arguments.
    pub fn with_arguments(arguments: Vec<Value>) -> Self {
        Self {
            arguments,
            method_calls: Vec::new(),
        }
    }

    /// Constructor arguments, positional.
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Recorded method calls, in append order.
    pub fn method_calls(&self) -> &[MethodCall] {
        &self.method_calls
    }

    /// Record a method call to replay on the realized component.
    pub fn append_method_call(&mut self, method: impl Into<String>, args: Vec<Value>) {
        self.method_calls.push(MethodCall {
            method: method.into(),
            args,
        });
    }

    /// Overwrite the constructor argument at `index`, leaving every other
    /// argument untouched. The argument must already exist; the list never
    /// grows here.
    pub fn replace_argument(&mut self, index: usize, value: Value) -> Result<(), GraphError> {
        let available = self.arguments.len();
        match self.arguments.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GraphError::ArgumentOutOfBounds { index, available }),
        }
    }
}
