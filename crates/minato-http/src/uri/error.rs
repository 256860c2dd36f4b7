// Copyright (c) 2025-2026 Minato and contributors

// SPDX-License-Identifier: MIT
// All contributions are certified under the DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! URI error.

use std::{fmt, result};
use thiserror::Error;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// URI error.
///
/// All URI operations are all-or-nothing: an error means no value was
/// produced, never a partially applied one.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// URI string rejected by the grammar.
    #[error("URI does not match the accepted grammar: {0:?}")]
    Parse(String),

    /// Component value violates its grammar.
    #[error("invalid URI {component} component: {value:?}")]
    Component {
        /// Component that failed validation.
        component: Component,
        /// Offending value.
        value: String,
    },

    /// Host cannot be resolved from the server parameters.
    #[error("unable to resolve a host from the server parameters")]
    Resolution,
}

/// URI component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    /// URI scheme.
    Scheme,
    /// User information.
    Userinfo,
    /// Host.
    Host,
    /// Port.
    Port,
    /// Path.
    Path,
    /// Query string.
    Query,
    /// Fragment.
    Fragment,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Error {
    /// Creates a component validation error.
    pub(crate) fn component<V>(component: Component, value: V) -> Self
    where
        V: fmt::Display,
    {
        Error::Component { component, value: value.to_string() }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Display for Component {
    /// Formats the component name for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Scheme => "scheme",
            Component::Userinfo => "userinfo",
            Component::Host => "host",
            Component::Port => "port",
            Component::Path => "path",
            Component::Query => "query",
            Component::Fragment => "fragment",
        })
    }
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// URI result.
pub type Result<T = ()> = result::Result<T, Error>;
