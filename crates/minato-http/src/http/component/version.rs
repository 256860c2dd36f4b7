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

//! HTTP protocol version.

use std::fmt;
use std::str::FromStr;

use super::super::error::{Error, Result};

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// HTTP protocol version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    /// HTTP/1.0.
    Http10,
    /// HTTP/1.1.
    #[default]
    Http11,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Version {
    /// Returns the version number.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Version;
    ///
    /// // Create version
    /// let version = Version::Http11;
    ///
    /// // Obtain version number
    /// assert_eq!(version.as_str(), "1.1");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "1.0",
            Version::Http11 => "1.1",
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for Version {
    type Err = Error;

    /// Attempts to create a version from a version number.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Version`], if the string is neither
    /// `1.0` nor `1.1`.
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "1.0" => Ok(Version::Http10),
            "1.1" => Ok(Version::Http11),
            _ => Err(Error::Version(value.to_string())),
        }
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Version {
    /// Formats the version for display, as used on the wire.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("HTTP/")?;
        f.write_str(self.as_str())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let test_cases = vec![
            ("1.0", Version::Http10, "HTTP/1.0"),
            ("1.1", Version::Http11, "HTTP/1.1"),
        ];

        for (value, expected, wire) in test_cases {
            let version: Version = value.parse().expect("should parse");
            assert_eq!(version, expected, "Failed for value: {value}");
            assert_eq!(version.to_string(), wire);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_version() {
        let result = "2".parse::<Version>();
        assert_eq!(result, Err(Error::Version("2".to_owned())));
    }
}
