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

//! HTTP response.

use httpdate::fmt_http_date;
use std::time::SystemTime;

use super::component::{Status, Version};
use super::headers::Headers;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// HTTP response.
///
/// An immutable value object, mirroring [`Request`][crate::Request]. The
/// consuming `with_*` methods return updated values, and [`into_bytes`]
/// serializes the response for the wire.
///
/// [`into_bytes`]: Response::into_bytes
///
/// # Examples
///
/// ```
/// use minato_http::{Response, Status};
///
/// // Create response
/// let res = Response::new()
///     .with_status(Status::Ok)
///     .with_header("Content-Type", "text/plain")
///     .with_body("Hello, world!");
///
/// assert_eq!(res.status(), Status::Ok);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Response {
    /// Response status.
    status: Status,
    /// Protocol version.
    version: Version,
    /// Response headers.
    headers: Headers,
    /// Response body.
    body: Vec<u8>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Response {
    /// Creates a response.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Response;
    ///
    /// // Create response
    /// let res = Response::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts the response into its wire representation.
    ///
    /// A `Date` header is added if none was set, as responses must carry one
    /// on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Response;
    ///
    /// // Create response and convert to wire representation
    /// let res = Response::new().with_body("Hello, world!");
    /// let bytes = res.into_bytes();
    ///
    /// assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
    /// ```
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        if !self.headers.contains("Date") {
            self.headers.insert("Date", fmt_http_date(SystemTime::now()));
        }

        // Serialize status line and headers
        let head = format!(
            "{} {}\r\n{}\r\n",
            self.version, self.status, self.headers,
        );

        // Assemble wire representation
        let mut bytes = Vec::with_capacity(head.len() + self.body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

#[allow(clippy::must_use_candidate)]
impl Response {
    /// Returns the status.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the protocol version.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the headers.
    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the body.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl Response {
    /// Replaces the status.
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Replaces the protocol version.
    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Sets the given header, replacing any previous values.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Response;
    ///
    /// // Create response and set header
    /// let res = Response::new()
    ///     .with_header("Content-Type", "text/plain");
    /// ```
    #[must_use]
    pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: ToString,
    {
        self.headers.insert(name, value);
        self
    }

    /// Adds a value to the given header, keeping previous values.
    #[must_use]
    pub fn with_added_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: ToString,
    {
        self.headers.append(name, value);
        self
    }

    /// Removes the given header.
    #[must_use]
    pub fn without_header<K>(mut self, name: K) -> Self
    where
        K: AsRef<str>,
    {
        self.headers.remove(name);
        self
    }

    /// Replaces the body.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Response;
    ///
    /// // Create response with body
    /// let res = Response::new().with_body("Hello, world!");
    /// assert_eq!(res.body(), b"Hello, world!");
    /// ```
    #[must_use]
    pub fn with_body<B>(mut self, body: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        self.body = body.into();
        self
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let res = Response::new();

        assert_eq!(res.status(), Status::Ok);
        assert_eq!(res.version(), Version::Http11);
        assert!(res.headers().is_empty());
        assert!(res.body().is_empty());
    }

    #[test]
    fn test_into_bytes() {
        let res = Response::new()
            .with_status(Status::NotFound)
            .with_header("Content-Type", "text/plain")
            .with_header("Date", "Sun, 06 Nov 1994 08:49:37 GMT")
            .with_body("Not Found");

        assert_eq!(
            res.into_bytes(),
            b"HTTP/1.1 404 Not Found\r\n\
              Content-Type: text/plain\r\n\
              Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
              \r\n\
              Not Found"
        );
    }

    #[test]
    fn test_into_bytes_adds_date_header() {
        let bytes = Response::new().into_bytes();
        let head = String::from_utf8(bytes).expect("should be valid UTF-8");

        assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(head.contains("Date: "));
        assert!(head.ends_with("GMT\r\n\r\n"));
    }

    #[test]
    fn test_header_manipulation() {
        let res = Response::new()
            .with_header("Vary", "Accept")
            .with_added_header("vary", "Accept-Encoding");
        assert_eq!(
            res.headers().get_line("Vary"),
            "Accept, Accept-Encoding"
        );

        let res = res.without_header("VARY");
        assert!(!res.headers().contains("Vary"));
    }
}
