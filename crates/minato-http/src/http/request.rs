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

//! HTTP request.

use crate::uri::Uri;

use super::component::{Method, Version};
use super::headers::Headers;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// HTTP request.
///
/// An immutable value object - all state is private, accessors are pure
/// projections, and the consuming `with_*` methods return updated values
/// instead of mutating in place, following the same protocol as [`Uri`].
///
/// # Examples
///
/// ```
/// use minato_http::{Method, Request, Uri};
///
/// # fn main() -> Result<(), minato_http::uri::Error> {
/// // Create request
/// let req = Request::new()
///     .with_method(Method::Get)
///     .with_uri("http://example.com/path?query=value".parse()?)
///     .with_header("Accept", "text/html");
///
/// assert_eq!(req.target(), "/path?query=value");
/// assert_eq!(req.headers().get_line("Host"), "example.com");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Request {
    /// Request method.
    method: Method,
    /// Request URI.
    uri: Uri,
    /// Protocol version.
    version: Version,
    /// Request headers.
    headers: Headers,
    /// Request body.
    body: Vec<u8>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Request {
    /// Creates a request.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Request;
    ///
    /// // Create request
    /// let req = Request::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the request target in origin form.
    ///
    /// The target is the path followed by the query string, if any. An empty
    /// path yields `/`, so the target is never empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Request;
    ///
    /// // Create request
    /// let req = Request::new();
    /// assert_eq!(req.target(), "/");
    /// ```
    #[must_use]
    pub fn target(&self) -> String {
        let path = match self.uri.path() {
            "" => "/",
            path => path,
        };

        if self.uri.query().is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{}", self.uri.query())
        }
    }
}

#[allow(clippy::must_use_candidate)]
impl Request {
    /// Returns the method.
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
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

impl Request {
    /// Replaces the method.
    #[inline]
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Replaces the URI, updating the `Host` header.
    ///
    /// When the new URI carries a host, the `Host` header is set to it,
    /// including the default-elided port. Use
    /// [`Request::with_uri_preserving_host`] to keep an existing header.
    #[must_use]
    pub fn with_uri(self, uri: Uri) -> Self {
        Self { uri, ..self }.sync_host_header()
    }

    /// Replaces the URI, keeping an existing non-empty `Host` header.
    ///
    /// When no usable `Host` header is present, the header is synced from
    /// the new URI as in [`Request::with_uri`].
    #[must_use]
    pub fn with_uri_preserving_host(self, uri: Uri) -> Self {
        if self.headers.get_line("Host").is_empty() {
            Self { uri, ..self }.sync_host_header()
        } else {
            Self { uri, ..self }
        }
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
    /// use minato_http::Request;
    ///
    /// // Create request and set header
    /// let req = Request::new()
    ///     .with_header("Accept", "text/html");
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
    #[must_use]
    pub fn with_body<B>(mut self, body: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        self.body = body.into();
        self
    }

    /// Syncs the `Host` header from the URI, if the URI carries a host.
    fn sync_host_header(mut self) -> Self {
        if self.uri.host().is_empty() {
            return self;
        }

        let value = match self.uri.port() {
            Some(port) => format!("{}:{port}", self.uri.host()),
            None => self.uri.host().to_owned(),
        };
        self.headers.insert("Host", value);
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
        let req = Request::new();

        assert_eq!(req.method(), Method::Get);
        assert_eq!(req.version(), Version::Http11);
        assert_eq!(req.uri(), &Uri::new());
        assert!(req.headers().is_empty());
        assert!(req.body().is_empty());
    }

    #[test]
    fn test_target() {
        let test_cases = vec![
            ("", "/"),
            ("http://example.com", "/"),
            ("http://example.com/path", "/path"),
            ("http://example.com/path?query=value", "/path?query=value"),
            ("/path?query=value#fragment", "/path?query=value"),
        ];

        for (value, expected) in test_cases {
            let req = Request::new()
                .with_uri_preserving_host(
                    value.parse().expect("should parse"),
                );
            assert_eq!(req.target(), expected, "Failed for value: {value}");
        }
    }

    #[test]
    fn test_with_uri_syncs_host_header() {
        let req = Request::new()
            .with_uri("http://example.com:8080/".parse().expect("ok"));
        assert_eq!(req.headers().get_line("Host"), "example.com:8080");

        // The default port is elided from the header as well
        let req = req.with_uri("http://example.com:80/".parse().expect("ok"));
        assert_eq!(req.headers().get_line("Host"), "example.com");
    }

    #[test]
    fn test_with_uri_preserving_host() {
        let req = Request::new()
            .with_header("Host", "proxy.example.com")
            .with_uri_preserving_host(
                "http://example.com/".parse().expect("ok"),
            );
        assert_eq!(req.headers().get_line("Host"), "proxy.example.com");

        // Without a usable header, the host is synced from the URI
        let req = Request::new()
            .with_uri_preserving_host(
                "http://example.com/".parse().expect("ok"),
            );
        assert_eq!(req.headers().get_line("Host"), "example.com");
    }

    #[test]
    fn test_header_manipulation() {
        let req = Request::new()
            .with_header("Accept", "text/html")
            .with_added_header("accept", "text/plain")
            .with_header("X-Request-Id", "42");
        assert_eq!(
            req.headers().get_line("Accept"),
            "text/html, text/plain"
        );

        let req = req.without_header("ACCEPT");
        assert!(!req.headers().contains("Accept"));
        assert!(req.headers().contains("X-Request-Id"));
    }

    #[test]
    fn test_with_body() {
        let req = Request::new()
            .with_method(Method::Post)
            .with_body("query=search");
        assert_eq!(req.body(), b"query=search");
    }
}
