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

//! Ambient request URI reconstruction.

use std::collections::BTreeMap;

use super::{Error, Result, Uri};

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Uri {
    /// Reconstructs the request URI from CGI-style server parameters.
    ///
    /// The parameters are passed in explicitly as a map - this method never
    /// reaches into process-wide state. The following keys are consulted:
    ///
    /// - `REQUEST_SCHEME`, then the `HTTPS` flag (`off` or empty meaning
    ///   `http`, anything else `https`), then `http` as a last resort
    /// - `HTTP_HOST`, then `SERVER_NAME`, then `SERVER_ADDR`, each combined
    ///   with `SERVER_PORT` when present; an IPv6 server address is wrapped
    ///   in brackets before use
    /// - `REQUEST_URI` for path and query, defaulting to `/`
    ///
    /// The synthesized string is parsed through the same path as
    /// [`Uri::from_str`][], so the result satisfies every construction
    /// invariant.
    ///
    /// [`Uri::from_str`]: std::str::FromStr::from_str
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Resolution`], if neither a host header,
    /// a server name, nor a server address is present, or if `SERVER_PORT`
    /// does not hold a valid port, and [`Error::Parse`], if the synthesized
    /// string does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use minato_http::Uri;
    ///
    /// # fn main() -> Result<(), minato_http::uri::Error> {
    /// // Reconstruct URI from server parameters
    /// let params = BTreeMap::from([
    ///     ("HTTP_HOST".to_owned(), "example.com".to_owned()),
    ///     ("REQUEST_URI".to_owned(), "/path?query=value".to_owned()),
    /// ]);
    /// let uri = Uri::from_server_params(&params)?;
    /// assert_eq!(uri.to_string(), "http://example.com/path?query=value");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_server_params(
        params: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let scheme = resolve_scheme(params);
        let authority = resolve_authority(params)?;
        let path_and_query =
            params.get("REQUEST_URI").map_or("/", String::as_str);

        format!("{scheme}://{authority}{path_and_query}").parse()
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Resolves the scheme from the server parameters.
fn resolve_scheme(params: &BTreeMap<String, String>) -> String {
    if let Some(scheme) = params.get("REQUEST_SCHEME") {
        return scheme.to_ascii_lowercase();
    }

    // Fall back to the HTTPS flag, which some servers set to `on`/`off` and
    // others only set when TLS is active
    if let Some(https) = params.get("HTTPS") {
        let scheme =
            if https == "off" || https.is_empty() { "http" } else { "https" };
        return scheme.to_owned();
    }

    "http".to_owned()
}

/// Resolves the host and port from the server parameters.
fn resolve_authority(params: &BTreeMap<String, String>) -> Result<String> {
    if let Some(host) = params.get("HTTP_HOST") {
        return Ok(host.clone());
    }

    // The port must be validated before use, since the authority string is
    // reparsed afterwards and a bad port would surface as a confusing parse
    // error instead of a resolution error
    let port = match params.get("SERVER_PORT") {
        Some(port) => match port.parse::<u16>() {
            Ok(port) if port > 0 => Some(port),
            _ => return Err(Error::Resolution),
        },
        None => None,
    };
    let suffix = port.map(|port| format!(":{port}")).unwrap_or_default();

    if let Some(name) = params.get("SERVER_NAME") {
        return Ok(format!("{name}{suffix}"));
    }

    // An IPv6 server address needs brackets to separate it from the port
    if let Some(addr) = params.get("SERVER_ADDR") {
        if addr.contains(':') {
            return Ok(format!("[{addr}]{suffix}"));
        }
        return Ok(format!("{addr}{suffix}"));
    }

    Err(Error::Resolution)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a parameter map from string pairs.
    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn test_resolves_from_host_header() {
        let uri = Uri::from_server_params(&params(&[
            ("HTTP_HOST", "example.com:8080"),
            ("REQUEST_URI", "/path?query=value"),
        ]))
        .expect("should resolve");

        assert_eq!(
            uri.to_string(),
            "http://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_resolves_scheme() {
        let test_cases = vec![
            (vec![("REQUEST_SCHEME", "HTTPS")], "https"),
            (vec![("REQUEST_SCHEME", "http")], "http"),
            (vec![("HTTPS", "on")], "https"),
            (vec![("HTTPS", "1")], "https"),
            (vec![("HTTPS", "off")], "http"),
            (vec![("HTTPS", "")], "http"),
            (vec![], "http"),
        ];

        for (pairs, expected) in test_cases {
            let mut pairs = pairs;
            pairs.push(("HTTP_HOST", "example.com"));

            let uri = Uri::from_server_params(&params(&pairs))
                .expect("should resolve");
            assert_eq!(
                uri.scheme(),
                expected,
                "Failed for params: {pairs:?}"
            );
        }
    }

    #[test]
    fn test_resolves_from_server_name() {
        let uri = Uri::from_server_params(&params(&[
            ("SERVER_NAME", "example.com"),
            ("SERVER_PORT", "8080"),
        ]))
        .expect("should resolve");

        assert_eq!(uri.to_string(), "http://example.com:8080/");
    }

    #[test]
    fn test_resolves_from_server_addr() {
        let uri = Uri::from_server_params(&params(&[(
            "SERVER_ADDR",
            "192.168.0.1",
        )]))
        .expect("should resolve");
        assert_eq!(uri.to_string(), "http://192.168.0.1/");

        // IPv6 addresses are bracketed
        let uri = Uri::from_server_params(&params(&[
            ("SERVER_ADDR", "2001:db8::1"),
            ("SERVER_PORT", "8080"),
        ]))
        .expect("should resolve");
        assert_eq!(uri.host(), "[2001:db8::1]");
        assert_eq!(uri.port(), Some(8080));
    }

    #[test]
    fn test_defaults_path_to_root() {
        let uri =
            Uri::from_server_params(&params(&[("HTTP_HOST", "example.com")]))
                .expect("should resolve");
        assert_eq!(uri.path(), "/");
    }

    #[test]
    fn test_fails_without_host() {
        let result = Uri::from_server_params(&params(&[]));
        assert_eq!(result, Err(Error::Resolution));
    }

    #[test]
    fn test_fails_for_invalid_server_port() {
        let result = Uri::from_server_params(&params(&[
            ("SERVER_NAME", "example.com"),
            ("SERVER_PORT", "no-port"),
        ]));
        assert_eq!(result, Err(Error::Resolution));
    }
}
