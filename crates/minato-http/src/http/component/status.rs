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

//! HTTP status.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use super::super::error::Error;

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Default for Status {
    /// Creates the default status.
    #[inline]
    fn default() -> Self {
        Status::Ok
    }
}

// ----------------------------------------------------------------------------

impl AsRef<str> for Status {
    /// Returns the string representation.
    #[inline]
    fn as_ref(&self) -> &str {
        self.reason()
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Status {
    /// Formats the status for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = *self as u16;
        f.write_str(code.to_string().as_str())?;
        f.write_str(" ")?;
        f.write_str(self.reason())
    }
}

// ----------------------------------------------------------------------------
// Macros
// ----------------------------------------------------------------------------

/// Defines and implements HTTP status codes.
macro_rules! define_and_impl_status {
    (
        $(
            // Status group
            $(#[$_:meta])*
            $group:ident:
            {
                $(
                    // Status definition
                    $(#[$comment:meta])*
                    $name:ident = $code:expr, $reason:expr
                ),+
                $(,)?
            }
        )+
    ) => {
        /// HTTP status.
        #[allow(clippy::enum_variant_names)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Status {
            $(
                $(
                    $(#[$comment])*
                    $name = $code,
                )+
            )+
        }

        impl Status {
            /// Returns the status code.
            ///
            /// # Examples
            ///
            /// ```
            /// use minato_http::Status;
            ///
            /// // Create status
            /// let status = Status::NotFound;
            ///
            /// // Obtain status code
            /// assert_eq!(status.code(), 404);
            /// ```
            #[must_use]
            pub const fn code(&self) -> u16 {
                *self as u16
            }

            /// Returns the reason phrase.
            ///
            /// # Examples
            ///
            /// ```
            /// use minato_http::Status;
            ///
            /// // Create status
            /// let status = Status::NotModified;
            ///
            /// // Obtain reason phrase
            /// assert_eq!(status.reason(), "Not Modified");
            /// ```
            #[must_use]
            pub const fn reason(&self) -> &'static str {
                match self {
                    $(
                        $(
                            Status::$name => $reason,
                        )+
                    )+
                }
            }
        }

        /// Lookup table for HTTP status codes.
        static STATUS_LOOKUP_TABLE: LazyLock<HashMap<u16, Status>> =
            LazyLock::new(|| {
                HashMap::from_iter([
                    $(
                        $(
                            ($code, Status::$name),
                        )+
                    )+
                ])
            });

        impl TryFrom<u16> for Status {
            type Error = Error;

            /// Attempts to create a status from a status code.
            ///
            /// # Errors
            ///
            /// This method returns [`Error::Status`], if the code does not
            /// match one of the known status codes.
            ///
            /// # Examples
            ///
            /// ```
            /// # use std::error::Error;
            /// # fn main() -> Result<(), Box<dyn Error>> {
            /// use minato_http::Status;
            ///
            /// // Create status from status code
            /// let status = Status::try_from(404)?;
            /// assert_eq!(status, Status::NotFound);
            /// # Ok(())
            /// # }
            /// ```
            fn try_from(value: u16) -> Result<Self, Error> {
                STATUS_LOOKUP_TABLE
                    .get(&value)
                    .copied()
                    .ok_or(Error::Status(value))
            }
        }
    };
}

define_and_impl_status! {
    /// Informational responses.
    Informational:
    {
        /// `100 Continue`.
        Continue = 100, "Continue",
        /// `101 Switching Protocols`.
        SwitchingProtocols = 101, "Switching Protocols",
    }

    /// Successful responses.
    Success:
    {
        /// `200 OK`.
        Ok = 200, "OK",
        /// `201 Created`.
        Created = 201, "Created",
        /// `202 Accepted`.
        Accepted = 202, "Accepted",
        /// `204 No Content`.
        NoContent = 204, "No Content",
        /// `206 Partial Content`.
        PartialContent = 206, "Partial Content",
    }

    /// Redirection responses.
    Redirection:
    {
        /// `301 Moved Permanently`.
        MovedPermanently = 301, "Moved Permanently",
        /// `302 Found`.
        Found = 302, "Found",
        /// `303 See Other`.
        SeeOther = 303, "See Other",
        /// `304 Not Modified`.
        NotModified = 304, "Not Modified",
        /// `307 Temporary Redirect`.
        TemporaryRedirect = 307, "Temporary Redirect",
        /// `308 Permanent Redirect`.
        PermanentRedirect = 308, "Permanent Redirect",
    }

    /// Client error responses.
    ClientError:
    {
        /// `400 Bad Request`.
        BadRequest = 400, "Bad Request",
        /// `401 Unauthorized`.
        Unauthorized = 401, "Unauthorized",
        /// `403 Forbidden`.
        Forbidden = 403, "Forbidden",
        /// `404 Not Found`.
        NotFound = 404, "Not Found",
        /// `405 Method Not Allowed`.
        MethodNotAllowed = 405, "Method Not Allowed",
        /// `406 Not Acceptable`.
        NotAcceptable = 406, "Not Acceptable",
        /// `409 Conflict`.
        Conflict = 409, "Conflict",
        /// `410 Gone`.
        Gone = 410, "Gone",
        /// `411 Length Required`.
        LengthRequired = 411, "Length Required",
        /// `413 Payload Too Large`.
        PayloadTooLarge = 413, "Payload Too Large",
        /// `414 URI Too Long`.
        UriTooLong = 414, "URI Too Long",
        /// `415 Unsupported Media Type`.
        UnsupportedMediaType = 415, "Unsupported Media Type",
        /// `422 Unprocessable Content`.
        UnprocessableContent = 422, "Unprocessable Content",
        /// `429 Too Many Requests`.
        TooManyRequests = 429, "Too Many Requests",
        /// `431 Request Header Fields Too Large`.
        RequestHeaderFieldsTooLarge = 431, "Request Header Fields Too Large",
    }

    /// Server error responses.
    ServerError:
    {
        /// `500 Internal Server Error`.
        InternalServerError = 500, "Internal Server Error",
        /// `501 Not Implemented`.
        NotImplemented = 501, "Not Implemented",
        /// `502 Bad Gateway`.
        BadGateway = 502, "Bad Gateway",
        /// `503 Service Unavailable`.
        ServiceUnavailable = 503, "Service Unavailable",
        /// `504 Gateway Timeout`.
        GatewayTimeout = 504, "Gateway Timeout",
        /// `505 HTTP Version Not Supported`.
        HttpVersionNotSupported = 505, "HTTP Version Not Supported",
    }
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

#[allow(clippy::must_use_candidate)]
impl Status {
    /// Returns whether the status is informational (1xx).
    #[inline]
    pub const fn is_informational(&self) -> bool {
        matches!(self.code(), 100..=199)
    }

    /// Returns whether the status is successful (2xx).
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.code(), 200..=299)
    }

    /// Returns whether the status is a redirection (3xx).
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.code(), 300..=399)
    }

    /// Returns whether the status is a client error (4xx).
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.code(), 400..=499)
    }

    /// Returns whether the status is a server error (5xx).
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.code(), 500..=599)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Status::Ok.to_string(), "200 OK");
        assert_eq!(Status::NotFound.to_string(), "404 Not Found");
    }

    #[test]
    fn test_try_from_code() {
        let test_cases = vec![
            (200, Ok(Status::Ok)),
            (304, Ok(Status::NotModified)),
            (500, Ok(Status::InternalServerError)),
            (299, Err(Error::Status(299))),
        ];

        for (code, expected) in test_cases {
            assert_eq!(
                Status::try_from(code),
                expected,
                "Failed for code: {code}"
            );
        }
    }

    #[test]
    fn test_classes() {
        assert!(Status::Continue.is_informational());
        assert!(Status::NoContent.is_success());
        assert!(Status::Found.is_redirection());
        assert!(Status::Gone.is_client_error());
        assert!(Status::BadGateway.is_server_error());
        assert!(!Status::Ok.is_client_error());
    }
}
