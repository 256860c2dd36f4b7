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

//! Encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Character set to be percent-encoded in userinfo tokens.
///
/// Everything outside the unreserved and sub-delims classes is encoded. Note
/// that `:` is part of the encoded set, as the user-password separator is
/// inserted by the caller, and `%` is encoded as well, so already-encoded
/// input is encoded again rather than inspected.
#[rustfmt::skip]
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-').remove(b'.').remove(b'_').remove(b'~').remove(b'!')
    .remove(b'$').remove(b'&').remove(b'\'').remove(b'(').remove(b')')
    .remove(b'*').remove(b'+').remove(b',').remove(b';').remove(b'=');

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Encodes a single userinfo token, i.e., a user or password.
#[inline]
#[must_use]
pub(crate) fn encode_userinfo(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, USERINFO).into()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_userinfo() {
        let test_cases = vec![
            ("user", "user"),
            ("kento-oka", "kento-oka"),
            ("p@ss:word", "p%40ss%3Aword"),
            ("100%", "100%25"),
            ("sub!$&delims", "sub!$&delims"),
            ("käse", "k%C3%A4se"),
        ];

        for (value, expected) in test_cases {
            assert_eq!(
                encode_userinfo(value),
                expected,
                "Failed for value: {value}"
            );
        }
    }
}
