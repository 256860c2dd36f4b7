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

//! HTTP headers.

use std::collections::BTreeMap;
use std::fmt;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// HTTP headers.
///
/// A case-insensitive, multi-valued header bag, as both requests and
/// responses carry one. Lookups and removals match header names regardless of
/// casing, while the casing of the first insertion is preserved for display,
/// so a header added as `Content-Type` is found via `content-type` but still
/// written as `Content-Type` on the wire.
///
/// As keys are lowercased names, iteration and formatting order is by name,
/// not by insertion.
///
/// # Examples
///
/// ```
/// use minato_http::Headers;
///
/// // Create header bag and add header
/// let mut headers = Headers::new();
/// headers.insert("Content-Type", "text/plain");
///
/// // Obtain header values
/// assert_eq!(headers.get_line("content-type"), "text/plain");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Headers {
    /// Ordered map of headers, keyed by lowercased name.
    inner: BTreeMap<String, Entry>,
}

/// HTTP header entry.
#[derive(Clone, Debug)]
struct Entry {
    /// Header name as first inserted.
    name: String,
    /// Header values, in insertion order.
    values: Vec<String>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Headers {
    /// Creates a header bag.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Headers;
    ///
    /// // Create header bag
    /// let headers = Headers::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all values for the given header.
    ///
    /// An absent header yields an empty slice, so callers can iterate
    /// without distinguishing "absent" from "present without values".
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Headers;
    ///
    /// // Create header bag and add headers
    /// let mut headers = Headers::new();
    /// headers.append("Accept", "text/html");
    /// headers.append("Accept", "text/plain");
    ///
    /// // Obtain header values
    /// assert_eq!(headers.get("accept").len(), 2);
    /// ```
    #[must_use]
    pub fn get<K>(&self, name: K) -> &[String]
    where
        K: AsRef<str>,
    {
        self.inner
            .get(&name.as_ref().to_ascii_lowercase())
            .map_or(&[], |entry| entry.values.as_slice())
    }

    /// Returns all values for the given header as a single line.
    ///
    /// Multiple values are joined with `, `, and an absent header yields the
    /// empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Headers;
    ///
    /// // Create header bag and add headers
    /// let mut headers = Headers::new();
    /// headers.append("Accept", "text/html");
    /// headers.append("Accept", "text/plain");
    ///
    /// // Obtain header line
    /// assert_eq!(headers.get_line("Accept"), "text/html, text/plain");
    /// ```
    #[must_use]
    pub fn get_line<K>(&self, name: K) -> String
    where
        K: AsRef<str>,
    {
        self.get(name).join(", ")
    }

    /// Returns whether the header is contained.
    #[must_use]
    pub fn contains<K>(&self, name: K) -> bool
    where
        K: AsRef<str>,
    {
        self.inner.contains_key(&name.as_ref().to_ascii_lowercase())
    }

    /// Sets the given header, replacing any previous values.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Headers;
    ///
    /// // Create header bag and set header
    /// let mut headers = Headers::new();
    /// headers.insert("Content-Length", 13);
    /// ```
    pub fn insert<K, V>(&mut self, name: K, value: V)
    where
        K: AsRef<str>,
        V: ToString,
    {
        let name = name.as_ref();
        self.inner.insert(
            name.to_ascii_lowercase(),
            Entry { name: name.to_owned(), values: vec![value.to_string()] },
        );
    }

    /// Adds a value to the given header, keeping previous values.
    ///
    /// The display casing of an already present header is kept - only the
    /// value list grows.
    pub fn append<K, V>(&mut self, name: K, value: V)
    where
        K: AsRef<str>,
        V: ToString,
    {
        let name = name.as_ref();
        self.inner
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| Entry {
                name: name.to_owned(),
                values: Vec::new(),
            })
            .values
            .push(value.to_string());
    }

    /// Removes the given header.
    pub fn remove<K>(&mut self, name: K)
    where
        K: AsRef<str>,
    {
        self.inner.remove(&name.as_ref().to_ascii_lowercase());
    }

    /// Returns an iterator over all headers and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .values()
            .map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }
}

#[allow(clippy::must_use_candidate)]
impl Headers {
    /// Returns the number of distinct headers.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether there are any headers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: AsRef<str>,
    V: ToString,
{
    /// Creates a header bag from an iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use minato_http::Headers;
    ///
    /// // Create header bag from iterator
    /// let headers = Headers::from_iter([
    ///     ("Content-Type", "text/plain"),
    ///     ("Content-Length", "13"),
    /// ]);
    /// ```
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Headers {
    /// Formats the headers as CRLF-terminated wire lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, values) in self.iter() {
            for value in values {
                f.write_str(name)?;
                f.write_str(": ")?;
                f.write_str(value)?;
                f.write_str("\r\n")?;
            }
        }

        // No errors occurred
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/plain");

        assert!(headers.contains("content-type"));
        assert!(headers.contains("CONTENT-TYPE"));
        assert_eq!(headers.get("cOnTenT-tYpe"), ["text/plain"]);
    }

    #[test]
    fn test_insert_replaces_values() {
        let mut headers = Headers::new();
        headers.append("Accept", "text/html");
        headers.append("accept", "text/plain");
        headers.insert("ACCEPT", "application/json");

        assert_eq!(headers.get("Accept"), ["application/json"]);
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_append_keeps_first_seen_casing() {
        let mut headers = Headers::new();
        headers.append("X-Custom", "a");
        headers.append("x-custom", "b");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(
            entries,
            vec![("X-Custom", ["a".to_owned(), "b".to_owned()].as_slice())]
        );
    }

    #[test]
    fn test_get_line() {
        let mut headers = Headers::new();
        assert_eq!(headers.get_line("Accept"), "");

        headers.append("Accept", "text/html");
        headers.append("Accept", "text/plain");
        assert_eq!(headers.get_line("Accept"), "text/html, text/plain");
    }

    #[test]
    fn test_remove() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/plain");
        headers.remove("CONTENT-type");

        assert!(headers.is_empty());
        assert_eq!(headers.get("Content-Type"), [] as [String; 0]);
    }

    #[test]
    fn test_display() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/plain");
        headers.insert("Content-Length", 13);

        // Iteration order is by name
        assert_eq!(
            headers.to_string(),
            "Content-Length: 13\r\nContent-Type: text/plain\r\n"
        );
    }
}
