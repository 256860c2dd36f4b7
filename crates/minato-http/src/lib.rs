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

//! HTTP message abstractions.
//!
//! This crate provides the immutable value objects that frameworks and
//! middleware pipelines pass between handlers: requests, responses, and the
//! URIs they address. All types are plain values - construction validates,
//! accessors project, and `with_*` methods return updated copies instead of
//! mutating in place, so a message handed to a handler can never change
//! underneath it.
//!
//! The heart of the crate is the [`uri`] module, which implements parsing,
//! per-component validation, and copy-on-write mutation for HTTP and HTTPS
//! URIs. The [`http`] module builds the message types on top of it.

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod http;
pub mod uri;

pub use http::{Headers, Method, Request, Response, Status, Version};
pub use uri::Uri;
