// SPDX-License-Identifier: MPL-2.0
//! Thin clients for the public NASA services shown by the viewer.
//!
//! Each submodule owns one feed: the raw response schema (only the fields we
//! read), the display payload derived from it, and an async `fetch` that
//! performs exactly one request through the shared [`Client`]. The transforms
//! are plain functions so they can be exercised without a network.

pub mod apod;
mod client;
pub mod epic;
pub mod gibs;
pub mod library;
pub mod mars;

pub use client::Client;

/// Joins a configured base URL and a path without doubling slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
