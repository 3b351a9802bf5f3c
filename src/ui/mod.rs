// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`navbar`] - Header bar with section jump links
//! - [`sections`] - The four fixed-height page sections
//! - [`lightbox`] - Full-size image overlay
//! - [`components`] - Reusable pieces (error display, loading, remote image)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod lightbox;
pub mod navbar;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
