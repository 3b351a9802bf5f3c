// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared by the page sections.
//!
//! # Components
//!
//! - [`error_display`] - Failure message with a severity accent
//! - [`loading`] - Spinner with a caption for pending content
//! - [`remote_image`] - Downloaded image or its loading/failure placeholder

pub mod error_display;
pub mod loading;
pub mod remote_image;
