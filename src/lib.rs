// SPDX-License-Identifier: MPL-2.0
//! `stellar_view` is a desktop viewer for NASA's public imagery feeds built
//! with the Iced GUI framework.
//!
//! On startup it requests the Astronomy Picture of the Day, a Mars rover
//! photo, the latest EPIC Earth image and a NASA Image Library search in
//! parallel, and shows each result in its own scroll-revealed section.

#![doc(html_root_url = "https://docs.rs/stellar_view/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod feeds;
pub mod i18n;
pub mod images;
pub mod lightbox;
pub mod logging;
pub mod nasa;
pub mod reveal;
pub mod section;
pub mod slot;
pub mod ui;
