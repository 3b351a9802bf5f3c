// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::feeds::FeedResult;
use crate::ui::{lightbox, navbar, sections};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// One feed request completed, successfully or not.
    FeedSettled(FeedResult),
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// The page scrollable reported its viewport.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    /// The window opened or changed size.
    WindowResized(Size),
    Navbar(navbar::Message),
    Section(sections::Message),
    Lightbox(lightbox::Message),
    /// Escape was pressed and nothing else captured it.
    EscapePressed,
    Tick(Instant), // Drives spinners and reveal animations
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Section to scroll to once the window is open.
    pub section: Option<String>,
    /// API key given with `--api-key`; wins over env and config.
    pub api_key: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STELLAR_VIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
