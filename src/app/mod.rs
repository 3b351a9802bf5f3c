// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the five feed slots, the downloaded images, the
//! reveal tracker and the lightbox. Network work is started from `new` and
//! from feed completions; everything else is local state driven by scroll,
//! resize, click and tick messages.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::feeds::{self, Feeds};
use crate::i18n::fluent::I18n;
use crate::images::ImageStore;
use crate::lightbox::Lightbox;
use crate::nasa::Client;
use crate::reveal;
use crate::section::Section;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Identifier of the page scrollable, used for programmatic scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "stellar-view-page";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Scroll position of the page as last reported or requested.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageViewport {
    pub offset_y: f32,
    pub height: f32,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Shared HTTP client, or the reason it could not be built.
    client: Result<Client, Error>,
    feeds: Feeds,
    images: ImageStore,
    reveal: reveal::Tracker,
    lightbox: Lightbox,
    viewport: PageViewport,
    window_size: Option<Size>,
    /// Section requested on the command line, consumed once the window
    /// size is known.
    initial_section: Option<Section>,
    spinner_rotation: f32,
    /// Time of the last processed message, used for animation sampling.
    now: Instant,
    /// Localization key of a startup warning, shown as a banner.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("feeds_pending", &self.feeds.any_pending())
            .field("images", &self.images)
            .field("lightbox_open", &self.lightbox.is_open())
            .field("viewport", &self.viewport)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config, config_warning: Option<String>) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the launch inputs are
    // consumed on the first call only.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes state and starts every feed request.
    fn new(flags: Flags, config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut nasa = config.nasa.clone();
        nasa.api_key = config::resolve_api_key(flags.api_key.clone(), &config.nasa);
        let fallback_settings = nasa.clone();
        let client = Client::new(nasa);

        let initial_section = flags.section.as_deref().and_then(|name| {
            let section = Section::from_route(name);
            if section.is_none() {
                tracing::warn!(section = name, "unknown section ignored");
            }
            section
        });

        let task = match &client {
            Ok(client) => feeds::fan_out(client),
            Err(err) => {
                tracing::error!(error = %err, "HTTP client unavailable");
                feeds::unavailable(err, &fallback_settings)
            }
        }
        .map(Message::FeedSettled);

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            client,
            feeds: Feeds::default(),
            images: ImageStore::new(config.display.image_cache_entries()),
            reveal: reveal::Tracker::new(),
            lightbox: Lightbox::default(),
            viewport: PageViewport::default(),
            window_size: None,
            initial_section,
            spinner_rotation: 0.0,
            now: Instant::now(),
            config_warning,
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.lightbox.selected() {
            Some(_) => format!(
                "{} - {}",
                self.i18n.tr("lightbox-title"),
                self.i18n.tr("window-title")
            ),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.reveal.is_animating() || self.images.any_fading(self.now),
            self.feeds.any_pending() || self.images.any_loading(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            client: &self.client,
            feeds: &mut self.feeds,
            images: &mut self.images,
            reveal: &mut self.reveal,
            lightbox: &mut self.lightbox,
            viewport: &mut self.viewport,
            window_size: &mut self.window_size,
            initial_section: &mut self.initial_section,
            spinner_rotation: &mut self.spinner_rotation,
            now: &mut self.now,
        };

        match message {
            Message::FeedSettled(result) => update::handle_feed_settled(&mut ctx, result),
            Message::ImageFetched { url, result } => {
                let now = Instant::now();
                ctx.images.finish(&url, result, now);
                *ctx.now = now;
                Task::none()
            }
            Message::Scrolled {
                offset_y,
                viewport_height,
            } => update::handle_scrolled(&mut ctx, offset_y, viewport_height),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Section(section_message) => {
                update::handle_section_message(&mut ctx, section_message)
            }
            Message::Lightbox(crate::ui::lightbox::Message::Close) | Message::EscapePressed => {
                ctx.lightbox.close();
                Task::none()
            }
            Message::Tick(now) => {
                update::handle_tick(&mut ctx, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            feeds: &self.feeds,
            images: &self.images,
            reveal: &self.reveal,
            lightbox: &self.lightbox,
            window_size: self.window_size,
            spinner_rotation: self.spinner_rotation,
            now: self.now,
            config_warning: self.config_warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::FeedResult;
    use crate::nasa::apod::{Apod, MediaKind};
    use crate::nasa::library::LibraryItem;
    use crate::reveal::Phase;
    use crate::section::{content_height, SECTION_GAP, SECTION_HEIGHT};
    use crate::ui::design_tokens::sizing;
    use crate::ui::{lightbox, navbar, sections};

    fn app_with(flags: Flags) -> App {
        let (app, _task) = App::new(flags, Config::default(), None);
        app
    }

    fn app() -> App {
        app_with(Flags::default())
    }

    fn apod() -> Apod {
        Apod {
            title: "Pillars".into(),
            explanation: "Gas and dust".into(),
            date: "2024-03-05".into(),
            url: Some("https://apod.nasa.gov/pillars.jpg".into()),
            media: MediaKind::Image,
        }
    }

    fn window(height: f32) -> Size {
        Size::new(1100.0, height + sizing::HEADER_HEIGHT)
    }

    #[test]
    fn new_app_starts_with_every_feed_pending() {
        let app = app();
        assert!(app.feeds.any_pending());
        assert!(!app.images.any_loading());
        assert!(!app.lightbox.is_open());
        assert!(!app.reveal.is_animating());
    }

    #[test]
    fn settled_feed_requests_its_image() {
        let mut app = app();
        let _ = app.update(Message::FeedSettled(FeedResult::Apod(Ok(apod()))));

        assert_eq!(app.feeds.apod.ready(), Some(&apod()));
        assert!(app.images.get("https://apod.nasa.gov/pillars.jpg").is_some());
        assert!(app.feeds.mars.is_pending());
    }

    #[test]
    fn failed_feed_requests_nothing() {
        let mut app = app();
        let _ = app.update(Message::FeedSettled(FeedResult::Mars(Err(Error::Status(
            500,
        )))));

        assert_eq!(
            app.feeds.mars.failure(),
            Some("Request failed with status code 500")
        );
        assert!(!app.images.any_loading());
    }

    #[test]
    fn image_download_result_is_stored() {
        let mut app = app();
        let _ = app.update(Message::FeedSettled(FeedResult::Apod(Ok(apod()))));
        let _ = app.update(Message::ImageFetched {
            url: "https://apod.nasa.gov/pillars.jpg".into(),
            result: Err(Error::Status(404)),
        });

        assert!(!app.images.any_loading());
        // The slot keeps its content even though the picture failed.
        assert!(app.feeds.apod.ready().is_some());
    }

    #[test]
    fn downloaded_image_fades_in_then_settles() {
        let mut app = app();
        let _ = app.update(Message::FeedSettled(FeedResult::Apod(Ok(apod()))));
        let _ = app.update(Message::ImageFetched {
            url: "https://apod.nasa.gov/pillars.jpg".into(),
            result: Ok(vec![0xFF, 0xD8]),
        });
        assert!(app.images.any_fading(app.now));

        let _ = app.update(Message::Tick(app.now + crate::images::IMAGE_FADE));
        assert!(!app.images.any_fading(app.now));
    }

    #[test]
    fn first_window_size_reveals_visible_sections() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(window(500.0)));

        assert!(matches!(
            app.reveal.phase(Section::Apod),
            Phase::Revealing { .. }
        ));
        assert_eq!(app.reveal.phase(Section::Library), Phase::Hidden);
        assert_eq!(app.viewport.height, 500.0);
    }

    #[test]
    fn scrolling_reveals_lower_sections() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(window(500.0)));
        let library_top = Section::Library.span().top;
        let _ = app.update(Message::Scrolled {
            offset_y: library_top,
            viewport_height: 500.0,
        });

        assert!(matches!(
            app.reveal.phase(Section::Library),
            Phase::Revealing { .. }
        ));
    }

    #[test]
    fn library_click_opens_lightbox_and_escape_closes_it() {
        let mut app = app();
        let _ = app.update(Message::FeedSettled(FeedResult::Library(Ok(vec![
            LibraryItem {
                title: Some("Earth".into()),
                thumbnail_url: "https://images/earth.jpg".into(),
            },
        ]))));

        let _ = app.update(Message::Section(sections::Message::OpenImage(
            "https://images/earth.jpg".into(),
        )));
        assert_eq!(app.lightbox.selected(), Some("https://images/earth.jpg"));

        let _ = app.update(Message::EscapePressed);
        assert!(!app.lightbox.is_open());

        let _ = app.update(Message::Section(sections::Message::OpenImage(
            "https://images/earth.jpg".into(),
        )));
        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn navbar_jump_moves_viewport_to_section() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(window(500.0)));
        let _ = app.update(Message::Navbar(navbar::Message::JumpTo(Section::Mars)));

        let expected = Section::Mars.span().top - crate::section::PAGE_PADDING;
        assert!((app.viewport.offset_y - expected).abs() < f32::EPSILON);
        assert!(matches!(
            app.reveal.phase(Section::Mars),
            Phase::Revealing { .. }
        ));
    }

    #[test]
    fn jump_to_last_section_is_clamped_to_page_end() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(window(900.0)));
        let _ = app.update(Message::Navbar(navbar::Message::JumpTo(Section::Library)));

        let max_offset = content_height() - 900.0;
        assert!(app.viewport.offset_y <= max_offset + f32::EPSILON);
    }

    #[test]
    fn launch_section_scrolls_once() {
        let mut app = app_with(Flags {
            section: Some("earth".into()),
            ..Flags::default()
        });
        let _ = app.update(Message::WindowResized(window(500.0)));
        let earth_offset = app.viewport.offset_y;
        assert!(earth_offset > SECTION_HEIGHT + SECTION_GAP);

        let _ = app.update(Message::Scrolled {
            offset_y: 0.0,
            viewport_height: 500.0,
        });
        let _ = app.update(Message::WindowResized(window(600.0)));
        assert_eq!(app.viewport.offset_y, 0.0);
    }

    #[test]
    fn unknown_launch_section_is_ignored() {
        let app = app_with(Flags {
            section: Some("jupiter".into()),
            ..Flags::default()
        });
        assert!(app.initial_section.is_none());
    }

    #[test]
    fn tick_finishes_reveal_animation() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(window(500.0)));
        let later = Instant::now() + reveal::REVEAL_DURATION * 2;
        let _ = app.update(Message::Tick(later));

        assert_eq!(app.reveal.phase(Section::Apod), Phase::Revealed);
        assert!(!app.reveal.is_animating());
    }

    #[test]
    fn title_mentions_lightbox_when_open() {
        let mut app = app();
        assert_eq!(app.title(), "Stellar View");

        let _ = app.update(Message::Section(sections::Message::OpenImage(
            "https://images/earth.jpg".into(),
        )));
        assert!(app.title().ends_with("Stellar View"));
        assert_ne!(app.title(), "Stellar View");
    }
}
