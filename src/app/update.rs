// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::{Message, PageViewport, PAGE_SCROLLABLE_ID};
use crate::error::Error;
use crate::feeds::{FeedResult, Feeds};
use crate::images::ImageStore;
use crate::lightbox::Lightbox;
use crate::nasa::Client;
use crate::reveal;
use crate::section::{content_height, Section, Span, PAGE_PADDING};
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::sections;
use crate::ui::widgets::animated_spinner;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::time::Instant;

/// Mutable view over the `App` fields the handlers touch.
pub(super) struct UpdateContext<'a> {
    pub client: &'a Result<Client, Error>,
    pub feeds: &'a mut Feeds,
    pub images: &'a mut ImageStore,
    pub reveal: &'a mut reveal::Tracker,
    pub lightbox: &'a mut Lightbox,
    pub viewport: &'a mut PageViewport,
    pub window_size: &'a mut Option<Size>,
    pub initial_section: &'a mut Option<Section>,
    pub spinner_rotation: &'a mut f32,
    pub now: &'a mut Instant,
}

impl UpdateContext<'_> {
    fn observe_viewport(&mut self) {
        *self.now = Instant::now();
        let span = Span::viewport(self.viewport.offset_y, self.viewport.height);
        self.reveal.observe(span, *self.now);
    }

    /// Largest offset the page can scroll to with the current viewport.
    fn max_offset(&self) -> f32 {
        (content_height() - self.viewport.height).max(0.0)
    }
}

/// Stores a feed result and starts downloads for the images it carries.
pub(super) fn handle_feed_settled(ctx: &mut UpdateContext<'_>, result: FeedResult) -> Task<Message> {
    let urls = ctx.feeds.apply(result);
    request_images(ctx, urls)
}

fn request_images(ctx: &mut UpdateContext<'_>, urls: Vec<String>) -> Task<Message> {
    let client = ctx.client;
    let images = &mut *ctx.images;

    let tasks: Vec<_> = urls
        .into_iter()
        .filter(|url| images.request(url))
        .map(|url| match client {
            Ok(client) => {
                let client = client.clone();
                let target = url.clone();
                Task::perform(async move { client.image(&target).await }, move |result| {
                    Message::ImageFetched { url, result }
                })
            }
            Err(err) => Task::done(Message::ImageFetched {
                url,
                result: Err(err.clone()),
            }),
        })
        .collect();

    Task::batch(tasks)
}

pub(super) fn handle_scrolled(
    ctx: &mut UpdateContext<'_>,
    offset_y: f32,
    viewport_height: f32,
) -> Task<Message> {
    ctx.viewport.offset_y = offset_y.max(0.0);
    ctx.viewport.height = viewport_height.max(0.0);
    ctx.observe_viewport();
    Task::none()
}

/// The page scrollable fills the window below the fixed header.
pub(super) fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = Some(size);
    ctx.viewport.height = (size.height - sizing::HEADER_HEIGHT).max(0.0);
    ctx.viewport.offset_y = ctx.viewport.offset_y.min(ctx.max_offset());

    match ctx.initial_section.take() {
        Some(section) => {
            tracing::info!(?section, "scrolling to launch section");
            scroll_to(ctx, section)
        }
        None => {
            ctx.observe_viewport();
            Task::none()
        }
    }
}

pub(super) fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ScrollTo(section) => scroll_to(ctx, section),
    }
}

pub(super) fn handle_section_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::OpenImage(url) => {
            ctx.lightbox.open(url);
            Task::none()
        }
    }
}

pub(super) fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    *ctx.now = now;
    ctx.reveal.tick(now);
    if ctx.feeds.any_pending() || ctx.images.any_loading() {
        *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    }
}

/// Moves the page so `section` sits at the top of the viewport.
///
/// The viewport is updated right away so the reveal check does not wait for
/// the scrollable to report back.
fn scroll_to(ctx: &mut UpdateContext<'_>, section: Section) -> Task<Message> {
    let max_offset = ctx.max_offset();
    let target = (section.span().top - PAGE_PADDING).clamp(0.0, max_offset);

    ctx.viewport.offset_y = target;
    ctx.observe_viewport();

    let relative_y = if max_offset > 0.0 {
        target / max_offset
    } else {
        0.0
    };

    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: relative_y,
        },
    )
}
