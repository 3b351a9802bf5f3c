// SPDX-License-Identifier: MPL-2.0
//! The four page sections and the shared pieces they are built from.
//!
//! Every section is a fixed-height card. The reveal animation moves the card
//! content down by the current offset inside that fixed frame and fades its
//! text and images, so the page geometry never changes while animating.

mod apod;
mod earth;
mod library;
mod mars;

use crate::feeds::{Feed, Feeds};
use crate::i18n::fluent::I18n;
use crate::images::ImageStore;
use crate::reveal::{Presentation, Tracker};
use crate::section::{Section, SECTION_HEIGHT};
use crate::slot::Slot;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::components::loading;
use crate::ui::components::remote_image::ImageContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, text, Column, Text};
use iced::{Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Messages emitted by section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A library thumbnail was clicked.
    OpenImage(String),
}

/// Contextual data needed to render a section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub feeds: &'a Feeds,
    pub images: &'a ImageStore,
    pub colors: ColorScheme,
    pub spinner_rotation: f32,
    /// Reveal state of the whole section.
    pub presentation: Presentation,
    pub reveal: &'a Tracker,
    pub now: Instant,
}

impl<'a> ViewContext<'a> {
    fn image_context(&self) -> ImageContext<'a> {
        self.image_context_at(self.presentation.opacity)
    }

    fn image_context_at(&self, opacity: f32) -> ImageContext<'a> {
        ImageContext {
            i18n: self.i18n,
            images: self.images,
            spinner_rotation: self.spinner_rotation,
            accent: self.colors.brand,
            opacity,
            now: self.now,
        }
    }

    fn faded(&self, color: Color) -> Color {
        with_alpha(color, self.presentation.opacity)
    }

    /// Body text in the primary color, faded with the section.
    fn body(&self, content: impl Into<String>) -> Text<'a> {
        let color = self.faded(self.colors.text_primary);
        Text::new(content.into())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style { color: Some(color) })
    }

    /// Secondary caption text, faded with the section.
    fn caption(&self, content: impl Into<String>) -> Text<'a> {
        self.caption_at(content, self.presentation.opacity)
    }

    fn caption_at(&self, content: impl Into<String>, opacity: f32) -> Text<'a> {
        let color = with_alpha(self.colors.text_secondary, opacity);
        Text::new(content.into())
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style { color: Some(color) })
    }

    fn heading(&self, content: impl Into<String>, size: f32) -> Text<'a> {
        let color = self.faded(self.colors.text_primary);
        Text::new(content.into())
            .size(size)
            .style(move |_theme: &Theme| text::Style { color: Some(color) })
    }

    /// Tri-state rendering of one slot: spinner, failure line or content.
    fn slot<T>(
        &self,
        slot: &'a Slot<T>,
        feed: Feed,
        content: impl FnOnce(&'a T) -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        match slot_view(self.i18n, slot, feed) {
            SlotView::Loading(label) => loading::view(
                label,
                self.spinner_rotation,
                self.colors.brand,
                sizing::SPINNER,
            ),
            SlotView::Error(line) => ErrorDisplay::new(ErrorSeverity::Error)
                .message(line)
                .view(),
            SlotView::Content(value) => content(value),
        }
    }
}

fn with_alpha(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Translation keys of one feed's placeholder and failure line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotKeys {
    loading: &'static str,
    error: &'static str,
}

fn slot_keys(feed: Feed) -> SlotKeys {
    let (loading, error) = match feed {
        Feed::Apod => ("loading-apod", "error-apod"),
        Feed::Mars => ("loading-mars", "error-mars"),
        Feed::Epic => ("loading-epic", "error-epic"),
        Feed::Tile => ("loading-tile", "error-tile"),
        Feed::Library => ("loading-library", "error-library"),
    };
    SlotKeys { loading, error }
}

/// What a slot shows. Exactly one of the three at any time.
#[derive(Debug)]
enum SlotView<'a, T> {
    Loading(String),
    Error(String),
    Content(&'a T),
}

fn slot_view<'a, T>(i18n: &I18n, slot: &'a Slot<T>, feed: Feed) -> SlotView<'a, T> {
    let keys = slot_keys(feed);
    match slot {
        Slot::Pending => SlotView::Loading(i18n.tr(keys.loading)),
        Slot::Failed(message) => SlotView::Error(
            i18n.tr_with_args(keys.error, &[("message", message.as_str())]),
        ),
        Slot::Ready(value) => SlotView::Content(value),
    }
}

fn title_key(section: Section) -> &'static str {
    match section {
        Section::Apod => "section-apod-title",
        Section::Mars => "section-mars-title",
        Section::Earth => "section-earth-title",
        Section::Library => "section-library-title",
    }
}

/// Renders `section` inside its fixed-height animated card.
pub fn view<'a>(section: Section, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body = match section {
        Section::Apod => apod::view(ctx),
        Section::Mars => mars::view(ctx),
        Section::Earth => earth::view(ctx),
        Section::Library => library::view(ctx),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(ctx.heading(ctx.i18n.tr(title_key(section)), typography::TITLE_LG))
        .push(body);

    container(content)
        .padding(Padding {
            top: spacing::LG + ctx.presentation.offset_y,
            ..Padding::new(spacing::LG)
        })
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_HEIGHT))
        .clip(true)
        .style(styles::container::card(ctx.colors))
        .into()
}
