// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header stays fixed above one vertical scrollable holding the four
//! sections. The lightbox and the startup warning are stacked on top.

use super::{Message, PAGE_SCROLLABLE_ID, WINDOW_DEFAULT_HEIGHT};
use crate::feeds::Feeds;
use crate::i18n::fluent::I18n;
use crate::images::ImageStore;
use crate::lightbox::Lightbox;
use crate::reveal;
use crate::section::{Section, PAGE_PADDING, SECTION_GAP};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections::{self, ViewContext as SectionViewContext};
use crate::ui::design_tokens::spacing;
use crate::ui::lightbox::{self as lightbox_view, ViewContext as LightboxViewContext};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::scrollable::Viewport;
use iced::widget::{container, opaque, Column, Container, Id, Scrollable, Stack};
use iced::{alignment, Element, Length, Size};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub feeds: &'a Feeds,
    pub images: &'a ImageStore,
    pub reveal: &'a reveal::Tracker,
    pub lightbox: &'a Lightbox,
    pub window_size: Option<Size>,
    pub spinner_rotation: f32,
    pub now: Instant,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_mode(ctx.theme_mode);

    let header = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        colors,
    })
    .map(Message::Navbar);

    let page = Column::new()
        .push(header)
        .push(view_page(&ctx, colors))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page(colors)),
        );

    if let Some(key) = ctx.config_warning {
        let banner = ErrorDisplay::new(ErrorSeverity::Warning)
            .message(ctx.i18n.tr(key))
            .compact()
            .view();
        layers = layers.push(
            container(container(banner).padding(spacing::SM).style(styles::container::card(colors)))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom),
        );
    }

    if let Some(url) = ctx.lightbox.selected() {
        let window_height = ctx
            .window_size
            .map_or(WINDOW_DEFAULT_HEIGHT as f32, |size| size.height);
        let overlay = lightbox_view::view(LightboxViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
            colors,
            spinner_rotation: ctx.spinner_rotation,
            url,
            window_height,
            now: ctx.now,
        })
        .map(Message::Lightbox);
        layers = layers.push(opaque(overlay));
    }

    layers.into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let sections = Section::ALL.iter().fold(
        Column::new()
            .spacing(SECTION_GAP)
            .padding(PAGE_PADDING)
            .width(Length::Fill),
        |column, section| {
            let section_ctx = SectionViewContext {
                i18n: ctx.i18n,
                feeds: ctx.feeds,
                images: ctx.images,
                colors,
                spinner_rotation: ctx.spinner_rotation,
                presentation: ctx.reveal.presentation(*section, ctx.now),
                reveal: ctx.reveal,
                now: ctx.now,
            };
            column.push(sections::view(*section, &section_ctx).map(Message::Section))
        },
    );

    Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        })
        .into()
}
