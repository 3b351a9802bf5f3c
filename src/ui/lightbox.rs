// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay showing the selected image at full size.

use crate::i18n::fluent::I18n;
use crate::images::ImageStore;
use crate::ui::components::remote_image::{self, ImageContext};
use crate::ui::design_tokens::{opacity, sizing, spacing};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageStore,
    pub colors: ColorScheme,
    pub spinner_rotation: f32,
    pub url: &'a str,
    /// Current window height, used to size the image.
    pub window_height: f32,
    pub now: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new(ctx.i18n.tr("lightbox-close")))
        .on_press(Message::Close)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::overlay_close);

    let image_ctx = ImageContext {
        i18n: ctx.i18n,
        images: ctx.images,
        spinner_rotation: ctx.spinner_rotation,
        accent: ctx.colors.brand,
        opacity: opacity::OPAQUE,
        now: ctx.now,
    };
    let image_height = (ctx.window_height - 4.0 * spacing::XXL).max(spacing::XXL);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(close),
        )
        .push(remote_image::view(
            &image_ctx,
            ctx.url,
            Length::Fill,
            image_height,
        ));

    container(content)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.colors))
        .into()
}
