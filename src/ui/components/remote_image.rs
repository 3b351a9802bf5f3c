// SPDX-License-Identifier: MPL-2.0
//! A downloaded image, or the placeholder for its current download state.

use crate::i18n::fluent::I18n;
use crate::images::{self, ImageStore, RemoteImage};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::components::loading;
use crate::ui::design_tokens::sizing;
use iced::widget::{container, image, Image};
use iced::{ContentFit, Color, Element, Length};
use std::time::Instant;

/// Everything needed to draw one remote image.
pub struct ImageContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageStore,
    pub spinner_rotation: f32,
    pub accent: Color,
    /// Reveal opacity of the enclosing section.
    pub opacity: f32,
    /// Frame time, drives the fade-in of fresh downloads.
    pub now: Instant,
}

pub fn view<'a, Message: 'static>(
    ctx: &ImageContext<'a>,
    url: &str,
    width: Length,
    height: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.images.get(url) {
        Some(RemoteImage::Loaded { handle, at }) => Image::<image::Handle>::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(width)
            .height(Length::Fixed(height))
            .opacity(ctx.opacity * images::fade_in(*at, ctx.now))
            .into(),
        Some(RemoteImage::Failed(message)) => ErrorDisplay::new(ErrorSeverity::Warning)
            .message(
                ctx.i18n
                    .tr_with_args("error-image-unavailable", &[("message", message.as_str())]),
            )
            .compact()
            .view(),
        // Not requested yet counts as loading: requests are issued right
        // after the owning feed settles.
        Some(RemoteImage::Loading) | None => loading::view(
            ctx.i18n.tr("loading-image"),
            ctx.spinner_rotation,
            ctx.accent,
            sizing::SPINNER / 1.5,
        ),
    };

    container(content)
        .width(width)
        .height(Length::Fixed(height))
        .center_x(width)
        .center_y(Length::Fixed(height))
        .into()
}
