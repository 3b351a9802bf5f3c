// SPDX-License-Identifier: MPL-2.0
//! EPIC full-disc image next to the static GIBS tile. The two slots settle
//! independently and each keeps its own loading and failure state.

use super::{Message, ViewContext};
use crate::feeds::Feed;
use crate::ui::components::remote_image;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Row};
use iced::{alignment, Element, Length};

const EARTH_IMAGE_HEIGHT: f32 = sizing::FEATURE_IMAGE_HEIGHT - 40.0;

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let epic = ctx.slot(&ctx.feeds.epic, Feed::Epic, |epic| {
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(ctx.heading(ctx.i18n.tr("epic-heading"), typography::TITLE_SM))
            .push(remote_image::view(
                &ctx.image_context(),
                &epic.image_url,
                Length::Fill,
                EARTH_IMAGE_HEIGHT,
            ))
            .push(ctx.caption(epic.caption.as_str()))
            .push(ctx.caption(
                ctx.i18n
                    .tr_with_args("epic-date", &[("date", epic.date.as_str())]),
            ))
            .into()
    });

    let tile = ctx.slot(&ctx.feeds.tile, Feed::Tile, |tile| {
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(ctx.heading(ctx.i18n.tr("tile-heading"), typography::TITLE_SM))
            .push(remote_image::view(
                &ctx.image_context(),
                &tile.image_url,
                Length::Fill,
                EARTH_IMAGE_HEIGHT,
            ))
            .into()
    });

    Row::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(Column::new().width(Length::FillPortion(1)).push(epic))
        .push(Column::new().width(Length::FillPortion(1)).push(tile))
        .into()
}
