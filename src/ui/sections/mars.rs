// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::feeds::Feed;
use crate::nasa::mars::MarsPhoto;
use crate::ui::components::remote_image;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::Column;
use iced::{alignment, Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ctx.slot(&ctx.feeds.mars, Feed::Mars, |photo| {
        content(ctx, photo)
    })
}

fn content<'a>(ctx: &ViewContext<'a>, photo: &'a MarsPhoto) -> Element<'a, Message> {
    let unknown = "n/a";
    let rover = photo.rover_name.as_deref().unwrap_or(unknown);
    let camera = photo.camera_name.as_deref().unwrap_or(unknown);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(remote_image::view(
            &ctx.image_context(),
            &photo.image_url,
            Length::Fill,
            sizing::FEATURE_IMAGE_HEIGHT,
        ))
        .push(ctx.body(ctx.i18n.tr_with_args("mars-rover", &[("rover", rover)])))
        .push(ctx.caption(ctx.i18n.tr_with_args("mars-camera", &[("camera", camera)])))
        .push(ctx.caption(
            ctx.i18n
                .tr_with_args("mars-date", &[("date", photo.earth_date.as_str())]),
        ))
        .into()
}
