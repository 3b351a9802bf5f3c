// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::feeds::Feed;
use crate::nasa::apod::Apod;
use crate::ui::components::remote_image;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{scrollable, Column, Row};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ctx.slot(&ctx.feeds.apod, Feed::Apod, |apod| {
        content(ctx, apod)
    })
}

/// What the picture column shows for an entry.
#[derive(Debug, PartialEq, Eq)]
enum Picture<'a> {
    Image(&'a str),
    /// Not a picture, but there is an address to open it at.
    Link(&'a str),
    Missing,
}

fn picture(apod: &Apod) -> Picture<'_> {
    if let Some(url) = apod.image_url() {
        return Picture::Image(url);
    }
    match apod.url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => Picture::Link(url),
        None => Picture::Missing,
    }
}

fn content<'a>(ctx: &ViewContext<'a>, apod: &'a Apod) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match picture(apod) {
        Picture::Image(url) => remote_image::view(
            &ctx.image_context(),
            url,
            Length::FillPortion(3),
            sizing::FEATURE_IMAGE_HEIGHT,
        ),
        Picture::Link(url) => Column::new()
            .width(Length::FillPortion(3))
            .push(ctx.body(ctx.i18n.tr_with_args("apod-no-image", &[("url", url)])))
            .into(),
        Picture::Missing => Column::new()
            .width(Length::FillPortion(3))
            .push(ctx.body(ctx.i18n.tr("apod-missing-image")))
            .into(),
    };

    let text = Column::new()
        .spacing(spacing::SM)
        .push(ctx.heading(apod.title.as_str(), typography::TITLE_SM))
        .push(ctx.body(apod.explanation.as_str()))
        .push(ctx.caption(ctx.i18n.tr_with_args("apod-date", &[("date", apod.date.as_str())])));

    Row::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(picture)
        .push(
            scrollable(text)
                .width(Length::FillPortion(2))
                .height(Length::Fill),
        )
        .into()
}
