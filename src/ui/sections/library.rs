// SPDX-License-Identifier: MPL-2.0
use super::{Message, ViewContext};
use crate::feeds::Feed;
use crate::nasa::library::LibraryItem;
use crate::section::Section;
use crate::ui::components::remote_image;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row};
use iced::{alignment, Element, Length, Padding};

/// Height of one figure frame. The entrance offset slides inside it.
const FIGURE_HEIGHT: f32 = sizing::THUMBNAIL;

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ctx.slot(&ctx.feeds.library, Feed::Library, |items| {
        if items.is_empty() {
            return ctx.body(ctx.i18n.tr("library-empty")).into();
        }
        grid(ctx, items)
    })
}

fn grid<'a>(ctx: &ViewContext<'a>, items: &'a [LibraryItem]) -> Element<'a, Message> {
    items
        .chunks(sizing::LIBRARY_COLUMNS)
        .enumerate()
        .fold(Column::new().spacing(spacing::MD), |rows, (row_index, chunk)| {
            let row = chunk.iter().enumerate().fold(
                Row::new().spacing(spacing::MD),
                |row, (column, item)| {
                    row.push(figure(ctx, row_index * sizing::LIBRARY_COLUMNS + column, item))
                },
            );
            rows.push(row)
        })
        .into()
}

fn figure<'a>(ctx: &ViewContext<'a>, index: usize, item: &'a LibraryItem) -> Element<'a, Message> {
    let entrance = ctx.reveal.staggered(Section::Library, index, ctx.now);
    let opacity = ctx.presentation.opacity * entrance.opacity;

    let title = item
        .title
        .clone()
        .unwrap_or_else(|| ctx.i18n.tr("library-untitled"));

    let thumbnail = remote_image::view(
        &ctx.image_context_at(opacity),
        &item.thumbnail_url,
        Length::Fixed(sizing::THUMBNAIL),
        sizing::THUMBNAIL - spacing::LG,
    );

    let figure = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::THUMBNAIL))
        .align_x(alignment::Horizontal::Center)
        .push(thumbnail)
        .push(ctx.caption_at(title, opacity));

    let frame = container(figure)
        .padding(Padding {
            top: entrance.offset_y,
            ..Padding::ZERO
        })
        .height(Length::Fixed(FIGURE_HEIGHT))
        .clip(true);

    button(frame)
        .on_press(Message::OpenImage(item.thumbnail_url.clone()))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail)
        .into()
}
