// SPDX-License-Identifier: MPL-2.0
//! Header bar with the app title and one jump link per section.

use crate::i18n::fluent::I18n;
use crate::section::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    JumpTo(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::JumpTo(section) => Event::ScrollTo(section),
    }
}

fn label_key(section: Section) -> &'static str {
    match section {
        Section::Apod => "navbar-apod",
        Section::Mars => "navbar-mars",
        Section::Earth => "navbar-earth",
        Section::Library => "navbar-library",
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE_MD);

    let links = Section::ALL.iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, section| {
            row.push(
                button(Text::new(ctx.i18n.tr(label_key(*section))).size(typography::BODY))
                    .on_press(Message::JumpTo(*section))
                    .padding([spacing::XS, spacing::SM])
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .style(styles::button::nav_link),
            )
        },
    );

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(links);

    container(bar)
        .padding([0.0, spacing::LG])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .center_y(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::header(ctx.colors))
        .into()
}
