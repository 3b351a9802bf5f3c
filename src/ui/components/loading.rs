// SPDX-License-Identifier: MPL-2.0
//! Spinner with a caption for content that is still on its way.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{container, Column, Text};
use iced::{alignment, Color, Element, Length};

pub fn view<'a, Message: 'static>(
    label: String,
    rotation: f32,
    color: Color,
    spinner_size: f32,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(color, rotation).size(spinner_size).into_element())
        .push(Text::new(label).size(typography::BODY));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
