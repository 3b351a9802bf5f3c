// SPDX-License-Identifier: MPL-2.0
//! Error display component with consistent styling.
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .message(i18n.tr_with_args("error-apod", &[("message", &failure)]))
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// A feed could not be loaded.
    #[default]
    Error,
    /// Degraded content, such as a single missing image.
    Warning,
}

impl ErrorSeverity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    compact: bool,
}

impl ErrorDisplay {
    #[must_use]
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Inline variant: caption-sized text without the centered block.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let accent = self.severity.color();
        let accent_style = move |_theme: &Theme| text::Style {
            color: Some(accent),
        };

        if self.compact {
            let line = self.message.or(self.title).unwrap_or_default();
            return Text::new(line)
                .size(typography::CAPTION)
                .style(accent_style)
                .into();
        }

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(accent_style),
            );
        }

        if let Some(message) = self.message {
            content = content.push(
                Container::new(Text::new(message).size(typography::BODY).style(accent_style))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        container(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
