// SPDX-License-Identifier: MPL-2.0
//! Page sections and their fixed vertical layout.
//!
//! Every section has the same fixed height inside the page scrollable, so a
//! section's span in content coordinates is known without measuring widgets.

/// Height of one section block.
pub const SECTION_HEIGHT: f32 = 600.0;
/// Vertical space between two sections.
pub const SECTION_GAP: f32 = 48.0;
/// Padding around the page column.
pub const PAGE_PADDING: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Apod,
    Mars,
    Earth,
    Library,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 4] = [
        Section::Apod,
        Section::Mars,
        Section::Earth,
        Section::Library,
    ];

    /// Maps a launch route name to a section. Matching is case-insensitive.
    #[must_use]
    pub fn from_route(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "apod" => Some(Section::Apod),
            "mars" => Some(Section::Mars),
            "earth" => Some(Section::Earth),
            "library" => Some(Section::Library),
            _ => None,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::Apod => 0,
            Section::Mars => 1,
            Section::Earth => 2,
            Section::Library => 3,
        }
    }

    /// Vertical span of this section in page content coordinates.
    #[must_use]
    pub fn span(self) -> Span {
        let top = PAGE_PADDING + self.index() as f32 * (SECTION_HEIGHT + SECTION_GAP);
        Span::new(top, top + SECTION_HEIGHT)
    }
}

/// Total height of the scrollable page content.
#[must_use]
pub fn content_height() -> f32 {
    let count = Section::ALL.len() as f32;
    2.0 * PAGE_PADDING + count * SECTION_HEIGHT + (count - 1.0) * SECTION_GAP
}

/// A vertical interval `[top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom: bottom.max(top),
        }
    }

    /// Span of a viewport scrolled to `offset_y` and `height` tall.
    #[must_use]
    pub fn viewport(offset_y: f32, height: f32) -> Self {
        Self::new(offset_y, offset_y + height.max(0.0))
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn overlap(self, other: Span) -> f32 {
        (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0)
    }
}
