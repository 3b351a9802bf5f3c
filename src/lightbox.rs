// SPDX-License-Identifier: MPL-2.0
//! Full-size image overlay state. At most one image is selected.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<String>,
}

impl Lightbox {
    /// Selects `url`, replacing any current selection.
    pub fn open(&mut self, url: impl Into<String>) {
        let url = url.into();
        tracing::debug!(%url, "lightbox opened");
        self.selected = Some(url);
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            tracing::debug!("lightbox closed");
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(Lightbox::default().selected(), None);
    }

    #[test]
    fn open_sets_and_close_clears() {
        let mut lightbox = Lightbox::default();
        lightbox.open("https://img/a.jpg");
        assert_eq!(lightbox.selected(), Some("https://img/a.jpg"));

        lightbox.close();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn second_open_replaces_selection() {
        let mut lightbox = Lightbox::default();
        lightbox.open("https://img/a.jpg");
        lightbox.open("https://img/b.jpg");
        assert_eq!(lightbox.selected(), Some("https://img/b.jpg"));
    }

    #[test]
    fn close_when_closed_is_harmless() {
        let mut lightbox = Lightbox::default();
        lightbox.close();
        assert_eq!(lightbox, Lightbox::default());
    }
}
