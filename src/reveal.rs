// SPDX-License-Identifier: MPL-2.0
//! One-shot scroll reveal of page sections.
//!
//! Each viewport report is compared against every section's span. The first
//! time a section's visible fraction reaches [`REVEAL_THRESHOLD`] its entrance
//! animation starts. Nothing ever resets a section to hidden.

use crate::config::DEFAULT_LIBRARY_LIMIT;
use crate::section::{Section, Span};
use std::time::{Duration, Instant};

/// Fraction of a section that must be visible to trigger its reveal.
pub const REVEAL_THRESHOLD: f32 = 0.2;
pub const REVEAL_DURATION: Duration = Duration::from_millis(1200);
/// Starting vertical offset of a hidden section, in logical pixels.
pub const REVEAL_OFFSET: f32 = 80.0;

/// Delay between the entrances of consecutive library figures.
pub const STAGGER_STEP: Duration = Duration::from_millis(150);
pub const FIGURE_DURATION: Duration = Duration::from_millis(800);
/// Starting vertical offset of a hidden library figure.
pub const FIGURE_OFFSET: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Revealing {
        started: Instant,
    },
    Revealed,
}

/// How a section should be drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Presentation {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_y: REVEAL_OFFSET,
    };
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    fn at(progress: f32, offset: f32) -> Self {
        let eased = ease_out_cubic(progress);
        Self {
            opacity: eased,
            offset_y: offset * (1.0 - eased),
        }
    }
}

/// How long `section` keeps animating once its reveal starts. The library
/// waits for its last staggered figure.
fn animation_length(section: Section) -> Duration {
    match section {
        Section::Library => {
            let last = u32::try_from(DEFAULT_LIBRARY_LIMIT.saturating_sub(1)).unwrap_or(0);
            (STAGGER_STEP * last + FIGURE_DURATION).max(REVEAL_DURATION)
        }
        Section::Apod | Section::Mars | Section::Earth => REVEAL_DURATION,
    }
}

/// Eased progress of an animation of `length` that began `delay` after
/// `started`.
fn progress(started: Instant, now: Instant, delay: Duration, length: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(started + delay);
    (elapsed.as_secs_f32() / length.as_secs_f32()).min(1.0)
}

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    phases: [Phase; Section::ALL.len()],
}

impl Tracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self, section: Section) -> Phase {
        self.phases[section.index()]
    }

    /// Checks every hidden section against `viewport` and starts the reveal
    /// of those crossing the threshold. Returns the sections started now.
    pub fn observe(&mut self, viewport: Span, now: Instant) -> Vec<Section> {
        let mut started = Vec::new();
        for section in Section::ALL {
            let phase = &mut self.phases[section.index()];
            if *phase != Phase::Hidden {
                continue;
            }
            if visible_fraction(section.span(), viewport) >= REVEAL_THRESHOLD {
                *phase = Phase::Revealing { started: now };
                started.push(section);
            }
        }
        if !started.is_empty() {
            tracing::debug!(sections = ?started, "reveal started");
        }
        started
    }

    /// Finishes animations whose duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        for section in Section::ALL {
            let phase = &mut self.phases[section.index()];
            if let Phase::Revealing { started } = *phase {
                if now.saturating_duration_since(started) >= animation_length(section) {
                    *phase = Phase::Revealed;
                }
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phases
            .iter()
            .any(|phase| matches!(phase, Phase::Revealing { .. }))
    }

    #[must_use]
    pub fn presentation(&self, section: Section, now: Instant) -> Presentation {
        match self.phase(section) {
            Phase::Hidden => Presentation::HIDDEN,
            Phase::Revealed => Presentation::SHOWN,
            Phase::Revealing { started } => Presentation::at(
                progress(started, now, Duration::ZERO, REVEAL_DURATION),
                REVEAL_OFFSET,
            ),
        }
    }

    /// Entrance of the `index`-th figure inside `section`, delayed by
    /// [`STAGGER_STEP`] per position.
    #[must_use]
    pub fn staggered(&self, section: Section, index: usize, now: Instant) -> Presentation {
        match self.phase(section) {
            Phase::Hidden => Presentation {
                opacity: 0.0,
                offset_y: FIGURE_OFFSET,
            },
            Phase::Revealed => Presentation::SHOWN,
            Phase::Revealing { started } => {
                let delay = STAGGER_STEP * u32::try_from(index).unwrap_or(u32::MAX);
                Presentation::at(
                    progress(started, now, delay, FIGURE_DURATION),
                    FIGURE_OFFSET,
                )
            }
        }
    }
}

/// Share of `section` covered by `viewport`, in `0.0..=1.0`.
#[must_use]
pub fn visible_fraction(section: Span, viewport: Span) -> f32 {
    let height = section.height();
    if height <= 0.0 {
        return 0.0;
    }
    (section.overlap(viewport) / height).clamp(0.0, 1.0)
}

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SECTION_HEIGHT;

    fn viewport_on(section: Section, fraction: f32) -> Span {
        // Viewport whose bottom edge enters `section` by `fraction` of its height.
        let top = section.span().top;
        let bottom = top + SECTION_HEIGHT * fraction;
        Span::new(bottom - 400.0, bottom)
    }

    #[test]
    fn initial_viewport_reveals_visible_sections() {
        let mut tracker = Tracker::new();
        let now = Instant::now();
        let started = tracker.observe(Span::viewport(0.0, 700.0), now);

        assert_eq!(started, vec![Section::Apod]);
        assert!(tracker.is_animating());
        assert_eq!(tracker.phase(Section::Mars), Phase::Hidden);
    }

    #[test]
    fn threshold_gates_reveal() {
        let mut tracker = Tracker::new();
        let now = Instant::now();

        assert!(tracker
            .observe(viewport_on(Section::Mars, 0.19), now)
            .iter()
            .all(|s| *s != Section::Mars));
        assert!(tracker
            .observe(viewport_on(Section::Mars, 0.21), now)
            .contains(&Section::Mars));
    }

    #[test]
    fn reveal_fires_once_across_exit_and_reentry() {
        let mut tracker = Tracker::new();
        let start = Instant::now();
        let inside = viewport_on(Section::Earth, 0.5);
        let outside = Span::viewport(0.0, 100.0);

        assert!(tracker.observe(inside, start).contains(&Section::Earth));
        tracker.observe(outside, start + Duration::from_millis(100));
        let again = tracker.observe(inside, start + Duration::from_millis(200));

        assert!(!again.contains(&Section::Earth));
        assert_eq!(
            tracker.phase(Section::Earth),
            Phase::Revealing { started: start }
        );

        tracker.tick(start + REVEAL_DURATION);
        tracker.observe(outside, start + REVEAL_DURATION);
        assert!(tracker.observe(inside, start + REVEAL_DURATION * 2).is_empty());
        assert_eq!(tracker.phase(Section::Earth), Phase::Revealed);
    }

    #[test]
    fn tick_completes_elapsed_animations() {
        let mut tracker = Tracker::new();
        let start = Instant::now();
        tracker.observe(Span::viewport(0.0, 700.0), start);

        tracker.tick(start + Duration::from_millis(600));
        assert!(tracker.is_animating());

        tracker.tick(start + REVEAL_DURATION);
        assert!(!tracker.is_animating());
        assert_eq!(tracker.phase(Section::Apod), Phase::Revealed);
    }

    #[test]
    fn presentation_eases_from_hidden_to_shown() {
        let mut tracker = Tracker::new();
        let start = Instant::now();
        assert_eq!(
            tracker.presentation(Section::Apod, start),
            Presentation::HIDDEN
        );

        tracker.observe(Span::viewport(0.0, 700.0), start);
        assert_eq!(
            tracker.presentation(Section::Apod, start),
            Presentation::HIDDEN
        );

        let mid = tracker.presentation(Section::Apod, start + REVEAL_DURATION / 2);
        assert!((mid.opacity - 0.875).abs() < 1e-3);
        assert!((mid.offset_y - 10.0).abs() < 1e-2);

        assert_eq!(
            tracker.presentation(Section::Apod, start + REVEAL_DURATION * 3),
            Presentation::SHOWN
        );
    }

    #[test]
    fn library_figures_enter_one_after_another() {
        let mut tracker = Tracker::new();
        let start = Instant::now();
        let library = Section::Library.span();
        tracker.observe(Span::new(library.top, library.bottom), start);

        let at = start + STAGGER_STEP;
        let first = tracker.staggered(Section::Library, 0, at);
        let second = tracker.staggered(Section::Library, 1, at);
        assert!(first.opacity > 0.0);
        assert_eq!(second.opacity, 0.0);
        assert_eq!(second.offset_y, FIGURE_OFFSET);

        let settled = start + STAGGER_STEP * 5 + FIGURE_DURATION;
        assert_eq!(
            tracker.staggered(Section::Library, 5, settled),
            Presentation::SHOWN
        );
    }

    #[test]
    fn library_keeps_animating_until_last_figure_lands() {
        let mut tracker = Tracker::new();
        let start = Instant::now();
        let library = Section::Library.span();
        tracker.observe(Span::new(library.top, library.bottom), start);

        tracker.tick(start + REVEAL_DURATION);
        assert!(tracker.is_animating());

        tracker.tick(start + STAGGER_STEP * 5 + FIGURE_DURATION);
        assert_eq!(tracker.phase(Section::Library), Phase::Revealed);
        assert_eq!(
            tracker.staggered(Section::Library, 3, start),
            Presentation::SHOWN
        );
    }

    #[test]
    fn visible_fraction_is_bounded() {
        let section = Span::new(100.0, 200.0);
        assert_eq!(visible_fraction(section, Span::new(0.0, 1000.0)), 1.0);
        assert_eq!(visible_fraction(section, Span::new(300.0, 400.0)), 0.0);
        assert!((visible_fraction(section, Span::new(0.0, 150.0)) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}
