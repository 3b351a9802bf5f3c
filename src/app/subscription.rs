// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are reduced to the few messages the page
//! needs. A periodic tick runs only while something on screen is animating.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick period while a reveal animation runs (about 60 frames per second).
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Tick period while only spinners are visible.
const SPINNER_TICK: Duration = Duration::from_millis(50);

/// Routes window size changes and the Escape key.
///
/// Escape is only forwarded when no widget captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the tick subscription for animations and spinners.
pub fn create_tick_subscription(is_animating: bool, is_loading: bool) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if is_loading {
        time::every(SPINNER_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
