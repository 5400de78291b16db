// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three sources feed the update loop from outside the widget tree:
//! window/keyboard events, the animation tick (alive only while something
//! is actually animating or expiring), and the slideshow timer (alive
//! only while there are at least two decoded slides). Keeping the timers
//! conditional means an idle page schedules nothing.

use super::{App, Message};
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Granularity of the animation/expiry tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([
        event_subscription(),
        tick_subscription(app),
        slideshow_subscription(app),
    ])
}

/// Routes native events: window resizes always, keyboard presses only for
/// the keys the overlay trap consumes. Events captured by a widget (text
/// input editing, scrollable wheel) never reach this listener.
fn event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
            key, modifiers, ..
        }) = &event
        {
            let relevant = matches!(
                key,
                Key::Named(Named::Escape) | Key::Named(Named::Tab) | Key::Named(Named::Enter)
            );
            if relevant && matches!(status, event::Status::Ignored) {
                return Some(Message::KeyPressed(key.clone(), *modifiers));
            }
        }

        None
    })
}

/// Creates a periodic tick for toast expiry/slides, field-highlight decay
/// and the hero cross-fade.
fn tick_subscription(app: &App) -> Subscription<Message> {
    let animating =
        app.notifications.has_toast() || app.contact.has_highlights() || app.hero.is_fading();
    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the recurring slideshow timer.
fn slideshow_subscription(app: &App) -> Subscription<Message> {
    if app.hero.has_multiple_slides() {
        time::every(app.hero.interval()).map(Message::SlideshowAdvance)
    } else {
        Subscription::none()
    }
}
