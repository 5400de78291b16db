// SPDX-License-Identifier: MPL-2.0
//! Cookie consent banner.
//!
//! Shown on every start (the decision is deliberately not persisted).
//! Accepting asks the application to activate the analytics container,
//! exactly once; rejecting only dismisses the banner and loads nothing.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the banner.
#[derive(Debug, Clone)]
pub enum Message {
    Accept,
    Reject,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Consent granted: load the tag-manager container.
    ActivateAnalytics,
}

/// Banner state.
#[derive(Debug)]
pub struct State {
    visible: bool,
}

impl Default for State {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Process a banner message.
    pub fn update(&mut self, message: Message) -> Event {
        self.visible = false;
        match message {
            Message::Accept => Event::ActivateAnalytics,
            Message::Reject => Event::None,
        }
    }
}

/// Context required to render the banner.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the banner, pinned to the bottom edge.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let text = Text::new(ctx.i18n.tr("consent-text")).size(typography::BODY);

    let accept = button(Text::new(ctx.i18n.tr("consent-accept")).size(typography::BODY))
        .on_press(Message::Accept)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::accent);

    let reject = button(Text::new(ctx.i18n.tr("consent-reject")).size(typography::BODY))
        .on_press(Message::Reject)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::link);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(text).width(Length::Fill))
        .push(reject)
        .push(accept);

    let card = Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(Row::new()).height(Length::Fill))
        .push(Container::new(card).width(Length::Fill).padding(spacing::MD))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_starts_visible() {
        assert!(State::new().is_visible());
    }

    #[test]
    fn accept_dismisses_and_activates() {
        let mut state = State::new();
        let event = state.update(Message::Accept);
        assert!(!state.is_visible());
        assert!(matches!(event, Event::ActivateAnalytics));
    }

    #[test]
    fn reject_only_dismisses() {
        let mut state = State::new();
        let event = state.update(Message::Reject);
        assert!(!state.is_visible());
        assert!(matches!(event, Event::None));
    }
}
