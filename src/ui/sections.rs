// SPDX-License-Identifier: MPL-2.0
//! The landing page's sections and their scroll-driven effects.
//!
//! Three independent effects hang off the page scroll offset, all pure
//! projections of [`ScrollState`]:
//! - the navigation bar switches to its solid style past 100 px,
//! - the hero background shifts at half scroll speed while on screen
//!   (parallax),
//! - each section is revealed permanently once it enters the viewport
//!   minus a 50 px margin.
//!
//! Section layout uses fixed design heights, which also gives the
//! navigation its scroll targets.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::collections::HashSet;

/// Scroll offset past which the navigation bar renders solid.
pub const NAVBAR_SCROLLED_THRESHOLD: f32 = 100.0;

/// Margin subtracted from the viewport bottom before a section counts as
/// visible.
pub const REVEAL_MARGIN: f32 = 50.0;

/// Parallax rate of the hero background relative to the scroll offset.
pub const PARALLAX_RATE: f32 = -0.5;

/// Extra gap kept between the navbar and a scroll target.
pub const SCROLL_TARGET_GAP: f32 = 20.0;

/// The sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    Floorplans,
    Location,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Features,
        Section::Floorplans,
        Section::Location,
        Section::Contact,
    ];

    /// i18n key of the navigation label.
    #[must_use]
    pub fn nav_key(&self) -> &'static str {
        match self {
            Section::Features => "nav-features",
            Section::Floorplans => "nav-floorplans",
            Section::Location => "nav-location",
            Section::Contact => "nav-contact",
        }
    }

    /// Fixed design height of the section.
    #[must_use]
    pub fn height(&self) -> f32 {
        match self {
            Section::Features => 520.0,
            Section::Floorplans => 560.0,
            Section::Location => 480.0,
            Section::Contact => 720.0,
        }
    }

    /// Offset of the section's top edge from the top of the page.
    #[must_use]
    pub fn top(&self) -> f32 {
        let mut offset = sizing::HERO_HEIGHT;
        for section in Self::ALL {
            if section == *self {
                return offset;
            }
            offset += section.height();
        }
        offset
    }
}

/// A floor-plan gallery entry: the lightbox target and its caption.
#[derive(Debug, Clone)]
pub struct Floorplan {
    pub resource: &'static str,
    pub caption: &'static str,
}

/// The documents and views offered in the floor-plan section.
pub const FLOORPLANS: &[Floorplan] = &[
    Floorplan {
        resource: "plans/Erdgeschoss.pdf",
        caption: "Erdgeschoss",
    },
    Floorplan {
        resource: "plans/Obergeschoss.pdf",
        caption: "Obergeschoss",
    },
    Floorplan {
        resource: "images/Dachgeschoss.jpg",
        caption: "Dachgeschoss",
    },
    Floorplan {
        resource: "images/Hofseite_low_res.jpg",
        caption: "",
    },
];

/// Messages emitted by the static sections.
#[derive(Debug, Clone)]
pub enum Message {
    /// A floor-plan tile was activated.
    OpenFloorplan {
        resource: &'static str,
        caption: &'static str,
    },
}

/// Scroll-derived page state.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: f32,
    viewport_height: f32,
    revealed: HashSet<Section>,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll movement and reveals any section that entered the
    /// viewport. Reveals are permanent.
    pub fn handle_scroll(&mut self, viewport: scrollable::Viewport) {
        self.offset = viewport.absolute_offset().y;
        self.viewport_height = viewport.bounds().height;
        self.update_reveals();
    }

    /// Records the window height so reveal checks work before the first
    /// scroll event.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.update_reveals();
    }

    fn update_reveals(&mut self) {
        let visible_bottom = self.offset + self.viewport_height - REVEAL_MARGIN;
        for section in Section::ALL {
            if section.top() < visible_bottom {
                self.revealed.insert(section);
            }
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the navigation bar should render in its solid style.
    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.offset > NAVBAR_SCROLLED_THRESHOLD
    }

    /// Vertical shift of the hero background; zero once the hero has been
    /// scrolled past.
    #[must_use]
    pub fn parallax_shift(&self) -> f32 {
        if self.offset <= self.viewport_height {
            self.offset * PARALLAX_RATE
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// Scroll target for a section link: its top edge minus the navbar and
    /// a small gap, clamped at the page top.
    #[must_use]
    pub fn scroll_target(section: Section) -> f32 {
        (section.top() - sizing::NAVBAR_HEIGHT - SCROLL_TARGET_GAP).max(0.0)
    }
}

/// Context required to render the static sections.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scroll: &'a ScrollState,
}

/// Renders the feature-card section.
pub fn view_features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = if ctx.scroll.is_revealed(Section::Features) {
        let cards = [
            ("feature-yield-title", "feature-yield-body"),
            ("feature-care-title", "feature-care-body"),
            ("feature-location-title", "feature-location-body"),
        ];

        let mut row = Row::new().spacing(spacing::LG);
        for (title_key, body_key) in cards {
            row = row.push(feature_card(ctx.i18n, title_key, body_key));
        }

        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(section_heading(ctx.i18n, "features-title", "features-subtitle"))
            .push(row)
            .into()
    } else {
        hidden_placeholder()
    };

    section_shell(Section::Features, body)
}

/// Renders the floor-plan gallery section.
pub fn view_floorplans<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = if ctx.scroll.is_revealed(Section::Floorplans) {
        let mut row = Row::new().spacing(spacing::LG);
        for plan in FLOORPLANS {
            row = row.push(floorplan_card(ctx.i18n, plan));
        }

        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(section_heading(
                ctx.i18n,
                "floorplans-title",
                "floorplans-subtitle",
            ))
            .push(row)
            .into()
    } else {
        hidden_placeholder()
    };

    section_shell(Section::Floorplans, body)
}

fn feature_card<'a>(i18n: &'a I18n, title_key: &str, body_key: &str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr(body_key)).size(typography::BODY));

    Container::new(content)
        .width(Length::Fixed(280.0))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn floorplan_card<'a>(i18n: &'a I18n, plan: &'static Floorplan) -> Element<'a, Message> {
    let caption = if plan.caption.is_empty() {
        plan.resource
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(plan.resource)
    } else {
        plan.caption
    };

    let open_button = button(Text::new(i18n.tr("floorplan-open")).size(typography::BODY))
        .on_press(Message::OpenFloorplan {
            resource: plan.resource,
            caption: plan.caption,
        })
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(caption).size(typography::BODY_LG))
        .push(open_button);

    Container::new(content)
        .width(Length::Fixed(220.0))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn section_heading<'a>(i18n: &'a I18n, title_key: &str, subtitle_key: &str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr(subtitle_key)).size(typography::BODY_LG))
        .into()
}

/// Wraps a section body in its fixed-height shell so scroll targets stay
/// valid whether or not the content is revealed yet.
pub fn section_shell<M: 'static>(section: Section, body: Element<'_, M>) -> Element<'_, M> {
    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

/// The stand-in rendered while a section has not been revealed yet.
pub fn hidden_placeholder<'a, M: 'a>() -> Element<'a, M> {
    Space::new().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_tops_are_cumulative() {
        assert_eq!(Section::Features.top(), sizing::HERO_HEIGHT);
        assert_eq!(
            Section::Floorplans.top(),
            sizing::HERO_HEIGHT + Section::Features.height()
        );
        assert!(Section::Contact.top() > Section::Location.top());
    }

    #[test]
    fn navbar_switches_past_threshold() {
        let mut scroll = ScrollState::new();
        assert!(!scroll.navbar_scrolled());

        scroll.offset = NAVBAR_SCROLLED_THRESHOLD + 1.0;
        assert!(scroll.navbar_scrolled());
    }

    #[test]
    fn parallax_stops_past_the_hero() {
        let mut scroll = ScrollState::new();
        scroll.viewport_height = 800.0;

        scroll.offset = 200.0;
        assert_eq!(scroll.parallax_shift(), -100.0);

        scroll.offset = 900.0;
        assert_eq!(scroll.parallax_shift(), 0.0);
    }

    #[test]
    fn reveals_are_monotonic() {
        let mut scroll = ScrollState::new();
        scroll.viewport_height = 800.0;
        scroll.offset = Section::Floorplans.top();
        scroll.update_reveals();
        assert!(scroll.is_revealed(Section::Features));
        assert!(scroll.is_revealed(Section::Floorplans));

        // Scrolling back up does not hide what was revealed.
        scroll.offset = 0.0;
        scroll.update_reveals();
        assert!(scroll.is_revealed(Section::Floorplans));
    }

    #[test]
    fn sections_below_the_fold_start_hidden() {
        let mut scroll = ScrollState::new();
        scroll.viewport_height = 400.0;
        scroll.update_reveals();
        assert!(!scroll.is_revealed(Section::Contact));
    }

    #[test]
    fn scroll_target_accounts_for_navbar_and_gap() {
        let target = ScrollState::scroll_target(Section::Features);
        assert_eq!(
            target,
            Section::Features.top() - sizing::NAVBAR_HEIGHT - SCROLL_TARGET_GAP
        );
    }
}
