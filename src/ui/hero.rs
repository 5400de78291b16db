// SPDX-License-Identifier: MPL-2.0
//! Hero section with the background slideshow.
//!
//! The slideshow owns an ordered list of slides whose pixels are decoded
//! once, off the UI thread, and reused for every transition. A recurring
//! subscription advances the current slide; the previous one is kept
//! around briefly so the view can cross-fade between the two. A slide
//! whose decode failed is skipped, never shown as a broken frame.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, stack, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Padding};
use std::time::{Duration, Instant};

/// Duration of the cross-fade between two slides.
pub const FADE_DURATION: Duration = Duration::from_secs(1);

/// One slideshow entry.
#[derive(Debug, Clone)]
pub struct Slide {
    pub path: String,
    /// Decoded pixels; `None` until the startup decode lands (or forever,
    /// when the asset is missing).
    pub image: Option<ImageData>,
}

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    /// The call-to-action button was activated.
    CtaPressed,
}

/// Slideshow and hero state.
#[derive(Debug)]
pub struct State {
    slides: Vec<Slide>,
    current: usize,
    /// The slide being faded out, with the fade start time.
    fading_from: Option<(usize, Instant)>,
    interval: Duration,
}

impl State {
    /// Builds the slideshow over the configured image list. Order matters.
    #[must_use]
    pub fn new(paths: &[String], interval_secs: u64) -> Self {
        Self {
            slides: paths
                .iter()
                .map(|path| Slide {
                    path: path.clone(),
                    image: None,
                })
                .collect(),
            current: 0,
            fading_from: None,
            interval: Duration::from_secs(interval_secs),
        }
    }

    /// Attaches decoded pixels to the slide they were requested for.
    pub fn attach_image(&mut self, path: &str, data: ImageData) {
        if let Some(slide) = self.slides.iter_mut().find(|s| s.path == path) {
            slide.image = Some(data);
        }
    }

    /// The image paths that still need decoding.
    #[must_use]
    pub fn pending_paths(&self) -> Vec<String> {
        self.slides
            .iter()
            .filter(|s| s.image.is_none())
            .map(|s| s.path.clone())
            .collect()
    }

    /// Advances to the next decoded slide, starting a cross-fade.
    ///
    /// With fewer than two decoded slides this is a no-op; there is
    /// nothing to transition to.
    pub fn advance(&mut self, now: Instant) {
        let decoded: Vec<usize> = self
            .slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.image.is_some())
            .map(|(i, _)| i)
            .collect();
        if decoded.len() < 2 {
            return;
        }

        let from = self.current;
        let next = decoded
            .iter()
            .copied()
            .find(|&i| i > from)
            .unwrap_or(decoded[0]);

        self.current = next;
        self.fading_from = Some((from, now));
    }

    /// Drops the fade-out once it has run its course.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, since)) = self.fading_from {
            if now.saturating_duration_since(since) >= FADE_DURATION {
                self.fading_from = None;
            }
        }
    }

    /// Whether a cross-fade is running (the animation tick gate).
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fading_from.is_some()
    }

    /// Whether the recurring advance timer should exist at all.
    #[must_use]
    pub fn has_multiple_slides(&self) -> bool {
        self.slides.iter().filter(|s| s.image.is_some()).count() >= 2
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    fn slide_image(&self, index: usize) -> Option<&ImageData> {
        self.slides.get(index).and_then(|s| s.image.as_ref())
    }

    /// Opacity of the outgoing slide at `now`: 1.0 at fade start, 0.0 done.
    #[must_use]
    pub fn fade_out_opacity(&self, now: Instant) -> f32 {
        match self.fading_from {
            Some((_, since)) => {
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (1.0 - elapsed / FADE_DURATION.as_secs_f32()).max(0.0)
            }
            None => 0.0,
        }
    }
}

/// Context required to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Parallax shift of the background, from the page scroll state.
    pub parallax_shift: f32,
    pub now: Instant,
}

/// Render the hero: slideshow background, headline, call to action.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let background = background(&ctx);

    let headline = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("hero-title"))
                .size(typography::TITLE_LG)
                .color(palette::WHITE),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-subtitle"))
                .size(typography::BODY_LG)
                .color(palette::WHITE),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta")).size(typography::BODY_LG))
                .on_press(Message::CtaPressed)
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::accent),
        );

    let foreground = Container::new(headline)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Container::new(stack([background, foreground.into()]))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .clip(true)
        .into()
}

/// The slideshow background: the current slide, with the outgoing one
/// fading above it during a transition. The whole layer is shifted by the
/// parallax offset.
fn background<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let mut layers: Vec<Element<'a, Message>> = Vec::new();

    if let Some(data) = state.slide_image(state.current) {
        layers.push(slide_layer(data, 1.0));
    }
    if let Some((from, _)) = state.fading_from {
        if let Some(data) = state.slide_image(from) {
            layers.push(slide_layer(data, state.fade_out_opacity(ctx.now)));
        }
    }

    if layers.is_empty() {
        // No decoded slide yet: solid brand backdrop behind the headline.
        layers.push(
            Container::new(Row::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(palette::PRIMARY_700)),
                    ..iced::widget::container::Style::default()
                })
                .into(),
        );
    }

    // Parallax projection: the page shift is negative (background trails
    // the scroll at half speed), which inside the clipped hero box is a
    // downward displacement of the same magnitude.
    let in_box_shift = (-ctx.parallax_shift).max(0.0);
    Container::new(stack(layers).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: in_box_shift,
            ..Padding::default()
        })
        .into()
}

fn slide_layer<'a>(data: &ImageData, opacity: f32) -> Element<'a, Message> {
    image::Image::new(data.handle.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill)
        .opacity(opacity)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    fn state_with_decoded(count: usize) -> State {
        let paths: Vec<String> = (0..count).map(|i| format!("images/{i}.jpg")).collect();
        let mut state = State::new(&paths, 4);
        for path in paths {
            state.attach_image(&path, decoded(1, 1));
        }
        state
    }

    #[test]
    fn advance_cycles_in_order_and_wraps() {
        let mut state = state_with_decoded(3);
        let now = Instant::now();

        state.advance(now);
        assert_eq!(state.current_index(), 1);
        state.advance(now);
        assert_eq!(state.current_index(), 2);
        state.advance(now);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn advance_is_inert_with_fewer_than_two_decoded_slides() {
        let mut state = state_with_decoded(1);
        state.advance(Instant::now());
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_fading());
        assert!(!state.has_multiple_slides());
    }

    #[test]
    fn advance_skips_slides_that_never_decoded() {
        let paths: Vec<String> = (0..3).map(|i| format!("images/{i}.jpg")).collect();
        let mut state = State::new(&paths, 4);
        state.attach_image("images/0.jpg", decoded(1, 1));
        state.attach_image("images/2.jpg", decoded(1, 1));

        state.advance(Instant::now());
        assert_eq!(state.current_index(), 2); // slide 1 skipped
    }

    #[test]
    fn fade_finishes_after_its_duration() {
        let mut state = state_with_decoded(2);
        let start = Instant::now();
        state.advance(start);
        assert!(state.is_fading());
        assert!(state.fade_out_opacity(start) > 0.9);

        let done = start + FADE_DURATION + Duration::from_millis(10);
        assert_eq!(state.fade_out_opacity(done), 0.0);
        state.tick(done);
        assert!(!state.is_fading());
    }

    #[test]
    fn attach_image_ignores_unknown_paths() {
        let mut state = State::new(&["images/a.jpg".to_string()], 4);
        state.attach_image("images/other.jpg", decoded(1, 1));
        assert_eq!(state.pending_paths(), vec!["images/a.jpg".to_string()]);
    }

    #[test]
    fn pending_paths_shrink_as_decodes_land() {
        let paths = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let mut state = State::new(&paths, 4);
        assert_eq!(state.pending_paths().len(), 2);

        state.attach_image("a.jpg", decoded(1, 1));
        assert_eq!(state.pending_paths(), vec!["b.jpg".to_string()]);
    }
}
