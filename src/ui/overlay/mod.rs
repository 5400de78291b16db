// SPDX-License-Identifier: MPL-2.0
//! The single overlay surface: modal dialogs and the media lightbox.
//!
//! One manager owns every dismissible surface stacked above the page. At
//! most one overlay is open at a time; requesting another while one is
//! showing replaces it in place (content swap, no visible close). While
//! anything is open the page behind it does not scroll; closing lifts the
//! lock unconditionally.
//!
//! The widget tree is a pure projection of this state. Captions, content
//! choice and focus all live here, never in the rendered output.

pub mod content;
pub mod focus;
pub mod view;

pub use content::{caption_for, LightboxContent};
pub use focus::FocusRing;
pub use view::view as view_overlay;

/// Identifier the lightbox answers to in [`Manager::close`].
pub const LIGHTBOX_ID: &str = "lightbox";

/// Name of the close control every overlay carries.
pub const CONTROL_CLOSE: &str = "overlay-close";

/// Name of the confirm control the static dialogs carry.
pub const CONTROL_OK: &str = "overlay-ok";

/// The modal dialogs that exist in the page's static markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    Imprint,
    Privacy,
}

impl ModalId {
    /// Resolves a dialog from its markup identifier.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "imprint" => Some(Self::Imprint),
            "privacy" => Some(Self::Privacy),
            _ => None,
        }
    }

    /// The markup identifier this dialog answers to.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Imprint => "imprint",
            Self::Privacy => "privacy",
        }
    }

    /// i18n key of the dialog title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Imprint => "modal-imprint-title",
            Self::Privacy => "modal-privacy-title",
        }
    }

    /// i18n key of the dialog body.
    #[must_use]
    pub fn body_key(&self) -> &'static str {
        match self {
            Self::Imprint => "modal-imprint-body",
            Self::Privacy => "modal-privacy-body",
        }
    }

    /// The dialog's focusable controls, in DOM-like order.
    #[must_use]
    pub fn focusables(&self) -> &'static [&'static str] {
        &[CONTROL_CLOSE, CONTROL_OK]
    }
}

/// What currently occupies the overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Active {
    Modal(ModalId),
    Lightbox,
}

/// The lightbox content slot: created on first use, reused afterwards.
#[derive(Debug, Clone, Default)]
pub struct LightboxSlot {
    content: Option<LightboxContent>,
    caption: String,
    /// Decoded pixels for image content; arrives asynchronously.
    image: Option<iced::widget::image::Handle>,
}

impl LightboxSlot {
    #[must_use]
    pub fn content(&self) -> Option<&LightboxContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn image(&self) -> Option<&iced::widget::image::Handle> {
        self.image.as_ref()
    }
}

/// Messages emitted by the rendered overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control (or a dialog's confirm control) was activated.
    CloseActivated,
    /// A press landed on the outer backdrop.
    BackdropPressed,
    /// A press landed on the inner content; absorbed so it cannot fall
    /// through to the backdrop.
    ContentPressed,
}

/// Owns the overlay surface's state machine.
#[derive(Debug, Default)]
pub struct Manager {
    active: Option<Active>,
    focus: FocusRing,
    lightbox: Option<LightboxSlot>,
    scroll_locked: bool,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a pre-existing dialog by its markup identifier.
    ///
    /// An unknown identifier is a silent no-op. On success the dialog's
    /// focus ring is installed with focus on its first control, and page
    /// scrolling is suppressed. Opening over an already open overlay
    /// replaces it in place.
    pub fn open_by_id(&mut self, id: &str) {
        let Some(modal) = ModalId::from_name(id) else {
            return;
        };
        self.active = Some(Active::Modal(modal));
        self.focus = FocusRing::new(modal.focusables());
        self.scroll_locked = true;
    }

    /// Opens the lightbox on the given resource.
    ///
    /// The content slot is created on first use and reused afterwards;
    /// previously rendered content is cleared before the new target is
    /// classified. A blank caption falls back to the resource's trailing
    /// path segment.
    pub fn open_lightbox(&mut self, resource: &str, caption: &str) {
        let slot = self.lightbox.get_or_insert_with(LightboxSlot::default);
        // previous content is dropped here; the chrome (close control,
        // caption slot) is part of the view, not the slot
        slot.content = Some(LightboxContent::classify(resource));
        slot.caption = caption_for(resource, caption);
        slot.image = None;

        self.active = Some(Active::Lightbox);
        self.focus = FocusRing::new(&[CONTROL_CLOSE]);
        self.scroll_locked = true;
    }

    /// Closes the targeted overlay.
    ///
    /// Idempotent: closing an overlay that is not open (or an unknown
    /// identifier) is a no-op. On close the scroll lock is lifted
    /// unconditionally and the lightbox caption is cleared.
    pub fn close(&mut self, id: &str) {
        let matches = match self.active {
            Some(Active::Modal(modal)) => modal.name() == id,
            Some(Active::Lightbox) => id == LIGHTBOX_ID,
            None => false,
        };
        if matches {
            self.close_active();
        }
    }

    /// Closes whatever is open; a no-op when nothing is.
    pub fn close_active(&mut self) {
        if self.active.take().is_some() {
            if let Some(slot) = self.lightbox.as_mut() {
                slot.caption.clear();
            }
        }
        self.focus = FocusRing::default();
        self.scroll_locked = false;
    }

    /// Routes a Tab / Shift+Tab press through the focus ring.
    ///
    /// Returns the newly focused control, or `None` when no overlay is
    /// open (the trap only exists for the duration of an overlay).
    pub fn handle_tab(&mut self, shift: bool) -> Option<&'static str> {
        self.active?;
        if shift {
            self.focus.previous()
        } else {
            self.focus.next()
        }
    }

    /// Routes an Escape press: closes the active overlay, if any.
    pub fn handle_escape(&mut self) {
        self.close_active();
    }

    /// Routes an Enter press: activates the focused control. Both overlay
    /// controls are dismissing ones, so activation closes.
    pub fn handle_enter(&mut self) {
        if self.focused().is_some() {
            self.close_active();
        }
    }

    /// Attaches decoded pixels to the lightbox's image content.
    ///
    /// The decode runs asynchronously; by the time it completes the
    /// lightbox may show something else, so the result only sticks when
    /// the source still matches.
    pub fn attach_lightbox_image(&mut self, source: &str, handle: iced::widget::image::Handle) {
        if let Some(slot) = self.lightbox.as_mut() {
            if matches!(&slot.content, Some(LightboxContent::Image { source: s }) if s == source)
            {
                slot.image = Some(handle);
            }
        }
    }

    /// Handles a message from the rendered overlay.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::CloseActivated | Message::BackdropPressed => self.close_active(),
            Message::ContentPressed => {}
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<Active> {
        self.active
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Whether page scrolling is currently suppressed.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// The control currently holding focus inside the open overlay.
    #[must_use]
    pub fn focused(&self) -> Option<&'static str> {
        self.active.and_then(|_| self.focus.focused())
    }

    /// The lightbox slot, if it has ever been opened.
    #[must_use]
    pub fn lightbox(&self) -> Option<&LightboxSlot> {
        self.lightbox.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let mut manager = Manager::new();
        manager.open_by_id("missing-id");

        assert!(!manager.is_open());
        assert!(!manager.scroll_locked());
        assert_eq!(manager.focused(), None);
    }

    #[test]
    fn close_of_unknown_or_closed_overlay_is_a_no_op() {
        let mut manager = Manager::new();
        manager.close("missing-id");
        manager.close("imprint");
        assert!(!manager.is_open());

        manager.open_by_id("imprint");
        manager.close("privacy"); // not the open one
        assert!(manager.is_open());
    }

    #[test]
    fn open_by_id_installs_focus_on_first_control() {
        let mut manager = Manager::new();
        manager.open_by_id("imprint");

        assert_eq!(manager.active(), Some(Active::Modal(ModalId::Imprint)));
        assert!(manager.scroll_locked());
        assert_eq!(manager.focused(), Some(CONTROL_CLOSE));
    }

    #[test]
    fn tab_cycles_and_wraps_within_the_open_overlay() {
        let mut manager = Manager::new();
        manager.open_by_id("privacy");

        assert_eq!(manager.handle_tab(false), Some(CONTROL_OK));
        assert_eq!(manager.handle_tab(false), Some(CONTROL_CLOSE)); // wrapped
        assert_eq!(manager.handle_tab(true), Some(CONTROL_OK)); // wrapped back
    }

    #[test]
    fn tab_is_inert_while_nothing_is_open() {
        let mut manager = Manager::new();
        assert_eq!(manager.handle_tab(false), None);
        assert_eq!(manager.handle_tab(true), None);
    }

    #[test]
    fn lightbox_classifies_pdf_and_derives_caption() {
        let mut manager = Manager::new();

        manager.open_lightbox("plans/og.pdf", "Plan");
        let slot = manager.lightbox().unwrap();
        assert!(matches!(
            slot.content(),
            Some(LightboxContent::Document { .. })
        ));
        assert_eq!(slot.caption(), "Plan");

        manager.open_lightbox("images/a.jpg", "");
        let slot = manager.lightbox().unwrap();
        assert!(matches!(slot.content(), Some(LightboxContent::Image { .. })));
        assert_eq!(slot.caption(), "a.jpg");
    }

    #[test]
    fn second_open_replaces_in_place() {
        let mut manager = Manager::new();
        manager.open_by_id("imprint");
        manager.open_lightbox("a.jpg", "");

        assert_eq!(manager.active(), Some(Active::Lightbox));
        assert!(manager.scroll_locked());

        manager.open_by_id("privacy");
        assert_eq!(manager.active(), Some(Active::Modal(ModalId::Privacy)));
        assert!(manager.scroll_locked());
    }

    #[test]
    fn scroll_lock_is_lifted_exactly_once() {
        let mut manager = Manager::new();
        manager.open_by_id("imprint");
        manager.open_lightbox("a.jpg", ""); // replace while locked
        assert!(manager.scroll_locked());

        manager.close_active();
        assert!(!manager.scroll_locked());

        // Further closes stay no-ops and leave the lock lifted.
        manager.close_active();
        manager.close(LIGHTBOX_ID);
        assert!(!manager.scroll_locked());
    }

    #[test]
    fn escape_and_backdrop_both_close() {
        let mut manager = Manager::new();
        manager.open_by_id("imprint");
        manager.handle_escape();
        assert!(!manager.is_open());

        manager.open_lightbox("a.jpg", "");
        manager.update(Message::BackdropPressed);
        assert!(!manager.is_open());
    }

    #[test]
    fn content_press_does_not_close() {
        let mut manager = Manager::new();
        manager.open_by_id("imprint");
        manager.update(Message::ContentPressed);
        assert!(manager.is_open());
    }

    #[test]
    fn close_clears_lightbox_caption_but_slot_survives() {
        let mut manager = Manager::new();
        manager.open_lightbox("a.jpg", "Ansicht");
        manager.close(LIGHTBOX_ID);

        let slot = manager.lightbox().unwrap();
        assert_eq!(slot.caption(), "");
        assert!(!manager.is_open());
    }

    #[test]
    fn escape_while_closed_is_a_no_op() {
        let mut manager = Manager::new();
        manager.handle_escape();
        assert!(!manager.is_open());
        assert!(!manager.scroll_locked());
    }

    #[test]
    fn enter_activates_the_focused_control() {
        let mut manager = Manager::new();
        manager.open_by_id("imprint");
        manager.handle_enter();
        assert!(!manager.is_open());

        // Without an overlay there is nothing to activate.
        manager.handle_enter();
        assert!(!manager.is_open());
    }

    #[test]
    fn stale_image_decode_does_not_stick() {
        let mut manager = Manager::new();
        manager.open_lightbox("a.jpg", "");
        manager.open_lightbox("b.jpg", "");

        let pixel = iced::widget::image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        manager.attach_lightbox_image("a.jpg", pixel.clone());
        assert!(manager.lightbox().unwrap().image().is_none());

        manager.attach_lightbox_image("b.jpg", pixel);
        assert!(manager.lightbox().unwrap().image().is_some());
    }
}
