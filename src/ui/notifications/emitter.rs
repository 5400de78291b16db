// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Emitter` owns the single toast slot. Emitting replaces whatever is
//! showing; the periodic application tick advances the slide-in, expiry and
//! slide-out stages from the timestamps stored on the active toast. Because
//! the tick only ever consults current state, dropping a toast (manual
//! dismissal or replacement) is the cancellation of its pending expiry.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsHandle;
use std::time::{Duration, Instant};

/// How long a toast stays before its exit animation starts.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Delay between insertion and the start of the slide-in.
pub const ENTRY_DELAY: Duration = Duration::from_millis(100);

/// Duration of the slide-in and slide-out animations.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (manual close control).
    Dismiss(NotificationId),
}

/// The toast currently occupying the slot.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    notification: Notification,
    created_at: Instant,
    /// Set once the exit animation has started; removal follows
    /// `SLIDE_DURATION` later.
    leaving_since: Option<Instant>,
}

impl ActiveToast {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Horizontal slide offset as a fraction of the toast width:
    /// 1.0 is fully off-screen, 0.0 fully in view.
    #[must_use]
    pub fn slide_offset(&self, now: Instant) -> f32 {
        if let Some(since) = self.leaving_since {
            return progress(since, now, SLIDE_DURATION);
        }

        let age = now.saturating_duration_since(self.created_at);
        if age < ENTRY_DELAY {
            1.0
        } else {
            1.0 - progress(self.created_at + ENTRY_DELAY, now, SLIDE_DURATION)
        }
    }

    /// Whether the exit animation is running.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.leaving_since.is_some()
    }
}

fn progress(since: Instant, now: Instant, duration: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Owns the single notification slot.
#[derive(Debug, Default)]
pub struct Emitter {
    current: Option<ActiveToast>,
    /// Optional diagnostics handle; warnings and errors are recorded there.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Emitter {
    /// Creates a new empty emitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle for recording warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a notification, immediately discarding any visible one.
    ///
    /// There is no queue: a rapid sequence of emissions leaves only the
    /// newest toast, which callers must treat as acceptable.
    pub fn emit(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.message_key()),
                Severity::Error => handle.log_error(notification.message_key()),
                Severity::Success | Severity::Info => {}
            }
        }

        self.current = Some(ActiveToast {
            notification,
            created_at: Instant::now(),
            leaving_since: None,
        });
    }

    /// Dismisses the visible notification by its ID, immediately and without
    /// an exit animation.
    ///
    /// Returns `true` if the notification was showing and got removed; a
    /// stale ID (already replaced or expired) is a no-op, so the scheduled
    /// auto-removal of a manually dismissed toast cannot fire twice.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|t| t.notification.id() == id)
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Advances expiry and animation state.
    ///
    /// Should be called from the periodic application tick while a toast is
    /// showing (every 100ms or so).
    pub fn tick(&mut self, now: Instant) {
        let Some(toast) = self.current.as_mut() else {
            return;
        };

        match toast.leaving_since {
            None => {
                if now.saturating_duration_since(toast.created_at) >= DISPLAY_DURATION {
                    toast.leaving_since = Some(now);
                }
            }
            Some(since) => {
                if now.saturating_duration_since(since) >= SLIDE_DURATION {
                    self.current = None;
                }
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the toast currently occupying the slot.
    #[must_use]
    pub fn current(&self) -> Option<&ActiveToast> {
        self.current.as_ref()
    }

    /// Returns whether a toast is showing (the tick subscription gate).
    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortly_after(start: Instant, offset: Duration) -> Instant {
        start + offset
    }

    #[test]
    fn new_emitter_is_empty() {
        let emitter = Emitter::new();
        assert!(!emitter.has_toast());
        assert!(emitter.current().is_none());
    }

    #[test]
    fn emit_replaces_previous_toast() {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::info("first"));
        let first_id = emitter.current().unwrap().notification().id();

        emitter.emit(Notification::error("second"));

        let current = emitter.current().unwrap();
        assert_ne!(current.notification().id(), first_id);
        assert_eq!(current.notification().message_key(), "second");
    }

    #[test]
    fn two_rapid_emissions_leave_exactly_one_toast() {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::success("a"));
        emitter.emit(Notification::success("b"));

        assert!(emitter.has_toast());
        assert_eq!(emitter.current().unwrap().notification().message_key(), "b");
    }

    #[test]
    fn toast_expires_after_display_plus_slide() {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::info("bye"));
        let start = Instant::now();

        // Just before expiry: still there, not leaving.
        emitter.tick(shortly_after(start, DISPLAY_DURATION - Duration::from_millis(50)));
        assert!(emitter.current().is_some_and(|t| !t.is_leaving()));

        // Past the display duration: exit animation starts.
        let leave_at = shortly_after(start, DISPLAY_DURATION + Duration::from_millis(10));
        emitter.tick(leave_at);
        assert!(emitter.current().is_some_and(ActiveToast::is_leaving));

        // Slide-out finished: detached.
        emitter.tick(shortly_after(leave_at, SLIDE_DURATION + Duration::from_millis(10)));
        assert!(!emitter.has_toast());
    }

    #[test]
    fn manual_dismiss_is_immediate_and_idempotent() {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::warning("w"));
        let id = emitter.current().unwrap().notification().id();

        assert!(emitter.dismiss(id));
        assert!(!emitter.has_toast());

        // The stale id must not do anything, and the pending expiry is gone.
        assert!(!emitter.dismiss(id));
        emitter.tick(Instant::now() + DISPLAY_DURATION + SLIDE_DURATION);
        assert!(!emitter.has_toast());
    }

    #[test]
    fn dismiss_with_stale_id_keeps_newer_toast() {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::info("old"));
        let old_id = emitter.current().unwrap().notification().id();
        emitter.emit(Notification::info("new"));

        assert!(!emitter.dismiss(old_id));
        assert!(emitter.has_toast());
    }

    #[test]
    fn slide_offset_projects_phases() {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::info("anim"));
        let toast = emitter.current().unwrap();
        let start = Instant::now();

        // Off-screen during the entry delay.
        assert_eq!(toast.slide_offset(start), 1.0);
        // Fully in view once the slide-in completed.
        let settled = start + ENTRY_DELAY + SLIDE_DURATION + Duration::from_millis(10);
        assert_eq!(toast.slide_offset(settled), 0.0);
    }

    #[test]
    fn warnings_and_errors_are_recorded_in_diagnostics() {
        let handle = crate::diagnostics::DiagnosticsHandle::new(10);
        let mut emitter = Emitter::new();
        emitter.set_diagnostics(handle.clone());

        emitter.emit(Notification::info("quiet"));
        emitter.emit(Notification::warning("loud"));
        emitter.emit(Notification::error("louder"));

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message_key, "loud");
        assert_eq!(events[1].message_key, "louder");
    }

    #[test]
    fn handle_message_dismiss_removes_current() {
        let mut emitter = Emitter::new();
        emitter.emit(Notification::info("n"));
        let id = emitter.current().unwrap().notification().id();

        emitter.handle_message(&Message::Dismiss(id));
        assert!(!emitter.has_toast());
    }
}
