// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! One toast is visible at a time: emitting a new notification tears down
//! whatever is currently showing. Expiry and the slide animations are
//! driven by the application tick consulting explicit per-toast state, so
//! a dismissed or replaced toast can never be touched by a stale timer.

mod emitter;
mod notification;
mod toast;

pub use emitter::{
    ActiveToast, Emitter, Message as NotificationMessage, DISPLAY_DURATION, ENTRY_DELAY,
    SLIDE_DURATION,
};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
