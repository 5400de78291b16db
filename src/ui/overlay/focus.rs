// SPDX-License-Identifier: MPL-2.0
//! Cyclic keyboard focus containment for the active overlay.
//!
//! While an overlay is open, Tab and Shift+Tab only ever move between the
//! overlay's own controls, wrapping at both ends. The ring is computed from
//! the overlay's control list at open time and dropped on close.

/// The ordered set of focusable controls inside the open overlay, plus the
/// index of the one currently holding focus.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    targets: Vec<&'static str>,
    index: Option<usize>,
}

impl FocusRing {
    /// Builds a ring over the given controls with focus on the first one.
    ///
    /// An empty control list yields a ring that never focuses anything;
    /// every movement on it is a no-op.
    #[must_use]
    pub fn new(targets: &[&'static str]) -> Self {
        Self {
            targets: targets.to_vec(),
            index: if targets.is_empty() { None } else { Some(0) },
        }
    }

    /// The control currently holding focus.
    #[must_use]
    pub fn focused(&self) -> Option<&'static str> {
        self.index.map(|i| self.targets[i])
    }

    /// Moves focus forward, wrapping from the last control to the first.
    pub fn next(&mut self) -> Option<&'static str> {
        let len = self.targets.len();
        if len == 0 {
            return None;
        }
        let current = self.index.unwrap_or(0);
        self.index = Some((current + 1) % len);
        self.focused()
    }

    /// Moves focus backward, wrapping from the first control to the last.
    pub fn previous(&mut self) -> Option<&'static str> {
        let len = self.targets.len();
        if len == 0 {
            return None;
        }
        let current = self.index.unwrap_or(0);
        self.index = Some((current + len - 1) % len);
        self.focused()
    }

    /// Whether the ring contains the given control.
    #[must_use]
    pub fn contains(&self, target: &str) -> bool {
        self.targets.iter().any(|t| *t == target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ring_focuses_first_control() {
        let ring = FocusRing::new(&["close", "ok"]);
        assert_eq!(ring.focused(), Some("close"));
    }

    #[test]
    fn empty_ring_never_focuses() {
        let mut ring = FocusRing::new(&[]);
        assert_eq!(ring.focused(), None);
        assert_eq!(ring.next(), None);
        assert_eq!(ring.previous(), None);
    }

    #[test]
    fn tab_wraps_from_last_to_first() {
        let mut ring = FocusRing::new(&["a", "b", "c"]);
        assert_eq!(ring.next(), Some("b"));
        assert_eq!(ring.next(), Some("c"));
        assert_eq!(ring.next(), Some("a"));
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        let mut ring = FocusRing::new(&["a", "b", "c"]);
        assert_eq!(ring.previous(), Some("c"));
        assert_eq!(ring.previous(), Some("b"));
    }

    #[test]
    fn cycling_covers_only_ring_members() {
        let mut ring = FocusRing::new(&["a", "b"]);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(ring.focused().unwrap());
            ring.next();
        }
        assert!(seen.iter().all(|t| ring.contains(t)));
    }
}
