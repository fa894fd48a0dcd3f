use std::fmt::Debug;

use folio_core::{Signal, signal};

/// Which item the pointer is over. Cosmetic only.
///
/// Last event wins: an enter replaces any previous hover, and a leave only
/// clears the hover if it is for the item currently hovered.
#[derive(Clone, Debug)]
pub struct Hover<K: 'static> {
    hovered: Signal<Option<K>>,
}

impl<K: Copy + PartialEq + Debug + 'static> Default for Hover<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq + Debug + 'static> Hover<K> {
    pub fn new() -> Self {
        Self {
            hovered: signal(None),
        }
    }

    pub fn enter(&self, id: K) {
        self.hovered.set_if_changed(Some(id));
    }

    pub fn leave(&self, id: K) {
        if self.hovered.get() == Some(id) {
            self.hovered.set(None);
        }
    }

    pub fn clear(&self) {
        self.hovered.set_if_changed(None);
    }

    pub fn hovered(&self) -> Option<K> {
        self.hovered.get()
    }

    pub fn is_hovered(&self, id: K) -> bool {
        self.hovered.get() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_leave_clears() {
        let h = Hover::new();
        h.enter(3u32);
        assert!(h.is_hovered(3));
        h.leave(3);
        assert_eq!(h.hovered(), None);
    }

    #[test]
    fn stale_leave_keeps_newer_hover() {
        let h = Hover::new();
        h.enter(1u32);
        h.enter(2);
        h.leave(1);
        assert_eq!(h.hovered(), Some(2));
    }

    #[test]
    fn rapid_sequence_resolves_to_last_event() {
        let h = Hover::new();
        for _ in 0..10 {
            h.enter(4u32);
            h.leave(4);
        }
        assert_eq!(h.hovered(), None);
        h.leave(4);
        h.enter(4);
        assert_eq!(h.hovered(), Some(4));
    }
}
