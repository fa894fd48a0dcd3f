//! Single-selection activation.
//!
//! A `Selection` tracks which one item of a fixed id set is active. Two
//! policies exist because surfaces differ on what a repeated activation means:
//!
//! - `Replace`: activating the active id keeps it active. Only `dismiss`
//!   clears it (detail overlays).
//! - `Toggle`: activating the active id clears it (inline expanders).
//!
//! Under both policies activating a different id replaces the current one, so
//! at most one id is ever active. Ids outside the set are ignored.

use std::fmt::Debug;
use std::rc::Rc;

use folio_core::{Signal, signal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPolicy {
    Replace,
    Toggle,
}

#[derive(Clone)]
pub struct Selection<K: 'static> {
    known: Rc<[K]>,
    policy: SelectionPolicy,
    active: Signal<Option<K>>,
}

impl<K: Copy + PartialEq + Debug + 'static> Selection<K> {
    pub fn new(ids: impl IntoIterator<Item = K>, policy: SelectionPolicy) -> Self {
        Self {
            known: ids.into_iter().collect(),
            policy,
            active: signal(None),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn contains(&self, id: K) -> bool {
        self.known.contains(&id)
    }

    /// Applies the policy to a click on `id`. Returns whether the active item
    /// changed.
    pub fn activate(&self, id: K) -> bool {
        if !self.contains(id) {
            log::debug!("ignoring activation of unknown id {id:?}");
            return false;
        }
        let next = match (self.policy, self.active.get()) {
            (SelectionPolicy::Toggle, Some(current)) if current == id => None,
            _ => Some(id),
        };
        self.active.set_if_changed(next)
    }

    /// Clears whichever item is active, returning it.
    pub fn dismiss(&self) -> Option<K> {
        let prev = self.active.get();
        self.active.set_if_changed(None);
        prev
    }

    pub fn is_active(&self, id: K) -> bool {
        self.active.get() == Some(id)
    }

    pub fn active(&self) -> Option<K> {
        self.active.get()
    }

    pub fn signal(&self) -> Signal<Option<K>> {
        self.active.clone()
    }
}

impl<K: Debug + 'static> Debug for Selection<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("policy", &self.policy)
            .field("active", &self.active)
            .field("known", &self.known.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(sel: &Selection<u32>, ids: &[u32]) -> usize {
        ids.iter().filter(|&&id| sel.is_active(id)).count()
    }

    #[test]
    fn replace_is_idempotent() {
        let sel = Selection::new(1..=6u32, SelectionPolicy::Replace);
        assert!(sel.activate(3));
        assert!(!sel.activate(3));
        assert!(sel.is_active(3));
    }

    #[test]
    fn replace_switches_items() {
        let sel = Selection::new(1..=6u32, SelectionPolicy::Replace);
        sel.activate(3);
        assert!(sel.is_active(3));
        assert!(!sel.is_active(1));

        sel.activate(5);
        assert!(!sel.is_active(3));
        assert!(sel.is_active(5));
        assert_eq!(sel.dismiss(), Some(5));
        assert_eq!(sel.active(), None);
    }

    #[test]
    fn toggle_collapses_on_second_activation() {
        let sel = Selection::new(1..=5u32, SelectionPolicy::Toggle);
        assert!(sel.activate(2));
        assert!(sel.is_active(2));
        assert!(sel.activate(2));
        assert!(!sel.is_active(2));
        assert_eq!(sel.active(), None);
    }

    #[test]
    fn toggle_replaces_other_item() {
        let sel = Selection::new(1..=5u32, SelectionPolicy::Toggle);
        sel.activate(2);
        sel.activate(4);
        assert!(!sel.is_active(2));
        assert!(sel.is_active(4));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        for policy in [SelectionPolicy::Replace, SelectionPolicy::Toggle] {
            let sel = Selection::new(1..=6u32, policy);
            assert!(!sel.activate(0));
            assert!(!sel.activate(7));
            assert_eq!(sel.active(), None);
            assert!(!sel.is_active(7));

            sel.activate(2);
            assert!(!sel.activate(99));
            assert!(sel.is_active(2));
        }
    }

    #[test]
    fn at_most_one_active_after_any_sequence() {
        let ids: Vec<u32> = (1..=6).collect();
        for policy in [SelectionPolicy::Replace, SelectionPolicy::Toggle] {
            let sel = Selection::new(ids.clone(), policy);
            for id in [1, 1, 4, 9, 2, 2, 2, 6, 0, 3] {
                sel.activate(id);
                assert!(active_count(&sel, &ids) <= 1, "{policy:?} after {id}");
            }
        }
    }

    #[test]
    fn dismiss_when_nothing_active() {
        let sel = Selection::new([1u32], SelectionPolicy::Replace);
        assert_eq!(sel.dismiss(), None);
    }
}
