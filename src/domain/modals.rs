//! Modal visibility registry
//!
//! Modals are declared statically; only their visibility changes. There is no
//! mutual exclusion: any number of modals can be visible at the same time.

use std::collections::BTreeSet;

use crate::schemas::ModalId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalRegistry {
    visible: BTreeSet<ModalId>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a modal. Returns false if it was already visible.
    pub fn open(&mut self, modal: ModalId) -> bool {
        self.visible.insert(modal)
    }

    /// Hide a modal. Returns false if it was already hidden.
    pub fn close(&mut self, modal: ModalId) -> bool {
        self.visible.remove(&modal)
    }

    /// Handle a click inside a modal's overlay.
    ///
    /// Only a click whose target is the modal root (the backdrop) closes it;
    /// clicks on descendants are ignored.
    pub fn backdrop_click(&mut self, modal: ModalId, on_root: bool) -> bool {
        on_root && self.close(modal)
    }

    /// Hide every visible modal, returning the ones that were closed
    pub fn close_all(&mut self) -> Vec<ModalId> {
        std::mem::take(&mut self.visible).into_iter().collect()
    }

    pub fn is_visible(&self, modal: ModalId) -> bool {
        self.visible.contains(&modal)
    }

    pub fn visible(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.visible.iter().copied()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_hides_modal() {
        let mut modals = ModalRegistry::new();
        assert!(modals.open(ModalId::ProjectModal));
        assert!(modals.is_visible(ModalId::ProjectModal));
        assert!(modals.close(ModalId::ProjectModal));
        assert!(!modals.is_visible(ModalId::ProjectModal));
    }

    #[test]
    fn test_two_modals_can_be_visible_together() {
        // No exclusivity: opening a second modal leaves the first one shown.
        let mut modals = ModalRegistry::new();
        modals.open(ModalId::ProjectModal);
        modals.open(ModalId::InviteModal);
        assert!(modals.is_visible(ModalId::ProjectModal));
        assert!(modals.is_visible(ModalId::InviteModal));
        assert_eq!(modals.visible_count(), 2);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut modals = ModalRegistry::new();
        assert!(modals.open(ModalId::ChatModal));
        assert!(!modals.open(ModalId::ChatModal));
        assert!(modals.close(ModalId::ChatModal));
        assert!(!modals.close(ModalId::ChatModal));
    }

    #[test]
    fn test_backdrop_click_requires_root_target() {
        let mut modals = ModalRegistry::new();
        modals.open(ModalId::InviteModal);

        assert!(!modals.backdrop_click(ModalId::InviteModal, false));
        assert!(modals.is_visible(ModalId::InviteModal));

        assert!(modals.backdrop_click(ModalId::InviteModal, true));
        assert!(!modals.is_visible(ModalId::InviteModal));
    }

    #[test]
    fn test_close_all_returns_closed_modals() {
        let mut modals = ModalRegistry::new();
        modals.open(ModalId::TodosModal);
        modals.open(ModalId::ProjectModal);

        let closed = modals.close_all();
        assert_eq!(closed, vec![ModalId::ProjectModal, ModalId::TodosModal]);
        assert_eq!(modals.visible_count(), 0);
        assert!(modals.close_all().is_empty());
    }
}
