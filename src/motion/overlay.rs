//! Project-detail overlay state machine.
//!
//! One modal, two states. Opening locks document scrolling, closing (by
//! button, backdrop click, or teardown) releases it. The lock flag is
//! always the logical OR of "overlay open"; teardown releases it
//! unconditionally and is safe to call repeatedly.

pub type ProjectId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(ProjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayController {
    state: OverlayState,
}

impl OverlayController {
    pub fn new() -> Self {
        OverlayController {
            state: OverlayState::Closed,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn open_id(&self) -> Option<ProjectId> {
        match self.state {
            OverlayState::Closed => None,
            OverlayState::Open(id) => Some(id),
        }
    }

    /// Document scrolling is suppressed exactly while the overlay is open.
    pub fn scroll_locked(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    pub fn open(&mut self, id: ProjectId) {
        self.state = OverlayState::Open(id);
    }

    /// No-op when already closed.
    pub fn close(&mut self) {
        self.state = OverlayState::Closed;
    }

    /// Backdrop clicks close the overlay only when the click landed on the
    /// backdrop element itself. Clicks bubbling out of the modal panel keep
    /// it open; the hit-test is by element identity, not geometry.
    pub fn click_backdrop(&mut self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.close();
        }
    }

    /// Unconditional release on unmount, whatever state was active.
    /// Idempotent.
    pub fn teardown(&mut self) {
        self.state = OverlayState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close_releases_the_lock() {
        let mut overlay = OverlayController::new();
        overlay.open(2);
        assert_eq!(overlay.state(), OverlayState::Open(2));
        assert!(overlay.scroll_locked());

        overlay.close();
        assert_eq!(overlay.state(), OverlayState::Closed);
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn close_when_closed_is_a_noop() {
        let mut overlay = OverlayController::new();
        overlay.close();
        assert_eq!(overlay.state(), OverlayState::Closed);
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn opening_another_project_replaces_the_first() {
        let mut overlay = OverlayController::new();
        overlay.open(0);
        overlay.open(4);
        assert_eq!(overlay.open_id(), Some(4));
        assert!(overlay.scroll_locked());
    }

    #[test]
    fn backdrop_click_closes_only_on_identity_match() {
        let mut overlay = OverlayController::new();
        overlay.open(1);

        // click bubbled up from inside the modal panel
        overlay.click_backdrop(false);
        assert_eq!(overlay.state(), OverlayState::Open(1));

        // click directly on the backdrop
        overlay.click_backdrop(true);
        assert_eq!(overlay.state(), OverlayState::Closed);
    }

    #[test]
    fn teardown_releases_lock_from_any_state_and_is_idempotent() {
        let mut overlay = OverlayController::new();
        overlay.open(3);
        overlay.teardown();
        assert!(!overlay.scroll_locked());
        overlay.teardown();
        assert!(!overlay.scroll_locked());

        let mut closed = OverlayController::new();
        closed.teardown();
        assert!(!closed.scroll_locked());
    }
}
