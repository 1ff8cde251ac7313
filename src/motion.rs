//! Visibility-triggered animation orchestration.
//!
//! The core modules ([`registry`], [`trigger`], [`effect`], [`player`],
//! [`scroll`], [`overlay`]) are plain data and logic, unit-tested off the
//! browser. [`observer`] is the glue that wires them to
//! `IntersectionObserver`, the window scroll position, and inline-style
//! mutation during a client mount cycle.

pub mod effect;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod observer;
pub mod overlay;
pub mod player;
pub mod registry;
pub mod scroll;
pub mod trigger;

pub use effect::{AnimProperty, Easing, EffectDescriptor, TriggerSpec};
pub use overlay::{OverlayController, OverlayState, ProjectId};
pub use registry::{GroupKey, Registry, SectionId};
pub use scroll::ScrollSample;
pub use trigger::TriggerSet;

/// Owns every resource acquired during one mount cycle — observers,
/// listeners, the deferred arming callback — and releases them exactly
/// once, in reverse acquisition order. Dropping an undisposed set disposes
/// it, so cleanup is total even on abrupt unmounts.
#[derive(Default)]
pub struct Disposer {
    cleanups: Vec<Box<dyn FnOnce()>>,
    disposed: bool,
}

impl Disposer {
    pub fn new() -> Self {
        Disposer {
            cleanups: Vec::new(),
            disposed: false,
        }
    }

    /// Registers a release action. Pushing after disposal runs the action
    /// immediately; nothing may outlive the mount cycle.
    pub fn push(&mut self, cleanup: impl FnOnce() + 'static) {
        if self.disposed {
            cleanup();
        } else {
            self.cleanups.push(Box::new(cleanup));
        }
    }

    /// Releases everything. Idempotent; later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        while let Some(cleanup) = self.cleanups.pop() {
            cleanup();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn pending(&self) -> usize {
        self.cleanups.len()
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dispose_releases_everything_in_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut d = Disposer::new();
        for i in 0..3 {
            let log = log.clone();
            d.push(move || log.borrow_mut().push(i));
        }
        assert_eq!(d.pending(), 3);

        d.dispose();
        assert_eq!(*log.borrow(), vec![2, 1, 0]);
        assert_eq!(d.pending(), 0);
        assert!(d.is_disposed());
    }

    #[test]
    fn dispose_twice_is_safe() {
        let count = Rc::new(RefCell::new(0));
        let mut d = Disposer::new();
        let c = count.clone();
        d.push(move || *c.borrow_mut() += 1);
        d.dispose();
        d.dispose();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn drop_disposes_pending_cleanups() {
        let count = Rc::new(RefCell::new(0));
        {
            let mut d = Disposer::new();
            let c = count.clone();
            d.push(move || *c.borrow_mut() += 1);
        }
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn push_after_dispose_runs_immediately() {
        let count = Rc::new(RefCell::new(0));
        let mut d = Disposer::new();
        d.dispose();
        let c = count.clone();
        d.push(move || *c.borrow_mut() += 1);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(d.pending(), 0);
    }
}
