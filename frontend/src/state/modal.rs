//! Which feature overlay is open, and the scroll suspension that comes with it.

use super::scroll::{ScrollLock, ScrollSuspension};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    Discovery,
    Harmonization,
    Drafting,
    Compliance,
    Risk,
    Repository,
}

impl ModalId {
    pub const ALL: [ModalId; 6] = [
        ModalId::Discovery,
        ModalId::Harmonization,
        ModalId::Drafting,
        ModalId::Compliance,
        ModalId::Risk,
        ModalId::Repository,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModalId::Discovery => "discovery",
            ModalId::Harmonization => "harmonization",
            ModalId::Drafting => "drafting",
            ModalId::Compliance => "compliance",
            ModalId::Risk => "risk",
            ModalId::Repository => "repository",
        }
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one modal is open at a time. While one is, the controller holds a
/// single [`ScrollSuspension`]; dropping the controller releases it.
pub struct ModalController<L: ScrollLock + Clone> {
    lock: L,
    active: Option<ModalId>,
    suspension: Option<ScrollSuspension<L>>,
}

impl<L: ScrollLock + Clone> ModalController<L> {
    pub fn new(lock: L) -> Self {
        Self {
            lock,
            active: None,
            suspension: None,
        }
    }

    pub fn active(&self) -> Option<ModalId> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Replaces whatever is open. Only the transition out of "nothing open"
    /// suspends scrolling.
    pub fn open(&mut self, id: ModalId) {
        if self.suspension.is_none() {
            self.suspension = Some(ScrollSuspension::acquire(self.lock.clone()));
        }
        if self.active != Some(id) {
            log::debug!("modal open: {} (was {:?})", id, self.active);
        }
        self.active = Some(id);
    }

    pub fn close(&mut self) {
        if let Some(id) = self.active.take() {
            log::debug!("modal close: {}", id);
        }
        self.suspension = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scroll::testing::RecordingLock;
    use proptest::prelude::*;
    use std::rc::Rc;

    fn controller() -> (Rc<RecordingLock>, ModalController<Rc<RecordingLock>>) {
        let lock = Rc::new(RecordingLock::default());
        (lock.clone(), ModalController::new(lock))
    }

    #[test]
    fn second_open_replaces_first_with_one_suspension() {
        let (lock, mut modals) = controller();
        modals.open(ModalId::Discovery);
        modals.open(ModalId::Compliance);
        assert_eq!(modals.active(), Some(ModalId::Compliance));
        assert_eq!(lock.stops.get(), 1);
        assert!(lock.halted());
    }

    #[test]
    fn opening_the_same_modal_twice_suspends_once() {
        let (lock, mut modals) = controller();
        modals.open(ModalId::Risk);
        modals.open(ModalId::Risk);
        assert_eq!(lock.stops.get(), 1);
        assert_eq!(modals.active(), Some(ModalId::Risk));
    }

    #[test]
    fn close_resumes_scrolling() {
        let (lock, mut modals) = controller();
        modals.open(ModalId::Repository);
        modals.close();
        assert_eq!(modals.active(), None);
        assert!(!lock.halted());
    }

    #[test]
    fn close_without_open_does_nothing() {
        let (lock, mut modals) = controller();
        modals.close();
        assert_eq!(lock.stops.get(), 0);
        assert_eq!(lock.starts.get(), 0);
    }

    #[test]
    fn dropping_while_open_resumes_scrolling() {
        let (lock, mut modals) = controller();
        modals.open(ModalId::Harmonization);
        drop(modals);
        assert!(!lock.halted());
        assert_eq!(lock.starts.get(), 1);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Open(ModalId),
        Close,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..ModalId::ALL.len()).prop_map(|i| Op::Open(ModalId::ALL[i])),
            Just(Op::Close),
        ]
    }

    proptest! {
        #[test]
        fn halted_exactly_while_a_modal_is_open(ops in proptest::collection::vec(op(), 0..40)) {
            let (lock, mut modals) = controller();
            for op in ops {
                match op {
                    Op::Open(id) => modals.open(id),
                    Op::Close => modals.close(),
                }
                prop_assert_eq!(lock.halted(), modals.is_open());
                prop_assert!(lock.stops.get() - lock.starts.get() <= 1);
            }
            drop(modals);
            prop_assert!(!lock.halted());
        }
    }
}
