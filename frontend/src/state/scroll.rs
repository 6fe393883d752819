//! Page scroll suspension.
//!
//! Anything that can halt and resume page scrolling implements [`ScrollLock`].
//! Holders never call `start` themselves; they keep a [`ScrollSuspension`]
//! alive for as long as scrolling must stay halted and drop it to resume.

use std::rc::Rc;

pub trait ScrollLock {
    fn stop(&self);
    fn start(&self);
}

impl<L: ScrollLock + ?Sized> ScrollLock for Rc<L> {
    fn stop(&self) {
        (**self).stop()
    }

    fn start(&self) {
        (**self).start()
    }
}

/// A held suspension. Scrolling resumes when this value is dropped, whether
/// that happens through an explicit close or through the owner unmounting.
#[must_use = "scrolling resumes as soon as the suspension is dropped"]
pub struct ScrollSuspension<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollSuspension<L> {
    pub fn acquire(lock: L) -> Self {
        lock.stop();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollSuspension<L> {
    fn drop(&mut self) {
        self.lock.start();
    }
}

/// Halts scrolling by pinning `overflow: hidden` on the document body and
/// restores whatever value was there before.
#[derive(Default)]
pub struct BodyScrollLock {
    previous: std::cell::RefCell<Option<String>>,
}

impl BodyScrollLock {
    fn body_style() -> Option<web_sys::CssStyleDeclaration> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.style())
    }
}

impl ScrollLock for BodyScrollLock {
    fn stop(&self) {
        let Some(style) = Self::body_style() else {
            log::warn!("scroll lock: no document body");
            return;
        };
        let previous = style.get_property_value("overflow").unwrap_or_default();
        *self.previous.borrow_mut() = Some(previous);
        if let Err(e) = style.set_property("overflow", "hidden") {
            log::warn!("scroll lock: failed to stop scrolling: {:?}", e);
        }
    }

    fn start(&self) {
        let Some(style) = Self::body_style() else {
            return;
        };
        let previous = self.previous.borrow_mut().take().unwrap_or_default();
        let result = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &previous)
        };
        if let Err(e) = result {
            log::warn!("scroll lock: failed to resume scrolling: {:?}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ScrollLock;
    use std::cell::Cell;

    /// Counts calls and tracks whether scrolling is currently halted.
    #[derive(Default)]
    pub struct RecordingLock {
        pub stops: Cell<u32>,
        pub starts: Cell<u32>,
    }

    impl RecordingLock {
        pub fn halted(&self) -> bool {
            self.stops.get() > self.starts.get()
        }
    }

    impl ScrollLock for RecordingLock {
        fn stop(&self) {
            self.stops.set(self.stops.get() + 1);
        }

        fn start(&self) {
            self.starts.set(self.starts.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingLock;
    use super::*;

    #[test]
    fn suspension_stops_on_acquire_and_starts_on_drop() {
        let lock = Rc::new(RecordingLock::default());
        let suspension = ScrollSuspension::acquire(lock.clone());
        assert!(lock.halted());
        drop(suspension);
        assert!(!lock.halted());
        assert_eq!(lock.stops.get(), 1);
        assert_eq!(lock.starts.get(), 1);
    }
}
