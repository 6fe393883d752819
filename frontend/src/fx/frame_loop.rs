//! Self-rescheduling per-frame callback.
//!
//! Frames come from a [`FrameSource`]; in the browser that is
//! `requestAnimationFrame` through `gloo-render`, in tests a queue that is
//! pumped by hand. A pending frame is represented by the source's handle, and
//! dropping that handle cancels it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameSource {
    type Handle;

    fn request(&self, callback: FrameCallback) -> Self::Handle;
}

/// Display refresh driven frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

impl FrameSource for AnimationFrames {
    type Handle = gloo_render::AnimationFrame;

    fn request(&self, callback: FrameCallback) -> Self::Handle {
        gloo_render::request_animation_frame(callback)
    }
}

struct Inner<S: FrameSource> {
    source: S,
    tick: Box<dyn FnMut(f64)>,
    pending: Option<S::Handle>,
    running: bool,
}

/// Runs `tick` once per frame until stopped or dropped.
pub struct FrameLoop<S: FrameSource + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: FrameSource + 'static> FrameLoop<S> {
    pub fn new(source: S, tick: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                source,
                tick: Box::new(tick),
                pending: None,
                running: false,
            })),
        }
    }

    pub fn start(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                return;
            }
            inner.running = true;
        }
        Self::schedule(&self.inner);
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Cancels the pending frame. Safe to call any number of times.
    pub fn stop(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.running = false;
            inner.pending.take()
        };
        drop(pending);
    }

    fn schedule(inner: &Rc<RefCell<Inner<S>>>) {
        let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
        let handle = inner.borrow().source.request(Box::new(move |timestamp| {
            if let Some(inner) = weak.upgrade() {
                Self::fire(&inner, timestamp);
            }
        }));
        inner.borrow_mut().pending = Some(handle);
    }

    fn fire(inner: &Rc<RefCell<Inner<S>>>, timestamp: f64) {
        {
            let mut guard = inner.borrow_mut();
            guard.pending = None;
            if !guard.running {
                return;
            }
            (guard.tick)(timestamp);
        }
        if inner.borrow().running {
            Self::schedule(inner);
        }
    }
}

impl<S: FrameSource + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Queue = Rc<RefCell<Vec<(u64, FrameCallback)>>>;

    /// Frames only arrive when the test calls `fire_next`.
    #[derive(Clone, Default)]
    struct ManualFrames {
        queue: Queue,
        next_id: Rc<Cell<u64>>,
    }

    struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Vec<(u64, FrameCallback)>>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().retain(|(id, _)| *id != self.id);
            }
        }
    }

    impl FrameSource for ManualFrames {
        type Handle = ManualHandle;

        fn request(&self, callback: FrameCallback) -> ManualHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    impl ManualFrames {
        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        fn fire_next(&self, timestamp: f64) -> bool {
            let next = {
                let mut queue = self.queue.borrow_mut();
                if queue.is_empty() {
                    None
                } else {
                    Some(queue.remove(0))
                }
            };
            match next {
                Some((_, callback)) => {
                    callback(timestamp);
                    true
                }
                None => false,
            }
        }
    }

    fn counting_loop(frames: &ManualFrames) -> (Rc<Cell<u32>>, FrameLoop<ManualFrames>) {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let frame_loop = FrameLoop::new(frames.clone(), move |_| counter.set(counter.get() + 1));
        (ticks, frame_loop)
    }

    #[test]
    fn reschedules_after_every_tick() {
        let frames = ManualFrames::default();
        let (ticks, frame_loop) = counting_loop(&frames);
        frame_loop.start();
        for i in 0..5 {
            assert_eq!(frames.pending(), 1);
            assert!(frames.fire_next(i as f64 * 16.0));
        }
        assert_eq!(ticks.get(), 5);
        assert!(frame_loop.is_running());
    }

    #[test]
    fn start_twice_keeps_a_single_pending_frame() {
        let frames = ManualFrames::default();
        let (_ticks, frame_loop) = counting_loop(&frames);
        frame_loop.start();
        frame_loop.start();
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn stop_cancels_and_is_idempotent() {
        let frames = ManualFrames::default();
        let (ticks, frame_loop) = counting_loop(&frames);
        frame_loop.start();
        frames.fire_next(0.0);
        frame_loop.stop();
        frame_loop.stop();
        assert_eq!(frames.pending(), 0);
        assert!(!frames.fire_next(16.0));
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn dropping_the_loop_cancels_the_pending_frame() {
        let frames = ManualFrames::default();
        let (ticks, frame_loop) = counting_loop(&frames);
        frame_loop.start();
        drop(frame_loop);
        assert_eq!(frames.pending(), 0);
        assert_eq!(ticks.get(), 0);
    }
}
