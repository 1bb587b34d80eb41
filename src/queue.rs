//! A condition-variable-backed blocking FIFO with a "closed" sentinel,
//! used to hand frames from the native driver's callback thread to the
//! application thread blocked in `read`.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

struct Inner<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// A multi-producer, single-consumer-in-spirit blocking queue.
///
/// `push` never blocks. `pop` blocks until an item is available or the
/// queue is closed. Once closed, `pop` drains whatever remains and then
/// always reports closed — it never blocks again.
pub struct EventQueue<T> {
    inner: Mutex<Inner<T>>,
    condvar: Condvar,
}

/// The outcome of a blocking [`EventQueue::pop`].
pub enum PopResult<T> {
    Item(T),
    /// The queue is closed and has no more buffered items.
    Closed,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        EventQueue {
            inner: Mutex::new(Inner { items: VecDeque::new(), closed: false }),
            condvar: Condvar::new(),
        }
    }

    /// Enqueues `item` and wakes one waiting `pop`. A no-op once closed,
    /// matching the receive callback's "drop silently after shutdown"
    /// contract.
    pub fn push(&self, item: T) {
        let mut inner = self.inner.lock().expect("event queue mutex poisoned");
        if inner.closed {
            return;
        }
        inner.items.push_back(item);
        self.condvar.notify_one();
    }

    /// Blocks until an item is available or the queue is closed.
    pub fn pop(&self) -> PopResult<T> {
        let mut inner = self.inner.lock().expect("event queue mutex poisoned");
        loop {
            if let Some(item) = inner.items.pop_front() {
                return PopResult::Item(item);
            }
            if inner.closed {
                return PopResult::Closed;
            }
            inner = self.condvar.wait(inner).expect("event queue mutex poisoned");
        }
    }

    /// Marks the queue closed and wakes every blocked `pop`. Buffered
    /// items already pushed are still drained by subsequent `pop` calls
    /// before `Closed` is reported.
    pub fn close(&self) {
        let mut inner = self.inner.lock().expect("event queue mutex poisoned");
        inner.closed = true;
        self.condvar.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().expect("event queue mutex poisoned").closed
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
