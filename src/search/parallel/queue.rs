//! Fixed-capacity blocking FIFO between search workers and the printer.
//!
//! A circular buffer guarded by one mutex, with one condition variable per
//! direction of flow: producers wait on `not_full`, consumers on `not_empty`.
//! Every wait re-checks its predicate, so spurious wake-ups are harmless.
//!
//! `close` is the cancellation path. It wakes every waiter; afterwards
//! enqueue hands the item back and dequeue returns `None` once the buffer is
//! empty. The lock is never held across user code, so a consumer that stops
//! at any point leaves the indices consistent.

#![allow(dead_code)]

use parking_lot::{Condvar, Mutex};

use crate::error::{QueensError, Result};

/// Item returned to the producer because the queue was closed.
#[derive(Debug, PartialEq, Eq)]
pub struct Closed<T>(pub T);

struct QueueState<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    count: usize,
    closed: bool,
}

/// Bounded multi-producer queue with blocking enqueue and dequeue.
pub struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(QueensError::InvalidCapacity(capacity));
        }
        let slots = (0..capacity).map(|_| None).collect();
        Ok(Self {
            state: Mutex::new(QueueState {
                slots,
                front: 0,
                rear: 0,
                count: 0,
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state.lock().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Append `item`, blocking while the queue is full.
    pub fn enqueue(&self, item: T) -> std::result::Result<(), Closed<T>> {
        let mut state = self.state.lock();
        while state.count == self.capacity && !state.closed {
            self.not_full.wait(&mut state);
        }
        if state.closed {
            return Err(Closed(item));
        }

        let rear = state.rear;
        state.slots[rear] = Some(item);
        state.rear = (rear + 1) % self.capacity;
        state.count += 1;

        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove the oldest item, blocking while the queue is empty.
    ///
    /// Returns `None` only once the queue is closed and drained.
    pub fn dequeue(&self) -> Option<T> {
        let mut state = self.state.lock();
        while state.count == 0 && !state.closed {
            self.not_empty.wait(&mut state);
        }
        if state.count == 0 {
            return None;
        }

        let front = state.front;
        let item = state.slots[front].take();
        state.front = (front + 1) % self.capacity;
        state.count -= 1;

        self.not_full.notify_one();
        item
    }

    /// Stop accepting items and release every blocked caller.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        drop(state);
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }
}

impl<T> std::fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("count", &state.count)
            .field("front", &state.front)
            .field("rear", &state.rear)
            .field("closed", &state.closed)
            .finish()
    }
}
