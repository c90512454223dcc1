//! Debounce
//!
//! Collapses rapid triggers into one delayed call that sees only the last
//! arguments. Single-threaded: built on `Rc` and `Cell`, driven by whatever
//! timer the [`Scheduler`] wraps.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Delay used for free-text filter input, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Timer seam: run `task` once after `delay_ms`
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending,
}

struct Shared {
    generation: Cell<u64>,
    pending: Cell<bool>,
}

/// Debounced wrapper around an action taking `A`.
///
/// Clones share the same pending call.
pub struct Debouncer<A> {
    scheduler: Rc<dyn Scheduler>,
    action: Rc<dyn Fn(A)>,
    delay_ms: u32,
    shared: Rc<Shared>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Rc::clone(&self.scheduler),
            action: Rc::clone(&self.action),
            delay_ms: self.delay_ms,
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<A: 'static> Debouncer<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay_ms: u32, action: impl Fn(A) + 'static) -> Self {
        Self {
            scheduler,
            action: Rc::new(action),
            delay_ms,
            shared: Rc::new(Shared {
                generation: Cell::new(0),
                pending: Cell::new(false),
            }),
        }
    }

    pub fn state(&self) -> DebounceState {
        if self.shared.pending.get() {
            DebounceState::Pending
        } else {
            DebounceState::Idle
        }
    }

    /// Schedule `args`, superseding any call still waiting.
    ///
    /// With a zero delay the action runs immediately.
    pub fn trigger(&self, args: A) {
        let generation = self.shared.generation.get().wrapping_add(1);
        self.shared.generation.set(generation);

        if self.delay_ms == 0 {
            self.shared.pending.set(false);
            (self.action)(args);
            return;
        }

        self.shared.pending.set(true);
        let shared = Rc::clone(&self.shared);
        let action = Rc::clone(&self.action);
        self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                // Superseded by a later trigger or cancelled
                if shared.generation.get() != generation {
                    return;
                }
                shared.pending.set(false);
                action(args);
            }),
        );
    }

    /// Drop the waiting call, if any, without running it
    pub fn cancel(&self) {
        if self.shared.pending.replace(false) {
            let generation = self.shared.generation.get().wrapping_add(1);
            self.shared.generation.set(generation);
        }
    }
}

struct ScheduledTask {
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Scheduler on a virtual clock, advanced by hand.
///
/// Lets debounced code run headlessly; nothing fires until [`advance`] is called.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<ScheduledTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Tasks scheduled but not yet run, superseded ones included
    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running every task that comes due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(idx, _)| idx);
                due.map(|idx| queue.remove(idx))
            };
            match next {
                Some(scheduled) => {
                    self.now_ms.set(scheduled.due_ms);
                    // Queue borrow is released; the task may schedule more work
                    (scheduled.task)();
                }
                None => break,
            }
        }
        self.now_ms.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(ScheduledTask {
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}
