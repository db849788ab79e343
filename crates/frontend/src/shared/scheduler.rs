//! Scheduled tasks driven by browser timers.
//!
//! A [`RepeatingTask`] runs until it is dropped. A [`TaskSlot`] owns at most
//! one task and applies [`TimerCommand`]s produced by pure state machines.

use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;

/// What the owner of a repeating task should do after a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the running task alone
    Keep,
    /// Restart the period from now
    Reset,
    /// Stop the task
    Cancel,
}

pub struct RepeatingTask {
    _interval: Interval,
}

impl RepeatingTask {
    pub fn every<F>(period_ms: u32, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            _interval: Interval::new(period_ms, tick),
        }
    }
}

/// Holder for a single running task. Replacing or clearing the task drops it,
/// which cancels the underlying timer.
pub struct TaskSlot<T = RepeatingTask> {
    current: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for TaskSlot<T> {
    fn clone(&self) -> Self {
        Self {
            current: Rc::clone(&self.current),
        }
    }
}

impl<T> Default for TaskSlot<T> {
    fn default() -> Self {
        Self {
            current: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T> TaskSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self, task: T) {
        // old task is dropped here
        self.current.borrow_mut().replace(task);
    }

    pub fn cancel(&self) {
        self.current.borrow_mut().take();
    }

    pub fn is_armed(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Applies a command; `rearm` is called only for [`TimerCommand::Reset`]
    /// and may return `None` when no task should run any more.
    pub fn apply<F>(&self, command: TimerCommand, rearm: F)
    where
        F: FnOnce() -> Option<T>,
    {
        match command {
            TimerCommand::Keep => {}
            TimerCommand::Cancel => self.cancel(),
            TimerCommand::Reset => {
                self.cancel();
                if let Some(task) = rearm() {
                    self.arm(task);
                }
            }
        }
    }
}
