use std::time::Duration;

use futures::channel::oneshot;

/// Something that can run a callback later and hand back a way to call it off.
///
/// The page only ever runs on one UI thread, so callbacks are not `Send`.
pub trait Scheduler: Clone + 'static {
    type Task: ScheduledTask;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Task;
}

pub trait ScheduledTask {
    /// Stops the callback from running. Safe to call more than once, and safe
    /// to call after the callback already fired.
    fn cancel(&mut self);
}

/// Resolves once `delay` has elapsed on `scheduler`.
pub async fn sleep<S: Scheduler>(scheduler: &S, delay: Duration) {
    let (tx, rx) = oneshot::channel::<()>();
    let _task = scheduler.schedule(
        delay,
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    // a cancelled sender resolves too, which is fine for a sleep
    let _ = rx.await;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::{ScheduledTask, Scheduler};

    struct Pending {
        id: usize,
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: usize,
        pending: Vec<Pending>,
    }

    /// Virtual-clock scheduler. Nothing runs until `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        pub fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        /// Deadline of the earliest pending callback, if any.
        pub fn next_due(&self) -> Option<Duration> {
            self.clock.borrow().pending.iter().map(|p| p.due).min()
        }

        /// Moves the clock forward, firing every callback that comes due in
        /// deadline order. Callbacks may schedule further work.
        pub fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let p = clock.pending.remove(i);
                        clock.now = p.due;
                        p.callback
                    })
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    pub struct ManualTask {
        id: usize,
        clock: Rc<RefCell<Clock>>,
    }

    impl ScheduledTask for ManualTask {
        fn cancel(&mut self) {
            self.clock.borrow_mut().pending.retain(|p| p.id != self.id);
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualTask {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.pending.push(Pending { id, due, callback });
            ManualTask {
                id,
                clock: self.clock.clone(),
            }
        }
    }
}
