use std::{cell::RefCell, rc::Rc, time::Duration};

use futures::{
    future::{AbortHandle, Abortable, LocalBoxFuture},
    FutureExt,
};
use log::{debug, warn};

use super::{ContactForm, ContactTransport, Field, SendError, SubmissionStatus, SubmitRejected};
use crate::schedule::{ScheduledTask, Scheduler};

/// How a send attempt ended, as seen by whoever drives the future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(SendError),
    /// The form was torn down before the send finished; nothing was applied.
    Cancelled,
}

/// The in-flight send. Must be polled (e.g. spawned) for the attempt to finish.
pub type Submission = LocalBoxFuture<'static, SubmitOutcome>;

type Listener = Rc<dyn Fn(&ContactForm)>;

struct Shared<S: Scheduler> {
    form: ContactForm,
    revert: Option<S::Task>,
    in_flight: Option<AbortHandle>,
    torn_down: bool,
}

/// Drives a [`ContactForm`] through validation, sending, and the timed
/// return to idle after a success.
///
/// Clones share the same form; the controller is single-threaded.
pub struct ContactFormController<T, S: Scheduler> {
    shared: Rc<RefCell<Shared<S>>>,
    transport: Rc<T>,
    scheduler: S,
    success_display: Duration,
    listener: Option<Listener>,
}

impl<T, S: Scheduler> Clone for ContactFormController<T, S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            transport: self.transport.clone(),
            scheduler: self.scheduler.clone(),
            success_display: self.success_display,
            listener: self.listener.clone(),
        }
    }
}

impl<T, S> ContactFormController<T, S>
where
    T: ContactTransport + 'static,
    S: Scheduler,
{
    pub fn new(transport: T, scheduler: S, success_display: Duration) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                form: ContactForm::new(),
                revert: None,
                in_flight: None,
                torn_down: false,
            })),
            transport: Rc::new(transport),
            scheduler,
            success_display,
            listener: None,
        }
    }

    /// Registers a callback that receives a snapshot after every change.
    pub fn with_listener(mut self, listener: impl Fn(&ContactForm) + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    pub fn form(&self) -> ContactForm {
        self.shared.borrow().form.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.shared.borrow().form.status()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        {
            let mut shared = self.shared.borrow_mut();
            if shared.torn_down {
                return;
            }
            shared.form.set_field(field, value);
        }
        self.notify();
    }

    /// Validates and starts a send. Everything up to the `Submitting`
    /// transition happens before this returns, so a second call made before
    /// the returned future is polled is already rejected.
    pub fn submit(&self) -> Result<Submission, SubmitRejected> {
        let started = {
            let mut shared = self.shared.borrow_mut();
            if shared.torn_down {
                return Err(SubmitRejected::TornDown);
            }
            let started = shared.form.begin_submit();
            if started.is_ok() {
                if let Some(mut revert) = shared.revert.take() {
                    revert.cancel();
                }
            }
            started
        };
        self.notify();
        let record = started?;
        debug!("contact: submitting");

        let (abort, registration) = AbortHandle::new_pair();
        self.shared.borrow_mut().in_flight = Some(abort);

        let transport = self.transport.clone();
        let send = Abortable::new(
            async move { transport.send(&record).await },
            registration,
        );
        let this = self.clone();
        Ok(async move {
            match send.await {
                Ok(result) => this.complete(result),
                Err(_aborted) => {
                    debug!("contact: send abandoned after teardown");
                    SubmitOutcome::Cancelled
                }
            }
        }
        .boxed_local())
    }

    fn complete(&self, result: Result<(), SendError>) -> SubmitOutcome {
        {
            let mut shared = self.shared.borrow_mut();
            shared.in_flight = None;
            if shared.torn_down {
                return SubmitOutcome::Cancelled;
            }
            shared.form.finish_submit(&result);
        }

        match &result {
            Ok(()) => {
                debug!("contact: sent, showing success for {:?}", self.success_display);
                let revert = self.schedule_revert();
                self.shared.borrow_mut().revert = Some(revert);
            }
            Err(e) => warn!("contact: send failed: {e}"),
        }
        self.notify();

        match result {
            Ok(()) => SubmitOutcome::Sent,
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    fn schedule_revert(&self) -> S::Task {
        let shared = Rc::downgrade(&self.shared);
        let listener = self.listener.clone();
        self.scheduler.schedule(
            self.success_display,
            Box::new(move || {
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                let snapshot = {
                    let mut shared = shared.borrow_mut();
                    shared.revert = None;
                    if !shared.form.revert_success() {
                        return;
                    }
                    shared.form.clone()
                };
                debug!("contact: back to idle");
                if let Some(listener) = listener {
                    listener(&snapshot);
                }
            }),
        )
    }

    /// Cancels the pending revert and abandons any in-flight send. After
    /// this the controller ignores all input. Idempotent.
    pub fn teardown(&self) {
        let mut shared = self.shared.borrow_mut();
        if shared.torn_down {
            return;
        }
        shared.torn_down = true;
        if let Some(mut revert) = shared.revert.take() {
            revert.cancel();
        }
        if let Some(abort) = shared.in_flight.take() {
            abort.abort();
        }
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            let snapshot = self.form();
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::VecDeque,
        rc::Rc,
        time::Duration,
    };

    use async_trait::async_trait;
    use futures::{executor::LocalPool, task::LocalSpawnExt};

    use super::*;
    use crate::{
        contact::{ContactRecord, SimulatedTransport, FAILURE_BANNER},
        schedule::{sleep, testing::ManualScheduler},
    };

    const SEND: Duration = Duration::from_millis(1500);
    const SHOW: Duration = Duration::from_millis(5000);

    /// Waits like the simulated transport, then replays scripted results.
    struct ScriptedTransport {
        scheduler: ManualScheduler,
        outcomes: RefCell<VecDeque<Result<(), SendError>>>,
        sends: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl ContactTransport for ScriptedTransport {
        async fn send(&self, _record: &ContactRecord) -> Result<(), SendError> {
            self.sends.set(self.sends.get() + 1);
            sleep(&self.scheduler, SEND).await;
            self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    struct Harness {
        pool: LocalPool,
        scheduler: ManualScheduler,
        controller: ContactFormController<ScriptedTransport, ManualScheduler>,
        sends: Rc<Cell<usize>>,
        seen: Rc<RefCell<Vec<SubmissionStatus>>>,
        outcome: Rc<RefCell<Option<SubmitOutcome>>>,
    }

    impl Harness {
        fn new(outcomes: Vec<Result<(), SendError>>) -> Self {
            let scheduler = ManualScheduler::new();
            let sends = Rc::new(Cell::new(0));
            let transport = ScriptedTransport {
                scheduler: scheduler.clone(),
                outcomes: RefCell::new(outcomes.into()),
                sends: sends.clone(),
            };
            let seen = Rc::new(RefCell::new(Vec::new()));
            let s = seen.clone();
            let controller = ContactFormController::new(transport, scheduler.clone(), SHOW)
                .with_listener(move |form| {
                    let mut s = s.borrow_mut();
                    if s.last() != Some(&form.status()) {
                        s.push(form.status());
                    }
                });
            Self {
                pool: LocalPool::new(),
                scheduler,
                controller,
                sends,
                seen,
                outcome: Rc::new(RefCell::new(None)),
            }
        }

        fn fill(&self) {
            self.controller.set_field(Field::Name, "Jay");
            self.controller.set_field(Field::Email, "jay@example.com");
            self.controller.set_field(Field::Subject, "Hello");
            self.controller.set_field(Field::Message, "Let's talk");
        }

        fn submit(&mut self) -> Result<(), SubmitRejected> {
            let submission = self.controller.submit()?;
            let outcome = self.outcome.clone();
            self.pool
                .spawner()
                .spawn_local(async move {
                    *outcome.borrow_mut() = Some(submission.await);
                })
                .unwrap();
            self.pool.run_until_stalled();
            Ok(())
        }

        /// Moves the clock one deadline at a time, letting async work that
        /// a timer wakes run at that instant before the clock moves on.
        fn advance(&mut self, by: Duration) {
            let target = self.scheduler.now() + by;
            while let Some(due) = self.scheduler.next_due().filter(|due| *due <= target) {
                self.scheduler.advance(due - self.scheduler.now());
                self.pool.run_until_stalled();
            }
            self.scheduler.advance(target - self.scheduler.now());
            self.pool.run_until_stalled();
        }
    }

    #[test]
    fn test_successful_submission_lifecycle() {
        let mut h = Harness::new(vec![]);
        h.fill();
        h.submit().unwrap();
        assert_eq!(h.controller.status(), SubmissionStatus::Submitting);

        h.advance(SEND);
        assert_eq!(h.controller.status(), SubmissionStatus::Succeeded);
        assert_eq!(h.controller.form().record(), &ContactRecord::default());
        assert_eq!(*h.outcome.borrow(), Some(SubmitOutcome::Sent));

        h.advance(SHOW - Duration::from_millis(1));
        assert_eq!(h.controller.status(), SubmissionStatus::Succeeded);
        h.advance(Duration::from_millis(1));
        assert_eq!(h.controller.status(), SubmissionStatus::Idle);

        assert_eq!(
            *h.seen.borrow(),
            vec![
                SubmissionStatus::Idle,
                SubmissionStatus::Submitting,
                SubmissionStatus::Succeeded,
                SubmissionStatus::Idle,
            ]
        );
    }

    #[test]
    fn test_second_submit_while_sending_is_ignored() {
        let mut h = Harness::new(vec![]);
        h.fill();
        h.submit().unwrap();
        assert_eq!(h.submit(), Err(SubmitRejected::InFlight));
        assert_eq!(h.controller.status(), SubmissionStatus::Submitting);

        h.advance(SEND);
        assert_eq!(h.sends.get(), 1);
    }

    #[test]
    fn test_invalid_record_never_reaches_transport() {
        let mut h = Harness::new(vec![]);
        h.controller.set_field(Field::Email, "nope");
        assert_eq!(h.submit(), Err(SubmitRejected::Invalid(4)));
        assert_eq!(h.controller.status(), SubmissionStatus::Idle);
        assert_eq!(h.sends.get(), 0);
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn test_failure_keeps_record_and_does_not_revert() {
        let mut h = Harness::new(vec![Err(SendError::Unavailable("offline".into()))]);
        h.fill();
        h.submit().unwrap();
        h.advance(SEND);

        let form = h.controller.form();
        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert_eq!(form.record().name, "Jay");
        assert_eq!(form.failure(), Some(FAILURE_BANNER));
        assert!(matches!(
            *h.outcome.borrow(),
            Some(SubmitOutcome::Failed(SendError::Unavailable(_)))
        ));

        h.advance(SHOW * 2);
        assert_eq!(h.controller.status(), SubmissionStatus::Failed);

        // retry without retyping
        h.submit().unwrap();
        h.advance(SEND);
        assert_eq!(h.controller.status(), SubmissionStatus::Succeeded);
        assert_eq!(h.sends.get(), 2);
    }

    #[test]
    fn test_editing_during_success_keeps_revert_timer() {
        let mut h = Harness::new(vec![]);
        h.fill();
        h.submit().unwrap();
        h.advance(SEND);

        h.advance(Duration::from_millis(2000));
        h.controller.set_field(Field::Name, "Again");
        assert_eq!(h.controller.status(), SubmissionStatus::Succeeded);

        h.advance(Duration::from_millis(3000));
        assert_eq!(h.controller.status(), SubmissionStatus::Idle);
        assert_eq!(h.controller.form().record().name, "Again");
    }

    #[test]
    fn test_resubmitting_from_success_cancels_old_revert() {
        let mut h = Harness::new(vec![]);
        h.fill();
        h.submit().unwrap();
        h.advance(SEND);

        h.advance(Duration::from_millis(1000));
        h.fill();
        h.submit().unwrap();

        // the first revert would have fired 4s from now
        h.advance(Duration::from_millis(4100));
        assert_eq!(h.controller.status(), SubmissionStatus::Succeeded);
        h.advance(Duration::from_millis(2400));
        assert_eq!(h.controller.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_teardown_mid_flight_applies_nothing() {
        let mut h = Harness::new(vec![]);
        h.fill();
        h.submit().unwrap();
        h.controller.teardown();
        h.pool.run_until_stalled();

        assert_eq!(*h.outcome.borrow(), Some(SubmitOutcome::Cancelled));
        h.advance(SEND + SHOW);
        assert_eq!(h.controller.status(), SubmissionStatus::Submitting);
        assert_eq!(h.controller.form().record().name, "Jay");
        assert_eq!(h.submit(), Err(SubmitRejected::TornDown));
    }

    #[test]
    fn test_teardown_after_success_cancels_revert() {
        let mut h = Harness::new(vec![]);
        h.fill();
        h.submit().unwrap();
        h.advance(SEND);
        h.controller.teardown();
        h.controller.teardown();

        assert_eq!(h.scheduler.pending(), 0);
        h.advance(SHOW);
        assert_eq!(h.controller.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_simulated_transport_always_succeeds_after_delay() {
        let scheduler = ManualScheduler::new();
        let controller = ContactFormController::new(
            SimulatedTransport::new(scheduler.clone(), SEND),
            scheduler.clone(),
            SHOW,
        );
        controller.set_field(Field::Name, "Jay");
        controller.set_field(Field::Email, "a@b.c");
        controller.set_field(Field::Subject, "s");
        controller.set_field(Field::Message, "m");

        let mut pool = LocalPool::new();
        let submission = controller.submit().unwrap();
        pool.spawner()
            .spawn_local(async move {
                submission.await;
            })
            .unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.status(), SubmissionStatus::Submitting);

        scheduler.advance(SEND);
        pool.run_until_stalled();
        assert_eq!(controller.status(), SubmissionStatus::Succeeded);
    }
}
