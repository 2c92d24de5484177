use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use log::{debug, warn};
use thiserror::Error;

/// Fraction of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserveError {
    #[error("viewport intersection is not supported here")]
    Unsupported,
    #[error("viewport observer failed: {0}")]
    Failed(String),
}

/// Host capability that reports how much of a region overlaps the viewport.
pub trait ViewportObserver {
    type Region;
    type Observation: Observation;

    /// Starts reporting intersection ratios for `region` to `on_ratio`.
    fn observe(
        &self,
        region: &Self::Region,
        on_ratio: Box<dyn FnMut(f64)>,
    ) -> Result<Self::Observation, ObserveError>;
}

pub trait Observation {
    fn disconnect(&mut self);
}

/// One-shot visibility latch shared between an observer callback and its
/// owner. Both live on the UI thread.
#[derive(Debug, Clone)]
pub struct RevealFlag {
    threshold: f64,
    revealed: Rc<Cell<bool>>,
}

impl RevealFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            revealed: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    /// Feeds one intersection ratio. Returns `true` only for the event that
    /// flips the flag; every later call is a no-op.
    pub fn record(&self, ratio: f64) -> bool {
        if ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.force()
    }

    /// Reveals regardless of geometry. Returns `true` if this call flipped it.
    pub fn force(&self) -> bool {
        !self.revealed.replace(true)
    }
}

impl Default for RevealFlag {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

/// Watches one page section and latches `revealed` the first time enough of
/// it scrolls into view. Owns the observation and disconnects it on release
/// or drop.
pub struct RevealController<O: ViewportObserver> {
    flag: RevealFlag,
    observation: Option<O::Observation>,
    released: bool,
}

impl<O: ViewportObserver> RevealController<O> {
    pub fn new(threshold: f64) -> Self {
        Self {
            flag: RevealFlag::new(threshold),
            observation: None,
            released: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.flag.is_revealed()
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    /// Begins watching `region`. `None` means the region is not attached yet,
    /// which is silently ignored. `on_reveal` runs at most once.
    ///
    /// If the host cannot observe, the section is revealed straight away:
    /// a missing animation trigger must never hide content.
    pub fn observe<F>(&mut self, observer: &O, region: Option<&O::Region>, on_reveal: F)
    where
        F: FnMut() + 'static,
    {
        if self.released || self.observation.is_some() {
            return;
        }
        let Some(region) = region else {
            debug!("reveal: region not attached, skipping observe");
            return;
        };

        if self.flag.is_revealed() {
            return;
        }

        let on_reveal = Rc::new(RefCell::new(on_reveal));
        let flag = self.flag.clone();
        let notify = on_reveal.clone();
        let on_ratio = Box::new(move |ratio: f64| {
            if flag.record(ratio) {
                debug!("reveal: ratio {ratio:.2} crossed threshold");
                (notify.borrow_mut())();
            }
        });

        match observer.observe(region, on_ratio) {
            Ok(observation) => self.observation = Some(observation),
            Err(e) => {
                warn!("reveal: {e}, showing section immediately");
                if self.flag.force() {
                    (on_reveal.borrow_mut())();
                }
            }
        }
    }

    /// Disconnects the observation. Idempotent; the flag keeps its value.
    pub fn release(&mut self) {
        self.released = true;
        if let Some(mut observation) = self.observation.take() {
            observation.disconnect();
        }
    }
}

impl<O: ViewportObserver> Default for RevealController<O> {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl<O: ViewportObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::*;

    type Sink = Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>;

    #[derive(Default)]
    struct FakeViewport {
        sink: Sink,
        disconnects: Rc<Cell<usize>>,
        unsupported: bool,
    }

    impl FakeViewport {
        fn emit(&self, ratio: f64) {
            if let Some(cb) = self.sink.borrow_mut().as_mut() {
                cb(ratio);
            }
        }
    }

    struct FakeObservation {
        sink: Sink,
        disconnects: Rc<Cell<usize>>,
    }

    impl Observation for FakeObservation {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
            self.sink.borrow_mut().take();
        }
    }

    impl ViewportObserver for FakeViewport {
        type Region = &'static str;
        type Observation = FakeObservation;

        fn observe(
            &self,
            _region: &&'static str,
            on_ratio: Box<dyn FnMut(f64)>,
        ) -> Result<FakeObservation, ObserveError> {
            if self.unsupported {
                return Err(ObserveError::Unsupported);
            }
            *self.sink.borrow_mut() = Some(on_ratio);
            Ok(FakeObservation {
                sink: self.sink.clone(),
                disconnects: self.disconnects.clone(),
            })
        }
    }

    fn counter() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_reveals_once_at_first_ratio_over_threshold() {
        let viewport = FakeViewport::default();
        let mut controller = RevealController::<FakeViewport>::default();
        let (fired, on_reveal) = counter();
        controller.observe(&viewport, Some(&"about"), on_reveal);

        let mut seen = Vec::new();
        for ratio in [0.0, 0.05, 0.15, 0.02] {
            viewport.emit(ratio);
            seen.push(controller.is_revealed());
        }

        assert_eq!(seen, vec![false, false, true, true]);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_threshold_is_inclusive_and_nan_ignored() {
        let flag = RevealFlag::new(0.1);
        assert!(!flag.record(f64::NAN));
        assert!(!flag.record(0.0999));
        assert!(flag.record(0.1));
        assert!(!flag.record(1.0));
        assert!(flag.is_revealed());
    }

    #[test]
    fn test_cloned_flags_share_one_latch() {
        let flag = RevealFlag::default();
        let from_observer = flag.clone();
        assert!(from_observer.record(0.5));
        assert!(flag.is_revealed());
        assert!(!flag.force());
        assert!(!from_observer.force());
    }

    #[test]
    fn test_detached_region_is_a_no_op() {
        let viewport = FakeViewport::default();
        let mut controller = RevealController::<FakeViewport>::default();
        let (fired, on_reveal) = counter();
        controller.observe(&viewport, None, on_reveal);

        assert!(!controller.is_observing());
        viewport.emit(1.0);
        assert!(!controller.is_revealed());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_unsupported_observer_degrades_to_revealed() {
        let viewport = FakeViewport {
            unsupported: true,
            ..Default::default()
        };
        let mut controller = RevealController::<FakeViewport>::default();
        let (fired, on_reveal) = counter();
        controller.observe(&viewport, Some(&"projects"), on_reveal);

        assert!(controller.is_revealed());
        assert!(!controller.is_observing());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_release_is_idempotent_and_runs_on_drop() {
        let viewport = FakeViewport::default();
        let disconnects = viewport.disconnects.clone();
        {
            let mut controller = RevealController::<FakeViewport>::default();
            controller.observe(&viewport, Some(&"contact"), || {});
            controller.release();
            controller.release();
            assert_eq!(disconnects.get(), 1);

            // observing after release does nothing
            controller.observe(&viewport, Some(&"contact"), || {});
            assert!(!controller.is_observing());
        }
        assert_eq!(disconnects.get(), 1);

        {
            let mut controller = RevealController::<FakeViewport>::default();
            controller.observe(&viewport, Some(&"education"), || {});
        }
        assert_eq!(disconnects.get(), 2);
    }

    #[test]
    fn test_release_before_reveal_stops_updates() {
        let viewport = FakeViewport::default();
        let mut controller = RevealController::<FakeViewport>::default();
        let (fired, on_reveal) = counter();
        controller.observe(&viewport, Some(&"experience"), on_reveal);
        controller.release();

        viewport.emit(0.9);
        assert!(!controller.is_revealed());
        assert_eq!(fired.get(), 0);
    }
}
