//! Browser-backed implementations of the capabilities the core is written
//! against. Only ever invoked after hydration.

use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::{
    motion::{scroll_target, HEADER_OFFSET},
    reveal::{Observation, ObserveError, ViewportObserver},
    schedule::{ScheduledTask, Scheduler},
    scroll_lock::ScrollLock,
};

type IntersectionCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

#[derive(Debug, Clone, Copy)]
pub struct BrowserViewport {
    pub threshold: f64,
}

pub struct BrowserObservation {
    observer: IntersectionObserver,
    _callback: Closure<IntersectionCallback>,
}

impl Observation for BrowserObservation {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportObserver for BrowserViewport {
    type Region = Element;
    type Observation = BrowserObservation;

    fn observe(
        &self,
        region: &Element,
        on_ratio: Box<dyn FnMut(f64)>,
    ) -> Result<BrowserObservation, ObserveError> {
        if window().get("IntersectionObserver").is_none() {
            return Err(ObserveError::Unsupported);
        }

        let mut on_ratio = on_ratio;
        let callback = Closure::<IntersectionCallback>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_ratio(entry.intersection_ratio());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ObserveError::Failed(format!("{e:?}")))?;
        observer.observe(region);

        Ok(BrowserObservation {
            observer,
            _callback: callback,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub struct BrowserTask(Option<TimeoutHandle>);

impl ScheduledTask for BrowserTask {
    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Task = BrowserTask;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> BrowserTask {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => BrowserTask(Some(handle)),
            Err(e) => {
                warn!("couldn't schedule timer: {e:?}");
                BrowserTask(None)
            }
        }
    }
}

/// Toggles `overflow` on the document body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl BodyScroll {
    fn set_overflow(value: &str) {
        let Some(body) = document().body() else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            warn!("couldn't set body overflow: {e:?}");
        }
    }
}

impl ScrollLock for BodyScroll {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("auto");
    }
}

/// Smooth-scrolls so the section with `id` sits just below the navbar.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        debug!("no section with id {id}");
        return;
    };
    let top = element.get_bounding_client_rect().top();
    let page_offset = window().page_y_offset().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top, page_offset, HEADER_OFFSET));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
