use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One entry reported by the host when an observed element crosses a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[cfg(test)]
impl IntersectionSample {
    pub fn entering(ratio: f64) -> Self {
        Self { is_intersecting: true, ratio }
    }

    pub fn leaving() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ObserveError {
    #[error("viewport observation is not available in this environment")]
    Unsupported,
    #[error("observer setup failed: {0}")]
    Setup(String),
    #[error("reveal container is not attached to the document")]
    MissingTarget,
}

impl From<JsValue> for ObserveError {
    fn from(value: JsValue) -> Self {
        ObserveError::Setup(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Host capability that reports when a target crosses a visibility threshold.
pub trait ViewportObserver {
    type Target;
    type Handle;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<Self::Handle, ObserveError>;

    fn unobserve(&self, target: &Self::Target, handle: Self::Handle);
}

/// Browser implementation backed by `IntersectionObserver`, one observer per target.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectionViewport;

pub struct IntersectionHandle {
    observer: IntersectionObserver,
    // Must outlive the observer's registration, the browser holds a reference to it.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver for IntersectionViewport {
    type Target = Element;
    type Handle = IntersectionHandle;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<IntersectionHandle, ObserveError> {
        let window = web_sys::window().ok_or(ObserveError::Unsupported)?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(ObserveError::Unsupported);
        }

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_sample(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(target);

        Ok(IntersectionHandle { observer, _callback: callback })
    }

    fn unobserve(&self, target: &Element, handle: IntersectionHandle) {
        handle.observer.unobserve(target);
        handle.observer.disconnect();
        // handle (and the closure with it) drops here, after the observer stopped delivering
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Test double that lets a test decide when targets cross the threshold.
    #[derive(Clone, Default)]
    pub struct FakeViewport {
        inner: Rc<FakeInner>,
    }

    #[derive(Default)]
    struct FakeInner {
        handlers: RefCell<HashMap<u32, Box<dyn FnMut(IntersectionSample)>>>,
        thresholds: RefCell<HashMap<u32, f64>>,
        released: RefCell<HashMap<u32, usize>>,
        live: RefCell<HashMap<u32, u32>>,
        fail_with: RefCell<Option<ObserveError>>,
        next_handle: Cell<u32>,
    }

    impl FakeViewport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(error: ObserveError) -> Self {
            let viewport = Self::default();
            *viewport.inner.fail_with.borrow_mut() = Some(error);
            viewport
        }

        /// Delivers a sample to the handler registered for `target`, if any.
        /// Returns whether a live subscription received it.
        pub fn emit(&self, target: u32, sample: IntersectionSample) -> bool {
            // Take the handler out so it can unsubscribe re-entrantly.
            let handler = self.inner.handlers.borrow_mut().remove(&target);
            match handler {
                Some(mut handler) => {
                    handler(sample);
                    let still_observed = self.inner.live.borrow().contains_key(&target);
                    if still_observed {
                        self.inner.handlers.borrow_mut().insert(target, handler);
                    }
                    true
                }
                None => false,
            }
        }

        pub fn unobserve_calls(&self, target: u32) -> usize {
            self.inner.released.borrow().get(&target).copied().unwrap_or(0)
        }

        pub fn is_observing(&self, target: u32) -> bool {
            self.inner.handlers.borrow().contains_key(&target)
        }

        pub fn threshold_for(&self, target: u32) -> Option<f64> {
            self.inner.thresholds.borrow().get(&target).copied()
        }
    }

    impl ViewportObserver for FakeViewport {
        type Target = u32;
        type Handle = u32;

        fn observe(
            &self,
            target: &u32,
            threshold: f64,
            on_sample: Box<dyn FnMut(IntersectionSample)>,
        ) -> Result<u32, ObserveError> {
            if let Some(error) = self.inner.fail_with.borrow_mut().take() {
                return Err(error);
            }
            self.inner.handlers.borrow_mut().insert(*target, on_sample);
            self.inner.thresholds.borrow_mut().insert(*target, threshold);
            let handle = self.inner.next_handle.get();
            self.inner.next_handle.set(handle + 1);
            self.inner.live.borrow_mut().insert(*target, handle);
            Ok(handle)
        }

        fn unobserve(&self, target: &u32, _handle: u32) {
            self.inner.handlers.borrow_mut().remove(target);
            self.inner.live.borrow_mut().remove(target);
            *self.inner.released.borrow_mut().entry(*target).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_visibility_respects_threshold() {
        assert!(IntersectionSample::entering(0.15).is_visible(0.1));
        assert!(IntersectionSample::entering(0.1).is_visible(0.1));
        assert!(!IntersectionSample::entering(0.05).is_visible(0.1));
        assert!(!IntersectionSample::leaving().is_visible(0.1));
        assert!(!IntersectionSample { is_intersecting: false, ratio: 0.5 }.is_visible(0.1));
    }

    #[test]
    fn observe_error_messages() {
        assert_eq!(
            ObserveError::Setup("boom".to_string()).to_string(),
            "observer setup failed: boom"
        );
        assert_eq!(
            ObserveError::Unsupported.to_string(),
            "viewport observation is not available in this environment"
        );
    }
}
