use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};

use crate::config;
use crate::observer::{IntersectionSample, ObserveError, ViewportObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Revealed => "reveal-revealed",
        }
    }
}

/// Whether a revealed container may go back to hidden once it scrolls away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    #[default]
    Toggle,
    Once,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub mode: RevealMode,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: config::REVEAL_THRESHOLD, mode: RevealMode::Toggle }
    }
}

pub fn transition_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

pub fn container_classes(state: RevealState, extra: &str) -> String {
    let mut classes = format!("reveal {}", state.class());
    let extra = extra.trim();
    if !extra.is_empty() {
        classes.push(' ');
        classes.push_str(extra);
    }
    classes
}

/// Owns one observation registration and releases it at most once.
pub struct Subscription<O: ViewportObserver> {
    observer: O,
    target: O::Target,
    handle: Option<O::Handle>,
}

impl<O: ViewportObserver> Subscription<O> {
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.observer.unobserve(&self.target, handle);
            debug!("Reveal subscription released");
        }
    }
}

impl<O: ViewportObserver> Drop for Subscription<O> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Visibility state of one reveal container plus the subscription feeding it.
pub struct Reveal<O: ViewportObserver> {
    state: Rc<Cell<RevealState>>,
    subscription: Rc<RefCell<Option<Subscription<O>>>>,
}

impl<O> Reveal<O>
where
    O: ViewportObserver + 'static,
    O::Target: 'static,
    O::Handle: 'static,
{
    /// Starts observing `target`. When observation cannot be set up the
    /// container is revealed right away and `on_change` hears about it.
    pub fn mount<F>(
        observer: Result<O, ObserveError>,
        target: Option<O::Target>,
        options: RevealOptions,
        on_change: F,
    ) -> Self
    where
        F: Fn(RevealState) + 'static,
    {
        let state = Rc::new(Cell::new(RevealState::Hidden));
        let subscription: Rc<RefCell<Option<Subscription<O>>>> = Rc::new(RefCell::new(None));
        let on_change = Rc::new(on_change);

        let setup = observer.and_then(|observer| {
            let target = target.ok_or(ObserveError::MissingTarget)?;
            let handler = {
                let state = state.clone();
                let subscription = Rc::downgrade(&subscription);
                let on_change = on_change.clone();
                let threshold = options.threshold;
                let mode = options.mode;
                Box::new(move |sample: IntersectionSample| {
                    let Some(subscription) = subscription.upgrade() else {
                        return;
                    };
                    // Late delivery after release must not touch the state.
                    let active = subscription
                        .try_borrow()
                        .map(|s| s.as_ref().map_or(false, |s| s.is_active()))
                        .unwrap_or(true);
                    if !active {
                        return;
                    }
                    let next = if sample.is_visible(threshold) {
                        RevealState::Revealed
                    } else {
                        RevealState::Hidden
                    };
                    if state.get() != next {
                        debug!("Reveal state {:?} -> {:?} (ratio {:.2})", state.get(), next, sample.ratio);
                        state.set(next);
                        on_change(next);
                    }
                    if mode == RevealMode::Once && next == RevealState::Revealed {
                        if let Ok(mut slot) = subscription.try_borrow_mut() {
                            if let Some(sub) = slot.as_mut() {
                                sub.release();
                            }
                        }
                    }
                }) as Box<dyn FnMut(IntersectionSample)>
            };
            let handle = observer.observe(&target, options.threshold, handler)?;
            Ok(Subscription { observer, target, handle: Some(handle) })
        });

        match setup {
            Ok(sub) => {
                *subscription.borrow_mut() = Some(sub);
            }
            Err(e) => {
                warn!("Reveal falling back to visible content: {}", e);
                state.set(RevealState::Revealed);
                on_change(RevealState::Revealed);
            }
        }

        Self { state, subscription }
    }
}

impl<O: ViewportObserver> Reveal<O> {
    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription
            .borrow()
            .as_ref()
            .map_or(false, |s| s.is_active())
    }

    pub fn unmount(&mut self) {
        if let Some(mut sub) = self.subscription.borrow_mut().take() {
            sub.release();
        }
    }
}

impl<O: ViewportObserver> Drop for Reveal<O> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::fake::FakeViewport;
    use pretty_assertions::assert_eq;

    fn mount(viewport: &FakeViewport, target: u32, options: RevealOptions) -> (Reveal<FakeViewport>, Rc<RefCell<Vec<RevealState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let reveal = Reveal::mount(Ok(viewport.clone()), Some(target), options, move |s| {
            log.borrow_mut().push(s)
        });
        (reveal, seen)
    }

    #[test]
    fn starts_hidden_and_subscribes_once() {
        let viewport = FakeViewport::new();
        let (reveal, seen) = mount(&viewport, 1, RevealOptions::default());
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert!(reveal.is_observing());
        assert!(viewport.is_observing(1));
        assert_eq!(viewport.threshold_for(1), Some(0.1));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn intersecting_sample_reveals_and_leaving_hides() {
        let viewport = FakeViewport::new();
        let (reveal, _) = mount(&viewport, 1, RevealOptions::default());

        viewport.emit(1, IntersectionSample::entering(0.1));
        assert_eq!(reveal.state(), RevealState::Revealed);

        viewport.emit(1, IntersectionSample::leaving());
        assert_eq!(reveal.state(), RevealState::Hidden);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let viewport = FakeViewport::new();
        let (reveal, _) = mount(&viewport, 1, RevealOptions::default());
        viewport.emit(1, IntersectionSample::entering(0.04));
        assert_eq!(reveal.state(), RevealState::Hidden);
    }

    #[test]
    fn scroll_in_out_scenario() {
        let viewport = FakeViewport::new();
        let (reveal, seen) = mount(&viewport, 7, RevealOptions::default());
        assert_eq!(reveal.state(), RevealState::Hidden);

        viewport.emit(7, IntersectionSample::entering(0.15));
        assert_eq!(reveal.state(), RevealState::Revealed);

        viewport.emit(7, IntersectionSample::leaving());
        assert_eq!(reveal.state(), RevealState::Hidden);

        assert_eq!(*seen.borrow(), vec![RevealState::Revealed, RevealState::Hidden]);
        assert!(reveal.is_observing());
    }

    #[test]
    fn state_follows_latest_sample_only() {
        let viewport = FakeViewport::new();
        let (reveal, _) = mount(&viewport, 1, RevealOptions::default());
        viewport.emit(1, IntersectionSample::entering(0.5));
        viewport.emit(1, IntersectionSample::entering(0.9));
        viewport.emit(1, IntersectionSample::leaving());
        viewport.emit(1, IntersectionSample::entering(0.3));
        assert_eq!(reveal.state(), RevealState::Revealed);
    }

    #[test]
    fn unmount_releases_exactly_once() {
        let viewport = FakeViewport::new();
        let (mut reveal, _) = mount(&viewport, 3, RevealOptions::default());

        reveal.unmount();
        assert_eq!(viewport.unobserve_calls(3), 1);
        assert!(!reveal.is_observing());

        reveal.unmount();
        drop(reveal);
        assert_eq!(viewport.unobserve_calls(3), 1);
    }

    #[test]
    fn drop_releases_subscription() {
        let viewport = FakeViewport::new();
        let (reveal, _) = mount(&viewport, 4, RevealOptions::default());
        drop(reveal);
        assert_eq!(viewport.unobserve_calls(4), 1);
        assert!(!viewport.is_observing(4));
    }

    #[test]
    fn samples_after_unmount_are_ignored() {
        let viewport = FakeViewport::new();
        let (mut reveal, seen) = mount(&viewport, 5, RevealOptions::default());
        reveal.unmount();
        assert!(!viewport.emit(5, IntersectionSample::entering(1.0)));
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn siblings_are_independent() {
        let viewport = FakeViewport::new();
        let (first, _) = mount(&viewport, 1, RevealOptions::default());
        let (second, _) = mount(&viewport, 2, RevealOptions::default());

        viewport.emit(2, IntersectionSample::entering(0.6));
        assert_eq!(first.state(), RevealState::Hidden);
        assert_eq!(second.state(), RevealState::Revealed);

        viewport.emit(1, IntersectionSample::entering(0.2));
        viewport.emit(2, IntersectionSample::leaving());
        assert_eq!(first.state(), RevealState::Revealed);
        assert_eq!(second.state(), RevealState::Hidden);

        drop(first);
        assert_eq!(viewport.unobserve_calls(1), 1);
        assert_eq!(viewport.unobserve_calls(2), 0);
    }

    #[test]
    fn repeated_samples_notify_only_on_change() {
        let viewport = FakeViewport::new();
        let (reveal, seen) = mount(&viewport, 1, RevealOptions::default());
        viewport.emit(1, IntersectionSample::leaving());
        viewport.emit(1, IntersectionSample::entering(0.3));
        viewport.emit(1, IntersectionSample::entering(0.6));
        viewport.emit(1, IntersectionSample::entering(1.0));
        assert_eq!(reveal.state(), RevealState::Revealed);
        assert_eq!(*seen.borrow(), vec![RevealState::Revealed]);
    }

    #[test]
    fn remount_with_new_options_replaces_subscription() {
        let viewport = FakeViewport::new();
        let (first, _) = mount(&viewport, 1, RevealOptions::default());
        drop(first);

        let options = RevealOptions { threshold: 0.5, mode: RevealMode::Once };
        let (second, _) = mount(&viewport, 1, options);
        assert_eq!(viewport.unobserve_calls(1), 1);
        assert_eq!(viewport.threshold_for(1), Some(0.5));

        viewport.emit(1, IntersectionSample::entering(0.3));
        assert_eq!(second.state(), RevealState::Hidden);
        viewport.emit(1, IntersectionSample::entering(0.7));
        assert_eq!(second.state(), RevealState::Revealed);
        assert!(!second.is_observing());
    }

    #[test]
    fn setup_failure_reveals_content() {
        let viewport = FakeViewport::failing(ObserveError::Setup("constructor threw".to_string()));
        let (reveal, seen) = mount(&viewport, 1, RevealOptions::default());
        assert_eq!(reveal.state(), RevealState::Revealed);
        assert_eq!(*seen.borrow(), vec![RevealState::Revealed]);
        assert!(!reveal.is_observing());
    }

    #[test]
    fn unsupported_observer_reveals_content() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let reveal: Reveal<FakeViewport> = Reveal::mount(
            Err(ObserveError::Unsupported),
            Some(1),
            RevealOptions::default(),
            move |s| log.borrow_mut().push(s),
        );
        assert_eq!(reveal.state(), RevealState::Revealed);
        assert_eq!(*seen.borrow(), vec![RevealState::Revealed]);
    }

    #[test]
    fn missing_target_reveals_content() {
        let viewport = FakeViewport::new();
        let reveal = Reveal::mount(Ok(viewport.clone()), None, RevealOptions::default(), |_| {});
        assert_eq!(reveal.state(), RevealState::Revealed);
        assert!(!viewport.is_observing(0));
    }

    #[test]
    fn once_mode_releases_after_first_reveal() {
        let viewport = FakeViewport::new();
        let options = RevealOptions { mode: RevealMode::Once, ..RevealOptions::default() };
        let (mut reveal, _) = mount(&viewport, 9, options);

        viewport.emit(9, IntersectionSample::leaving());
        assert!(reveal.is_observing());

        viewport.emit(9, IntersectionSample::entering(0.2));
        assert_eq!(reveal.state(), RevealState::Revealed);
        assert_eq!(viewport.unobserve_calls(9), 1);
        assert!(!reveal.is_observing());

        assert!(!viewport.emit(9, IntersectionSample::leaving()));
        assert_eq!(reveal.state(), RevealState::Revealed);

        reveal.unmount();
        assert_eq!(viewport.unobserve_calls(9), 1);
    }

    #[test]
    fn custom_threshold_is_forwarded() {
        let viewport = FakeViewport::new();
        let options = RevealOptions { threshold: 0.5, ..RevealOptions::default() };
        let (reveal, _) = mount(&viewport, 1, options);
        assert_eq!(viewport.threshold_for(1), Some(0.5));
        viewport.emit(1, IntersectionSample::entering(0.3));
        assert_eq!(reveal.state(), RevealState::Hidden);
    }

    #[test]
    fn presentation_keeps_content_for_every_state() {
        for delay in [0u32, 100, 200, 300, 1500] {
            assert_eq!(transition_style(delay), format!("transition-delay: {}ms;", delay));
        }
        assert_eq!(container_classes(RevealState::Hidden, ""), "reveal reveal-hidden");
        assert_eq!(
            container_classes(RevealState::Revealed, "  case-study "),
            "reveal reveal-revealed case-study"
        );
    }
}
