//! Reveal-on-visible: a one-way latch per page section, driven either by the
//! section mounting or by an `IntersectionObserver` watching its root node.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::hook;
use yew::prelude::*;

/// What flips a section's `revealed` flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealTrigger {
    /// Reveal as soon as the section is mounted, regardless of scroll position.
    OnMount,
    /// Reveal the first time at least `threshold` of the section is in the viewport.
    OnVisible { threshold: f64 },
}

/// One-way visibility latch. Starts hidden and flips to revealed exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealLatch {
    trigger: RevealTrigger,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(trigger: RevealTrigger) -> Self {
        Self {
            trigger,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Called once the section is in the document. Returns `true` if this call
    /// performed the transition.
    pub fn mount(&mut self) -> bool {
        match self.trigger {
            RevealTrigger::OnMount => self.latch(),
            RevealTrigger::OnVisible { .. } => false,
        }
    }

    /// Feeds one intersection observation. Returns `true` if this call
    /// performed the transition; observations after that are ignored.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        match self.trigger {
            RevealTrigger::OnVisible { threshold } if intersecting && ratio >= threshold => {
                self.latch()
            }
            _ => false,
        }
    }

    fn latch(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Something attached to the page that has to be detached exactly once.
pub trait Watcher {
    fn disconnect(&self);
}

/// Owns a watcher and disconnects it when dropped, whichever way the owning
/// component goes away.
pub struct WatchGuard<W: Watcher> {
    watcher: W,
}

impl<W: Watcher> WatchGuard<W> {
    pub fn new(watcher: W) -> Self {
        Self { watcher }
    }
}

impl<W: Watcher> Drop for WatchGuard<W> {
    fn drop(&mut self) {
        self.watcher.disconnect();
    }
}

/// `IntersectionObserver` bound to a single element. The JS callback lives as
/// long as the observer does.
pub struct ViewportWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatcher {
    pub fn attach<F>(
        element: &Element,
        threshold: f64,
        mut on_change: F,
    ) -> Result<WatchGuard<ViewportWatcher>, JsValue>
    where
        F: FnMut(f64, bool) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.intersection_ratio(), entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        debug!("Attached viewport watcher (threshold {})", threshold);

        Ok(WatchGuard::new(ViewportWatcher {
            observer,
            _callback: callback,
        }))
    }
}

impl Watcher for ViewportWatcher {
    fn disconnect(&self) {
        self.observer.disconnect();
        debug!("Released viewport watcher");
    }
}

/// Observation callback handed to a watcher: `(intersection_ratio, is_intersecting)`.
pub type ObservationSink = Box<dyn FnMut(f64, bool)>;

/// Arms one mount's worth of reveal tracking and returns the guard that has to
/// live until unmount.
///
/// `OnMount` reveals right away and attaches nothing. `OnVisible` attaches a
/// watcher to `target` through `attach` and feeds its observations into a
/// fresh latch, calling `on_reveal` on the single transition. A missing target
/// or a failed attach leaves the section hidden.
pub fn arm_reveal<T, W, E, A, R>(
    trigger: RevealTrigger,
    target: Option<&T>,
    attach: A,
    mut on_reveal: R,
) -> Option<WatchGuard<W>>
where
    T: ?Sized,
    W: Watcher,
    E: std::fmt::Debug,
    A: FnOnce(&T, f64, ObservationSink) -> Result<WatchGuard<W>, E>,
    R: FnMut() + 'static,
{
    let mut latch = RevealLatch::new(trigger);
    match trigger {
        RevealTrigger::OnMount => {
            if latch.mount() {
                on_reveal();
            }
            None
        }
        RevealTrigger::OnVisible { threshold } => {
            let Some(target) = target else {
                debug!("Reveal target not in document, staying hidden");
                return None;
            };
            let sink: ObservationSink = Box::new(move |ratio, intersecting| {
                if latch.observe(ratio, intersecting) {
                    debug!("Section revealed at ratio {:.2}", ratio);
                    on_reveal();
                }
            });
            match attach(target, threshold, sink) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    warn!("Could not attach viewport watcher: {:?}", e);
                    None
                }
            }
        }
    }
}

/// Tracks whether the section behind `node` has been revealed.
///
/// For [`RevealTrigger::OnVisible`] the watcher is attached after the first
/// render and released on unmount. If the node never made it into the
/// document nothing is attached and the section simply stays hidden.
#[hook]
pub fn use_reveal(node: &NodeRef, trigger: RevealTrigger) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |trigger: &RevealTrigger| {
                let element = node.cast::<Element>();
                let guard = arm_reveal(
                    *trigger,
                    element.as_ref(),
                    |element, threshold, sink| ViewportWatcher::attach(element, threshold, sink),
                    move || revealed.set(true),
                );
                move || drop(guard)
            },
            trigger,
        );
    }

    *revealed
}

/// Pre-reveal offset of an animated element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Rise,
    FromLeft,
    FromRight,
}

impl Motion {
    fn modifier(self) -> &'static str {
        match self {
            Motion::Rise => "reveal--rise",
            Motion::FromLeft => "reveal--left",
            Motion::FromRight => "reveal--right",
        }
    }
}

pub fn reveal_class(motion: Motion, revealed: bool) -> String {
    if revealed {
        format!("reveal {} is-revealed", motion.modifier())
    } else {
        format!("reveal {}", motion.modifier())
    }
}

/// Staggered transition delays: slot `n` starts `base_ms + n * step_ms` after
/// the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cascade {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Cascade {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay_ms(&self, slot: usize) -> u32 {
        self.base_ms + self.step_ms * slot as u32
    }

    /// A nested cascade starting where `slot` of this one starts.
    pub fn from_slot(&self, slot: usize, step_ms: u32) -> Cascade {
        Cascade::new(self.delay_ms(slot), step_ms)
    }

    pub fn style(&self, slot: usize) -> String {
        format!("transition-delay: {}ms;", self.delay_ms(slot))
    }
}

pub const REVEAL_STYLE: &str = r#"
    .reveal {
        transition: opacity 1000ms ease-out, transform 1000ms ease-out;
    }
    .reveal--rise {
        opacity: 0;
        transform: translateY(2.5rem);
    }
    .reveal--left {
        opacity: 0;
        transform: translateX(-2.5rem);
    }
    .reveal--right {
        opacity: 0;
        transform: translateX(2.5rem);
    }
    .reveal.is-revealed {
        opacity: 1;
        transform: none;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const ABOUT: RevealTrigger = RevealTrigger::OnVisible { threshold: 0.3 };

    #[test]
    fn scroll_tracked_latch_starts_hidden() {
        let mut latch = RevealLatch::new(ABOUT);
        assert!(!latch.is_revealed());
        assert!(!latch.mount());
        assert!(!latch.is_revealed());
    }

    #[test]
    fn latch_reveals_at_threshold_and_never_resets() {
        let mut latch = RevealLatch::new(ABOUT);
        assert!(!latch.observe(0.1, true));
        assert!(!latch.observe(0.29, true));
        assert!(latch.observe(0.3, true));
        assert!(latch.is_revealed());

        // Scrolling away and back must not produce another transition.
        for (ratio, intersecting) in [(0.0, false), (0.05, true), (0.9, true), (0.0, false)] {
            assert!(!latch.observe(ratio, intersecting));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn non_intersecting_events_do_not_reveal() {
        let mut latch = RevealLatch::new(RevealTrigger::OnVisible { threshold: 0.2 });
        assert!(!latch.observe(0.5, false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn mount_triggered_latch_reveals_immediately() {
        let mut latch = RevealLatch::new(RevealTrigger::OnMount);
        assert!(latch.mount());
        assert!(latch.is_revealed());
        assert!(!latch.mount());
        assert!(!latch.observe(0.0, false));
        assert!(latch.is_revealed());
    }

    struct CountingWatcher(Rc<Cell<u32>>);

    impl Watcher for CountingWatcher {
        fn disconnect(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn guard_disconnects_once_when_dropped_before_any_event() {
        let disconnects = Rc::new(Cell::new(0));
        let guard = WatchGuard::new(CountingWatcher(disconnects.clone()));
        let latch = RevealLatch::new(ABOUT);
        assert_eq!(disconnects.get(), 0);

        drop(guard);
        assert_eq!(disconnects.get(), 1);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn guard_disconnects_once_per_mount() {
        let disconnects = Rc::new(Cell::new(0));
        for mount in 1..=3 {
            let _guard = WatchGuard::new(CountingWatcher(disconnects.clone()));
            let mut latch = RevealLatch::new(ABOUT);
            latch.observe(1.0, true);
            assert_eq!(disconnects.get(), mount - 1);
        }
        assert_eq!(disconnects.get(), 3);
    }

    type SharedSink = Rc<RefCell<Option<ObservationSink>>>;

    /// Attaches a counting watcher and keeps the observation sink so the test
    /// can play intersection events into it.
    fn counting_attach(
        attaches: Rc<Cell<u32>>,
        disconnects: Rc<Cell<u32>>,
        sink: SharedSink,
    ) -> impl FnOnce(&(), f64, ObservationSink) -> Result<WatchGuard<CountingWatcher>, ()> {
        move |_target: &(), _threshold: f64, observe: ObservationSink| {
            attaches.set(attaches.get() + 1);
            *sink.borrow_mut() = Some(observe);
            Ok(WatchGuard::new(CountingWatcher(disconnects)))
        }
    }

    fn feed(sink: &SharedSink, ratio: f64, intersecting: bool) {
        let mut sink = sink.borrow_mut();
        let observe = sink.as_mut().expect("watcher attached");
        observe(ratio, intersecting);
    }

    #[test]
    fn armed_section_reveals_once_and_releases_on_teardown() {
        let (attaches, disconnects, reveals) =
            (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let sink: SharedSink = Rc::default();
        let on_reveal = {
            let reveals = reveals.clone();
            move || reveals.set(reveals.get() + 1)
        };

        let guard = arm_reveal(
            ABOUT,
            Some(&()),
            counting_attach(attaches.clone(), disconnects.clone(), sink.clone()),
            on_reveal,
        );
        assert!(guard.is_some());
        assert_eq!(attaches.get(), 1);

        feed(&sink, 0.1, true);
        assert_eq!(reveals.get(), 0);
        feed(&sink, 0.45, true);
        feed(&sink, 0.0, false);
        feed(&sink, 0.8, true);
        assert_eq!(reveals.get(), 1);
        assert_eq!(disconnects.get(), 0);

        drop(guard);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn unmount_before_any_qualifying_event_releases_exactly_once() {
        let disconnects = Rc::new(Cell::new(0));
        for mount in 1..=3 {
            let sink: SharedSink = Rc::default();
            let guard = arm_reveal(
                ABOUT,
                Some(&()),
                counting_attach(Rc::new(Cell::new(0)), disconnects.clone(), sink.clone()),
                || panic!("revealed without a qualifying event"),
            );
            feed(&sink, 0.1, true);
            drop(guard);
            assert_eq!(disconnects.get(), mount);
        }
    }

    #[test]
    fn missing_target_attaches_nothing() {
        let attaches = Rc::new(Cell::new(0));
        let disconnects = Rc::new(Cell::new(0));
        let guard = arm_reveal(
            ABOUT,
            None::<&()>,
            counting_attach(attaches.clone(), disconnects.clone(), Rc::default()),
            || panic!("revealed without a target"),
        );
        assert!(guard.is_none());
        drop(guard);
        assert_eq!(attaches.get(), 0);
        assert_eq!(disconnects.get(), 0);
    }

    #[test]
    fn mount_trigger_reveals_without_attaching() {
        let attaches = Rc::new(Cell::new(0));
        let reveals = Rc::new(Cell::new(0));
        let guard = arm_reveal(
            RevealTrigger::OnMount,
            None::<&()>,
            counting_attach(attaches.clone(), Rc::new(Cell::new(0)), Rc::default()),
            {
                let reveals = reveals.clone();
                move || reveals.set(reveals.get() + 1)
            },
        );
        assert!(guard.is_none());
        assert_eq!(attaches.get(), 0);
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn failed_attach_leaves_section_hidden() {
        let guard = arm_reveal(
            ABOUT,
            Some(&()),
            |_: &(), _, _| Err::<WatchGuard<CountingWatcher>, _>("no observer"),
            || panic!("revealed after a failed attach"),
        );
        assert!(guard.is_none());
    }

    #[test]
    fn reveal_class_switches_state_but_keeps_motion() {
        assert_eq!(reveal_class(Motion::Rise, false), "reveal reveal--rise");
        assert_eq!(
            reveal_class(Motion::FromLeft, true),
            "reveal reveal--left is-revealed"
        );
    }

    #[test]
    fn cascade_delays_increase_with_slot() {
        let cascade = Cascade::new(200, 200);
        let delays: Vec<u32> = (0..5).map(|slot| cascade.delay_ms(slot)).collect();
        assert_eq!(delays, vec![200, 400, 600, 800, 1000]);
        assert_eq!(cascade.style(2), "transition-delay: 600ms;");

        let nested = cascade.from_slot(3, 100);
        assert_eq!(nested.delay_ms(0), 800);
        assert_eq!(nested.delay_ms(2), 1000);
    }
}
