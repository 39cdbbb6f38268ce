use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Fires once: the first observation that reports the element in view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Holds at most one pending handle. Dropping the handle cancels it, so
/// `cancel` on teardown stops a delayed reveal from firing after unmount.
pub struct PendingSlot<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for PendingSlot<T> {
    fn clone(&self) -> Self {
        Self { slot: self.slot.clone() }
    }
}

impl<T> Default for PendingSlot<T> {
    fn default() -> Self {
        Self { slot: Rc::new(RefCell::new(None)) }
    }
}

impl<T> PendingSlot<T> {
    pub fn set(&self, handle: T) {
        *self.slot.borrow_mut() = Some(handle);
    }

    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub fn cancel(&self) {
        self.slot.borrow_mut().take();
    }
}

struct Watch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn watch_once(element: &Element, on_visible: impl Fn() + 'static) -> Option<Watch> {
    let target = element.clone();
    let mut latch = RevealLatch::default();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let in_view = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if latch.observe(in_view) {
            observer.unobserve(&target);
            on_visible();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config::REVEAL_THRESHOLD.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some(Watch {
        observer,
        _callback: callback,
    })
}

/// Ref to attach to an element, and whether it has been revealed yet.
///
/// The element reveals `delay_ms` after it first scrolls into view and stays
/// revealed. Without `IntersectionObserver` it reveals straight away.
#[hook]
pub fn use_reveal(delay_ms: u32) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let delay_ms = *delay_ms;
                let pending: PendingSlot<Timeout> = PendingSlot::default();
                let show = {
                    let pending = pending.clone();
                    move || {
                        if delay_ms == 0 {
                            visible.set(true);
                        } else {
                            let visible = visible.clone();
                            pending.set(Timeout::new(delay_ms, move || visible.set(true)));
                        }
                    }
                };
                let watch = match node.cast::<Element>() {
                    Some(element) => {
                        let watch = watch_once(&element, show.clone());
                        if watch.is_none() {
                            debug!("IntersectionObserver unavailable, revealing immediately");
                            show();
                        }
                        watch
                    }
                    None => None,
                };
                move || {
                    if let Some(watch) = watch {
                        watch.observer.disconnect();
                    }
                    pending.cancel();
                }
            },
            delay_ms,
        );
    }

    (node, *visible)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children in once they enter the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, visible) = use_reveal(props.delay_ms);

    html! {
        <div ref={node} class={classes!("reveal-base", visible.then(|| "is-visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

/// Styles for `Reveal`, included once by the app shell.
pub const REVEAL_CSS: &str = r#"
.reveal-base {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s cubic-bezier(0.2, 0.8, 0.2, 1), transform 0.8s cubic-bezier(0.2, 0.8, 0.2, 1);
}
.reveal-base.is-visible {
    opacity: 1;
    transform: translateY(0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn latch_fires_on_first_sighting_only() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.has_fired());
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.has_fired());
    }

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn cancel_drops_the_pending_handle() {
        let dropped = Rc::new(Cell::new(false));
        let pending = PendingSlot::default();
        let shared = pending.clone();
        shared.set(DropFlag(dropped.clone()));
        assert!(pending.is_pending());

        pending.cancel();
        assert!(dropped.get());
        assert!(!shared.is_pending());
    }

    #[test]
    fn rescheduling_replaces_the_previous_handle() {
        let first = Rc::new(Cell::new(false));
        let pending = PendingSlot::default();
        pending.set(DropFlag(first.clone()));
        pending.set(DropFlag(Rc::new(Cell::new(false))));
        assert!(first.get());
        assert!(pending.is_pending());
    }
}
