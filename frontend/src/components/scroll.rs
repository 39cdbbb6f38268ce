use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};
use yew::prelude::*;

/// How far an element has travelled through the viewport: 0 when its top
/// enters at the bottom, 1 once its bottom leaves at the top.
pub fn scroll_progress(viewport_height: f64, rect_top: f64, rect_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// Fraction of the whole document scrolled past.
pub fn page_scroll_fraction(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Runs `on_scroll` now and on every window scroll until unmount. The
/// listener is passive.
fn listen_to_scroll(on_scroll: impl Fn() + 'static) -> impl FnOnce() + 'static {
    let callback = Closure::wrap(Box::new(move || on_scroll()) as Box<dyn FnMut()>);
    let window = web_sys::window();
    if let Some(window) = &window {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        );
    }
    let _ = callback
        .as_ref()
        .unchecked_ref::<web_sys::js_sys::Function>()
        .call0(&wasm_bindgen::JsValue::NULL);
    move || {
        if let Some(window) = window {
            let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    }
}

/// Document scroll as a 0..=1 fraction, for progress bars.
#[hook]
pub fn use_page_scroll_fraction() -> f64 {
    let fraction = use_state(|| 0.0_f64);
    {
        let fraction = fraction.clone();
        use_effect_with_deps(
            move |_| {
                listen_to_scroll(move || {
                    let Some(window) = web_sys::window() else { return };
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let height = window
                        .document()
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_height() as f64)
                        .unwrap_or(0.0);
                    fraction.set(page_scroll_fraction(scroll_y, height, viewport));
                })
            },
            (),
        );
    }
    *fraction
}

/// Whether the window has been scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |bits| {
                let threshold = f64::from_bits(*bits);
                listen_to_scroll(move || {
                    if let Some(window) = web_sys::window() {
                        scrolled.set(window.scroll_y().unwrap_or(0.0) > threshold);
                    }
                })
            },
            threshold.to_bits(),
        );
    }
    *scrolled
}

/// Scrolls the window back to the top whenever `key` changes.
#[hook]
pub fn use_scroll_to_top<K: PartialEq + 'static>(key: K) {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        key,
    );
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Exposes its own scroll progress as the `--scroll-progress` CSS variable,
/// which parallax layers inside use in their transforms.
#[function_component(ScrollProgress)]
pub fn scroll_progress_container(props: &ScrollProgressProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                listen_to_scroll(move || {
                    let Some(element) = node.cast::<HtmlElement>() else { return };
                    let viewport = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let rect = element.get_bounding_client_rect();
                    let progress = scroll_progress(viewport, rect.top(), rect.height());
                    let _ = element
                        .style()
                        .set_property("--scroll-progress", &progress.to_string());
                })
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_from_entry_to_exit() {
        // element just below the fold
        assert_eq!(scroll_progress(800.0, 800.0, 400.0), 0.0);
        // element fully scrolled out the top
        assert_eq!(scroll_progress(800.0, -400.0, 400.0), 1.0);
        assert_eq!(scroll_progress(800.0, 200.0, 400.0), 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(800.0, 2000.0, 100.0), 0.0);
        assert_eq!(scroll_progress(800.0, -5000.0, 100.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn page_fraction_handles_short_pages() {
        assert_eq!(page_scroll_fraction(0.0, 600.0, 800.0), 0.0);
        assert_eq!(page_scroll_fraction(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(page_scroll_fraction(5000.0, 2000.0, 800.0), 1.0);
    }
}
