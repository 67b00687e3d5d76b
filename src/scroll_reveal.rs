use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub(crate) const DEFAULT_THRESHOLD: f64 = 0.1;
pub(crate) const DEFAULT_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub(crate) const DEFAULT_DURATION_MS: u32 = 400;

const HIDDEN_CLASS: &str = "opacity-0";
const REVEAL_KEY_ATTR: &str = "data-reveal-key";
const ANIMATION_CLASSES: &[&str] = &[
    "animate-fade-in",
    "animate-fade-out",
    "animate-slide-up",
    "animate-slide-down",
    "animate-scale-in",
    "animate-scale-out",
    "animate-blur-in",
    "animate-blur-out",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnimationVariant {
    Fade,
    SlideUp,
    SlideDown,
    Scale,
    Blur,
}

impl AnimationVariant {
    /// Slide variants share the fade-out exit, matching the stylesheet.
    fn class_for(self, show: bool) -> &'static str {
        match (self, show) {
            (AnimationVariant::Fade, true) => "animate-fade-in",
            (AnimationVariant::SlideUp, true) => "animate-slide-up",
            (AnimationVariant::SlideDown, true) => "animate-slide-down",
            (AnimationVariant::Scale, true) => "animate-scale-in",
            (AnimationVariant::Scale, false) => "animate-scale-out",
            (AnimationVariant::Blur, true) => "animate-blur-in",
            (AnimationVariant::Blur, false) => "animate-blur-out",
            (_, false) => "animate-fade-out",
        }
    }
}

/// Swaps the element's animation classes and resolves once the animation has
/// had time to finish. Callers that do not care about completion can spawn
/// and forget.
pub(crate) async fn apply_animation(
    element: &HtmlElement,
    variant: AnimationVariant,
    show: bool,
    duration_ms: u32,
    delay_ms: u32,
) {
    set_animation_classes(element, variant, show, duration_ms, delay_ms);
    TimeoutFuture::new(duration_ms + delay_ms).await;
}

fn set_animation_classes(
    element: &HtmlElement,
    variant: AnimationVariant,
    show: bool,
    duration_ms: u32,
    delay_ms: u32,
) {
    let class_list = element.class_list();
    for class in ANIMATION_CLASSES {
        let _ = class_list.remove_1(class);
    }
    let style = element.style();
    let _ = style.set_property("animation-duration", &format!("{duration_ms}ms"));
    let _ = style.set_property("animation-delay", &format!("{delay_ms}ms"));
    if show {
        let _ = class_list.remove_1(HIDDEN_CLASS);
    }
    let _ = class_list.add_1(variant.class_for(show));
}

/// One-shot bookkeeping for revealed elements, kept separate from the DOM so
/// the dedup guarantee is testable without a browser.
#[derive(Default)]
pub(crate) struct RevealLedger {
    seen: HashSet<String>,
}

impl RevealLedger {
    /// Returns true only the first time a key is offered.
    pub(crate) fn first_reveal(&mut self, key: &str) -> bool {
        self.seen.insert(key.to_string())
    }
}

/// Watches every element matching a selector and plays the entrance
/// animation exactly once per element, the first time it becomes
/// sufficiently visible. Dropping the handle stops all observation.
pub(crate) struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub(crate) fn observe(
        selector: &str,
        variant: AnimationVariant,
        threshold: f64,
        root_margin: &str,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let ledger = Rc::new(RefCell::new(RevealLedger::default()));
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let key = target.get_attribute(REVEAL_KEY_ATTR).unwrap_or_default();
                    // The browser may queue several entries for the same
                    // element; only the first one animates.
                    if !ledger.borrow_mut().first_reveal(&key) {
                        continue;
                    }
                    let Ok(element) = target.dyn_into::<HtmlElement>() else {
                        continue;
                    };
                    spawn_local(async move {
                        apply_animation(&element, variant, true, DEFAULT_DURATION_MS, 0).await;
                    });
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        let nodes = document.query_selector_all(selector).ok()?;
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            let _ = element.set_attribute(REVEAL_KEY_ATTR, &index.to_string());
            let _ = element.class_list().add_1(HIDDEN_CLASS);
            observer.observe(&element);
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn apply_animation_swaps_classes_and_reveals() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element: HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        let class_list = element.class_list();
        class_list.add_2(HIDDEN_CLASS, "animate-fade-out").unwrap();
        apply_animation(&element, AnimationVariant::SlideUp, true, 10, 0).await;
        assert!(class_list.contains("animate-slide-up"));
        assert!(!class_list.contains(HIDDEN_CLASS));
        assert!(!class_list.contains("animate-fade-out"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_reveals_each_key_once() {
        let mut ledger = RevealLedger::default();
        for _ in 0..4 {
            ledger.first_reveal("0");
            ledger.first_reveal("1");
            ledger.first_reveal("2");
        }
        assert_eq!(ledger.seen.len(), 3);
        assert!(!ledger.first_reveal("1"));
        assert!(ledger.first_reveal("3"));
    }

    #[test]
    fn entrance_classes_match_variants() {
        assert_eq!(AnimationVariant::Fade.class_for(true), "animate-fade-in");
        assert_eq!(AnimationVariant::SlideUp.class_for(true), "animate-slide-up");
        assert_eq!(
            AnimationVariant::SlideDown.class_for(true),
            "animate-slide-down"
        );
        assert_eq!(AnimationVariant::Scale.class_for(true), "animate-scale-in");
        assert_eq!(AnimationVariant::Blur.class_for(true), "animate-blur-in");
    }

    #[test]
    fn exit_classes_fall_back_to_fade_for_slides() {
        assert_eq!(AnimationVariant::Fade.class_for(false), "animate-fade-out");
        assert_eq!(AnimationVariant::SlideUp.class_for(false), "animate-fade-out");
        assert_eq!(
            AnimationVariant::SlideDown.class_for(false),
            "animate-fade-out"
        );
        assert_eq!(AnimationVariant::Scale.class_for(false), "animate-scale-out");
        assert_eq!(AnimationVariant::Blur.class_for(false), "animate-blur-out");
    }
}
