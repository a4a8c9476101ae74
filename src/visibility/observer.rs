use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::regions::{EntryDecision, Region, SeenRegions, VisibilityAction};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches every `Region` element for as long as it is alive.
/// Dropping it disconnects the observer, however many regions fired.
pub struct RegionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RegionObserver {
    pub fn observe(threshold: f64, on_seen: Callback<Region>) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                let target = entry.target();
                let decision = EntryDecision::for_entry(entry.is_intersecting(), &target.id());
                if decision.unobserves() {
                    observer.unobserve(&target);
                }

                match decision {
                    EntryDecision::Reveal(region) => {
                        debug!("Region '{}' entered the viewport", region.id());
                        on_seen.emit(region);
                    }
                    EntryDecision::Unknown => {
                        warn!("Observed element with unknown id '{}'", target.id())
                    }
                    EntryDecision::Wait => {}
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document is not available"))?;

        let mut observed = 0;
        for region in Region::ALL {
            match document.get_element_by_id(region.id()) {
                Some(element) => {
                    observer.observe(&element);
                    observed += 1;
                }
                None => warn!("Region '{}' is not in the document, skipping", region.id()),
            }
        }
        debug!("Observing {} regions at threshold {}", observed, threshold);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RegionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        debug!("Region observer disconnected");
    }
}

/// Tracks which regions have been seen while the calling component is mounted.
#[hook]
pub fn use_region_visibility(threshold: f64) -> UseReducerHandle<SeenRegions> {
    let seen = use_reducer(SeenRegions::default);

    {
        let dispatcher = seen.dispatcher();
        use_effect_with_deps(
            move |threshold| {
                let on_seen = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |region| dispatcher.dispatch(VisibilityAction::Seen(region)))
                };

                let observer = match RegionObserver::observe(*threshold, on_seen) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        // Without an observer nothing would ever fade in.
                        error!("Failed to start region observer: {:?}", e);
                        dispatcher.dispatch(VisibilityAction::RevealAll);
                        None
                    }
                };

                move || drop(observer)
            },
            threshold,
        );
    }

    seen
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Puts one small on-screen element per region (plus one stray id) at the top of the body.
    fn place_regions() -> Element {
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        for id in Region::ALL.iter().map(|r| r.id()).chain(["stray"]) {
            let element = document.create_element("div").unwrap();
            element.set_id(id);
            element.set_attribute("style", "height: 4px;").unwrap();
            root.append_child(&element).unwrap();
        }
        let body = document.body().unwrap();
        body.insert_before(&root, body.first_child().as_ref()).unwrap();
        root
    }

    fn recorder() -> (Rc<RefCell<Vec<Region>>>, Callback<Region>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_seen = {
            let seen = seen.clone();
            Callback::from(move |region| seen.borrow_mut().push(region))
        };
        (seen, on_seen)
    }

    #[wasm_bindgen_test]
    async fn each_visible_region_is_reported_once() {
        let root = place_regions();
        let (seen, on_seen) = recorder();

        let observer = RegionObserver::observe(0.0, on_seen).unwrap();
        TimeoutFuture::new(200).await;

        // Hiding and showing again must not report anything a second time.
        root.set_attribute("style", "display: none;").unwrap();
        TimeoutFuture::new(100).await;
        root.remove_attribute("style").unwrap();
        TimeoutFuture::new(100).await;

        let reported = seen.borrow().clone();
        assert_eq!(reported.len(), Region::ALL.len());
        for region in Region::ALL {
            assert_eq!(reported.iter().filter(|r| **r == region).count(), 1);
        }

        drop(observer);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn dropping_the_observer_stops_reports() {
        let root = place_regions();
        let (seen, on_seen) = recorder();

        let observer = RegionObserver::observe(0.0, on_seen).unwrap();
        drop(observer);
        TimeoutFuture::new(200).await;

        assert!(seen.borrow().is_empty());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn out_of_range_threshold_fails_to_start() {
        let (_, on_seen) = recorder();
        assert!(RegionObserver::observe(2.0, on_seen).is_err());
    }

    #[derive(Properties, PartialEq)]
    struct SeenCountProps {
        threshold: f64,
    }

    #[function_component(SeenCount)]
    fn seen_count(props: &SeenCountProps) -> Html {
        let seen = use_region_visibility(props.threshold);
        html! { <span class="seen-count">{ seen.len().to_string() }</span> }
    }

    async fn render_seen_count(threshold: f64) -> (Element, String) {
        let document = window().unwrap().document().unwrap();
        let mount = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&mount).unwrap();
        yew::Renderer::<SeenCount>::with_root_and_props(mount.clone(), SeenCountProps { threshold })
            .render();
        TimeoutFuture::new(200).await;

        let count = mount
            .query_selector(".seen-count")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap();
        (mount, count)
    }

    #[wasm_bindgen_test]
    async fn hook_tracks_regions_in_the_viewport() {
        let root = place_regions();
        let (mount, count) = render_seen_count(0.0).await;

        assert_eq!(count, Region::ALL.len().to_string());
        mount.remove();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn hook_reveals_everything_when_the_observer_cannot_start() {
        let (mount, count) = render_seen_count(2.0).await;

        assert_eq!(count, Region::ALL.len().to_string());
        mount.remove();
    }
}
