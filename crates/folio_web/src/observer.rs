//! `IntersectionObserver` as a [`VisibilityObserver`].

use folio_fx::reveal::VisibilityCallback;
use folio_fx::{FxError, FxResult, ObserveControl, Threshold, VisibilityObserver};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Browsers report ratios a hair under the threshold they fired for.
const RATIO_SLACK: f32 = 1e-3;

/// A DOM element compared by identity.
#[derive(Debug, Clone)]
pub struct ObservedElement(pub Element);

impl PartialEq for ObservedElement {
    fn eq(&self, other: &Self) -> bool {
        let a: &JsValue = self.0.as_ref();
        let b: &JsValue = other.0.as_ref();
        a == b
    }
}

/// Observation primitive backed by one `IntersectionObserver` per target.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectionVisibility;

/// A live `IntersectionObserver`; disconnects on drop.
pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityObserver for IntersectionVisibility {
    type Target = ObservedElement;
    type Subscription = IntersectionSubscription;

    fn observe(
        &mut self,
        target: &ObservedElement,
        threshold: Threshold,
        mut callback: VisibilityCallback,
    ) -> FxResult<IntersectionSubscription> {
        let supported = web_sys::window()
            .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
            .unwrap_or(false);
        if !supported {
            return Err(FxError::ObserverUnavailable(
                "IntersectionObserver not supported".to_owned(),
            ));
        }

        let t = threshold.value();
        let closure = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    #[allow(clippy::cast_possible_truncation)]
                    let mut ratio = entry.intersection_ratio() as f32;
                    // Also applies to the initial callback on observe, so an
                    // element sitting just under the threshold reveals at once.
                    if entry.is_intersecting() && ratio < t && t - ratio <= RATIO_SLACK {
                        ratio = t;
                    }
                    if callback(ratio) == ObserveControl::Disconnect {
                        observer.disconnect();
                        return;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(f64::from(t)));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                .map_err(|e| FxError::ObserverUnavailable(format!("{e:?}")))?;
        observer.observe(&target.0);

        Ok(IntersectionSubscription {
            observer,
            _callback: closure,
        })
    }
}
