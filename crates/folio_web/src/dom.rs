//! Small DOM helpers shared by the mounts.

use folio_fx::{FxError, FxResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::attrs::class_tokens;

/// The global window.
///
/// # Errors
///
/// [`FxError::SurfaceUnavailable`] outside a browser window context.
pub fn window() -> FxResult<Window> {
    web_sys::window().ok_or_else(|| FxError::SurfaceUnavailable("no window".to_owned()))
}

/// The window's document.
///
/// # Errors
///
/// As [`window`], or when the window has no document.
pub fn document() -> FxResult<Document> {
    window()?
        .document()
        .ok_or_else(|| FxError::SurfaceUnavailable("no document".to_owned()))
}

/// Every element matching `selector`, in document order.
#[must_use]
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        tracing::warn!(selector, "invalid selector");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The first element matching `selector`.
#[must_use]
pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Viewport size in CSS pixels.
///
/// Mounts use it unscaled as the canvas backing size, so one surface pixel
/// is one CSS pixel.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn viewport_size(window: &Window) -> (u32, u32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v > 0.0)
            .map_or(0, |v| v as u32)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Vertical scroll offset, `0.0` if unavailable.
#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Replaces one space-separated class set with another.
pub fn swap_classes(element: &Element, remove: &str, add: &str) {
    let list = element.class_list();
    for class in class_tokens(remove) {
        let _ = list.remove_1(class);
    }
    for class in class_tokens(add) {
        let _ = list.add_1(class);
    }
}

/// Adds or removes a single class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}
