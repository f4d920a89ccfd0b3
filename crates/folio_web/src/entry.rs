//! wasm entry point.

use std::cell::RefCell;

use folio_fx::{FxConfig, FxError};
use folio_ui::ChromeConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::attrs;
use crate::chrome::MountedChrome;
use crate::dom;
use crate::mount::{MountedParticleField, MountedReveal};

const FX_CONFIG: &str = include_str!("../folio.toml");
const CHROME_CONFIG: &str = include_str!("../chrome.toml");

/// Everything mounted on the current page.
struct Page {
    fields: Vec<MountedParticleField>,
    reveals: Vec<MountedReveal>,
    chrome: MountedChrome,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn to_js(err: FxError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn seed() -> u64 {
    getrandom::u64().unwrap_or_else(|err| {
        tracing::warn!(%err, "getrandom failed, seeding from the clock");
        js_sys::Date::now().to_bits()
    })
}

/// Installs logging and mounts every effect found in the document.
///
/// # Errors
///
/// The embedded configuration failed to parse, or there is no document.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let fx = FxConfig::from_toml_str(FX_CONFIG).map_err(to_js)?;
    let chrome_config = ChromeConfig::from_toml_str(CHROME_CONFIG).map_err(to_js)?;
    let window = dom::window().map_err(to_js)?;
    let document = dom::document().map_err(to_js)?;

    let base_seed = seed();
    let mut fields = Vec::new();
    let canvases = dom::query_all(&document, &format!("canvas[{}]", attrs::PARTICLE_FIELD));
    for (i, canvas) in canvases.into_iter().enumerate() {
        let Ok(canvas) = canvas.dyn_into::<HtmlCanvasElement>() else {
            continue;
        };
        match MountedParticleField::mount(canvas, &fx.particles, base_seed.wrapping_add(i as u64)) {
            Ok(field) => fields.push(field),
            // Renders nothing; siblings keep going.
            Err(err) => tracing::warn!(%err, "particle field not mounted"),
        }
    }

    let default_threshold = fx.reveal_threshold();
    let reveals: Vec<_> = dom::query_all(&document, &format!("[{}]", attrs::REVEAL))
        .into_iter()
        .map(|element| {
            let threshold = attrs::threshold(
                element.get_attribute(attrs::REVEAL_THRESHOLD).as_deref(),
                default_threshold,
            );
            let style = attrs::style(element.get_attribute(attrs::REVEAL_STYLE).as_deref());
            let stagger = attrs::stagger_step(
                element.get_attribute(attrs::REVEAL_STAGGER).as_deref(),
                &chrome_config,
            );
            MountedReveal::mount(element, threshold, style, stagger)
        })
        .collect();

    let chrome = MountedChrome::mount(&window, &document, &chrome_config);

    tracing::info!(
        fields = fields.len(),
        reveals = reveals.len(),
        "folio effects mounted"
    );
    PAGE.with(|page| {
        *page.borrow_mut() = Some(Page {
            fields,
            reveals,
            chrome,
        });
    });
    Ok(())
}

/// Tears down every mounted effect. Safe to call more than once.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|page| page.borrow_mut().take());
    if let Some(mut page) = page {
        for field in &mut page.fields {
            field.unmount();
        }
        for reveal in &mut page.reveals {
            reveal.unmount();
        }
        page.chrome.unmount();
        tracing::info!("folio effects unmounted");
    }
}
