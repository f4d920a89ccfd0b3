//! Header, menu, navigation, scroll-to-top and hero title wiring.
//!
//! Elements are located by marker attributes; any that are missing are
//! skipped.
//!
//! | Selector                | Behaviour                                      |
//! |-------------------------|------------------------------------------------|
//! | `[data-header]`         | `is-scrolled` past the header offset           |
//! | `[data-menu-toggle]`    | click toggles `is-open` on `[data-menu]`       |
//! | `[data-menu] a`         | click closes the menu                          |
//! | `[data-nav-path]`       | `is-active` when it matches the current route  |
//! | `[data-scroll-top]`     | `is-visible` past the offset, click scrolls up |
//! | `[data-hero-title]`     | text rotates through the configured titles     |

use std::cell::RefCell;
use std::rc::Rc;

use folio_ui::{ChromeConfig, HeaderState, MobileMenu, ScrollToTop, TitleRotator, NAV_ITEMS};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::dom;

const SCROLLED: &str = "is-scrolled";
const OPEN: &str = "is-open";
const ACTIVE: &str = "is-active";
const VISIBLE: &str = "is-visible";

struct ChromeState {
    header: HeaderState,
    menu: MobileMenu,
    scroll_top: ScrollToTop,
    rotator: TitleRotator,
}

struct ChromeElements {
    header: Option<Element>,
    menu: Option<Element>,
    scroll_top: Option<Element>,
    hero_title: Option<Element>,
}

impl ChromeElements {
    fn apply_scroll(&self, state: &mut ChromeState, y: f64) {
        if state.header.on_scroll(y) {
            if let Some(header) = &self.header {
                dom::set_class(header, SCROLLED, state.header.is_scrolled());
            }
        }
        if state.scroll_top.on_scroll(y) {
            if let Some(button) = &self.scroll_top {
                dom::set_class(button, VISIBLE, state.scroll_top.is_visible());
            }
        }
    }

    fn apply_menu(&self, state: &ChromeState) {
        if let Some(menu) = &self.menu {
            dom::set_class(menu, OPEN, state.menu.is_open());
        }
    }
}

/// Live page chrome. Dropping it removes every listener and the timer.
pub struct MountedChrome {
    listeners: Vec<EventListener>,
    rotation: Option<Interval>,
}

impl MountedChrome {
    /// Finds the chrome elements in `document` and wires them up.
    #[must_use]
    pub fn mount(window: &Window, document: &Document, config: &ChromeConfig) -> Self {
        let elements = Rc::new(ChromeElements {
            header: dom::query(document, "[data-header]"),
            menu: dom::query(document, "[data-menu]"),
            scroll_top: dom::query(document, "[data-scroll-top]"),
            hero_title: dom::query(document, "[data-hero-title]"),
        });
        let state = Rc::new(RefCell::new(ChromeState {
            header: HeaderState::new(config.header_offset),
            menu: MobileMenu::default(),
            scroll_top: ScrollToTop::new(config.scroll_top_offset),
            rotator: TitleRotator::new(config.titles.clone(), config.rotation_ms),
        }));

        let mut listeners = Vec::new();

        // Initial paint for a page restored mid-scroll.
        elements.apply_scroll(&mut state.borrow_mut(), dom::scroll_y(window));
        {
            let (elements, state, win) = (Rc::clone(&elements), Rc::clone(&state), window.clone());
            listeners.push(EventListener::new(window, "scroll", move |_event| {
                elements.apply_scroll(&mut state.borrow_mut(), dom::scroll_y(&win));
            }));
        }

        if let Some(toggle) = dom::query(document, "[data-menu-toggle]") {
            let (elements, state) = (Rc::clone(&elements), Rc::clone(&state));
            listeners.push(EventListener::new(&toggle, "click", move |_event| {
                let mut state = state.borrow_mut();
                state.menu.toggle();
                elements.apply_menu(&state);
            }));
        }

        if let Some(menu) = &elements.menu {
            let (elements, state) = (Rc::clone(&elements), Rc::clone(&state));
            listeners.push(EventListener::new(menu, "click", move |event: &Event| {
                if !clicked_link(event) {
                    return;
                }
                let mut state = state.borrow_mut();
                state.menu.close();
                elements.apply_menu(&state);
            }));
        }

        if let Some(button) = &elements.scroll_top {
            let win = window.clone();
            listeners.push(EventListener::new(button, "click", move |_event| {
                win.scroll_to_with_x_and_y(0.0, 0.0);
            }));
        }

        mark_active_nav(window, document);

        let rotation = elements.hero_title.as_ref().map(|title| {
            title.set_text_content(state.borrow().rotator.current());
            let (title, state) = (title.clone(), Rc::clone(&state));
            let period = state.borrow().rotator.period_ms();
            let millis = u32::try_from(period).unwrap_or(u32::MAX);
            Interval::new(millis, move || {
                let mut state = state.borrow_mut();
                if state.rotator.advance(period) {
                    title.set_text_content(state.rotator.current());
                }
            })
        });

        tracing::debug!(
            listeners = listeners.len(),
            rotating = rotation.is_some(),
            "page chrome mounted"
        );
        Self {
            listeners,
            rotation,
        }
    }

    /// Removes every listener and stops the title timer.
    pub fn unmount(&mut self) {
        self.listeners.clear();
        self.rotation.take();
    }
}

fn clicked_link(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

fn mark_active_nav(window: &Window, document: &Document) {
    let Ok(current) = window.location().pathname() else {
        return;
    };
    for link in dom::query_all(document, "[data-nav-path]") {
        let Some(path) = link.get_attribute("data-nav-path") else {
            continue;
        };
        let active = NAV_ITEMS
            .iter()
            .find(|item| item.path == path)
            .map_or(current == path, |item| item.is_active(&current));
        dom::set_class(&link, ACTIVE, active);
    }
}
