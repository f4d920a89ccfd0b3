//! Particle field and scroll reveal mounts.
//!
//! A mount owns every browser resource it registered (animation frame,
//! listeners, observer). Dropping it, or calling `unmount`, releases them
//! and no callback of that mount runs afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::{
    FrameClock, FrameControl, FrameSlot, FrameTask, FxResult, ParticleAnimation,
    ParticleConfig, ScrollReveal, Threshold,
};
use folio_ui::{stagger_delay_ms, RevealStyle};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, HtmlElement};

use crate::canvas::CanvasSurface;
use crate::dom;
use crate::observer::{IntersectionVisibility, ObservedElement};

/// State shared by the frame chain and the resize listener.
struct FrameChain {
    animation: RefCell<ParticleAnimation<CanvasSurface>>,
    clock: RefCell<FrameClock>,
    slot: RefCell<FrameSlot<AnimationFrame>>,
}

impl FrameChain {
    fn schedule(self: &Rc<Self>) {
        let chain = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            if !chain.slot.borrow_mut().begin_frame() {
                return;
            }
            let dt = chain.clock.borrow_mut().tick(timestamp);
            let control = chain.animation.borrow_mut().frame(dt);
            if control == FrameControl::Continue {
                chain.schedule();
            } else {
                chain.slot.borrow_mut().stop();
            }
        });
        // Dropped on the spot if the chain was stopped meanwhile.
        self.slot.borrow_mut().arm(handle);
    }

    fn fit_to_viewport(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let (width, height) = dom::viewport_size(&window);
        let mut animation = self.animation.borrow_mut();
        animation.surface_mut().set_size(width, height);
        animation.regenerate();
    }
}

/// A particle field running on a canvas.
pub struct MountedParticleField {
    chain: Rc<FrameChain>,
    resize: Option<EventListener>,
}

impl MountedParticleField {
    /// Sizes `canvas` to the viewport, seeds the field and starts the
    /// frame chain.
    ///
    /// # Errors
    ///
    /// [`folio_fx::FxError::SurfaceUnavailable`] without a window or a 2D
    /// context. Nothing is scheduled in that case.
    pub fn mount(canvas: HtmlCanvasElement, config: &ParticleConfig, seed: u64) -> FxResult<Self> {
        let window = dom::window()?;
        let mut surface = CanvasSurface::new(canvas)?;
        let (width, height) = dom::viewport_size(&window);
        surface.set_size(width, height);

        let chain = Rc::new(FrameChain {
            animation: RefCell::new(ParticleAnimation::new(surface, config.clone(), seed)),
            clock: RefCell::new(FrameClock::new()),
            slot: RefCell::new(FrameSlot::new()),
        });

        let on_resize = Rc::clone(&chain);
        let resize = EventListener::new(&window, "resize", move |_event| {
            if on_resize.slot.borrow().is_running() {
                on_resize.fit_to_viewport();
            }
        });

        chain.schedule();
        tracing::info!(
            width,
            height,
            particles = chain.animation.borrow().field().particles().len(),
            "particle field mounted"
        );

        Ok(Self {
            chain,
            resize: Some(resize),
        })
    }

    /// Whether the frame chain is still live.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.chain.slot.borrow().is_running()
    }

    /// Cancels the pending frame and removes the resize listener.
    pub fn unmount(&mut self) {
        let was_running = self.chain.slot.borrow_mut().stop();
        self.resize.take();
        if was_running {
            tracing::debug!("particle field unmounted");
        }
    }
}

impl Drop for MountedParticleField {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// An element that animates in the first time it scrolls into view.
pub struct MountedReveal {
    reveal: ScrollReveal<IntersectionVisibility>,
}

impl MountedReveal {
    /// Applies the hidden classes and starts observing `element`.
    ///
    /// Children get staggered transition delays on reveal when
    /// `stagger_step_ms` is set.
    #[must_use]
    pub fn mount(
        element: Element,
        threshold: Threshold,
        style: RevealStyle,
        stagger_step_ms: Option<u32>,
    ) -> Self {
        dom::swap_classes(&element, style.classes(true), style.classes(false));

        let mut reveal = ScrollReveal::with_threshold(IntersectionVisibility, threshold);
        reveal.register(Some(&ObservedElement(element.clone())));
        reveal.on_reveal(move || {
            if let Some(step) = stagger_step_ms {
                apply_stagger(&element, step);
            }
            dom::swap_classes(&element, style.stale_classes(true), style.classes(true));
        });

        Self { reveal }
    }

    /// Whether the element has been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    /// Stops observing. An unrevealed element stays hidden.
    pub fn unmount(&mut self) {
        self.reveal.register(None);
    }
}

fn apply_stagger(element: &Element, step_ms: u32) {
    let children = element.children();
    for i in 0..children.length() {
        let Some(child) = children.item(i).and_then(|c| c.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let delay = stagger_delay_ms(i, step_ms, true);
        let _ = child
            .style()
            .set_property("transition-delay", &format!("{delay}ms"));
    }
}
