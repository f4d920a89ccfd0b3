//! One-shot scroll reveal.
//!
//! A [`ScrollReveal`] watches one element through a [`VisibilityObserver`]
//! and flips to "revealed" the first time the element's visible fraction
//! reaches the threshold. The flip is terminal: observation stops and the
//! element never reads as hidden again, even when scrolled back out.
//!
//! ```text
//!   register(el) ──> observer.observe(el, t, cb)
//!                                  │
//!                    cb(fraction) ─┤ fraction < t  → Continue
//!                                  └ fraction >= t → revealed = true,
//!                                                    fire on_reveal hooks,
//!                                                    Disconnect
//! ```
//!
//! If the observer is unavailable the element is revealed immediately so
//! content is never stuck invisible.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::error::{FxError, FxResult};

/// Visible fraction of an element that triggers a reveal, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    /// 10% of the element on screen.
    pub const DEFAULT: Self = Self(0.1);

    /// Creates a threshold.
    ///
    /// # Errors
    ///
    /// [`FxError::InvalidThreshold`] unless `0 < value <= 1`.
    pub fn new(value: f32) -> FxResult<Self> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(FxError::InvalidThreshold(value))
        }
    }

    /// Raw fraction.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Whether `fraction` is at or above this threshold. NaN never is.
    #[inline]
    #[must_use]
    pub fn is_met_by(self, fraction: f32) -> bool {
        fraction >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What an observer should do after delivering a visibility update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveControl {
    /// Keep delivering updates.
    Continue,
    /// Stop observing this target.
    Disconnect,
}

/// Callback handed to a [`VisibilityObserver`]; receives the visible fraction.
pub type VisibilityCallback = Box<dyn FnMut(f32) -> ObserveControl>;

/// The viewport observation primitive (browser `IntersectionObserver` or a
/// stand-in).
pub trait VisibilityObserver {
    /// Handle to an observable element.
    type Target: Clone + PartialEq;
    /// Owned observation. Dropping it must release the observation.
    type Subscription;

    /// Starts delivering visible-fraction updates for `target`.
    ///
    /// # Errors
    ///
    /// [`FxError::ObserverUnavailable`] when the primitive is missing.
    fn observe(
        &mut self,
        target: &Self::Target,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> FxResult<Self::Subscription>;
}

/// Result of feeding a visibility update to a [`RevealTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealUpdate {
    /// No state change.
    Unchanged,
    /// The element just became revealed.
    Revealed,
}

/// The one-shot hidden → revealed state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    threshold: Threshold,
    revealed: bool,
}

impl RevealTracker {
    /// A hidden tracker.
    #[must_use]
    pub const fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Feeds one visible-fraction sample.
    pub fn update(&mut self, visible_fraction: f32) -> RevealUpdate {
        if self.revealed || !self.threshold.is_met_by(visible_fraction) {
            return RevealUpdate::Unchanged;
        }
        self.revealed = true;
        RevealUpdate::Revealed
    }

    /// Reveals unconditionally (fail-open path).
    pub fn force_reveal(&mut self) -> RevealUpdate {
        if self.revealed {
            return RevealUpdate::Unchanged;
        }
        self.revealed = true;
        RevealUpdate::Revealed
    }

    /// Whether the threshold has ever been reached.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }
}

/// Shared between a [`ScrollReveal`] and the callback it hands out.
struct RevealCell {
    tracker: Cell<RevealTracker>,
    hooks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl RevealCell {
    fn apply(&self, f: impl FnOnce(&mut RevealTracker) -> RevealUpdate) -> RevealUpdate {
        let mut tracker = self.tracker.get();
        let update = f(&mut tracker);
        self.tracker.set(tracker);

        if update == RevealUpdate::Revealed {
            let hooks = std::mem::take(&mut *self.hooks.borrow_mut());
            for hook in hooks {
                hook();
            }
        }
        update
    }

    fn is_revealed(&self) -> bool {
        self.tracker.get().is_revealed()
    }
}

/// Tracks whether one element has ever scrolled into view.
pub struct ScrollReveal<O: VisibilityObserver> {
    observer: O,
    cell: Rc<RevealCell>,
    target: Option<O::Target>,
    subscription: Option<O::Subscription>,
}

impl<O: VisibilityObserver> ScrollReveal<O> {
    /// Creates a reveal with the default 0.1 threshold.
    #[must_use]
    pub fn new(observer: O) -> Self {
        Self::with_threshold(observer, Threshold::DEFAULT)
    }

    /// Creates a reveal with a custom threshold.
    #[must_use]
    pub fn with_threshold(observer: O, threshold: Threshold) -> Self {
        Self {
            observer,
            cell: Rc::new(RevealCell {
                tracker: Cell::new(RevealTracker::new(threshold)),
                hooks: RefCell::new(Vec::new()),
            }),
            target: None,
            subscription: None,
        }
    }

    /// Attaches to `element`, or detaches when `None`.
    ///
    /// Re-registering the current element is a no-op. Registering a
    /// different element releases the previous observation first. Once
    /// revealed no new observation is ever started.
    pub fn register(&mut self, element: Option<&O::Target>) {
        let Some(element) = element else {
            self.release();
            return;
        };
        if self.target.as_ref() == Some(element) {
            return;
        }

        self.release();
        self.target = Some(element.clone());
        if self.is_revealed() {
            return;
        }

        let cell = Rc::clone(&self.cell);
        let callback: VisibilityCallback = Box::new(move |fraction: f32| {
            cell.apply(|tracker| tracker.update(fraction));
            if cell.is_revealed() {
                ObserveControl::Disconnect
            } else {
                ObserveControl::Continue
            }
        });

        let threshold = self.threshold();
        match self.observer.observe(element, threshold, callback) {
            Ok(subscription) => {
                tracing::trace!(threshold = threshold.value(), "reveal observation started");
                self.subscription = Some(subscription);
            }
            Err(err) => {
                tracing::warn!(%err, "visibility observation failed, revealing immediately");
                self.cell.apply(RevealTracker::force_reveal);
            }
        }
    }

    /// Drops the current observation and forgets the element.
    pub fn release(&mut self) {
        if self.subscription.take().is_some() {
            tracing::trace!("reveal observation released");
        }
        self.target = None;
    }

    /// Whether the element has ever crossed the threshold.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.cell.is_revealed()
    }

    /// Whether an observation is live and still waiting for the reveal.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some() && !self.is_revealed()
    }

    /// The threshold in use.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.cell.tracker.get().threshold()
    }

    /// The currently registered element.
    #[must_use]
    pub fn target(&self) -> Option<&O::Target> {
        self.target.as_ref()
    }

    /// Runs `hook` once when the reveal happens, or right now if it already
    /// has.
    pub fn on_reveal(&self, hook: impl FnOnce() + 'static) {
        if self.is_revealed() {
            hook();
        } else {
            self.cell.hooks.borrow_mut().push(Box::new(hook));
        }
    }

    /// The underlying observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

struct ManualEntry<T> {
    id: u64,
    target: T,
    threshold: Threshold,
    callback: VisibilityCallback,
}

struct ManualInner<T> {
    next_id: u64,
    entries: Vec<ManualEntry<T>>,
    /// Ids taken out of `entries` for the dispatch in progress.
    dispatching: Vec<u64>,
    /// Ids whose subscription was dropped while their entry was dispatching.
    cancelled: Vec<u64>,
    invocations: u64,
}

/// An in-process [`VisibilityObserver`] driven by explicit
/// [`ManualObserver::set_visible_fraction`] calls.
///
/// Used for headless rendering and tests. Clones share state.
pub struct ManualObserver<T> {
    inner: Rc<RefCell<ManualInner<T>>>,
}

impl<T> Clone for ManualObserver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq> Default for ManualObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> ManualObserver<T> {
    /// An observer with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualInner {
                next_id: 0,
                entries: Vec::new(),
                dispatching: Vec::new(),
                cancelled: Vec::new(),
                invocations: 0,
            })),
        }
    }

    /// Delivers `fraction` to every live subscription on `target`.
    ///
    /// Returns how many callbacks ran. Callbacks that answer
    /// [`ObserveControl::Disconnect`] are removed.
    pub fn set_visible_fraction(&self, target: &T, fraction: f32) -> usize {
        let dispatch: Vec<ManualEntry<T>> = {
            let mut inner = self.inner.borrow_mut();
            let (matching, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut inner.entries)
                .into_iter()
                .partition(|entry| entry.target == *target);
            inner.entries = rest;
            inner.dispatching.extend(matching.iter().map(|entry| entry.id));
            matching
        };
        let ids: Vec<u64> = dispatch.iter().map(|entry| entry.id).collect();

        let ran = dispatch.len();
        let mut keep = Vec::with_capacity(ran);
        for mut entry in dispatch {
            let control = (entry.callback)(fraction);
            if control == ObserveControl::Continue {
                keep.push(entry);
            }
        }

        let mut inner = self.inner.borrow_mut();
        inner.invocations += ran as u64;
        inner.dispatching.retain(|id| !ids.contains(id));
        let mut cancelled = std::mem::take(&mut inner.cancelled);
        keep.retain(|entry| !cancelled.contains(&entry.id));
        // Cancellations for an outer dispatch still in progress stay queued.
        cancelled.retain(|id| inner.dispatching.contains(id));
        inner.cancelled = cancelled;
        inner.entries.extend(keep);
        ran
    }

    /// Live subscriptions across all targets.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Threshold of the first live subscription on `target`.
    #[must_use]
    pub fn threshold_for(&self, target: &T) -> Option<Threshold> {
        self.inner
            .borrow()
            .entries
            .iter()
            .find(|entry| entry.target == *target)
            .map(|entry| entry.threshold)
    }

    /// Total callback invocations since creation.
    #[must_use]
    pub fn invocation_count(&self) -> u64 {
        self.inner.borrow().invocations
    }
}

/// Releases a [`ManualObserver`] observation on drop.
pub struct ManualSubscription<T> {
    id: u64,
    inner: Weak<RefCell<ManualInner<T>>>,
}

impl<T> Drop for ManualSubscription<T> {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let Ok(mut inner) = inner.try_borrow_mut() else {
            return;
        };
        let before = inner.entries.len();
        inner.entries.retain(|entry| entry.id != self.id);
        if inner.entries.len() == before && inner.dispatching.contains(&self.id) {
            inner.cancelled.push(self.id);
        }
    }
}

impl<T: Clone + PartialEq> VisibilityObserver for ManualObserver<T> {
    type Target = T;
    type Subscription = ManualSubscription<T>;

    fn observe(
        &mut self,
        target: &T,
        threshold: Threshold,
        callback: VisibilityCallback,
    ) -> FxResult<ManualSubscription<T>> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(ManualEntry {
            id,
            target: target.clone(),
            threshold,
            callback,
        });
        Ok(ManualSubscription {
            id,
            inner: Rc::downgrade(&self.inner),
        })
    }
}
