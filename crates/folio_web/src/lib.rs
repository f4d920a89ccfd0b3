//! # FOLIO Web
//!
//! Browser binding for the portfolio effects.
//!
//! ```text
//! start()
//!   ├─ canvas[data-particle-field] ─> CanvasSurface + rAF chain + resize
//!   ├─ [data-reveal]               ─> IntersectionObserver + class swap
//!   └─ header / menu / nav / top   ─> scroll + click listeners, title timer
//! ```
//!
//! Only [`attrs`] compiles on native targets; everything touching the DOM is
//! `wasm32`-only.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod attrs;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod chrome;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod entry;
#[cfg(target_arch = "wasm32")]
pub mod mount;
#[cfg(target_arch = "wasm32")]
pub mod observer;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use chrome::MountedChrome;
#[cfg(target_arch = "wasm32")]
pub use entry::{start, unmount};
#[cfg(target_arch = "wasm32")]
pub use mount::{MountedParticleField, MountedReveal};
#[cfg(target_arch = "wasm32")]
pub use observer::{IntersectionSubscription, IntersectionVisibility, ObservedElement};
