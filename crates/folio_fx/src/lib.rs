//! # FOLIO FX
//!
//! The two animation utilities behind the portfolio pages:
//! - **ScrollReveal**: one-shot, threshold-based visibility tracking
//! - **ParticleField**: a full-bleed field of drifting, bouncing points
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FOLIO FX                              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  VisibilityObserver ──> ScrollReveal ──> on_reveal hooks     │
//! │                                                              │
//! │  FrameTask driver ──> ParticleAnimation ──> DrawSurface      │
//! │   (rAF / interval)      step + render        (canvas / rec)  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here touches the browser. Platform glue implements
//! [`VisibilityObserver`] and [`DrawSurface`] and drives frames.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod frame;
pub mod particles;
pub mod reveal;
pub mod style;
pub mod surface;

pub use config::{FrameConfig, FxConfig, ParticleConfig, RevealConfig};
pub use error::{FxError, FxResult};
pub use frame::{FixedIntervalLoop, FrameClock, FrameControl, FrameSlot, FrameStats, FrameTask};
pub use particles::{particle_count, Particle, ParticleAnimation, ParticleField};
pub use reveal::{
    ManualObserver, ObserveControl, RevealTracker, RevealUpdate, ScrollReveal, Threshold,
    VisibilityObserver,
};
pub use style::Color;
pub use surface::{CommandBuffer, DrawCommand, DrawSurface};
