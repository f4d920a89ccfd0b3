//! # FOLIO Page Chrome
//!
//! State behind the parts of the page that surround the content:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Header  (scrolled? ─ menu open?)   nav: Skills About ... │
//! ├──────────────────────────────────────────────────────────┤
//! │ Hero    "I'm a <rotating title>"                         │
//! │ Section [hidden] ── scroll ──> [revealed, +index*step ms]│
//! │                                              [ ^ top ]   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is plain data: scroll offsets and timer ticks go in,
//! booleans, class strings and delays come out. The browser layer applies
//! them to the DOM.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod header;
pub mod nav;
pub mod reveal_style;
pub mod rotator;

pub use config::ChromeConfig;
pub use header::{HeaderState, MobileMenu, ScrollToTop};
pub use nav::{active_item, NavItem, NAV_ITEMS};
pub use reveal_style::{stagger_delay_ms, RevealStyle};
pub use rotator::TitleRotator;
